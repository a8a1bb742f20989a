//! Instruction preambles sent ahead of the user's text.

/// Worked example embedded in the architecture instruction.
macro_rules! example_diagram {
    () => {
        "graph TD;\n    A[User] --> B(Web App);\n    B --> C{API Gateway};\n    C --> D[User Service];\n    C --> E[Data Service];\n    D --> F[(Database)];\n    E --> F;"
    };
}

/// Instruction for rewriting a raw idea into a detailed prompt.
pub const ENHANCE_INSTRUCTION: &str = "You are an expert prompt engineer. Take the user's idea and rephrase it into a clear, detailed, and professional prompt suitable for an AI system architect. Focus on core features, user roles, and technology preferences if mentioned.";

/// Instruction for producing a Mermaid architecture diagram.
pub const ARCHITECTURE_INSTRUCTION: &str = concat!(
    "You are an expert software architect who ONLY responds with Mermaid.js code. ",
    "Your task is to create a logical system architecture diagram based on the user's idea. ",
    "Follow these rules STRICTLY:\n",
    "1. The diagram MUST start with 'graph TD;'.\n",
    "2. Use simple node shapes: `id[Text]` for rectangles, `id(Text)` for rounded rectangles, and `id{Text}` for diamonds.\n",
    "3. Use '-->' for arrows.\n",
    "4. DO NOT use any markdown like ```mermaid or ```. Do not add ANY explanatory text or titles.\n",
    "5. The output must be ONLY the raw Mermaid code and nothing else.\n\n",
    "Here is a perfect example of output:\n",
    example_diagram!()
);

/// The example diagram on its own, used as a canned fallback.
pub const EXAMPLE_DIAGRAM: &str = example_diagram!();

/// Header every generated diagram must begin with.
pub const MERMAID_HEADER: &str = "graph TD;";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_instruction_ends_with_example() {
        assert!(ARCHITECTURE_INSTRUCTION.ends_with(EXAMPLE_DIAGRAM));
        assert!(ARCHITECTURE_INSTRUCTION.contains("MUST start with 'graph TD;'"));
    }

    #[test]
    fn test_example_starts_with_header() {
        assert!(EXAMPLE_DIAGRAM.starts_with(MERMAID_HEADER));
    }
}
