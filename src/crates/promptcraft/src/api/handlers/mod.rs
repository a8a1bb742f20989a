//! API request handlers

pub mod health;
pub mod process;

pub use health::health;
pub use process::{enhance, process_prompt};
