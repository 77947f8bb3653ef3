//! Command handlers for the `cinema` binary.

mod catalog;
#[cfg(feature = "gemini")]
mod generate;
mod guide;
mod prompt;

pub use catalog::show_catalog;
#[cfg(feature = "gemini")]
pub use generate::generate_shot;
pub use guide::show_guide;
pub use prompt::show_prompt;
