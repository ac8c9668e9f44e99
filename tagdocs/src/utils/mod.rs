pub mod markdown;

pub use crate::utils::markdown::{BuildSummary, process_markdown_files};
