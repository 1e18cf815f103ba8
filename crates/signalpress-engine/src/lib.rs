pub mod parsing;
pub mod render;
pub mod repair;
pub mod slug;

// Re-export key types for easier usage
pub use render::{
    BlockRenderer, CommonMarkRenderer, HtmlRenderer, PatternRenderer, Pipeline, PipelineOptions,
    RenderError, Strategy, markdown_to_html, patterns::unwrap_blocks,
};
pub use repair::{repair_lines, repair_table_rows};
pub use slug::slugify;
