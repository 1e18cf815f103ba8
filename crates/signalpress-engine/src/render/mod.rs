//! # Rendering
//!
//! Interchangeable markdown-to-HTML strategies behind one contract, and the
//! [`Pipeline`] that runs table repair in front of the chosen strategy.
//!
//! ## Strategies
//!
//! - **`commonmark`**: delegates to `pulldown-cmark` (default)
//! - **`blocks`**: parses into typed block/inline nodes and writes HTML from them
//! - **`patterns`**: ordered regex rewrite passes plus a block-unwrapping pass
//!
//! Output is trusted HTML: unless `escape_html` is set, text is emitted as-is
//! on the assumption that the authoring workspace is controlled.

pub mod blocks;
pub mod commonmark;
pub mod patterns;

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::repair::repair_table_rows;

pub use blocks::BlockRenderer;
pub use commonmark::CommonMarkRenderer;
pub use patterns::PatternRenderer;

/// One way of turning markdown into an HTML fragment.
///
/// Implementations are pure and hold no per-call state, so one renderer can
/// serve many threads at once.
pub trait HtmlRenderer: Send + Sync {
    /// Short name used in logs and configuration.
    fn name(&self) -> &'static str;

    /// Converts markdown to HTML. Never fails; unknown syntax passes through.
    fn render(&self, markdown: &str) -> String;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("Unknown rendering strategy '{0}' (expected commonmark, blocks or patterns)")]
    UnknownStrategy(String),
    #[error("The {0} strategy cannot escape HTML; use blocks or commonmark")]
    EscapingUnsupported(Strategy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    CommonMark,
    Blocks,
    Patterns,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::CommonMark, Strategy::Blocks, Strategy::Patterns];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::CommonMark => "commonmark",
            Strategy::Blocks => "blocks",
            Strategy::Patterns => "patterns",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RenderError::UnknownStrategy(s.to_string()))
    }
}

/// Everything a conversion depends on, passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    pub strategy: Strategy,
    /// Rejoin table rows broken across lines before rendering.
    pub repair_tables: bool,
    /// Escape text and attributes instead of trusting the source.
    pub escape_html: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            repair_tables: true,
            escape_html: false,
        }
    }
}

/// Table repair followed by one rendering strategy.
pub struct Pipeline {
    options: PipelineOptions,
    renderer: Box<dyn HtmlRenderer>,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Result<Self, RenderError> {
        let renderer: Box<dyn HtmlRenderer> = match options.strategy {
            Strategy::CommonMark => Box::new(CommonMarkRenderer::new(options.escape_html)),
            Strategy::Blocks => Box::new(BlockRenderer::new(options.escape_html)),
            Strategy::Patterns if options.escape_html => {
                return Err(RenderError::EscapingUnsupported(Strategy::Patterns));
            }
            Strategy::Patterns => Box::new(PatternRenderer),
        };
        Ok(Self { options, renderer })
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Converts one article's markdown to HTML.
    pub fn convert(&self, markdown: &str) -> String {
        let source = if self.options.repair_tables {
            Cow::Owned(repair_table_rows(markdown))
        } else {
            Cow::Borrowed(markdown)
        };
        log::debug!(
            "rendering {} bytes of markdown with the {} strategy",
            source.len(),
            self.renderer.name()
        );
        self.renderer.render(&source)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            options: PipelineOptions::default(),
            renderer: Box::new(CommonMarkRenderer::new(false)),
        }
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("options", &self.options)
            .field("renderer", &self.renderer.name())
            .finish()
    }
}

/// Repairs and renders `markdown` with the default pipeline.
pub fn markdown_to_html(markdown: &str) -> String {
    Pipeline::default().convert(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("commonmark", Strategy::CommonMark)]
    #[case("blocks", Strategy::Blocks)]
    #[case("Patterns", Strategy::Patterns)]
    #[case(" blocks ", Strategy::Blocks)]
    fn parses_strategy_names(#[case] name: &str, #[case] expected: Strategy) {
        assert_eq!(name.parse::<Strategy>(), Ok(expected));
    }

    #[test]
    fn unknown_strategy_is_an_error() {
        assert_eq!(
            "regex".parse::<Strategy>(),
            Err(RenderError::UnknownStrategy("regex".to_string()))
        );
    }

    #[test]
    fn strategy_display_round_trips() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn defaults_repair_without_escaping() {
        let options = PipelineOptions::default();
        assert_eq!(options.strategy, Strategy::CommonMark);
        assert!(options.repair_tables);
        assert!(!options.escape_html);
    }

    #[test]
    fn patterns_cannot_escape() {
        let err = Pipeline::new(PipelineOptions {
            strategy: Strategy::Patterns,
            escape_html: true,
            ..PipelineOptions::default()
        })
        .unwrap_err();
        assert_eq!(err, RenderError::EscapingUnsupported(Strategy::Patterns));
        assert_eq!(
            err.to_string(),
            "The patterns strategy cannot escape HTML; use blocks or commonmark"
        );
    }

    #[rstest]
    fn every_strategy_builds(#[values(Strategy::CommonMark, Strategy::Blocks, Strategy::Patterns)] strategy: Strategy) {
        let pipeline = Pipeline::new(PipelineOptions {
            strategy,
            ..PipelineOptions::default()
        })
        .unwrap();
        assert_eq!(pipeline.options().strategy, strategy);
        assert!(format!("{pipeline:?}").contains(strategy.as_str()));
    }

    #[test]
    fn repair_runs_before_rendering() {
        let md = "| A | B |\n| --- | --- |\n| 1 | two\n words |";
        let pipeline = Pipeline::new(PipelineOptions {
            strategy: Strategy::Blocks,
            ..PipelineOptions::default()
        })
        .unwrap();
        assert!(pipeline.convert(md).contains("<td>two words</td>"));
    }

    #[test]
    fn repair_can_be_disabled() {
        let md = "| A | B |\n| --- | --- |\n| 1 | two\n words |";
        let pipeline = Pipeline::new(PipelineOptions {
            strategy: Strategy::Blocks,
            repair_tables: false,
            escape_html: false,
        })
        .unwrap();
        let html = pipeline.convert(md);
        assert!(!html.contains("two words"));
        assert!(html.contains("<p>| 1 | two<br /> words |</p>"));
    }

    #[test]
    fn convenience_uses_commonmark() {
        assert_eq!(markdown_to_html("Hello **world**"), "<p>Hello <strong>world</strong></p>\n");
    }
}
