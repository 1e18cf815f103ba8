use pulldown_cmark::{Event, Options, Parser, html};

use super::HtmlRenderer;

/// Delegates to `pulldown-cmark` with GFM tables and strikethrough.
///
/// The engine output is returned unmodified. With escaping enabled, raw HTML
/// in the source is turned into text before it reaches the HTML writer.
#[derive(Debug, Clone, Copy)]
pub struct CommonMarkRenderer {
    options: Options,
    escape: bool,
}

impl CommonMarkRenderer {
    pub fn new(escape: bool) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self { options, escape }
    }
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl HtmlRenderer for CommonMarkRenderer {
    fn name(&self) -> &'static str {
        "commonmark"
    }

    fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
        if self.escape {
            html::push_html(
                &mut out,
                parser.map(|event| match event {
                    Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                    other => other,
                }),
            );
        } else {
            html::push_html(&mut out, parser);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(md: &str) -> String {
        CommonMarkRenderer::default().render(md)
    }

    #[test]
    fn strong_in_paragraph() {
        assert_eq!(
            render("Hello **world**"),
            "<p>Hello <strong>world</strong></p>\n"
        );
    }

    #[test]
    fn heading_then_body() {
        assert_eq!(
            render("# Title\n\nBody text."),
            "<h1>Title</h1>\n<p>Body text.</p>\n"
        );
    }

    #[test]
    fn lone_rule() {
        assert_eq!(render("---"), "<hr />\n");
    }

    #[test]
    fn fenced_code() {
        assert_eq!(
            render("```lang\ncode\n```"),
            "<pre><code class=\"language-lang\">code\n</code></pre>\n"
        );
    }

    #[test]
    fn one_list_per_run() {
        let html = render("- a\n- b");
        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn image_then_link() {
        assert_eq!(
            render("![alt](a.png)[text](b.com)"),
            "<p><img src=\"a.png\" alt=\"alt\" /><a href=\"b.com\">text</a></p>\n"
        );
    }

    #[test]
    fn tables_are_enabled() {
        let html = render("| A | B |\n| --- | --- |\n| 1 | two words |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>two words</td>"));
    }

    #[test]
    fn strikethrough_is_enabled() {
        assert_eq!(render("~~gone~~"), "<p><del>gone</del></p>\n");
    }

    #[test]
    fn raw_html_passes_through_by_default() {
        assert_eq!(render("a <b>b</b>"), "<p>a <b>b</b></p>\n");
    }

    #[test]
    fn escaping_turns_raw_html_into_text() {
        let html = CommonMarkRenderer::new(true).render("a <b>b</b>");
        assert_eq!(html, "<p>a &lt;b&gt;b&lt;/b&gt;</p>\n");
    }
}
