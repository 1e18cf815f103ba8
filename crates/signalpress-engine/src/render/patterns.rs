//! Regex rewrite strategy.
//!
//! Ordered global find/replace passes over the whole text, then
//! [`unwrap_blocks`] to undo the paragraph wrapping those passes put around
//! block elements. Pass order matters: fences before inline code, longer
//! emphasis markers before shorter ones, images before links.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::HtmlRenderer;

/// Marks a stashed code block body while the other passes run.
const STASH: char = '\u{1A}';

/// Dependency-free converter built from regex passes.
///
/// Text is never escaped; this strategy only suits trusted sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRenderer;

impl HtmlRenderer for PatternRenderer {
    fn name(&self) -> &'static str {
        "patterns"
    }

    fn render(&self, markdown: &str) -> String {
        let p = passes();
        // Marker bytes in the source could otherwise pull a stashed body in.
        let normalized = markdown.replace("\r\n", "\n").replace(STASH, "");

        let mut stash: Vec<String> = vec![];
        let mut html = p
            .fence
            .replace_all(&normalized, |caps: &Captures| {
                stash.push(caps[2].to_string());
                format!(
                    "<pre><code class=\"language-{}\">{STASH}{}{STASH}</code></pre>",
                    &caps[1],
                    stash.len() - 1
                )
            })
            .into_owned();

        for (re, replacement) in &p.rewrites {
            html = re.replace_all(&html, *replacement).into_owned();
        }

        let html = html.replace("\n\n", "</p><p>").replace('\n', "<br />");
        let html = unwrap_blocks(&format!("<p>{html}</p>"));

        p.stashed
            .replace_all(&html, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| stash.get(i))
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// Removes paragraph wrapping around block elements.
///
/// Expects the shape produced by the rewrite passes: one outer `<p>…</p>`,
/// `</p><p>` at blank lines and `<br />` at single line breaks. Afterwards no
/// heading, `pre`, blockquote, rule or list sits inside a `<p>`, and every run
/// of `<li>` items is wrapped in a single `<ul>`.
pub fn unwrap_blocks(html: &str) -> String {
    let c = cleanup();

    let html = html.replace("</li><br /><li>", "</li><li>");
    let html = c.list_run.replace_all(&html, "<ul>${0}</ul>");
    let html = c.break_before_block.replace_all(&html, "</p>${1}");
    let html = c.break_after_block.replace_all(&html, "${1}<p>");
    let html = c.leading_breaks.replace_all(&html, "<p>");
    let html = c.trailing_breaks.replace_all(&html, "</p>");
    let html = c.empty_paragraph.replace_all(&html, "");
    let html = c.open_wrap.replace_all(&html, "${1}");
    c.close_wrap.replace_all(&html, "${1}").into_owned()
}

struct Passes {
    fence: Regex,
    rewrites: Vec<(Regex, &'static str)>,
    stashed: Regex,
}

struct Cleanup {
    list_run: Regex,
    break_before_block: Regex,
    break_after_block: Regex,
    leading_breaks: Regex,
    trailing_breaks: Regex,
    empty_paragraph: Regex,
    open_wrap: Regex,
    close_wrap: Regex,
}

const BLOCK_OPEN: &str = r"(<h[1-6]>|<pre>|<blockquote>|<hr />|<ul>)";
const BLOCK_CLOSE: &str = r"(</h[1-6]>|</pre>|</blockquote>|<hr />|</ul>)";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid built-in pattern")
}

fn passes() -> &'static Passes {
    static PASSES: OnceLock<Passes> = OnceLock::new();
    PASSES.get_or_init(|| Passes {
        fence: compile(r"(?s)```(\w*)\n(.*?)\n?```"),
        rewrites: vec![
            (compile(r"(?m)^### (.+)$"), "<h3>${1}</h3>"),
            (compile(r"(?m)^## (.+)$"), "<h2>${1}</h2>"),
            (compile(r"(?m)^# (.+)$"), "<h1>${1}</h1>"),
            (compile(r"\*\*\*(.+?)\*\*\*"), "<strong><em>${1}</em></strong>"),
            (compile(r"\*\*(.+?)\*\*"), "<strong>${1}</strong>"),
            (compile(r"\*(.+?)\*"), "<em>${1}</em>"),
            (compile(r"`(.+?)`"), "<code>${1}</code>"),
            (compile(r"!\[([^\]]*)\]\(([^)]+)\)"), "<img src=\"${2}\" alt=\"${1}\" />"),
            (compile(r"\[([^\]]+)\]\(([^)]+)\)"), "<a href=\"${2}\">${1}</a>"),
            (compile(r"(?m)^---$"), "<hr />"),
            (compile(r"(?m)^> (.+)$"), "<blockquote>${1}</blockquote>"),
            (compile(r"(?m)^- (.+)$"), "<li>${1}</li>"),
        ],
        stashed: compile(r"\x1A(\d+)\x1A"),
    })
}

fn cleanup() -> &'static Cleanup {
    static CLEANUP: OnceLock<Cleanup> = OnceLock::new();
    CLEANUP.get_or_init(|| Cleanup {
        list_run: compile(r"(?:<li>.*?</li>)+"),
        break_before_block: compile(&format!("<br />{BLOCK_OPEN}")),
        break_after_block: compile(&format!("{BLOCK_CLOSE}<br />")),
        leading_breaks: compile(r"<p>(?:<br />)+"),
        trailing_breaks: compile(r"(?:<br />)+</p>"),
        empty_paragraph: compile(r"<p>\s*</p>"),
        open_wrap: compile(&format!("<p>{BLOCK_OPEN}")),
        close_wrap: compile(&format!("{BLOCK_CLOSE}</p>")),
    })
}
