use std::sync::OnceLock;

use regex::Regex;

struct SlugPatterns {
    disallowed: Regex,
    whitespace: Regex,
    dashes: Regex,
}

fn patterns() -> &'static SlugPatterns {
    static PATTERNS: OnceLock<SlugPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| SlugPatterns {
        disallowed: Regex::new(r"[^a-z0-9_\s-]").expect("Invalid slug pattern"),
        whitespace: Regex::new(r"\s+").expect("Invalid slug pattern"),
        dashes: Regex::new(r"-+").expect("Invalid slug pattern"),
    })
}

/// Turns an article title into a URL-safe file stem.
///
/// Lowercases, drops everything but ASCII word characters, whitespace and
/// dashes, then collapses whitespace and dash runs into single dashes.
pub fn slugify(title: &str) -> String {
    let p = patterns();
    let lowered = title.trim().to_lowercase();
    let kept = p.disallowed.replace_all(&lowered, "");
    let dashed = p.whitespace.replace_all(kept.trim(), "-");
    p.dashes.replace_all(&dashed, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello World", "hello-world")]
    #[case("  Rust & WebAssembly: 2024!  ", "rust-webassembly-2024")]
    #[case("already-a-slug", "already-a-slug")]
    #[case("dash -- and  space", "dash-and-space")]
    #[case("snake_case stays", "snake_case-stays")]
    #[case("Café au lait", "caf-au-lait")]
    #[case("", "")]
    fn slugs(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(slugify(title), expected);
    }
}
