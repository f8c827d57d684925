//! Critical CSS minification.
//!
//! A fixed chain of text rewrites, no CSS parsing. Only correct for CSS
//! without string literals containing `{ } : ; ,` (e.g. `content: "a;b"`
//! gets its inner spacing changed).

use regex::Regex;
use std::sync::LazyLock;

/// `/* ... */`, across lines.
static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Any whitespace run.
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Whitespace around a punctuation character, captured for reinsertion.
static RE_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*([{}:;,])\s*").unwrap());

/// Minify a CSS block for inlining into a `<style>` tag.
pub fn minify_css(css: &str) -> String {
    let css = RE_COMMENT.replace_all(css, "");
    let css = RE_WHITESPACE.replace_all(&css, " ");
    let css = RE_PUNCT.replace_all(&css, "$1");
    css.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css_strips_comments_and_spacing() {
        let css = "/* header */\nbody  {\n    color : #fff ;\n    margin:0\n}\n/* footer\n   multi-line */\n";
        let result = minify_css(css);

        assert_eq!(result, "body{color:#fff;margin:0}");
        assert!(!result.contains("/*"));
        assert!(!result.contains("*/"));
        assert!(!result.contains(" {"));
        assert!(!result.contains(": "));
    }

    #[test]
    fn test_minify_css_commas_and_selectors() {
        let css = "h1 ,  h2 { font-family: 'Inter' , sans-serif; }";
        assert_eq!(minify_css(css), "h1,h2{font-family:'Inter',sans-serif;}");
    }

    #[test]
    fn test_minify_css_keeps_value_spaces() {
        let css = ".fade-in { animation: fadeIn 0.8s ease forwards; }";
        assert_eq!(minify_css(css), ".fade-in{animation:fadeIn 0.8s ease forwards;}");
    }

    #[test]
    fn test_minify_css_nested_at_rule() {
        let css = "@keyframes fadeIn {\n  to { opacity: 1; }\n}";
        assert_eq!(minify_css(css), "@keyframes fadeIn{to{opacity:1;}}");
    }

    #[test]
    fn test_minify_css_empty_and_comment_only() {
        assert_eq!(minify_css(""), "");
        assert_eq!(minify_css("  /* nothing */  "), "");
    }

    #[test]
    fn test_minify_css_string_literal_limitation() {
        // String contents are rewritten like everything else
        let css = r#"a::after { content: "x ; y"; }"#;
        assert_eq!(minify_css(css), r#"a::after{content:"x;y";}"#);
    }

    #[test]
    fn test_minify_builtin_critical_css() {
        let css = crate::config::SiteConfig::default().critical_css().unwrap();
        let result = minify_css(&css);

        assert!(result.starts_with(":root{--color-black:#000000;"));
        assert!(result.contains("*{margin:0;padding:0;box-sizing:border-box;}"));
        assert!(!result.contains('\n'));
        assert!(!result.contains("/*"));
    }
}
