//! Tag substitutions applied to slide pages before minification.
//!
//! Every rule is a literal match on the exact tag the slide pages are
//! written with. Only the first occurrence is replaced, and a page that
//! lacks the tag is left as is.
//!
//! ```text
//! <link rel="stylesheet" href="../css/styles.css">
//!     → <style>{critical}</style> + preload link + <noscript> fallback
//! <link rel="stylesheet" href="../css/animations.css">
//!     → preload link
//! <script src="../js/slide-navigation.js"></script>
//!     → <script src="../js/slide-navigation.js" defer></script>
//! ```

use crate::config::BuildConfig;
use crate::utils::css::minify_css;

/// Swaps a preloaded stylesheet in once it has arrived.
const PRELOAD_SWAP: &str = "this.onload=null;this.rel='stylesheet'";

/// One literal match-and-replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule {
    /// Replace the first occurrence of the pattern, if any.
    fn apply(&self, html: &mut String) -> bool {
        match html.find(&self.pattern) {
            Some(start) => {
                html.replace_range(start..start + self.pattern.len(), &self.replacement);
                true
            }
            None => false,
        }
    }
}

/// Ordered substitution rules for slide pages.
#[derive(Debug, Clone)]
pub struct Inliner {
    rules: Vec<Rule>,
}

impl Inliner {
    /// Build the rule set from config and the (unminified) critical CSS.
    pub fn new(build: &BuildConfig, critical_css: &str) -> Self {
        let inline = &build.inline;
        let critical = minify_css(critical_css);

        let primary = Rule {
            pattern: stylesheet_tag(&inline.stylesheet),
            replacement: format!(
                "<style>{critical}</style>\n{}\n<noscript>{}</noscript>",
                preload_tag(&inline.stylesheet),
                stylesheet_tag(&inline.stylesheet),
            ),
        };

        let lazy = inline.lazy_stylesheets.iter().map(|href| Rule {
            pattern: stylesheet_tag(href),
            replacement: preload_tag(href),
        });

        let deferred = inline.defer_scripts.iter().map(|src| Rule {
            pattern: format!(r#"<script src="{src}"></script>"#),
            replacement: format!(r#"<script src="{src}" defer></script>"#),
        });

        let rules = std::iter::once(primary).chain(lazy).chain(deferred).collect();
        Self { rules }
    }

    /// Apply every rule in order; returns how many matched.
    pub fn apply(&self, html: &mut String) -> usize {
        self.rules.iter().filter(|rule| rule.apply(html)).count()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

fn stylesheet_tag(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{href}">"#)
}

fn preload_tag(href: &str) -> String {
    format!(r#"<link rel="preload" href="{href}" as="style" onload="{PRELOAD_SWAP}">"#)
}
