//! HTML minification for deck pages.
//!
//! Two profiles share the `minify_html` backend:
//! - index page: collapse whitespace and drop comments only
//! - slide pages: additionally minify embedded `<style>` and `<script>`
//!
//! Both keep closing tags and the `<html>`/`<head>` opening tags so the
//! output stays structurally complete.

use crate::config::SiteConfig;
use std::borrow::Cow;

// ============================================================================
// Types
// ============================================================================

/// Page kind for minification.
pub enum MinifyType<'a> {
    /// Landing page
    Index(&'a [u8]),
    /// Slide page, after tag substitutions
    Slide(&'a [u8]),
}

// ============================================================================
// Unified Minify Function
// ============================================================================

/// Minify content based on page kind and config.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    match (config.build.minify, content) {
        (false, MinifyType::Index(html) | MinifyType::Slide(html)) => Cow::Borrowed(html),
        (true, MinifyType::Index(html)) => Cow::Owned(minify_html_inner(html, false)),
        (true, MinifyType::Slide(html)) => Cow::Owned(minify_html_inner(html, true)),
    }
}

// ============================================================================
// Internal Implementation
// ============================================================================

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8], embedded: bool) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = embedded;
    cfg.minify_js = embedded;
    minify_html::minify(html, &cfg)
}

// ============================================================================
// Tests
// ============================================================================
