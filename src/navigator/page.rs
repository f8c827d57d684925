use std::time::Duration;

/// Meta tag carrying the 1-based index of the current slide.
pub const SLIDE_NUMBER_META: &str = "slide-number";

/// Optional button toggling fullscreen.
pub const FULLSCREEN_BUTTON_ID: &str = "fullscreenBtn";

/// Optional element whose text mirrors the fullscreen state.
pub const FULLSCREEN_ICON_ID: &str = "fullscreenIcon";

/// Icon text while in fullscreen.
pub const GLYPH_EXIT_FULLSCREEN: &str = "✕";

/// Icon text while windowed.
pub const GLYPH_ENTER_FULLSCREEN: &str = "⛶";

/// File name of slide `n`: `slide-01.html`, `slide-02.html`, ...
pub fn slide_href(n: u32) -> String {
    format!("slide-{n:02}.html")
}

/// The document a navigator is attached to.
///
/// Implementations must tolerate missing elements: every method is a
/// no-op (or `None`/`false`) when the target is absent.
pub trait Page {
    /// Content of `<meta name="{name}">`.
    fn meta(&self, name: &str) -> Option<String>;

    fn has_element(&self, id: &str) -> bool;

    /// Replace the text content of element `id`.
    fn set_text(&mut self, id: &str, text: &str);

    fn set_body_opacity(&mut self, opacity: f32);

    /// Navigate the browser to `href` once `delay` has elapsed.
    fn redirect_after(&mut self, href: &str, delay: Duration);

    fn is_fullscreen(&self) -> bool;

    /// Ask for fullscreen on the document root.
    fn request_fullscreen(&mut self);

    fn exit_fullscreen(&mut self);

    /// Add `<link rel="prefetch" href="{href}">` to the head.
    fn prefetch(&mut self, href: &str);

    fn console(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_href_padding() {
        assert_eq!(slide_href(1), "slide-01.html");
        assert_eq!(slide_href(9), "slide-09.html");
        assert_eq!(slide_href(10), "slide-10.html");
        assert_eq!(slide_href(123), "slide-123.html");
    }
}
