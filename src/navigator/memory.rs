//! In-memory page host.
//!
//! Stands in for the browser: meta tags and element ids are discovered by
//! pattern matching on the page source, and every call the navigator makes
//! is recorded as an [`Effect`] instead of touching a real document.

use super::page::Page;
use regex::Regex;
use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
    time::Duration,
};

/// `<meta name="..." content="...">`, attributes in this order.
static RE_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<meta\s+name\s*=\s*["']([^"']+)["']\s+content\s*=\s*["']([^"']*)["']"#).unwrap()
});

/// `id="..."` on any element.
static RE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sid\s*=\s*["']([^"']+)["']"#).unwrap());

/// A page mutation requested by the navigator.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Opacity(f32),
    Redirect { href: String, delay: Duration },
    RequestFullscreen,
    ExitFullscreen,
    /// Element id, new text
    Text(String, String),
    Prefetch(String),
    Console(String),
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    metas: HashMap<String, String>,
    elements: HashSet<String>,
    fullscreen: bool,
    effects: Vec<Effect>,
}

impl MemoryPage {
    /// Load meta tags and element ids from HTML source.
    pub fn from_html(html: &str) -> Self {
        let metas = RE_META
            .captures_iter(html)
            .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
            .collect();
        let elements = RE_ID
            .captures_iter(html)
            .map(|caps| caps[1].to_owned())
            .collect();

        Self {
            metas,
            elements,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn set_meta(&mut self, name: &str, content: &str) {
        self.metas.insert(name.to_owned(), content.to_owned());
    }

    #[cfg(test)]
    pub fn add_element(&mut self, id: &str) {
        self.elements.insert(id.to_owned());
    }

    /// Drain the effects recorded so far.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Redirect targets among the pending effects.
    #[cfg(test)]
    pub fn redirects(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Redirect { href, .. } => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Prefetch hints among the pending effects.
    #[cfg(test)]
    pub fn prefetched(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Prefetch(href) => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Page for MemoryPage {
    fn meta(&self, name: &str) -> Option<String> {
        self.metas.get(name).cloned()
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if self.has_element(id) {
            self.effects.push(Effect::Text(id.to_owned(), text.to_owned()));
        }
    }

    fn set_body_opacity(&mut self, opacity: f32) {
        self.effects.push(Effect::Opacity(opacity));
    }

    fn redirect_after(&mut self, href: &str, delay: Duration) {
        self.effects.push(Effect::Redirect {
            href: href.to_owned(),
            delay,
        });
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) {
        self.fullscreen = true;
        self.effects.push(Effect::RequestFullscreen);
    }

    fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
        self.effects.push(Effect::ExitFullscreen);
    }

    fn prefetch(&mut self, href: &str) {
        self.effects.push(Effect::Prefetch(href.to_owned()));
    }

    fn console(&mut self, message: &str) {
        self.effects.push(Effect::Console(message.to_owned()));
    }
}
