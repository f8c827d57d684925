//! `nav` command: replay input against a slide page.
//!
//! Loads the page into a [`MemoryPage`], attaches a [`Navigator`] and feeds
//! it the given events, logging every page effect they cause.

use crate::{
    config::SiteConfig,
    log,
    navigator::{Effect, MemoryPage, Navigator},
};
use anyhow::{Context, Result};
use std::{fs, path::Path, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NavError {
    #[error("unknown event `{0}`")]
    UnknownEvent(String),

    #[error("invalid swipe `{0}`, expected swipe:<start_x>:<end_x>")]
    InvalidSwipe(String),
}

/// One simulated input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `keydown` with a DOM key value
    Key(String),
    /// `touchstart` at the first x, `touchend` at the second
    Swipe(f64, f64),
    /// Two-finger `touchmove`
    Pinch,
    /// Click on the fullscreen button
    Click,
    FullscreenChange,
}

impl FromStr for Event {
    type Err = NavError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let event = match token {
            "ArrowLeft" | "ArrowRight" | "Enter" | "Home" | "End" | "f" | "F" => {
                Self::Key(token.to_owned())
            }
            "Space" => Self::Key(" ".to_owned()),
            "pinch" => Self::Pinch,
            "click" => Self::Click,
            "fullscreenchange" => Self::FullscreenChange,
            _ => match token.strip_prefix("swipe:") {
                Some(coords) => parse_swipe(coords)
                    .ok_or_else(|| NavError::InvalidSwipe(token.to_owned()))?,
                None => return Err(NavError::UnknownEvent(token.to_owned())),
            },
        };
        Ok(event)
    }
}

fn parse_swipe(coords: &str) -> Option<Event> {
    let (start, end) = coords.split_once(':')?;
    Some(Event::Swipe(start.parse().ok()?, end.parse().ok()?))
}

/// Run the `nav` command.
pub fn simulate_page(config: &SiteConfig, page_path: &Path, events: &[String]) -> Result<()> {
    let events = events
        .iter()
        .map(|token| token.parse::<Event>())
        .collect::<Result<Vec<_>, _>>()?;

    let html = fs::read_to_string(page_path)
        .with_context(|| format!("Failed to read {}", page_path.display()))?;
    let mut page = MemoryPage::from_html(&html);

    let nav = replay(&mut page, config, &events, |event, prevented, effects| {
        let label = event.map_or_else(|| "init".to_owned(), |e| format!("{e:?}"));
        let mut parts: Vec<_> = effects.iter().map(describe).collect();
        if prevented {
            parts.insert(0, "default prevented".to_owned());
        }
        if parts.is_empty() {
            parts.push("no effect".to_owned());
        }
        log!("nav"; "{label}: {}", parts.join(", "));
    });

    log!(
        "nav"; "slide {} of {}, {}",
        nav.current(),
        nav.total(),
        if nav.is_transitioning() { "transitioning" } else { "idle" }
    );
    Ok(())
}

/// Attach a navigator to `page` and feed it `events`.
///
/// `on_step` sees each event (`None` for initialization), whether its
/// default action was prevented, and the effects it produced.
pub fn replay(
    page: &mut MemoryPage,
    config: &SiteConfig,
    events: &[Event],
    mut on_step: impl FnMut(Option<&Event>, bool, &[Effect]),
) -> Navigator {
    let mut nav = Navigator::init(page, &config.nav);
    on_step(None, false, page.take_effects().as_slice());

    for event in events {
        let prevented = match event {
            Event::Key(key) => nav.key_down(page, key),
            Event::Swipe(start, end) => {
                nav.touch_start(*start);
                nav.touch_end(page, *end);
                false
            }
            Event::Pinch => nav.touch_move(2),
            Event::Click => {
                nav.fullscreen_button_clicked(page);
                false
            }
            Event::FullscreenChange => {
                nav.fullscreen_changed(page);
                false
            }
        };
        on_step(Some(event), prevented, page.take_effects().as_slice());
    }

    nav
}

fn describe(effect: &Effect) -> String {
    match effect {
        Effect::Opacity(opacity) => format!("opacity {opacity}"),
        Effect::Redirect { href, delay } => {
            format!("redirect to {href} in {}ms", delay.as_millis())
        }
        Effect::RequestFullscreen => "enter fullscreen".to_owned(),
        Effect::ExitFullscreen => "exit fullscreen".to_owned(),
        Effect::Text(id, text) => format!("#{id} = {text}"),
        Effect::Prefetch(href) => format!("prefetch {href}"),
        Effect::Console(message) => format!("console: {message}"),
    }
}
