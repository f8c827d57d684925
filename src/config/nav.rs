//! `[nav]` section configuration.
//!
//! Settings shared by every page's navigator: deck size, valid jump
//! targets and input tuning.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, time::Duration};

/// `[nav]` section in slidedeck.toml - slide navigator settings.
///
/// # Example
/// ```toml
/// [nav]
/// total = 4
/// slides = [1, 2, 3, 4]   # Valid direct-jump targets (default: 1..=total)
/// swipe_threshold = 50.0  # Pixels
/// transition_ms = 300
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NavConfig {
    /// Number of slides in the deck.
    #[serde(default = "defaults::nav::total")]
    #[educe(Default = defaults::nav::total())]
    pub total: u32,

    /// Slides reachable by a direct jump.
    #[serde(default = "defaults::nav::slides", skip_serializing_if = "Option::is_none")]
    #[educe(Default = defaults::nav::slides())]
    pub slides: Option<Vec<u32>>,

    /// Slide assumed when a page has no usable `slide-number` meta tag.
    #[serde(default = "defaults::nav::fallback")]
    #[educe(Default = defaults::nav::fallback())]
    pub fallback: u32,

    /// Minimum horizontal travel (px) for a touch to count as a swipe.
    #[serde(default = "defaults::nav::swipe_threshold")]
    #[educe(Default = defaults::nav::swipe_threshold())]
    pub swipe_threshold: f64,

    /// Fade-out time before the redirect.
    #[serde(default = "defaults::nav::transition_ms")]
    #[educe(Default = defaults::nav::transition_ms())]
    pub transition_ms: u64,
}

/// Slides reachable by a direct jump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideSet {
    /// Every slide in `1..=total`
    All(u32),
    Listed(BTreeSet<u32>),
}

impl SlideSet {
    pub fn contains(&self, slide: u32) -> bool {
        match self {
            Self::All(total) => (1..=*total).contains(&slide),
            Self::Listed(slides) => slides.contains(&slide),
        }
    }
}

impl NavConfig {
    /// Valid jump targets, `1..=total` unless listed explicitly.
    pub fn available_slides(&self) -> SlideSet {
        match &self.slides {
            Some(slides) => SlideSet::Listed(slides.iter().copied().collect()),
            None => SlideSet::All(self.total),
        }
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
