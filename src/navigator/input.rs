//! Mapping from raw input to navigation intents.

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Previous,
    Next,
    First,
    Last,
    ToggleFullscreen,
}

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Home,
    End,
    /// `f` or `F`
    Fullscreen,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Option<Self> {
        let key = match key {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            " " => Self::Space,
            "Enter" => Self::Enter,
            "Home" => Self::Home,
            "End" => Self::End,
            "f" | "F" => Self::Fullscreen,
            _ => return None,
        };
        Some(key)
    }

    pub const fn intent(self) -> Intent {
        match self {
            Self::ArrowLeft => Intent::Previous,
            Self::ArrowRight | Self::Space | Self::Enter => Intent::Next,
            Self::Home => Intent::First,
            Self::End => Intent::Last,
            Self::Fullscreen => Intent::ToggleFullscreen,
        }
    }
}

/// Horizontal swipe detection between touch-start and touch-end.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: f64,
}

impl SwipeTracker {
    pub fn start(&mut self, screen_x: f64) {
        self.start_x = screen_x;
    }

    /// Finish a touch. Travel beyond `threshold` to the left means next,
    /// to the right means previous.
    pub fn end(&mut self, screen_x: f64, threshold: f64) -> Option<Intent> {
        let diff = self.start_x - screen_x;
        if diff.abs() <= threshold {
            None
        } else if diff > 0.0 {
            Some(Intent::Next)
        } else {
            Some(Intent::Previous)
        }
    }
}

/// Whether a touch-move should have its default action suppressed.
///
/// Blocks pinch-zoom: any gesture with more than one contact point.
pub const fn blocks_touch_move(touches: usize) -> bool {
    touches > 1
}
