use super::input::{Intent, Key, SwipeTracker, blocks_touch_move};
use super::page::{
    FULLSCREEN_BUTTON_ID, FULLSCREEN_ICON_ID, GLYPH_ENTER_FULLSCREEN, GLYPH_EXIT_FULLSCREEN,
    Page, SLIDE_NUMBER_META, slide_href,
};
use crate::config::{NavConfig, SlideSet};
use std::time::Duration;

/// Navigation phase of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A redirect has been scheduled; the page is fading out.
    Transitioning,
}

/// Per-page navigation state.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: u32,
    total: u32,
    phase: Phase,
    available: SlideSet,
    swipe: SwipeTracker,
    swipe_threshold: f64,
    delay: Duration,
    fullscreen_button: bool,
}

impl Navigator {
    /// Navigator for slide `current`, without touching any page.
    ///
    /// `current` outside `1..=total` falls back to `config.fallback`.
    pub fn new(config: &NavConfig, current: u32) -> Self {
        let current = if (1..=config.total).contains(&current) {
            current
        } else {
            config.fallback
        };

        Self {
            current,
            total: config.total,
            phase: Phase::Idle,
            available: config.available_slides(),
            swipe: SwipeTracker::default(),
            swipe_threshold: config.swipe_threshold,
            delay: config.transition_delay(),
            fullscreen_button: false,
        }
    }

    /// Attach to a loaded page.
    ///
    /// Reads the slide number from the page, detects the fullscreen button
    /// and prefetches the neighbouring slides.
    pub fn init(page: &mut impl Page, config: &NavConfig) -> Self {
        let current = page
            .meta(SLIDE_NUMBER_META)
            .and_then(|content| parse_slide_number(&content))
            .unwrap_or(config.fallback);

        let mut nav = Self::new(config, current);
        nav.fullscreen_button = page.has_element(FULLSCREEN_BUTTON_ID);
        nav.prefetch_adjacent(page);
        page.console(&format!("slide {} of {} loaded", nav.current, nav.total));
        nav
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn total(&self) -> u32 {
        self.total
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    // ========================================================================
    // Input handlers
    // ========================================================================

    /// Handle a `keydown`. Returns `true` when the key's default action
    /// must be prevented.
    pub fn key_down(&mut self, page: &mut impl Page, key: &str) -> bool {
        if self.is_transitioning() {
            return false;
        }
        match Key::from_dom(key) {
            Some(key) => {
                self.dispatch(page, key.intent());
                true
            }
            None => false,
        }
    }

    pub fn touch_start(&mut self, screen_x: f64) {
        self.swipe.start(screen_x);
    }

    pub fn touch_end(&mut self, page: &mut impl Page, screen_x: f64) {
        let intent = self.swipe.end(screen_x, self.swipe_threshold);
        if self.is_transitioning() {
            return;
        }
        if let Some(intent) = intent {
            self.dispatch(page, intent);
        }
    }

    /// Handle a `touchmove`. Returns `true` when the default action
    /// (pinch-zoom) must be prevented.
    pub fn touch_move(&self, touches: usize) -> bool {
        blocks_touch_move(touches)
    }

    /// Click on the fullscreen button; ignored when the page has none.
    pub fn fullscreen_button_clicked(&mut self, page: &mut impl Page) {
        if self.fullscreen_button {
            self.toggle_fullscreen(page);
        }
    }

    /// Handle a `fullscreenchange`: mirror the state in the icon.
    pub fn fullscreen_changed(&self, page: &mut impl Page) {
        if !page.has_element(FULLSCREEN_ICON_ID) {
            return;
        }
        let glyph = if page.is_fullscreen() {
            GLYPH_EXIT_FULLSCREEN
        } else {
            GLYPH_ENTER_FULLSCREEN
        };
        page.set_text(FULLSCREEN_ICON_ID, glyph);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn dispatch(&mut self, page: &mut impl Page, intent: Intent) {
        match intent {
            Intent::Previous => self.previous(page),
            Intent::Next => self.next(page),
            Intent::First => self.go_to(page, 1),
            Intent::Last => self.go_to(page, self.total),
            Intent::ToggleFullscreen => self.toggle_fullscreen(page),
        }
    }

    pub fn next(&mut self, page: &mut impl Page) {
        if let Some(target) = self.current.checked_add(1).filter(|t| *t <= self.total) {
            self.navigate(page, target);
        }
    }

    pub fn previous(&mut self, page: &mut impl Page) {
        if self.current > 1 {
            self.navigate(page, self.current - 1);
        }
    }

    /// Jump to `slide` if it is one of the configured slides.
    pub fn go_to(&mut self, page: &mut impl Page, slide: u32) {
        if self.available.contains(slide) {
            self.navigate(page, slide);
        }
    }

    /// Fade out and schedule the redirect to `slide`.
    ///
    /// No-op while transitioning or when `slide` is outside `1..=total`.
    pub fn navigate(&mut self, page: &mut impl Page, slide: u32) {
        if self.is_transitioning() || !(1..=self.total).contains(&slide) {
            return;
        }
        self.phase = Phase::Transitioning;
        page.set_body_opacity(0.0);
        page.redirect_after(&slide_href(slide), self.delay);
    }

    pub fn toggle_fullscreen(&self, page: &mut impl Page) {
        if page.is_fullscreen() {
            page.exit_fullscreen();
        } else {
            page.request_fullscreen();
        }
    }

    /// Prefetch hints for the previous and next slides that exist.
    fn prefetch_adjacent(&self, page: &mut impl Page) {
        if self.current > 1 {
            page.prefetch(&slide_href(self.current - 1));
        }
        if self.current < self.total {
            page.prefetch(&slide_href(self.current + 1));
        }
    }
}

/// Leading decimal digits of a `slide-number` value, so `"2abc"` and
/// `"2.0"` both read as 2.
fn parse_slide_number(content: &str) -> Option<u32> {
    let content = content.trim_start();
    let content = content.strip_prefix('+').unwrap_or(content);
    let end = content
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(content.len());
    content[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::{Effect, MemoryPage};

    fn config() -> NavConfig {
        NavConfig::default()
    }

    fn page_on(slide: u32) -> MemoryPage {
        let mut page = MemoryPage::default();
        page.set_meta(SLIDE_NUMBER_META, &slide.to_string());
        page
    }

    /// Initialized navigator with the init effects cleared.
    fn nav_on(slide: u32) -> (Navigator, MemoryPage) {
        let mut page = page_on(slide);
        let nav = Navigator::init(&mut page, &config());
        page.take_effects();
        (nav, page)
    }

    fn redirect(slide: u32) -> Effect {
        Effect::Redirect {
            href: slide_href(slide),
            delay: Duration::from_millis(300),
        }
    }

    #[test]
    fn test_init_reads_meta_and_prefetches() {
        let mut page = page_on(2);
        let nav = Navigator::init(&mut page, &config());

        assert_eq!(nav.current(), 2);
        assert_eq!(nav.total(), 4);
        assert_eq!(nav.phase(), Phase::Idle);
        assert_eq!(
            page.take_effects(),
            vec![
                Effect::Prefetch("slide-01.html".into()),
                Effect::Prefetch("slide-03.html".into()),
                Effect::Console("slide 2 of 4 loaded".into()),
            ]
        );
    }

    #[test]
    fn test_init_prefetch_at_edges() {
        let mut page = page_on(1);
        Navigator::init(&mut page, &config());
        assert_eq!(page.prefetched(), vec!["slide-02.html"]);

        let mut page = page_on(4);
        Navigator::init(&mut page, &config());
        assert_eq!(page.prefetched(), vec!["slide-03.html"]);
    }

    #[test]
    fn test_init_without_meta_uses_fallback() {
        let mut page = MemoryPage::default();
        let nav = Navigator::init(&mut page, &config());
        assert_eq!(nav.current(), 1);

        let mut page = MemoryPage::default();
        page.set_meta(SLIDE_NUMBER_META, "three");
        assert_eq!(Navigator::init(&mut page, &config()).current(), 1);

        let mut page = page_on(12);
        assert_eq!(Navigator::init(&mut page, &config()).current(), 1);
    }

    #[test]
    fn test_parse_slide_number_leading_digits() {
        assert_eq!(parse_slide_number("3"), Some(3));
        assert_eq!(parse_slide_number(" 2abc"), Some(2));
        assert_eq!(parse_slide_number("2.0"), Some(2));
        assert_eq!(parse_slide_number("+4"), Some(4));
        assert_eq!(parse_slide_number("abc"), None);
        assert_eq!(parse_slide_number("-2"), None);
        assert_eq!(parse_slide_number(""), None);

        let mut page = MemoryPage::default();
        page.set_meta(SLIDE_NUMBER_META, "3rd");
        assert_eq!(Navigator::init(&mut page, &config()).current(), 3);
    }

    #[test]
    fn test_next_on_last_of_largest_deck() {
        let mut cfg = config();
        cfg.total = u32::MAX;
        cfg.slides = Some(vec![1]);
        let mut page = MemoryPage::default();
        let mut nav = Navigator::new(&cfg, u32::MAX);

        nav.next(&mut page);
        assert_eq!(nav.phase(), Phase::Idle);
        assert!(page.take_effects().is_empty());

        nav.previous(&mut page);
        assert_eq!(page.redirects(), vec![slide_href(u32::MAX - 1)]);
    }

    #[test]
    fn test_go_to_every_valid_slide() {
        for target in 1..=4 {
            let (mut nav, mut page) = nav_on(2);
            nav.go_to(&mut page, target);

            assert!(nav.is_transitioning());
            assert_eq!(
                page.take_effects(),
                vec![Effect::Opacity(0.0), redirect(target)]
            );
        }
    }

    #[test]
    fn test_go_to_unlisted_slide_is_dropped() {
        let mut cfg = config();
        cfg.slides = Some(vec![1, 2, 4]);
        let mut page = page_on(1);
        let mut nav = Navigator::init(&mut page, &cfg);
        page.take_effects();

        nav.go_to(&mut page, 3);
        nav.go_to(&mut page, 0);
        nav.go_to(&mut page, 5);
        assert_eq!(nav.phase(), Phase::Idle);
        assert!(page.take_effects().is_empty());

        nav.go_to(&mut page, 4);
        assert_eq!(page.redirects(), vec!["slide-04.html"]);
    }

    #[test]
    fn test_out_of_range_steps_are_dropped() {
        let (mut nav, mut page) = nav_on(1);
        nav.previous(&mut page);
        assert_eq!(nav.phase(), Phase::Idle);
        assert!(page.take_effects().is_empty());

        let (mut nav, mut page) = nav_on(4);
        nav.next(&mut page);
        assert_eq!(nav.phase(), Phase::Idle);
        assert!(page.take_effects().is_empty());

        let (mut nav, mut page) = nav_on(2);
        nav.navigate(&mut page, 0);
        nav.navigate(&mut page, 5);
        assert_eq!(nav.phase(), Phase::Idle);
        assert!(page.take_effects().is_empty());
    }

    #[test]
    fn test_steps_within_range() {
        let (mut nav, mut page) = nav_on(2);
        nav.next(&mut page);
        assert_eq!(page.redirects(), vec!["slide-03.html"]);

        let (mut nav, mut page) = nav_on(2);
        nav.previous(&mut page);
        assert_eq!(page.redirects(), vec!["slide-01.html"]);
    }

    #[test]
    fn test_requests_while_transitioning_are_ignored() {
        let (mut nav, mut page) = nav_on(2);
        nav.next(&mut page);
        page.take_effects();

        nav.next(&mut page);
        nav.previous(&mut page);
        nav.go_to(&mut page, 4);
        nav.navigate(&mut page, 1);
        assert!(!nav.key_down(&mut page, "ArrowLeft"));
        nav.touch_start(400.0);
        nav.touch_end(&mut page, 0.0);

        assert!(nav.is_transitioning());
        assert!(page.take_effects().is_empty());
    }

    #[test]
    fn test_key_dispatch() {
        let cases = [
            ("ArrowLeft", Some("slide-02.html")),
            ("ArrowRight", Some("slide-04.html")),
            (" ", Some("slide-04.html")),
            ("Enter", Some("slide-04.html")),
            ("Home", Some("slide-01.html")),
            ("End", Some("slide-04.html")),
        ];
        for (key, expected) in cases {
            let (mut nav, mut page) = nav_on(3);
            assert!(nav.key_down(&mut page, key), "{key:?} not handled");
            assert_eq!(page.redirects().first().copied(), expected, "{key:?}");
        }
    }

    #[test]
    fn test_unhandled_key_keeps_default() {
        let (mut nav, mut page) = nav_on(3);
        assert!(!nav.key_down(&mut page, "ArrowUp"));
        assert!(!nav.key_down(&mut page, "a"));
        assert!(page.take_effects().is_empty());
    }

    #[test]
    fn test_handled_key_at_edge_still_prevents_default() {
        let (mut nav, mut page) = nav_on(4);
        assert!(nav.key_down(&mut page, "ArrowRight"));
        assert!(page.take_effects().is_empty());
    }

    #[test]
    fn test_fullscreen_key_toggles() {
        let (mut nav, mut page) = nav_on(1);
        assert!(nav.key_down(&mut page, "f"));
        assert!(page.is_fullscreen());
        assert!(nav.key_down(&mut page, "F"));
        assert!(!page.is_fullscreen());
        assert_eq!(
            page.take_effects(),
            vec![Effect::RequestFullscreen, Effect::ExitFullscreen]
        );
        assert_eq!(nav.phase(), Phase::Idle);
    }

    #[test]
    fn test_swipe_navigation() {
        let (mut nav, mut page) = nav_on(2);
        nav.touch_start(100.0);
        nav.touch_end(&mut page, 150.0);
        assert!(page.take_effects().is_empty());

        nav.touch_start(300.0);
        nav.touch_end(&mut page, 249.0);
        assert_eq!(page.redirects(), vec!["slide-03.html"]);

        let (mut nav, mut page) = nav_on(2);
        nav.touch_start(100.0);
        nav.touch_end(&mut page, 151.0);
        assert_eq!(page.redirects(), vec!["slide-01.html"]);
    }

    #[test]
    fn test_custom_swipe_threshold_and_delay() {
        let mut cfg = config();
        cfg.swipe_threshold = 120.0;
        cfg.transition_ms = 50;
        let mut page = page_on(2);
        let mut nav = Navigator::init(&mut page, &cfg);
        page.take_effects();

        nav.touch_start(300.0);
        nav.touch_end(&mut page, 200.0);
        assert!(page.take_effects().is_empty());

        nav.touch_start(300.0);
        nav.touch_end(&mut page, 100.0);
        assert_eq!(
            page.take_effects(),
            vec![
                Effect::Opacity(0.0),
                Effect::Redirect {
                    href: "slide-03.html".into(),
                    delay: Duration::from_millis(50),
                }
            ]
        );
    }

    #[test]
    fn test_touch_move_guard() {
        let (nav, _) = nav_on(1);
        assert!(!nav.touch_move(1));
        assert!(nav.touch_move(2));
    }

    #[test]
    fn test_fullscreen_button_requires_element() {
        let (mut nav, mut page) = nav_on(1);
        nav.fullscreen_button_clicked(&mut page);
        assert!(page.take_effects().is_empty());

        let mut page = page_on(1);
        page.add_element(FULLSCREEN_BUTTON_ID);
        let mut nav = Navigator::init(&mut page, &config());
        page.take_effects();
        nav.fullscreen_button_clicked(&mut page);
        assert_eq!(page.take_effects(), vec![Effect::RequestFullscreen]);
    }

    #[test]
    fn test_fullscreen_icon_follows_state() {
        let mut page = page_on(1);
        page.add_element(FULLSCREEN_ICON_ID);
        let nav = Navigator::init(&mut page, &config());
        page.take_effects();

        nav.toggle_fullscreen(&mut page);
        nav.fullscreen_changed(&mut page);
        nav.toggle_fullscreen(&mut page);
        nav.fullscreen_changed(&mut page);

        assert_eq!(
            page.take_effects(),
            vec![
                Effect::RequestFullscreen,
                Effect::Text(FULLSCREEN_ICON_ID.into(), GLYPH_EXIT_FULLSCREEN.into()),
                Effect::ExitFullscreen,
                Effect::Text(FULLSCREEN_ICON_ID.into(), GLYPH_ENTER_FULLSCREEN.into()),
            ]
        );
    }

    #[test]
    fn test_fullscreen_change_without_icon() {
        let (nav, mut page) = nav_on(1);
        nav.fullscreen_changed(&mut page);
        assert!(page.take_effects().is_empty());
    }
}
