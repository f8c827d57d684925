//! Slide navigation controller.
//!
//! One [`Navigator`] lives per loaded slide page. It turns keyboard, touch
//! and fullscreen input into navigation intents and asks the page host to
//! fade out and redirect to a sibling slide.
//!
//! ```text
//!            accepted navigate()
//!   Idle ───────────────────────────► Transitioning
//!    ▲                                     │
//!    └──── new page, new Navigator ◄───────┘  (redirect after delay)
//! ```
//!
//! While transitioning every request is dropped; there is no queue.
//!
//! The DOM is reached only through the [`Page`] trait, so the state machine
//! runs the same against a browser binding or the in-memory [`MemoryPage`].

mod input;
mod memory;
mod page;
mod state;

pub use memory::{Effect, MemoryPage};
pub use page::Page;
pub use state::{Navigator, Phase};
