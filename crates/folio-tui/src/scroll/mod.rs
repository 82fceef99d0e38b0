//! Smooth scrolling for the portfolio page.
//!
//! # Layers
//!
//! - `easing`, `timing`, `config`: pure atoms (curves, clock math, derived config)
//! - `animation`: one eased move between two positions
//! - `controller`: the page's scroll owner; animates `scroll_to`/`scroll_by`,
//!   runs once per frame via `raf`, and publishes a subscribable scroll stream
//!
//! # Usage
//!
//! ```ignore
//! use folio_tui::scroll::{ScrollController, ScrollTarget, ScrollToOptions};
//!
//! let mut controller = ScrollController::new(config.ui.scroll.clone());
//! let mut subscription = controller.on();
//!
//! controller.scroll_to(ScrollTarget::Anchor("projects"), ScrollToOptions::offset(-3), &layout, now);
//!
//! // Every frame
//! controller.raf(Instant::now());
//! for event in subscription.drain() { /* ... */ }
//!
//! // Teardown
//! controller.off(subscription.id());
//! controller.destroy();
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;
pub mod controller;

pub use config::{ScrollConfig, ScrollConfigExt};
pub use controller::{
    AnchorResolver, ScrollController, ScrollEvent, ScrollSubscription, ScrollTarget,
    ScrollToOptions, SubscriptionId,
};
pub use easing::{Ease, EasingType};
