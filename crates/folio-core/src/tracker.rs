//! Scroll-spy: decides which nav link is active for a scroll position.
//!
//! The tracker is a small state machine with one state per [`NavLink`].
//! It is fed scroll positions in delivery order and never reads the
//! terminal itself; section offsets come through [`SectionOffsets`].

use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::NavConfig;
use crate::content::NavLink;

/// Scroll position and page extents at one instant, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Rows scrolled past the top of the document
    pub scroll: u16,
    /// Height of the visible page area
    pub viewport_height: u16,
    /// Total height of the rendered document
    pub document_height: u16,
}

impl ScrollMetrics {
    pub fn new(scroll: u16, viewport_height: u16, document_height: u16) -> Self {
        Self {
            scroll,
            viewport_height,
            document_height,
        }
    }

    /// Largest reachable scroll position
    pub fn max_scroll(&self) -> u16 {
        self.document_height.saturating_sub(self.viewport_height)
    }

    /// Whether the viewport touches the end of the document, within `epsilon` rows
    pub fn at_bottom(&self, epsilon: u16) -> bool {
        self.scroll as u32 + self.viewport_height as u32
            >= (self.document_height as u32).saturating_sub(epsilon as u32)
    }
}

/// Read access to the laid-out top row of each anchored section
pub trait SectionOffsets {
    /// Top row of the section with this anchor, `None` if it is not laid out
    fn section_top(&self, anchor: &str) -> Option<u16>;
}

/// Tuning of the offset rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Rows added to the scroll position before comparing section tops
    pub lookahead: u16,
    /// Tolerance of the bottom-of-page override
    pub bottom_epsilon: u16,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::from(&NavConfig::default())
    }
}

impl From<&NavConfig> for TrackerConfig {
    fn from(nav: &NavConfig) -> Self {
        Self {
            lookahead: nav.lookahead_rows,
            bottom_epsilon: nav.bottom_epsilon_rows,
        }
    }
}

/// Index of the nav link that should be active for `metrics`.
///
/// The last link (in nav order) whose section starts at or above
/// `scroll + lookahead` wins, defaulting to the first link. Reaching the
/// bottom of the document forces the last link.
pub fn compute_active<O>(
    links: &[NavLink],
    offsets: &O,
    metrics: ScrollMetrics,
    config: TrackerConfig,
) -> usize
where
    O: SectionOffsets + ?Sized,
{
    if links.is_empty() {
        return 0;
    }

    let y = metrics.scroll as u32 + config.lookahead as u32;
    let mut current = 0;
    for (idx, link) in links.iter().enumerate() {
        if let Some(top) = offsets.section_top(link.anchor) {
            if top as u32 <= y {
                current = idx;
            }
        }
    }

    if metrics.at_bottom(config.bottom_epsilon) {
        current = links.len() - 1;
    }

    current
}

/// Active-section state machine
#[derive(Debug, Clone)]
pub struct SectionTracker {
    links: Vec<NavLink>,
    active: usize,
    config: TrackerConfig,
    /// End of the click suppression window, if one is open
    suppressed_until: Option<Instant>,
}

impl SectionTracker {
    pub fn new(links: &[NavLink], config: TrackerConfig) -> Self {
        Self {
            links: links.to_vec(),
            active: 0,
            config,
            suppressed_until: None,
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn config(&self) -> TrackerConfig {
        self.config
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active link; `None` only when the tracker has no links
    pub fn active(&self) -> Option<&NavLink> {
        self.links.get(self.active)
    }

    pub fn active_anchor(&self) -> Option<&'static str> {
        self.active().map(|l| l.anchor)
    }

    /// Whether scroll updates are currently being ignored
    pub fn is_suppressed(&self, now: Instant) -> bool {
        self.suppressed_until.is_some_and(|until| now < until)
    }

    /// Feed one scroll update. Returns the new active index if it changed.
    pub fn on_scroll<O>(&mut self, metrics: ScrollMetrics, offsets: &O, now: Instant) -> Option<usize>
    where
        O: SectionOffsets + ?Sized,
    {
        if let Some(until) = self.suppressed_until {
            if now < until {
                return None;
            }
            debug!("Suppression window closed");
            self.suppressed_until = None;
        }

        let next = compute_active(&self.links, offsets, metrics, self.config);
        if next != self.active {
            debug!(
                "Active section {} -> {}",
                self.links[self.active].anchor, self.links[next].anchor
            );
            self.active = next;
            Some(next)
        } else {
            None
        }
    }

    /// A click on a nav link: activate it now and ignore scroll updates for `window`.
    ///
    /// Clicking again while a window is open restarts it. Returns `false` and
    /// changes nothing when the anchor is not a nav link.
    pub fn select(&mut self, anchor: &str, now: Instant, window: Duration) -> bool {
        let anchor = anchor.trim_start_matches('#');
        let Some(idx) = self.links.iter().position(|l| l.anchor == anchor) else {
            debug!("Ignoring click on unknown nav anchor #{}", anchor);
            return false;
        };

        self.active = idx;
        self.suppressed_until = Some(now + window);
        true
    }

    /// Drop any open suppression window
    pub fn release(&mut self) {
        self.suppressed_until = None;
    }
}

/// Build a tracker over the site's nav links
pub fn site_tracker(nav: &NavConfig) -> SectionTracker {
    SectionTracker::new(crate::content::NAV_LINKS, TrackerConfig::from(nav))
}
