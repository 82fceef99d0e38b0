//! Smooth-scroll controller.
//!
//! Owns the animated scroll position of the page and publishes it to
//! subscribers once per frame. The page composer constructs one controller
//! per page view, calls [`ScrollController::raf`] every frame, and calls
//! [`ScrollController::destroy`] on teardown.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::debug;

use super::animation::ScrollAnimation;
use super::config::{ScrollConfig, ScrollConfigExt};
use super::timing::to_row;

/// One update of the scroll stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    /// Current scroll position in rows
    pub scroll: u16,
    /// Largest reachable scroll position
    pub limit: u16,
    /// Rows moved since the previous event (negative = up)
    pub velocity: i32,
    /// Whether an animation is still running
    pub animating: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Receiving end of a subscription to the scroll stream
#[derive(Debug)]
pub struct ScrollSubscription {
    id: SubscriptionId,
    rx: mpsc::UnboundedReceiver<ScrollEvent>,
}

impl ScrollSubscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Next pending event, in delivery order
    pub fn try_next(&mut self) -> Option<ScrollEvent> {
        self.rx.try_recv().ok()
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> Vec<ScrollEvent> {
        std::iter::from_fn(|| self.try_next()).collect()
    }
}

/// Resolves anchor ids to the top row of their section
pub trait AnchorResolver {
    fn anchor_top(&self, anchor: &str) -> Option<u16>;
}

/// Where a scroll should end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget<'a> {
    Top,
    Bottom,
    Row(u16),
    /// Section addressed by anchor id, with or without a leading '#'
    Anchor(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollToOptions {
    /// Added to the target row; negative leaves the target that many rows
    /// below the viewport top
    pub offset: i32,
    /// Animation duration, the configured default when `None`
    pub duration: Option<Duration>,
    /// Jump without animating
    pub immediate: bool,
}

impl ScrollToOptions {
    pub fn offset(offset: i32) -> Self {
        Self {
            offset,
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn immediate(mut self) -> Self {
        self.immediate = true;
        self
    }
}

#[derive(Debug)]
pub struct ScrollController {
    config: ScrollConfig,
    /// Animated position, fractional between frames
    position: f64,
    animation: Option<ScrollAnimation>,
    /// Wheel/key deltas accumulated since the last frame
    pending_delta: i32,
    limit: u16,
    /// Row carried by the last emitted event
    last_emitted: Option<u16>,
    /// Emit on the next frame even if the position did not change
    emit_next_frame: bool,
    subscribers: Vec<(SubscriptionId, mpsc::UnboundedSender<ScrollEvent>)>,
    next_id: u64,
    destroyed: bool,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollController {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            position: 0.0,
            animation: None,
            pending_delta: 0,
            limit: 0,
            last_emitted: None,
            emit_next_frame: true,
            subscribers: Vec::new(),
            next_id: 0,
            destroyed: false,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Subscribe to the scroll stream
    pub fn on(&mut self) -> ScrollSubscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        if !self.destroyed {
            self.subscribers.push((id, tx));
        }
        ScrollSubscription { id, rx }
    }

    /// Unsubscribe. Returns `false` if the id was not subscribed.
    pub fn off(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Release every subscription and stop responding to frames
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        debug!("Scroll controller destroyed ({} subscribers released)", self.subscribers.len());
        self.subscribers.clear();
        self.animation = None;
        self.pending_delta = 0;
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Update the largest reachable position (layout or viewport changed).
    /// The next frame emits even when the position is unchanged.
    pub fn set_limit(&mut self, limit: u16) {
        self.limit = limit;
        self.position = self.position.min(limit as f64);
        if self.animation.is_some_and(|a| a.target() > limit as f64) {
            self.retarget(limit as i64);
        }
        self.emit_next_frame = true;
    }

    /// Send a running animation to `row` (clamped to the limit) without
    /// restarting it. Returns `false` when nothing is animating.
    pub fn retarget(&mut self, row: i64) -> bool {
        let to = row.clamp(0, self.limit as i64) as f64;
        match self.animation.as_mut() {
            Some(anim) => {
                anim.retarget(to);
                true
            }
            None => false,
        }
    }

    pub fn limit(&self) -> u16 {
        self.limit
    }

    /// Current scroll row
    #[inline]
    pub fn scroll(&self) -> u16 {
        to_row(self.position)
    }

    /// Row the controller is heading to
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .map(|a| to_row(a.target()))
            .unwrap_or_else(|| self.scroll())
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frame has work to do (drives the fast tick rate)
    pub fn needs_update(&self) -> bool {
        !self.destroyed && (self.animation.is_some() || self.pending_delta != 0 || self.emit_next_frame)
    }

    /// Animate to `target`. Unknown anchors are ignored.
    pub fn scroll_to<R>(
        &mut self,
        target: ScrollTarget<'_>,
        options: ScrollToOptions,
        resolver: &R,
        now: Instant,
    ) where
        R: AnchorResolver + ?Sized,
    {
        if self.destroyed {
            return;
        }

        let base = match target {
            ScrollTarget::Top => 0,
            ScrollTarget::Bottom => self.limit as i64,
            ScrollTarget::Row(row) => row as i64,
            ScrollTarget::Anchor(anchor) => {
                let anchor = anchor.trim_start_matches('#');
                match resolver.anchor_top(anchor) {
                    Some(top) => top as i64,
                    None => {
                        debug!("scroll_to: no section for anchor #{}", anchor);
                        return;
                    }
                }
            }
        };
        let to = (base + options.offset as i64).clamp(0, self.limit as i64) as f64;
        let duration = options
            .duration
            .unwrap_or_else(|| self.config.animation_duration());

        debug!("scroll_to {:?} -> row {} over {:?}", target, to, duration);

        // A fresh target replaces any batched deltas
        self.pending_delta = 0;

        if options.immediate || !self.config.is_smooth() || duration.is_zero() {
            self.jump(to);
            return;
        }

        if (self.position - to).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ScrollAnimation::new(
            self.position,
            to,
            now,
            duration,
            self.config.easing,
        ));
    }

    /// Scroll by a number of rows (positive = down). Deltas arriving within
    /// one frame are batched into a single animation.
    pub fn scroll_by(&mut self, delta: i32) {
        if self.destroyed {
            return;
        }
        if !self.config.is_smooth() {
            let to = (self.target_scroll() as i64 + delta as i64).clamp(0, self.limit as i64);
            self.jump(to as f64);
            return;
        }
        self.pending_delta += delta;
    }

    /// Stop at the current position
    pub fn stop(&mut self) {
        self.animation = None;
        self.pending_delta = 0;
    }

    fn jump(&mut self, to: f64) {
        self.animation = None;
        self.position = to;
        self.emit_next_frame = true;
    }

    /// Per-frame update: advance the animation and emit at most one event.
    ///
    /// Returns the emitted event, if any. Does nothing once destroyed.
    pub fn raf(&mut self, now: Instant) -> Option<ScrollEvent> {
        if self.destroyed {
            return None;
        }

        if self.pending_delta != 0 {
            let from = self.target_scroll() as i64;
            let to = (from + self.pending_delta as i64).clamp(0, self.limit as i64) as f64;
            self.pending_delta = 0;
            if (to - self.position).abs() >= f64::EPSILON {
                self.animation = Some(ScrollAnimation::new(
                    self.position,
                    to,
                    now,
                    self.config.animation_duration(),
                    self.config.easing,
                ));
            }
        }

        if let Some(anim) = self.animation {
            let (position, done) = anim.sample(now);
            self.position = position.clamp(0.0, self.limit as f64);
            if done {
                self.animation = None;
            }
        }

        let row = self.scroll();
        if self.last_emitted == Some(row) && !self.emit_next_frame {
            return None;
        }

        let event = ScrollEvent {
            scroll: row,
            limit: self.limit,
            velocity: row as i32 - self.last_emitted.unwrap_or(row) as i32,
            animating: self.animation.is_some(),
        };
        self.last_emitted = Some(row);
        self.emit_next_frame = false;

        // Receivers that were dropped without `off` are pruned here
        self.subscribers.retain(|(_, tx)| tx.send(event).is_ok());

        Some(event)
    }
}
