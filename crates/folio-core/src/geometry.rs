//! Placement of the highlight drawn under the active nav link.

use std::collections::HashMap;

/// Rectangle of the highlight, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorGeometry {
    pub left: u16,
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl IndicatorGeometry {
    pub fn new(left: u16, top: u16, width: u16, height: u16) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Rendered rectangles of the nav links from the most recent draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavSnapshot {
    rects: HashMap<String, IndicatorGeometry>,
}

impl NavSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where a link was drawn
    pub fn record(&mut self, anchor: &str, rect: IndicatorGeometry) {
        self.rects.insert(anchor.to_string(), rect);
    }

    pub fn get(&self, anchor: &str) -> Option<IndicatorGeometry> {
        self.rects.get(anchor).copied()
    }

    /// Anchor of the link drawn under a cell, for mouse hit testing
    pub fn hit(&self, column: u16, row: u16) -> Option<&str> {
        self.rects
            .iter()
            .find(|(_, r)| {
                column >= r.left
                    && column < r.left.saturating_add(r.width)
                    && row >= r.top
                    && row < r.top.saturating_add(r.height)
            })
            .map(|(anchor, _)| anchor.as_str())
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Geometry of the indicator for `active`, if its link has been drawn
pub fn geometry(active: &str, snapshot: &NavSnapshot) -> Option<IndicatorGeometry> {
    snapshot.get(active.trim_start_matches('#'))
}

/// The indicator's current placement.
///
/// A refresh that cannot find the link leaves the previous geometry in place
/// and keeps the indicator marked stale, so the next trigger retries.
#[derive(Debug, Clone, Default)]
pub struct Indicator {
    current: IndicatorGeometry,
    stale: bool,
}

impl Indicator {
    pub fn new() -> Self {
        Self {
            current: IndicatorGeometry::default(),
            stale: true,
        }
    }

    pub fn geometry(&self) -> IndicatorGeometry {
        self.current
    }

    /// Whether the geometry may not match the active link
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Mark for recomputation (active change, resize)
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Recompute from the snapshot. Returns `true` when the geometry was updated.
    pub fn refresh(&mut self, active: &str, snapshot: &NavSnapshot) -> bool {
        match geometry(active, snapshot) {
            Some(rect) => {
                self.current = rect;
                self.stale = false;
                true
            }
            None => {
                self.stale = true;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> NavSnapshot {
        let mut snap = NavSnapshot::new();
        snap.record("projects", IndicatorGeometry::new(20, 1, 10, 1));
        snap.record("skills", IndicatorGeometry::new(32, 1, 8, 1));
        snap
    }

    #[test]
    fn test_geometry_matches_link_rect() {
        let snap = snapshot();
        assert_eq!(
            geometry("skills", &snap),
            Some(IndicatorGeometry::new(32, 1, 8, 1))
        );
        assert_eq!(geometry("#projects", &snap).map(|g| g.left), Some(20));
        assert_eq!(geometry("contact", &snap), None);
    }

    #[test]
    fn test_missing_link_keeps_previous_geometry() {
        let mut indicator = Indicator::new();
        assert!(indicator.is_stale());
        assert!(indicator.refresh("projects", &snapshot()));
        let before = indicator.geometry();

        // Not drawn yet: no-op, retried later
        assert!(!indicator.refresh("contact", &snapshot()));
        assert_eq!(indicator.geometry(), before);
        assert!(indicator.is_stale());

        let mut snap = snapshot();
        snap.record("contact", IndicatorGeometry::new(60, 1, 9, 1));
        assert!(indicator.refresh("contact", &snap));
        assert!(!indicator.is_stale());
        assert_eq!(indicator.geometry().left, 60);
    }

    #[test]
    fn test_refresh_after_resize_follows_new_rect() {
        let mut indicator = Indicator::new();
        indicator.refresh("skills", &snapshot());

        // Narrower terminal, links re-laid out
        let mut resized = NavSnapshot::new();
        resized.record("skills", IndicatorGeometry::new(14, 1, 8, 1));
        indicator.invalidate();
        indicator.refresh("skills", &resized);
        assert_eq!(indicator.geometry(), resized.get("skills").unwrap());
    }

    #[test]
    fn test_hit_testing() {
        let snap = snapshot();
        assert_eq!(snap.hit(20, 1), Some("projects"));
        assert_eq!(snap.hit(29, 1), Some("projects"));
        assert_eq!(snap.hit(30, 1), None);
        assert_eq!(snap.hit(35, 1), Some("skills"));
        assert_eq!(snap.hit(35, 0), None);
    }
}
