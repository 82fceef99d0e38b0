//! The portfolio page: section layout plus the scroll, scroll-spy and
//! indicator state that lives as long as the page is shown.

use std::time::Instant;

use folio_core::config::{AppConfig, NavConfig};
use folio_core::content::{nav_index, LinkTarget, PageLink, Section, NAV_LINKS};
use folio_core::tracker::site_tracker;
use folio_core::{
    Indicator, IndicatorGeometry, Location, NavSnapshot, ScrollMetrics, SectionOffsets,
    SectionTracker,
};
use ratatui::text::Line;
use tracing::{debug, info};

use crate::scroll::{
    AnchorResolver, ScrollController, ScrollSubscription, ScrollTarget, ScrollToOptions,
};
use crate::sections::{self, SectionBlock};
use crate::theme::Theme;

/// Rows a section occupies in the composed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

/// A link placed at an absolute page row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaidOutLink {
    pub link: PageLink,
    pub row: u16,
}

/// Every section rendered and stacked for one width
#[derive(Debug, Clone)]
pub struct PageLayout {
    width: u16,
    lines: Vec<Line<'static>>,
    spans: Vec<SectionSpan>,
    links: Vec<LaidOutLink>,
}

impl PageLayout {
    /// Render the sections in page order, one blank row between blocks
    pub fn compose(width: u16, theme: &Theme) -> Self {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut spans = Vec::with_capacity(Section::ALL.len());
        let mut links = Vec::new();

        for (i, section) in Section::ALL.into_iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let SectionBlock {
                lines: block_lines,
                links: block_links,
                ..
            } = sections::render(section, width, theme);

            let top = to_row(lines.len());
            links.extend(block_links.into_iter().map(|l| LaidOutLink {
                row: top.saturating_add(to_row(l.line)),
                link: l.link,
            }));
            spans.push(SectionSpan {
                section,
                top,
                height: to_row(block_lines.len()),
            });
            lines.extend(block_lines);
        }

        Self {
            width,
            lines,
            spans,
            links,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Total document height in rows
    pub fn height(&self) -> u16 {
        to_row(self.lines.len())
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans.iter().find(|s| s.section == section).copied()
    }

    pub fn links(&self) -> &[LaidOutLink] {
        &self.links
    }

    /// Index of the first link drawn on `row`
    pub fn link_at_row(&self, row: u16) -> Option<usize> {
        self.links.iter().position(|l| l.row == row)
    }

    /// Section containing `row`
    pub fn section_at(&self, row: u16) -> Option<Section> {
        self.spans
            .iter()
            .rev()
            .find(|s| s.top <= row)
            .map(|s| s.section)
    }
}

fn to_row(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}

impl SectionOffsets for PageLayout {
    fn section_top(&self, anchor: &str) -> Option<u16> {
        Section::from_anchor(anchor)
            .and_then(|s| self.span(s))
            .map(|s| s.top)
    }
}

impl AnchorResolver for PageLayout {
    fn anchor_top(&self, anchor: &str) -> Option<u16> {
        self.section_top(anchor)
    }
}

/// What a nav bar cell leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavHit {
    Brand,
    Link(String),
    HireMe,
}

/// The home view
pub struct Page {
    theme: Theme,
    nav: NavConfig,
    layout: PageLayout,
    controller: ScrollController,
    subscription: Option<ScrollSubscription>,
    tracker: SectionTracker,
    indicator: Indicator,
    snapshot: NavSnapshot,
    brand_rect: Option<IndicatorGeometry>,
    hire_rect: Option<IndicatorGeometry>,
    location: Location,
    viewport_height: u16,
    /// Screen row of the first page line
    viewport_top: u16,
    focused_link: Option<usize>,
    /// Fragment of the starting location, scrolled to once laid out
    pending_fragment: Option<String>,
    /// Section an in-flight click or anchor scroll is heading to
    anchor_scroll: Option<String>,
    torn_down: bool,
}

impl Page {
    pub fn new(config: &AppConfig, theme: Theme, location: Location) -> Self {
        let mut controller = ScrollController::new(config.ui.scroll.clone());
        let subscription = controller.on();
        let layout = PageLayout::compose(sections::MIN_WIDTH, &theme);
        let pending_fragment = location.fragment.clone();

        info!("Page opened at {}", location);

        Self {
            theme,
            nav: config.nav.clone(),
            layout,
            controller,
            subscription: Some(subscription),
            tracker: site_tracker(&config.nav),
            indicator: Indicator::new(),
            snapshot: NavSnapshot::new(),
            brand_rect: None,
            hire_rect: None,
            location,
            viewport_height: 0,
            viewport_top: 0,
            focused_link: None,
            pending_fragment,
            anchor_scroll: None,
            torn_down: false,
        }
    }

    /// Fit the page to the area it is drawn in. Recomposes on width change.
    pub fn resize(&mut self, width: u16, viewport_height: u16) {
        let width = width.max(sections::MIN_WIDTH);
        let changed = width != self.layout.width() || viewport_height != self.viewport_height;
        if !changed {
            return;
        }

        let recomposed = width != self.layout.width();
        if recomposed {
            debug!("Recomposing page at width {}", width);
            self.layout = PageLayout::compose(width, &self.theme);
            if self
                .focused_link
                .is_some_and(|i| i >= self.layout.links().len())
            {
                self.focused_link = None;
            }
        }
        self.viewport_height = viewport_height;
        self.controller
            .set_limit(self.layout.height().saturating_sub(viewport_height));
        self.retarget_anchor_scroll();
        self.indicator.invalidate();
    }

    /// Sections move when the page is recomposed; keep a running anchor
    /// scroll heading for where its section is now.
    fn retarget_anchor_scroll(&mut self) {
        let Some(anchor) = self.anchor_scroll.as_deref() else {
            return;
        };
        match self.layout.anchor_top(anchor) {
            Some(top) => {
                let row = top as i64 + self.nav.anchor_offset_rows as i64;
                if self.controller.retarget(row) {
                    debug!("Retargeted scroll to #{} at row {}", anchor, row);
                }
            }
            None => self.anchor_scroll = None,
        }
    }

    fn start_anchor_scroll(&mut self, anchor: &str, now: Instant) {
        let options = self.anchor_options();
        self.controller
            .scroll_to(ScrollTarget::Anchor(anchor), options, &self.layout, now);
        self.anchor_scroll = self
            .controller
            .is_animating()
            .then(|| anchor.to_string());
    }

    pub fn set_viewport_top(&mut self, top: u16) {
        self.viewport_top = top;
    }

    /// Per-frame update: advance scrolling, feed the scroll-spy in delivery order.
    pub fn frame(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }

        if self.viewport_height > 0 {
            if let Some(fragment) = self.pending_fragment.take() {
                self.open_fragment(&fragment, now);
            }
        }

        self.controller.raf(now);
        if !self.controller.is_animating() {
            self.anchor_scroll = None;
        }

        let events = match self.subscription.as_mut() {
            Some(sub) => sub.drain(),
            None => Vec::new(),
        };
        for event in events {
            let metrics =
                ScrollMetrics::new(event.scroll, self.viewport_height, self.layout.height());
            if self.tracker.on_scroll(metrics, &self.layout, now).is_some() {
                self.indicator.invalidate();
            }
        }
    }

    fn open_fragment(&mut self, fragment: &str, now: Instant) {
        if nav_index(fragment).is_some() {
            self.click(fragment, now);
        } else if !self.follow_anchor(fragment, now) {
            debug!("Starting fragment #{} names no section", fragment);
        }
    }

    fn anchor_options(&self) -> ScrollToOptions {
        ScrollToOptions::offset(self.nav.anchor_offset_rows)
            .with_duration(self.nav.anchor_duration())
    }

    /// A nav link click: activate it immediately, pause the scroll-spy for
    /// the suppression window, scroll there and update the location.
    ///
    /// Returns `false` for anchors that are not nav links.
    pub fn click(&mut self, anchor: &str, now: Instant) -> bool {
        let anchor = anchor.trim_start_matches('#');
        if !self
            .tracker
            .select(anchor, now, self.nav.suppression_window())
        {
            return false;
        }
        self.indicator.invalidate();
        self.start_anchor_scroll(anchor, now);
        self.location.replace_fragment(anchor);
        true
    }

    pub fn click_nav_index(&mut self, index: usize, now: Instant) -> bool {
        match NAV_LINKS.get(index) {
            Some(link) => self.click(link.anchor, now),
            None => false,
        }
    }

    /// Click the nav link after the active one
    pub fn next_section(&mut self, now: Instant) -> bool {
        let next = (self.tracker.active_index() + 1).min(NAV_LINKS.len().saturating_sub(1));
        self.click_nav_index(next, now)
    }

    /// Click the nav link before the active one
    pub fn prev_section(&mut self, now: Instant) -> bool {
        let prev = self.tracker.active_index().saturating_sub(1);
        self.click_nav_index(prev, now)
    }

    /// The "Hire Me" button
    pub fn hire_me(&mut self, now: Instant) -> bool {
        self.click("contact", now)
    }

    /// Scroll to a section without touching the scroll-spy or location
    pub fn follow_anchor(&mut self, anchor: &str, now: Instant) -> bool {
        let anchor = anchor.trim_start_matches('#');
        if self.layout.anchor_top(anchor).is_none() {
            return false;
        }
        self.start_anchor_scroll(anchor, now);
        true
    }

    pub fn scroll_lines(&mut self, rows: i32) {
        self.anchor_scroll = None;
        self.controller.scroll_by(rows);
    }

    pub fn scroll_half_page(&mut self, down: bool) {
        let rows = (self.viewport_height / 2).max(1) as i32;
        self.scroll_lines(if down { rows } else { -rows });
    }

    pub fn scroll_page(&mut self, down: bool) {
        let rows = self.viewport_height.saturating_sub(2).max(1) as i32;
        self.scroll_lines(if down { rows } else { -rows });
    }

    pub fn jump_to_top(&mut self, now: Instant) {
        self.anchor_scroll = None;
        self.controller
            .scroll_to(ScrollTarget::Top, ScrollToOptions::default(), &self.layout, now);
    }

    pub fn jump_to_bottom(&mut self, now: Instant) {
        self.anchor_scroll = None;
        self.controller
            .scroll_to(ScrollTarget::Bottom, ScrollToOptions::default(), &self.layout, now);
    }

    /// Move link focus forward (wrapping) and bring the link into view
    pub fn focus_next_link(&mut self, now: Instant) {
        let count = self.layout.links().len();
        if count == 0 {
            return;
        }
        let next = match self.focused_link {
            Some(i) => (i + 1) % count,
            None => self.first_link_from(self.controller.target_scroll()),
        };
        self.focus_link(next, now);
    }

    /// Move link focus backward (wrapping) and bring the link into view
    pub fn focus_prev_link(&mut self, now: Instant) {
        let count = self.layout.links().len();
        if count == 0 {
            return;
        }
        let prev = match self.focused_link {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.focus_link(prev, now);
    }

    /// First link at or below `row`, wrapping to the first link
    fn first_link_from(&self, row: u16) -> usize {
        self.layout
            .links()
            .iter()
            .position(|l| l.row >= row)
            .unwrap_or(0)
    }

    pub fn focus_link(&mut self, index: usize, now: Instant) {
        let Some(row) = self.layout.links().get(index).map(|l| l.row) else {
            return;
        };
        self.focused_link = Some(index);

        let top = self.controller.target_scroll();
        let bottom = top.saturating_add(self.viewport_height);
        if row < top || row >= bottom {
            self.anchor_scroll = None;
            let options = ScrollToOptions::offset(self.nav.anchor_offset_rows);
            self.controller
                .scroll_to(ScrollTarget::Row(row), options, &self.layout, now);
        }
    }

    pub fn clear_focus(&mut self) -> bool {
        self.focused_link.take().is_some()
    }

    pub fn focused_link(&self) -> Option<&LaidOutLink> {
        self.focused_link.and_then(|i| self.layout.links().get(i))
    }

    /// Activate the focused link. In-page anchors scroll here; outbound
    /// targets are returned for the caller to open.
    pub fn activate_focused(&mut self, now: Instant) -> Option<LinkTarget> {
        let target = self.focused_link()?.link.target.clone();
        match target {
            LinkTarget::Anchor(anchor) => {
                self.follow_anchor(anchor, now);
                None
            }
            outbound => Some(outbound),
        }
    }

    /// Link under a screen row of the page view, focusing it
    pub fn focus_at_screen_row(&mut self, screen_row: u16) -> bool {
        let Some(offset) = screen_row.checked_sub(self.viewport_top) else {
            return false;
        };
        if offset >= self.viewport_height {
            return false;
        }
        let row = self.controller.scroll().saturating_add(offset);
        match self.layout.link_at_row(row) {
            Some(index) => {
                self.focused_link = Some(index);
                true
            }
            None => false,
        }
    }

    /// Record where the nav bar drew its parts and bring the indicator up to date
    pub fn record_nav(
        &mut self,
        snapshot: NavSnapshot,
        brand: Option<IndicatorGeometry>,
        hire: Option<IndicatorGeometry>,
    ) {
        if snapshot != self.snapshot {
            self.snapshot = snapshot;
            self.indicator.invalidate();
        }
        self.brand_rect = brand;
        self.hire_rect = hire;

        if self.indicator.is_stale() {
            if let Some(active) = self.tracker.active_anchor() {
                self.indicator.refresh(active, &self.snapshot);
            }
        }
    }

    /// What the nav bar shows at a cell
    pub fn hit_nav(&self, column: u16, row: u16) -> Option<NavHit> {
        let inside = |r: &IndicatorGeometry| {
            column >= r.left
                && column < r.left.saturating_add(r.width)
                && row >= r.top
                && row < r.top.saturating_add(r.height)
        };
        if self.brand_rect.as_ref().is_some_and(inside) {
            return Some(NavHit::Brand);
        }
        if self.hire_rect.as_ref().is_some_and(inside) {
            return Some(NavHit::HireMe);
        }
        self.snapshot
            .hit(column, row)
            .map(|anchor| NavHit::Link(anchor.to_string()))
    }

    /// Unsubscribe from the scroll stream and stop the controller. Idempotent.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(sub) = self.subscription.take() {
            self.controller.off(sub.id());
        }
        self.controller.destroy();
        self.torn_down = true;
        info!("Page closed at {}", self.location);
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn scroll(&self) -> u16 {
        self.controller.scroll()
    }

    pub fn controller(&self) -> &ScrollController {
        &self.controller
    }

    pub fn tracker(&self) -> &SectionTracker {
        &self.tracker
    }

    pub fn indicator(&self) -> &Indicator {
        &self.indicator
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Whether the next frame has work to do
    pub fn needs_update(&self) -> bool {
        self.controller.needs_update() || self.pending_fragment.is_some()
    }

    /// How far down the page the viewport is, 0..=100
    pub fn percent(&self) -> u16 {
        let limit = self.controller.limit();
        if limit == 0 {
            return 100;
        }
        (self.scroll() as u32 * 100 / limit as u32) as u16
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn page(location: &str) -> Page {
        let mut page = Page::new(&AppConfig::default(), Theme::default(), Location::parse(location));
        page.resize(80, 24);
        page
    }

    /// Run frames every 16ms from `start`, ending with one at `start + until`
    fn run(page: &mut Page, start: Instant, until: Duration) -> Instant {
        let end = start + until;
        let mut t = start;
        while t < end {
            page.frame(t);
            t += Duration::from_millis(16);
        }
        page.frame(end);
        end
    }

    #[test]
    fn test_layout_sections_stack_in_order() {
        let layout = PageLayout::compose(80, &Theme::default());
        let spans = layout.spans();
        assert_eq!(spans.len(), Section::ALL.len());
        assert_eq!(spans[0].top, 0);
        for w in spans.windows(2) {
            // One blank separator row between blocks
            assert_eq!(w[1].top, w[0].top + w[0].height + 1);
        }
        let last = spans[spans.len() - 1];
        assert_eq!(layout.height(), last.top + last.height);
    }

    #[test]
    fn test_layout_links_land_on_their_rows() {
        let layout = PageLayout::compose(80, &Theme::default());
        assert_eq!(layout.links().len(), folio_core::content::page_links().len());
        for link in layout.links() {
            let text: String = layout.lines()[link.row as usize]
                .spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect();
            assert!(
                text.contains('→') || text.contains('↗') || text.contains('⤓'),
                "row {} is not a link: {}",
                link.row,
                text
            );
            assert_eq!(layout.section_at(link.row), Some(link.link.section));
        }
    }

    #[test]
    fn test_anchor_resolution() {
        let layout = PageLayout::compose(80, &Theme::default());
        let skills = layout.span(Section::Skills).unwrap().top;
        assert_eq!(layout.anchor_top("#skills"), Some(skills));
        assert_eq!(layout.section_top("education"), layout.span(Section::Education).map(|s| s.top));
        assert_eq!(layout.anchor_top("footer"), None);
    }

    #[test]
    fn test_click_lands_with_offset_and_keeps_active() {
        let mut page = page("/");
        let start = Instant::now();
        page.frame(start);

        assert!(page.click("skills", start));
        assert_eq!(page.tracker().active_anchor(), Some("skills"));
        assert_eq!(page.location().to_string(), "/#skills");

        // Scrolling passes projects rows but the active link stays put
        let duration = page.nav.anchor_duration();
        let end = run(&mut page, start, duration);
        assert_eq!(page.tracker().active_anchor(), Some("skills"));

        let top = page.layout().span(Section::Skills).unwrap().top;
        assert_eq!(page.scroll(), top - 3);

        // After the suppression window, the offset rule agrees
        let after = end + page.nav.suppression_window();
        page.frame(after);
        assert_eq!(page.tracker().active_anchor(), Some("skills"));
    }

    #[test]
    fn test_scroll_spy_follows_wheel_after_window() {
        let mut page = page("/");
        let start = Instant::now();
        page.frame(start);
        page.click("contact", start);

        let window = page.nav.suppression_window();
        let t = run(&mut page, start, window);
        assert_eq!(page.tracker().active_anchor(), Some("contact"));

        page.jump_to_top(t);
        run(&mut page, t, Duration::from_millis(1300));
        assert_eq!(page.scroll(), 0);
        assert_eq!(page.tracker().active_anchor(), Some("projects"));
    }

    #[test]
    fn test_initial_fragment_scrolls_on_first_frame() {
        let mut page = page("/#achievements");
        assert!(page.needs_update());
        let start = Instant::now();
        page.frame(start);
        assert_eq!(page.tracker().active_anchor(), Some("achievements"));
        let duration = page.nav.anchor_duration();
        run(&mut page, start, duration);
        let top = page.layout().span(Section::Achievements).unwrap().top;
        assert_eq!(page.scroll(), top - 3);
    }

    #[test]
    fn test_next_and_prev_section() {
        let mut page = page("/");
        let now = Instant::now();
        page.frame(now);
        assert!(page.next_section(now));
        assert_eq!(page.tracker().active_anchor(), Some("skills"));
        assert!(page.prev_section(now));
        assert_eq!(page.tracker().active_anchor(), Some("projects"));
        assert!(page.hire_me(now));
        assert_eq!(page.tracker().active_anchor(), Some("contact"));
        assert!(!page.click_nav_index(9, now));
        assert!(!page.click("education", now));
    }

    #[test]
    fn test_link_focus_cycles_and_activates() {
        let mut page = page("/");
        let now = Instant::now();
        page.frame(now);

        page.focus_next_link(now);
        let first = page.focused_link().unwrap().clone();
        assert_eq!(first.link.label, "Explore My Work");
        // Anchor links scroll in place
        assert_eq!(page.activate_focused(now), None);
        assert!(page.controller().is_animating());

        page.focus_next_link(now);
        assert_eq!(
            page.activate_focused(now),
            Some(LinkTarget::Asset("/Resume.pdf"))
        );

        page.focus_prev_link(now);
        page.focus_prev_link(now);
        let last = page.layout().links().last().unwrap();
        assert_eq!(page.focused_link(), Some(last));
        assert!(page.clear_focus());
        assert!(!page.clear_focus());
    }

    #[test]
    fn test_indicator_follows_snapshot() {
        let mut page = page("/");
        let now = Instant::now();
        page.frame(now);

        let mut snap = NavSnapshot::new();
        snap.record("projects", IndicatorGeometry::new(30, 1, 10, 1));
        snap.record("skills", IndicatorGeometry::new(42, 1, 8, 1));
        page.record_nav(snap.clone(), Some(IndicatorGeometry::new(2, 1, 10, 1)), None);
        assert_eq!(page.indicator().geometry().left, 30);

        page.click("skills", now);
        page.record_nav(snap.clone(), None, None);
        assert_eq!(page.indicator().geometry().left, 42);

        // Resize moves the links
        let mut moved = NavSnapshot::new();
        moved.record("projects", IndicatorGeometry::new(20, 1, 10, 1));
        moved.record("skills", IndicatorGeometry::new(32, 1, 8, 1));
        page.resize(60, 24);
        page.record_nav(moved, None, None);
        assert_eq!(page.indicator().geometry(), IndicatorGeometry::new(32, 1, 8, 1));

        assert_eq!(page.hit_nav(33, 1), Some(NavHit::Link("skills".into())));
        assert_eq!(page.hit_nav(0, 5), None);
    }

    #[test]
    fn test_teardown_releases_subscription() {
        let mut page = page("/");
        let now = Instant::now();
        page.frame(now);
        assert_eq!(page.controller().subscriber_count(), 1);

        page.teardown();
        assert!(page.is_torn_down());
        assert!(page.controller().is_destroyed());
        assert_eq!(page.controller().subscriber_count(), 0);

        // Frames after teardown are no-ops
        page.scroll_lines(10);
        page.frame(now + Duration::from_millis(100));
        assert_eq!(page.scroll(), 0);
        page.teardown();
    }

    #[test]
    fn test_resize_recomposes_and_clamps() {
        let mut page = page("/");
        let now = Instant::now();
        page.frame(now);
        let wide = page.layout().height();
        page.resize(40, 24);
        assert_eq!(page.layout().width(), 40);
        assert!(page.layout().height() >= wide);
        assert_eq!(page.controller().limit(), page.layout().height() - 24);
        // Narrower than the minimum lays out at the minimum
        page.resize(5, 24);
        assert_eq!(page.layout().width(), sections::MIN_WIDTH);
    }

    #[test]
    fn test_taller_viewport_mid_scroll_still_reaches_bottom() {
        let mut page = page("/");
        let start = Instant::now();
        page.frame(start);
        page.click("contact", start);

        let t = run(&mut page, start, Duration::from_millis(16 * 20));
        assert!(page.controller().is_animating());

        page.resize(80, 40);
        let limit = page.controller().limit();
        let window = page.nav.suppression_window();
        run(&mut page, t, window);

        let contact = page.layout().span(Section::Contact).unwrap().top;
        assert_eq!(page.scroll(), (contact - 3).min(limit));
        assert!(!page.controller().is_animating());
        assert_eq!(page.tracker().active_anchor(), Some("contact"));
    }

    #[test]
    fn test_width_change_mid_click_lands_on_moved_section() {
        let mut page = page("/");
        let start = Instant::now();
        page.frame(start);
        page.click("skills", start);

        let t = run(&mut page, start, Duration::from_millis(16 * 20));
        let before = page.layout().span(Section::Skills).unwrap().top;

        page.resize(40, 24);
        let after = page.layout().span(Section::Skills).unwrap().top;
        assert_ne!(before, after);
        let duration = page.nav.anchor_duration();
        run(&mut page, t, duration);

        assert_eq!(page.scroll(), after - 3);
        assert_eq!(page.location().to_string(), "/#skills");
    }

    #[test]
    fn test_manual_scroll_drops_anchor_target() {
        let mut page = page("/");
        let start = Instant::now();
        page.frame(start);
        page.click("skills", start);
        page.scroll_lines(1);
        assert!(page.anchor_scroll.is_none());

        page.follow_anchor("projects", start);
        assert_eq!(page.anchor_scroll.as_deref(), Some("projects"));
        page.jump_to_top(start);
        assert!(page.anchor_scroll.is_none());
    }
}
