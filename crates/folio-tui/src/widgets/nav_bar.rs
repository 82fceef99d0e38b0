use folio_core::content::{NAV_LINKS, PROFILE};
use folio_core::{IndicatorGeometry, NavSnapshot};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::page::Page;
use crate::theme::Theme;

const HIRE_LABEL: &str = " Hire Me ";

/// Where each part of the nav bar goes on one row
#[derive(Debug, Default, PartialEq, Eq)]
struct NavPlacement {
    brand: Option<IndicatorGeometry>,
    links: Vec<(&'static str, &'static str, IndicatorGeometry)>,
    hire: Option<IndicatorGeometry>,
}

/// Lay out brand (left), links and the hire button (right) on `row`.
/// Links are dropped first when the row is too narrow, then the button.
fn place(row: Rect) -> NavPlacement {
    let mut placement = NavPlacement::default();
    let left = row.x;
    let right = row.x.saturating_add(row.width);

    let brand = format!(" {}", PROFILE.brand);
    let brand_w = (brand.width() as u16).min(row.width);
    if brand_w > 0 {
        placement.brand = Some(IndicatorGeometry::new(left, row.y, brand_w, 1));
    }
    let min_x = left + brand_w + 2;

    let hire_w = HIRE_LABEL.width() as u16;
    let links_w: u16 = NAV_LINKS
        .iter()
        .map(|l| l.label.width() as u16 + 2)
        .sum::<u16>()
        + NAV_LINKS.len().saturating_sub(1) as u16;

    let full = links_w + 2 + hire_w + 1;
    if right >= min_x + full {
        let mut x = right - full;
        for link in NAV_LINKS {
            let w = link.label.width() as u16 + 2;
            placement
                .links
                .push((link.anchor, link.label, IndicatorGeometry::new(x, row.y, w, 1)));
            x += w + 1;
        }
    }
    if right >= min_x + hire_w + 1 {
        let x = right - hire_w - 1;
        placement.hire = Some(IndicatorGeometry::new(x, row.y, hire_w, 1));
    }
    placement
}

fn rect(g: IndicatorGeometry) -> Rect {
    Rect::new(g.left, g.top, g.width, g.height)
}

pub struct NavBarWidget;

impl NavBarWidget {
    /// Draw the sticky nav bar. Records the drawn link rectangles on the
    /// page, which brings the active-link indicator up to date, then draws it.
    pub fn render(frame: &mut Frame, area: Rect, page: &mut Page, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(theme.bg2))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            page.record_nav(NavSnapshot::new(), None, None);
            return;
        }
        let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);

        let placement = place(row);
        let mut snapshot = NavSnapshot::new();
        for (anchor, _, geometry) in &placement.links {
            snapshot.record(anchor, *geometry);
        }
        page.record_nav(snapshot, placement.brand, placement.hire);

        // Indicator goes under the link text
        let indicator = page.indicator();
        if !indicator.is_stale() && !indicator.geometry().is_empty() {
            let area = rect(indicator.geometry()).intersection(row);
            frame.render_widget(
                Block::default().style(Style::default().bg(theme.indicator)),
                area,
            );
        }

        if let Some(brand) = placement.brand {
            let spans: Vec<Span> = format!(" {}", PROFILE.brand)
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    Span::styled(
                        c.to_string(),
                        Style::default()
                            .fg(theme.gradient(i / 4))
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect();
            frame.render_widget(Paragraph::new(Line::from(spans)), rect(brand));
        }

        let active = page.tracker().active_anchor();
        for (anchor, label, geometry) in &placement.links {
            let style = if Some(*anchor) == active {
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1)
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(format!(" {} ", label), style))),
                rect(*geometry),
            );
        }

        if let Some(hire) = placement.hire {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    HIRE_LABEL,
                    Style::default()
                        .fg(theme.bg0)
                        .bg(theme.pink)
                        .add_modifier(Modifier::BOLD),
                ))),
                rect(hire),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_row_places_everything() {
        let p = place(Rect::new(0, 1, 100, 1));
        assert!(p.brand.is_some());
        assert!(p.hire.is_some());
        assert_eq!(p.links.len(), NAV_LINKS.len());
        // Links left to right without overlap, all before the button
        for w in p.links.windows(2) {
            assert!(w[0].2.left + w[0].2.width < w[1].2.left);
        }
        let last = p.links.last().unwrap().2;
        assert!(last.left + last.width < p.hire.unwrap().left);
    }

    #[test]
    fn test_narrow_row_drops_links_first() {
        let p = place(Rect::new(0, 1, 30, 1));
        assert!(p.links.is_empty());
        assert!(p.hire.is_some());

        let p = place(Rect::new(0, 1, 12, 1));
        assert!(p.links.is_empty());
        assert!(p.hire.is_none());
    }
}
