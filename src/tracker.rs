use std::cmp::Ordering;

use crate::content::NavItem;

/// Visibility change for one observed region, as delivered by the
/// intersection machinery. `boundary_top` is the region's top edge
/// relative to the viewport at notification time.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEvent {
    pub target_id: String,
    pub is_intersecting: bool,
    pub boundary_top: f64,
}

/// Decides which registered section owns the navigation highlight.
///
/// Regions subscribe once at mount, visibility batches arrive through
/// [`SectionTracker::dispatch`], and [`SectionTracker::release`] detaches
/// everything at unmount. The tracker never touches the DOM, so the
/// resolution rules are testable without one.
///
/// Resolution per batch: among subscribed regions currently intersecting
/// the focus band, the one whose top edge sits highest in the viewport
/// wins. A batch in which nothing intersects leaves the previous answer in
/// place rather than clearing it, so fast scrolls don't flicker the
/// highlight through an undefined state.
#[derive(Debug)]
pub struct SectionTracker {
    items: &'static [NavItem],
    subscribed: Vec<&'static str>,
    active: &'static str,
    released: bool,
}

impl SectionTracker {
    pub fn new(items: &'static [NavItem]) -> Self {
        let first = items
            .first()
            .expect("tracker requires at least one nav item");
        Self {
            items,
            subscribed: Vec::with_capacity(items.len()),
            active: first.id,
            released: false,
        }
    }

    /// The id currently owning the highlight. Always one of the declared
    /// nav ids; starts as the first declared id before any batch arrives.
    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Registers a region for tracking. Ids outside the declared list are
    /// refused; re-subscribing is a no-op. Returns whether the id is now
    /// tracked.
    pub fn subscribe(&mut self, id: &str) -> bool {
        if self.released {
            return false;
        }
        let Some(known) = self.items.iter().map(|item| item.id).find(|k| *k == id) else {
            return false;
        };
        if !self.subscribed.contains(&known) {
            self.subscribed.push(known);
        }
        true
    }

    pub fn subscribed(&self) -> &[&'static str] {
        &self.subscribed
    }

    /// Resolves one observation batch atomically: filter to intersecting
    /// subscribed regions, stable-sort by ascending top edge, take the
    /// first. Returns the resolved id, or `None` when nothing intersects
    /// (state retained) or the tracker was released.
    pub fn dispatch(&mut self, batch: &[VisibilityEvent]) -> Option<&'static str> {
        if self.released {
            return None;
        }
        let mut visible: Vec<&VisibilityEvent> = batch
            .iter()
            .filter(|ev| ev.is_intersecting)
            .filter(|ev| self.subscribed.iter().any(|id| *id == ev.target_id))
            .collect();
        visible.sort_by(|a, b| {
            a.boundary_top
                .partial_cmp(&b.boundary_top)
                .unwrap_or(Ordering::Equal)
        });
        let winner = visible.first()?;
        let id = self
            .subscribed
            .iter()
            .copied()
            .find(|id| *id == winner.target_id)?;
        self.active = id;
        Some(id)
    }

    /// Detaches the tracker. Later dispatches and subscriptions are no-ops;
    /// the last resolved id stays readable.
    pub fn release(&mut self) {
        self.released = true;
        self.subscribed.clear();
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

/// Horizontal span of the nav underline indicator, as percentages of the
/// nav strip width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnderlineSpan {
    pub left_pct: f64,
    pub width_pct: f64,
}

impl UnderlineSpan {
    pub fn css(&self) -> String {
        format!("left: {:.4}%; width: {:.4}%", self.left_pct, self.width_pct)
    }
}

/// Indicator geometry is a pure function of the active id: each item gets
/// an equal `100%/N` slot, and the underline sits under the active slot.
pub fn underline_span(items: &[NavItem], active_id: &str) -> UnderlineSpan {
    let n = items.len().max(1) as f64;
    let index = items
        .iter()
        .position(|item| item.id == active_id)
        .unwrap_or(0) as f64;
    UnderlineSpan {
        left_pct: index / n * 100.0,
        width_pct: 100.0 / n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_ITEMS;

    static SHORT: [NavItem; 3] = [
        NavItem {
            id: "home",
            label: "Home",
        },
        NavItem {
            id: "about",
            label: "About",
        },
        NavItem {
            id: "projects",
            label: "Projects",
        },
    ];

    fn tracker_with_all_subscribed(items: &'static [NavItem]) -> SectionTracker {
        let mut tracker = SectionTracker::new(items);
        for item in items {
            assert!(tracker.subscribe(item.id));
        }
        tracker
    }

    fn event(id: &str, intersecting: bool, top: f64) -> VisibilityEvent {
        VisibilityEvent {
            target_id: id.to_string(),
            is_intersecting: intersecting,
            boundary_top: top,
        }
    }

    #[test]
    fn test_initial_active_is_first_declared() {
        let tracker = SectionTracker::new(&NAV_ITEMS);
        assert_eq!(tracker.active(), "home");
    }

    #[test]
    fn test_topmost_intersecting_region_wins() {
        let mut tracker = tracker_with_all_subscribed(&NAV_ITEMS);
        let resolved = tracker.dispatch(&[
            event("about", true, 120.0),
            event("projects", true, 40.0),
            event("experience", true, 300.0),
        ]);
        assert_eq!(resolved, Some("projects"));
        assert_eq!(tracker.active(), "projects");
    }

    #[test]
    fn test_empty_batch_retains_previous_state() {
        let mut tracker = tracker_with_all_subscribed(&NAV_ITEMS);
        tracker.dispatch(&[event("gallery", true, 10.0)]);
        assert_eq!(tracker.active(), "gallery");

        // Nothing intersecting: highlight is sticky, not reset.
        let resolved = tracker.dispatch(&[
            event("gallery", false, -600.0),
            event("contact", false, 900.0),
        ]);
        assert_eq!(resolved, None);
        assert_eq!(tracker.active(), "gallery");
    }

    #[test]
    fn test_nav_click_scroll_lands_on_target() {
        // Clicking "contact" requests a smooth scroll; once the region
        // reaches the focus band the normal intersection update arrives.
        let mut tracker = tracker_with_all_subscribed(&NAV_ITEMS);
        let resolved = tracker.dispatch(&[event("contact", true, 64.0)]);
        assert_eq!(resolved, Some("contact"));
        assert_eq!(tracker.active(), "contact");
    }

    #[test]
    fn test_lower_region_with_higher_top_loses() {
        let mut tracker = tracker_with_all_subscribed(&SHORT);
        let resolved = tracker.dispatch(&[
            event("about", true, 50.0),
            event("projects", true, 10.0),
        ]);
        assert_eq!(resolved, Some("projects"));
    }

    #[test]
    fn test_release_stops_updates() {
        let mut tracker = tracker_with_all_subscribed(&NAV_ITEMS);
        tracker.dispatch(&[event("about", true, 20.0)]);
        tracker.release();
        assert!(tracker.is_released());

        let resolved = tracker.dispatch(&[event("contact", true, 5.0)]);
        assert_eq!(resolved, None);
        assert_eq!(tracker.active(), "about");
        assert!(!tracker.subscribe("projects"));
    }

    #[test]
    fn test_unknown_and_unsubscribed_ids_are_ignored() {
        let mut tracker = SectionTracker::new(&SHORT);
        assert!(tracker.subscribe("home"));
        assert!(tracker.subscribe("about"));
        // Declared but never found in the DOM, and a stray foreign id.
        assert!(!tracker.subscribe("footer"));

        let resolved = tracker.dispatch(&[
            event("projects", true, 5.0),
            event("footer", true, 1.0),
            event("about", true, 80.0),
        ]);
        assert_eq!(resolved, Some("about"));
    }

    #[test]
    fn test_batch_resolves_once() {
        // Several regions toggling within one batch produce exactly one
        // resolution, not one per event.
        let mut tracker = tracker_with_all_subscribed(&NAV_ITEMS);
        let resolved = tracker.dispatch(&[
            event("home", false, -400.0),
            event("about", true, 220.0),
            event("projects", true, 90.0),
            event("experience", false, 700.0),
        ]);
        assert_eq!(resolved, Some("projects"));
        assert_eq!(tracker.active(), "projects");
    }

    #[test]
    fn test_underline_geometry_six_items() {
        let span = underline_span(&NAV_ITEMS, "projects");
        assert!((span.left_pct - 33.33).abs() < 1e-2);
        assert!((span.width_pct - 16.67).abs() < 1e-2);
    }

    #[test]
    fn test_underline_tracks_declared_order() {
        let first = underline_span(&SHORT, "home");
        assert!((first.left_pct - 0.0).abs() < f64::EPSILON);
        let last = underline_span(&SHORT, "projects");
        assert!((last.left_pct - 66.6667).abs() < 1e-3);
        assert!((last.width_pct - 33.3333).abs() < 1e-3);
    }
}
