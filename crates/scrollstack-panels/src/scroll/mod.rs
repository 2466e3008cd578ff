//! Scroll coordinator: turns "bring this panel into view" into a content
//! offset, or parks the request until layout produces a scrollable range.

mod resolve;
mod types;

pub use resolve::{offset_for, resolve};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HeadlessHost, ParentContext, ScrollSurface, StackSurface};
    use crate::item::{ArrangedEntry, ArrangedItem};
    use crate::location::InsertionLocation;
    use crate::panel::Panel;
    use crate::registry::PanelRegistry;
    use scrollstack_common::{Axis, EdgeInsets, PanelId, Point, Rect, Size};

    const HEIGHT: f64 = 100.0;

    /// `count` bare panels of equal height in a 320x250 viewport.
    fn stack(count: u32) -> (PanelRegistry, HeadlessHost) {
        let mut registry = PanelRegistry::new();
        let mut host = HeadlessHost::new(Size::new(320.0, 250.0));
        for id in 1..=count {
            let panel = Panel::with_height(PanelId(id), format!("Panel {id}"), HEIGHT);
            host.register(&panel);
            host.attach_child(panel.id);
            let item = ArrangedItem::Direct(panel.id);
            let index = registry.insert(ArrangedEntry::new(item), &InsertionLocation::End);
            host.insert_arranged(index, &item);
        }
        (registry, host)
    }

    #[test]
    fn deferred_before_layout() {
        let (registry, host) = stack(5);
        let resolution = resolve(&registry, &host, Axis::Vertical, PanelId(2));
        assert_eq!(resolution, ScrollResolution::Deferred);
        assert_eq!(resolution.offset(), None);
    }

    #[test]
    fn deferred_when_content_fits() {
        let (registry, mut host) = stack(2);
        host.layout();
        assert_eq!(
            resolve(&registry, &host, Axis::Vertical, PanelId(2)),
            ScrollResolution::Deferred
        );
    }

    #[test]
    fn deferred_for_unknown_panel() {
        let (registry, mut host) = stack(5);
        host.layout();
        assert_eq!(
            resolve(&registry, &host, Axis::Vertical, PanelId(42)),
            ScrollResolution::Deferred
        );
    }

    #[test]
    fn direct_offset_is_panel_top() {
        let (registry, mut host) = stack(5);
        host.layout();
        assert_eq!(
            resolve(&registry, &host, Axis::Vertical, PanelId(2)),
            ScrollResolution::Direct(Point::new(0.0, 100.0))
        );
    }

    #[test]
    fn last_panel_clamps_to_max() {
        // content 500, viewport 250
        let (registry, mut host) = stack(5);
        host.layout();
        let offset = resolve(&registry, &host, Axis::Vertical, PanelId(5))
            .offset()
            .unwrap();
        assert!((offset.y - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn offsets_never_exceed_range() {
        let (registry, mut host) = stack(8);
        host.layout();
        let max = host.content_size().height - host.viewport_size().height;
        for id in 1..=8 {
            let offset = resolve(&registry, &host, Axis::Vertical, PanelId(id))
                .offset()
                .unwrap();
            let expected = ((id - 1) as f64 * HEIGHT).min(max);
            assert!((offset.y - expected).abs() < f64::EPSILON, "panel {id}");
            assert!(offset.y >= 0.0 && offset.y <= max);
        }
    }

    #[test]
    fn wrapped_panel_resolves_via_container() {
        let (mut registry, mut host) = stack(3);
        let panel = Panel::with_height(PanelId(9), "Wrapped", HEIGHT);
        host.register(&panel);
        let item = ArrangedItem::Wrapped {
            panel: panel.id,
            insets: EdgeInsets::uniform(10.0),
        };
        let index = registry.insert(ArrangedEntry::new(item), &InsertionLocation::Index(1));
        host.insert_arranged(index, &item);
        host.layout();

        assert_eq!(
            resolve(&registry, &host, Axis::Vertical, PanelId(9)),
            ScrollResolution::ViaContainer(Point::new(0.0, 100.0))
        );
    }

    #[test]
    fn offset_for_keeps_cross_coordinate() {
        let frame = Rect {
            x: 12.0,
            y: -5.0,
            width: 10.0,
            height: 10.0,
        };
        assert_eq!(offset_for(frame, 50.0, Axis::Vertical), Point::new(12.0, 0.0));
        assert_eq!(offset_for(frame, 5.0, Axis::Horizontal), Point::new(5.0, -5.0));
    }

    #[test]
    fn second_deferral_replaces_first() {
        let mut coordinator = ScrollCoordinator::new();
        assert!(coordinator.defer(PendingScroll::new(PanelId(1), None)).is_none());
        let replaced = coordinator.defer(PendingScroll::new(PanelId(2), None));
        assert_eq!(replaced.map(|p| p.panel), Some(PanelId(1)));
        assert_eq!(coordinator.pending_panel(), Some(PanelId(2)));
    }

    #[test]
    fn cancel_empties_slot() {
        let mut coordinator = ScrollCoordinator::new();
        assert!(!coordinator.cancel());
        coordinator.defer(PendingScroll::new(PanelId(1), None));
        assert!(coordinator.cancel());
        assert!(!coordinator.has_pending());
        assert!(coordinator.take_pending().is_none());
    }
}
