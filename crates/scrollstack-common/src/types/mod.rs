mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_inset_by_shrinks_each_edge() {
        let r = Rect {
            x: 0.0,
            y: 100.0,
            width: 300.0,
            height: 200.0,
        };
        let inner = r.inset_by(EdgeInsets::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(inner.x, 20.0);
        assert_eq!(inner.y, 110.0);
        assert_eq!(inner.width, 240.0);
        assert_eq!(inner.height, 160.0);
    }

    #[test]
    fn rect_inset_never_negative() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        };
        let inner = r.inset_by(EdgeInsets::uniform(20.0));
        assert_eq!(inner.width, 0.0);
        assert_eq!(inner.height, 0.0);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 1920.0,
            height: 1080.0,
        };
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn size_main_and_cross() {
        let s = Size::new(320.0, 480.0);
        assert_eq!(s.main(Axis::Vertical), 480.0);
        assert_eq!(s.cross(Axis::Vertical), 320.0);
        assert_eq!(s.main(Axis::Horizontal), 320.0);
        assert_eq!(s.cross(Axis::Horizontal), 480.0);
    }

    #[test]
    fn edge_insets_partial_json_uses_zero() {
        let insets: EdgeInsets = serde_json::from_str(r#"{"top": 4.0}"#).unwrap();
        assert_eq!(insets, EdgeInsets::new(4.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn axis_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Axis::Horizontal).unwrap(), "\"horizontal\"");
        assert_eq!(Axis::default(), Axis::Vertical);
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("+1+2+3").is_none());
    }

    #[test]
    fn color_to_hex_keeps_alpha_when_translucent() {
        assert_eq!(Color::GRAY.to_hex(), "#808080");
        assert_eq!(Color::CLEAR.to_hex(), "#00000000");
        assert!(Color::default().is_clear());
    }

    #[test]
    fn panel_id_display() {
        let id = PanelId(42);
        assert_eq!(id.to_string(), "panel-42");
    }

    #[test]
    fn panel_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PanelId(1));
        set.insert(PanelId(2));
        set.insert(PanelId(1));
        assert_eq!(set.len(), 2);
    }
}
