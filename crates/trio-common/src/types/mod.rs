mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
        assert!((r.right() - 810.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn pane_side_parse_is_case_insensitive() {
        assert_eq!(PaneSide::parse("Right"), Some(PaneSide::Right));
        assert_eq!(PaneSide::parse(" third "), Some(PaneSide::Third));
        assert_eq!(PaneSide::parse("LEFT"), Some(PaneSide::Left));
        assert_eq!(PaneSide::parse("middle"), None);
    }

    #[test]
    fn pane_side_string_form_matches_parse() {
        for side in PaneSide::ALL {
            assert_eq!(PaneSide::parse(side.as_str()), Some(side));
        }
    }

    #[test]
    fn pane_side_serializes_lowercase() {
        let json = serde_json::to_string(&PaneSide::Third).unwrap();
        assert_eq!(json, "\"third\"");
    }

    #[test]
    fn secondary_panes_are_siblings() {
        assert!(!PaneSide::Left.is_secondary());
        assert!(PaneSide::Right.is_secondary());
        assert_eq!(PaneSide::Right.sibling(), Some(PaneSide::Third));
        assert_eq!(PaneSide::Third.sibling(), Some(PaneSide::Right));
        assert_eq!(PaneSide::Left.sibling(), None);
    }

    #[test]
    fn provider_id_display_and_from() {
        let id = ProviderId::from("claude");
        assert_eq!(id.to_string(), "claude");
        assert_eq!(id, ProviderId::new(String::from("claude")));
    }

    #[test]
    fn provider_id_is_transparent_in_json() {
        let id = ProviderId::new("gemini");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"gemini\"");
    }
}
