//! Coordinate conversion between pane rects and wry rects.

use trio_common::Rect;

/// Convert a pane `Rect` (f64 logical coords) to a wry `Rect`.
pub fn pane_rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            rect.width.max(0.0),
            rect.height.max(0.0),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_rect_converts_to_logical_wry_rect() {
        let wry_rect = pane_rect_to_wry(&Rect::new(642.0, 36.0, 558.0, 764.0));

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!((pos.x - 642.0).abs() < f64::EPSILON);
                assert!((pos.y - 36.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 558.0).abs() < f64::EPSILON);
                assert!((size.height - 764.0).abs() < f64::EPSILON);
            }
            _ => panic!("expected logical size"),
        }
    }

    #[test]
    fn negative_sizes_clamp_to_zero() {
        let wry_rect = pane_rect_to_wry(&Rect::new(0.0, 0.0, -5.0, -1.0));
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert_eq!(size.width, 0.0);
                assert_eq!(size.height, 0.0);
            }
            _ => panic!("expected logical size"),
        }
    }
}
