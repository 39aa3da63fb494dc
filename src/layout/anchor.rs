use crate::format::{HorzAlign, TextFormat, VertAlign};
use crate::rect::Rect;
use crate::units::Point;

/// Padding used between a reference rectangle and anchored text when none is given
pub const DEFAULT_PAD: i32 = 6;

/// Where to start a block, and the origin semantics that make it land where
/// it was asked to. Feed it to [`TextBlock::anchored`](crate::TextBlock::anchored).
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub origin: Point,
    /// Sets alignment (when it needs one), origin mode and line order. Everything
    /// else is inherited.
    pub format: TextFormat,
}

impl Placement {
    fn new(origin: Point, bottom_left_origin: bool) -> Placement {
        Placement {
            origin,
            // moving the cursor up keeps the block's bottom edge on the origin
            format: TextFormat::new()
                .bottom_left_origin(bottom_left_origin)
                .reverse(bottom_left_origin),
        }
    }
}

/// Place text above, below, or inside the top or bottom edge of `rect`.
///
/// `horz` picks the left edge, centre, or right edge, inset by `pad`. Outside
/// the rectangle, `Top` grows upwards from `pad` above it and `Bottom` grows
/// downwards from `pad` below it; inside, both are inset by `pad`. `Mid` centres
/// the first line's origin vertically; `Mid` on the left or right outside the
/// rectangle is handed to [`beside`].
///
/// ```
/// use text_block::{HorzAlign, Point, Rect, VertAlign};
/// use text_block::layout::relative_to;
///
/// let label = relative_to(Rect::new(150, 150, 500, 500), VertAlign::Top, HorzAlign::Left, false, 6);
/// assert_eq!(label.origin, Point::new(156, 144));
/// assert!(label.format.resolve().bottom_left_origin);
/// ```
pub fn relative_to<R: Into<Rect>>(
    rect: R,
    vert: VertAlign,
    horz: HorzAlign,
    inside: bool,
    pad: i32,
) -> Placement {
    let rect: Rect = rect.into();
    if vert == VertAlign::Mid && horz != HorzAlign::Center && !inside {
        return beside(rect, horz, vert, inside, false, pad, 0);
    }

    let x = rect.x
        + match horz {
            HorzAlign::Center => rect.width / 2,
            HorzAlign::Right => rect.width - pad,
            HorzAlign::Left => pad,
        };
    let y = rect.y
        + match (vert, inside) {
            (VertAlign::Top, true) => pad,
            (VertAlign::Top, false) => -pad,
            (VertAlign::Bottom, true) => rect.height - pad,
            (VertAlign::Bottom, false) => rect.height + pad,
            (VertAlign::Mid, _) => rect.height / 2,
        };
    let grows_up = matches!(
        (vert, inside),
        (VertAlign::Top, false) | (VertAlign::Bottom, true)
    );

    let mut placement = Placement::new(Point::new(x, y), grows_up);
    placement.format = placement.format.align(horz);
    log::trace!("{vert:?}/{horz:?} of {rect:?} (inside: {inside}) -> {}", placement.origin);
    placement
}

/// Place text to the left or right of `rect`, outside it.
///
/// Left-hand text is right-aligned so that it ends `pad_x` before the
/// rectangle. `vert` picks the top edge, the vertical centre, or the bottom
/// edge, nudged by `pad_y`: downwards for top-down blocks, upwards when
/// `bottom_left_origin` grows the block up from its bottom edge. Centred or
/// inside placements are handed to [`relative_to`] with `pad_x` as the padding.
pub fn beside<R: Into<Rect>>(
    rect: R,
    horz: HorzAlign,
    vert: VertAlign,
    inside: bool,
    bottom_left_origin: bool,
    pad_x: i32,
    pad_y: i32,
) -> Placement {
    let rect: Rect = rect.into();
    if horz == HorzAlign::Center || inside {
        return relative_to(rect, vert, horz, inside, pad_x);
    }

    let x = rect.x
        + match horz {
            HorzAlign::Right => rect.width + pad_x,
            _ => -pad_x,
        };
    let nudge = if bottom_left_origin { -pad_y } else { pad_y };
    let y = rect.y
        + match vert {
            VertAlign::Top => nudge,
            VertAlign::Bottom => rect.height + nudge,
            VertAlign::Mid => rect.height / 2,
        };

    let mut placement = Placement::new(Point::new(x, y), bottom_left_origin);
    if horz == HorzAlign::Left {
        placement.format = placement.format.align(HorzAlign::Right);
    }
    log::trace!("beside {rect:?} on the {horz:?}, {vert:?} -> {}", placement.origin);
    placement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatConfig;

    const RECT: Rect = Rect::new(150, 150, 500, 500);

    fn resolved(p: &Placement) -> FormatConfig {
        p.format.resolve()
    }

    #[test]
    fn top_left_outside_grows_up_from_above() {
        let p = relative_to(RECT, VertAlign::Top, HorzAlign::Left, false, 6);
        assert_eq!(p.origin, Point::new(156, 144));
        let c = resolved(&p);
        assert!(c.bottom_left_origin);
        assert!(c.reverse);
        assert_eq!(c.align, HorzAlign::Left);
    }

    #[test]
    fn top_left_inside_hangs_down_from_the_edge() {
        let p = relative_to(RECT, VertAlign::Top, HorzAlign::Left, true, 6);
        assert_eq!(p.origin, Point::new(156, 156));
        assert!(!resolved(&p).bottom_left_origin);
        assert!(!resolved(&p).reverse);
    }

    #[test]
    fn bottom_edges() {
        let outside = relative_to(RECT, VertAlign::Bottom, HorzAlign::Left, false, 6);
        assert_eq!(outside.origin, Point::new(156, 656));
        assert!(!resolved(&outside).bottom_left_origin);

        let inside = relative_to(RECT, VertAlign::Bottom, HorzAlign::Right, true, 6);
        assert_eq!(inside.origin, Point::new(644, 644));
        let c = resolved(&inside);
        assert!(c.bottom_left_origin);
        assert!(c.reverse);
        assert_eq!(c.align, HorzAlign::Right);
    }

    #[test]
    fn centre_ignores_inside() {
        let a = relative_to(RECT, VertAlign::Mid, HorzAlign::Center, false, 6);
        let b = relative_to(RECT, VertAlign::Mid, HorzAlign::Center, true, 6);
        assert_eq!(a.origin, Point::new(400, 400));
        assert_eq!(a.origin, b.origin);
        assert_eq!(resolved(&a).align, HorzAlign::Center);
    }

    #[test]
    fn both_entry_points_agree_where_they_overlap() {
        for vert in [VertAlign::Top, VertAlign::Mid, VertAlign::Bottom] {
            let a = relative_to(RECT, vert, HorzAlign::Center, false, 6);
            let b = beside(RECT, HorzAlign::Center, vert, false, false, 6, 0);
            assert_eq!(a, b);
        }
        let a = relative_to(RECT, VertAlign::Top, HorzAlign::Right, true, 9);
        let b = beside(RECT, HorzAlign::Right, VertAlign::Top, true, true, 9, 40);
        assert_eq!(a, b);
    }

    #[test]
    fn mid_outside_is_placed_beside() {
        let p = relative_to(RECT, VertAlign::Mid, HorzAlign::Left, false, 6);
        assert_eq!(p, beside(RECT, HorzAlign::Left, VertAlign::Mid, false, false, 6, 0));
        assert_eq!(p.origin, Point::new(144, 400));
        let c = resolved(&p);
        assert_eq!(c.align, HorzAlign::Right);
        // the padding is not mistaken for the origin mode
        assert!(!c.bottom_left_origin);
        assert!(!c.reverse);

        let right = relative_to(RECT, VertAlign::Mid, HorzAlign::Right, false, 9);
        assert_eq!(right.origin, Point::new(659, 400));
        assert!(!resolved(&right).bottom_left_origin);
    }

    #[test]
    fn beside_right_keeps_inherited_alignment() {
        let p = beside(RECT, HorzAlign::Right, VertAlign::Top, false, false, 6, 3);
        assert_eq!(p.origin, Point::new(656, 153));
        let mut base = TextFormat::new().align(HorzAlign::Center);
        base.merge(&p.format);
        assert_eq!(base.resolve().align, HorzAlign::Center);
    }

    #[test]
    fn beside_bottom_left_origin_nudges_up() {
        let p = beside(RECT, HorzAlign::Left, VertAlign::Bottom, false, true, 6, 3);
        assert_eq!(p.origin, Point::new(144, 647));
        let c = resolved(&p);
        assert!(c.bottom_left_origin);
        assert!(c.reverse);
    }

    #[test]
    fn accepts_point_and_size() {
        use crate::units::Size;
        let a = relative_to(
            (Point::new(150, 150), Size::new(500, 500)),
            VertAlign::Top,
            HorzAlign::Left,
            false,
            DEFAULT_PAD,
        );
        assert_eq!(a, relative_to(RECT, VertAlign::Top, HorzAlign::Left, false, 6));
    }
}
