use sheen_engine::coords::{CornerSet, Rect};
use sheen_engine::geom::Path;

/// Reading direction of the hosting view.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == LayoutDirection::Rtl
    }

    /// Parses the `layoutDirection` attribute (`ltr` / `rtl`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("ltr") {
            Some(LayoutDirection::Ltr)
        } else if name.eq_ignore_ascii_case("rtl") {
            Some(LayoutDirection::Rtl)
        } else {
            None
        }
    }
}

// Slot pairs in the clockwise radius array.
const TOP_LEFT: usize = 0;
const TOP_RIGHT: usize = 2;
const BOTTOM_RIGHT: usize = 4;
const BOTTOM_LEFT: usize = 6;

/// Lays out `corners` as the 8-slot clockwise radius array
/// `[tl.x, tl.y, tr.x, tr.y, br.x, br.y, bl.x, bl.y]`.
///
/// A positive uniform radius fills every slot. Otherwise each positive corner
/// writes its pair; under RTL the left and right pairs trade places so that
/// the logical start corner lands on the physical right.
pub fn corner_radii_array(corners: CornerSet, direction: LayoutDirection) -> [f32; 8] {
    let mut radii = [0.0f32; 8];

    if corners.has_uniform() {
        radii.fill(corners.uniform);
        return radii;
    }

    let rtl = direction.is_rtl();
    let placements = [
        (corners.top_left, if rtl { TOP_RIGHT } else { TOP_LEFT }),
        (corners.top_right, if rtl { TOP_LEFT } else { TOP_RIGHT }),
        (corners.bottom_right, if rtl { BOTTOM_LEFT } else { BOTTOM_RIGHT }),
        (corners.bottom_left, if rtl { BOTTOM_RIGHT } else { BOTTOM_LEFT }),
    ];

    for (radius, slot) in placements {
        if radius > 0.0 {
            radii[slot] = radius;
            radii[slot + 1] = radius;
        }
    }

    radii
}

/// Closed clockwise rounded-rectangle path for `bounds`, starting at the
/// top-left corner.
///
/// Empty or zero-area bounds give an empty path.
pub fn compute_path(bounds: Rect, corners: CornerSet, direction: LayoutDirection) -> Path {
    Path::rounded_rect(bounds, &corner_radii_array(corners, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> Rect { Rect::new(0.0, 0.0, 200.0, 100.0) }

    // ── radius array ──────────────────────────────────────────────────────

    #[test]
    fn ltr_slots_follow_clockwise_order() {
        let radii = corner_radii_array(CornerSet::new(1.0, 2.0, 4.0, 3.0), LayoutDirection::Ltr);
        assert_eq!(radii, [1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0]);
    }

    #[test]
    fn rtl_swaps_start_and_end_slots() {
        let radii = corner_radii_array(CornerSet::new(1.0, 2.0, 4.0, 3.0), LayoutDirection::Rtl);
        assert_eq!(radii, [2.0, 2.0, 1.0, 1.0, 4.0, 4.0, 3.0, 3.0]);
    }

    #[test]
    fn uniform_radius_wins_regardless_of_magnitude() {
        for direction in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            let corners = CornerSet::new(500.0, 0.0, 9.0, 1e6).with_uniform(6.0);
            assert_eq!(corner_radii_array(corners, direction), [6.0; 8]);
        }
    }

    #[test]
    fn zero_corners_leave_slots_empty() {
        let radii = corner_radii_array(CornerSet::new(0.0, 5.0, 0.0, 0.0), LayoutDirection::Ltr);
        assert_eq!(radii, [0.0, 0.0, 5.0, 5.0, 0.0, 0.0, 0.0, 0.0]);
    }

    // ── paths ─────────────────────────────────────────────────────────────

    #[test]
    fn rtl_path_equals_ltr_path_of_mirrored_corners() {
        let sets = [
            CornerSet::new(1.0, 2.0, 3.0, 4.0),
            CornerSet::new(0.0, 30.0, 0.0, 12.5),
            CornerSet::new(80.0, 0.0, 0.0, 0.0),
            CornerSet::zero(),
            CornerSet::all(10.0),
        ];
        for corners in sets {
            let rtl = compute_path(view(), corners, LayoutDirection::Rtl);
            let ltr = compute_path(view(), corners.mirrored(), LayoutDirection::Ltr);
            assert_eq!(rtl, ltr, "corners {corners:?}");
        }
    }

    #[test]
    fn uniform_twenty_on_200_by_100() {
        let path = compute_path(view(), CornerSet::all(20.0), LayoutDirection::Ltr);
        assert!(!path.is_empty());
        assert!(path.bounds().unwrap().approx_eq(view(), 1e-3));
        assert_eq!(path.arcs().count(), 4);
        assert!(path.arcs().all(|a| a.is_circular(20.0, 1e-4)));
    }

    #[test]
    fn empty_bounds_produce_empty_path() {
        let path = compute_path(Rect::new(0.0, 0.0, 0.0, 0.0), CornerSet::all(20.0), LayoutDirection::Ltr);
        assert!(path.is_empty());
    }
}
