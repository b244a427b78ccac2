//! Directional classification of a displacement vector
//!
//! A heading in degrees (see [`heading_degrees`]) is bucketed into up to
//! two of four directions. Each direction owns the sector
//! `center ± (90 - tolerance)`:
//! - tolerance 45 gives four-way input (one direction, two on the exact
//!   diagonals)
//! - tolerance 22.5 gives eight-way input (diagonals set two flags)
//!
//! Bounds are inclusive on both sides, so at an exact sector edge two
//! adjacent flags can be set at once.

use glam::Vec2;

use crate::geom::heading_degrees;

/// Tolerance for four-direction input
pub const FOUR_WAY: f32 = 45.0;
/// Tolerance for eight-direction input
pub const EIGHT_WAY: f32 = 22.5;
/// Displacements at or below this length are treated as a centered stick
pub const NEUTRAL_RADIUS: f32 = 5.0;

/// Active direction flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Directions {
    /// Bucket a heading (degrees, `[0, 360]`) with the given tolerance
    pub fn from_heading(deg: f32, tolerance: f32) -> Self {
        let t = tolerance;
        Self {
            left: 90.0 + t <= deg && deg <= 270.0 - t,
            right: deg <= 90.0 - t || 270.0 + t <= deg,
            down: 180.0 + t <= deg && deg <= 360.0 - t,
            up: t <= deg && deg <= 180.0 - t,
        }
    }

    /// Number of active flags
    pub fn count(&self) -> usize {
        [self.left, self.right, self.up, self.down]
            .iter()
            .filter(|&&f| f)
            .count()
    }

    pub fn is_neutral(&self) -> bool {
        self.count() == 0
    }
}

/// Classify a displacement. Returns `None` when it is within the neutral
/// radius, meaning the point should be ignored altogether.
pub fn classify(d: Vec2, tolerance: f32) -> Option<Directions> {
    if d.length() <= NEUTRAL_RADIUS {
        return None;
    }
    Some(Directions::from_heading(heading_degrees(d), tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DIAGONALS: [f32; 4] = [45.0, 135.0, 225.0, 315.0];

    fn dirs(left: bool, right: bool, up: bool, down: bool) -> Directions {
        Directions { left, right, up, down }
    }

    #[test]
    fn test_four_way_axes() {
        assert_eq!(Directions::from_heading(0.0, FOUR_WAY), dirs(false, true, false, false));
        assert_eq!(Directions::from_heading(90.0, FOUR_WAY), dirs(false, false, true, false));
        assert_eq!(Directions::from_heading(180.0, FOUR_WAY), dirs(true, false, false, false));
        assert_eq!(Directions::from_heading(270.0, FOUR_WAY), dirs(false, false, false, true));
        assert_eq!(Directions::from_heading(360.0, FOUR_WAY), dirs(false, true, false, false));
    }

    #[test]
    fn test_four_way_diagonal_boundaries_overlap() {
        // Inclusive bounds: both neighbours claim the exact diagonal
        assert_eq!(Directions::from_heading(45.0, FOUR_WAY), dirs(false, true, true, false));
        assert_eq!(Directions::from_heading(135.0, FOUR_WAY), dirs(true, false, true, false));
        assert_eq!(Directions::from_heading(225.0, FOUR_WAY), dirs(true, false, false, true));
        assert_eq!(Directions::from_heading(315.0, FOUR_WAY), dirs(false, true, false, true));
    }

    #[test]
    fn test_eight_way_sectors() {
        assert_eq!(Directions::from_heading(45.0, EIGHT_WAY), dirs(false, true, true, false));
        assert_eq!(Directions::from_heading(10.0, EIGHT_WAY), dirs(false, true, false, false));
        assert_eq!(Directions::from_heading(200.0, EIGHT_WAY), dirs(true, false, false, false));
        assert_eq!(Directions::from_heading(300.0, EIGHT_WAY), dirs(false, true, false, true));
    }

    #[test]
    fn test_classify_diagonal_up_left() {
        // Touch at (50, 50) against a rect centered at (100, 100)
        let d = Vec2::new(50.0, 50.0) - Vec2::new(100.0, 100.0);
        let got = classify(d, EIGHT_WAY).unwrap();
        assert_eq!(got, dirs(true, false, true, false));
    }

    #[test]
    fn test_classify_neutral_radius_inclusive() {
        assert_eq!(classify(Vec2::new(3.0, 4.0), FOUR_WAY), None);
        assert_eq!(classify(Vec2::ZERO, EIGHT_WAY), None);
        assert!(classify(Vec2::new(5.1, 0.0), FOUR_WAY).is_some());
    }

    proptest! {
        #[test]
        fn prop_four_way_exactly_one_off_diagonal(x in -500.0f32..500.0, y in -500.0f32..500.0) {
            let d = Vec2::new(x, y);
            prop_assume!(d.length() > NEUTRAL_RADIUS);
            let deg = heading_degrees(d);
            prop_assume!(DIAGONALS.iter().all(|diag| (deg - diag).abs() > 1e-3));
            let got = classify(d, FOUR_WAY).unwrap();
            prop_assert_eq!(got.count(), 1);
        }

        #[test]
        fn prop_neutral_inside_radius(angle in 0.0f32..360.0, r in 0.0f32..=5.0) {
            let d = Vec2::new(r * angle.to_radians().cos(), r * angle.to_radians().sin());
            prop_assume!(d.length() <= NEUTRAL_RADIUS);
            prop_assert_eq!(classify(d, FOUR_WAY), None);
            prop_assert_eq!(classify(d, EIGHT_WAY), None);
        }

        #[test]
        fn prop_eight_way_one_or_two_adjacent(deg in 0.0f32..360.0) {
            let got = Directions::from_heading(deg, EIGHT_WAY);
            prop_assert!(got.count() == 1 || got.count() == 2);
            prop_assert!(!(got.left && got.right));
            prop_assert!(!(got.up && got.down));
        }
    }
}
