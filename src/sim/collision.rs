//! Circular-footprint overlap test shared by catch detection

use glam::IVec2;

/// Two circular footprints collide when the distance between their centers
/// is less than the sum of their radii. Compared in squared integer space,
/// no square root needed.
pub fn circles_overlap(a: IVec2, radius_a: i32, b: IVec2, radius_b: i32) -> bool {
    let d = (a - b).as_i64vec2();
    let reach = (radius_a + radius_b) as i64;
    d.x * d.x + d.y * d.y < reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_circles_collide() {
        assert!(circles_overlap(IVec2::new(0, 0), 10, IVec2::new(12, 0), 10));
        assert!(circles_overlap(IVec2::new(5, 5), 3, IVec2::new(5, 5), 1));
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        // Distance exactly equal to the radius sum is not an overlap.
        assert!(!circles_overlap(IVec2::new(0, 0), 10, IVec2::new(20, 0), 10));
    }

    #[test]
    fn test_distant_circles_do_not_collide() {
        assert!(!circles_overlap(IVec2::new(0, 0), 4, IVec2::new(100, 100), 4));
    }
}
