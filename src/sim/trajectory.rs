//! Edge-to-edge flight paths for spawned mice
//!
//! Every mouse crosses the screen along a straight line between two random
//! points on the playable area's perimeter. The per-tick velocity is an
//! integer approximation of that line's slope, so both axes advance by whole
//! pixels every frame with no fractional remainder to accumulate.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rectangular playable region in pixel coordinates.
///
/// Both dimensions must be strictly positive before any planning call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub width: i32,
    pub height: i32,
}

impl Area {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Shrink the area by a sprite footprint so that points chosen inside
    /// the trimmed area never place the sprite partially off screen.
    pub fn trimmed(self, footprint: IVec2) -> Self {
        Self {
            width: (self.width - footprint.x).max(1),
            height: (self.height - footprint.y).max(1),
        }
    }
}

/// A planned flight: where the mouse appears and how far it moves each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trajectory {
    pub start: IVec2,
    /// Fixed for the mouse's whole lifetime once planned.
    pub velocity: IVec2,
}

/// Pick a uniformly random point on the perimeter of `area`.
///
/// Each of the four edges is drawn with probability 1/4, then the point
/// slides to a random offset along that edge. Top and bottom edges yield
/// `x` in `[0, width)`; left and right edges yield `y` in `[0, height)`.
pub fn edge_point<R: Rng>(area: Area, rng: &mut R) -> IVec2 {
    match rng.random_range(0..4) {
        0 => IVec2::new(rng.random_range(0..area.width), 0), // top
        1 => IVec2::new(area.width, rng.random_range(0..area.height)), // right
        2 => IVec2::new(rng.random_range(0..area.width), area.height), // bottom
        _ => IVec2::new(0, rng.random_range(0..area.height)), // left
    }
}

/// Plan a flight across `area`: a random perimeter start, a random perimeter
/// end pushed to the far half of the screen, and the integer velocity of the
/// line between them scaled by `gain`.
pub fn plan<R: Rng>(area: Area, gain: i32, rng: &mut R) -> Trajectory {
    let start = edge_point(area, rng);
    let end = push_to_far_half(start, edge_point(area, rng), area);
    let delta = end - start;
    Trajectory {
        start,
        velocity: velocity_for(delta.x, delta.y, gain),
    }
}

/// Keep the two endpoints from landing a near-degenerate hop apart: an end
/// point in the same half of the screen as a left/right start edge is
/// mirrored into the opposite half, otherwise the symmetric rule applies on
/// the y axis for top/bottom start edges.
fn push_to_far_half(start: IVec2, mut end: IVec2, area: Area) -> IVec2 {
    if (start.x == 0 && end.x < area.width / 2)
        || (start.x == area.width && end.x > area.width / 2)
    {
        end.x = area.width - end.x;
    } else if (start.y == 0 && end.y < area.height / 2)
        || (start.y == area.height && end.y > area.height / 2)
    {
        end.y = area.height - end.y;
    }
    end
}

/// Integer per-tick velocity for a line with the given deltas.
///
/// Shallow lines (slope magnitude below 1) advance x by `gain` and y by the
/// rounded slope; steep lines (slope above `gain`) drop the x component and
/// advance y by `gain`; in between, y advances by `gain` and x by the slope
/// scaled by `gain` and rounded. Rounding is round-half-up on the
/// nonnegative magnitude (`f64::round`). A vertical line (`dx == 0`) yields
/// pure vertical motion at `gain`, straight down when `dy` is also zero.
/// The signs of `dx` and `dy` are reapplied last.
pub fn velocity_for(dx: i32, dy: i32, gain: i32) -> IVec2 {
    let slope = if dx != 0 {
        (dy as f64 / dx as f64).abs()
    } else {
        f64::INFINITY
    };

    let (mut vx, mut vy) = if slope < 1.0 {
        (gain, slope.round() as i32)
    } else if slope > gain as f64 {
        (0, gain)
    } else {
        ((slope * gain as f64).round() as i32, gain)
    };

    if dx < 0 {
        vx = -vx;
    }
    if dy < 0 {
        vy = -vy;
    }
    IVec2::new(vx, vy)
}
