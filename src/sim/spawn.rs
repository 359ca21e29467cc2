//! Mouse spawn timing and lifecycle
//!
//! Owns the live mouse set: spawns a new mouse when the spawn interval has
//! elapsed and the round is still running, advances every mouse by its fixed
//! velocity once per tick, and culls mice that have flown past the right or
//! bottom edge of the screen.

use glam::IVec2;
use rand::Rng;

use super::collision::circles_overlap;
use super::state::Mouse;
use super::trajectory::{self, Area};

/// Spawner configuration, fixed for the length of a round.
///
/// Difficulty multipliers are already applied by the time these values are
/// set; see [`crate::config::Config`].
#[derive(Debug, Clone, Copy)]
pub struct SpawnConfig {
    pub area: Area,
    pub spawn_interval_ms: u64,
    pub move_gain: i32,
    pub mouse_size: IVec2,
}

/// Spawns, advances, and retires the mice for one game session.
#[derive(Debug, Clone)]
pub struct MouseSpawner {
    config: SpawnConfig,
    /// Spawn order, which is also draw order (mice render under the cat).
    pub(crate) mice: Vec<Mouse>,
    last_spawn_ms: Option<u64>,
    next_id: u32,
}

impl MouseSpawner {
    pub fn new(config: SpawnConfig) -> Self {
        Self {
            config,
            mice: Vec::new(),
            last_spawn_ms: None,
            next_id: 1,
        }
    }

    /// Restart for a fresh round: clears live mice and re-arms the timer so
    /// the first active tick spawns immediately.
    pub fn reset(&mut self) {
        self.mice.clear();
        self.last_spawn_ms = None;
    }

    /// Advance one frame.
    ///
    /// `now_ms` comes from the caller's monotonic frame clock and must never
    /// go backward. At most one mouse spawns per call, and none once the
    /// round is over; mice already in flight keep moving either way.
    pub fn tick<R: Rng>(&mut self, now_ms: u64, round_active: bool, rng: &mut R) {
        if round_active && self.spawn_due(now_ms) {
            let flight = trajectory::plan(
                self.config.area.trimmed(self.config.mouse_size),
                self.config.move_gain,
                rng,
            );
            let id = self.next_id;
            self.next_id += 1;
            self.mice.push(Mouse::new(id, self.config.mouse_size, flight));
            self.last_spawn_ms = Some(now_ms);
        }

        for mouse in &mut self.mice {
            mouse.pos += mouse.velocity;
        }

        // Culling checks the untrimmed screen bounds, and only the right and
        // bottom edges; mice leaving past the left or top are never removed.
        let area = self.config.area;
        self.mice
            .retain(|m| m.pos.x <= area.width && m.pos.y <= area.height);
    }

    fn spawn_due(&self, now_ms: u64) -> bool {
        match self.last_spawn_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.config.spawn_interval_ms,
        }
    }

    /// Live mice in spawn order, read-only. Position changes flow through
    /// [`MouseSpawner::tick`] only.
    pub fn mice(&self) -> &[Mouse] {
        &self.mice
    }

    /// Remove every mouse whose circular footprint overlaps the given
    /// circle, returning the caught ids in spawn order.
    pub fn catch_overlapping(&mut self, center: IVec2, radius: i32) -> Vec<u32> {
        let mut caught = Vec::new();
        self.mice.retain(|m| {
            if circles_overlap(center, radius, m.center(), m.radius()) {
                caught.push(m.id);
                false
            } else {
                true
            }
        });
        caught
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::trajectory::Trajectory;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawner() -> MouseSpawner {
        MouseSpawner::new(SpawnConfig {
            area: Area::new(600, 400),
            spawn_interval_ms: 2000,
            move_gain: 5,
            mouse_size: IVec2::new(32, 32),
        })
    }

    fn plant(spawner: &mut MouseSpawner, id: u32, pos: IVec2, velocity: IVec2) {
        spawner.mice.push(Mouse::new(
            id,
            IVec2::new(32, 32),
            Trajectory {
                start: pos,
                velocity,
            },
        ));
    }

    #[test]
    fn test_spawn_interval_end_to_end() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut s = spawner();

        // First active tick spawns immediately.
        s.tick(0, true, &mut rng);
        assert_eq!(s.mice().len(), 1);
        let first_pos = s.mice()[0].pos;

        // Interval not yet elapsed: no spawn, existing mouse advanced once.
        s.tick(1999, true, &mut rng);
        assert_eq!(s.mice().len(), 1);
        assert_eq!(s.mice()[0].pos, first_pos + s.mice()[0].velocity);

        // Interval elapsed: second spawn, both mice advanced.
        s.tick(2001, true, &mut rng);
        assert_eq!(s.mice().len(), 2);
    }

    #[test]
    fn test_at_most_one_spawn_per_tick() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut s = spawner();
        s.tick(0, true, &mut rng);
        // Far more than one interval has passed, still only one new mouse.
        s.tick(100_000, true, &mut rng);
        assert_eq!(s.mice().len(), 2);
    }

    #[test]
    fn test_no_spawn_when_round_inactive() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut s = spawner();
        s.tick(10_000, false, &mut rng);
        s.tick(20_000, false, &mut rng);
        assert!(s.mice().is_empty());
    }

    #[test]
    fn test_inactive_tick_still_moves_mice() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut s = spawner();
        plant(&mut s, 1, IVec2::new(100, 100), IVec2::new(5, 2));
        s.tick(0, false, &mut rng);
        assert_eq!(s.mice()[0].pos, IVec2::new(105, 102));
    }

    #[test]
    fn test_mouse_past_right_or_bottom_is_culled() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut s = spawner();
        plant(&mut s, 1, IVec2::new(598, 100), IVec2::new(5, 0));
        plant(&mut s, 2, IVec2::new(100, 398), IVec2::new(0, 5));
        s.tick(0, false, &mut rng);
        assert!(s.mice().is_empty());
    }

    #[test]
    fn test_mouse_past_left_or_top_is_never_culled() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut s = spawner();
        plant(&mut s, 1, IVec2::new(-500, 100), IVec2::new(-5, 0));
        plant(&mut s, 2, IVec2::new(100, -500), IVec2::new(0, -5));
        s.tick(0, false, &mut rng);
        assert_eq!(s.mice().len(), 2);
    }

    #[test]
    fn test_spawned_mouse_sits_fully_on_screen() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut s = spawner();
        let mut now = 0;
        for _ in 0..50 {
            s.reset();
            s.tick(now, true, &mut rng);
            let m = &s.mice()[0];
            // Back out the spawn point: the mouse has advanced exactly once.
            let start = m.pos - m.velocity;
            assert!((0..=600 - 32).contains(&start.x), "start {start} off screen");
            assert!((0..=400 - 32).contains(&start.y), "start {start} off screen");
            now += 10_000;
        }
    }

    #[test]
    fn test_mice_view_is_idempotent_between_ticks() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut s = spawner();
        s.tick(0, true, &mut rng);
        let first: Vec<_> = s.mice().iter().map(|m| (m.id, m.pos)).collect();
        let second: Vec<_> = s.mice().iter().map(|m| (m.id, m.pos)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_catch_removes_overlapping_mice() {
        let mut s = spawner();
        plant(&mut s, 1, IVec2::new(100, 100), IVec2::ZERO);
        plant(&mut s, 2, IVec2::new(300, 300), IVec2::ZERO);
        let caught = s.catch_overlapping(IVec2::new(116, 116), 20);
        assert_eq!(caught, vec![1]);
        assert_eq!(s.mice().len(), 1);
        assert_eq!(s.mice()[0].pos, IVec2::new(300, 300));
    }
}
