//! A single target slot

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::random::draw_duration;
use crate::circle_contains;
use crate::consts::SLOT_HIT_RADIUS;
use crate::tuning::DifficultyProfile;

/// One fixed spawn point and its current occupant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Centre of the slot (never changes)
    pub position: Vec2,
    /// Whether a target is currently up
    pub occupied: bool,
    /// Lifetime drawn for the current target (seconds)
    pub lifetime: f32,
    /// Time the current target appeared
    pub spawned_at: f64,
}

impl Slot {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            occupied: false,
            lifetime: 0.0,
            spawned_at: 0.0,
        }
    }

    /// Raise a target. Callers only spawn into empty slots.
    pub fn spawn<R: Rng>(&mut self, profile: &DifficultyProfile, now: f64, rng: &mut R) {
        debug_assert!(!self.occupied, "spawn into occupied slot");
        self.occupied = true;
        self.lifetime = draw_duration(rng, profile.min_target_lifetime, profile.max_target_lifetime);
        self.spawned_at = now;
    }

    /// Expire an overdue target. Returns true if it escaped on this call.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.occupied && now - self.spawned_at > self.lifetime as f64 {
            self.occupied = false;
            return true;
        }
        false
    }

    /// Whether `point` lies over the current target
    pub fn covers(&self, point: Vec2) -> bool {
        self.occupied && circle_contains(self.position, SLOT_HIT_RADIUS, point)
    }

    /// Strike at `point`. Clears the slot and returns true on a hit.
    pub fn try_hit(&mut self, point: Vec2) -> bool {
        if self.covers(point) {
            self.occupied = false;
            return true;
        }
        false
    }

    /// Seconds the current target has been up
    pub fn age(&self, now: f64) -> f64 {
        now - self.spawned_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawned(now: f64) -> Slot {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut slot = Slot::new(Vec2::new(500.0, 500.0));
        slot.spawn(&DifficultyProfile::normal(), now, &mut rng);
        slot
    }

    #[test]
    fn test_spawn_draws_lifetime_in_range() {
        let slot = spawned(3.0);
        let profile = DifficultyProfile::normal();
        assert!(slot.occupied);
        assert_eq!(slot.spawned_at, 3.0);
        assert!(slot.lifetime >= profile.min_target_lifetime);
        assert!(slot.lifetime <= profile.max_target_lifetime);
    }

    #[test]
    fn test_hit_only_once_per_spawn() {
        let mut slot = spawned(0.0);
        let center = slot.position;
        assert!(slot.try_hit(center));
        assert!(!slot.occupied);
        assert!(!slot.try_hit(center));
    }

    #[test]
    fn test_hit_radius_boundary() {
        let mut slot = spawned(0.0);
        let miss = slot.position + Vec2::new(SLOT_HIT_RADIUS + 0.01, 0.0);
        assert!(!slot.try_hit(miss));
        assert!(slot.occupied);
        let edge = slot.position + Vec2::new(0.0, SLOT_HIT_RADIUS);
        assert!(slot.try_hit(edge));
    }

    #[test]
    fn test_empty_slot_cannot_be_hit() {
        let mut slot = Slot::new(Vec2::ZERO);
        assert!(!slot.try_hit(Vec2::ZERO));
    }

    #[test]
    fn test_expiry_strictly_after_lifetime() {
        let mut slot = spawned(10.0);
        let lifetime = slot.lifetime as f64;
        assert!(!slot.tick(10.0 + lifetime * 0.5));
        assert!(slot.occupied);
        assert!(slot.tick(10.0 + lifetime + 0.001));
        assert!(!slot.occupied);
        // Already expired: nothing further happens
        assert!(!slot.tick(10.0 + lifetime + 1.0));
    }
}
