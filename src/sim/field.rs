//! The playfield: a fixed row of slots and the per-tick spawn simulation

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::slot::Slot;
use super::state::GameEvent;
use crate::consts::{NUM_SLOTS, SLOT_POSITIONS};
use crate::tuning::DifficultyProfile;

/// All slots, in stable index order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnField {
    slots: [Slot; NUM_SLOTS],
}

impl Default for SpawnField {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnField {
    pub fn new() -> Self {
        Self {
            slots: SLOT_POSITIONS.map(Slot::new),
        }
    }

    /// Empty every slot (round start)
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.occupied = false;
            slot.lifetime = 0.0;
            slot.spawned_at = 0.0;
        }
    }

    /// Advance one tick: empty slots may spawn, occupied slots may expire.
    ///
    /// Spawn chance is 1 in `spawn_chance_denominator` per slot per tick, so
    /// the effective rate follows the tick rate.
    pub fn tick<R: Rng>(
        &mut self,
        profile: &DifficultyProfile,
        now: f64,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        let denominator = profile.spawn_chance_denominator.max(1);
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if !slot.occupied {
                if rng.random_range(0..denominator) == 0 {
                    slot.spawn(profile, now, rng);
                    log::debug!("Target up in slot {} for {:.2}s", index, slot.lifetime);
                    events.push(GameEvent::TargetSpawned { slot: index });
                }
            } else if slot.tick(now) {
                log::debug!("Target escaped from slot {}", index);
                events.push(GameEvent::TargetEscaped { slot: index });
            }
        }
    }

    /// Strike at `point`; the first occupied slot in index order that
    /// covers it is hit. Returns the slot index.
    pub fn handle_click(&mut self, point: Vec2) -> Option<usize> {
        self.slots.iter_mut().position(|slot| slot.try_hit(point))
    }

    /// Whether `point` is over any visible target
    pub fn is_over_target(&self, point: Vec2) -> bool {
        self.slots.iter().any(|slot| slot.covers(point))
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// (index, centre) of every occupied slot
    pub fn occupied(&self) -> impl Iterator<Item = (usize, Vec2)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.occupied)
            .map(|(index, slot)| (index, slot.position))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.occupied).count()
    }
}
