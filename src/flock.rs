/*
 * Flock Module
 *
 * This module defines the Flock collection: an ordered, grow-only list of
 * boids with stable unique ids. The neighbor rules exclude self by id, so
 * ids must never be reused; a monotonic counter owned by the flock
 * guarantees that. Boids are only ever added (initial population plus
 * click-to-spawn batches), never removed.
 */

use crate::boid::Boid;
use crate::params::FlockParams;

#[derive(Debug, Clone, Default)]
pub struct Flock {
    pub boids: Vec<Boid>,
    next_id: u64,
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    // Build the initial population: `count` boids randomized over the spawn
    // volume, the same way later spawn batches are.
    pub fn with_random(count: usize, params: &FlockParams) -> Self {
        let mut flock = Self::new();
        flock.spawn(count, params);
        flock
    }

    // Append `n` randomized boids and return the newly added slice so the
    // host can add a mesh per boid. Takes &mut self, so a spawn can never
    // land in the middle of a step's neighbor scan.
    pub fn spawn(&mut self, n: usize, params: &FlockParams) -> &[Boid] {
        let start = self.boids.len();
        self.boids.reserve(n);
        for _ in 0..n {
            let id = self.next_id;
            self.next_id += 1;
            self.boids.push(Boid::random(id, params));
        }
        &self.boids[start..]
    }

    // Append a pre-built boid, assigning it a fresh id
    pub fn push(&mut self, mut boid: Boid) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        boid.id = id;
        self.boids.push(boid);
        id
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::collections::HashSet;

    #[test]
    fn test_with_random_population_size() {
        let params = FlockParams::default();
        let flock = Flock::with_random(crate::INITIAL_FLOCK_SIZE, &params);
        assert_eq!(flock.len(), crate::INITIAL_FLOCK_SIZE);
    }

    #[test]
    fn test_spawn_grows_by_exactly_n() {
        let params = FlockParams::default();
        let mut flock = Flock::with_random(20, &params);

        let spawned = flock.spawn(5, &params);
        assert_eq!(spawned.len(), 5);
        for boid in spawned {
            for axis in 0..3 {
                assert!(boid.position[axis].abs() <= params.spawn_extent);
                assert!(boid.velocity[axis] >= 0.0 && boid.velocity[axis] < 1.0);
            }
        }
        assert_eq!(flock.len(), 25);
    }

    #[test]
    fn test_ids_are_unique_across_spawns() {
        let params = FlockParams::default();
        let mut flock = Flock::with_random(10, &params);
        flock.spawn(crate::SPAWN_BATCH_SIZE, &params);
        flock.push(Boid::new(0, Vec3::ZERO, Vec3::ZERO));

        let ids: HashSet<u64> = flock.boids.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), flock.len());
    }

    #[test]
    fn test_push_overrides_caller_id() {
        let mut flock = Flock::new();
        let first = flock.push(Boid::new(99, Vec3::ZERO, Vec3::ZERO));
        let second = flock.push(Boid::new(99, Vec3::ZERO, Vec3::ZERO));
        assert_eq!(flock.boids[0].id, first);
        assert_eq!(flock.boids[1].id, second);
        assert_ne!(first, second);
    }
}
