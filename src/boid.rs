/*
 * Boid Module
 *
 * This module defines the Boid struct: position and velocity driven by the
 * flocking rules each tick, plus visual attributes (radius, color) that are
 * fixed at creation and never touched by the simulator. The host render
 * layer reads them once when it builds the boid's mesh.
 */

use glam::Vec3;
use rand::Rng;

use crate::params::FlockParams;

// Mesh colors cycled through by the spawn seed
pub const PALETTE: [[u8; 3]; 7] = [
    [255, 255, 0], // yellow
    [255, 0, 0],   // red
    [0, 0, 255],   // blue
    [255, 165, 0], // orange
    [75, 0, 130],  // indigo
    [128, 0, 128], // purple
    [0, 128, 0],   // green
];

#[derive(Debug, Clone)]
pub struct Boid {
    pub id: u64,
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub color: [u8; 3],
}

impl Boid {
    pub fn new(id: u64, position: Vec3, velocity: Vec3) -> Self {
        Self {
            id,
            position,
            velocity,
            radius: 1.0,
            color: PALETTE[0],
        }
    }

    // Create a boid with a random position inside the spawn volume and a
    // random initial velocity with components in [0, 1). A single seed picks
    // both radius and color so larger boids keep a consistent look.
    pub fn random(id: u64, params: &FlockParams) -> Self {
        let mut rng = rand::thread_rng();
        let extent = params.spawn_extent.max(0.0);

        let position = Vec3::new(
            rng.gen_range(-extent..=extent),
            rng.gen_range(-extent..=extent),
            rng.gen_range(-extent..=extent),
        );
        let velocity = Vec3::new(rng.gen(), rng.gen(), rng.gen());

        let seed: f32 = rng.gen();
        Self {
            id,
            position,
            velocity,
            radius: (seed * 10.0).floor(),
            color: PALETTE[(seed * PALETTE.len() as f32) as usize % PALETTE.len()],
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
