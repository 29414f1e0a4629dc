/*
 * 3D Boid Flocking Core - Module Definitions
 *
 * This file defines the module structure for the flocking simulation core.
 * Rendering, camera controls and the GUI panel live in the host application;
 * this crate only owns the per-tick kinematics.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use flock::Flock;
pub use params::FlockParams;
pub use physics::step;

// Define modules
pub mod boid;
pub mod flock;
pub mod params;
pub mod physics;

// Constants
pub const INITIAL_FLOCK_SIZE: usize = 20;
pub const SPAWN_BATCH_SIZE: usize = 10;
