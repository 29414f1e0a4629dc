/*
 * Physics Module
 *
 * This module advances the flock by one tick. Each boid sums four steering
 * rules against a snapshot of the previous tick's state:
 * 1. Cohesion: pull toward the average position of the neighborhood
 * 2. Separation: push directly away from boids closer than a threshold
 * 3. Velocity matching: pull toward the neighborhood's average velocity
 * 4. Bounds avoidance: fixed per-axis correction while outside the world box
 *
 * The snapshot is taken before any boid moves, so every boid steers against
 * the same previous-tick flock and iteration order cannot bias the result.
 */

use glam::Vec3;

use crate::flock::Flock;
use crate::params::FlockParams;

// One boid's kinematic state at the start of a step
#[derive(Debug, Clone, Copy)]
struct BoidState {
    id: u64,
    position: Vec3,
    velocity: Vec3,
}

// Advance every boid by one tick. dt scales position integration only;
// dt = 1.0 reproduces the classic one-velocity-per-frame step.
pub fn step(flock: &mut Flock, params: &FlockParams, dt: f32) {
    let params = params.sanitized();

    let snapshot: Vec<BoidState> = flock
        .boids
        .iter()
        .map(|b| BoidState {
            id: b.id,
            position: b.position,
            velocity: b.velocity,
        })
        .collect();

    for boid in &mut flock.boids {
        let current = BoidState {
            id: boid.id,
            position: boid.position,
            velocity: boid.velocity,
        };

        let steer = cohesion(&current, &snapshot, &params)
            + separation(&current, &snapshot, &params)
            + match_velocity(&current, &snapshot, &params)
            + stay_within_bounds(&current, &params);

        // The increment is capped at max_speed, and so is the resulting
        // speed; increments opposing the current heading still get through.
        boid.velocity += steer.clamp_length_max(params.max_speed);
        boid.velocity = boid.velocity.clamp_length_max(params.max_speed);
        boid.position += boid.velocity * dt;
    }
}

// Pull toward the average position of the neighborhood, damped by the
// cohesion factor. The neighborhood is either every other boid or only
// those within sight, depending on the gating toggle.
fn cohesion(boid: &BoidState, snapshot: &[BoidState], params: &FlockParams) -> Vec3 {
    let mut sum = Vec3::ZERO;
    let mut count = 0u32;

    for other in snapshot {
        if other.id == boid.id {
            continue;
        }
        if params.cohesion_uses_sight && boid.position.distance(other.position) >= params.sight {
            continue;
        }
        sum += other.position;
        count += 1;
    }

    if count == 0 {
        // Flock of one, or nobody in sight
        return Vec3::ZERO;
    }

    damp(sum / count as f32 - boid.position, params.cohesion_factor)
}

// Push away from every boid strictly within the separation distance.
// Deliberately a sum, not an average: a dense crowd pushes harder.
fn separation(boid: &BoidState, snapshot: &[BoidState], params: &FlockParams) -> Vec3 {
    let mut push = Vec3::ZERO;

    for other in snapshot {
        if other.id == boid.id {
            continue;
        }
        if boid.position.distance(other.position) < params.separation_distance {
            push -= other.position - boid.position;
        }
    }

    push
}

// Pull toward the neighborhood's average velocity, damped by the match
// factor. Gated by sight only when the toggle says so.
fn match_velocity(boid: &BoidState, snapshot: &[BoidState], params: &FlockParams) -> Vec3 {
    let mut sum = Vec3::ZERO;
    let mut count = 0u32;

    for other in snapshot {
        if other.id == boid.id {
            continue;
        }
        if params.matching_uses_sight && boid.position.distance(other.position) >= params.sight {
            continue;
        }
        sum += other.velocity;
        count += 1;
    }

    if count == 0 {
        return Vec3::ZERO;
    }

    damp(sum / count as f32 - boid.velocity, params.match_velocity_factor)
}

// Constant per-axis correction once a boid leaves the world box. A step
// function rather than a smooth force: boids overshoot the wall, then turn.
fn stay_within_bounds(boid: &BoidState, params: &FlockParams) -> Vec3 {
    let half = params.bounding_box_size / 2.0;
    let mut vec = Vec3::ZERO;

    for axis in 0..3 {
        if boid.position[axis] > half {
            vec[axis] -= params.turn_factor;
        }
        if boid.position[axis] < -half {
            vec[axis] += params.turn_factor;
        }
    }

    vec
}

// Divide a steering vector by its damping factor. A factor of zero means
// the rule is disabled; dividing through would turn a zero sum into NaN.
fn damp(v: Vec3, factor: f32) -> Vec3 {
    if factor.abs() > f32::EPSILON {
        v / factor
    } else {
        Vec3::ZERO
    }
}
