/*
 * Flock Parameters Module
 *
 * This module defines the FlockParams struct that contains all the adjustable
 * parameters for the flocking simulation. The host's control panel writes
 * into these fields directly; the simulator only ever reads them, once per
 * step, through sanitized(). Slider bounds for the panel are exposed as
 * associated range functions.
 */

// Parameters for the simulation that can be adjusted live by the host UI
#[derive(Debug, Clone, PartialEq)]
pub struct FlockParams {
    // Divisor applied to the pull toward the neighborhood center
    pub cohesion_factor: f32,
    // Hard cutoff below which boids push directly apart
    pub separation_distance: f32,
    // Divisor applied to the pull toward the neighborhood's average velocity
    pub match_velocity_factor: f32,
    // Perception radius for neighborhood gathering
    pub sight: f32,
    // Full edge length of the cubic world volume
    pub bounding_box_size: f32,
    // Cap on both the per-tick steering increment and the resulting speed
    pub max_speed: f32,
    // Per-axis correction applied while outside the world volume
    pub turn_factor: f32,
    // Half-extent of the cubic volume new boids spawn into
    pub spawn_extent: f32,
    // Whether cohesion averages only boids within sight, or the whole flock.
    // The two toggles exist because the upstream variants disagree.
    pub cohesion_uses_sight: bool,
    // Same choice for velocity matching
    pub matching_uses_sight: bool,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            cohesion_factor: 100.0,
            separation_distance: 100.0,
            match_velocity_factor: 8.0,
            sight: 125.0,
            bounding_box_size: 500.0,
            max_speed: 0.1,
            turn_factor: 0.1,
            spawn_extent: 1000.0,
            cohesion_uses_sight: true,
            matching_uses_sight: false,
        }
    }
}

impl FlockParams {
    // Copy of self with out-of-range values clamped to something the rules
    // can divide and compare against. The panel enforces its own slider
    // bounds; this is the simulator-side floor for values set from code.
    pub fn sanitized(&self) -> Self {
        Self {
            // The panel floors this at 0; a negative value set from code
            // would invert cohesion into repulsion
            cohesion_factor: self.cohesion_factor.max(0.0),
            separation_distance: self.separation_distance.max(0.0),
            match_velocity_factor: self.match_velocity_factor,
            sight: self.sight.max(0.0),
            bounding_box_size: self.bounding_box_size.max(0.0),
            max_speed: self.max_speed.max(0.0),
            turn_factor: self.turn_factor,
            spawn_extent: self.spawn_extent.max(0.0),
            cohesion_uses_sight: self.cohesion_uses_sight,
            matching_uses_sight: self.matching_uses_sight,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_match_velocity_factor_range() -> std::ops::RangeInclusive<f32> {
        -100.0..=100.0
    }

    pub fn get_cohesion_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=500.0
    }

    pub fn get_separation_distance_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1000.0
    }

    pub fn get_sight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1000.0
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }

    pub fn get_bounding_box_size_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_slider_ranges() {
        let params = FlockParams::default();
        assert!(FlockParams::get_match_velocity_factor_range().contains(&params.match_velocity_factor));
        assert!(FlockParams::get_cohesion_factor_range().contains(&params.cohesion_factor));
        assert!(FlockParams::get_separation_distance_range().contains(&params.separation_distance));
        assert!(FlockParams::get_sight_range().contains(&params.sight));
        assert!(FlockParams::get_max_speed_range().contains(&params.max_speed));
        assert!(FlockParams::get_bounding_box_size_range().contains(&params.bounding_box_size));
    }

    #[test]
    fn test_sanitized_clamps_negative_values() {
        let params = FlockParams {
            cohesion_factor: -50.0,
            separation_distance: -5.0,
            sight: -1.0,
            bounding_box_size: -100.0,
            max_speed: -0.5,
            spawn_extent: -10.0,
            ..FlockParams::default()
        };
        let clean = params.sanitized();
        assert_eq!(clean.cohesion_factor, 0.0);
        assert_eq!(clean.separation_distance, 0.0);
        assert_eq!(clean.sight, 0.0);
        assert_eq!(clean.bounding_box_size, 0.0);
        assert_eq!(clean.max_speed, 0.0);
        assert_eq!(clean.spawn_extent, 0.0);
    }

    #[test]
    fn test_sanitized_preserves_valid_values() {
        let params = FlockParams::default();
        assert_eq!(params.sanitized(), params);
    }
}
