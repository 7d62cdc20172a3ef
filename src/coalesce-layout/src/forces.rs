//! Force functions for the spring simulation.
//!
//! The potential per node is V(n) = Σ_{i ∈ neighbors(n)} f(dist(n, i))
//! + Σ_{i} g(dist(n, i)) with f(x) = d[A·(e^(-x²/B) + e^(-x/B))]/dx and
//! g(x) = d[C·e^(-x)/x²]/dx; the functions below are those derivatives.

use crate::geom::Vec2;

const ATTRACTION_A: f32 = -2.0;
const ATTRACTION_B: f32 = 12.0;
const REPULSION_C: f32 = 1.6;

/// Scalar attraction between graph-adjacent nodes at `distance`.
pub fn attractive_force(distance: f32) -> f32 {
    let m = 2.0 * ATTRACTION_A / ATTRACTION_B;

    (-distance * distance / ATTRACTION_B).exp() * distance * m
        + (-distance / ATTRACTION_B).exp() * (ATTRACTION_A / ATTRACTION_B)
}

/// Scalar repulsion between any two nodes at `distance`. Clamped below
/// 0.5 to avoid blowups, zero beyond the 10.0 cutoff.
pub fn repulsive_force(distance: f32) -> f32 {
    let distance = distance.max(0.5);
    if distance >= 10.0 {
        return 0.0;
    }

    REPULSION_C * (-distance).exp() * (distance + 2.0) / (distance * distance * distance)
}

/// Weak pull toward the origin, growing with the square root of the
/// distance. Zero at the origin itself.
pub fn gravity(position: Vec2) -> Vec2 {
    let distance = position.length();
    if distance == 0.0 {
        return Vec2::ZERO;
    }
    -position.normalized() * distance.sqrt() * 0.001
}

/// Gradient of the distance to `other` with respect to `position`: the
/// unit vector pointing from `other` toward `position`. Zero for
/// coincident points, where the gradient is undefined.
pub fn distance_gradient(position: Vec2, other: Vec2) -> Vec2 {
    (position - other).normalized()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attraction_pulls_at_range() {
        // At moderate range the attractive term is negative, pulling the
        // node back along the distance gradient.
        assert!(attractive_force(3.0) < 0.0);
        assert!(attractive_force(3.0).is_finite());
    }

    #[test]
    fn test_repulsion_clamps_and_cuts_off() {
        assert_eq!(repulsive_force(0.0), repulsive_force(0.5));
        assert_eq!(repulsive_force(0.1), repulsive_force(0.4));
        assert_eq!(repulsive_force(10.0), 0.0);
        assert_eq!(repulsive_force(25.0), 0.0);
        assert!(repulsive_force(1.0) > 0.0);
    }

    #[test]
    fn test_repulsion_decreases_with_distance() {
        assert!(repulsive_force(1.0) > repulsive_force(2.0));
        assert!(repulsive_force(2.0) > repulsive_force(5.0));
    }

    #[test]
    fn test_gravity_points_at_origin() {
        let position = Vec2::new(4.0, 0.0);
        let pull = gravity(position);
        assert!(pull.x < 0.0);
        assert_eq!(pull.y, 0.0);

        assert_eq!(gravity(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_distance_gradient_is_unit_or_zero() {
        let gradient = distance_gradient(Vec2::new(2.0, 0.0), Vec2::new(-1.0, 0.0));
        assert_eq!(gradient, Vec2::new(1.0, 0.0));

        let coincident = distance_gradient(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0));
        assert_eq!(coincident, Vec2::ZERO);
    }
}
