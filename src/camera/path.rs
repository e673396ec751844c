//! Waypoint generation and the smooth curve the camera rides along.
//!
//! The curve is an open Catmull-Rom spline through the waypoints in
//! generation order. A global parameter `t` in [0, 1] selects segment
//! `floor(t * (n - 1))`; the first and last segments are closed off with
//! phantom points mirrored through the end waypoints.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::PathError;

const KNOT_EPSILON: f32 = 1e-4;

/// Knot spacing of the Catmull-Rom spline.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurveType {
    /// Knots spaced by the square root of the segment length. No cusps or
    /// self-intersections within a segment.
    #[default]
    Centripetal,
    /// Knots spaced by segment length.
    Chordal,
    /// Evenly spaced knots with the given tangent tension (0.5 is the
    /// classic Catmull-Rom).
    Uniform { tension: f32 },
}

/// Generates `count` waypoints at a fixed `height`, x and z drawn uniformly
/// from `[-range, range)`. Order is generation order.
pub fn generate_waypoints<R: Rng>(
    count: usize,
    range: f32,
    height: f32,
    rng: &mut R,
) -> Result<Vec<Vec3>, PathError> {
    if count == 0 {
        return Err(PathError::NoWaypoints);
    }
    if !range.is_finite() || range < 0.0 {
        return Err(PathError::InvalidRange(range));
    }

    let mut waypoints = Vec::with_capacity(count);
    for _ in 0..count {
        let x = random_coordinate(range, rng);
        let z = random_coordinate(range, rng);
        waypoints.push(Vec3::new(x, height, z));
    }
    Ok(waypoints)
}

// Scales a unit sample so `2 * range` is never formed; it overflows near f32::MAX.
fn random_coordinate<R: Rng>(range: f32, rng: &mut R) -> f32 {
    range * (2.0 * rng.random::<f32>() - 1.0)
}

/// Clamps a progress value into [0, 1]. NaN maps to 0.
pub fn clamp_progress(t: f32) -> f32 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Cubic `c0 + c1 w + c2 w^2 + c3 w^3`, one per segment.
#[derive(Copy, Clone, Debug)]
struct CubicPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicPoly {
    /// Hermite form from endpoints and tangents.
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn uniform(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, tension: f32) -> Self {
        Self::hermite(p1, p2, tension * (p2 - p0), tension * (p3 - p1))
    }

    fn non_uniform(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, dt: [f32; 3]) -> Self {
        let [dt0, dt1, dt2] = dt;
        let t1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let t2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;
        Self::hermite(p1, p2, t1, t2)
    }

    fn at(&self, w: f32) -> Vec3 {
        let w2 = w * w;
        let w3 = w2 * w;
        self.c0 + self.c1 * w + self.c2 * w2 + self.c3 * w3
    }
}

/// Open Catmull-Rom curve through an ordered waypoint list.
#[derive(Clone, Debug)]
pub struct CameraPath {
    waypoints: Vec<Vec3>,
    curve: CurveType,
}

impl CameraPath {
    /// Centripetal curve through `waypoints`.
    pub fn new(waypoints: Vec<Vec3>) -> Result<Self, PathError> {
        Self::with_curve(waypoints, CurveType::default())
    }

    pub fn with_curve(waypoints: Vec<Vec3>, curve: CurveType) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints(waypoints.len()));
        }
        Ok(Self { waypoints, curve })
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    pub fn curve_type(&self) -> CurveType {
        self.curve
    }

    /// Point on the curve at normalized parameter `t`, clamped into [0, 1].
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let t = clamp_progress(t);
        let n = self.waypoints.len();

        let scaled = (n - 1) as f32 * t;
        let mut segment = scaled.floor() as usize;
        let mut weight = scaled - segment as f32;
        if segment >= n - 1 {
            segment = n - 2;
            weight = 1.0;
        }

        let p1 = self.waypoints[segment];
        let p2 = self.waypoints[segment + 1];
        // Exact end point instead of the rounded cubic
        if weight >= 1.0 {
            return p2;
        }
        let p0 = if segment > 0 {
            self.waypoints[segment - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if segment + 2 < n {
            self.waypoints[segment + 2]
        } else {
            p2 * 2.0 - p1
        };

        self.segment(p0, p1, p2, p3).at(weight)
    }

    /// `divisions + 1` evenly spaced parameter samples, both ends included.
    pub fn sample(&self, divisions: usize) -> Vec<Vec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.evaluate(i as f32 / divisions as f32))
            .collect()
    }

    fn segment(&self, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> CubicPoly {
        // Exponents apply to squared distances
        let exponent = match self.curve {
            CurveType::Uniform { tension } => return CubicPoly::uniform(p0, p1, p2, p3, tension),
            CurveType::Centripetal => 0.25,
            CurveType::Chordal => 0.5,
        };

        let mut dt0 = p0.distance_squared(p1).powf(exponent);
        let mut dt1 = p1.distance_squared(p2).powf(exponent);
        let mut dt2 = p2.distance_squared(p3).powf(exponent);

        // Repeated points
        if dt1 < KNOT_EPSILON {
            dt1 = 1.0;
        }
        if dt0 < KNOT_EPSILON {
            dt0 = dt1;
        }
        if dt2 < KNOT_EPSILON {
            dt2 = dt1;
        }

        CubicPoly::non_uniform(p0, p1, p2, p3, [dt0, dt1, dt2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square_path(curve: CurveType) -> CameraPath {
        CameraPath::with_curve(
            vec![
                Vec3::new(0.0, 10.0, 0.0),
                Vec3::new(10.0, 10.0, 0.0),
                Vec3::new(10.0, 10.0, 10.0),
                Vec3::new(0.0, 10.0, 10.0),
            ],
            curve,
        )
        .unwrap()
    }

    #[test]
    fn test_clamp_progress() {
        assert_eq!(clamp_progress(-0.3), 0.0);
        assert_eq!(clamp_progress(1.7), 1.0);
        assert_eq!(clamp_progress(0.25), 0.25);
        assert_eq!(clamp_progress(f32::NAN), 0.0);
    }

    #[test]
    fn test_generate_zero_range_collapses_to_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let points = generate_waypoints(4, 0.0, 2.0, &mut rng).unwrap();
        assert!(points.iter().all(|p| *p == Vec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_generate_rejects_bad_input() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate_waypoints(0, 1.0, 0.0, &mut rng), Err(PathError::NoWaypoints));
        assert_eq!(
            generate_waypoints(3, -1.0, 0.0, &mut rng),
            Err(PathError::InvalidRange(-1.0))
        );
        assert!(generate_waypoints(3, f32::INFINITY, 0.0, &mut rng).is_err());
    }

    #[test]
    fn test_generate_huge_range_stays_finite() {
        let mut rng = StdRng::seed_from_u64(1);
        let points = generate_waypoints(3, f32::MAX, 10.0, &mut rng).unwrap();
        assert_eq!(points.len(), 3);
        for p in &points {
            assert!(p.is_finite(), "non-finite waypoint {:?}", p);
            assert_eq!(p.y, 10.0);
        }
    }

    fn assert_near(actual: Vec3, expected: Vec3, curve: CurveType) {
        assert!(
            actual.distance(expected) < 1e-4,
            "{:?}: expected {:?}, got {:?}",
            curve,
            expected,
            actual
        );
    }

    #[test]
    fn test_square_midpoint_reference_values() {
        // Equal spacing: every knot parametrisation matches tension 0.5
        for curve in [
            CurveType::Centripetal,
            CurveType::Chordal,
            CurveType::Uniform { tension: 0.5 },
        ] {
            let path = square_path(curve);
            assert_near(path.evaluate(0.5), Vec3::new(11.25, 10.0, 5.0), curve);
        }

        let taut = CurveType::Uniform { tension: 1.0 };
        assert_near(square_path(taut).evaluate(0.5), Vec3::new(12.5, 10.0, 5.0), taut);
    }

    #[test]
    fn test_uneven_spacing_reference_values() {
        let waypoints = vec![
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(9.0, 0.0, 0.0),
        ];
        for (curve, x) in [
            (CurveType::Centripetal, 17.0 / 6.0),
            (CurveType::Chordal, 3.0),
            (CurveType::Uniform { tension: 0.5 }, 2.8125),
        ] {
            let path = CameraPath::with_curve(waypoints.clone(), curve).unwrap();
            assert_near(path.evaluate(0.5), Vec3::new(x, 0.0, 0.0), curve);
        }
    }

    #[test]
    fn test_just_below_one_approaches_last_waypoint() {
        for curve in [
            CurveType::Centripetal,
            CurveType::Chordal,
            CurveType::Uniform { tension: 0.5 },
        ] {
            let path = square_path(curve);
            let last = path.waypoints()[3];
            let near_end = path.evaluate(1.0 - 1e-6);
            assert!(near_end.is_finite());
            assert!(
                near_end.distance(last) < 1e-3,
                "{:?}: {:?} too far from {:?}",
                curve,
                near_end,
                last
            );
            assert_eq!(path.evaluate(1.0), last);
        }
    }

    #[test]
    fn test_every_curve_type_interpolates_waypoints() {
        for curve in [
            CurveType::Centripetal,
            CurveType::Chordal,
            CurveType::Uniform { tension: 0.5 },
        ] {
            let path = square_path(curve);
            for (i, waypoint) in path.waypoints().iter().enumerate() {
                let t = i as f32 / 3.0;
                let point = path.evaluate(t);
                assert!(
                    point.distance(*waypoint) < 1e-3,
                    "{:?} missed waypoint {} at t={}: {:?}",
                    curve,
                    i,
                    t,
                    point
                );
            }
        }
    }

    #[test]
    fn test_repeated_waypoints_stay_finite() {
        let path = CameraPath::new(vec![Vec3::ONE, Vec3::ONE, Vec3::ONE]).unwrap();
        for point in path.sample(16) {
            assert!(point.is_finite());
            assert!(point.distance(Vec3::ONE) < 1e-4);
        }
    }

    #[test]
    fn test_sample_includes_both_ends() {
        let path = square_path(CurveType::Centripetal);
        let samples = path.sample(8);
        assert_eq!(samples.len(), 9);
        assert!(samples[0].distance(path.waypoints()[0]) < 1e-4);
        assert!(samples[8].distance(path.waypoints()[3]) < 1e-3);
    }

    #[test]
    fn test_endpoints_are_exact() {
        let path = square_path(CurveType::Centripetal);
        assert_eq!(path.evaluate(0.0), path.waypoints()[0]);
        assert_eq!(path.evaluate(1.0), path.waypoints()[3]);
    }

    #[test]
    fn test_sample_zero_divisions_is_treated_as_one() {
        let path = square_path(CurveType::Chordal);
        assert_eq!(path.sample(0).len(), 2);
    }

    #[test]
    fn test_curve_type_serde() {
        let json = serde_json::to_string(&CurveType::Uniform { tension: 0.5 }).unwrap();
        assert_eq!(json, r#"{"type":"uniform","tension":0.5}"#);
        let parsed: CurveType = serde_json::from_str(r#"{"type":"centripetal"}"#).unwrap();
        assert_eq!(parsed, CurveType::Centripetal);
    }
}
