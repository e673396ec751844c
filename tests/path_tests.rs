use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scroll_room::camera::{generate_waypoints, CameraPath, CurveType};
use scroll_room::error::PathError;

#[cfg(test)]
mod path_tests {
    use super::*;

    fn demo_path(seed: u64) -> CameraPath {
        let mut rng = StdRng::seed_from_u64(seed);
        let waypoints = generate_waypoints(10, 140.0, 10.0, &mut rng).unwrap();
        CameraPath::new(waypoints).unwrap()
    }

    #[test]
    fn test_generated_waypoints_respect_range_and_height() {
        let mut rng = StdRng::seed_from_u64(42);
        let waypoints = generate_waypoints(10, 140.0, 10.0, &mut rng).unwrap();

        assert_eq!(waypoints.len(), 10);
        for p in &waypoints {
            assert!(p.x.abs() <= 140.0, "x out of range: {}", p.x);
            assert!(p.z.abs() <= 140.0, "z out of range: {}", p.z);
            assert_eq!(p.y, 10.0);
        }
    }

    #[test]
    fn test_same_seed_same_waypoints() {
        let a = generate_waypoints(10, 140.0, 10.0, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_waypoints(10, 140.0, 10.0, &mut StdRng::seed_from_u64(9)).unwrap();
        let c = generate_waypoints(10, 140.0, 10.0, &mut StdRng::seed_from_u64(10)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_path_endpoints_are_first_and_last_waypoints() {
        let path = demo_path(1);
        let waypoints = path.waypoints();
        assert_eq!(path.evaluate(0.0), waypoints[0]);
        assert_eq!(path.evaluate(1.0), waypoints[waypoints.len() - 1]);
    }

    #[test]
    fn test_path_passes_through_interior_waypoints() {
        let path = demo_path(2);
        let n = path.waypoints().len();
        for (i, waypoint) in path.waypoints().iter().enumerate() {
            let t = i as f32 / (n - 1) as f32;
            assert!(
                path.evaluate(t).distance(*waypoint) < 1e-2,
                "waypoint {} missed at t={}",
                i,
                t
            );
        }
    }

    #[test]
    fn test_midpoint_stays_at_path_height() {
        let path = demo_path(3);
        let mid = path.evaluate(0.5);
        assert!(mid.is_finite());
        assert!((mid.y - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let path = demo_path(4);
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert_eq!(path.evaluate(t), path.evaluate(t));
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let path = demo_path(5);
        assert_eq!(path.evaluate(-1.0), path.evaluate(0.0));
        assert_eq!(path.evaluate(2.0), path.evaluate(1.0));
        assert_eq!(path.evaluate(f32::NAN), path.evaluate(0.0));
    }

    #[test]
    fn test_two_point_path_is_straight() {
        let start = Vec3::new(-50.0, 10.0, 20.0);
        let end = Vec3::new(50.0, 10.0, 20.0);
        for curve in [CurveType::Centripetal, CurveType::Chordal, CurveType::Uniform { tension: 0.5 }] {
            let path = CameraPath::with_curve(vec![start, end], curve).unwrap();
            let mut previous_x = f32::NEG_INFINITY;
            for point in path.sample(10) {
                assert!((point.y - 10.0).abs() < 1e-4);
                assert!((point.z - 20.0).abs() < 1e-4);
                assert!(point.x >= previous_x);
                previous_x = point.x;
            }
        }
    }

    #[test]
    fn test_too_few_waypoints_fails_fast() {
        assert_eq!(CameraPath::new(vec![]).unwrap_err(), PathError::TooFewWaypoints(0));
        assert_eq!(
            CameraPath::new(vec![Vec3::ZERO]).unwrap_err(),
            PathError::TooFewWaypoints(1)
        );
    }

    #[test]
    fn test_centripetal_is_default() {
        assert_eq!(demo_path(6).curve_type(), CurveType::Centripetal);
    }
}
