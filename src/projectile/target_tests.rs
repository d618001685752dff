use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::models::{Arena, Vector2D};
use crate::projectile::{check_hit, Target, TargetPlacement};
use crate::utils::PhysicsError;

fn target() -> Target {
    Target::new(10.0, 2.0, 1.0, 4.0).unwrap()
}

#[test]
fn test_target_rejects_bad_dimensions() {
    assert!(matches!(Target::new(0.0, 0.0, 0.0, 1.0), Err(PhysicsError::InvalidRange(_))));
    assert!(matches!(Target::new(0.0, 0.0, 1.0, -1.0), Err(PhysicsError::InvalidRange(_))));
    assert!(matches!(Target::new(f64::NAN, 0.0, 1.0, 1.0), Err(PhysicsError::InvalidRange(_))));
}

#[test]
fn test_target_geometry() {
    let t = target();
    assert_eq!(t.min(), Vector2D::new(10.0, 2.0));
    assert_eq!(t.max(), Vector2D::new(11.0, 6.0));
    assert_eq!(t.center(), Vector2D::new(10.5, 4.0));
}

#[test]
fn test_hit_when_center_inside() {
    assert!(check_hit(Vector2D::new(10.5, 3.0), 0.1, &target()));
}

#[test]
fn test_hit_on_edge_contact() {
    // Circle touching the left edge exactly.
    assert!(check_hit(Vector2D::new(9.5, 4.0), 0.5, &target()));
    assert!(!check_hit(Vector2D::new(9.4, 4.0), 0.5, &target()));
}

#[test]
fn test_corner_uses_exact_distance() {
    // Offset (0.4, 0.4) from the top-left corner: inside the grown box, distance ~0.566.
    let near_corner = Vector2D::new(9.6, 6.4);
    assert!(!check_hit(near_corner, 0.5, &target()));
    assert!(check_hit(near_corner, 0.6, &target()));
}

#[test]
fn test_relocate_keeps_target_inside_arena() {
    let arena = Arena::new(16.0, 12.0).unwrap();
    let placement = TargetPlacement { x_range: (8.0, 20.0), y_range: (0.0, 20.0) };
    let mut rng = StdRng::seed_from_u64(7);
    let mut t = target();
    for _ in 0..200 {
        t.relocate(&placement, &arena, &mut rng).unwrap();
        assert!(t.is_inside(&arena));
        assert!(t.x >= 8.0);
    }
}

#[test]
fn test_relocate_fails_without_room() {
    let arena = Arena::new(16.0, 12.0).unwrap();
    let placement = TargetPlacement { x_range: (15.5, 16.0), y_range: (0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(7);
    let mut t = target();
    let before = t;
    assert!(matches!(t.relocate(&placement, &arena, &mut rng), Err(PhysicsError::InvalidRange(_))));
    assert_eq!(t, before);
}
