use glam::Vec2;

/// Rotate a set of points around `origin` by `angle_deg` degrees.
///
/// Canvas coordinates have y growing downward, so positive angles turn
/// clockwise on screen. The input is left untouched; a freshly rotated
/// copy comes back in the same order.
pub fn rotate_points(points: &[Vec2], angle_deg: f32, origin: Vec2) -> Vec<Vec2> {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    points
        .iter()
        .map(|&point| {
            let rel = point - origin;
            Vec2::new(
                origin.x + cos * rel.x - sin * rel.y,
                origin.y + sin * rel.x + cos * rel.y,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn assert_points_close(actual: &[Vec2], expected: &[Vec2]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                (*a - *e).length() < EPSILON,
                "point {:?} should be close to {:?}",
                a,
                e
            );
        }
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let points = vec![
            Vec2::new(3.0, 4.0),
            Vec2::new(-7.5, 0.0),
            Vec2::new(120.0, -42.0),
        ];
        let rotated = rotate_points(&points, 0.0, Vec2::new(10.0, 10.0));
        assert_points_close(&rotated, &points);
    }

    #[test]
    fn test_origin_is_a_fixed_point() {
        let origin = Vec2::new(300.0, 200.0);
        for angle in [0.0, 45.0, 90.0, 135.0, 180.0, 273.5, -30.0] {
            let rotated = rotate_points(&[origin], angle, origin);
            assert_points_close(&rotated, &[origin]);
        }
    }

    #[test]
    fn test_quarter_turn() {
        // With y pointing down, +90 degrees sends +x to +y.
        let rotated = rotate_points(&[Vec2::new(1.0, 0.0)], 90.0, Vec2::ZERO);
        assert_points_close(&rotated, &[Vec2::new(0.0, 1.0)]);
    }

    #[test]
    fn test_rotations_compose() {
        let points = vec![Vec2::new(50.0, -20.0), Vec2::new(-3.0, 8.0)];
        let origin = Vec2::new(5.0, 5.0);

        let twice = rotate_points(&rotate_points(&points, 50.0, origin), 70.0, origin);
        let once = rotate_points(&points, 120.0, origin);
        assert_points_close(&twice, &once);

        // Composition also holds past a full turn.
        let wrapped = rotate_points(&rotate_points(&points, 300.0, origin), 120.0, origin);
        let direct = rotate_points(&points, 60.0, origin);
        assert_points_close(&wrapped, &direct);
    }

    #[test]
    fn test_empty_input() {
        assert!(rotate_points(&[], 45.0, Vec2::ZERO).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let points = vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let rotated = rotate_points(&points, 180.0, Vec2::ZERO);
        assert_points_close(&rotated, &[Vec2::new(-1.0, 0.0), Vec2::new(0.0, -1.0)]);
    }
}
