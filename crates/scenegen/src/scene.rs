use crate::config::SceneConfig;
use crate::constants::*;
use crate::geometry::rotate_points;
use crate::location::Coordinate;
use crate::sun::{Season, is_northern_hemisphere, sun_direction};
use glam::Vec2;

/// Everything the renderer has to draw, in canvas pixel coordinates
/// with the origin at the top left and y growing downward.
#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub house: HouseShape,
    pub sun_path: SunPath,
    pub compass: [CompassLabel; 4],
    /// Rotation applied to the house, clockwise degrees from north.
    pub facing_deg: f32,
}

impl SceneLayout {
    /// Compose the full diagram for a resolved location.
    pub fn compose(coordinate: Coordinate, season: Season, config: &SceneConfig) -> Self {
        let center = Vec2::new(config.canvas.width / 2.0, config.canvas.height / 2.0);
        let facing_deg = sun_direction(coordinate.latitude, season);
        SceneLayout {
            house: HouseShape::at(center).rotated(facing_deg),
            sun_path: SunPath::around(
                center,
                config.sun_path.radius,
                is_northern_hemisphere(coordinate.latitude),
            ),
            compass: compass_labels(config.canvas.width, config.canvas.height, config.compass.margin),
            facing_deg,
        }
    }
}

/// The three polygons of the house sprite, sharing one rotation pivot.
/// The window sits on the side that faces the sun once rotated.
#[derive(Debug, Clone)]
pub struct HouseShape {
    pub center: Vec2,
    pub body: Vec<Vec2>,
    pub roof: Vec<Vec2>,
    pub window: Vec<Vec2>,
}

impl HouseShape {
    /// Unrotated sprite around `center`. At 0° the window faces north.
    pub fn at(center: Vec2) -> Self {
        let Vec2 { x: cx, y: cy } = center;
        HouseShape {
            center,
            body: vec![
                Vec2::new(cx - HOUSE_HALF_WIDTH, cy + HOUSE_BODY_DEPTH),
                Vec2::new(cx + HOUSE_HALF_WIDTH, cy + HOUSE_BODY_DEPTH),
                Vec2::new(cx + HOUSE_HALF_WIDTH, cy),
                Vec2::new(cx - HOUSE_HALF_WIDTH, cy),
            ],
            roof: vec![
                Vec2::new(cx - HOUSE_HALF_WIDTH, cy),
                Vec2::new(cx, cy - HOUSE_ROOF_PEAK),
                Vec2::new(cx + HOUSE_HALF_WIDTH, cy),
            ],
            window: vec![
                Vec2::new(cx + WINDOW_LEFT, cy + WINDOW_TOP),
                Vec2::new(cx + WINDOW_RIGHT, cy + WINDOW_TOP),
                Vec2::new(cx + WINDOW_RIGHT, cy + WINDOW_BOTTOM),
                Vec2::new(cx + WINDOW_LEFT, cy + WINDOW_BOTTOM),
            ],
        }
    }

    /// All three polygons rotated together around the shared pivot.
    pub fn rotated(&self, angle_deg: f32) -> Self {
        HouseShape {
            center: self.center,
            body: rotate_points(&self.body, angle_deg, self.center),
            roof: rotate_points(&self.roof, angle_deg, self.center),
            window: rotate_points(&self.window, angle_deg, self.center),
        }
    }
}

/// Semicircular stand-in for the sun's daily arc, plus the sun disc.
///
/// `start_deg` follows the on-screen angle convention (0° at three o'clock,
/// counterclockwise); the disc center uses raw y-down canvas math. The two
/// agree at the `start_deg + 90°` point, which is where the disc sits.
#[derive(Debug, Clone)]
pub struct SunPath {
    pub center: Vec2,
    pub radius: f32,
    pub start_deg: f32,
    pub sweep_deg: f32,
    pub sun_center: Vec2,
}

impl SunPath {
    pub fn around(center: Vec2, radius: f32, northern: bool) -> Self {
        let start_deg: f32 = if northern { -90.0 } else { 90.0 };
        let marker = (start_deg + 90.0).to_radians();
        SunPath {
            center,
            radius,
            start_deg,
            sweep_deg: 180.0,
            sun_center: Vec2::new(
                center.x + radius * marker.cos(),
                center.y + radius * marker.sin(),
            ),
        }
    }

    /// Sample the arc as a polyline of `segments + 1` canvas points.
    pub fn arc_points(&self, segments: usize) -> Vec<Vec2> {
        (0..=segments)
            .map(|i| {
                let t = i as f32 / segments as f32;
                let theta = (self.start_deg + self.sweep_deg * t).to_radians();
                Vec2::new(
                    self.center.x + self.radius * theta.cos(),
                    self.center.y - self.radius * theta.sin(),
                )
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompassLabel {
    pub text: &'static str,
    pub position: Vec2,
}

/// The four cardinal labels, inset from the canvas edges by `margin`.
pub fn compass_labels(width: f32, height: f32, margin: f32) -> [CompassLabel; 4] {
    [
        CompassLabel {
            text: "N",
            position: Vec2::new(width / 2.0, margin),
        },
        CompassLabel {
            text: "S",
            position: Vec2::new(width / 2.0, height - margin),
        },
        CompassLabel {
            text: "W",
            position: Vec2::new(margin, height / 2.0),
        },
        CompassLabel {
            text: "E",
            position: Vec2::new(width - margin, height / 2.0),
        },
    ]
}
