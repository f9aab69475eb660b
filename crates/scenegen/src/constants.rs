/// Half width of the house body, in canvas pixels.
pub const HOUSE_HALF_WIDTH: f32 = 40.0;
/// How far the body extends below the rotation pivot.
pub const HOUSE_BODY_DEPTH: f32 = 30.0;
/// Height of the roof peak above the pivot.
pub const HOUSE_ROOF_PEAK: f32 = 40.0;

/// Window rectangle relative to the pivot. It sits on the lower-right
/// quadrant, which becomes the sun-facing side once the house rotates.
pub const WINDOW_LEFT: f32 = 10.0;
pub const WINDOW_RIGHT: f32 = 30.0;
pub const WINDOW_TOP: f32 = 10.0;
pub const WINDOW_BOTTOM: f32 = 25.0;
