pub use crate::config::{SceneConfig, get_config, reload_config};
pub use crate::geometry::rotate_points;
pub use crate::location::{Coordinate, ParseCoordinateError, parse_coordinates};
pub use crate::scene::{CompassLabel, HouseShape, SceneLayout, SunPath, compass_labels};
pub use crate::sun::{Season, is_northern_hemisphere, sun_direction};
