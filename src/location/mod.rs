mod geocode;

pub use geocode::GeocodeError;

use scenegen::location::{Coordinate, parse_coordinates};

/// Resolve free-text user input into a coordinate.
///
/// Input containing a comma is treated as a `"lat, lon"` pair; anything
/// else goes to the geocoding service. `Ok(None)` means the input could
/// not be resolved and the appropriate message was already printed for
/// the malformed-pair case.
pub fn resolve_input(input: &str) -> Result<Option<Coordinate>, GeocodeError> {
    if input.contains(',') {
        match parse_coordinates(input) {
            Ok(coordinate) => Ok(Some(coordinate)),
            Err(_) => {
                println!("Invalid coordinate format. Use: 37.42, -122.08");
                Ok(None)
            }
        }
    } else {
        geocode::lookup(input)
    }
}
