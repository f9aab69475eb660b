use thiserror::Error;

/// Geographic position in decimal degrees. Values outside the usual
/// [-90, 90] / [-180, 180] ranges are accepted as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseCoordinateError {
    #[error("expected two comma separated values")]
    MissingSeparator,
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

/// Parse user input of the form `"37.42, -122.08"`.
///
/// Splits at the first comma and trims whitespace around both halves, so
/// `"37.42,-122.08"` and `" 37.42 , -122.08 "` parse the same way.
pub fn parse_coordinates(text: &str) -> Result<Coordinate, ParseCoordinateError> {
    let (lat, lon) = text
        .split_once(',')
        .ok_or(ParseCoordinateError::MissingSeparator)?;
    Ok(Coordinate {
        latitude: parse_component(lat)?,
        longitude: parse_component(lon)?,
    })
}

fn parse_component(raw: &str) -> Result<f64, ParseCoordinateError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| ParseCoordinateError::InvalidNumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parses_exact_values() {
        let coordinate = parse_coordinates("37.42, -122.08").unwrap();
        assert_eq!(coordinate.latitude, 37.42);
        assert_eq!(coordinate.longitude, -122.08);
    }

    #[rstest]
    #[case("10,-90")]
    #[case(" 10 , -90 ")]
    #[case("10.0, -90.000")]
    fn test_whitespace_and_formatting(#[case] input: &str) {
        let coordinate = parse_coordinates(input).unwrap();
        assert_eq!(coordinate.latitude, 10.0);
        assert_eq!(coordinate.longitude, -90.0);
    }

    #[test]
    fn test_rejects_non_numeric_component() {
        assert_eq!(
            parse_coordinates("37.42, abc"),
            Err(ParseCoordinateError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn test_rejects_missing_comma() {
        assert_eq!(
            parse_coordinates("Stanford"),
            Err(ParseCoordinateError::MissingSeparator)
        );
    }

    #[test]
    fn test_rejects_extra_components() {
        // "1, 2, 3" leaves "2, 3" as the longitude half.
        assert_eq!(
            parse_coordinates("1, 2, 3"),
            Err(ParseCoordinateError::InvalidNumber("2, 3".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let coordinate = parse_coordinates("123.0, -543.0").unwrap();
        assert_eq!(coordinate.latitude, 123.0);
        assert_eq!(coordinate.longitude, -543.0);
    }
}
