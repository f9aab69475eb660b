use serde::{Deserialize, Serialize};

/// Season the sun position is approximated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Summer,
}

impl Season {
    pub fn toggled(self) -> Self {
        match self {
            Season::Winter => Season::Summer,
            Season::Summer => Season::Winter,
        }
    }
}

/// Approximate direction of the sun in degrees, measured clockwise from
/// north in screen space.
///
/// - 180° = sun to the south (northern hemisphere winter)
/// - 0° = sun to the north (southern hemisphere winter)
/// - 135° = southeast (northern hemisphere summer)
/// - 45° = northeast (southern hemisphere summer)
///
/// A coarse four-bucket approximation rather than an ephemeris: the
/// latitude only picks the hemisphere.
pub fn sun_direction(latitude: f64, season: Season) -> f32 {
    if is_northern_hemisphere(latitude) {
        match season {
            Season::Winter => 180.0,
            Season::Summer => 135.0,
        }
    } else {
        match season {
            Season::Winter => 0.0,
            Season::Summer => 45.0,
        }
    }
}

/// The equator counts as northern.
pub fn is_northern_hemisphere(latitude: f64) -> bool {
    latitude >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, Season::Winter, 180.0)]
    #[case(45.0, Season::Winter, 180.0)]
    #[case(-10.0, Season::Winter, 0.0)]
    #[case(30.0, Season::Summer, 135.0)]
    #[case(-30.0, Season::Summer, 45.0)]
    #[case(89.9, Season::Summer, 135.0)]
    #[case(-89.9, Season::Winter, 0.0)]
    fn test_sun_direction(
        #[case] latitude: f64,
        #[case] season: Season,
        #[case] expected: f32,
    ) {
        assert_eq!(sun_direction(latitude, season), expected);
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(-0.01, false)]
    #[case(51.5, true)]
    #[case(-33.9, false)]
    fn test_hemisphere_threshold(#[case] latitude: f64, #[case] northern: bool) {
        assert_eq!(is_northern_hemisphere(latitude), northern);
    }

    #[test]
    fn test_season_toggle_round_trips() {
        assert_eq!(Season::Winter.toggled(), Season::Summer);
        assert_eq!(Season::Winter.toggled().toggled(), Season::Winter);
    }
}
