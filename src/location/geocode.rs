use scenegen::location::Coordinate;
use serde::Deserialize;
use thiserror::Error;

const SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
// Nominatim rejects requests without an identifying agent.
const USER_AGENT: &str = concat!("sunhouse/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geocoder returned malformed data: {0}")]
    Payload(String),
}

/// One synchronous lookup against the Nominatim search API. `Ok(None)`
/// means the service had no match for the query.
pub fn lookup(address: &str) -> Result<Option<Coordinate>, GeocodeError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;
    let body = client
        .get(SEARCH_URL)
        .query(&[("q", address), ("format", "json"), ("limit", "1")])
        .send()?
        .error_for_status()?
        .text()?;
    parse_search_response(&body)
}

// Nominatim encodes coordinates as JSON strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

fn parse_search_response(body: &str) -> Result<Option<Coordinate>, GeocodeError> {
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|err| GeocodeError::Payload(err.to_string()))?;
    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };
    let latitude = hit
        .lat
        .parse()
        .map_err(|_| GeocodeError::Payload(format!("bad latitude '{}'", hit.lat)))?;
    let longitude = hit
        .lon
        .parse()
        .map_err(|_| GeocodeError::Payload(format!("bad longitude '{}'", hit.lon)))?;
    Ok(Some(Coordinate {
        latitude,
        longitude,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_first_hit() {
        let body = r#"[
            {"place_id": 1, "display_name": "Stanford, CA", "lat": "37.4241", "lon": "-122.166"},
            {"place_id": 2, "display_name": "Stanford, KY", "lat": "37.5312", "lon": "-84.6619"}
        ]"#;
        let coordinate = parse_search_response(body).unwrap().unwrap();
        assert_eq!(coordinate.latitude, 37.4241);
        assert_eq!(coordinate.longitude, -122.166);
    }

    #[test]
    fn test_empty_result_is_not_found() {
        assert!(parse_search_response("[]").unwrap().is_none());
    }

    #[test]
    fn test_malformed_latitude_is_an_error() {
        let body = r#"[{"lat": "not-a-number", "lon": "0.0"}]"#;
        assert!(matches!(
            parse_search_response(body),
            Err(GeocodeError::Payload(_))
        ));
    }

    #[test]
    fn test_junk_body_is_an_error() {
        assert!(matches!(
            parse_search_response("<html>rate limited</html>"),
            Err(GeocodeError::Payload(_))
        ));
    }
}
