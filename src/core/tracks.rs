// Top-tracks payload types and name extraction.
//
// Two payload shapes are understood: the nested Last.fm layout
// (`toptracks.track[]`) and a flat `items[]` list. Both reduce to the
// ordered list of track names the scene labels are built from.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackError {
    #[error("malformed track payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("track API error {code}: {message}")]
    Api { code: i64, message: String },
    #[error("unrecognized track payload: expected `toptracks`, `items` or `error`")]
    Unrecognized,
    #[error("track list is empty")]
    Empty,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ArtistRef {
    #[serde(default, alias = "#text")]
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TrackRecord {
    pub name: String,
    #[serde(default)]
    pub artist: Option<ArtistRef>,
    #[serde(default)]
    pub playcount: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TopTracks {
    #[serde(default)]
    pub track: Vec<TrackRecord>,
}

#[derive(Debug, Deserialize)]
struct ApiFailure {
    error: i64,
    #[serde(default)]
    message: String,
}

/// Parse a response body into track records, in API order.
///
/// The payload shape is picked by its top-level key before the records are
/// decoded, so schema errors name the offending field.
pub fn parse_track_records(body: &str) -> Result<Vec<TrackRecord>, TrackError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let Some(obj) = value.as_object() else {
        return Err(TrackError::Unrecognized);
    };
    if let Some(toptracks) = obj.get("toptracks") {
        return Ok(TopTracks::deserialize(toptracks)?.track);
    }
    if let Some(items) = obj.get("items") {
        return Ok(Vec::<TrackRecord>::deserialize(items)?);
    }
    if obj.contains_key("error") {
        let failure = ApiFailure::deserialize(&value)?;
        return Err(TrackError::Api {
            code: failure.error,
            message: failure.message,
        });
    }
    Err(TrackError::Unrecognized)
}

/// Parse a response body into at most `limit` track names.
pub fn parse_track_names(body: &str, limit: usize) -> Result<Vec<String>, TrackError> {
    let names: Vec<String> = parse_track_records(body)?
        .into_iter()
        .take(limit)
        .map(|t| t.name)
        .collect();
    if names.is_empty() {
        return Err(TrackError::Empty);
    }
    Ok(names)
}
