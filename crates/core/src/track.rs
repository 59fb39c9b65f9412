//! Track payload validation: pure logic, no database access.
//!
//! Client payloads arrive as raw JSON so that absent fields, `null`, empty
//! strings and wrongly-typed values can be told apart and reported together
//! instead of failing on the first problem.

use serde_json::{Map, Value};

/// The mutable fields of a track after validation.
///
/// Used for both inserts and full overwrites; `trackId` is never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackFields {
    pub song_title: String,
    pub artist_name: String,
    pub album_name: String,
    pub genre: String,
    /// Length in seconds. Zero is a valid value.
    pub duration: i64,
    pub release_year: i64,
}

/// A field present in the payload but carrying the wrong JSON type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
    pub field: &'static str,
    /// Plural type description, e.g. `"integers"`.
    pub expected: &'static str,
}

const EXPECTED_TEXT: &str = "non-empty strings";
const EXPECTED_INTEGER: &str = "integers";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{}", describe_invalid(.0))]
    InvalidTypes(Vec<InvalidField>),
}

impl TrackValidationError {
    /// Names of the offending fields, in schema order.
    pub fn field_names(&self) -> Vec<&'static str> {
        match self {
            Self::NotAnObject => Vec::new(),
            Self::MissingFields(fields) => fields.clone(),
            Self::InvalidTypes(fields) => fields.iter().map(|f| f.field).collect(),
        }
    }
}

/// One sentence per expected type, e.g. `Fields must be integers: duration, releaseYear`.
fn describe_invalid(fields: &[InvalidField]) -> String {
    [EXPECTED_TEXT, EXPECTED_INTEGER]
        .into_iter()
        .filter_map(|expected| {
            let names: Vec<_> = fields
                .iter()
                .filter(|f| f.expected == expected)
                .map(|f| f.field)
                .collect();
            (!names.is_empty()).then(|| format!("Fields must be {expected}: {}", names.join(", ")))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a create/update payload and extract the track fields.
///
/// Missing fields take precedence: if any field is missing, only the missing
/// ones are reported, otherwise every wrongly-typed field is reported.
pub fn validate_track_payload(payload: &Value) -> Result<TrackFields, TrackValidationError> {
    let data = payload
        .as_object()
        .ok_or(TrackValidationError::NotAnObject)?;

    let mut checks = FieldChecks::new(data);
    let song_title = checks.text("songTitle");
    let artist_name = checks.text("artistName");
    let album_name = checks.text("albumName");
    let genre = checks.text("genre");
    let duration = checks.integer("duration");
    let release_year = checks.integer("releaseYear");

    match (song_title, artist_name, album_name, genre, duration, release_year) {
        (
            Some(song_title),
            Some(artist_name),
            Some(album_name),
            Some(genre),
            Some(duration),
            Some(release_year),
        ) => Ok(TrackFields {
            song_title,
            artist_name,
            album_name,
            genre,
            duration,
            release_year,
        }),
        _ if !checks.missing.is_empty() => {
            Err(TrackValidationError::MissingFields(checks.missing))
        }
        _ => Err(TrackValidationError::InvalidTypes(checks.invalid)),
    }
}

/// Accumulates every missing and wrongly-typed field of one payload.
struct FieldChecks<'a> {
    data: &'a Map<String, Value>,
    missing: Vec<&'static str>,
    invalid: Vec<InvalidField>,
}

impl<'a> FieldChecks<'a> {
    fn new(data: &'a Map<String, Value>) -> Self {
        Self {
            data,
            missing: Vec::new(),
            invalid: Vec::new(),
        }
    }

    /// Text fields treat every falsy JSON value (absent, null, "", false, 0) as missing.
    fn text(&mut self, field: &'static str) -> Option<String> {
        match self.data.get(field) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            None | Some(Value::Null | Value::Bool(false)) | Some(Value::String(_)) => {
                self.missing.push(field);
            }
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => self.missing.push(field),
            Some(_) => self.invalid.push(InvalidField {
                field,
                expected: EXPECTED_TEXT,
            }),
        }
        None
    }

    /// Integer fields only treat absent and null as missing; `0` is a real value.
    fn integer(&mut self, field: &'static str) -> Option<i64> {
        match self.data.get(field) {
            None | Some(Value::Null) => self.missing.push(field),
            Some(Value::Number(n)) if n.as_i64().is_some() => return n.as_i64(),
            Some(_) => self.invalid.push(InvalidField {
                field,
                expected: EXPECTED_INTEGER,
            }),
        }
        None
    }
}
