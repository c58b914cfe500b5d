//! Wire types shared by the generation pipeline and the gallery.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (camelCase for image records and
//! options). Gallery records are written by a different code path than the
//! generate response, so decoding is tolerant of missing fields and of both
//! numeric and ISO-8601 timestamps.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 512;
/// Default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 512;
/// Default inference step count.
pub const DEFAULT_STEPS: u32 = 30;
/// Seed sentinel meaning "let the backend pick".
pub const RANDOM_SEED: i64 = -1;

/// The signed-in user, injected by the hosting auth surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// ISO 8601 creation time, if the auth surface supplied one.
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Generation parameters sent alongside a prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageGenerationOptions {
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    /// [`RANDOM_SEED`] for a random seed, otherwise any integer.
    pub seed: i64,
    pub negative_prompt: String,
}

impl Default for ImageGenerationOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            steps: DEFAULT_STEPS,
            seed: RANDOM_SEED,
            negative_prompt: String::new(),
        }
    }
}

impl ImageGenerationOptions {
    pub fn is_random_seed(&self) -> bool {
        self.seed == RANDOM_SEED
    }
}

/// One generated image as held by the recent list or the gallery.
///
/// Images produced against the anonymous backend have no `id`, `user_id`, or
/// `filename` and are identified by list position instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    pub prompt: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(deserialize_with = "deserialize_timestamp_ms")]
    pub timestamp: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    /// Options captured when the request was submitted.
    #[serde(default)]
    pub options: ImageGenerationOptions,
}

/// Body of `POST /api/generate-image` for the authenticated backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest<'a> {
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
    pub options: &'a ImageGenerationOptions,
}

/// Body of `POST /api/generate-image` for the anonymous backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnonymousGenerateRequest<'a> {
    pub prompt: &'a str,
}

/// Success body from the authenticated backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GenerateImageResponse {
    pub id: String,
    pub url: String,
    pub filename: String,
}

/// Success body from the anonymous backend.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AnonymousGenerateResponse {
    pub image_url: String,
}

/// Error body returned by the authenticated backend on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Variant-independent result of a successful generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub id: Option<String>,
    pub url: String,
    pub filename: Option<String>,
}

impl From<GenerateImageResponse> for GenerateOutcome {
    fn from(resp: GenerateImageResponse) -> Self {
        Self { id: Some(resp.id), url: resp.url, filename: Some(resp.filename) }
    }
}

impl From<AnonymousGenerateResponse> for GenerateOutcome {
    fn from(resp: AnonymousGenerateResponse) -> Self {
        Self { id: None, url: resp.image_url, filename: None }
    }
}

fn deserialize_timestamp_ms<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float.trunc() as i64);
            }
            Err(D::Error::custom("expected millisecond timestamp"))
        }
        serde_json::Value::String(raw) => {
            parse_iso_timestamp_ms(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
        }
        _ => Err(D::Error::custom("expected number or ISO-8601 string")),
    }
}

/// Parse an ISO-8601 timestamp into Unix milliseconds.
///
/// Accepts RFC 3339 strings with an offset and naive `YYYY-MM-DDTHH:MM:SS[.frac]`
/// strings, which are interpreted as UTC.
pub fn parse_iso_timestamp_ms(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let instant = if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        dt
    } else if let Ok(dt) =
        PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"))
    {
        dt.assume_utc()
    } else if let Ok(dt) = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")) {
        dt.assume_utc()
    } else {
        return None;
    };
    i64::try_from(instant.unix_timestamp_nanos() / 1_000_000).ok()
}
