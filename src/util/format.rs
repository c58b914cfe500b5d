//! Display formatting for image metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::net::types::ImageGenerationOptions;

/// Creation time as `YYYY-MM-DD HH:MM UTC`; empty for out-of-range values.
pub fn format_timestamp(ms: i64) -> String {
    let Ok(instant) = OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000) else {
        return String::new();
    };
    match instant.format(format_description!("[year]-[month]-[day] [hour]:[minute] UTC")) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("failed to format timestamp {ms}: {e}");
            String::new()
        }
    }
}

pub fn format_seed(seed: i64) -> String {
    if seed == crate::net::types::RANDOM_SEED { "Random".to_owned() } else { seed.to_string() }
}

pub fn format_size(options: &ImageGenerationOptions) -> String {
    format!("{}×{}", options.width, options.height)
}
