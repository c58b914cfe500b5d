//! Generation options editor transforms.
//!
//! Every edit takes the current options by reference and returns a full
//! replacement value; the panel itself only owns its open/closed toggle.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use crate::net::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, ImageGenerationOptions, RANDOM_SEED};

pub const DIMENSION_MIN: u32 = 256;
pub const DIMENSION_MAX: u32 = 1024;
pub const DIMENSION_STEP: u32 = 64;
pub const STEPS_MIN: u32 = 10;
pub const STEPS_MAX: u32 = 50;
pub const STEPS_STEP: u32 = 5;
/// Exclusive upper bound for shuffled seeds.
pub const SEED_RANGE: i64 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizePreset {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const PRESET_SIZES: [SizePreset; 5] = [
    SizePreset { label: "Square", width: 512, height: 512 },
    SizePreset { label: "Portrait", width: 512, height: 768 },
    SizePreset { label: "Landscape", width: 768, height: 512 },
    SizePreset { label: "HD Portrait", width: 768, height: 1024 },
    SizePreset { label: "HD Landscape", width: 1024, height: 768 },
];

pub fn with_size(options: &ImageGenerationOptions, width: u32, height: u32) -> ImageGenerationOptions {
    ImageGenerationOptions { width, height, ..options.clone() }
}

pub fn with_preset(options: &ImageGenerationOptions, preset: SizePreset) -> ImageGenerationOptions {
    with_size(options, preset.width, preset.height)
}

pub fn is_preset_selected(options: &ImageGenerationOptions, preset: SizePreset) -> bool {
    options.width == preset.width && options.height == preset.height
}

/// Width from a free-form field; unparsable input falls back to 512.
pub fn with_width_input(options: &ImageGenerationOptions, raw: &str) -> ImageGenerationOptions {
    ImageGenerationOptions { width: parse_dimension(raw, DEFAULT_WIDTH), ..options.clone() }
}

/// Height from a free-form field; unparsable input falls back to 512.
pub fn with_height_input(options: &ImageGenerationOptions, raw: &str) -> ImageGenerationOptions {
    ImageGenerationOptions { height: parse_dimension(raw, DEFAULT_HEIGHT), ..options.clone() }
}

pub fn with_steps(options: &ImageGenerationOptions, steps: u32) -> ImageGenerationOptions {
    ImageGenerationOptions { steps, ..options.clone() }
}

/// Steps from the slider's string value; unparsable input keeps the current count.
pub fn with_steps_input(options: &ImageGenerationOptions, raw: &str) -> ImageGenerationOptions {
    match raw.trim().parse::<u32>() {
        Ok(steps) => with_steps(options, steps),
        Err(_) => options.clone(),
    }
}

/// Seed from a free-form field; empty or non-integer input means random.
pub fn with_seed_input(options: &ImageGenerationOptions, raw: &str) -> ImageGenerationOptions {
    let seed = raw.trim().parse::<i64>().unwrap_or(RANDOM_SEED);
    ImageGenerationOptions { seed, ..options.clone() }
}

/// Pick a seed in `0..SEED_RANGE` from a uniform `roll` in `[0, 1)`.
pub fn randomize_seed(options: &ImageGenerationOptions, roll: f64) -> ImageGenerationOptions {
    ImageGenerationOptions { seed: seed_from_roll(roll), ..options.clone() }
}

pub fn with_negative_prompt(options: &ImageGenerationOptions, text: &str) -> ImageGenerationOptions {
    ImageGenerationOptions { negative_prompt: text.to_owned(), ..options.clone() }
}

/// Text for the seed field: random seeds render as an empty field.
pub fn seed_input_value(options: &ImageGenerationOptions) -> String {
    if options.is_random_seed() { String::new() } else { options.seed.to_string() }
}

fn parse_dimension(raw: &str, fallback: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => value,
        _ => fallback,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn seed_from_roll(roll: f64) -> i64 {
    let clamped = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    let seed = (clamped * 1_000_000.0).floor() as i64;
    seed.min(SEED_RANGE - 1)
}
