//! Wall clock and randomness sources.
//!
//! Browser builds use `Date.now()` and `Math.random()`; native builds fall
//! back to the system clock and a fixed roll.

/// Current wall-clock time in Unix milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Uniform value in `[0, 1)`.
pub fn random_unit() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
