//! API endpoint configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend
//! variant and base URL are baked in from `IMAGE_STUDIO_API_VARIANT` and
//! `IMAGE_STUDIO_API_BASE` when the crate is compiled. The resolved value is
//! provided to components through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the standalone unauthenticated backend.
pub const DEFAULT_ANONYMOUS_BASE_URL: &str = "http://127.0.0.1:5000";

/// Which backend contract the client speaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiVariant {
    /// Per-user backend: requests carry `userId` + options, responses carry ids.
    #[default]
    Authenticated,
    /// Prompt-only backend returning `{ image_url }`.
    Anonymous,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown IMAGE_STUDIO_API_VARIANT: {0} (expected 'authenticated' or 'anonymous')")]
    UnknownVariant(String),
}

/// Resolved API configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub variant: ApiVariant,
    /// Prefix for every endpoint path, without a trailing slash. Empty means same origin.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::authenticated()
    }
}

impl ApiConfig {
    pub fn authenticated() -> Self {
        Self { variant: ApiVariant::Authenticated, base_url: String::new() }
    }

    pub fn anonymous() -> Self {
        Self { variant: ApiVariant::Anonymous, base_url: DEFAULT_ANONYMOUS_BASE_URL.to_owned() }
    }

    /// Build config from the values captured at compile time.
    ///
    /// Falls back to [`ApiConfig::default`] with a warning when the variant is
    /// not recognized, so a bad build flag never prevents the UI from mounting.
    pub fn from_build_env() -> Self {
        match Self::from_values(option_env!("IMAGE_STUDIO_API_VARIANT"), option_env!("IMAGE_STUDIO_API_BASE")) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default API config");
                Self::default()
            }
        }
    }

    /// Build config from optional raw variant and base URL strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownVariant`] for an unrecognized variant name.
    pub fn from_values(variant: Option<&str>, base_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match parse_variant(variant)? {
            ApiVariant::Authenticated => Self::authenticated(),
            ApiVariant::Anonymous => Self::anonymous(),
        };
        if let Some(base) = base_url.map(str::trim).filter(|b| !b.is_empty()) {
            config.base_url = base.trim_end_matches('/').to_owned();
        }
        Ok(config)
    }

    pub fn is_authenticated(&self) -> bool {
        self.variant == ApiVariant::Authenticated
    }

    /// Join an absolute endpoint path (starting with `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Resolve an image URL returned by the server.
    ///
    /// Server-relative paths (e.g. `/api/images/u1/generated_x.png`) are served
    /// by the API host, not the page origin, so they are prefixed with the base URL.
    pub fn resolve_url(&self, url: &str) -> String {
        if url.starts_with('/') && !url.starts_with("//") {
            self.endpoint(url)
        } else {
            url.to_owned()
        }
    }
}

fn parse_variant(raw: Option<&str>) -> Result<ApiVariant, ConfigError> {
    match raw.map(str::trim).unwrap_or("authenticated") {
        "" | "authenticated" => Ok(ApiVariant::Authenticated),
        "anonymous" => Ok(ApiVariant::Anonymous),
        other => Err(ConfigError::UnknownVariant(other.to_owned())),
    }
}
