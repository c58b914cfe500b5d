//! Top-level navigation tabs.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Generate,
    Gallery,
}

impl Tab {
    pub fn href(self) -> &'static str {
        match self {
            Self::Generate => "/",
            Self::Gallery => "/gallery",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Generate => "Generate",
            Self::Gallery => "Gallery",
        }
    }

    /// Tab owning `path`; unknown paths fall back to Generate.
    pub fn from_path(path: &str) -> Self {
        if path.trim_end_matches('/') == "/gallery" { Self::Gallery } else { Self::Generate }
    }

    /// Tabs shown in the header; the gallery needs a persisted user store.
    pub fn visible(authenticated: bool) -> &'static [Tab] {
        if authenticated { &[Self::Generate, Self::Gallery] } else { &[Self::Generate] }
    }
}
