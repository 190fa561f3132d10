//! Endpoint Configuration
//!
//! Derives the backend URIs from the build mode. Development builds talk to
//! the local backend on its own origin; every other build is served by the
//! backend itself and uses same-origin relative URLs.

/// Origin of the backend during local development
pub const DEV_BASE_URI: &str = "http://localhost:5000";

/// Build mode selecting the backend origin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Interpret the `YEARMAPS_ENV` flag.
    ///
    /// `development` selects development mode and any other value production.
    /// Without a flag, debug builds count as development.
    pub fn from_flag(flag: Option<&str>, debug_build: bool) -> Self {
        match flag {
            Some("development") => BuildMode::Development,
            Some(_) => BuildMode::Production,
            None if debug_build => BuildMode::Development,
            None => BuildMode::Production,
        }
    }

    /// Mode of the running binary, fixed at compile time
    pub fn current() -> Self {
        Self::from_flag(option_env!("YEARMAPS_ENV"), cfg!(debug_assertions))
    }
}

/// Backend URIs used by the gallery
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// Prefix of every endpoint and image URL, empty for same origin
    pub base_uri: String,
    /// Image list endpoint
    pub api_uri: String,
    /// Update time endpoint
    pub time_uri: String,
}

impl Endpoints {
    pub fn resolve(mode: BuildMode) -> Self {
        let base_uri = match mode {
            BuildMode::Development => DEV_BASE_URI.to_string(),
            BuildMode::Production => String::new(),
        };

        Self {
            api_uri: format!("{}/api", base_uri),
            time_uri: format!("{}/update_time", base_uri),
            base_uri,
        }
    }

    pub fn current() -> Self {
        Self::resolve(BuildMode::current())
    }
}
