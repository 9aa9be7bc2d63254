use crate::domain::ApiError;

/// Environment variable holding the API gateway root for production builds.
pub const GATEWAY_URL_VAR: &str = "VITE_API_GATEWAY_URL";
/// Base URL used by development builds.
pub const DEFAULT_DEV_BASE_URL: &str = "http://localhost:8000";
const PRODUCTION_STAGE: &str = "/prod";

/// Which kind of build is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildProfile {
    Production,
    Development,
}

impl BuildProfile {
    /// Optimized builds without debug assertions count as production.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildProfile::Development
        } else {
            BuildProfile::Production
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildProfile::Production => "production",
            BuildProfile::Development => "development",
        }
    }
}

/// Root address of the backend. Built once and handed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: String,
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Pick the base URL for `profile`.
    ///
    /// Production builds talk to the gateway's `/prod` stage and require a
    /// gateway URL; development builds always use the local backend.
    pub fn resolve(profile: BuildProfile, gateway_url: Option<&str>) -> Result<Self, ApiError> {
        match profile {
            BuildProfile::Production => {
                let gateway = gateway_url
                    .map(str::trim)
                    .filter(|g| !g.is_empty())
                    .ok_or_else(|| {
                        ApiError::config(format!(
                            "{} must be set for production builds",
                            GATEWAY_URL_VAR
                        ))
                    })?;
                Ok(Self::new(format!(
                    "{}{}",
                    gateway.trim_end_matches('/'),
                    PRODUCTION_STAGE
                )))
            }
            BuildProfile::Development => Ok(Self::new(DEFAULT_DEV_BASE_URL)),
        }
    }

    /// Resolve against the running build profile, reading `VITE_API_GATEWAY_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        let gateway = std::env::var(GATEWAY_URL_VAR).ok();
        Self::resolve(BuildProfile::current(), gateway.as_deref())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path (with leading slash) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
