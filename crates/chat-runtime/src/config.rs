//! Endpoint configuration

use chat_core::{ChatError, Result};
use url::Url;

/// Where replies come from unless overridden
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/chat_gen";

/// Variable that overrides [`DEFAULT_ENDPOINT`]
pub const ENDPOINT_ENV_VAR: &str = "CHAT_GEN_URL";

/// Chat endpoint configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.into(),
        }
    }
}

impl EndpointConfig {
    /// Validated endpoint; only absolute `http`/`https` URLs with a host are
    /// accepted
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let parsed =
            Url::parse(&url).map_err(|e| ChatError::Config(format!("invalid endpoint {url:?}: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ChatError::Config(format!(
                "endpoint must use http or https, got {:?}",
                parsed.scheme()
            )));
        }

        // `http:///path` parses with the first path segment promoted to host
        let empty_authority = url
            .split_once("://")
            .is_some_and(|(_, rest)| rest.starts_with('/'));
        if empty_authority || parsed.host_str().is_none_or(str::is_empty) {
            return Err(ChatError::Config(format!("endpoint {url:?} has no host")));
        }

        Ok(Self { url })
    }

    /// Read `CHAT_GEN_URL` from the process environment
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(ENDPOINT_ENV_VAR).ok().as_deref())
    }

    /// Read `CHAT_GEN_URL` as it was when the crate was compiled.
    ///
    /// Browser builds have no process environment, so the override is baked in.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("CHAT_GEN_URL"))
    }

    /// Apply an optional override, falling back to the default when it is
    /// absent, blank or invalid
    pub fn from_override(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => Self::default(),
            Some(url) => Self::new(url).unwrap_or_else(|e| {
                tracing::warn!("{e}; using {DEFAULT_ENDPOINT}");
                Self::default()
            }),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EndpointConfig::default();
        assert_eq!(config.url(), "http://127.0.0.1:8000/chat_gen");
    }

    #[test]
    fn test_new_validates_scheme() {
        assert!(EndpointConfig::new("https://tutor.example.com/chat_gen").is_ok());
        assert!(matches!(
            EndpointConfig::new("ftp://tutor.example.com"),
            Err(ChatError::Config(_))
        ));
        assert!(EndpointConfig::new("127.0.0.1:8000/chat_gen").is_err());
        assert!(EndpointConfig::new("http://").is_err());
        assert!(EndpointConfig::new("mailto:tutor@example.com").is_err());
    }

    #[test]
    fn test_new_rejects_malformed_urls() {
        for url in [
            "http://exa mple.com/chat_gen",
            "http://[::1/chat_gen",
            "http://host:notaport/x",
            "http:///chat_gen",
        ] {
            assert!(
                matches!(EndpointConfig::new(url), Err(ChatError::Config(_))),
                "accepted {url:?}"
            );
        }
        assert!(EndpointConfig::new("http://[::1]:8000/chat_gen").is_ok());
    }

    #[test]
    fn test_malformed_override_uses_default() {
        assert_eq!(
            EndpointConfig::from_override(Some("http://host:notaport/chat_gen")),
            EndpointConfig::default()
        );
    }

    #[test]
    fn test_override_falls_back_to_default() {
        assert_eq!(EndpointConfig::from_override(None), EndpointConfig::default());
        assert_eq!(EndpointConfig::from_override(Some("  ")), EndpointConfig::default());
        assert_eq!(
            EndpointConfig::from_override(Some("not a url")),
            EndpointConfig::default()
        );
        assert_eq!(
            EndpointConfig::from_override(Some(" http://10.0.0.2:8000/chat_gen ")).url(),
            "http://10.0.0.2:8000/chat_gen"
        );
    }
}
