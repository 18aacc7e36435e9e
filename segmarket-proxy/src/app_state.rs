use url::Url;

use crate::config::UpstreamSettings;

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("Invalid upstream URL '{0}': {1}")]
    InvalidUpstream(String, url::ParseError),
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub client: reqwest::Client,
    pub upstream: Url,
}

impl AppState {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, AppStateError> {
        let upstream = Url::parse(&settings.url)
            .map_err(|e| AppStateError::InvalidUpstream(settings.url.clone(), e))?;

        // Redirects are relayed to the caller, not followed.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { client, upstream })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_relative_upstream() {
        let settings = UpstreamSettings {
            url: "not a url".to_string(),
        };
        assert!(matches!(
            AppState::new(&settings),
            Err(AppStateError::InvalidUpstream(..))
        ));
    }
}
