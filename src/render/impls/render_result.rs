use crate::cache::errors::CacheError;
use crate::render::structs::render_result::RenderResult;

impl RenderResult {
    pub fn new(html: impl Into<String>) -> RenderResult {
        RenderResult {
            html: html.into(),
            ..Default::default()
        }
    }

    pub fn failed(error: impl Into<String>) -> RenderResult {
        RenderResult {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn redirect() -> RenderResult {
        RenderResult {
            redirected: true,
            ..Default::default()
        }
    }

    /// Results that reported an error or a redirect are returned but never stored.
    pub fn is_storable(&self) -> bool {
        self.error.is_none() && !self.redirected
    }

    pub fn to_artifact(&self) -> Result<String, CacheError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_artifact(artifact: &str) -> Result<RenderResult, CacheError> {
        Ok(serde_json::from_str(artifact)?)
    }
}
