use std::time::Duration;

use content::{
    CmsConfig, ContentSource, EntriesQuery, EntriesResponse, FetchError, LocalBoxFuture,
    decode_http_response,
};

const USER_AGENT: &str = concat!("portfolio-tools/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Delivery-API client over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    config: CmsConfig,
}

impl HttpSource {
    pub fn new(config: CmsConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }
}

impl ContentSource for HttpSource {
    fn entries<'a>(
        &'a self,
        query: &'a EntriesQuery,
    ) -> LocalBoxFuture<'a, Result<EntriesResponse, FetchError>> {
        Box::pin(async move {
            let url = query
                .to_url(&self.config)
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            tracing::debug!(kind = %query.kind, "fetching entries");

            let resp = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = resp.status().as_u16();
            let body = resp
                .text()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            decode_http_response(status, body)
        })
    }
}

#[cfg(test)]
mod tests {
    use content::{CmsConfig, ContentKind, ContentSource, FetchError};

    use super::HttpSource;

    #[test]
    fn missing_credentials_fail_before_any_request() {
        let source = HttpSource::new(CmsConfig::default()).expect("client");
        let err = pollster::block_on(source.entries(&ContentKind::Hero.query())).unwrap_err();
        assert!(matches!(err, FetchError::Transport(msg) if msg.contains("PORTFOLIO_CMS_SPACE")));
    }
}
