use content::{
    CmsConfig, ContentSource, EntriesQuery, EntriesResponse, FetchError, LocalBoxFuture,
    decode_http_response,
};
use gloo_net::http::Request;

/// Browser `fetch` against the delivery API.
#[derive(Debug, Clone)]
pub struct GlooSource {
    config: CmsConfig,
}

impl GlooSource {
    pub fn new(config: CmsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }
}

impl ContentSource for GlooSource {
    fn entries<'a>(
        &'a self,
        query: &'a EntriesQuery,
    ) -> LocalBoxFuture<'a, Result<EntriesResponse, FetchError>> {
        Box::pin(async move {
            let url = query
                .to_url(&self.config)
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let resp = Request::get(url.as_str())
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            decode_http_response(status, body)
        })
    }
}
