use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use crate::error::FetchError;
use crate::query::{ContentKind, EntriesQuery};
use crate::wire::EntriesResponse;

/// Boxed future without a `Send` bound; browser fetch futures are `!Send`.
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Anything that can answer an entries query.
///
/// Implementations perform the transport only. Decoding into records,
/// ordering and fallback handling live in [`crate::loader`].
pub trait ContentSource {
    fn entries<'a>(
        &'a self,
        query: &'a EntriesQuery,
    ) -> LocalBoxFuture<'a, Result<EntriesResponse, FetchError>>;
}

impl<S: ContentSource + ?Sized> ContentSource for &S {
    fn entries<'a>(
        &'a self,
        query: &'a EntriesQuery,
    ) -> LocalBoxFuture<'a, Result<EntriesResponse, FetchError>> {
        (**self).entries(query)
    }
}

impl<S: ContentSource + ?Sized> ContentSource for Box<S> {
    fn entries<'a>(
        &'a self,
        query: &'a EntriesQuery,
    ) -> LocalBoxFuture<'a, Result<EntriesResponse, FetchError>> {
        (**self).entries(query)
    }
}

/// Shared tail of every HTTP transport: status check, then body decode.
pub fn decode_http_response(status: u16, body: String) -> Result<EntriesResponse, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status { code: status, body });
    }
    EntriesResponse::from_json(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// In-memory responses keyed by content kind.
///
/// Kinds with no response answer with an empty item list, which loaders treat
/// like any other empty result.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    responses: BTreeMap<ContentKind, EntriesResponse>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: ContentKind, response: EntriesResponse) -> Self {
        self.responses.insert(kind, response);
        self
    }

    pub fn insert(&mut self, kind: ContentKind, response: EntriesResponse) {
        self.responses.insert(kind, response);
    }
}

impl ContentSource for StaticSource {
    fn entries<'a>(
        &'a self,
        query: &'a EntriesQuery,
    ) -> LocalBoxFuture<'a, Result<EntriesResponse, FetchError>> {
        let response = self.responses.get(&query.kind).cloned().unwrap_or_default();
        Box::pin(async move { Ok::<_, FetchError>(response) })
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentSource, StaticSource, decode_http_response};
    use crate::error::FetchError;
    use crate::query::ContentKind;
    use crate::wire::EntriesResponse;

    #[test]
    fn http_error_status_keeps_body() {
        let err = decode_http_response(401, "bad token".into()).unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                code: 401,
                body: "bad token".into()
            }
        );
    }

    #[test]
    fn http_success_decodes_or_reports_malformed_body() {
        let ok = decode_http_response(200, r#"{"items":[],"total":0}"#.into()).expect("decoded");
        assert!(ok.items.is_empty());
        assert!(matches!(
            decode_http_response(200, "<html>".into()),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn unknown_kind_answers_empty() {
        let source = StaticSource::new();
        let resp = pollster::block_on(source.entries(&ContentKind::Hero.query())).expect("ok");
        assert!(resp.items.is_empty());
    }

    #[test]
    fn returns_registered_response() {
        let resp = EntriesResponse {
            total: 7,
            ..EntriesResponse::default()
        };
        let source = StaticSource::new().with(ContentKind::Footer, resp);
        let got = pollster::block_on((&source).entries(&ContentKind::Footer.query())).expect("ok");
        assert_eq!(got.total, 7);
    }
}
