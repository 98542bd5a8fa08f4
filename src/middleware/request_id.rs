use reqwest::header::HeaderValue;
use reqwest::RequestBuilder;
use uuid::Uuid;

/// HTTP header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id attached to every call made to the remote catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Creates a new random request ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the UUID as a string
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stamps an outbound request with a fresh request ID.
///
/// Returns the builder together with the id so the caller can log against it.
pub fn with_request_id(builder: RequestBuilder) -> (RequestBuilder, RequestId) {
    let request_id = RequestId::new();
    let builder = match HeaderValue::from_str(&request_id.as_str()) {
        Ok(value) => builder.header(REQUEST_ID_HEADER, value),
        Err(_) => builder,
    };
    (builder, request_id)
}

/// Creates the tracing span an outbound call runs in
pub fn make_span_with_request_id(
    method: &reqwest::Method,
    path: &str,
    request_id: &RequestId,
) -> tracing::Span {
    tracing::info_span!(
        "catalog_request",
        method = %method,
        path = %path,
        request_id = %request_id,
    )
}
