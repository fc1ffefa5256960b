/// Failure taxonomy for API reads.
///
/// `Unauthenticated` is raised locally before any request is attempted;
/// the rest classify the upstream response. No variant is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no API token configured; set one with `footy token <value>` or in the Settings tab")]
    Unauthenticated,

    #[error("the API rejected the configured token (HTTP 403)")]
    InvalidCredential,

    #[error("API rate limit exceeded, try again later (HTTP 429)")]
    RateLimited,

    #[error("unexpected API response (HTTP {0})")]
    Upstream(u16),

    #[error("could not parse API response: {0}")]
    MalformedResponse(String),

    #[error("network error: {0}")]
    Network(String),
}
