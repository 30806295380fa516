use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single provider call.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(StatusCode),

    #[error("unexpected response format: {0}")]
    Format(String),
}

/// Errors surfaced by the translation pipeline. `EmptyInput` and
/// `WordLimitExceeded` are raised before any network call; `Unavailable`
/// means both providers failed.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("no text to translate")]
    EmptyInput,

    #[error("text is {count} words, over the {limit} word limit", limit = crate::words::WORD_LIMIT)]
    WordLimitExceeded { count: usize },

    #[error("translation failed, please try again later")]
    Unavailable,
}
