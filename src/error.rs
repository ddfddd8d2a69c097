#[derive(Debug, thiserror::Error)]
#[error("invalid JSON: {0}")]
pub struct ParseError(#[from] serde_json::Error);

#[derive(Debug, thiserror::Error)]
pub enum CorrectionError {
    #[error("input is not valid UTF-8 text")]
    NotUtf8(#[from] std::str::Utf8Error),
    #[error("auto-correction failed: {0}")]
    StillInvalid(serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no input provided")]
    NoInput,
    #[error("URL access denied by user")]
    UrlAccessDenied,
    #[error("HTTP request failed with status code: {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid JSON input")]
    InvalidLiteral,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine the user config directory")]
    NoConfigDir,
    #[error("malformed config file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
