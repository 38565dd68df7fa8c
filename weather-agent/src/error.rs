/// Errors raised by the background fulfillment chain.
///
/// Synchronous protocol failures never surface here; the dispatcher converts
/// them to error envelopes before they leave the request path.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    MalformedProviderResponse(String),
}

/// Errors detected while reading process configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}
