use thiserror::Error;

/// Errors returned by the Gemini analysis gateway.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// No API key is configured; no request was attempted.
    #[error("Gemini API key is missing")]
    MissingCredential,

    /// The configured base URL or model does not form a valid endpoint.
    #[error("invalid Gemini endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Gemini API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The `generateContent` envelope itself could not be decoded.
    #[error("unreadable generateContent response: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The model returned no text for the operation.
    #[error("no content generated for {operation}")]
    EmptyResponse { operation: &'static str },

    /// The generated text is not JSON of the declared shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The generated JSON has the declared shape but breaks a value constraint.
    #[error("schema violation in {context}: {reason}")]
    SchemaViolation { context: String, reason: String },
}

impl GeminiError {
    /// `true` when the remote call itself failed: the request could not be
    /// sent, the API rejected it, or its envelope was unreadable.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GeminiError::Http(_) | GeminiError::Api { .. } | GeminiError::Envelope(_)
        )
    }

    /// `true` when the generated text failed validation against the declared
    /// response shape.
    #[must_use]
    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            GeminiError::EmptyResponse { .. }
                | GeminiError::Deserialize { .. }
                | GeminiError::SchemaViolation { .. }
        )
    }
}
