use thiserror::Error;

/// All errors that can occur when using the Leonardo SDK.
#[derive(Error, Debug)]
pub enum LeonardoError {
    /// A request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The request target or headers could not be assembled.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A transport-level HTTP error from reqwest (connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The cancellation token bound to the client fired before the call finished.
    #[error("request cancelled")]
    Cancelled,

    /// The API answered with a non-2xx status and a structured error body.
    #[error("API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        /// Resource path the service reports the error against, if any.
        path: Option<String>,
    },

    /// The API answered with a non-2xx status and a body that was not a
    /// structured error.
    #[error("API request failed with status {status}")]
    Http { status: u16 },

    /// A 2xx response body did not match the expected shape.
    #[error("failed to decode response (status {status}): {source}")]
    Decoding {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// An I/O error, typically from reading a local file for upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The object storage provider rejected a presigned upload.
    #[error("presigned upload failed with status {status}")]
    Upload { status: u16 },

    /// No API key was supplied and none was found in the environment.
    #[error("authentication failed: {message}")]
    Authentication { message: String },
}

impl LeonardoError {
    /// HTTP status carried by the error, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. }
            | Self::Http { status }
            | Self::Decoding { status, .. }
            | Self::Upload { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// `true` if the underlying network operation ran past its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// `true` for a 404 from the API, structured or not.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// A convenience alias for `Result<T, LeonardoError>`.
pub type Result<T> = std::result::Result<T, LeonardoError>;
