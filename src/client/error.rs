use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be decoded.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    ///
    /// `message` is the `error` field of the server's JSON body when present.
    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// HTTP status of an API error, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|status| status.as_u16()),
        }
    }
}
