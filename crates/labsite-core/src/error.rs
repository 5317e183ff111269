//! Error type for loading a backing data document

/// Failure to obtain or parse a data document.
///
/// A load either yields the whole document or one of these; there is no
/// partial result and no internal retry. Callers turn it into a single
/// user-visible message.
#[derive(Debug)]
pub enum LoadError {
    /// Network failure or non-success HTTP status
    Http {
        status: Option<u16>,
        message: String,
    },
    /// Local file could not be read
    Io(std::io::Error),
    /// Document was read but is not the expected shape
    Malformed { message: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Malformed { message } => write!(f, "malformed document: {message}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl LoadError {
    /// Create HTTP error from reqwest error.
    ///
    /// The URL is stripped so it does not leak into user-facing messages.
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.without_url().to_string(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// True when the source could not be reached at all (as opposed to
    /// being reachable but unparsable).
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Io(_))
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::malformed(e.to_string())
    }
}
