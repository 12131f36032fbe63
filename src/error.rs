// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(HttpError),
    MediaHost(String),
    Decode(String),
    State(String),
}

/// Failures while talking to the media host over HTTP.
/// Kept separate so the gallery can tell "offline" apart from "rejected".
#[derive(Debug, Clone)]
pub enum HttpError {
    /// The host could not be reached (DNS, TLS, connection reset, timeout).
    Unreachable(String),

    /// The host answered with a non-success status code.
    Status(u16),

    /// The credentials were rejected (401/403).
    Unauthorized,

    /// The response body could not be read or parsed.
    Body(String),
}

impl HttpError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            HttpError::Unreachable(_) => "error-media-host-unreachable",
            HttpError::Status(_) => "error-media-host-status",
            HttpError::Unauthorized => "error-media-host-unauthorized",
            HttpError::Body(_) => "error-media-host-body",
        }
    }

    /// Classifies an HTTP status code returned by the media host.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => HttpError::Unauthorized,
            other => HttpError::Status(other),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Unreachable(msg) => write!(f, "Media host unreachable: {}", msg),
            HttpError::Status(code) => write!(f, "Media host returned HTTP {}", code),
            HttpError::Unauthorized => write!(f, "Media host rejected the credentials"),
            HttpError::Body(msg) => write!(f, "Invalid media host response: {}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error is surfaced as a toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Http(http) => http.i18n_key(),
            Error::MediaHost(_) => "error-media-host-general",
            Error::Decode(_) => "error-decode",
            Error::State(_) => "notification-state-write-error",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::MediaHost(e) => write!(f, "Media Host Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::State(e) => write!(f, "State Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Error::Http(HttpError::from_status(status.as_u16()));
        }
        if err.is_decode() || err.is_body() {
            Error::Http(HttpError::Body(err.to_string()))
        } else {
            Error::Http(HttpError::Unreachable(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Http(HttpError::Body(err.to_string()))
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unauthorized_statuses_are_classified() {
        assert!(matches!(HttpError::from_status(401), HttpError::Unauthorized));
        assert!(matches!(HttpError::from_status(403), HttpError::Unauthorized));
        assert!(matches!(HttpError::from_status(500), HttpError::Status(500)));
    }

    #[test]
    fn http_error_i18n_keys() {
        assert_eq!(
            Error::from(HttpError::Unauthorized).i18n_key(),
            "error-media-host-unauthorized"
        );
        assert_eq!(
            Error::from(HttpError::Unreachable("dns".into())).i18n_key(),
            "error-media-host-unreachable"
        );
    }

    #[test]
    fn json_errors_become_body_errors() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Http(HttpError::Body(_))));
    }

    #[test]
    fn http_error_display_includes_status() {
        let err = HttpError::Status(502);
        assert!(format!("{}", err).contains("502"));
    }
}
