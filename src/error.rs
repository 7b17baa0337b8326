// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Boxed error returned by external collaborators such as action runners.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The overlay session was used after `teardown`. This is a wiring bug in
    /// the host application, never a runtime condition.
    #[error("Session Error: overlay session used after teardown")]
    SessionClosed,

    /// The external action runner failed for the given payload.
    #[error("Action Error: toast action {payload} failed")]
    ActionFailed {
        payload: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Wraps an action-runner failure together with the payload that caused it.
    pub fn action_failed(payload: impl Into<String>, source: BoxError) -> Self {
        Error::ActionFailed {
            payload: payload.into(),
            source,
        }
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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

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
    fn session_closed_mentions_teardown() {
        assert!(Error::SessionClosed.to_string().contains("teardown"));
    }

    #[test]
    fn action_failed_keeps_payload_and_source() {
        let err = Error::action_failed("Restart", "launcher unavailable".into());
        assert!(err.to_string().contains("Restart"));
        let source = err.source().expect("source is preserved");
        assert_eq!(source.to_string(), "launcher unavailable");
    }
}
