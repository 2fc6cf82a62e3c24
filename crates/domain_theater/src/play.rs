//! Plays and play types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::StatementError;

/// Classification of a play, selecting its pricing formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PlayType {
    Tragedy,
    Comedy,
}

impl PlayType {
    /// Returns the lowercase type name used in play data
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayType::Tragedy => "tragedy",
            PlayType::Comedy => "comedy",
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayType {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(PlayType::Tragedy),
            "comedy" => Ok(PlayType::Comedy),
            other => {
                warn!(play_type = other, "Rejected unknown play type");
                Err(StatementError::unknown_play_type(other))
            }
        }
    }
}

impl TryFrom<String> for PlayType {
    type Error = StatementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A play that can be staged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name
    pub name: String,
    /// Pricing classification
    #[serde(rename = "type")]
    pub play_type: PlayType,
}

impl Play {
    /// Creates a play
    pub fn new(name: impl Into<String>, play_type: PlayType) -> Self {
        Self {
            name: name.into(),
            play_type,
        }
    }

    /// Creates a tragedy
    pub fn tragedy(name: impl Into<String>) -> Self {
        Self::new(name, PlayType::Tragedy)
    }

    /// Creates a comedy
    pub fn comedy(name: impl Into<String>) -> Self {
        Self::new(name, PlayType::Comedy)
    }

    /// Creates a play from a raw type name, rejecting unknown types
    pub fn from_type_name(name: impl Into<String>, type_name: &str) -> Result<Self, StatementError> {
        Ok(Self::new(name, type_name.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_parse_known_types() {
        assert_eq!("tragedy".parse::<PlayType>().unwrap(), PlayType::Tragedy);
        assert_eq!("comedy".parse::<PlayType>().unwrap(), PlayType::Comedy);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Comedy".parse::<PlayType>().unwrap_err();
        assert!(matches!(err, StatementError::UnknownPlayType(t) if t == "Comedy"));
    }

    #[test]
    fn test_from_type_name_rejects_history() {
        let err = Play::from_type_name("Henry V", "history").unwrap_err();
        assert_eq!(err.to_string(), "unknown type: history");
    }

    #[test]
    fn test_unknown_type_is_logged_as_warning() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || "history".parse::<PlayType>());
        assert!(result.is_err());

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"));
        assert!(output.contains("Rejected unknown play type"));
        assert!(output.contains("history"));
    }
}
