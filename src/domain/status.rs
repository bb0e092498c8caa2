//! Progress reporting for market creation.
//!
//! A [`StatusEvent`] is emitted at each orchestration step for display.
//! Events are purely observational and never influence control flow.

use std::fmt;

use alloy_primitives::TxHash;
use serde::Serialize;

/// Severity or phase of a status event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Informational progress.
    Info,
    /// Waiting on the user to sign something.
    Pending,
    /// Waiting on the chain.
    Confirming,
    /// Terminal success.
    Success,
    /// A failure or a non-fatal warning.
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Pending => write!(f, "pending"),
            Self::Confirming => write!(f, "confirming"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One progress notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEvent {
    pub kind: StatusKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<TxHash>,
}

impl StatusEvent {
    pub fn new(kind: StatusKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            hash: None,
        }
    }

    /// Attach a transaction hash.
    #[must_use]
    pub fn with_hash(mut self, hash: TxHash) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, title, message)
    }

    pub fn pending(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusKind::Pending, title, message)
    }

    pub fn confirming(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusKind::Confirming, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, title, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(StatusEvent::info("a", "b").kind, StatusKind::Info);
        assert_eq!(StatusEvent::pending("a", "b").kind, StatusKind::Pending);
        assert_eq!(StatusEvent::confirming("a", "b").kind, StatusKind::Confirming);
        assert_eq!(StatusEvent::success("a", "b").kind, StatusKind::Success);
        assert_eq!(StatusEvent::error("a", "b").kind, StatusKind::Error);
    }

    #[test]
    fn hash_is_omitted_from_json_when_absent() {
        let event = StatusEvent::info("Preparing Transaction", "...");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "info");
        assert!(json.get("hash").is_none());

        let event = event.with_hash(TxHash::repeat_byte(0x11));
        let json = serde_json::to_value(&event).unwrap();
        assert!(json["hash"].as_str().unwrap().starts_with("0x1111"));
    }
}
