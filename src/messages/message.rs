// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! A single typed diagnostic record.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::format::yaml_block;

/// Category of a diagnostic message.
///
/// The set is closed: every recorded diagnostic is exactly one of these four
/// kinds, and the kind never changes after the message is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MsgKind {
    /// Informational progress message
    Info,
    /// Potential issue or degraded behavior
    Warn,
    /// An operation was skipped
    Skip,
    /// A recorded failure
    Error,
}

impl MsgKind {
    /// The `tracing` level used when a message of this kind is emitted.
    pub fn level(&self) -> tracing::Level {
        match self {
            MsgKind::Info => tracing::Level::INFO,
            MsgKind::Warn => tracing::Level::WARN,
            MsgKind::Skip => tracing::Level::DEBUG,
            MsgKind::Error => tracing::Level::ERROR,
        }
    }
}

/// One diagnostic record: a kind, a human-readable description, and, for
/// `MsgKind::Error` only, the underlying cause.
///
/// Messages are immutable once created; producers append new ones through
/// [`Msgs`](super::Msgs) rather than constructing them directly. The cause
/// is reference-counted; filtered and grouped snapshots share it.
#[derive(Debug, Clone, Serialize)]
pub struct Msg {
    #[serde(rename = "type")]
    kind: MsgKind,
    desc: String,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "cause_as_string")]
    err: Option<Arc<anyhow::Error>>,
}

fn cause_as_string<S: Serializer>(
    err: &Option<Arc<anyhow::Error>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match err {
        Some(err) => serializer.serialize_str(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

impl Msg {
    pub(super) fn new(kind: MsgKind, desc: impl Into<String>) -> Self {
        Self {
            kind,
            desc: desc.into(),
            err: None,
        }
    }

    pub(super) fn from_error(err: anyhow::Error) -> Self {
        Self {
            kind: MsgKind::Error,
            desc: err.to_string(),
            err: Some(Arc::new(err)),
        }
    }

    pub fn kind(&self) -> MsgKind {
        self.kind
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// The underlying failure; present only for `MsgKind::Error`.
    pub fn cause(&self) -> Option<&anyhow::Error> {
        self.err.as_deref()
    }

    pub fn is_info(&self) -> bool {
        self.kind == MsgKind::Info
    }

    pub fn is_warn(&self) -> bool {
        self.kind == MsgKind::Warn
    }

    pub fn is_skip(&self) -> bool {
        self.kind == MsgKind::Skip
    }

    pub fn is_error(&self) -> bool {
        self.kind == MsgKind::Error
    }

    /// Log this message through `tracing` at the level matching its kind.
    pub fn emit(&self) {
        match self.kind {
            MsgKind::Info => tracing::info!(kind = "info", "{}", self.desc),
            MsgKind::Warn => tracing::warn!(kind = "warn", "{}", self.desc),
            MsgKind::Skip => tracing::debug!(kind = "skip", "{}", self.desc),
            MsgKind::Error => match &self.err {
                Some(err) => tracing::error!(kind = "error", error = %err, "{}", self.desc),
                None => tracing::error!(kind = "error", "{}", self.desc),
            },
        }
    }
}

impl Display for Msg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", yaml_block("msg", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates_are_exclusive() {
        let msg = Msg::new(MsgKind::Warn, "replica count reduced");

        assert!(msg.is_warn());
        assert!(!msg.is_info());
        assert!(!msg.is_skip());
        assert!(!msg.is_error());
    }

    #[test]
    fn non_error_message_carries_no_cause() {
        let msg = Msg::new(MsgKind::Info, "volume provisioned");

        assert!(msg.cause().is_none());
    }

    #[test]
    fn error_message_derives_desc_from_cause() {
        let msg = Msg::from_error(anyhow::anyhow!("storage pool 'ssd-pool' offline"));

        assert!(msg.is_error());
        assert_eq!(msg.desc(), "storage pool 'ssd-pool' offline");
        assert_eq!(
            msg.cause().map(|err| err.to_string()),
            Some("storage pool 'ssd-pool' offline".to_string())
        );
    }

    #[test]
    fn kind_maps_to_tracing_level() {
        assert_eq!(MsgKind::Info.level(), tracing::Level::INFO);
        assert_eq!(MsgKind::Warn.level(), tracing::Level::WARN);
        assert_eq!(MsgKind::Skip.level(), tracing::Level::DEBUG);
        assert_eq!(MsgKind::Error.level(), tracing::Level::ERROR);
    }

    #[test]
    fn display_renders_yaml_block() {
        let rendered = Msg::new(MsgKind::Skip, "snapshot already exists").to_string();

        assert!(rendered.starts_with('\n'));
        assert!(rendered.contains("type: skip"));
        assert!(rendered.contains("desc: snapshot already exists"));
        // err is omitted entirely for non-error messages
        assert!(!rendered.contains("err:"));
    }

    #[test]
    fn display_includes_cause_for_errors() {
        let rendered = Msg::from_error(anyhow::anyhow!("quota exceeded")).to_string();

        assert!(rendered.contains("type: error"));
        assert!(rendered.contains("desc: quota exceeded"));
        assert!(rendered.contains("err: quota exceeded"));
    }
}
