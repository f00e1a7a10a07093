// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered accumulation and filtering of diagnostic messages.

use std::fmt::{Display, Formatter};

use anyhow::Error;
use serde::Serialize;

use crate::format::yaml_block;

use super::grouped::MsgsByKind;
use super::message::{Msg, MsgKind};

/// Ordered collection of diagnostic messages.
///
/// Insertion order is significant (it drives "first error" semantics) and
/// duplicates are permitted. The mutating operations return `&mut Self` so
/// call sites can chain appends:
///
/// ```rust
/// use the_blackbox::messages::Msgs;
///
/// let mut msgs = Msgs::new();
/// msgs.add_info("volume provisioned")
///     .add_skip("snapshot already exists")
///     .add_error(anyhow::anyhow!("storage pool offline"));
///
/// assert_eq!(msgs.len(), 3);
/// ```
///
/// Appends are total: empty descriptions and absent errors are ignored
/// rather than rejected.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Msgs {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    items: Vec<Msg>,
}

impl Msgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Msg> {
        self.items.iter()
    }

    fn add(&mut self, kind: MsgKind, desc: impl Into<String>) -> &mut Self {
        let desc = desc.into();
        if desc.is_empty() {
            return self;
        }
        self.items.push(Msg::new(kind, desc));
        self
    }

    /// Append an informational message. No-op on empty text.
    pub fn add_info(&mut self, desc: impl Into<String>) -> &mut Self {
        self.add(MsgKind::Info, desc)
    }

    /// Append a warning message. No-op on empty text.
    pub fn add_warn(&mut self, desc: impl Into<String>) -> &mut Self {
        self.add(MsgKind::Warn, desc)
    }

    /// Append a skipped-operation message. No-op on empty text.
    pub fn add_skip(&mut self, desc: impl Into<String>) -> &mut Self {
        self.add(MsgKind::Skip, desc)
    }

    /// Append an error message, with the description derived from the
    /// error's string form and the error itself retained as the cause.
    /// No-op on `None`.
    pub fn add_error(&mut self, err: impl Into<Option<Error>>) -> &mut Self {
        let Some(err) = err.into() else {
            return self;
        };
        self.items.push(Msg::from_error(err));
        self
    }

    /// Append all of `other`'s messages, in order, after the receiver's.
    /// Does not deduplicate.
    pub fn merge(&mut self, other: &Msgs) -> &mut Self {
        self.items.extend(other.items.iter().cloned());
        self
    }

    /// Discard all messages.
    pub fn reset(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// A new collection holding, in original order, the messages matching
    /// `pred`.
    pub fn filter(&self, pred: impl Fn(&Msg) -> bool) -> Msgs {
        Msgs {
            items: self.items.iter().filter(|msg| pred(msg)).cloned().collect(),
        }
    }

    pub fn infos(&self) -> Msgs {
        self.filter(Msg::is_info)
    }

    pub fn non_infos(&self) -> Msgs {
        self.filter(|msg| !msg.is_info())
    }

    pub fn warns(&self) -> Msgs {
        self.filter(Msg::is_warn)
    }

    pub fn skips(&self) -> Msgs {
        self.filter(Msg::is_skip)
    }

    pub fn errors(&self) -> Msgs {
        self.filter(Msg::is_error)
    }

    pub fn non_errors(&self) -> Msgs {
        self.filter(|msg| !msg.is_error())
    }

    pub fn has_warn(&self) -> bool {
        self.items.iter().any(Msg::is_warn)
    }

    /// Invoke `sink` once per message, in order, with the message's rendered
    /// text. Fire-and-forget: the sink's behavior is the caller's business.
    pub fn log(&self, mut sink: impl FnMut(&str)) {
        for msg in &self.items {
            sink(&msg.to_string());
        }
    }

    /// Log every message except informational ones.
    pub fn log_non_infos(&self, sink: impl FnMut(&str)) {
        self.non_infos().log(sink);
    }

    /// Log every message except errors.
    pub fn log_non_errors(&self, sink: impl FnMut(&str)) {
        self.non_errors().log(sink);
    }

    /// Log only the error messages.
    pub fn log_errors(&self, sink: impl FnMut(&str)) {
        self.errors().log(sink);
    }

    /// Emit every message through `tracing`, in order, at each message's
    /// kind-matched level.
    pub fn emit(&self) {
        for msg in &self.items {
            msg.emit();
        }
    }

    /// Snapshot of this collection partitioned by kind.
    pub fn by_kind(&self) -> MsgsByKind {
        MsgsByKind::group(self)
    }
}

impl<'a> IntoIterator for &'a Msgs {
    type Item = &'a Msg;
    type IntoIter = std::slice::Iter<'a, Msg>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Msgs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", yaml_block("msgs", self))
    }
}
