// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-kind snapshot of a message collection.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::format::yaml_block;

use super::collection::Msgs;
use super::message::Msg;

/// A message collection partitioned by kind.
///
/// This is a derived, read-only snapshot: it is recomputed from the source
/// collection on every [`Msgs::by_kind`] call, never maintained
/// incrementally. Every kind has a bucket even when no message of that kind
/// was recorded, and within each bucket the source collection's insertion
/// order is preserved.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MsgsByKind {
    error: Msgs,
    warn: Msgs,
    info: Msgs,
    skip: Msgs,
}

impl MsgsByKind {
    pub(super) fn group(source: &Msgs) -> Self {
        Self {
            error: source.errors(),
            warn: source.warns(),
            info: source.infos(),
            skip: source.skips(),
        }
    }

    pub fn errors(&self) -> &Msgs {
        &self.error
    }

    pub fn warns(&self) -> &Msgs {
        &self.warn
    }

    pub fn infos(&self) -> &Msgs {
        &self.info
    }

    pub fn skips(&self) -> &Msgs {
        &self.skip
    }

    /// The cause of the first error recorded in the source collection, in
    /// original insertion order. `None` when no error was recorded.
    pub fn first_error(&self) -> Option<&anyhow::Error> {
        self.error.iter().next().and_then(Msg::cause)
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn has_warn(&self) -> bool {
        !self.warn.is_empty()
    }

    pub fn has_skip(&self) -> bool {
        !self.skip.is_empty()
    }

    pub fn has_info(&self) -> bool {
        !self.info.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_empty()
            && self.warn.is_empty()
            && self.info.is_empty()
            && self.skip.is_empty()
    }

    /// Flatten the snapshot back into a single collection, ordered by kind
    /// precedence: all errors first, then warnings, then infos, then skips.
    /// Within each block the original insertion order is kept.
    ///
    /// The result generally differs from insertion order. Callers that need
    /// insertion order should keep using the source collection.
    pub fn flatten(&self) -> Msgs {
        let mut flat = Msgs::new();
        flat.merge(&self.error)
            .merge(&self.warn)
            .merge(&self.info)
            .merge(&self.skip);
        flat
    }
}

impl Display for MsgsByKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", yaml_block("allmsgs", self))
    }
}

#[cfg(test)]
mod tests {
    use super::super::message::MsgKind;
    use super::*;

    fn sample() -> Msgs {
        let mut msgs = Msgs::new();
        msgs.add_info("provisioned pv-001")
            .add_error(anyhow::anyhow!("pool 'ssd' offline"))
            .add_warn("replica count reduced")
            .add_error(anyhow::anyhow!("quota exceeded"))
            .add_skip("snapshot already exists");
        msgs
    }

    #[test]
    fn buckets_hold_only_their_kind() {
        let grouped = sample().by_kind();

        assert_eq!(grouped.errors().len(), 2);
        assert_eq!(grouped.warns().len(), 1);
        assert_eq!(grouped.infos().len(), 1);
        assert_eq!(grouped.skips().len(), 1);
        assert!(grouped.errors().iter().all(Msg::is_error));
    }

    #[test]
    fn empty_kinds_map_to_empty_buckets() {
        let mut msgs = Msgs::new();
        msgs.add_info("only info");
        let grouped = msgs.by_kind();

        assert!(grouped.has_info());
        assert!(!grouped.has_error());
        assert!(!grouped.has_warn());
        assert!(!grouped.has_skip());
        assert!(grouped.errors().is_empty());
    }

    #[test]
    fn is_empty_requires_all_buckets_empty() {
        assert!(Msgs::new().by_kind().is_empty());

        let mut msgs = Msgs::new();
        msgs.add_skip("nothing to do");
        assert!(!msgs.by_kind().is_empty());
    }

    #[test]
    fn first_error_follows_insertion_order() {
        let grouped = sample().by_kind();

        let first = grouped.first_error().expect("two errors were recorded");
        assert_eq!(first.to_string(), "pool 'ssd' offline");
    }

    #[test]
    fn first_error_is_absent_without_errors() {
        let mut msgs = Msgs::new();
        msgs.add_warn("degraded");

        assert!(msgs.by_kind().first_error().is_none());
    }

    #[test]
    fn flatten_orders_by_kind_precedence() {
        let flat = sample().by_kind().flatten();

        let kinds: Vec<MsgKind> = flat.iter().map(Msg::kind).collect();
        assert_eq!(
            kinds,
            vec![
                MsgKind::Error,
                MsgKind::Error,
                MsgKind::Warn,
                MsgKind::Info,
                MsgKind::Skip,
            ]
        );

        // within the error block, insertion order is preserved
        let descs: Vec<&str> = flat.iter().map(Msg::desc).collect();
        assert_eq!(descs[0], "pool 'ssd' offline");
        assert_eq!(descs[1], "quota exceeded");
    }

    #[test]
    fn flatten_of_empty_snapshot_is_empty() {
        assert!(Msgs::new().by_kind().flatten().is_empty());
    }

    #[test]
    fn display_renders_all_four_buckets() {
        let rendered = sample().by_kind().to_string();

        assert!(rendered.contains("error:"));
        assert!(rendered.contains("warn:"));
        assert!(rendered.contains("info:"));
        assert!(rendered.contains("skip:"));
    }

    #[test]
    fn display_keeps_empty_buckets_visible() {
        let rendered = Msgs::new().by_kind().to_string();

        // a kind with no messages still appears, as an empty bucket
        assert!(rendered.contains("error: {}"));
        assert!(rendered.contains("skip: {}"));
    }
}
