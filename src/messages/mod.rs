// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Typed diagnostic message store.
//!
//! This module provides the in-memory accumulator used to collect diagnostics
//! while a larger operation (validation, provisioning) runs. Producers append
//! typed messages, consumers filter them, group them by kind, and render them
//! through the fail-soft YAML formatter or emit them through `tracing`.
//!
//! # Organization
//!
//! * `Msg` / `MsgKind` - a single diagnostic record and its closed category set
//! * `Msgs` - ordered accumulation, filtering, and logging
//! * `MsgsByKind` - per-kind snapshot of a collection
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_blackbox::messages::Msgs;
//!
//! let mut msgs = Msgs::new();
//! msgs.add_info("volume provisioned")
//!     .add_warn("replica count reduced to 2");
//!
//! assert!(msgs.has_warn());
//! msgs.log_non_infos(|line| eprintln!("{line}"));
//! ```

mod collection;
mod grouped;
mod message;


pub use collection::Msgs;
pub use grouped::MsgsByKind;
pub use message::{Msg, MsgKind};
