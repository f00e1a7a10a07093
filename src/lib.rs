// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod format;   // fail-soft YAML rendering
pub mod messages; // typed diagnostic message store
