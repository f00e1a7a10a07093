// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Fail-soft YAML rendering for diagnostic output.
//!
//! Diagnostic formatting never fails loudly. The rendering entry point
//! always returns a `String`: either the YAML block, or a one-line fallback
//! naming the value that failed to render.

use serde::Serialize;

/// Render a value as a YAML block.
///
/// On success the block is prefixed with a newline so it starts on its own
/// line after any log prefix. On failure the result is a single line of the
/// form `<error>: failed to format '<ctx>' as yaml string`, where `ctx` is
/// the caller-supplied label for the value being rendered.
///
/// # Example
/// ```
/// use serde::Serialize;
/// use the_blackbox::format::yaml_block;
///
/// #[derive(Serialize)]
/// struct Attempt {
///     volume: String,
///     replicas: usize,
/// }
///
/// let attempt = Attempt {
///     volume: "pv-001".to_string(),
///     replicas: 3,
/// };
///
/// let rendered = yaml_block("attempt", &attempt);
/// assert!(rendered.starts_with('\n'));
/// assert!(rendered.contains("volume: pv-001"));
/// ```
pub fn yaml_block<T: Serialize>(ctx: &str, value: &T) -> String {
    match serde_yaml::to_string(value) {
        Ok(rendered) => format!("\n{rendered}"),
        Err(err) => format!("{err}: failed to format '{ctx}' as yaml string"),
    }
}
