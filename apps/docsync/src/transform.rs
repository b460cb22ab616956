//! README → index transform.
//!
//! Two passes, applied in order:
//! - every occurrence of the documentation path prefix is removed, so links
//!   written relative to the repository root become relative to the docs dir;
//! - every exclusion region (a start marker line, the lines after it, and the
//!   nearest following end marker line) is dropped.
//!
//! Markers are whole lines. A region whose end marker line is directly
//! followed by another end marker line is kept verbatim.

use crate::error::{Error, Result};
use regex::Regex;
use tracing::debug;

pub const DEFAULT_STRIP_PREFIX: &str = "com.unity.perception/Documentation~/";
pub const DEFAULT_START_MARKER: &str = "[//]: # (Exclude from Index.md)";
pub const DEFAULT_END_MARKER: &str = "[//]: # (End Exclude)";

/// Compiled transform settings. Built once per run.
#[derive(Debug, Clone)]
pub struct Transform {
    strip_prefix: String,
    end_marker: String,
    region: Regex,
}

impl Transform {
    pub fn new(strip_prefix: &str, start_marker: &str, end_marker: &str) -> Result<Self> {
        validate_marker("start", start_marker)?;
        validate_marker("end", end_marker)?;
        // Non-greedy body so a start marker pairs with the nearest end marker.
        let pattern = format!(
            r"(?ms)^{}\r?\n.*?^{}(?:\r?\n|\z)",
            regex::escape(start_marker),
            regex::escape(end_marker)
        );
        // Escaped literals always parse; only the compiled size limit can fail.
        let region = Regex::new(&pattern).map_err(|_| Error::InvalidMarker {
            which: "start",
            marker: start_marker.to_string(),
            reason: "is too long",
        })?;
        Ok(Self {
            strip_prefix: strip_prefix.to_string(),
            end_marker: end_marker.to_string(),
            region,
        })
    }

    /// Apply both passes to `source`.
    pub fn apply(&self, source: &str) -> String {
        let without_prefix = strip_prefix(source, &self.strip_prefix);
        self.strip_regions(&without_prefix)
    }

    /// Remove exclusion regions, honoring the doubled end marker guard.
    pub fn strip_regions(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut stripped = 0usize;
        let mut guarded = 0usize;
        for m in self.region.find_iter(text) {
            out.push_str(&text[last..m.start()]);
            if self.doubled_end_follows(&text[m.end()..]) {
                out.push_str(m.as_str());
                guarded += 1;
            } else {
                stripped += 1;
            }
            last = m.end();
        }
        out.push_str(&text[last..]);
        debug!(stripped, guarded, "exclusion regions processed");
        out
    }

    fn doubled_end_follows(&self, rest: &str) -> bool {
        match rest.strip_prefix(self.end_marker.as_str()) {
            Some(after) => after.is_empty() || after.starts_with('\n') || after.starts_with("\r\n"),
            None => false,
        }
    }
}

/// Remove every occurrence of `prefix`. An empty prefix is a no-op.
pub fn strip_prefix(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return text.to_string();
    }
    text.replace(prefix, "")
}

fn validate_marker(which: &'static str, marker: &str) -> Result<()> {
    let reason = if marker.trim().is_empty() {
        "must not be empty"
    } else if marker.contains('\n') || marker.contains('\r') {
        "must be a single line"
    } else {
        return Ok(());
    };
    Err(Error::InvalidMarker {
        which,
        marker: marker.to_string(),
        reason,
    })
}
