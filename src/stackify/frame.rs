//! Stack frame record
//!
//! A frame is one call-stack entry recovered from trace text: the owning
//! type, the member that was executing, and the source location. Frames are
//! produced once during extraction and never mutated afterwards.
//!
//! The `line` field keeps whatever integer the trace carried, including
//! negative runtime sentinels. A location with no parsable line number gets
//! [`LINE_UNKNOWN`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel line number for frames whose location carried no parsable line.
pub const LINE_UNKNOWN: i32 = -2;

/// One call-stack entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Namespace/type owning the executing member, e.g. `com.acme.Foo`.
    /// May be empty when the trace line carried no owner token.
    pub owner: String,
    /// Member (method) name; empty when the owner token had no separator.
    pub member: String,
    /// Source file or unit name; empty when absent.
    pub source: String,
    /// Line number, or [`LINE_UNKNOWN`] when absent or unparsable.
    pub line: i32,
}

impl Frame {
    pub fn new(
        owner: impl Into<String>,
        member: impl Into<String>,
        source: impl Into<String>,
        line: i32,
    ) -> Self {
        Self {
            owner: owner.into(),
            member: member.into(),
            source: source.into(),
            line,
        }
    }

    /// The fully qualified call site, `owner.member` (or just the owner
    /// when no member was recovered).
    pub fn call_site(&self) -> String {
        if self.member.is_empty() {
            self.owner.clone()
        } else {
            format!("{}.{}", self.owner, self.member)
        }
    }
}

impl fmt::Display for Frame {
    /// Renders the frame the way runtimes print their own stack entries:
    /// `owner.member(Source.ext:line)`, with the line omitted when unknown
    /// and `Unknown Source` standing in for an empty location.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.call_site())?;
        if self.source.is_empty() {
            write!(f, "Unknown Source")?;
        } else if self.line == LINE_UNKNOWN {
            write!(f, "{}", self.source)?;
        } else {
            write!(f, "{}:{}", self.source, self.line)?;
        }
        write!(f, ")")
    }
}
