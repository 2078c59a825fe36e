//! # stackify
//!
//! Recovers structured error chains from free-text stack trace dumps and
//! partitions their frames into named library groups for log triage.
//!
//! Recovery is best-effort text-to-structure: regex extraction finds the
//! frames and cause headers, a registry of known error kinds filters real
//! headers from message text, and the chain builder stitches the pieces
//! into an outermost error whose `cause` chain threads down to the root
//! cause. Malformed or partial input degrades gracefully; the only fatal
//! condition is input with nothing extractable at all.
//!
//! ```rust,ignore
//! use stackify::stackify::Stackifier;
//!
//! let stackifier = Stackifier::builder()
//!     .libraries(["java", "org.apache.commons"])
//!     .build();
//!
//! let result = stackifier.stackify(&trace)?;
//! println!("{}", result.description());
//! for group in result.groups() {
//!     println!("({}) {} - {} frames", group.id(), group.name(), group.len());
//! }
//! ```

pub mod stackify;
