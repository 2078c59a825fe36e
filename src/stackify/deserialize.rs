//! Stack-trace deserialization
//!
//! Turns a raw trace dump back into a [`ReconstructedError`] chain in three
//! steps, all driven by offset-indexed regex extraction:
//!
//! 1. Frame scan - every `at owner(location)` substring becomes a
//!    [`Frame`], keyed by its match offset.
//! 2. Cause scan - every colon-terminated token that looks like a bare
//!    qualified type name *and* is known to the [`KindRegistry`] becomes a
//!    cause record, keyed by its match offset. Unknown tokens are assumed
//!    to be ordinary message text.
//! 3. Chain stitching - cause records are processed by offset descending,
//!    so each error claims exactly the frames lying between its own header
//!    and the next-deeper one, and each shallower error links onto the
//!    deeper chain already built. Nested causes appear later in the text
//!    than the exception they caused, which is why descending order yields
//!    the outermost error last.
//!
//! The cause scan's leading character class makes a match start only on a
//! character outside the `Caused by:` marker set, so the marker itself is
//! scanned through and the type token after it is still found.

use super::chain::ReconstructedError;
use super::error::StackifyError;
use super::frame::{Frame, LINE_UNKNOWN};
use super::registry::{KindRegistry, FALLBACK_KIND};
use once_cell::sync::Lazy;
use regex::Regex;

/// `at owner(location)[optional-suffix]` anywhere in the text.
static FRAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"at ([^(: \t\r]*)?\((.*?)\)(\[(.*?)\])?").unwrap());

/// Colon-terminated token plus the rest of its line. The first character
/// class keeps a match from starting on any character of the `Caused by:`
/// marker, which is what scans the marker through instead of matching it.
static CAUSE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^(Caused by:)][^: ]*:)(.*)").unwrap());

/// A bare qualified identifier: no parens, backslash, brackets or spaces.
static TYPE_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^()\\\[\] ]*$").unwrap());

/// Pluggable deserialization strategy covering frame extraction, cause
/// extraction and chain stitching as one unit.
pub trait Deserializer {
    fn deserialize(&self, stacktrace: &str) -> Result<ReconstructedError, StackifyError>;
}

/// A cause header found in the text: where it matched, and what it names.
#[derive(Debug, Clone, PartialEq)]
struct CauseRecord {
    offset: usize,
    type_name: String,
    message: String,
}

/// Default [`Deserializer`] for runtime-printed trace dumps with nested
/// `Caused by:` sections.
#[derive(Debug, Clone)]
pub struct StackTraceDeserializer {
    registry: KindRegistry,
}

impl StackTraceDeserializer {
    pub fn new() -> Self {
        Self {
            registry: KindRegistry::with_defaults(),
        }
    }

    /// Build over a caller-supplied registry; cause-header recall depends
    /// entirely on its coverage.
    pub fn with_registry(registry: KindRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &KindRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut KindRegistry {
        &mut self.registry
    }

    /// Scan for cause headers, admitting only tokens that look like bare
    /// qualified names and resolve against the registry.
    fn extract_causes(&self, trace: &str) -> Vec<CauseRecord> {
        let mut causes = Vec::new();
        for caps in CAUSE_PATTERN.captures_iter(trace) {
            let type_match = match caps.get(1) {
                Some(m) => m,
                None => continue,
            };
            let message = caps.get(2).map(|m| m.as_str()).unwrap_or("");

            let type_token = type_match.as_str();
            let type_token = type_token.strip_suffix(':').unwrap_or(type_token).trim();
            if type_token.is_empty() {
                continue;
            }
            if !TYPE_NAME_PATTERN.is_match(type_token) {
                continue;
            }
            if !self.registry.exists(type_token) {
                continue;
            }
            causes.push(CauseRecord {
                offset: type_match.start(),
                type_name: type_token.to_string(),
                message: message.trim().to_string(),
            });
        }
        causes
    }
}

impl Default for StackTraceDeserializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializer for StackTraceDeserializer {
    fn deserialize(&self, stacktrace: &str) -> Result<ReconstructedError, StackifyError> {
        let frames = extract_frames(stacktrace);
        let causes = self.extract_causes(stacktrace);

        if causes.is_empty() && frames.is_empty() {
            return Err(StackifyError::invalid_input(stacktrace));
        }
        Ok(build_chain(&self.registry, causes, &frames))
    }
}

/// Scan for frames, keyed by match offset, in textual order.
fn extract_frames(trace: &str) -> Vec<(usize, Frame)> {
    let mut frames = Vec::new();
    for caps in FRAME_PATTERN.captures_iter(trace) {
        let matched = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let raw_owner = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let location = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        let (owner, member) = split_owner_token(raw_owner);
        let (source, line) = split_location_token(location);
        frames.push((matched.start(), Frame::new(owner, member, source, line)));
    }
    frames
}

/// Split `owner.member` on the last separator. Tokens with a single
/// segment keep the whole token as the owner and get an empty member;
/// trailing separators do not count as segment boundaries.
fn split_owner_token(raw: &str) -> (String, String) {
    let mut segments: Vec<&str> = raw.split('.').collect();
    while segments.last() == Some(&"") {
        segments.pop();
    }
    if segments.len() > 1 {
        let member = segments[segments.len() - 1].to_string();
        let owner = match raw.rfind('.') {
            Some(index) => raw[..index].to_string(),
            None => raw.to_string(),
        };
        (owner, member)
    } else {
        (raw.to_string(), String::new())
    }
}

/// Split `Source.ext:line` on the first colon. A missing colon or an
/// unparsable trailing number yields [`LINE_UNKNOWN`].
fn split_location_token(location: &str) -> (String, i32) {
    match location.find(':') {
        Some(index) => {
            let source = location[..index].to_string();
            match location[index + 1..].parse::<i32>() {
                Ok(line) => (source, line),
                Err(_) => (source, LINE_UNKNOWN),
            }
        }
        None => (location.to_string(), LINE_UNKNOWN),
    }
}

/// Stitch cause records and frames into a linked chain, returning the
/// outermost error. A trace with frames but no recognizable header gets a
/// single synthesized fallback cause covering the whole text.
fn build_chain(
    registry: &KindRegistry,
    mut causes: Vec<CauseRecord>,
    frames: &[(usize, Frame)],
) -> ReconstructedError {
    if causes.is_empty() {
        causes.push(CauseRecord {
            offset: 0,
            type_name: FALLBACK_KIND.to_string(),
            message: String::new(),
        });
    }

    // Deepest (last-occurring) cause first, so each shallower error can
    // link onto the chain already built below it.
    causes.sort_by(|a, b| b.offset.cmp(&a.offset));

    let mut last_boundary = usize::MAX;
    let mut chain: Option<ReconstructedError> = None;
    for cause in causes {
        let mut error = registry.construct(&cause.type_name, &cause.message);
        error.frames = frames
            .iter()
            .filter(|(offset, _)| *offset > cause.offset && *offset < last_boundary)
            .map(|(_, frame)| frame.clone())
            .collect();
        error.cause = chain.take().map(Box::new);
        last_boundary = cause.offset;
        chain = Some(error);
    }
    chain.unwrap_or_else(|| registry.construct(FALLBACK_KIND, ""))
}
