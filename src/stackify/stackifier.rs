//! Stackifier facade
//!
//! Ties the pieces together: a configured library-prefix list and a
//! pluggable [`Deserializer`]. One [`Stackifier::stackify`] call
//! transforms one trace dump into one [`Stackified`] result; there is no
//! shared mutable state, so a `Stackifier` can be reused across inputs
//! and identical inputs produce structurally equal results.

use super::deserialize::{Deserializer, StackTraceDeserializer};
use super::error::StackifyError;
use super::group::partition;
use super::stackified::Stackified;

/// Recovers structure from trace dumps against a configured prefix list.
pub struct Stackifier {
    libraries: Vec<String>,
    deserializer: Box<dyn Deserializer>,
    library_detection: bool,
}

impl Stackifier {
    /// Build with the default [`StackTraceDeserializer`].
    pub fn new(libraries: Vec<String>) -> Self {
        Self {
            libraries,
            deserializer: Box::new(StackTraceDeserializer::new()),
            library_detection: false,
        }
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Configured prefixes, in match-priority order.
    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    pub fn deserializer(&self) -> &dyn Deserializer {
        self.deserializer.as_ref()
    }

    /// Whether automatic library detection was requested. Currently an
    /// inert configuration hook.
    pub fn library_detection(&self) -> bool {
        self.library_detection
    }

    /// Recover the error chain from `stacktrace` and partition the
    /// outermost error's frames into library groups.
    pub fn stackify(&self, stacktrace: &str) -> Result<Stackified, StackifyError> {
        if stacktrace.trim().is_empty() {
            return Err(StackifyError::invalid_input(stacktrace));
        }
        let error = self.deserializer.deserialize(stacktrace)?;
        let groups = partition(error.frames(), &self.libraries);
        Ok(Stackified::new(stacktrace.to_string(), error, groups))
    }
}

/// Fluent configuration for [`Stackifier`].
///
/// ```rust
/// use stackify::stackify::Stackifier;
///
/// let stackifier = Stackifier::builder()
///     .library("org.apache.commons")
///     .libraries(["java", "sun", "junit"])
///     .build();
/// ```
pub struct Builder {
    libraries: Vec<String>,
    deserializer: Option<Box<dyn Deserializer>>,
    library_detection: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            libraries: Vec::new(),
            deserializer: None,
            library_detection: false,
        }
    }

    /// Append one library prefix. Order of calls determines match
    /// priority; duplicates are kept as supplied.
    pub fn library(mut self, library: impl Into<String>) -> Self {
        self.libraries.push(library.into());
        self
    }

    /// Append several library prefixes, preserving their order.
    pub fn libraries<I, S>(mut self, libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.libraries.extend(libraries.into_iter().map(Into::into));
        self
    }

    /// Swap in a custom deserialization strategy.
    pub fn deserializer(mut self, deserializer: impl Deserializer + 'static) -> Self {
        self.deserializer = Some(Box::new(deserializer));
        self
    }

    /// Request automatic library detection (inert hook).
    pub fn library_detection(mut self, auto: bool) -> Self {
        self.library_detection = auto;
        self
    }

    pub fn build(self) -> Stackifier {
        Stackifier {
            libraries: self.libraries,
            deserializer: self
                .deserializer
                .unwrap_or_else(|| Box::new(StackTraceDeserializer::new())),
            library_detection: self.library_detection,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
