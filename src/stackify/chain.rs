//! Reconstructed error chain
//!
//! A [`ReconstructedError`] is the structured form of one exception from a
//! trace dump: its kind, message, the frames that were executing when it
//! was raised, and optionally the next-deeper cause. Causes form a
//! singly-linked chain from the outermost error down to the root cause,
//! acyclic by construction.

use super::frame::Frame;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One reconstructed error in a cause chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructedError {
    /// Resolved kind name, or the generic fallback kind.
    pub type_name: String,
    /// Detail message; possibly empty.
    pub message: String,
    /// Frames in textual appearance order, outermost call first.
    pub frames: Vec<Frame>,
    /// The next-deeper cause, when the trace carried one.
    pub cause: Option<Box<ReconstructedError>>,
}

impl ReconstructedError {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            frames: Vec::new(),
            cause: None,
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn cause(&self) -> Option<&ReconstructedError> {
        self.cause.as_deref()
    }

    /// Walk the chain from this error down to the root cause.
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self),
        }
    }

    /// The deepest error in the chain; `self` when there is no cause.
    pub fn root_cause(&self) -> &ReconstructedError {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Number of errors in the chain, this one included.
    pub fn depth(&self) -> usize {
        self.chain().count()
    }
}

impl fmt::Display for ReconstructedError {
    /// `type_name: message`, or just the kind when the message is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.type_name)
        } else {
            write!(f, "{}: {}", self.type_name, self.message)
        }
    }
}

/// Iterator over a cause chain, outermost error first.
pub struct Chain<'a> {
    next: Option<&'a ReconstructedError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ReconstructedError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}
