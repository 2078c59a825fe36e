//! Main module for stackify library functionality

pub mod chain;
pub mod deserialize;
pub mod error;
pub mod frame;
pub mod group;
pub mod registry;
pub mod stackified;
pub mod stackifier;

pub use chain::ReconstructedError;
pub use deserialize::{Deserializer, StackTraceDeserializer};
pub use error::StackifyError;
pub use frame::{Frame, LINE_UNKNOWN};
pub use group::{Group, DEFAULT_GROUP_NAME};
pub use registry::{KindCtor, KindRegistry, FALLBACK_KIND};
pub use stackified::Stackified;
pub use stackifier::{Builder, Stackifier};
