//! Error-kind registry
//!
//! Maps qualified type names observed in trace text to error kinds the
//! library knows how to rebuild. The registry plays two roles:
//!
//! 1. Admission filter during cause extraction: a colon-terminated token is
//!    only treated as a real exception header if its name is registered;
//!    everything else is assumed to be ordinary message text.
//! 2. Construction: [`KindRegistry::construct`] turns a name and message
//!    into a [`ReconstructedError`], degrading to the generic fallback kind
//!    for names it does not know. It never fails.
//!
//! The default table covers the standard runtime kinds. Recall of cause
//! headers depends entirely on coverage, so the table is a value callers
//! can extend with [`KindRegistry::register`] or replace outright.

use super::chain::ReconstructedError;
use std::collections::HashMap;

/// Generic kind used when a cause header is absent or its name is unknown.
pub const FALLBACK_KIND: &str = "java.lang.RuntimeException";

/// How a registered kind accepts its detail message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindCtor {
    /// The kind carries a detail message.
    WithMessage,
    /// The kind has no message slot; messages are silently discarded.
    NoMessage,
}

/// Standard runtime error kinds, tagged with their message behavior.
const DEFAULT_KINDS: &[(&str, KindCtor)] = &[
    ("java.lang.Throwable", KindCtor::WithMessage),
    ("java.lang.Exception", KindCtor::WithMessage),
    ("java.lang.RuntimeException", KindCtor::WithMessage),
    ("java.lang.Error", KindCtor::WithMessage),
    ("java.lang.AssertionError", KindCtor::WithMessage),
    ("java.lang.IllegalArgumentException", KindCtor::WithMessage),
    ("java.lang.IllegalStateException", KindCtor::WithMessage),
    ("java.lang.IllegalMonitorStateException", KindCtor::WithMessage),
    ("java.lang.IllegalAccessException", KindCtor::WithMessage),
    ("java.lang.IllegalAccessError", KindCtor::WithMessage),
    ("java.lang.NullPointerException", KindCtor::WithMessage),
    ("java.lang.ClassCastException", KindCtor::WithMessage),
    ("java.lang.ClassNotFoundException", KindCtor::WithMessage),
    ("java.lang.NoClassDefFoundError", KindCtor::WithMessage),
    ("java.lang.NoSuchMethodError", KindCtor::WithMessage),
    ("java.lang.NoSuchFieldError", KindCtor::WithMessage),
    ("java.lang.AbstractMethodError", KindCtor::WithMessage),
    ("java.lang.LinkageError", KindCtor::WithMessage),
    ("java.lang.UnsatisfiedLinkError", KindCtor::WithMessage),
    ("java.lang.ExceptionInInitializerError", KindCtor::WithMessage),
    ("java.lang.ArithmeticException", KindCtor::WithMessage),
    ("java.lang.IndexOutOfBoundsException", KindCtor::WithMessage),
    ("java.lang.ArrayIndexOutOfBoundsException", KindCtor::WithMessage),
    ("java.lang.StringIndexOutOfBoundsException", KindCtor::WithMessage),
    ("java.lang.ArrayStoreException", KindCtor::WithMessage),
    ("java.lang.NegativeArraySizeException", KindCtor::WithMessage),
    ("java.lang.NumberFormatException", KindCtor::WithMessage),
    ("java.lang.UnsupportedOperationException", KindCtor::WithMessage),
    ("java.lang.InterruptedException", KindCtor::WithMessage),
    ("java.lang.CloneNotSupportedException", KindCtor::WithMessage),
    ("java.lang.InstantiationException", KindCtor::WithMessage),
    ("java.lang.SecurityException", KindCtor::WithMessage),
    ("java.lang.StackOverflowError", KindCtor::WithMessage),
    ("java.lang.OutOfMemoryError", KindCtor::WithMessage),
    ("java.io.IOException", KindCtor::WithMessage),
    ("java.io.FileNotFoundException", KindCtor::WithMessage),
    ("java.io.EOFException", KindCtor::WithMessage),
    ("java.io.InterruptedIOException", KindCtor::WithMessage),
    ("java.io.UnsupportedEncodingException", KindCtor::WithMessage),
    ("java.io.NotSerializableException", KindCtor::WithMessage),
    ("java.net.SocketException", KindCtor::WithMessage),
    ("java.net.SocketTimeoutException", KindCtor::WithMessage),
    ("java.net.ConnectException", KindCtor::WithMessage),
    ("java.net.UnknownHostException", KindCtor::WithMessage),
    ("java.net.MalformedURLException", KindCtor::WithMessage),
    ("java.net.ProtocolException", KindCtor::WithMessage),
    ("java.util.NoSuchElementException", KindCtor::WithMessage),
    ("java.util.ConcurrentModificationException", KindCtor::WithMessage),
    ("java.util.InputMismatchException", KindCtor::WithMessage),
    ("java.util.EmptyStackException", KindCtor::NoMessage),
    ("java.util.concurrent.TimeoutException", KindCtor::WithMessage),
    ("java.util.concurrent.CancellationException", KindCtor::WithMessage),
    ("java.util.concurrent.RejectedExecutionException", KindCtor::WithMessage),
    ("java.nio.BufferOverflowException", KindCtor::NoMessage),
    ("java.nio.BufferUnderflowException", KindCtor::NoMessage),
    ("java.nio.channels.ClosedChannelException", KindCtor::NoMessage),
    ("java.nio.charset.UnsupportedCharsetException", KindCtor::WithMessage),
    ("java.sql.SQLException", KindCtor::WithMessage),
];

/// Registry of constructible error kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct KindRegistry {
    kinds: HashMap<String, KindCtor>,
}

impl KindRegistry {
    /// An empty registry. Every cause header will be treated as message
    /// text and every construction will degrade to the fallback kind.
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// A registry preloaded with the standard runtime kinds.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for (name, ctor) in DEFAULT_KINDS {
            registry.register(*name, *ctor);
        }
        registry
    }

    /// Register (or overwrite) a kind under its qualified name.
    pub fn register(&mut self, name: impl Into<String>, ctor: KindCtor) -> &mut Self {
        self.kinds.insert(name.into(), ctor);
        self
    }

    /// Whether `name` denotes a kind this registry can rebuild.
    pub fn exists(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Rebuild an error of kind `name` carrying `message`.
    ///
    /// Known kinds keep their name; kinds without a message slot drop the
    /// message; unknown names degrade to [`FALLBACK_KIND`] with the message
    /// kept verbatim. Never fails.
    pub fn construct(&self, name: &str, message: &str) -> ReconstructedError {
        match self.kinds.get(name) {
            Some(KindCtor::WithMessage) => ReconstructedError::new(name, message),
            Some(KindCtor::NoMessage) => ReconstructedError::new(name, ""),
            None => ReconstructedError::new(FALLBACK_KIND, message),
        }
    }
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
