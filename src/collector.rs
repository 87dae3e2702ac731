use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::Level;
use serde::{Deserialize, Serialize};

use crate::{InvalidArgument, LogSink, MessageLocation, Severity};

/// Receives the messages produced by a compilation.
pub trait MessageCollector {
    fn report(&mut self, severity: Severity, message: &str, location: &MessageLocation);

    fn has_errors(&self) -> bool;
}

impl<C: MessageCollector + ?Sized> MessageCollector for &mut C {
    fn report(&mut self, severity: Severity, message: &str, location: &MessageLocation) {
        (**self).report(severity, message, location);
    }

    fn has_errors(&self) -> bool {
        (**self).has_errors()
    }
}

/// An error reported during compilation, without the location prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectedError {
    location: MessageLocation,
    message: String,
}

impl CollectedError {
    pub fn new(location: MessageLocation, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    pub fn location(&self) -> &MessageLocation {
        &self.location
    }

    pub fn message(&self) -> &str {
        self.message.as_ref()
    }
}

/// Forwards every message to a [`LogSink`] and remembers the errors.
///
/// Errors are only ever appended, so once [`has_errors`](MessageCollector::has_errors)
/// returns true it stays true.
#[derive(Debug)]
pub struct LogMessageCollector<S> {
    sink: S,
    errors: Vec<CollectedError>,
}

impl<S: LogSink> LogMessageCollector<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            errors: Vec::new(),
        }
    }

    /// Same as [`LogMessageCollector::new`] for callers that may not have a sink.
    pub fn try_new(sink: Option<S>) -> Result<Self, InvalidArgument> {
        sink.map(Self::new)
            .ok_or_else(|| InvalidArgument::new("log sink shouldn't be absent"))
    }

    /// Errors in the order they were reported.
    pub fn collected_errors(&self) -> &[CollectedError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn into_collected_errors(self) -> Vec<CollectedError> {
        self.errors
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: LogSink> MessageCollector for LogMessageCollector<S> {
    fn report(&mut self, severity: Severity, message: &str, location: &MessageLocation) {
        let text = location.prefix() + message;
        let level = severity.level();
        if level == Level::Error {
            self.errors.push(CollectedError::new(location.clone(), message));
        }
        self.sink.log(level, &text);
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A collector that can be cloned and reported to from several threads.
///
/// The append and the sink write of a single report happen under one lock,
/// so messages from one reporter keep their relative order.
#[derive(Debug, Default)]
pub struct SharedCollector<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> Clone for SharedCollector<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> SharedCollector<C> {
    pub fn new(collector: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(collector)),
        }
    }

    /// Access the wrapped collector, e.g. to read the collected errors.
    pub fn lock(&self) -> MutexGuard<'_, C> {
        // a panicking reporter cannot leave the collector half updated
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the wrapped collector if this is the last handle to it.
    pub fn try_unwrap(self) -> Result<C, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }
}

impl<C: MessageCollector> MessageCollector for SharedCollector<C> {
    fn report(&mut self, severity: Severity, message: &str, location: &MessageLocation) {
        self.lock().report(severity, message, location);
    }

    fn has_errors(&self) -> bool {
        self.lock().has_errors()
    }
}
