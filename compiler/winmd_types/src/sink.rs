//! Generation requests.
//!
//! Rendering a user type that is not substituted asks the coordinator to
//! make sure that type is eventually emitted. The coordinator owns
//! deduplication and ordering; the resolver may ask for the same type many
//! times.

use std::fmt;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use winmd_meta::{EntityHandle, TypeDefHandle, TypeRefHandle};

/// A user type that must end up in the generated output.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationRequest {
    Definition(TypeDefHandle),
    Reference(TypeRefHandle),
}

impl GenerationRequest {
    pub fn handle(self) -> EntityHandle {
        match self {
            GenerationRequest::Definition(handle) => handle.into(),
            GenerationRequest::Reference(handle) => handle.into(),
        }
    }
}

impl From<TypeDefHandle> for GenerationRequest {
    fn from(handle: TypeDefHandle) -> Self {
        GenerationRequest::Definition(handle)
    }
}

impl From<TypeRefHandle> for GenerationRequest {
    fn from(handle: TypeRefHandle) -> Self {
        GenerationRequest::Reference(handle)
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.handle(), f)
    }
}

/// Receiver for generation requests.
///
/// Takes `&self` so one sink can serve concurrent renders; implementations
/// bring their own synchronization.
pub trait GenerationSink {
    fn request_generation(&self, request: GenerationRequest);
}

impl<F: Fn(GenerationRequest)> GenerationSink for F {
    fn request_generation(&self, request: GenerationRequest) {
        self(request);
    }
}

/// Sink that records every request in arrival order.
#[derive(Debug, Default)]
pub struct RequestLog {
    requests: Mutex<Vec<GenerationRequest>>,
}

impl RequestLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all requests, duplicates included.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().clone()
    }

    /// Requests with repeats removed, first occurrence order kept.
    pub fn unique(&self) -> Vec<GenerationRequest> {
        let requests = self.requests.lock();
        let mut seen = FxHashSet::default();
        requests
            .iter()
            .copied()
            .filter(|request| seen.insert(*request))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.lock().is_empty()
    }

    /// Take all recorded requests, leaving the log empty.
    pub fn drain(&self) -> Vec<GenerationRequest> {
        std::mem::take(&mut *self.requests.lock())
    }
}

impl GenerationSink for RequestLog {
    fn request_generation(&self, request: GenerationRequest) {
        self.requests.lock().push(request);
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
