//! Rendering context.
//!
//! `RenderContext` bundles everything a render call reads: the metadata
//! reader, the generation sink, both substitution tables and the policy.
//! It only borrows, so one set of tables can back any number of contexts
//! with different policies.

use winmd_meta::MetadataReader;

use crate::policy::RenderPolicy;
use crate::sink::{GenerationRequest, GenerationSink};
use crate::substitution::SubstitutionTable;
use crate::syntax::TypeSyntax;

/// Inputs to [`crate::TypeDescriptor::render`].
#[derive(Copy, Clone)]
pub struct RenderContext<'a> {
    /// Metadata lookups for names, nesting and the interface bit.
    pub reader: &'a dyn MetadataReader,
    /// Receiver for types that must be generated.
    pub sink: &'a dyn GenerationSink,
    /// Always consulted.
    pub builtin: &'a SubstitutionTable,
    /// Consulted after `builtin` when marshaled substitutes are preferred.
    pub marshaled: &'a SubstitutionTable,
    pub policy: RenderPolicy,
}

impl<'a> RenderContext<'a> {
    /// Context with the default (empty) policy.
    pub fn new(
        reader: &'a dyn MetadataReader,
        sink: &'a dyn GenerationSink,
        builtin: &'a SubstitutionTable,
        marshaled: &'a SubstitutionTable,
    ) -> Self {
        Self {
            reader,
            sink,
            builtin,
            marshaled,
            policy: RenderPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Look up `simple_name` in the tables the policy enables, built-in first.
    pub(crate) fn substitute(&self, simple_name: &str) -> Option<&'a TypeSyntax> {
        if let Some(syntax) = self.builtin.get(simple_name) {
            return Some(syntax);
        }
        if self.policy.prefer_marshaled_substitutes() {
            return self.marshaled.get(simple_name);
        }
        None
    }

    pub(crate) fn request_generation(&self, request: GenerationRequest) {
        tracing::debug!(%request, "requesting generation");
        self.sink.request_generation(request);
    }
}
