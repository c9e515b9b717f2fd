//! Signature type resolution for winmd projections.
//!
//! Turns signature blobs into [`TypeDescriptor`] trees and renders those
//! trees as C#-style [`TypeSyntax`] under a [`RenderPolicy`].
//!
//! ```text
//! blob ──► SignatureHandleProvider ──► TypeDescriptor ──► render(ctx) ──► TypeSyntax
//!                                                             │
//!                                                             └──► GenerationSink
//! ```
//!
//! Rendering a user type that is not substituted sends a
//! [`GenerationRequest`] to the context's sink; that is how referenced
//! types enter the generated output.
//!
//! # Tracing
//!
//! Decoding and rendering are instrumented with `tracing`. Call
//! [`init_tracing`] and set `RUST_LOG` (e.g. `RUST_LOG=winmd_types=debug`)
//! to see generation requests and substitution hits.

mod context;
mod descriptor;
mod error;
mod policy;
mod primitive;
mod provider;
mod qualify;
mod render;
mod sink;
mod substitution;
mod syntax;

use std::sync::Once;

pub use context::RenderContext;
pub use descriptor::TypeDescriptor;
pub use error::ResolveError;
pub use policy::RenderPolicy;
pub use primitive::primitive_syntax;
pub use provider::SignatureHandleProvider;
pub use qualify::{qualify, simple_name};
pub use render::OBJECT_PROJECTED_NAMES;
pub use sink::{GenerationRequest, GenerationSink, RequestLog};
pub use substitution::SubstitutionTable;
pub use syntax::{PredefinedType, QualifiedName, SyntaxAnnotations, TypeSyntax, TypeSyntaxKind};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset or another global subscriber is
/// already installed. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if let Err(error) = installed {
                tracing::debug!(%error, "global subscriber already installed");
            }
        }
    });
}
