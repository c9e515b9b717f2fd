//! Descriptor rendering.
//!
//! # Handle rendering order
//!
//! 1. Resolve the simple name and, for definitions, the interface bit.
//!    References are never treated as interfaces.
//! 2. Qualify the name when nested names are qualified.
//! 3. With opaque interfaces, `IUnknown`, `IDispatch` and `VARIANT` become
//!    a managed `object`.
//! 4. Built-in substitutes, then marshaled substitutes if enabled. A hit is
//!    returned as is and requests nothing.
//! 5. Request generation of the type and write its name.
//! 6. Interfaces are annotated as managed references with opaque
//!    interfaces, and wrapped in a pointer otherwise.

use winmd_meta::{ArrayShape, EntityHandle};

use crate::context::RenderContext;
use crate::descriptor::TypeDescriptor;
use crate::error::ResolveError;
use crate::primitive::primitive_syntax;
use crate::qualify::qualify;
use crate::sink::GenerationRequest;
use crate::syntax::{PredefinedType, QualifiedName, SyntaxAnnotations, TypeSyntax};

/// Names that are always a managed `object` under opaque interface projection.
pub const OBJECT_PROJECTED_NAMES: [&str; 3] = ["IUnknown", "IDispatch", "VARIANT"];

impl TypeDescriptor {
    /// Render this descriptor as target syntax.
    ///
    /// Deterministic for a given descriptor, metadata and context; the only
    /// side effect is generation requests sent to `ctx.sink`.
    #[tracing::instrument(level = "trace", skip_all, fields(descriptor = %self, policy = ?ctx.policy))]
    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<TypeSyntax, ResolveError> {
        match self {
            TypeDescriptor::Primitive(code) => Ok(primitive_syntax(
                *code,
                ctx.policy.prefer_native_width_integers(),
            )),
            TypeDescriptor::Array { element, shape } => render_array(element, shape, ctx),
            TypeDescriptor::Pointer(element) => Ok(TypeSyntax::pointer(element.render(ctx)?)),
            TypeDescriptor::Handle(handle) => render_handle(*handle, ctx),
        }
    }
}

fn render_array(
    element: &TypeDescriptor,
    shape: &ArrayShape,
    ctx: &RenderContext<'_>,
) -> Result<TypeSyntax, ResolveError> {
    let element = element.render(ctx)?;
    Ok(TypeSyntax::array(element, shape.sizes.iter().copied()))
}

/// What rendering needs to know about a handle's row.
struct HandleInfo<'r> {
    simple_name: &'r str,
    is_interface: bool,
    request: GenerationRequest,
}

fn handle_info<'r>(
    ctx: &RenderContext<'r>,
    handle: EntityHandle,
) -> Result<HandleInfo<'r>, ResolveError> {
    if let Some(definition) = handle.as_type_def() {
        let row = ctx
            .reader
            .type_definition(definition)
            .ok_or(ResolveError::DanglingHandle(handle))?;
        return Ok(HandleInfo {
            simple_name: row.name,
            is_interface: row.is_interface(),
            request: GenerationRequest::Definition(definition),
        });
    }
    if let Some(reference) = handle.as_type_ref() {
        let row = ctx
            .reader
            .type_reference(reference)
            .ok_or(ResolveError::DanglingHandle(handle))?;
        return Ok(HandleInfo {
            simple_name: row.name,
            is_interface: false,
            request: GenerationRequest::Reference(reference),
        });
    }
    Err(ResolveError::UnrecognizedHandleKind(handle.kind()))
}

fn render_handle(handle: EntityHandle, ctx: &RenderContext<'_>) -> Result<TypeSyntax, ResolveError> {
    let info = handle_info(ctx, handle)?;
    let opaque_interfaces = ctx.policy.project_interfaces_as_opaque_handles();

    let name = if ctx.policy.qualify_nested_names() {
        qualify(ctx.reader, handle)?
    } else {
        QualifiedName::simple(info.simple_name)
    };

    if opaque_interfaces && OBJECT_PROJECTED_NAMES.contains(&info.simple_name) {
        tracing::trace!(name = info.simple_name, "projected as object");
        return Ok(TypeSyntax::predefined(PredefinedType::Object)
            .with_annotations(SyntaxAnnotations::MANAGED_REFERENCE));
    }

    if let Some(substitute) = ctx.substitute(info.simple_name) {
        tracing::debug!(name = info.simple_name, %substitute, "substituted");
        return Ok(substitute.clone());
    }

    ctx.request_generation(info.request);

    let syntax = TypeSyntax::name(name);
    if !info.is_interface {
        return Ok(syntax);
    }
    if opaque_interfaces {
        tracing::trace!(name = info.simple_name, "interface as managed reference");
        Ok(syntax.with_annotations(SyntaxAnnotations::MANAGED_REFERENCE))
    } else {
        tracing::trace!(name = info.simple_name, "interface as pointer");
        Ok(TypeSyntax::pointer(syntax))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
