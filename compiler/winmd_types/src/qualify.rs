//! Nested-name qualification.
//!
//! Definitions are qualified through their declaring-type links. References
//! are qualified through their resolution scope only while that scope is
//! itself a type reference; a module, module-reference or assembly scope
//! ends the walk, so the namespace is never part of the result.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use winmd_meta::{
    EntityHandle, MetadataReader, TypeDefHandle, TypeDefinition, TypeRefHandle, TypeReference,
};

use crate::error::ResolveError;
use crate::syntax::QualifiedName;

/// Simple (unqualified) name of a definition or reference.
pub fn simple_name(reader: &dyn MetadataReader, handle: EntityHandle) -> Result<&str, ResolveError> {
    if let Some(definition) = handle.as_type_def() {
        return Ok(definition_row(reader, definition)?.name);
    }
    if let Some(reference) = handle.as_type_ref() {
        return Ok(reference_row(reader, reference)?.name);
    }
    Err(ResolveError::UnrecognizedHandleKind(handle.kind()))
}

/// Dotted name from the outermost enclosing type down to `handle`.
///
/// A link that does not resolve, or a chain that loops back on itself,
/// fails with [`ResolveError::DanglingHandle`] naming that link.
pub fn qualify(reader: &dyn MetadataReader, handle: EntityHandle) -> Result<QualifiedName, ResolveError> {
    let (leaf, mut enclosing) = if let Some(definition) = handle.as_type_def() {
        declaring_chain(reader, definition)?
    } else if let Some(reference) = handle.as_type_ref() {
        scope_chain(reader, reference)?
    } else {
        return Err(ResolveError::UnrecognizedHandleKind(handle.kind()));
    };
    enclosing.reverse();
    Ok(QualifiedName::nested(enclosing, leaf))
}

/// Leaf name plus enclosing names, innermost first.
type Chain<'r> = (&'r str, SmallVec<[&'r str; 4]>);

fn declaring_chain(reader: &dyn MetadataReader, handle: TypeDefHandle) -> Result<Chain<'_>, ResolveError> {
    let row = definition_row(reader, handle)?;
    let mut enclosing = SmallVec::new();
    let mut seen = FxHashSet::default();
    seen.insert(handle);

    let mut next = row.declaring_type;
    while let Some(outer) = next {
        if !seen.insert(outer) {
            return Err(ResolveError::DanglingHandle(outer.into()));
        }
        let outer_row = definition_row(reader, outer)?;
        enclosing.push(outer_row.name);
        next = outer_row.declaring_type;
    }
    Ok((row.name, enclosing))
}

fn scope_chain(reader: &dyn MetadataReader, handle: TypeRefHandle) -> Result<Chain<'_>, ResolveError> {
    let row = reference_row(reader, handle)?;
    let mut enclosing = SmallVec::new();
    let mut seen = FxHashSet::default();
    seen.insert(handle);

    let mut next = row.resolution_scope.as_type_ref();
    while let Some(outer) = next {
        if !seen.insert(outer) {
            return Err(ResolveError::DanglingHandle(outer.into()));
        }
        let outer_row = reference_row(reader, outer)?;
        enclosing.push(outer_row.name);
        next = outer_row.resolution_scope.as_type_ref();
    }
    Ok((row.name, enclosing))
}

fn definition_row(
    reader: &dyn MetadataReader,
    handle: TypeDefHandle,
) -> Result<TypeDefinition<'_>, ResolveError> {
    reader
        .type_definition(handle)
        .ok_or(ResolveError::DanglingHandle(handle.into()))
}

fn reference_row(
    reader: &dyn MetadataReader,
    handle: TypeRefHandle,
) -> Result<TypeReference<'_>, ResolveError> {
    reader
        .type_reference(handle)
        .ok_or(ResolveError::DanglingHandle(handle.into()))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
