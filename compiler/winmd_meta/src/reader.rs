//! Read-only view of the metadata tables needed for type resolution.

use crate::{EntityHandle, TypeAttributes, TypeDefHandle, TypeRefHandle};

/// A row of the `TypeDef` table, borrowed from the reader.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeDefinition<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
    pub attributes: TypeAttributes,
    /// Enclosing type for nested definitions, `None` at top level.
    pub declaring_type: Option<TypeDefHandle>,
}

impl TypeDefinition<'_> {
    #[inline]
    pub fn is_interface(&self) -> bool {
        self.attributes.is_interface()
    }
}

/// A row of the `TypeRef` table, borrowed from the reader.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeReference<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
    /// Module, assembly, or (for nested references) another type reference.
    pub resolution_scope: EntityHandle,
}

/// Lookup capability over an already-loaded metadata image.
///
/// Implementations are expected to be immutable for the lifetime of a
/// resolution call. `None` means the handle does not name a row.
pub trait MetadataReader {
    fn type_definition(&self, handle: TypeDefHandle) -> Option<TypeDefinition<'_>>;

    fn type_reference(&self, handle: TypeRefHandle) -> Option<TypeReference<'_>>;
}

impl<R: MetadataReader + ?Sized> MetadataReader for &R {
    fn type_definition(&self, handle: TypeDefHandle) -> Option<TypeDefinition<'_>> {
        (**self).type_definition(handle)
    }

    fn type_reference(&self, handle: TypeRefHandle) -> Option<TypeReference<'_>> {
        (**self).type_reference(handle)
    }
}
