//! In-memory metadata tables.
//!
//! `MetadataTable` holds the `TypeDef` and `TypeRef` rows a resolver needs
//! and implements [`MetadataReader`] over them. It is built up front and
//! then only read, so a single table can be shared between generation
//! tasks by reference.

use rustc_hash::FxHashMap;

use crate::{
    EntityHandle, HandleKind, MetadataReader, TypeAttributes, TypeDefHandle, TypeDefinition,
    TypeRefHandle, TypeReference,
};

#[derive(Clone, Debug)]
struct TypeDefRow {
    name: Box<str>,
    namespace: Box<str>,
    attributes: TypeAttributes,
    declaring_type: Option<TypeDefHandle>,
}

#[derive(Clone, Debug)]
struct TypeRefRow {
    name: Box<str>,
    namespace: Box<str>,
    resolution_scope: EntityHandle,
}

/// Owned `TypeDef`/`TypeRef` tables with a namespace/name index.
#[derive(Clone, Debug, Default)]
pub struct MetadataTable {
    type_defs: Vec<TypeDefRow>,
    type_refs: Vec<TypeRefRow>,
    /// Top-level definitions by (namespace, name).
    by_name: FxHashMap<(Box<str>, Box<str>), TypeDefHandle>,
}

impl MetadataTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level type definition.
    pub fn add_type_def(
        &mut self,
        namespace: &str,
        name: &str,
        attributes: TypeAttributes,
    ) -> TypeDefHandle {
        let handle = self.push_type_def(TypeDefRow {
            name: name.into(),
            namespace: namespace.into(),
            attributes,
            declaring_type: None,
        });
        self.by_name
            .entry((namespace.into(), name.into()))
            .or_insert(handle);
        handle
    }

    /// Append a definition nested inside `declaring_type`.
    ///
    /// Nested types carry an empty namespace and are not indexed by name.
    pub fn add_nested_type_def(
        &mut self,
        declaring_type: TypeDefHandle,
        name: &str,
        attributes: TypeAttributes,
    ) -> TypeDefHandle {
        self.push_type_def(TypeDefRow {
            name: name.into(),
            namespace: "".into(),
            attributes: attributes | TypeAttributes::NESTED_PUBLIC,
            declaring_type: Some(declaring_type),
        })
    }

    /// Append a type reference resolved through `resolution_scope`.
    ///
    /// A scope of kind `TypeReference` makes this a nested reference.
    pub fn add_type_ref(
        &mut self,
        resolution_scope: EntityHandle,
        namespace: &str,
        name: &str,
    ) -> TypeRefHandle {
        self.type_refs.push(TypeRefRow {
            name: name.into(),
            namespace: namespace.into(),
            resolution_scope,
        });
        TypeRefHandle::from_row(row_number(self.type_refs.len()))
    }

    /// Convenience for a reference scoped to an assembly reference row.
    pub fn add_external_type_ref(&mut self, namespace: &str, name: &str) -> TypeRefHandle {
        self.add_type_ref(
            EntityHandle::new(HandleKind::AssemblyReference, 1),
            namespace,
            name,
        )
    }

    /// Find a top-level definition by namespace and name.
    pub fn find_type_def(&self, namespace: &str, name: &str) -> Option<TypeDefHandle> {
        self.by_name
            .get(&(Box::from(namespace), Box::from(name)))
            .copied()
    }

    pub fn type_def_count(&self) -> usize {
        self.type_defs.len()
    }

    pub fn type_ref_count(&self) -> usize {
        self.type_refs.len()
    }

    /// All definition handles, in row order.
    pub fn type_def_handles(&self) -> impl Iterator<Item = TypeDefHandle> + '_ {
        (1..=self.type_defs.len()).map(|row| TypeDefHandle::from_row(row_number(row)))
    }

    fn push_type_def(&mut self, row: TypeDefRow) -> TypeDefHandle {
        self.type_defs.push(row);
        TypeDefHandle::from_row(row_number(self.type_defs.len()))
    }
}

/// Rows are bounded by the 24-bit token space; anything larger saturates
/// and is masked off by the handle constructor.
fn row_number(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl MetadataReader for MetadataTable {
    fn type_definition(&self, handle: TypeDefHandle) -> Option<TypeDefinition<'_>> {
        let row = self.type_defs.get(handle.index()?)?;
        Some(TypeDefinition {
            name: &row.name,
            namespace: &row.namespace,
            attributes: row.attributes,
            declaring_type: row.declaring_type,
        })
    }

    fn type_reference(&self, handle: TypeRefHandle) -> Option<TypeReference<'_>> {
        let row = self.type_refs.get(handle.index()?)?;
        Some(TypeReference {
            name: &row.name,
            namespace: &row.namespace,
            resolution_scope: row.resolution_scope,
        })
    }
}
