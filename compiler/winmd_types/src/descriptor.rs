//! Language-independent type descriptors.
//!
//! A descriptor tree is what a decoded signature denotes before any
//! projection policy is applied. Trees are immutable once built and can be
//! rendered any number of times under different policies.

use std::fmt;

use winmd_meta::{ArrayShape, EntityHandle, PrimitiveCode};

/// Type denoted by a signature.
///
/// Composite variants own their element, so every tree is finite and acyclic.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Primitive(PrimitiveCode),
    /// A user type, by type definition or type reference handle.
    Handle(EntityHandle),
    Array {
        element: Box<TypeDescriptor>,
        shape: ArrayShape,
    },
    Pointer(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn primitive(code: PrimitiveCode) -> Self {
        TypeDescriptor::Primitive(code)
    }

    pub fn handle(handle: impl Into<EntityHandle>) -> Self {
        TypeDescriptor::Handle(handle.into())
    }

    pub fn array(element: TypeDescriptor, shape: ArrayShape) -> Self {
        TypeDescriptor::Array {
            element: Box::new(element),
            shape,
        }
    }

    pub fn pointer(element: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer(Box::new(element))
    }

    /// Element of an array or pointer.
    pub fn element(&self) -> Option<&TypeDescriptor> {
        match self {
            TypeDescriptor::Array { element, .. } | TypeDescriptor::Pointer(element) => {
                Some(element)
            }
            TypeDescriptor::Primitive(_) | TypeDescriptor::Handle(_) => None,
        }
    }

    /// The innermost non-composite descriptor.
    pub fn leaf(&self) -> &TypeDescriptor {
        let mut current = self;
        while let Some(element) = current.element() {
            current = element;
        }
        current
    }

    /// Depth of array and pointer wrapping; leaves have depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(element) = current.element() {
            depth += 1;
            current = element;
        }
        depth
    }
}

/// Metadata-level notation: `Int32`, `0x02000003*`, `Byte[4, ?]`.
impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(code) => fmt::Display::fmt(code, f),
            TypeDescriptor::Handle(handle) => fmt::Display::fmt(handle, f),
            TypeDescriptor::Pointer(element) => write!(f, "{element}*"),
            TypeDescriptor::Array { element, shape } => {
                write!(f, "{element}[")?;
                for dimension in 0..shape.rank {
                    if dimension > 0 {
                        f.write_str(", ")?;
                    }
                    match shape.sizes.get(dimension as usize) {
                        Some(size) => write!(f, "{size}")?,
                        None => f.write_str("?")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}
