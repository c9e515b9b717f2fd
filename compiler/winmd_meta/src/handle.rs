//! Metadata table handles.
//!
//! A handle is a (table, row) pair pointing into the metadata tables.
//! Rows are 1-based; row 0 is the nil handle. Handles print as metadata
//! tokens: the table id in the high byte, the row in the low 24 bits.
//!
//! Typed wrappers (`TypeDefHandle`, `TypeRefHandle`, `TypeSpecHandle`) are
//! used wherever the table is known statically; `EntityHandle` carries the
//! kind at runtime (resolution scopes, descriptor leaves).

use std::fmt;

/// Kind of metadata row a handle refers to.
///
/// Discriminants are the ECMA-335 table ids.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HandleKind {
    /// `Module` table (0x00).
    ModuleDefinition = 0x00,
    /// `TypeRef` table (0x01).
    TypeReference = 0x01,
    /// `TypeDef` table (0x02).
    TypeDefinition = 0x02,
    /// `ModuleRef` table (0x1A).
    ModuleReference = 0x1A,
    /// `TypeSpec` table (0x1B).
    TypeSpecification = 0x1B,
    /// `AssemblyRef` table (0x23).
    AssemblyReference = 0x23,
}

impl HandleKind {
    /// Table id as stored in the high byte of a token.
    #[inline]
    pub const fn table_id(self) -> u8 {
        self as u8
    }

    /// Map a token's table byte back to a kind.
    pub const fn from_table_id(id: u8) -> Option<Self> {
        match id {
            0x00 => Some(Self::ModuleDefinition),
            0x01 => Some(Self::TypeReference),
            0x02 => Some(Self::TypeDefinition),
            0x1A => Some(Self::ModuleReference),
            0x1B => Some(Self::TypeSpecification),
            0x23 => Some(Self::AssemblyReference),
            _ => None,
        }
    }
}

/// Maximum row number representable in a token (24 bits).
pub const MAX_ROW: u32 = 0x00FF_FFFF;

/// Untyped handle: table kind plus row.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityHandle {
    kind: HandleKind,
    row: u32,
}

impl EntityHandle {
    /// Create a handle. `row` is masked to 24 bits.
    #[inline]
    pub const fn new(kind: HandleKind, row: u32) -> Self {
        Self {
            kind,
            row: row & MAX_ROW,
        }
    }

    #[inline]
    pub const fn kind(self) -> HandleKind {
        self.kind
    }

    #[inline]
    pub const fn row(self) -> u32 {
        self.row
    }

    /// Row 0 never names a real entity.
    #[inline]
    pub const fn is_nil(self) -> bool {
        self.row == 0
    }

    /// The 32-bit metadata token for this handle.
    #[inline]
    pub const fn token(self) -> u32 {
        ((self.kind.table_id() as u32) << 24) | self.row
    }

    /// Decode a metadata token.
    pub const fn from_token(token: u32) -> Option<Self> {
        match HandleKind::from_table_id((token >> 24) as u8) {
            Some(kind) => Some(Self::new(kind, token & MAX_ROW)),
            None => None,
        }
    }

    /// Decode a `TypeDefOrRefOrSpec` coded index (ECMA-335 II.23.2.8).
    ///
    /// The low two bits select the table, the rest is the row.
    pub const fn from_type_def_or_ref_coded(coded: u32) -> Option<Self> {
        let row = coded >> 2;
        let kind = match coded & 0b11 {
            0 => HandleKind::TypeDefinition,
            1 => HandleKind::TypeReference,
            2 => HandleKind::TypeSpecification,
            _ => return None,
        };
        if row > MAX_ROW {
            return None;
        }
        Some(Self::new(kind, row))
    }

    /// Narrow to a type definition handle.
    #[inline]
    pub const fn as_type_def(self) -> Option<TypeDefHandle> {
        match self.kind {
            HandleKind::TypeDefinition => Some(TypeDefHandle(self.row)),
            _ => None,
        }
    }

    /// Narrow to a type reference handle.
    #[inline]
    pub const fn as_type_ref(self) -> Option<TypeRefHandle> {
        match self.kind {
            HandleKind::TypeReference => Some(TypeRefHandle(self.row)),
            _ => None,
        }
    }

    /// Narrow to a type specification handle.
    #[inline]
    pub const fn as_type_spec(self) -> Option<TypeSpecHandle> {
        match self.kind {
            HandleKind::TypeSpecification => Some(TypeSpecHandle(self.row)),
            _ => None,
        }
    }
}

impl fmt::Debug for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}(0x{:08X})", self.kind, self.token())
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.token())
    }
}

macro_rules! typed_handle {
    ($(#[$doc:meta])* $name:ident => $kind:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// The nil handle (row 0).
            pub const NIL: Self = Self(0);

            /// Create a handle from a 1-based row number.
            #[inline]
            pub const fn from_row(row: u32) -> Self {
                Self(row & MAX_ROW)
            }

            #[inline]
            pub const fn row(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_nil(self) -> bool {
                self.0 == 0
            }

            /// Zero-based index into the backing table, `None` for nil.
            #[inline]
            pub const fn index(self) -> Option<usize> {
                match self.0 {
                    0 => None,
                    row => Some(row as usize - 1),
                }
            }
        }

        impl From<$name> for EntityHandle {
            #[inline]
            fn from(handle: $name) -> Self {
                EntityHandle::new(HandleKind::$kind, handle.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&EntityHandle::from(*self), f)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&EntityHandle::from(*self), f)
            }
        }
    };
}

typed_handle! {
    /// Handle to a row of the `TypeDef` table.
    TypeDefHandle => TypeDefinition
}

typed_handle! {
    /// Handle to a row of the `TypeRef` table.
    TypeRefHandle => TypeReference
}

typed_handle! {
    /// Handle to a row of the `TypeSpec` table.
    TypeSpecHandle => TypeSpecification
}
