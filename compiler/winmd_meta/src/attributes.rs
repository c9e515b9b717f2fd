//! Type definition attribute bits (ECMA-335 II.23.1.15).

use bitflags::bitflags;

bitflags! {
    /// Flags stored on a `TypeDef` row.
    ///
    /// Only the semantic bits that type resolution looks at are named;
    /// unknown bits are retained.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TypeAttributes: u32 {
        /// Visible outside the assembly.
        const PUBLIC = 0x0000_0001;
        /// Nested type with public visibility.
        const NESTED_PUBLIC = 0x0000_0002;
        /// Layout is sequential.
        const SEQUENTIAL_LAYOUT = 0x0000_0008;
        /// Layout is explicit.
        const EXPLICIT_LAYOUT = 0x0000_0010;
        /// The type is an interface.
        const INTERFACE = 0x0000_0020;
        const ABSTRACT = 0x0000_0080;
        const SEALED = 0x0000_0100;
        /// Windows Runtime type.
        const WINDOWS_RUNTIME = 0x0000_4000;

        const _ = !0;
    }
}

impl TypeAttributes {
    #[inline]
    pub const fn is_interface(self) -> bool {
        self.contains(Self::INTERFACE)
    }
}
