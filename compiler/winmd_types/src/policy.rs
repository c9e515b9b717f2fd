//! Projection policy flags.
//!
//! Each flag is orthogonal to the others; the empty set is the default
//! (fixed-width integers, no marshaled substitutes, interfaces as pointers,
//! simple names).

use bitflags::bitflags;

bitflags! {
    /// Switches that steer how descriptors become syntax.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RenderPolicy: u8 {
        /// Spell pointer-sized integers as `nint`/`nuint`.
        const PREFER_NATIVE_WIDTH_INTEGERS = 1 << 0;
        /// Consult the marshaling-aware substitution table after the
        /// built-in one.
        const PREFER_MARSHALED_SUBSTITUTES = 1 << 1;
        /// Render interfaces as managed references instead of pointers;
        /// also enables the `object` short-circuit for `IUnknown`,
        /// `IDispatch` and `VARIANT`.
        const PROJECT_INTERFACES_AS_OPAQUE_HANDLES = 1 << 2;
        /// Write nested types with their enclosing chain.
        const QUALIFY_NESTED_NAMES = 1 << 3;
    }
}

impl RenderPolicy {
    #[inline]
    pub const fn prefer_native_width_integers(self) -> bool {
        self.contains(Self::PREFER_NATIVE_WIDTH_INTEGERS)
    }

    #[inline]
    pub const fn prefer_marshaled_substitutes(self) -> bool {
        self.contains(Self::PREFER_MARSHALED_SUBSTITUTES)
    }

    #[inline]
    pub const fn project_interfaces_as_opaque_handles(self) -> bool {
        self.contains(Self::PROJECT_INTERFACES_AS_OPAQUE_HANDLES)
    }

    #[inline]
    pub const fn qualify_nested_names(self) -> bool {
        self.contains(Self::QUALIFY_NESTED_NAMES)
    }

    #[must_use]
    pub fn with_native_width_integers(self, enabled: bool) -> Self {
        self.with(Self::PREFER_NATIVE_WIDTH_INTEGERS, enabled)
    }

    #[must_use]
    pub fn with_marshaled_substitutes(self, enabled: bool) -> Self {
        self.with(Self::PREFER_MARSHALED_SUBSTITUTES, enabled)
    }

    #[must_use]
    pub fn with_opaque_interfaces(self, enabled: bool) -> Self {
        self.with(Self::PROJECT_INTERFACES_AS_OPAQUE_HANDLES, enabled)
    }

    #[must_use]
    pub fn with_qualified_nested_names(self, enabled: bool) -> Self {
        self.with(Self::QUALIFY_NESTED_NAMES, enabled)
    }

    fn with(mut self, flag: Self, enabled: bool) -> Self {
        self.set(flag, enabled);
        self
    }
}
