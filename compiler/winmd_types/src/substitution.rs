//! Name-keyed substitution tables.
//!
//! A table maps a simple metadata type name to ready-made syntax that is
//! written instead of the metadata type. A hit also means the metadata
//! type itself is never generated.

use rustc_hash::FxHashMap;

use crate::syntax::{PredefinedType, TypeSyntax};

/// Immutable simple-name to syntax map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: FxHashMap<Box<str>, TypeSyntax>,
}

impl SubstitutionTable {
    /// Table with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table; a later entry for the same name replaces an earlier one.
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, TypeSyntax)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, syntax)| (Box::from(name), syntax))
                .collect(),
        }
    }

    /// Structs with a BCL counterpart that is blittable with the native layout.
    pub fn builtin_interop() -> Self {
        Self::from_entries([
            ("Guid", TypeSyntax::parse_name("global::System.Guid")),
            ("DECIMAL", TypeSyntax::predefined(PredefinedType::Decimal)),
            ("LARGE_INTEGER", TypeSyntax::predefined(PredefinedType::Long)),
            ("OLD_LARGE_INTEGER", TypeSyntax::predefined(PredefinedType::Long)),
            ("ULARGE_INTEGER", TypeSyntax::predefined(PredefinedType::ULong)),
            (
                "FILETIME",
                TypeSyntax::parse_name("global::System.Runtime.InteropServices.ComTypes.FILETIME"),
            ),
            (
                "OVERLAPPED",
                TypeSyntax::parse_name("global::System.Threading.NativeOverlapped"),
            ),
            ("POINT", TypeSyntax::parse_name("global::System.Drawing.Point")),
            ("POINTF", TypeSyntax::parse_name("global::System.Drawing.PointF")),
        ])
    }

    /// Substitutes that are only valid when the marshaler runs.
    pub fn marshaled_interop() -> Self {
        Self::from_entries([
            ("BOOL", TypeSyntax::predefined(PredefinedType::Bool)),
            ("VARIANT_BOOL", TypeSyntax::predefined(PredefinedType::Bool)),
            ("BSTR", TypeSyntax::predefined(PredefinedType::String)),
        ])
    }

    pub fn get(&self, simple_name: &str) -> Option<&TypeSyntax> {
        self.entries.get(simple_name)
    }

    pub fn contains(&self, simple_name: &str) -> bool {
        self.entries.contains_key(simple_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|name| &**name)
    }
}

#[cfg(test)]
mod tests;
