//! Target type syntax.
//!
//! A small tree for the type positions the generator needs: keywords,
//! (qualified) names, pointers and fixed-size arrays. Each node carries an
//! annotation set that downstream emission can query; annotations never
//! change the printed text.
//!
//! Printing follows C# spelling: `int`, `Outer.Inner`, `global::System.Guid`,
//! `IUnknown*`, `byte[4]`, `int[2, 3]`.

use std::fmt;

use bitflags::bitflags;
use smallvec::SmallVec;

/// Built-in keyword types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PredefinedType {
    Bool,
    Char,
    SByte,
    Byte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    Decimal,
    Object,
    String,
    Void,
}

impl PredefinedType {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::SByte => "sbyte",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Object => "object",
            Self::String => "string",
            Self::Void => "void",
        }
    }
}

/// Dotted name, outermost segment first.
///
/// Never empty: constructors take the leaf explicitly.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QualifiedName {
    /// Prefix with the `global::` alias.
    global: bool,
    segments: SmallVec<[Box<str>; 2]>,
}

impl QualifiedName {
    /// Single identifier.
    pub fn simple(name: &str) -> Self {
        Self {
            global: false,
            segments: SmallVec::from_iter([Box::from(name)]),
        }
    }

    /// Name from enclosing segments (outermost first) and a leaf.
    pub fn nested<'a>(outer: impl IntoIterator<Item = &'a str>, leaf: &str) -> Self {
        let mut segments: SmallVec<[Box<str>; 2]> = outer.into_iter().map(Box::from).collect();
        segments.push(Box::from(leaf));
        Self {
            global: false,
            segments,
        }
    }

    /// Parse `global::A.B.C` or `A.B.C`.
    ///
    /// Empty segments are dropped; an empty input yields a single empty
    /// identifier rather than failing, since callers pass literals.
    pub fn parse(text: &str) -> Self {
        let (global, rest) = match text.strip_prefix("global::") {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let mut segments: SmallVec<[Box<str>; 2]> = rest
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(Box::from)
            .collect();
        if segments.is_empty() {
            segments.push(Box::from(""));
        }
        Self { global, segments }
    }

    /// Rightmost segment.
    pub fn leaf(&self) -> &str {
        self.segments.last().map_or("", |segment| &**segment)
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(|segment| &**segment)
    }

    /// More than one segment.
    pub fn is_qualified(&self) -> bool {
        self.segments.len() > 1
    }

    pub fn is_global(&self) -> bool {
        self.global
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.global {
            f.write_str("global::")?;
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

bitflags! {
    /// Out-of-band marks attached to a syntax node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct SyntaxAnnotations: u8 {
        /// Treat the type as a managed/boxed reference downstream,
        /// not as an unmanaged struct reached through pointers.
        const MANAGED_REFERENCE = 1 << 0;
    }
}

/// Shape of a type syntax node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeSyntaxKind {
    Predefined(PredefinedType),
    Name(QualifiedName),
    Pointer(Box<TypeSyntax>),
    /// Fixed-rank array; one literal size per listed dimension.
    Array {
        element: Box<TypeSyntax>,
        sizes: SmallVec<[u32; 4]>,
    },
}

/// A type as it will be written in generated source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeSyntax {
    kind: TypeSyntaxKind,
    annotations: SyntaxAnnotations,
}

impl TypeSyntax {
    pub fn new(kind: TypeSyntaxKind) -> Self {
        Self {
            kind,
            annotations: SyntaxAnnotations::empty(),
        }
    }

    pub fn predefined(keyword: PredefinedType) -> Self {
        Self::new(TypeSyntaxKind::Predefined(keyword))
    }

    pub fn name(name: QualifiedName) -> Self {
        Self::new(TypeSyntaxKind::Name(name))
    }

    /// Single identifier, e.g. `nint`.
    pub fn identifier(name: &str) -> Self {
        Self::name(QualifiedName::simple(name))
    }

    /// Parse a (possibly `global::`-aliased) dotted type name.
    pub fn parse_name(text: &str) -> Self {
        Self::name(QualifiedName::parse(text))
    }

    pub fn pointer(element: TypeSyntax) -> Self {
        Self::new(TypeSyntaxKind::Pointer(Box::new(element)))
    }

    pub fn array(element: TypeSyntax, sizes: impl IntoIterator<Item = u32>) -> Self {
        Self::new(TypeSyntaxKind::Array {
            element: Box::new(element),
            sizes: sizes.into_iter().collect(),
        })
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: SyntaxAnnotations) -> Self {
        self.annotations |= annotations;
        self
    }

    pub fn kind(&self) -> &TypeSyntaxKind {
        &self.kind
    }

    pub fn annotations(&self) -> SyntaxAnnotations {
        self.annotations
    }

    pub fn is_managed_reference(&self) -> bool {
        self.annotations.contains(SyntaxAnnotations::MANAGED_REFERENCE)
    }

    /// Pointee of a pointer node.
    pub fn pointee(&self) -> Option<&TypeSyntax> {
        match &self.kind {
            TypeSyntaxKind::Pointer(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    /// Number of pointer wraps around the innermost non-pointer node.
    pub fn pointer_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(inner) = current.pointee() {
            depth += 1;
            current = inner;
        }
        depth
    }
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeSyntaxKind::Predefined(keyword) => f.write_str(keyword.keyword()),
            TypeSyntaxKind::Name(name) => fmt::Display::fmt(name, f),
            TypeSyntaxKind::Pointer(inner) => write!(f, "{inner}*"),
            TypeSyntaxKind::Array { element, sizes } => {
                write!(f, "{element}[")?;
                for (i, size) in sizes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{size}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
mod tests;
