use super::*;

#[test]
fn printing() {
    assert_eq!(TypeSyntax::predefined(PredefinedType::UShort).to_string(), "ushort");
    assert_eq!(TypeSyntax::identifier("nint").to_string(), "nint");
    assert_eq!(
        TypeSyntax::pointer(TypeSyntax::identifier("IStream")).to_string(),
        "IStream*"
    );
    assert_eq!(
        TypeSyntax::array(TypeSyntax::predefined(PredefinedType::Int), [2, 3]).to_string(),
        "int[2, 3]"
    );
    assert_eq!(
        TypeSyntax::pointer(TypeSyntax::array(
            TypeSyntax::predefined(PredefinedType::Byte),
            [4]
        ))
        .to_string(),
        "byte[4]*"
    );
}

#[test]
fn parse_global_name() {
    let name = QualifiedName::parse("global::System.Drawing.Point");
    assert!(name.is_global());
    assert!(name.is_qualified());
    assert_eq!(name.leaf(), "Point");
    assert_eq!(
        name.segments().collect::<Vec<_>>(),
        ["System", "Drawing", "Point"]
    );
    assert_eq!(name.to_string(), "global::System.Drawing.Point");
}

#[test]
fn parse_simple_name() {
    let name = QualifiedName::parse("HRESULT");
    assert!(!name.is_global());
    assert!(!name.is_qualified());
    assert_eq!(name, QualifiedName::simple("HRESULT"));
}

#[test]
fn nested_name() {
    let name = QualifiedName::nested(["Outer", "Middle"], "Inner");
    assert_eq!(name.to_string(), "Outer.Middle.Inner");
    assert_eq!(name.leaf(), "Inner");
    assert_eq!(QualifiedName::nested(Vec::<&str>::new(), "Inner"), QualifiedName::simple("Inner"));
}

#[test]
fn annotations_do_not_change_text() {
    let plain = TypeSyntax::identifier("IUnknown");
    let managed = plain
        .clone()
        .with_annotations(SyntaxAnnotations::MANAGED_REFERENCE);

    assert_eq!(plain.to_string(), managed.to_string());
    assert!(managed.is_managed_reference());
    assert!(!plain.is_managed_reference());
    assert_ne!(plain, managed);
}

#[test]
fn pointer_depth_counts_wraps() {
    let leaf = TypeSyntax::predefined(PredefinedType::Void);
    assert_eq!(leaf.pointer_depth(), 0);
    let twice = TypeSyntax::pointer(TypeSyntax::pointer(leaf.clone()));
    assert_eq!(twice.pointer_depth(), 2);
    assert_eq!(twice.pointee().and_then(TypeSyntax::pointee), Some(&leaf));
}
