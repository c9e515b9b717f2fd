use pretty_assertions::assert_eq;

use super::*;

#[test]
fn builtin_entries() {
    let table = SubstitutionTable::builtin_interop();
    assert_eq!(
        table.get("Guid").map(ToString::to_string).as_deref(),
        Some("global::System.Guid")
    );
    assert_eq!(
        table.get("LARGE_INTEGER").map(ToString::to_string).as_deref(),
        Some("long")
    );
    assert_eq!(
        table.get("OVERLAPPED").map(ToString::to_string).as_deref(),
        Some("global::System.Threading.NativeOverlapped")
    );
    assert!(table.get("RECT").is_none());
}

#[test]
fn catalogs_do_not_overlap() {
    let builtin = SubstitutionTable::builtin_interop();
    let marshaled = SubstitutionTable::marshaled_interop();
    assert!(!marshaled.is_empty());
    for name in marshaled.names() {
        assert!(!builtin.contains(name), "{name} in both catalogs");
    }
}

#[test]
fn later_entry_wins() {
    let table = SubstitutionTable::from_entries([
        ("HANDLE", TypeSyntax::identifier("IntPtr")),
        ("HANDLE", TypeSyntax::identifier("nint")),
    ]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("HANDLE"), Some(&TypeSyntax::identifier("nint")));
}

#[test]
fn lookup_is_case_sensitive() {
    let table = SubstitutionTable::builtin_interop();
    assert!(table.contains("POINT"));
    assert!(!table.contains("Point"));
}

#[test]
fn empty_table() {
    let table = SubstitutionTable::empty();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert!(table.get("Guid").is_none());
}
