use rustc_hash::FxHashSet;

use super::*;

#[test]
fn int32_is_int_either_way() {
    assert_eq!(primitive_syntax(PrimitiveCode::Int32, false).to_string(), "int");
    assert_eq!(primitive_syntax(PrimitiveCode::Int32, true).to_string(), "int");
}

#[test]
fn native_width_only_affects_pointer_sized() {
    for code in PrimitiveCode::ALL {
        let fixed = primitive_syntax(code, false);
        let native = primitive_syntax(code, true);
        assert_eq!(fixed == native, !code.is_pointer_sized(), "{code}");
    }
}

#[test]
fn pointer_sized_spellings() {
    assert_eq!(primitive_syntax(PrimitiveCode::IntPtr, false).to_string(), "IntPtr");
    assert_eq!(primitive_syntax(PrimitiveCode::UIntPtr, false).to_string(), "UIntPtr");
    assert_eq!(primitive_syntax(PrimitiveCode::IntPtr, true).to_string(), "nint");
    assert_eq!(primitive_syntax(PrimitiveCode::UIntPtr, true).to_string(), "nuint");
}

#[test]
fn spellings_are_distinct_per_setting() {
    for native in [false, true] {
        let spellings: FxHashSet<String> = PrimitiveCode::ALL
            .into_iter()
            .map(|code| primitive_syntax(code, native).to_string())
            .collect();
        assert_eq!(spellings.len(), PrimitiveCode::ALL.len(), "native={native}");
    }
}

#[test]
fn keywords() {
    let expected = [
        (PrimitiveCode::Void, "void"),
        (PrimitiveCode::Boolean, "bool"),
        (PrimitiveCode::Char, "char"),
        (PrimitiveCode::SByte, "sbyte"),
        (PrimitiveCode::Byte, "byte"),
        (PrimitiveCode::Int16, "short"),
        (PrimitiveCode::UInt16, "ushort"),
        (PrimitiveCode::UInt32, "uint"),
        (PrimitiveCode::Int64, "long"),
        (PrimitiveCode::UInt64, "ulong"),
        (PrimitiveCode::Single, "float"),
        (PrimitiveCode::Double, "double"),
        (PrimitiveCode::String, "string"),
        (PrimitiveCode::Object, "object"),
    ];
    for (code, keyword) in expected {
        assert_eq!(primitive_syntax(code, false).to_string(), keyword);
    }
}
