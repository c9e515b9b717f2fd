use pretty_assertions::assert_eq;
use winmd_meta::{MalformedReason, SignatureShape};

use super::*;

fn decode(blob: &[u8]) -> Result<TypeDescriptor, ResolveError> {
    SignatureHandleProvider::new().decode_type(blob)
}

#[test]
fn primitive_leaf() {
    assert_eq!(
        decode(&[0x08]).unwrap(),
        TypeDescriptor::primitive(PrimitiveCode::Int32)
    );
}

#[test]
fn definitions_and_references_become_handles() {
    // CLASS, TypeDef row 3
    assert_eq!(
        decode(&[0x12, 0x0C]).unwrap(),
        TypeDescriptor::handle(TypeDefHandle::from_row(3))
    );
    // VALUETYPE, TypeRef row 2
    assert_eq!(
        decode(&[0x11, 0x09]).unwrap(),
        TypeDescriptor::handle(TypeRefHandle::from_row(2))
    );
}

#[test]
fn pointer_to_fixed_array() {
    // PTR ARRAY U1 rank=1 sizes=[4] bounds=[]
    let descriptor = decode(&[0x0F, 0x14, 0x05, 0x01, 0x01, 0x04, 0x00]).unwrap();
    assert_eq!(
        descriptor,
        TypeDescriptor::pointer(TypeDescriptor::array(
            TypeDescriptor::primitive(PrimitiveCode::Byte),
            ArrayShape::fixed(&[4]),
        ))
    );
}

#[test]
fn unsupported_shapes_fail_whole_signature() {
    let cases: [(&[u8], SignatureShape, usize); 10] = [
        // GENERICINST CLASS TypeRef(1) <I4>
        (&[0x15, 0x12, 0x05, 0x01, 0x08], SignatureShape::GenericInstantiation, 0),
        // PTR GENERICINST ...
        (&[0x0F, 0x15, 0x12, 0x05, 0x01, 0x08], SignatureShape::GenericInstantiation, 1),
        (&[0x1D, 0x05], SignatureShape::SzArray, 0),
        (&[0x10, 0x08], SignatureShape::ByReference, 0),
        // CLASS TypeSpec(1)
        (&[0x12, 0x06], SignatureShape::TypeSpecification, 0),
        // FNPTR default, 0 params, VOID
        (&[0x1B, 0x00, 0x00, 0x01], SignatureShape::FunctionPointer, 0),
        (&[0x13, 0x00], SignatureShape::GenericTypeParameter, 0),
        (&[0x1E, 0x01], SignatureShape::GenericMethodParameter, 0),
        // CMOD_OPT TypeRef(1) I4
        (&[0x20, 0x05, 0x08], SignatureShape::ModifiedType, 0),
        (&[0x45, 0x08], SignatureShape::PinnedType, 0),
    ];

    for (blob, shape, offset) in cases {
        assert_eq!(
            decode(blob),
            Err(ResolveError::UnsupportedSignatureShape { shape, offset }),
            "{blob:02X?}"
        );
    }
}

#[test]
fn malformed_blob() {
    assert_eq!(
        decode(&[0x0F]),
        Err(ResolveError::MalformedSignature {
            offset: 1,
            reason: MalformedReason::UnexpectedEnd,
        })
    );
    assert_eq!(
        decode(&[0x08, 0x08]),
        Err(ResolveError::MalformedSignature {
            offset: 1,
            reason: MalformedReason::TrailingBytes(1),
        })
    );
}

#[test]
fn field_signature() {
    // FIELD PTR VALUETYPE TypeDef(1)
    assert_eq!(
        SignatureHandleProvider::new()
            .decode_field(&[0x06, 0x0F, 0x11, 0x04])
            .unwrap(),
        TypeDescriptor::pointer(TypeDescriptor::handle(TypeDefHandle::from_row(1)))
    );
}

#[test]
fn method_signature() {
    // default, 2 params, returns VOID, (I4, U1*)
    let signature = SignatureHandleProvider::new()
        .decode_method(&[0x00, 0x02, 0x01, 0x08, 0x0F, 0x05])
        .unwrap();
    assert_eq!(
        signature.return_type,
        TypeDescriptor::primitive(PrimitiveCode::Void)
    );
    assert_eq!(
        signature.parameter_types,
        vec![
            TypeDescriptor::primitive(PrimitiveCode::Int32),
            TypeDescriptor::pointer(TypeDescriptor::primitive(PrimitiveCode::Byte)),
        ]
    );
}

#[test]
fn method_with_unsupported_parameter() {
    // default, 1 param, returns I4, (BYREF I4)
    assert_eq!(
        SignatureHandleProvider::new().decode_method(&[0x00, 0x01, 0x08, 0x10, 0x08]),
        Err(ResolveError::UnsupportedSignatureShape {
            shape: SignatureShape::ByReference,
            offset: 3,
        })
    );
}
