use pretty_assertions::assert_eq;
use winmd_meta::{
    HandleKind, MetadataTable, PrimitiveCode, TypeAttributes, TypeDefHandle, TypeRefHandle,
};

use super::*;
use crate::policy::RenderPolicy;
use crate::sink::RequestLog;
use crate::substitution::SubstitutionTable;

struct Fixture {
    table: MetadataTable,
    builtin: SubstitutionTable,
    marshaled: SubstitutionTable,
    log: RequestLog,
    unknown: TypeDefHandle,
    stream: TypeDefHandle,
    rect: TypeDefHandle,
    inner: TypeDefHandle,
    guid: TypeRefHandle,
    bstr: TypeRefHandle,
    variant: TypeRefHandle,
}

const INTERFACE: TypeAttributes = TypeAttributes::PUBLIC
    .union(TypeAttributes::INTERFACE)
    .union(TypeAttributes::ABSTRACT);

impl Fixture {
    fn new() -> Self {
        let mut table = MetadataTable::new();
        let unknown = table.add_type_def("Windows.Win32.System.Com", "IUnknown", INTERFACE);
        let stream = table.add_type_def("Windows.Win32.System.Com", "IStream", INTERFACE);
        let rect = table.add_type_def("Windows.Win32.Foundation", "RECT", TypeAttributes::PUBLIC);
        let outer = table.add_type_def("Windows.Win32.UI", "Outer", TypeAttributes::PUBLIC);
        let middle = table.add_nested_type_def(outer, "Middle", TypeAttributes::empty());
        let inner = table.add_nested_type_def(middle, "Inner", TypeAttributes::empty());
        let guid = table.add_external_type_ref("System", "Guid");
        let bstr = table.add_external_type_ref("Windows.Win32.Foundation", "BSTR");
        let variant = table.add_external_type_ref("Windows.Win32.System.Variant", "VARIANT");

        Self {
            table,
            builtin: SubstitutionTable::builtin_interop(),
            marshaled: SubstitutionTable::marshaled_interop(),
            log: RequestLog::new(),
            unknown,
            stream,
            rect,
            inner,
            guid,
            bstr,
            variant,
        }
    }

    fn ctx(&self, policy: RenderPolicy) -> RenderContext<'_> {
        RenderContext::new(&self.table, &self.log, &self.builtin, &self.marshaled)
            .with_policy(policy)
    }

    fn render(&self, descriptor: &TypeDescriptor, policy: RenderPolicy) -> TypeSyntax {
        descriptor.render(&self.ctx(policy)).unwrap()
    }
}

fn opaque() -> RenderPolicy {
    RenderPolicy::PROJECT_INTERFACES_AS_OPAQUE_HANDLES
}

#[test]
fn primitives_follow_native_width_flag() {
    let fx = Fixture::new();
    let int = TypeDescriptor::primitive(PrimitiveCode::Int32);
    let intptr = TypeDescriptor::primitive(PrimitiveCode::IntPtr);
    let native = RenderPolicy::PREFER_NATIVE_WIDTH_INTEGERS;

    assert_eq!(fx.render(&int, RenderPolicy::empty()).to_string(), "int");
    assert_eq!(fx.render(&int, native).to_string(), "int");
    assert_eq!(fx.render(&intptr, RenderPolicy::empty()).to_string(), "IntPtr");
    assert_eq!(fx.render(&intptr, native).to_string(), "nint");
    assert!(fx.log.is_empty());
}

#[test]
fn pointer_to_fixed_array() {
    let fx = Fixture::new();
    let descriptor = TypeDescriptor::pointer(TypeDescriptor::array(
        TypeDescriptor::primitive(PrimitiveCode::Byte),
        ArrayShape::fixed(&[4]),
    ));
    assert_eq!(fx.render(&descriptor, RenderPolicy::empty()).to_string(), "byte[4]*");
}

#[test]
fn multi_dimensional_array_of_struct() {
    let fx = Fixture::new();
    let descriptor = TypeDescriptor::array(
        TypeDescriptor::handle(fx.rect),
        ArrayShape::fixed(&[2, 3]),
    );
    assert_eq!(fx.render(&descriptor, RenderPolicy::empty()).to_string(), "RECT[2, 3]");
    assert_eq!(fx.log.requests(), vec![GenerationRequest::Definition(fx.rect)]);
}

#[test]
fn iunknown_is_object_under_opaque_projection() {
    let fx = Fixture::new();
    let syntax = fx.render(&TypeDescriptor::handle(fx.unknown), opaque());
    assert_eq!(syntax.to_string(), "object");
    assert!(syntax.is_managed_reference());
    assert!(fx.log.is_empty());
}

#[test]
fn iunknown_is_pointer_without_opaque_projection() {
    let fx = Fixture::new();
    let syntax = fx.render(&TypeDescriptor::handle(fx.unknown), RenderPolicy::empty());
    assert_eq!(syntax.to_string(), "IUnknown*");
    assert!(!syntax.is_managed_reference());
    assert_eq!(fx.log.requests(), vec![GenerationRequest::Definition(fx.unknown)]);
}

#[test]
fn variant_reference_is_object_only_when_opaque() {
    let fx = Fixture::new();
    let variant = TypeDescriptor::handle(fx.variant);

    assert_eq!(fx.render(&variant, opaque()).to_string(), "object");
    assert!(fx.log.is_empty());

    assert_eq!(fx.render(&variant, RenderPolicy::empty()).to_string(), "VARIANT");
    assert_eq!(fx.log.requests(), vec![GenerationRequest::Reference(fx.variant)]);
}

#[test]
fn interface_projection() {
    let fx = Fixture::new();
    let stream = TypeDescriptor::handle(fx.stream);

    let managed = fx.render(&stream, opaque());
    assert_eq!(managed.to_string(), "IStream");
    assert!(managed.is_managed_reference());
    assert_eq!(managed.pointer_depth(), 0);

    let pointer = fx.render(&stream, RenderPolicy::empty());
    assert_eq!(pointer.to_string(), "IStream*");
    assert!(!pointer.is_managed_reference());
    assert_eq!(pointer.pointer_depth(), 1);

    assert_eq!(fx.log.unique(), vec![GenerationRequest::Definition(fx.stream)]);
    assert_eq!(fx.log.len(), 2);
}

#[test]
fn struct_is_plain_name() {
    let fx = Fixture::new();
    let syntax = fx.render(&TypeDescriptor::handle(fx.rect), opaque());
    assert_eq!(syntax.to_string(), "RECT");
    assert!(!syntax.is_managed_reference());
}

#[test]
fn builtin_substitute_never_requests() {
    let fx = Fixture::new();
    let guid = TypeDescriptor::handle(fx.guid);
    for bits in 0..=RenderPolicy::all().bits() {
        let policy = RenderPolicy::from_bits_truncate(bits);
        assert_eq!(fx.render(&guid, policy).to_string(), "global::System.Guid");
    }
    assert!(fx.log.is_empty());
}

#[test]
fn marshaled_substitute_needs_policy() {
    let fx = Fixture::new();
    let bstr = TypeDescriptor::handle(fx.bstr);

    assert_eq!(
        fx.render(&bstr, RenderPolicy::PREFER_MARSHALED_SUBSTITUTES).to_string(),
        "string"
    );
    assert!(fx.log.is_empty());

    assert_eq!(fx.render(&bstr, RenderPolicy::empty()).to_string(), "BSTR");
    assert_eq!(fx.log.requests(), vec![GenerationRequest::Reference(fx.bstr)]);
}

#[test]
fn builtin_wins_over_marshaled() {
    let mut fx = Fixture::new();
    fx.marshaled = SubstitutionTable::from_entries([("Guid", TypeSyntax::identifier("NotGuid"))]);
    let syntax = fx.render(
        &TypeDescriptor::handle(fx.guid),
        RenderPolicy::PREFER_MARSHALED_SUBSTITUTES,
    );
    assert_eq!(syntax.to_string(), "global::System.Guid");
}

#[test]
fn object_projection_precedes_substitution() {
    let mut fx = Fixture::new();
    fx.builtin = SubstitutionTable::from_entries([("IUnknown", TypeSyntax::identifier("ComObject"))]);
    let unknown = TypeDescriptor::handle(fx.unknown);

    assert_eq!(fx.render(&unknown, opaque()).to_string(), "object");
    assert_eq!(fx.render(&unknown, RenderPolicy::empty()).to_string(), "ComObject");
    assert!(fx.log.is_empty());
}

#[test]
fn nested_names() {
    let fx = Fixture::new();
    let inner = TypeDescriptor::handle(fx.inner);
    assert_eq!(
        fx.render(&inner, RenderPolicy::QUALIFY_NESTED_NAMES).to_string(),
        "Outer.Middle.Inner"
    );
    assert_eq!(fx.render(&inner, RenderPolicy::empty()).to_string(), "Inner");
}

#[test]
fn rendering_is_repeatable() {
    let fx = Fixture::new();
    let descriptor = TypeDescriptor::pointer(TypeDescriptor::handle(fx.stream));
    let policy = opaque().with_qualified_nested_names(true);
    assert_eq!(fx.render(&descriptor, policy), fx.render(&descriptor, policy));
}

#[test]
fn dangling_handle_fails() {
    let fx = Fixture::new();
    let missing = TypeDefHandle::from_row(200);
    let descriptor = TypeDescriptor::pointer(TypeDescriptor::handle(missing));
    assert_eq!(
        descriptor.render(&fx.ctx(RenderPolicy::empty())),
        Err(ResolveError::DanglingHandle(missing.into()))
    );
    assert!(fx.log.is_empty());
}

#[test]
fn unrecognized_handle_kind_fails() {
    let fx = Fixture::new();
    let descriptor = TypeDescriptor::Handle(EntityHandle::new(HandleKind::ModuleReference, 1));
    assert_eq!(
        descriptor.render(&fx.ctx(RenderPolicy::empty())),
        Err(ResolveError::UnrecognizedHandleKind(HandleKind::ModuleReference))
    );
}

#[test]
fn broken_declaring_type_fails_before_substitution() {
    let mut fx = Fixture::new();
    let missing_outer = TypeDefHandle::from_row(99);
    let point = fx
        .table
        .add_nested_type_def(missing_outer, "POINT", TypeAttributes::empty());
    let descriptor = TypeDescriptor::handle(point);

    assert_eq!(
        fx.render(&descriptor, RenderPolicy::empty()).to_string(),
        "global::System.Drawing.Point"
    );
    assert_eq!(
        descriptor.render(&fx.ctx(RenderPolicy::QUALIFY_NESTED_NAMES)),
        Err(ResolveError::DanglingHandle(missing_outer.into()))
    );
    assert!(fx.log.is_empty());
}
