//! Per-component declaration blocks.

use tagtype_codegen::{CodeBuilder, CodeFragment, Renderable};
use tagtype_core::to_pascal_case;
use tagtype_registry::ComponentDescriptor;

use crate::{
    GenerateError,
    ast::{Import, Interface, Namespace, VarDecl},
    resolver::ResolvedComponent,
    rewrite::rewrite_identifiers,
};

/// Capability interface every custom element extends.
const BASE_ELEMENT: &str = "HTMLElement";
/// Base interface of every attributes interface.
const BASE_ATTRIBUTES: &str = "HTMLAttributes";
/// Global tag-name maps an element is registered in.
const TAG_NAME_MAPS: [&str; 2] = ["HTMLElementTagNameMap", "ElementTagNameMap"];
const JSX_NAMESPACE: &str = "JSX";
const ATTRIBUTES_NAMESPACE: &str = "JSXElements";

/// An optional attribute in a component's attributes interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEntry {
    pub name: String,
    /// Declared type with referenced symbols already rewritten.
    pub ty: String,
}

/// Declarations generated for one component.
///
/// Holds the names and entries of every declaration; text is only
/// produced when the block is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationBlock {
    tag_name: String,
    class_name: String,
    class_alias: String,
    class_module: String,
    element_interface: String,
    attributes_interface: String,
    attributes: Vec<AttributeEntry>,
}

impl DeclarationBlock {
    /// Build the block for `cmp`, substituting the bound names in `resolved`.
    ///
    /// `class_module` is the module specifier the component class is
    /// imported from.
    pub fn synthesize(
        cmp: &ComponentDescriptor,
        resolved: &ResolvedComponent,
        class_module: impl Into<String>,
    ) -> Result<Self, GenerateError> {
        let pascal = to_pascal_case(&cmp.tag_name);

        let attributes = cmp
            .observable_members()
            .map(|(member, descriptor)| -> Result<AttributeEntry, GenerateError> {
                let attribute_type = descriptor.attribute_type.as_ref().ok_or_else(|| {
                    GenerateError::MissingAttributeType {
                        member: member.to_string(),
                        component: cmp.tag_name.clone(),
                    }
                })?;
                let ty = match resolved.bindings_for(member) {
                    Some(bindings) => rewrite_identifiers(&attribute_type.text, bindings),
                    None => attribute_type.text.clone(),
                };
                Ok(AttributeEntry {
                    name: member.to_string(),
                    ty,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            tag_name: cmp.tag_name.clone(),
            class_name: cmp.class_name.clone(),
            element_interface: format!("HTML{}Element", pascal),
            attributes_interface: format!("{}Attributes", pascal),
            class_alias: pascal,
            class_module: class_module.into(),
            attributes,
        })
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Name the component class is imported under.
    pub fn class_alias(&self) -> &str {
        &self.class_alias
    }

    pub fn element_interface(&self) -> &str {
        &self.element_interface
    }

    pub fn attributes_interface(&self) -> &str {
        &self.attributes_interface
    }

    pub fn attributes(&self) -> &[AttributeEntry] {
        &self.attributes
    }

    /// Tag-name map registrations as `(map, tag, interface)` triples.
    pub fn registrations(&self) -> impl Iterator<Item = (&'static str, &str, &str)> {
        TAG_NAME_MAPS
            .iter()
            .map(|map| (*map, self.tag_name.as_str(), self.element_interface.as_str()))
    }

    /// Build the block as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn element(&self) -> Interface {
        Interface::new(&self.element_interface)
            .extends(&self.class_alias)
            .extends(BASE_ELEMENT)
    }

    fn constructor(&self) -> VarDecl {
        VarDecl::new(&self.element_interface)
            .property("prototype", &self.element_interface)
            .construct_signature(&self.element_interface)
    }

    fn intrinsic_elements(&self) -> Namespace {
        Namespace::new(JSX_NAMESPACE).item(Interface::new("IntrinsicElements").field(
            &self.tag_name,
            format!("{}.{}", ATTRIBUTES_NAMESPACE, self.attributes_interface),
        ))
    }

    fn attributes_namespace(&self) -> Namespace {
        let attributes = self.attributes.iter().fold(
            Interface::new(&self.attributes_interface)
                .exported()
                .extends(BASE_ATTRIBUTES),
            |iface, attr| iface.optional_field(&attr.name, &attr.ty),
        );
        Namespace::new(ATTRIBUTES_NAMESPACE).item(attributes)
    }
}

impl Renderable for DeclarationBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let class_import =
            Import::new(&self.class_module).named_as(&self.class_name, &self.class_alias);

        let global = self
            .registrations()
            .fold(
                Namespace::global()
                    .item(self.element())
                    .item(self.constructor()),
                |ns, (map, tag, iface)| ns.item(Interface::new(map).field(tag, iface)),
            )
            .item(self.intrinsic_elements())
            .item(self.attributes_namespace());

        let mut fragments = class_import.to_fragments();
        fragments.push(CodeFragment::blank());
        fragments.extend(global.to_fragments());
        fragments
    }
}
