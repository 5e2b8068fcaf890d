use miette::Diagnostic;
use tagtype_core::PathError;
use thiserror::Error;

/// Errors that abort declaration generation.
///
/// Generation is all-or-nothing: any of these means no artifact is produced.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(
        "unrecognized type reference location '{kind}' on member '{member}' of component '{component}'"
    )]
    #[diagnostic(
        code(tagtype::unknown_location),
        help("reference locations must be one of: global, local, import")
    )]
    UnknownLocationKind {
        kind: String,
        member: String,
        component: String,
    },

    #[error(
        "type '{name}' on member '{member}' of component '{component}' is imported but has no path"
    )]
    #[diagnostic(code(tagtype::missing_import_path))]
    MissingImportPath {
        name: String,
        member: String,
        component: String,
    },

    #[error("member '{member}' of component '{component}' is an attribute without a type")]
    #[diagnostic(code(tagtype::missing_attribute_type))]
    MissingAttributeType { member: String, component: String },

    #[error("failed to resolve a path")]
    #[diagnostic(code(tagtype::path))]
    Path(#[from] PathError),
}
