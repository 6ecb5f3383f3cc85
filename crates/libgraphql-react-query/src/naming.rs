use crate::config::GenerationConfig;
use crate::operation::OperationKind;

const DOCUMENT_VARIABLE_SUFFIX: &str = "Document";

/// The word appended to an operation's converted name, per the
/// `omitOperationSuffix` and `dedupeOperationSuffix` options.
///
/// With `dedupeOperationSuffix`, names that already mention any operation
/// kind get no suffix so that `GetUserQuery` does not become
/// `GetUserQueryQuery`.
pub fn operation_suffix(
    config: &GenerationConfig,
    declared_name: &str,
    kind: OperationKind,
) -> &'static str {
    if config.omit_operation_suffix {
        return "";
    }

    if !config.dedupe_operation_suffix {
        return kind.as_pascal_str();
    }

    let already_suffixed = [
        OperationKind::Query,
        OperationKind::Mutation,
        OperationKind::Subscription,
    ].iter().any(|kind| declared_name.contains(kind.as_pascal_str()));

    if already_suffixed {
        ""
    } else {
        kind.as_pascal_str()
    }
}

/// The converted, suffixed name shared by an operation's hook
/// (`use<Name>`) and its generated TypeScript types.
pub fn operation_display_name(
    config: &GenerationConfig,
    declared_name: &str,
    kind: OperationKind,
) -> String {
    let converted = config.naming_convention.convert(
        declared_name,
        config.transform_underscore,
    );
    format!("{converted}{}", operation_suffix(config, declared_name, kind))
}

/// Name of the TypeScript constant holding an operation's document string.
pub fn document_variable_name(
    config: &GenerationConfig,
    declared_name: &str,
) -> String {
    let converted = config.naming_convention.convert(
        declared_name,
        config.transform_underscore,
    );
    format!("{converted}{DOCUMENT_VARIABLE_SUFFIX}")
}
