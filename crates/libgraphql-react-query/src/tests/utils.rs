use crate::config::GenerationConfig;
use crate::operation::Operation;
use crate::operation::OperationKind;

pub(super) fn config_from_json(json: &str) -> GenerationConfig {
    GenerationConfig::from_json_str(json).unwrap()
}

/// An operation whose type names follow the `typescript-operations` defaults.
pub(super) fn operation(
    kind: OperationKind,
    name: &str,
    has_required_variables: bool,
) -> Operation {
    let typename = format!("{name}{kind}");
    Operation::new(
        kind,
        Some(name),
        format!("{name}Document"),
        format!("{} {name} {{ __typename }}", kind.as_pascal_str().to_lowercase()),
        typename.as_str(),
        format!("{typename}Variables"),
        has_required_variables,
    )
}
