//! Cache-key expressions and `variables` parameter signatures.
//!
//! Hooks and their standalone `getKey` accessors both build keys through the
//! functions in this module, which keeps the two textually identical.

const INFINITE_KEY_TAG: &str = ".infinite";

/// The `variables` parameter of a generated hook or accessor. Optional
/// (`variables?: T`) unless the operation has a required variable.
pub fn variables_signature(
    has_required_variables: bool,
    variables_type: &str,
) -> String {
    let optional_marker = if has_required_variables { "" } else { "?" };
    format!("variables{optional_marker}: {variables_type}")
}

/// The react-query key used by an operation's query hook.
pub fn query_key(operation_name: &str, has_required_variables: bool) -> String {
    tagged_key(operation_name, has_required_variables)
}

/// The react-query key used by an operation's infinite-query hook.
pub fn infinite_query_key(
    operation_name: &str,
    has_required_variables: bool,
) -> String {
    tagged_key(
        &format!("{operation_name}{INFINITE_KEY_TAG}"),
        has_required_variables,
    )
}

/// Mutations receive their variables at call time, so their key is just the
/// operation name.
pub fn mutation_key(operation_name: &str) -> String {
    format!("['{operation_name}']")
}

/// `use<Hook>.getKey = (variables) => <key>;`, set off from the hook by a
/// blank line.
pub fn query_key_maker(
    operation_name: &str,
    hook_name: &str,
    variables_type: &str,
    has_required_variables: bool,
) -> String {
    format!(
        "\n\nuse{hook_name}.getKey = ({}) => {};\n",
        variables_signature(has_required_variables, variables_type),
        query_key(operation_name, has_required_variables),
    )
}

/// `useInfinite<Hook>.getKey = (variables) => <key>;`
pub fn infinite_query_key_maker(
    operation_name: &str,
    hook_name: &str,
    variables_type: &str,
    has_required_variables: bool,
) -> String {
    format!(
        "\n\nuseInfinite{hook_name}.getKey = ({}) => {};\n",
        variables_signature(has_required_variables, variables_type),
        infinite_query_key(operation_name, has_required_variables),
    )
}

/// `use<Hook>.getKey = () => <key>;`
pub fn mutation_key_maker(operation_name: &str, hook_name: &str) -> String {
    format!(
        "\nuse{hook_name}.getKey = () => {};\n",
        mutation_key(operation_name),
    )
}

fn tagged_key(tag: &str, has_required_variables: bool) -> String {
    if has_required_variables {
        format!("['{tag}', variables]")
    } else {
        format!("variables === undefined ? ['{tag}'] : ['{tag}', variables]")
    }
}
