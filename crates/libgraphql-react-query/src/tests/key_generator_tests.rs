use crate::key_generator;

#[test]
fn required_variables_signature_is_not_optional() {
    assert_eq!(
        key_generator::variables_signature(true, "GetUserQueryVariables"),
        "variables: GetUserQueryVariables",
    );
}

#[test]
fn optional_variables_signature_is_optional() {
    assert_eq!(
        key_generator::variables_signature(false, "GetUserQueryVariables"),
        "variables?: GetUserQueryVariables",
    );
}

#[test]
fn query_key_with_required_variables() {
    assert_eq!(
        key_generator::query_key("GetUser", true),
        "['GetUser', variables]",
    );
}

#[test]
fn query_key_with_optional_variables() {
    assert_eq!(
        key_generator::query_key("GetUser", false),
        "variables === undefined ? ['GetUser'] : ['GetUser', variables]",
    );
}

#[test]
fn infinite_query_key_is_tagged() {
    assert_eq!(
        key_generator::infinite_query_key("ListPosts", true),
        "['ListPosts.infinite', variables]",
    );
    assert_eq!(
        key_generator::infinite_query_key("ListPosts", false),
        "variables === undefined ? ['ListPosts.infinite'] : ['ListPosts.infinite', variables]",
    );
}

#[test]
fn mutation_key_is_name_only() {
    assert_eq!(key_generator::mutation_key("UpdateUser"), "['UpdateUser']");
}

#[test]
fn query_key_maker_embeds_the_query_key() {
    let maker = key_generator::query_key_maker(
        "GetUser",
        "GetUserQuery",
        "GetUserQueryVariables",
        true,
    );
    assert_eq!(
        maker,
        "\n\nuseGetUserQuery.getKey = (variables: GetUserQueryVariables) => ['GetUser', variables];\n",
    );
}

#[test]
fn infinite_query_key_maker_targets_infinite_hook() {
    let maker = key_generator::infinite_query_key_maker(
        "GetUser",
        "GetUserQuery",
        "GetUserQueryVariables",
        false,
    );
    assert!(maker.starts_with("\n\nuseInfiniteGetUserQuery.getKey = (variables?: GetUserQueryVariables) => "));
    assert!(maker.contains(&key_generator::infinite_query_key("GetUser", false)));
}

#[test]
fn mutation_key_maker_takes_no_arguments() {
    assert_eq!(
        key_generator::mutation_key_maker("UpdateUser", "UpdateUserMutation"),
        "\nuseUpdateUserMutation.getKey = () => ['UpdateUser'];\n",
    );
}
