use crate::config::GenerationConfig;
use crate::config::NamingConvention;
use crate::operation::OperationKind;
use crate::document_variable_name;
use crate::operation_display_name;
use crate::operation_suffix;

#[test]
fn suffix_always_appended_without_dedupe() {
    let config = GenerationConfig::default();
    assert_eq!(operation_suffix(&config, "GetUser", OperationKind::Query), "Query");
    assert_eq!(operation_suffix(&config, "GetUserQuery", OperationKind::Query), "Query");
    assert_eq!(
        operation_display_name(&config, "GetUserQuery", OperationKind::Query),
        "GetUserQueryQuery",
    );
}

#[test]
fn dedupe_skips_suffix_for_already_suffixed_names() {
    let config = GenerationConfig {
        dedupe_operation_suffix: true,
        ..GenerationConfig::default()
    };
    assert_eq!(
        operation_display_name(&config, "GetUserQuery", OperationKind::Query),
        "GetUserQuery",
    );
    // Any operation kind's word counts, not just the operation's own kind.
    assert_eq!(
        operation_display_name(&config, "SubscriptionStatus", OperationKind::Query),
        "SubscriptionStatus",
    );
    assert_eq!(
        operation_display_name(&config, "UpdateUser", OperationKind::Mutation),
        "UpdateUserMutation",
    );
}

#[test]
fn omit_suffix_wins_over_dedupe() {
    let config = GenerationConfig {
        omit_operation_suffix: true,
        dedupe_operation_suffix: true,
        ..GenerationConfig::default()
    };
    assert_eq!(operation_suffix(&config, "GetUser", OperationKind::Query), "");
    assert_eq!(
        operation_display_name(&config, "GetUser", OperationKind::Query),
        "GetUser",
    );
}

#[test]
fn pascal_case_preserves_underscores_by_default() {
    let convention = NamingConvention::PascalCase;
    assert_eq!(convention.convert("getUser", false), "GetUser");
    assert_eq!(convention.convert("get_user", false), "Get_User");
    assert_eq!(convention.convert("get_user", true), "GetUser");
    assert_eq!(convention.convert("", false), "");
}

#[test]
fn keep_convention_leaves_names_untouched() {
    let config = GenerationConfig {
        naming_convention: NamingConvention::Keep,
        ..GenerationConfig::default()
    };
    assert_eq!(
        operation_display_name(&config, "getUser", OperationKind::Query),
        "getUserQuery",
    );
}

#[test]
fn document_variable_name_has_no_kind_suffix() {
    let config = GenerationConfig::default();
    assert_eq!(document_variable_name(&config, "getUser"), "GetUserDocument");
    assert_eq!(document_variable_name(&config, ""), "Document");
}
