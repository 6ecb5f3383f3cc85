use crate::config::GenerationConfig;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::tests::utils::config_from_json;
use crate::tests::utils::operation;
use crate::GenerationWarning;
use crate::ReactQueryVisitor;

fn build(config: GenerationConfig, operation: &Operation) -> String {
    ReactQueryVisitor::new(config).build_operation(operation).unwrap()
}

#[test]
fn default_fetch_query_scenario() {
    let output = build(
        config_from_json(r#"{ "fetcher": "fetch" }"#),
        &operation(OperationKind::Query, "GetUser", true),
    );

    assert_eq!(output.matches("export const useGetUserQuery = ").count(), 1);
    assert!(output.contains("dataSource: { endpoint: string, fetchParams?: RequestInit },"));
    assert!(output.contains("      variables: GetUserQueryVariables,\n"));
    assert!(output.contains("useQuery<GetUserQuery, TError, TData>("));
    assert!(output.contains("['GetUser', variables],"));
    assert!(output.contains(
        "fetcher<GetUserQuery, GetUserQueryVariables>(dataSource.endpoint, dataSource.fetchParams || {}, GetUserDocument, variables),"
    ));
    assert!(!output.contains("useInfinite"));
    assert!(!output.contains(".fetcher ="));
    assert!(!output.contains(".getKey"));
    assert!(!output.contains(".document"));
}

#[test]
fn default_fetch_query_renders_expected_source() {
    let output = build(
        GenerationConfig::default(),
        &operation(OperationKind::Query, "GetUser", false),
    );
    assert_eq!(output, "export const useGetUserQuery = <
      TData = GetUserQuery,
      TError = unknown
    >(
      dataSource: { endpoint: string, fetchParams?: RequestInit },
      variables?: GetUserQueryVariables,
      options?: UseQueryOptions<GetUserQuery, TError, TData>
    ) =>
    useQuery<GetUserQuery, TError, TData>(
      variables === undefined ? ['GetUser'] : ['GetUser', variables],
      fetcher<GetUserQuery, GetUserQueryVariables>(dataSource.endpoint, dataSource.fetchParams || {}, GetUserDocument, variables),
      options
    );");
}

#[test]
fn static_endpoint_mutation_scenario() {
    let mut visitor = ReactQueryVisitor::new(config_from_json(
        r#"{ "fetcher": { "endpoint": "https://api.example.com/graphql" } }"#,
    ));
    let output = visitor
        .build_operation(&operation(OperationKind::Mutation, "UpdateUser", true))
        .unwrap();

    assert!(output.contains("export const useUpdateUserMutation = <"));
    assert!(output.contains("TContext = unknown"));
    assert!(output.contains(
        ">(options?: UseMutationOptions<UpdateUserMutation, TError, UpdateUserMutationVariables, TContext>) =>"
    ));
    assert!(output.contains("['UpdateUser'],"));
    assert!(output.contains(
        "(variables?: UpdateUserMutationVariables) => fetcher<UpdateUserMutation, UpdateUserMutationVariables>(UpdateUserDocument, variables)(),"
    ));
    assert!(!output.contains("dataSource"));

    let base = visitor.fetcher_implementation().unwrap();
    assert!(base.contains("fetch(\"https://api.example.com/graphql\", {"));
    assert!(!base.contains("dataSource"));
}

#[test]
fn static_endpoint_expression_scenario() {
    let visitor = ReactQueryVisitor::new(config_from_json(
        r#"{ "fetcher": { "endpoint": "API_URL" } }"#,
    ));
    let base = visitor.fetcher_implementation().unwrap();
    assert!(base.contains("fetch(API_URL as string, {"));
    assert!(!base.contains("\"API_URL\""));
}

#[test]
fn subscription_is_skipped_with_warning() {
    let mut visitor = ReactQueryVisitor::new(GenerationConfig::default());
    let output = visitor.build_operation(
        &operation(OperationKind::Subscription, "OnUserUpdated", false),
    );

    assert_eq!(output, None);
    assert_eq!(
        visitor.warnings(),
        &[GenerationWarning::UnsupportedSubscription {
            operation_name: "OnUserUpdated".to_string(),
        }],
    );
    assert!(visitor.warnings()[0].to_string().contains("OnUserUpdated"));
    assert!(visitor.registry().is_empty());
    assert!(!visitor.has_operations());
    assert!(visitor.into_imports(vec![]).is_empty());
}

#[test]
fn expose_document_and_query_keys() {
    let output = build(
        config_from_json(r#"{ "exposeDocument": true, "exposeQueryKeys": true }"#),
        &operation(OperationKind::Query, "GetUser", true),
    );

    assert!(output.contains("\nuseGetUserQuery.document = GetUserDocument;\n"));
    assert!(output.contains(
        "GetUserDocument;\n\n\nuseGetUserQuery.getKey = (variables: GetUserQueryVariables) => ['GetUser', variables];\n"
    ));
}

#[test]
fn infinite_query_with_key_maker() {
    let output = build(
        config_from_json(r#"{ "addInfiniteQuery": true, "exposeQueryKeys": true }"#),
        &operation(OperationKind::Query, "ListPosts", false),
    );

    assert_eq!(output.matches("export const useListPostsQuery = ").count(), 1);
    assert_eq!(output.matches("export const useInfiniteListPostsQuery = ").count(), 1);
    assert!(output.contains("_pageParamKey: keyof ListPostsQueryVariables,"));
    assert!(output.contains("useInfiniteQuery<ListPostsQuery, TError, TData>("));
    assert!(output.contains("{...variables, ...(metaData.pageParam ?? {})}"));
    assert!(output.contains(
        "\nuseInfiniteListPostsQuery.getKey = (variables?: ListPostsQueryVariables) => \
        variables === undefined ? ['ListPosts.infinite'] : ['ListPosts.infinite', variables];\n"
    ));

    // The hook comes before its key maker, the infinite hook after both.
    let hook_pos = output.find("export const useListPostsQuery").unwrap();
    let key_pos = output.find("useListPostsQuery.getKey").unwrap();
    let infinite_pos = output.find("export const useInfiniteListPostsQuery").unwrap();
    assert!(hook_pos < key_pos && key_pos < infinite_pos);
}

#[test]
fn expose_mutation_keys() {
    let output = build(
        config_from_json(r#"{ "exposeMutationKeys": true }"#),
        &operation(OperationKind::Mutation, "UpdateUser", false),
    );
    assert!(output.ends_with("\nuseUpdateUserMutation.getKey = () => ['UpdateUser'];\n"));
}

#[test]
fn expose_fetcher_for_queries_and_mutations() {
    let config = config_from_json(r#"{ "exposeFetcher": true }"#);
    let query = build(config.clone(), &operation(OperationKind::Query, "GetUser", true));
    assert!(query.ends_with(
        "\nuseGetUserQuery.fetcher = (dataSource: { endpoint: string, fetchParams?: RequestInit }, \
        variables: GetUserQueryVariables) => fetcher<GetUserQuery, GetUserQueryVariables>\
        (dataSource.endpoint, dataSource.fetchParams || {}, GetUserDocument, variables);"
    ));

    let mutation = build(config, &operation(OperationKind::Mutation, "UpdateUser", false));
    assert!(mutation.contains("\nuseUpdateUserMutation.fetcher = "));
}

#[test]
fn expose_fetcher_is_suppressed_for_react_hook_fetchers() {
    let output = build(
        config_from_json(r#"{
            "exposeFetcher": true,
            "fetcher": { "func": "./hooks#useFetchData", "isReactHook": true }
        }"#),
        &operation(OperationKind::Query, "GetUser", true),
    );
    assert!(!output.contains(".fetcher ="));
}

#[test]
fn import_operation_types_from_prefixes_types() {
    let output = build(
        config_from_json(r#"{ "importOperationTypesFrom": "Types" }"#),
        &operation(OperationKind::Query, "GetUser", true),
    );
    assert!(output.contains("TData = Types.GetUserQuery,"));
    assert!(output.contains("variables: Types.GetUserQueryVariables,"));
    // Cache keys keep the bare operation name.
    assert!(output.contains("['GetUser', variables]"));
}

#[test]
fn custom_error_type() {
    let output = build(
        config_from_json(r#"{ "errorType": "GraphQLError" }"#),
        &operation(OperationKind::Mutation, "UpdateUser", false),
    );
    assert!(output.contains("TError = GraphQLError,"));
}

#[test]
fn anonymous_operation_gets_degenerate_name() {
    let anonymous = Operation::new(
        OperationKind::Query,
        None::<String>,
        "Document",
        "{ viewer { id } }",
        "Query",
        "QueryVariables",
        false,
    );
    let output = build(GenerationConfig::default(), &anonymous);
    assert!(output.contains("export const useQuery = <"));
    assert!(output.contains("variables === undefined ? [''] : ['', variables]"));
}

#[test]
fn imports_list_each_identifier_once() {
    let mut visitor = ReactQueryVisitor::new(config_from_json(r#"{ "addInfiniteQuery": true }"#));
    visitor.build_operation(&operation(OperationKind::Query, "GetUser", true));
    visitor.build_operation(&operation(OperationKind::Query, "ListPosts", false));
    visitor.build_operation(&operation(OperationKind::Mutation, "UpdateUser", true));
    visitor.build_operation(&operation(OperationKind::Mutation, "DeleteUser", true));

    assert_eq!(
        visitor.into_imports(vec!["import { Base } from './base';".to_string()]),
        vec![
            "import { Base } from './base';".to_string(),
            "import { useQuery, useInfiniteQuery, useMutation, UseQueryOptions, \
            UseInfiniteQueryOptions, UseMutationOptions } from '@tanstack/react-query';".to_string(),
        ],
    );
}

#[test]
fn legacy_mode_and_type_imports() {
    let mut visitor = ReactQueryVisitor::new(config_from_json(
        r#"{ "legacyMode": true, "useTypeImports": true }"#,
    ));
    visitor.build_operation(&operation(OperationKind::Query, "GetUser", true));

    assert_eq!(
        visitor.into_imports(vec![]),
        vec!["import { useQuery, type UseQueryOptions } from 'react-query';".to_string()],
    );
}

#[test]
fn request_client_imports_precede_react_query_import() {
    let mut visitor = ReactQueryVisitor::new(config_from_json(r#"{ "fetcher": "graphql-request" }"#));
    visitor.build_operation(&operation(OperationKind::Mutation, "UpdateUser", true));

    assert_eq!(
        visitor.into_imports(vec![]),
        vec![
            "import { GraphQLClient } from 'graphql-request';".to_string(),
            "import { useMutation, UseMutationOptions } from '@tanstack/react-query';".to_string(),
        ],
    );
}

#[test]
fn building_twice_is_idempotent() {
    let config = config_from_json(r#"{
        "exposeQueryKeys": true,
        "exposeFetcher": true,
        "addInfiniteQuery": true
    }"#);
    let op = operation(OperationKind::Query, "GetUser", false);

    let mut visitor = ReactQueryVisitor::new(config);
    let first = visitor.build_operation(&op).unwrap();
    let registry_after_first = visitor.registry().clone();
    let second = visitor.build_operation(&op).unwrap();

    assert_eq!(first, second);
    assert_eq!(visitor.registry(), &registry_after_first);
    assert_eq!(visitor.registry().hooks().count(), 2);
    assert_eq!(visitor.registry().options().count(), 2);
}
