use crate::fetcher::FetcherRenderer;
use crate::fetcher::HookTarget;
use crate::fetcher::RenderContext;
use crate::key_generator;
use inherent::inherent;

const CLIENT_MODULE: &str = "graphql-request";
const REQUEST_INIT_MODULE: &str = "graphql-request/dist/types.dom";

/// Delegates transport to a caller-supplied `graphql-request` `GraphQLClient`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestClientFetch;
impl RequestClientFetch {
    fn register_client_import(ctx: &mut RenderContext<'_>) {
        let keyword = ctx.type_import_keyword();
        ctx.registry.add_import(format!(
            "{keyword} {{ GraphQLClient }} from '{CLIENT_MODULE}';"
        ));
    }

    fn register_request_init_import(ctx: &mut RenderContext<'_>) {
        let keyword = ctx.type_import_keyword();
        ctx.registry.add_import(format!(
            "{keyword} {{ RequestInit }} from '{REQUEST_INIT_MODULE}';"
        ));
    }
}

#[inherent]
impl FetcherRenderer for RequestClientFetch {
    pub fn render_base_request_function(&self) -> Option<String> {
        Some("
function fetcher<TData, TVariables>(client: GraphQLClient, query: string, variables?: TVariables, headers?: RequestInit['headers']) {
  return async (): Promise<TData> => client.request<TData, TVariables>(query, variables, headers);
}".to_string())
    }

    pub fn render_query_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        Self::register_client_import(ctx);
        Self::register_request_init_import(ctx);
        let method = ctx.method_map.query;
        method.register(ctx.registry);

        let HookTarget { hook_name, result_type, variables_type, document_variable_name, .. } = *target;
        let error_type = ctx.error_type();
        let variables = key_generator::variables_signature(target.has_required_variables, variables_type);
        let key = key_generator::query_key(target.operation_name, target.has_required_variables);
        let hook = method.hook;
        let options = method.options;
        format!(
            "export const use{hook_name} = <
      TData = {result_type},
      TError = {error_type}
    >(
      client: GraphQLClient,
      {variables},
      options?: {options}<{result_type}, TError, TData>,
      headers?: RequestInit['headers']
    ) =>
    {hook}<{result_type}, TError, TData>(
      {key},
      fetcher<{result_type}, {variables_type}>(client, {document_variable_name}, variables, headers),
      options
    );"
        )
    }

    pub fn render_mutation_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        Self::register_client_import(ctx);
        let method = ctx.method_map.mutation;
        method.register(ctx.registry);

        let HookTarget { hook_name, result_type, variables_type, document_variable_name, .. } = *target;
        let error_type = ctx.error_type();
        let key = key_generator::mutation_key(target.operation_name);
        let hook = method.hook;
        let options = method.options;
        format!(
            "export const use{hook_name} = <
      TError = {error_type},
      TContext = unknown
    >(
      client: GraphQLClient,
      options?: {options}<{result_type}, TError, {variables_type}, TContext>,
      headers?: RequestInit['headers']
    ) =>
    {hook}<{result_type}, TError, {variables_type}, TContext>(
      {key},
      (variables?: {variables_type}) => fetcher<{result_type}, {variables_type}>(client, {document_variable_name}, variables, headers)(),
      options
    );"
        )
    }

    pub fn render_infinite_query_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        Self::register_client_import(ctx);
        let method = ctx.method_map.infinite_query;
        method.register(ctx.registry);

        let HookTarget { hook_name, result_type, variables_type, document_variable_name, .. } = *target;
        let error_type = ctx.error_type();
        let variables = key_generator::variables_signature(target.has_required_variables, variables_type);
        let key = key_generator::infinite_query_key(target.operation_name, target.has_required_variables);
        let hook = method.hook;
        let options = method.options;
        format!(
            "export const useInfinite{hook_name} = <
      TData = {result_type},
      TError = {error_type}
    >(
      _pageParamKey: keyof {variables_type},
      client: GraphQLClient,
      {variables},
      options?: {options}<{result_type}, TError, TData>,
      headers?: RequestInit['headers']
    ) =>
    {hook}<{result_type}, TError, TData>(
      {key},
      (metaData) => fetcher<{result_type}, {variables_type}>(client, {document_variable_name}, {{...variables, ...(metaData.pageParam ?? {{}})}}, headers)(),
      options
    );"
        )
    }

    pub fn render_exposed_fetcher(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        Self::register_request_init_import(ctx);

        let HookTarget { hook_name, result_type, variables_type, document_variable_name, .. } = *target;
        let variables = key_generator::variables_signature(target.has_required_variables, variables_type);
        format!(
            "\nuse{hook_name}.fetcher = (client: GraphQLClient, {variables}, headers?: RequestInit['headers']) => \
            fetcher<{result_type}, {variables_type}>(client, {document_variable_name}, variables, headers);"
        )
    }

    pub fn is_react_hook(&self) -> bool {
        false
    }
}
