use crate::fetcher::FETCH_RESPONSE_HANDLING;
use crate::fetcher::FetcherRenderer;
use crate::fetcher::HookTarget;
use crate::fetcher::RenderContext;
use crate::key_generator;
use inherent::inherent;

const DATA_SOURCE_PARAM: &str = "dataSource: { endpoint: string, fetchParams?: RequestInit }";
const DATA_SOURCE_ARGS: &str = "dataSource.endpoint, dataSource.fetchParams || {}";

/// Requests through the builtin `fetch`, with the endpoint and any extra
/// `RequestInit` passed by the caller to each hook as a `dataSource`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultFetch;

#[inherent]
impl FetcherRenderer for DefaultFetch {
    pub fn render_base_request_function(&self) -> Option<String> {
        Some(format!(
            "
function fetcher<TData, TVariables>(endpoint: string, requestInit: RequestInit, query: string, variables?: TVariables) {{
  return async (): Promise<TData> => {{
    const res = await fetch(endpoint, {{
      method: 'POST',
      ...requestInit,
      body: JSON.stringify({{ query, variables }}),
    }});
{FETCH_RESPONSE_HANDLING}"
        ))
    }

    pub fn render_query_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
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
      {DATA_SOURCE_PARAM},
      {variables},
      options?: {options}<{result_type}, TError, TData>
    ) =>
    {hook}<{result_type}, TError, TData>(
      {key},
      fetcher<{result_type}, {variables_type}>({DATA_SOURCE_ARGS}, {document_variable_name}, variables),
      options
    );"
        )
    }

    pub fn render_mutation_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
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
      {DATA_SOURCE_PARAM},
      options?: {options}<{result_type}, TError, {variables_type}, TContext>
    ) =>
    {hook}<{result_type}, TError, {variables_type}, TContext>(
      {key},
      (variables?: {variables_type}) => fetcher<{result_type}, {variables_type}>({DATA_SOURCE_ARGS}, {document_variable_name}, variables)(),
      options
    );"
        )
    }

    pub fn render_infinite_query_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
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
      {DATA_SOURCE_PARAM},
      _pageParamKey: keyof {variables_type},
      {variables},
      options?: {options}<{result_type}, TError, TData>
    ) =>
    {hook}<{result_type}, TError, TData>(
      {key},
      (metaData) => fetcher<{result_type}, {variables_type}>({DATA_SOURCE_ARGS}, {document_variable_name}, {{...variables, ...(metaData.pageParam ?? {{}})}})(),
      options
    );"
        )
    }

    pub fn render_exposed_fetcher(
        &self,
        _ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        let HookTarget { hook_name, result_type, variables_type, document_variable_name, .. } = *target;
        let variables = key_generator::variables_signature(target.has_required_variables, variables_type);
        format!(
            "\nuse{hook_name}.fetcher = ({DATA_SOURCE_PARAM}, {variables}) => \
            fetcher<{result_type}, {variables_type}>({DATA_SOURCE_ARGS}, {document_variable_name}, variables);"
        )
    }

    pub fn is_react_hook(&self) -> bool {
        false
    }
}
