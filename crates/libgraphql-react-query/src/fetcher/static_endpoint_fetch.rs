use crate::config::StaticEndpointConfig;
use crate::fetcher::FETCH_RESPONSE_HANDLING;
use crate::fetcher::FetcherRenderer;
use crate::fetcher::HookTarget;
use crate::fetcher::RenderContext;
use crate::key_generator;
use inherent::inherent;

/// Requests through the builtin `fetch` against an endpoint fixed at
/// generation time, so generated hooks take no `dataSource` argument.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticEndpointFetch {
    config: StaticEndpointConfig,
}
impl StaticEndpointFetch {
    pub fn new(config: StaticEndpointConfig) -> Self {
        Self { config }
    }

    /// The endpoint as a TypeScript expression.
    ///
    /// Absolute URLs become string literals. Anything else is assumed to be
    /// an expression in the consumer's module (e.g. `process.env.ENDPOINT`)
    /// and is emitted as-is with an `as string` cast.
    pub fn endpoint_expression(&self) -> String {
        let endpoint = self.config.endpoint.as_str();
        match url::Url::parse(endpoint) {
            Ok(_) => quote_string_literal(endpoint),
            Err(err) => {
                log::trace!(
                    "Emitting fetcher endpoint `{endpoint}` as an expression \
                    since it is not an absolute URL ({err})."
                );
                format!("{endpoint} as string")
            },
        }
    }

    /// The `RequestInit` fields placed ahead of the request body. Empty,
    /// `null` and `false` fetch params add nothing.
    fn request_init_fields(&self) -> String {
        use serde_json::Value;
        let fetch_params = match &self.config.fetch_params {
            None | Some(Value::Null | Value::Bool(false)) => String::new(),
            Some(Value::String(expr)) if expr.trim().is_empty() => String::new(),
            Some(Value::String(expr)) => format!("\n    ...({expr}),"),
            Some(value) => format!("\n    ...({value}),"),
        };
        format!("    method: \"POST\",{fetch_params}")
    }
}

#[inherent]
impl FetcherRenderer for StaticEndpointFetch {
    pub fn render_base_request_function(&self) -> Option<String> {
        let endpoint = self.endpoint_expression();
        let request_init_fields = self.request_init_fields();
        Some(format!(
            "
function fetcher<TData, TVariables>(query: string, variables?: TVariables) {{
  return async (): Promise<TData> => {{
    const res = await fetch({endpoint}, {{
{request_init_fields}
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
      {variables},
      options?: {options}<{result_type}, TError, TData>
    ) =>
    {hook}<{result_type}, TError, TData>(
      {key},
      fetcher<{result_type}, {variables_type}>({document_variable_name}, variables),
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
    >(options?: {options}<{result_type}, TError, {variables_type}, TContext>) =>
    {hook}<{result_type}, TError, {variables_type}, TContext>(
      {key},
      (variables?: {variables_type}) => fetcher<{result_type}, {variables_type}>({document_variable_name}, variables)(),
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
      _pageParamKey: keyof {variables_type},
      {variables},
      options?: {options}<{result_type}, TError, TData>
    ) =>
    {hook}<{result_type}, TError, TData>(
      {key},
      (metaData) => fetcher<{result_type}, {variables_type}>({document_variable_name}, {{...variables, ...(metaData.pageParam ?? {{}})}})(),
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
            "\nuse{hook_name}.fetcher = ({variables}) => \
            fetcher<{result_type}, {variables_type}>({document_variable_name}, variables);"
        )
    }

    pub fn is_react_hook(&self) -> bool {
        false
    }
}

fn quote_string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
