use crate::config::CustomMapperConfig;
use crate::fetcher::FetcherRenderer;
use crate::fetcher::HookTarget;
use crate::fetcher::ParsedMapper;
use crate::fetcher::RenderContext;
use crate::key_generator;
use inherent::inherent;

/// Calls a fetcher function supplied by the consumer.
///
/// A plain fetcher has the shape `(query, variables?, options?) => () =>
/// Promise<TData>`. When configured with `isReactHook`, the fetcher is instead
/// a React hook `(query) => (variables?) => Promise<TData>` that must be
/// called during render, so the hooks call it first and no exposed fetcher
/// can be generated.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomMapperFetch {
    is_react_hook: bool,
    mapper: ParsedMapper,
}
impl CustomMapperFetch {
    pub fn new(config: &CustomMapperConfig) -> Self {
        Self {
            is_react_hook: config.is_react_hook,
            mapper: ParsedMapper::parse(&config.func),
        }
    }

    pub fn mapper(&self) -> &ParsedMapper {
        &self.mapper
    }

    fn typed_fetcher(&self, target: &HookTarget<'_>) -> String {
        format!(
            "{}<{}, {}>",
            self.mapper.local_name(),
            target.result_type,
            target.variables_type,
        )
    }
}

#[inherent]
impl FetcherRenderer for CustomMapperFetch {
    /// The fetcher's `import` when it lives in another module. A fetcher
    /// already in scope needs nothing rendered.
    pub fn render_base_request_function(&self) -> Option<String> {
        self.mapper.import_statement()
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
        let typed_fetcher = self.typed_fetcher(target);
        let query_fn = if self.is_react_hook {
            format!("{typed_fetcher}({document_variable_name}).bind(null, variables)")
        } else {
            format!("{typed_fetcher}({document_variable_name}, variables)")
        };
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
      {query_fn},
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
        let typed_fetcher = self.typed_fetcher(target);
        let mutation_fn = if self.is_react_hook {
            format!("{typed_fetcher}({document_variable_name})")
        } else {
            format!("(variables?: {variables_type}) => {typed_fetcher}({document_variable_name}, variables)()")
        };
        let hook = method.hook;
        let options = method.options;
        format!(
            "export const use{hook_name} = <
      TError = {error_type},
      TContext = unknown
    >(options?: {options}<{result_type}, TError, {variables_type}, TContext>) =>
    {hook}<{result_type}, TError, {variables_type}, TContext>(
      {key},
      {mutation_fn},
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
        let typed_fetcher = self.typed_fetcher(target);
        let (hook_setup, page_fn) = if self.is_react_hook {
            (
                format!("const query = {typed_fetcher}({document_variable_name})"),
                "(metaData) => query({...variables, ...(metaData.pageParam ?? {})})".to_string(),
            )
        } else {
            (
                String::new(),
                format!(
                    "(metaData) => {typed_fetcher}({document_variable_name}, \
                    {{...variables, ...(metaData.pageParam ?? {{}})}})()"
                ),
            )
        };
        let hook = method.hook;
        let options = method.options;
        format!(
            "export const useInfinite{hook_name} = <
      TData = {result_type},
      TError = {error_type}
    >(
      pageParamKey: keyof {variables_type},
      {variables},
      options?: {options}<{result_type}, TError, TData>
    ) => {{
    {hook_setup}
    return {hook}<{result_type}, TError, TData>(
      {key},
      {page_fn},
      options
    )}};"
        )
    }

    /// Returns an empty string for react-hook fetchers, which can't be called
    /// outside of a component.
    pub fn render_exposed_fetcher(
        &self,
        _ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        if self.is_react_hook {
            return String::new();
        }

        let HookTarget { hook_name, variables_type, document_variable_name, .. } = *target;
        let variables = key_generator::variables_signature(target.has_required_variables, variables_type);
        let typed_fetcher = self.typed_fetcher(target);
        format!(
            "\nuse{hook_name}.fetcher = ({variables}, options?: RequestInit['headers']) => \
            {typed_fetcher}({document_variable_name}, variables, options);"
        )
    }

    pub fn is_react_hook(&self) -> bool {
        self.is_react_hook
    }
}
