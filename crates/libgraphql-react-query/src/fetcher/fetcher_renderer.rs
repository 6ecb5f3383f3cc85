use crate::fetcher::HookTarget;
use crate::fetcher::RenderContext;

/// Renders the TypeScript for one request-execution strategy.
///
/// Every `render_*_hook` method registers the react-query identifiers it
/// references into [`RenderContext::registry`] before returning.
pub trait FetcherRenderer {
    /// The request function shared by every generated hook, or `None` when
    /// the strategy calls a function defined in the consumer's own module.
    fn render_base_request_function(&self) -> Option<String>;

    fn render_query_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String;

    /// Mutation variables are supplied when the mutation is invoked, so they
    /// are never part of the hook's own signature.
    fn render_mutation_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String;

    fn render_infinite_query_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String;

    /// `use<Hook>.fetcher = (...) => <request thunk>`, letting callers run an
    /// operation outside of react-query.
    fn render_exposed_fetcher(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String;

    /// Whether the strategy's fetcher is itself a React hook. No plain request
    /// thunk exists to expose in that case, so exposed fetchers are skipped.
    fn is_react_hook(&self) -> bool {
        false
    }
}
