use crate::config::CustomMapperConfig;
use crate::config::FetcherConfig;
use crate::fetcher::CustomMapperFetch;
use crate::fetcher::DefaultFetch;
use crate::fetcher::FetcherRenderer;
use crate::fetcher::HookTarget;
use crate::fetcher::RenderContext;
use crate::fetcher::RequestClientFetch;
use crate::fetcher::StaticEndpointFetch;
use inherent::inherent;

/// The request-execution strategy selected for a generation run.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchStrategy {
    DefaultFetch(DefaultFetch),
    StaticEndpointFetch(StaticEndpointFetch),
    RequestClientFetch(RequestClientFetch),
    CustomMapperFetch(CustomMapperFetch),
}
impl FetchStrategy {
    /// Select a strategy from the `fetcher` option. The first match wins:
    ///
    /// 1. `"fetch"` (or an empty string) selects [`DefaultFetch`].
    /// 2. An object with an `endpoint` selects [`StaticEndpointFetch`].
    /// 3. `"graphql-request"` selects [`RequestClientFetch`].
    /// 4. Anything else is a reference to a custom fetcher function.
    pub fn from_config(fetcher: &FetcherConfig) -> Self {
        let strategy = match fetcher {
            FetcherConfig::Named(name)
                if name.is_empty() || name == FetcherConfig::FETCH_MARKER =>
                Self::DefaultFetch(DefaultFetch),

            FetcherConfig::StaticEndpoint(config) =>
                Self::StaticEndpointFetch(StaticEndpointFetch::new(config.to_owned())),

            FetcherConfig::Named(name)
                if name == FetcherConfig::GRAPHQL_REQUEST_MARKER =>
                Self::RequestClientFetch(RequestClientFetch),

            FetcherConfig::Named(func) =>
                Self::CustomMapperFetch(CustomMapperFetch::new(&CustomMapperConfig {
                    func: func.to_owned(),
                    is_react_hook: false,
                })),

            FetcherConfig::CustomMapper(config) =>
                Self::CustomMapperFetch(CustomMapperFetch::new(config)),
        };
        log::debug!("Selected the `{}` fetcher strategy.", strategy.name());
        strategy
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::DefaultFetch(_) => "fetch",
            Self::StaticEndpointFetch(_) => "static-endpoint fetch",
            Self::RequestClientFetch(_) => "graphql-request",
            Self::CustomMapperFetch(_) => "custom mapper",
        }
    }

    fn renderer(&self) -> &dyn FetcherRenderer {
        match self {
            Self::DefaultFetch(fetcher) => fetcher,
            Self::StaticEndpointFetch(fetcher) => fetcher,
            Self::RequestClientFetch(fetcher) => fetcher,
            Self::CustomMapperFetch(fetcher) => fetcher,
        }
    }
}

#[inherent]
impl FetcherRenderer for FetchStrategy {
    pub fn render_base_request_function(&self) -> Option<String> {
        self.renderer().render_base_request_function()
    }

    pub fn render_query_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        self.renderer().render_query_hook(ctx, target)
    }

    pub fn render_mutation_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        self.renderer().render_mutation_hook(ctx, target)
    }

    pub fn render_infinite_query_hook(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        self.renderer().render_infinite_query_hook(ctx, target)
    }

    pub fn render_exposed_fetcher(
        &self,
        ctx: &mut RenderContext<'_>,
        target: &HookTarget<'_>,
    ) -> String {
        self.renderer().render_exposed_fetcher(ctx, target)
    }

    pub fn is_react_hook(&self) -> bool {
        self.renderer().is_react_hook()
    }
}
