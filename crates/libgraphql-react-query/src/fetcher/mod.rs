mod custom_mapper_fetch;
mod default_fetch;
mod fetch_strategy;
mod fetcher_renderer;
mod hook_target;
mod parsed_mapper;
mod render_context;
mod request_client_fetch;
mod static_endpoint_fetch;

pub use custom_mapper_fetch::CustomMapperFetch;
pub use default_fetch::DefaultFetch;
pub use fetch_strategy::FetchStrategy;
pub use fetcher_renderer::FetcherRenderer;
pub use hook_target::HookTarget;
pub use parsed_mapper::ParsedMapper;
pub use render_context::RenderContext;
pub use request_client_fetch::RequestClientFetch;
pub use static_endpoint_fetch::StaticEndpointFetch;

/// The body of the request function shared by both builtin-`fetch` fetchers,
/// from the response onwards.
pub(crate) const FETCH_RESPONSE_HANDLING: &str = "
    const json = await res.json();

    if (json.errors) {
      const { message } = json.errors[0];

      throw new Error(message);
    }

    return json.data;
  }
}";
