mod fetcher_config;
mod generation_config;
mod generation_config_error;
mod naming_convention;

pub use fetcher_config::CustomMapperConfig;
pub use fetcher_config::FetcherConfig;
pub use fetcher_config::StaticEndpointConfig;
pub use generation_config::GenerationConfig;
pub use generation_config_error::GenerationConfigError;
pub use naming_convention::NamingConvention;
