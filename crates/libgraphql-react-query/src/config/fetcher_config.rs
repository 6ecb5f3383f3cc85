use serde::Deserialize;

/// The raw `fetcher` option as written in the codegen config.
///
/// Interpreting this value into one of the four fetcher strategies happens
/// once per run in
/// [`FetchStrategy::from_config`](crate::fetcher::FetchStrategy::from_config).
/// Variants are tried in declaration order when deserializing, so an object
/// carrying an `endpoint` field is always a [`FetcherConfig::StaticEndpoint`]
/// even if it also names a `func`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum FetcherConfig {
    /// Either one of the builtin markers (`"fetch"`, `"graphql-request"`) or
    /// a reference to a custom fetcher function (e.g. `"./fetcher#useFetch"`).
    Named(String),
    StaticEndpoint(StaticEndpointConfig),
    CustomMapper(CustomMapperConfig),
}
impl Default for FetcherConfig {
    fn default() -> Self {
        Self::Named(Self::FETCH_MARKER.to_string())
    }
}
impl FetcherConfig {
    pub const FETCH_MARKER: &'static str = "fetch";
    pub const GRAPHQL_REQUEST_MARKER: &'static str = "graphql-request";

    /// Deserializes an explicit `null` as [`FetcherConfig::default()`].
    pub(crate) fn deserialize_or_default<'de, D>(
        deserializer: D,
    ) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Option::<Self>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticEndpointConfig {
    /// Either an absolute URL or a TypeScript expression evaluating to one
    /// (e.g. `process.env.ENDPOINT`).
    pub endpoint: String,

    /// Extra `RequestInit` fields spread into every request. A string is
    /// spliced in as a TypeScript expression; anything else is serialized as
    /// JSON.
    #[serde(default)]
    pub fetch_params: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMapperConfig {
    pub func: String,

    /// Set when `func` is itself a React hook returning the request function
    /// rather than a plain `(query, variables) => () => Promise` fetcher.
    #[serde(default)]
    pub is_react_hook: bool,
}
