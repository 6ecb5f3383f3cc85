use crate::config::FetcherConfig;
use crate::config::GenerationConfigError;
use crate::config::NamingConvention;

/// All options recognized by the react-query generator.
///
/// A `GenerationConfig` is fixed for an entire generation run. Keys are
/// camelCase in JSON and unknown keys are ignored, so a config shared with
/// other codegen plugins can be passed through unchanged.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(deserialize_with = "FetcherConfig::deserialize_or_default")]
    pub fetcher: FetcherConfig,
    pub error_type: String,
    pub expose_document: bool,
    pub expose_query_keys: bool,
    pub expose_mutation_keys: bool,
    pub expose_fetcher: bool,
    pub add_infinite_query: bool,
    pub legacy_mode: bool,
    pub omit_operation_suffix: bool,
    pub dedupe_operation_suffix: bool,
    pub use_type_imports: bool,
    pub import_operation_types_from: Option<String>,
    pub naming_convention: NamingConvention,
    pub transform_underscore: bool,
}
impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            fetcher: FetcherConfig::default(),
            error_type: "unknown".to_string(),
            expose_document: false,
            expose_query_keys: false,
            expose_mutation_keys: false,
            expose_fetcher: false,
            add_infinite_query: false,
            legacy_mode: false,
            omit_operation_suffix: false,
            dedupe_operation_suffix: false,
            use_type_imports: false,
            import_operation_types_from: None,
            naming_convention: NamingConvention::default(),
            transform_underscore: false,
        }
    }
}
impl GenerationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, GenerationConfigError> {
        Self::validate(serde_json::from_str(json)?)
    }

    pub fn from_json_value(
        value: serde_json::Value,
    ) -> Result<Self, GenerationConfigError> {
        Self::validate(serde_json::from_value(value)?)
    }

    /// The `<Namespace>.` prefix prepended to result and variables type names
    /// when `importOperationTypesFrom` is set.
    pub fn external_import_prefix(&self) -> String {
        match self.import_operation_types_from.as_deref() {
            Some(namespace) if !namespace.is_empty() => format!("{namespace}."),
            _ => String::new(),
        }
    }

    fn validate(config: Self) -> Result<Self, GenerationConfigError> {
        if let FetcherConfig::CustomMapper(mapper) = &config.fetcher
            && mapper.func.trim().is_empty() {
            return Err(GenerationConfigError::EmptyCustomMapper);
        }
        Ok(config)
    }
}
