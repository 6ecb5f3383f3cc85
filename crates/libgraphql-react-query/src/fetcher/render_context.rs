use crate::config::GenerationConfig;
use crate::IdentifierRegistry;
use crate::MethodNameMap;

/// Everything a fetcher may consult while rendering a hook.
///
/// The configuration and method names are read-only. The registry is the only
/// thing a fetcher may write to, and only by adding identifiers.
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub config: &'a GenerationConfig,
    pub method_map: &'a MethodNameMap,
    pub registry: &'a mut IdentifierRegistry,
}
impl RenderContext<'_> {
    pub fn error_type(&self) -> &str {
        self.config.error_type.as_str()
    }

    /// `import` or `import type`, per `useTypeImports`.
    pub fn type_import_keyword(&self) -> &'static str {
        if self.config.use_type_imports {
            "import type"
        } else {
            "import"
        }
    }
}
