use heck::ToUpperCamelCase;

/// How operation names are converted into TypeScript identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize)]
pub enum NamingConvention {
    #[default]
    #[serde(rename = "change-case-all#pascalCase", alias = "pascalCase")]
    PascalCase,

    #[serde(rename = "keep")]
    Keep,
}
impl NamingConvention {
    /// Convert `name` according to this convention.
    ///
    /// Underscores separate segments that are converted independently and
    /// then re-joined with `_`, unless `transform_underscore` is set (in which
    /// case the underscores are dropped).
    pub fn convert(&self, name: &str, transform_underscore: bool) -> String {
        match self {
            Self::Keep => name.to_string(),
            Self::PascalCase => {
                let separator = if transform_underscore { "" } else { "_" };
                name.split('_')
                    .map(|segment| segment.to_upper_camel_case())
                    .collect::<Vec<_>>()
                    .join(separator)
            },
        }
    }
}
