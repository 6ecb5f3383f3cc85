/// A custom fetcher reference as written in the `fetcher` option.
///
/// `path#identifier` (optionally `path#identifier as Alias`) names an export
/// of another module, and `path#default as Alias` names a module's default
/// export. Anything without a `#` refers to a function already in scope of
/// the generated module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParsedMapper {
    External {
        source: String,
        identifier: String,
        local_name: String,
        is_default: bool,
    },
    Internal {
        identifier: String,
    },
}
impl ParsedMapper {
    /// Local name used when a default export is imported without an alias.
    pub const DEFAULT_IMPORT_NAME: &'static str = "fetcher";

    pub fn parse(raw: &str) -> Self {
        let Some((source, export)) = raw.split_once('#') else {
            return Self::Internal {
                identifier: raw.trim().to_string(),
            };
        };

        let (identifier, alias) = match export.split_once(" as ") {
            Some((identifier, alias)) => (identifier.trim(), Some(alias.trim())),
            None => (export.trim(), None),
        };
        let is_default = identifier == "default";
        let local_name = match (alias, is_default) {
            (Some(alias), _) => alias,
            (None, true) => Self::DEFAULT_IMPORT_NAME,
            (None, false) => identifier,
        };

        Self::External {
            source: source.trim().to_string(),
            identifier: identifier.to_string(),
            local_name: local_name.to_string(),
            is_default,
        }
    }

    /// The name generated code uses to call the fetcher.
    pub fn local_name(&self) -> &str {
        match self {
            Self::External { local_name, .. } => local_name.as_str(),
            Self::Internal { identifier } => identifier.as_str(),
        }
    }

    /// The `import` statement bringing an external fetcher into scope.
    pub fn import_statement(&self) -> Option<String> {
        let Self::External { source, identifier, local_name, is_default } = self else {
            return None;
        };

        Some(if *is_default {
            format!("import {local_name} from '{source}';")
        } else if identifier == local_name {
            format!("import {{ {identifier} }} from '{source}';")
        } else {
            format!("import {{ {identifier} as {local_name} }} from '{source}';")
        })
    }
}
