use indexmap::IndexSet;

/// Accumulates the identifiers referenced by generated hooks so that the
/// final import list names each of them exactly once.
///
/// A registry only ever grows: every `add_*` method is idempotent and nothing
/// is removed during a generation run. Insertion order is kept so that the
/// rendered import statements are stable across runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentifierRegistry {
    hooks: IndexSet<String>,
    imports: IndexSet<String>,
    options: IndexSet<String>,
}
impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hook(&mut self, identifier: &str) {
        if !self.hooks.contains(identifier) {
            self.hooks.insert(identifier.to_string());
        }
    }

    /// Add a complete import statement needed by the active fetcher (e.g. the
    /// `GraphQLClient` import used by the `graphql-request` fetcher).
    pub fn add_import(&mut self, statement: impl AsRef<str>) {
        let statement = statement.as_ref();
        if !self.imports.contains(statement) {
            self.imports.insert(statement.to_string());
        }
    }

    pub fn add_options(&mut self, identifier: &str) {
        if !self.options.contains(identifier) {
            self.options.insert(identifier.to_string());
        }
    }

    pub fn hooks(&self) -> impl Iterator<Item = &str> {
        self.hooks.iter().map(String::as_str)
    }

    pub fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty() && self.imports.is_empty() && self.options.is_empty()
    }

    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }
}
