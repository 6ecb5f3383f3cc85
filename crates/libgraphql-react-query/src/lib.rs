//! Generates typed [react-query](https://tanstack.com/query) hooks from
//! GraphQL operations.
//!
//! Each query or mutation becomes a `use<Operation>` hook whose request is
//! executed by one of four fetcher strategies chosen from
//! [`GenerationConfig::fetcher`](config::GenerationConfig). Generation never
//! performs I/O: the output is TypeScript source text for the caller to write
//! wherever it likes.
//!
//! ```ignore
//! let config = GenerationConfig::from_json_str(r#"{ "fetcher": "graphql-request" }"#)?;
//! let mut docs = ExecutableDocumentSet::new();
//! docs.add_from_str("query GetUser($id: ID!) { user(id: $id) { id } }", None)?;
//! let operations = docs.build_operations(&config)?;
//! let output = render_plugin_output(config, &operations, vec![]);
//! println!("{}", output.to_source_string());
//! ```

pub mod ast;
pub mod config;
pub mod fetcher;
mod identifier_registry;
pub mod key_generator;
mod method_name_map;
mod naming;
pub mod operation;
mod plugin_output;
mod react_query_visitor;

pub use identifier_registry::IdentifierRegistry;
pub use method_name_map::HookMethod;
pub use method_name_map::LibraryFlavor;
pub use method_name_map::MethodNameMap;
pub use naming::document_variable_name;
pub use naming::operation_display_name;
pub use naming::operation_suffix;
pub use plugin_output::render_plugin_output;
pub use plugin_output::PluginOutput;
pub use react_query_visitor::GenerationWarning;
pub use react_query_visitor::ReactQueryVisitor;

#[cfg(test)]
mod tests;
