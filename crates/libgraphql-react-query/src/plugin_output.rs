use crate::config::GenerationConfig;
use crate::operation::Operation;
use crate::ReactQueryVisitor;

/// A generated TypeScript module, split the way codegen hosts assemble
/// files: `prepend` lines go at the very top of the file, ahead of `content`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PluginOutput {
    pub prepend: Vec<String>,
    pub content: String,
}
impl PluginOutput {
    pub fn to_source_string(&self) -> String {
        let mut source = self.prepend.join("\n");
        if !source.is_empty() {
            source.push('\n');
        }
        source.push_str(&self.content);
        source.push('\n');
        source
    }
}

/// Generate a complete module for `operations`: one document constant per
/// operation followed by its hooks, with imports and the shared fetcher
/// implementation prepended.
pub fn render_plugin_output(
    config: GenerationConfig,
    operations: &[Operation],
    base_imports: Vec<String>,
) -> PluginOutput {
    let mut visitor = ReactQueryVisitor::new(config);
    let mut definitions = vec![];
    for operation in operations {
        definitions.push(document_constant(operation));
        if let Some(hooks) = visitor.build_operation(operation) {
            definitions.push(hooks);
        }
    }
    log::debug!(
        "Generated hooks for {} of {} operations.",
        operations.len() - visitor.warnings().len(),
        operations.len(),
    );

    let fetcher_implementation =
        if visitor.has_operations() {
            visitor.fetcher_implementation()
        } else {
            None
        };
    let mut prepend = visitor.into_imports(base_imports);
    prepend.extend(fetcher_implementation);

    PluginOutput {
        prepend,
        content: definitions.join("\n"),
    }
}

/// `export const <Name>Document = `<document>`;`
fn document_constant(operation: &Operation) -> String {
    let document = operation.document()
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${");
    format!(
        "export const {} = `\n    {}\n    `;",
        operation.document_variable_name(),
        document.replace('\n', "\n    "),
    )
}
