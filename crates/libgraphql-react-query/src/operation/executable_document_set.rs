use crate::ast;
use crate::config::GenerationConfig;
use crate::naming;
use crate::operation::DocumentLoadError;
use crate::operation::Operation;
use crate::operation::OperationKind;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Vec<DocumentLoadError>>;

const VARIABLES_TYPE_SUFFIX: &str = "Variables";

#[derive(Clone, Debug, PartialEq)]
struct LoadedOperation {
    def: ast::operation::OperationDefinition,
    file_path: Option<PathBuf>,
}

/// The operations and fragments of one or more GraphQL executable documents.
///
/// Fragments may be spread by operations in any document added to the set.
/// [`build_operations()`](ExecutableDocumentSet::build_operations) resolves
/// those spreads and produces an [`Operation`] per operation definition, in
/// the order the definitions were added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutableDocumentSet {
    fragments: IndexMap<String, ast::operation::FragmentDefinition>,
    operations: Vec<LoadedOperation>,
}
impl ExecutableDocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_from_ast(
        &mut self,
        document: ast::operation::Document,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let mut errors = vec![];
        for def in document.definitions {
            use ast::operation::Definition as Def;
            match def {
                Def::Fragment(frag_def) => {
                    if self.fragments.contains_key(&frag_def.name) {
                        errors.push(DocumentLoadError::DuplicateFragmentDefinition {
                            file_path: file_path.map(Path::to_path_buf),
                            fragment_name: frag_def.name.to_owned(),
                        });
                        continue;
                    }
                    log::trace!("Loaded fragment `{}`.", frag_def.name);
                    self.fragments.insert(frag_def.name.to_owned(), frag_def);
                },

                Def::Operation(op_def) => {
                    let (_, name, _, _) = operation_parts(&op_def);
                    if let Some(name) = name
                        && self.has_operation_named(name) {
                        errors.push(DocumentLoadError::DuplicateOperationName {
                            file_path: file_path.map(Path::to_path_buf),
                            operation_name: name.to_owned(),
                        });
                        continue;
                    }
                    self.operations.push(LoadedOperation {
                        def: op_def,
                        file_path: file_path.map(Path::to_path_buf),
                    });
                },
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn add_from_str(
        &mut self,
        content: impl AsRef<str>,
        file_path: Option<&Path>,
    ) -> Result<()> {
        let document = ast::operation::parse(content.as_ref()).map_err(|err| vec![
            DocumentLoadError::ParseError {
                file_path: file_path.map(Path::to_path_buf),
                message: err.to_string(),
            },
        ])?;
        self.add_from_ast(document, file_path)
    }

    /// Produce an [`Operation`] for every loaded operation definition.
    ///
    /// Type and document names follow the conventions of the
    /// `typescript-operations` plugin: `<Name><Kind>` for results,
    /// `<Name><Kind>Variables` for variables, and `<Name>Document` for the
    /// document constant.
    pub fn build_operations(
        &self,
        config: &GenerationConfig,
    ) -> Result<Vec<Operation>> {
        let mut errors = vec![];
        let mut operations = vec![];
        for loaded in &self.operations {
            let (kind, name, variables, selection_set) = operation_parts(&loaded.def);
            let declared_name = name.map(String::as_str).unwrap_or("");

            let mut used_fragments = IndexSet::new();
            self.resolve_fragment_spreads(
                selection_set,
                declared_name,
                &mut used_fragments,
                &mut errors,
            );

            let mut document = loaded.def.to_string().trim_end().to_string();
            for fragment_name in &used_fragments {
                if let Some(fragment) = self.fragments.get(*fragment_name) {
                    document.push('\n');
                    document.push_str(fragment.to_string().trim_end());
                }
            }

            let has_required_variables = variables.iter().any(|var| {
                matches!(var.var_type, ast::operation::Type::NonNullType(_))
                    && var.default_value.is_none()
            });
            let result_type = naming::operation_display_name(config, declared_name, kind);
            let variables_type = format!("{result_type}{VARIABLES_TYPE_SUFFIX}");

            log::trace!(
                "Built {kind} operation `{declared_name}`{}.",
                loaded.file_path.as_ref()
                    .map(|path| format!(" from {}", path.display()))
                    .unwrap_or_default(),
            );
            operations.push(Operation {
                document,
                document_variable_name: naming::document_variable_name(config, declared_name),
                has_required_variables,
                kind,
                name: name.cloned(),
                result_type,
                variables_type,
            });
        }

        if errors.is_empty() {
            Ok(operations)
        } else {
            Err(errors)
        }
    }

    pub fn fragment_names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    pub fn num_operations(&self) -> usize {
        self.operations.len()
    }

    fn has_operation_named(&self, name: &str) -> bool {
        self.operations.iter().any(|loaded| {
            operation_parts(&loaded.def).1.is_some_and(|existing| existing == name)
        })
    }

    /// Record every fragment reachable from `selection_set` into `used`, in
    /// first-use order.
    fn resolve_fragment_spreads<'a>(
        &'a self,
        selection_set: &'a ast::operation::SelectionSet,
        operation_name: &str,
        used: &mut IndexSet<&'a str>,
        errors: &mut Vec<DocumentLoadError>,
    ) {
        let mut spreads = vec![];
        collect_fragment_spreads(selection_set, &mut spreads);
        for fragment_name in spreads {
            if used.contains(fragment_name) {
                continue;
            }

            match self.fragments.get(fragment_name) {
                Some(fragment) => {
                    used.insert(fragment_name);
                    self.resolve_fragment_spreads(
                        &fragment.selection_set,
                        operation_name,
                        used,
                        errors,
                    );
                },

                None => {
                    let error = DocumentLoadError::UndefinedFragment {
                        fragment_name: fragment_name.to_string(),
                        operation_name: operation_name.to_string(),
                    };
                    if !errors.contains(&error) {
                        errors.push(error);
                    }
                },
            }
        }
    }
}

fn collect_fragment_spreads<'a>(
    selection_set: &'a ast::operation::SelectionSet,
    spreads: &mut Vec<&'a str>,
) {
    for selection in &selection_set.items {
        use ast::operation::Selection;
        match selection {
            Selection::Field(field) =>
                collect_fragment_spreads(&field.selection_set, spreads),
            Selection::FragmentSpread(spread) =>
                spreads.push(spread.fragment_name.as_str()),
            Selection::InlineFragment(inline) =>
                collect_fragment_spreads(&inline.selection_set, spreads),
        }
    }
}

fn operation_parts(
    def: &ast::operation::OperationDefinition,
) -> (
    OperationKind,
    Option<&String>,
    &[ast::operation::VariableDefinition],
    &ast::operation::SelectionSet,
) {
    use ast::operation::OperationDefinition as OpDef;
    match def {
        OpDef::SelectionSet(selection_set) =>
            (OperationKind::Query, None, &[], selection_set),
        OpDef::Query(query) => (
            OperationKind::Query,
            query.name.as_ref(),
            query.variable_definitions.as_slice(),
            &query.selection_set,
        ),
        OpDef::Mutation(mutation) => (
            OperationKind::Mutation,
            mutation.name.as_ref(),
            mutation.variable_definitions.as_slice(),
            &mutation.selection_set,
        ),
        OpDef::Subscription(subscription) => (
            OperationKind::Subscription,
            subscription.name.as_ref(),
            subscription.variable_definitions.as_slice(),
            &subscription.selection_set,
        ),
    }
}
