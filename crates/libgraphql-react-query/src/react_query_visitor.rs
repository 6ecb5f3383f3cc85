use crate::config::GenerationConfig;
use crate::fetcher::FetchStrategy;
use crate::fetcher::HookTarget;
use crate::fetcher::RenderContext;
use crate::key_generator;
use crate::naming;
use crate::operation::Operation;
use crate::operation::OperationKind;
use crate::IdentifierRegistry;
use crate::LibraryFlavor;
use crate::MethodNameMap;

/// A non-fatal problem encountered while generating hooks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GenerationWarning {
    UnsupportedSubscription {
        operation_name: String,
    },
}
impl std::fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedSubscription { operation_name } => write!(
                f,
                "react-query hooks can't be generated for GraphQL \
                subscriptions; ignoring `{operation_name}`.",
            ),
        }
    }
}

/// Generates react-query hooks for a sequence of operations.
///
/// Operations are passed one at a time to
/// [`build_operation()`](ReactQueryVisitor::build_operation), in input order.
/// Once every operation has been built, the visitor is consumed by
/// [`into_imports()`](ReactQueryVisitor::into_imports) to produce the import
/// list covering everything the generated hooks reference.
#[derive(Debug)]
pub struct ReactQueryVisitor {
    config: GenerationConfig,
    external_import_prefix: String,
    flavor: LibraryFlavor,
    fetcher: FetchStrategy,
    method_map: MethodNameMap,
    num_collected_operations: usize,
    registry: IdentifierRegistry,
    warnings: Vec<GenerationWarning>,
}
impl ReactQueryVisitor {
    pub fn new(config: GenerationConfig) -> Self {
        let flavor = LibraryFlavor::from_legacy_mode(config.legacy_mode);
        Self {
            external_import_prefix: config.external_import_prefix(),
            fetcher: FetchStrategy::from_config(&config.fetcher),
            flavor,
            method_map: MethodNameMap::for_flavor(flavor),
            num_collected_operations: 0,
            registry: IdentifierRegistry::new(),
            warnings: vec![],
            config,
        }
    }

    /// Generate the hook (and any configured extras) for a single operation.
    ///
    /// Returns `None` for subscriptions, which are skipped with a
    /// [`GenerationWarning`].
    pub fn build_operation(&mut self, operation: &Operation) -> Option<String> {
        let operation_name = operation.name();
        let hook_name = naming::operation_display_name(
            &self.config,
            operation_name,
            operation.kind(),
        );
        let result_type = format!(
            "{}{}",
            self.external_import_prefix,
            operation.result_type(),
        );
        let variables_type = format!(
            "{}{}",
            self.external_import_prefix,
            operation.variables_type(),
        );
        let target = HookTarget {
            operation_name,
            hook_name: hook_name.as_str(),
            document_variable_name: operation.document_variable_name(),
            result_type: result_type.as_str(),
            variables_type: variables_type.as_str(),
            has_required_variables: operation.has_required_variables(),
        };

        let config = &self.config;
        let fetcher = &self.fetcher;
        let mut ctx = RenderContext {
            config,
            method_map: &self.method_map,
            registry: &mut self.registry,
        };
        let expose_fetcher = config.expose_fetcher && !fetcher.is_react_hook();

        let output = match operation.kind() {
            OperationKind::Query => {
                log::trace!("Generating query hook `use{hook_name}`.");
                let mut output = fetcher.render_query_hook(&mut ctx, &target);

                if config.expose_document {
                    output += &format!(
                        "\nuse{hook_name}.document = {};\n",
                        target.document_variable_name,
                    );
                }

                if config.expose_query_keys {
                    output += &key_generator::query_key_maker(
                        operation_name,
                        &hook_name,
                        &variables_type,
                        target.has_required_variables,
                    );
                }

                if config.add_infinite_query {
                    output += &format!(
                        "\n{}\n",
                        fetcher.render_infinite_query_hook(&mut ctx, &target),
                    );
                    if config.expose_query_keys {
                        output += &key_generator::infinite_query_key_maker(
                            operation_name,
                            &hook_name,
                            &variables_type,
                            target.has_required_variables,
                        );
                    }
                }

                if expose_fetcher {
                    output += &fetcher.render_exposed_fetcher(&mut ctx, &target);
                }
                output
            },

            OperationKind::Mutation => {
                log::trace!("Generating mutation hook `use{hook_name}`.");
                let mut output = fetcher.render_mutation_hook(&mut ctx, &target);

                if config.expose_mutation_keys {
                    output += &key_generator::mutation_key_maker(
                        operation_name,
                        &hook_name,
                    );
                }

                if expose_fetcher {
                    output += &fetcher.render_exposed_fetcher(&mut ctx, &target);
                }
                output
            },

            OperationKind::Subscription => {
                let warning = GenerationWarning::UnsupportedSubscription {
                    operation_name: operation_name.to_string(),
                };
                log::warn!("{warning}");
                self.warnings.push(warning);
                return None;
            },
        };

        self.num_collected_operations += 1;
        Some(output)
    }

    /// The request function shared by every generated hook.
    pub fn fetcher_implementation(&self) -> Option<String> {
        self.fetcher.render_base_request_function()
    }

    /// Whether at least one hook has been generated so far.
    pub fn has_operations(&self) -> bool {
        self.num_collected_operations > 0
    }

    /// Finish the run and produce its import statements: `base_imports`
    /// first, then any imports the fetcher needs, then a single import of
    /// every react-query hook and options type the generated hooks reference.
    pub fn into_imports(self, base_imports: Vec<String>) -> Vec<String> {
        let mut imports = base_imports;
        imports.extend(self.registry.imports().map(str::to_string));

        if !self.has_operations() {
            return imports;
        }

        let type_prefix = if self.config.use_type_imports { "type " } else { "" };
        let identifiers =
            self.registry.hooks()
                .map(str::to_string)
                .chain(self.registry.options().map(|ident| format!("{type_prefix}{ident}")))
                .collect::<Vec<_>>()
                .join(", ");
        imports.push(format!(
            "import {{ {identifiers} }} from '{}';",
            self.flavor.module_name(),
        ));
        imports
    }

    pub fn registry(&self) -> &IdentifierRegistry {
        &self.registry
    }

    pub fn warnings(&self) -> &[GenerationWarning] {
        self.warnings.as_slice()
    }
}
