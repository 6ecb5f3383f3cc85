use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_react_query::config::GenerationConfig;
use libgraphql_react_query::operation::ExecutableDocumentSet;
use libgraphql_react_query::operation::OperationKind;
use libgraphql_react_query::render_plugin_output;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CodegenCmd {
    #[arg(
        help="Path to a JSON file holding the generator options \
             (`fetcher`, `exposeQueryKeys`, `legacyMode`, ...). Defaults are \
             used when omitted.",
        long,
        short='c',
    )]
    pub(crate) config: Option<PathBuf>,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="Write the generated TypeScript module to this path instead of \
             stdout.",
        long,
        short='o',
    )]
    pub(crate) output: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL operation documents.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CodegenCmd {
    async fn load_config(&self) -> anyhow::Result<GenerationConfig> {
        let Some(config_path) = &self.config else {
            log::debug!("No --config given; using default generator options.");
            return Ok(GenerationConfig::default());
        };

        let json = tokio::fs::read_to_string(config_path).await
            .with_context(|| format!("Failed to read config file {config_path:#?}"))?;
        GenerationConfig::from_json_str(&json)
            .with_context(|| format!("Invalid config file {config_path:#?}"))
    }

    /// Find all GraphQL files recursively located at or under each path passed
    /// as an arg.
    fn find_graphql_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan files at/under {path:#?}"
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let matches_ext = entry_path.extension()
                    .map(|ext| ext.to_string_lossy())
                    .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()));
                if matches_ext {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        // A lone file argument is loaded even if its extension doesn't match
        // any of the --graphql-file-exts.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding to load {only_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.join(", "),
            );
            file_paths.push(only_path.to_owned());
        }

        Ok(file_paths)
    }

    async fn generate(&self) -> anyhow::Result<CodegenSummary> {
        let config = self.load_config().await?;
        let file_paths = self.find_graphql_files()?;
        log::debug!("Found {} GraphQL files to load.", file_paths.len());

        let mut docs = ExecutableDocumentSet::new();
        let mut load_errors = vec![];
        for file_path in &file_paths {
            let content = tokio::fs::read_to_string(file_path).await
                .with_context(|| format!("Failed to read {file_path:#?}"))?;
            if let Err(errors) = docs.add_from_str(content, Some(file_path.as_path())) {
                load_errors.extend(errors);
            }
        }
        if !load_errors.is_empty() {
            anyhow::bail!(
                "Failed to load GraphQL documents:\n{}",
                format_errors(&load_errors),
            );
        }

        let operations = docs.build_operations(&config).map_err(|errors| {
            anyhow::anyhow!(
                "Failed to build GraphQL operations:\n{}",
                format_errors(&errors),
            )
        })?;
        let num_subscriptions = operations.iter()
            .filter(|op| op.kind() == OperationKind::Subscription)
            .count();

        let source = render_plugin_output(config, &operations, vec![])
            .to_source_string();

        Ok(CodegenSummary {
            num_files: file_paths.len(),
            num_hooks: operations.len() - num_subscriptions,
            num_subscriptions,
            source,
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for CodegenCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let summary = match self.generate().await {
            Ok(summary) => summary,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let Some(output_path) = &self.output else {
            return CommandResult::stdout(format_args!("{}", summary.source));
        };

        if let Err(err) = tokio::fs::write(output_path, &summary.source).await {
            return CommandResult::stderr(format_args!(
                "{} Failed to write {output_path:#?}: {err}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} Generated {output_path:#?}:\n",
                "  * Loaded {} files.\n",
                "  * Generated hooks for {} operations.\n",
                "  * Skipped {} subscriptions.",
            ),
            output_utils::GREEN_CHECK,
            summary.num_files,
            summary.num_hooks,
            summary.num_subscriptions,
            output_path = output_path,
        ))
    }
}

#[derive(Debug)]
struct CodegenSummary {
    num_files: usize,
    num_hooks: usize,
    num_subscriptions: usize,
    source: String,
}

fn format_errors(errors: &[impl std::fmt::Display]) -> String {
    errors.iter()
        .map(|err| format!("  * {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}
