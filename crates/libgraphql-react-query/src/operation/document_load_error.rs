use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentLoadError {
    #[error("Failed to parse GraphQL document{}: {message}", fmt_file_path(.file_path))]
    ParseError {
        file_path: Option<PathBuf>,
        message: String,
    },

    #[error(
        "The fragment `{fragment_name}` is defined more than once{}",
        fmt_file_path(.file_path),
    )]
    DuplicateFragmentDefinition {
        file_path: Option<PathBuf>,
        fragment_name: String,
    },

    #[error(
        "The operation `{operation_name}` is defined more than once{}",
        fmt_file_path(.file_path),
    )]
    DuplicateOperationName {
        file_path: Option<PathBuf>,
        operation_name: String,
    },

    #[error(
        "The operation `{operation_name}` spreads the undefined fragment \
        `{fragment_name}`"
    )]
    UndefinedFragment {
        fragment_name: String,
        operation_name: String,
    },
}

fn fmt_file_path(file_path: &Option<PathBuf>) -> String {
    match file_path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}
