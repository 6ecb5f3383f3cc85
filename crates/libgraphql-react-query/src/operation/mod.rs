mod document_load_error;
mod executable_document_set;
#[allow(clippy::module_inception)]
mod operation;
mod operation_kind;

pub use document_load_error::DocumentLoadError;
pub use executable_document_set::ExecutableDocumentSet;
pub use operation::Operation;
pub use operation_kind::OperationKind;
