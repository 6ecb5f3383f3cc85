use crate::operation::OperationKind;

/// Everything the generator needs to know about a single GraphQL operation.
///
/// Type names are expected to already be resolved by whatever produced the
/// operation's TypeScript types (see
/// [`ExecutableDocumentSet`](crate::operation::ExecutableDocumentSet) for the
/// default resolution).
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(crate) document: String,
    pub(crate) document_variable_name: String,
    pub(crate) has_required_variables: bool,
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) result_type: String,
    pub(crate) variables_type: String,
}
impl Operation {
    pub fn new(
        kind: OperationKind,
        name: Option<impl Into<String>>,
        document_variable_name: impl Into<String>,
        document: impl Into<String>,
        result_type: impl Into<String>,
        variables_type: impl Into<String>,
        has_required_variables: bool,
    ) -> Self {
        Self {
            document: document.into(),
            document_variable_name: document_variable_name.into(),
            has_required_variables,
            kind,
            name: name.map(Into::into),
            result_type: result_type.into(),
            variables_type: variables_type.into(),
        }
    }

    /// The serialized GraphQL document sent over the wire for this operation
    /// (including any fragments it spreads).
    pub fn document(&self) -> &str {
        self.document.as_str()
    }

    /// Name of the TypeScript constant holding [`Operation::document()`].
    pub fn document_variable_name(&self) -> &str {
        self.document_variable_name.as_str()
    }

    /// Whether at least one variable is non-null and lacks a default value.
    pub fn has_required_variables(&self) -> bool {
        self.has_required_variables
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The operation's declared name, or `""` for anonymous operations.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn result_type(&self) -> &str {
        self.result_type.as_str()
    }

    pub fn variables_type(&self) -> &str {
        self.variables_type.as_str()
    }
}
