/// The per-operation names a [`FetcherRenderer`](crate::fetcher::FetcherRenderer)
/// renders a hook for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HookTarget<'a> {
    /// The operation's declared name. This is the literal used in cache keys.
    pub operation_name: &'a str,

    /// The converted and suffixed name hooks are named after (i.e. the
    /// `GetUserQuery` in `useGetUserQuery`).
    pub hook_name: &'a str,

    pub document_variable_name: &'a str,
    pub result_type: &'a str,
    pub variables_type: &'a str,
    pub has_required_variables: bool,
}
