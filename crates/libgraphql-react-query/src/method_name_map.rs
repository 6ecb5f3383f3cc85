use crate::IdentifierRegistry;

/// The react-query package generation targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LibraryFlavor {
    /// `@tanstack/react-query` (v4+).
    Current,

    /// `react-query` (v3).
    Legacy,
}
impl LibraryFlavor {
    pub fn from_legacy_mode(legacy_mode: bool) -> Self {
        if legacy_mode {
            Self::Legacy
        } else {
            Self::Current
        }
    }

    pub fn module_name(&self) -> &'static str {
        match self {
            Self::Current => "@tanstack/react-query",
            Self::Legacy => "react-query",
        }
    }
}

/// A react-query hook paired with the type of its `options` argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HookMethod {
    pub hook: &'static str,
    pub options: &'static str,
}
impl HookMethod {
    /// Record both of this method's identifiers as used.
    pub fn register(&self, registry: &mut IdentifierRegistry) {
        registry.add_hook(self.hook);
        registry.add_options(self.options);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MethodNameMap {
    pub infinite_query: HookMethod,
    pub mutation: HookMethod,
    pub query: HookMethod,
}
impl MethodNameMap {
    pub fn for_flavor(flavor: LibraryFlavor) -> Self {
        match flavor {
            // Both majors export identically-named hooks and option types;
            // only the module they're imported from differs.
            LibraryFlavor::Current | LibraryFlavor::Legacy => Self {
                infinite_query: HookMethod {
                    hook: "useInfiniteQuery",
                    options: "UseInfiniteQueryOptions",
                },
                mutation: HookMethod {
                    hook: "useMutation",
                    options: "UseMutationOptions",
                },
                query: HookMethod {
                    hook: "useQuery",
                    options: "UseQueryOptions",
                },
            },
        }
    }
}
