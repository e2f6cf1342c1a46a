/// How the compiler treats path elements it does not interpret
/// (recursive descent, wildcards, indexes, slices, script expressions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedElementPolicy {
    /// Fail compilation with `CompileError::UnsupportedElement`.
    #[default]
    Reject,
    /// Skip the element and log a warning. The resulting accessor navigates as if
    /// the element were absent.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompileOptions {
    /// Rewrites the access chain so that a `null` intermediate value yields the
    /// default value of the result type instead of an `AccessError`.
    ///
    /// Defaults to `false`.
    pub null_safety: bool,
    /// Defaults to [`UnsupportedElementPolicy::Reject`].
    pub unsupported_elements: UnsupportedElementPolicy,
}

impl CompileOptions {
    pub fn null_safe() -> Self {
        Self {
            null_safety: true,
            ..Default::default()
        }
    }

    pub fn with_null_safety(mut self, null_safety: bool) -> Self {
        self.null_safety = null_safety;
        self
    }

    pub fn with_unsupported_elements(mut self, policy: UnsupportedElementPolicy) -> Self {
        self.unsupported_elements = policy;
        self
    }
}
