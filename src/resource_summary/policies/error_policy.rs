use std::fmt;

/// What happens when a document cannot be summarized
///
/// - `Strict`: the first quantity or shape error aborts the whole run (default)
/// - `Lenient`: a container with a bad quantity is left out of its
///   workload's totals and a malformed document is skipped; both are
///   reported as warnings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    #[default]
    Strict,
    Lenient,
}

impl ErrorPolicy {
    pub fn from_lenient(lenient: bool) -> Self {
        if lenient {
            ErrorPolicy::Lenient
        } else {
            ErrorPolicy::Strict
        }
    }

    pub fn is_lenient(self) -> bool {
        matches!(self, ErrorPolicy::Lenient)
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Strict => write!(f, "strict"),
            ErrorPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Strict);
        assert!(!ErrorPolicy::default().is_lenient());
    }

    #[test]
    fn test_from_lenient() {
        assert_eq!(ErrorPolicy::from_lenient(true), ErrorPolicy::Lenient);
        assert_eq!(ErrorPolicy::from_lenient(false), ErrorPolicy::Strict);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorPolicy::Strict.to_string(), "strict");
        assert_eq!(ErrorPolicy::Lenient.to_string(), "lenient");
    }
}
