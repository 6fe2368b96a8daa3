//! Tri-state backend replies.
//!
//! A backend query either finds something, finds nothing applicable at the requested
//! position, or fails. Hosts only care whether there is something to show, but keeping the
//! three cases apart lets callers log or test malfunctions separately from empty answers.

/// The outcome of one backend query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendReply<T> {
    /// The backend produced a value.
    Found(T),
    /// Nothing applies at this position (e.g. hovering whitespace).
    NotApplicable,
    /// The backend malfunctioned while answering.
    Failed(String),
}

impl<T> BackendReply<T> {
    /// Build a reply from an optional value (`None` maps to [`BackendReply::NotApplicable`]).
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Found(value),
            None => Self::NotApplicable,
        }
    }

    /// Build a failed reply.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    /// Returns `true` for [`BackendReply::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns `true` for [`BackendReply::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The failure reason, if any.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Transform the found value, keeping the other states.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BackendReply<U> {
        match self {
            Self::Found(value) => BackendReply::Found(f(value)),
            Self::NotApplicable => BackendReply::NotApplicable,
            Self::Failed(reason) => BackendReply::Failed(reason),
        }
    }

    /// Borrow the found value.
    pub fn as_ref(&self) -> BackendReply<&T> {
        match self {
            Self::Found(value) => BackendReply::Found(value),
            Self::NotApplicable => BackendReply::NotApplicable,
            Self::Failed(reason) => BackendReply::Failed(reason.clone()),
        }
    }

    /// Collapse to an `Option`: both "nothing applicable" and "failed" become `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotApplicable | Self::Failed(_) => None,
        }
    }
}

impl<T> From<Option<T>> for BackendReply<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option_and_back() {
        assert_eq!(BackendReply::from(Some(3)), BackendReply::Found(3));
        assert_eq!(BackendReply::<i32>::from(None), BackendReply::NotApplicable);
        assert_eq!(BackendReply::Found(3).into_option(), Some(3));
        assert_eq!(BackendReply::<i32>::NotApplicable.into_option(), None);
    }

    #[test]
    fn test_failed_is_distinct_from_not_applicable() {
        let failed = BackendReply::<i32>::failed("analysis panicked");
        assert!(failed.is_failed());
        assert_eq!(failed.failure(), Some("analysis panicked"));
        assert!(!BackendReply::<i32>::NotApplicable.is_failed());
        assert_eq!(failed.map(|v| v * 2).into_option(), None);
    }
}
