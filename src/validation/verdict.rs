//! Validation outcomes

use thiserror::Error;

/// Why a field value was refused. The display text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("Not a valid address")]
    NotAnAddress,
    #[error("Not a number")]
    NotANumber,
    #[error("Too many decimals")]
    TooManyDecimals,
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value passed; holds the normalized form
    Accepted(String),
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// The normalized value, if accepted
    pub fn value(&self) -> Option<&str> {
        match self {
            Verdict::Accepted(value) => Some(value),
            Verdict::Rejected(_) => None,
        }
    }

    /// The rejection reason, if rejected
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Result<String, Rejection>> for Verdict {
    fn from(result: Result<String, Rejection>) -> Self {
        match result {
            Ok(value) => Verdict::Accepted(value),
            Err(reason) => Verdict::Rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(Rejection::NotAnAddress.to_string(), "Not a valid address");
        assert_eq!(Rejection::NotANumber.to_string(), "Not a number");
        assert_eq!(Rejection::TooManyDecimals.to_string(), "Too many decimals");
    }

    #[test]
    fn test_accepted_accessors() {
        let verdict = Verdict::Accepted("1.5".to_string());
        assert!(verdict.is_accepted());
        assert_eq!(verdict.value(), Some("1.5"));
        assert!(verdict.rejection().is_none());
    }

    #[test]
    fn test_rejected_accessors() {
        let verdict = Verdict::Rejected(Rejection::NotANumber);
        assert!(!verdict.is_accepted());
        assert!(verdict.value().is_none());
        assert_eq!(verdict.rejection(), Some(Rejection::NotANumber));
    }

    #[test]
    fn test_from_result() {
        let ok: Verdict = Ok::<_, Rejection>("x".to_string()).into();
        assert_eq!(ok, Verdict::Accepted("x".to_string()));
        let err: Verdict = Err(Rejection::TooManyDecimals).into();
        assert_eq!(err, Verdict::Rejected(Rejection::TooManyDecimals));
    }
}
