//! Result of ticking a node.

/// Outcome of one tick.
///
/// Every node resolves within the tick that evaluates it: a condition holds
/// or it does not, an action writes its decision or declines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversion() {
        assert_eq!(Status::from(true), Status::Success);
        assert!(Status::from(false).is_failure());
        assert_eq!(Status::Success.invert(), Status::Failure);
    }
}
