use std::fmt;

/// Result of offering one attribute to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOutcome {
    /// The handler owns the attribute and applied it.
    Accepted,
    /// The handler owns the attribute type but the value was invalid.
    Rejected,
    /// The handler does not own this attribute type.
    NotApplicable,
}

impl AttributeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeOutcome::Accepted => "accepted",
            AttributeOutcome::Rejected => "rejected",
            AttributeOutcome::NotApplicable => "not_applicable",
        }
    }

    /// Two-valued view used by dispatchers that only care whether the
    /// attribute was consumed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, AttributeOutcome::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, AttributeOutcome::Rejected)
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, AttributeOutcome::NotApplicable)
    }
}

impl fmt::Display for AttributeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
