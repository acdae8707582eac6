/// Result of one account deletion sub-step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Failed(String),
}

impl StepOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed)
    }
}

impl<E: std::fmt::Display> From<Result<(), E>> for StepOutcome {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => StepOutcome::Completed,
            Err(e) => StepOutcome::Failed(e.to_string()),
        }
    }
}

/// Aggregated outcome of an account deletion.
///
/// The profile and reservation soft deletes are best-effort cleanup. Only the
/// identity deletion decides whether the account counts as deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    pub profile: StepOutcome,
    pub reservations: StepOutcome,
    pub identity: StepOutcome,
}

impl DeletionOutcome {
    pub fn users_row_updated(&self) -> bool {
        self.profile.is_completed()
    }

    pub fn reservations_rows_updated(&self) -> bool {
        self.reservations.is_completed()
    }

    pub fn auth_identity_deleted(&self) -> bool {
        self.identity.is_completed()
    }

    /// Whether the account deletion succeeded as a whole.
    pub fn is_success(&self) -> bool {
        self.auth_identity_deleted()
    }
}
