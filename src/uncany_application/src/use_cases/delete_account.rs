use chrono::{DateTime, Utc};
use uncany_core::{
    AuthenticatedCaller, DeletionOutcome, IdentityError, IdentityProvider, PatchValue, RowFilter,
    RowPatch, RowStore, StepOutcome,
};

/// Error types for delete account use case
#[derive(Debug, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("Identity deletion failed: {source}")]
    IdentityDeletion {
        source: IdentityError,
        outcome: DeletionOutcome,
    },
}

/// Where the caller's application rows live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPlan {
    pub profile_table: String,
    pub profile_id_column: String,
    pub profile_email_column: String,
    pub dependent_table: String,
    pub dependent_owner_column: String,
    pub deleted_at_column: String,
    pub anonymized_email_domain: String,
}

impl Default for DeletionPlan {
    fn default() -> Self {
        Self {
            profile_table: "users".to_string(),
            profile_id_column: "id".to_string(),
            profile_email_column: "email".to_string(),
            dependent_table: "reservations".to_string(),
            dependent_owner_column: "teacher_id".to_string(),
            deleted_at_column: "deleted_at".to_string(),
            anonymized_email_domain: "uncany.app".to_string(),
        }
    }
}

impl DeletionPlan {
    /// Replacement address that frees the original email for a new signup.
    pub fn anonymized_email(&self, caller: &AuthenticatedCaller) -> String {
        format!("deleted_{}@{}", caller.id(), self.anonymized_email_domain)
    }
}

/// Delete account use case - soft deletes the caller's rows, then removes
/// the auth identity for good.
pub struct DeleteAccountUseCase<'a, I, R>
where
    I: IdentityProvider,
    R: RowStore,
{
    identity_provider: &'a I,
    row_store: &'a R,
    plan: &'a DeletionPlan,
}

impl<'a, I, R> DeleteAccountUseCase<'a, I, R>
where
    I: IdentityProvider,
    R: RowStore,
{
    pub fn new(identity_provider: &'a I, row_store: &'a R, plan: &'a DeletionPlan) -> Self {
        Self {
            identity_provider,
            row_store,
            plan,
        }
    }

    /// Execute the delete account use case
    ///
    /// # Arguments
    /// * `caller` - The identity resolved from the request's bearer token
    /// * `deleted_at` - Timestamp written to the soft-deleted rows
    ///
    /// # Returns
    /// The per-step outcome, or DeleteAccountError when the identity could not be deleted.
    /// Row updates never fail the use case.
    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip_all, fields(user_id = %caller.id()))]
    pub async fn execute(
        &self,
        caller: &AuthenticatedCaller,
        deleted_at: DateTime<Utc>,
    ) -> Result<DeletionOutcome, DeleteAccountError> {
        // The two soft deletes do not depend on each other
        let (profile, reservations) = tokio::join!(
            self.soft_delete_profile(caller, deleted_at),
            self.soft_delete_reservations(caller, deleted_at),
        );

        let identity = match self.identity_provider.delete_identity(caller.id()).await {
            Ok(()) => StepOutcome::Completed,
            Err(IdentityError::NotFound) => {
                tracing::warn!("Identity already deleted");
                StepOutcome::Completed
            }
            Err(source) => {
                let outcome = DeletionOutcome {
                    profile,
                    reservations,
                    identity: StepOutcome::Failed(source.to_string()),
                };
                return Err(DeleteAccountError::IdentityDeletion { source, outcome });
            }
        };

        Ok(DeletionOutcome {
            profile,
            reservations,
            identity,
        })
    }

    async fn soft_delete_profile(
        &self,
        caller: &AuthenticatedCaller,
        deleted_at: DateTime<Utc>,
    ) -> StepOutcome {
        let plan = self.plan;
        let patch = RowPatch::new()
            .set(&plan.deleted_at_column, PatchValue::Timestamp(deleted_at))
            .set(
                &plan.profile_email_column,
                PatchValue::Text(plan.anonymized_email(caller)),
            );
        let filter = RowFilter::new().eq(&plan.profile_id_column, caller.id().as_str());

        let outcome = StepOutcome::from(
            self.row_store
                .update(&plan.profile_table, patch, filter)
                .await,
        );
        if let StepOutcome::Failed(reason) = &outcome {
            tracing::error!(table = %plan.profile_table, %reason, "Profile soft delete failed");
        }
        outcome
    }

    async fn soft_delete_reservations(
        &self,
        caller: &AuthenticatedCaller,
        deleted_at: DateTime<Utc>,
    ) -> StepOutcome {
        let plan = self.plan;
        let patch = RowPatch::new().set(&plan.deleted_at_column, PatchValue::Timestamp(deleted_at));
        // Rows deleted earlier keep their original timestamp
        let filter = RowFilter::new()
            .eq(&plan.dependent_owner_column, caller.id().as_str())
            .is_null(&plan.deleted_at_column);

        let outcome = StepOutcome::from(
            self.row_store
                .update(&plan.dependent_table, patch, filter)
                .await,
        );
        if let StepOutcome::Failed(reason) = &outcome {
            tracing::error!(table = %plan.dependent_table, %reason, "Reservation soft delete failed");
        }
        outcome
    }
}
