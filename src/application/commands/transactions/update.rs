use super::{TransactionCommandService, service::AFFECTED_VIEWS};
use crate::{
    application::{
        audit::AuditEntry,
        dto::TransactionDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::{
        audit::{changed_fields, snapshot},
        transaction::{TABLE_NAME, TransactionId},
        validation::TransactionForm,
    },
};
use uuid::Uuid;

pub struct UpdateTransactionCommand {
    pub id: Uuid,
    pub form: TransactionForm,
}

impl TransactionCommandService {
    /// Replaces every editable field of an owned transaction.
    pub async fn update_transaction(
        &self,
        identity: &dyn IdentityProvider,
        command: UpdateTransactionCommand,
    ) -> ApplicationResult<TransactionDto> {
        let owner = require_owner(identity).await?;
        let id = TransactionId::new(command.id);

        let mut existing = self
            .repo
            .find_owned(id, owner)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to load transaction", err))?
            .ok_or(ApplicationError::NotFoundOrForbidden)?;

        let values = command.form.into_values()?;

        let affected = self
            .repo
            .update_owned(id, owner, &values)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to update transaction", err))?;
        if affected == 0 {
            tracing::warn!(transaction_id = %id, "transaction vanished between fetch and update");
            return Err(ApplicationError::ConcurrentModification);
        }

        let old_values = snapshot(&existing);
        let new_values = snapshot(&values);
        let changed = changed_fields(&old_values, &new_values);
        if changed.is_empty() {
            tracing::debug!(transaction_id = %id, "update changed nothing; audit skipped");
        } else {
            self.effects
                .audit(
                    identity,
                    AuditEntry::update(TABLE_NAME, id, old_values, new_values, changed),
                )
                .await;
        }
        self.effects.invalidate(&AFFECTED_VIEWS);

        existing.replace(values);
        tracing::info!(transaction_id = %id, "transaction updated");
        Ok(existing.into())
    }
}
