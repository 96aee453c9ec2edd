use super::{TransactionCommandService, service::AFFECTED_VIEWS};
use crate::{
    application::{
        audit::AuditEntry,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::{
        audit::snapshot,
        transaction::{TABLE_NAME, TransactionId},
    },
};
use uuid::Uuid;

pub struct DeleteTransactionCommand {
    pub id: Uuid,
}

impl TransactionCommandService {
    pub async fn delete_transaction(
        &self,
        identity: &dyn IdentityProvider,
        command: DeleteTransactionCommand,
    ) -> ApplicationResult<()> {
        let owner = require_owner(identity).await?;
        let id = TransactionId::new(command.id);

        let existing = self
            .repo
            .find_owned(id, owner)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to load transaction", err))?
            .ok_or(ApplicationError::NotFoundOrForbidden)?;

        let removed = self
            .repo
            .delete_owned(id, owner)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to delete transaction", err))?;
        if removed == 0 {
            return Err(ApplicationError::NotFoundOrForbidden);
        }
        tracing::info!(transaction_id = %id, "transaction deleted");

        self.effects
            .audit(identity, AuditEntry::delete(TABLE_NAME, id, snapshot(&existing)))
            .await;
        self.effects.invalidate(&AFFECTED_VIEWS);

        Ok(())
    }
}
