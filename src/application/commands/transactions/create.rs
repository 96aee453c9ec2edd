use super::{TransactionCommandService, service::AFFECTED_VIEWS};
use crate::{
    application::{
        audit::AuditEntry,
        dto::TransactionDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::{
        audit::snapshot,
        transaction::{NewTransaction, TABLE_NAME},
        validation::TransactionForm,
    },
};

impl TransactionCommandService {
    pub async fn add_transaction(
        &self,
        identity: &dyn IdentityProvider,
        form: TransactionForm,
    ) -> ApplicationResult<TransactionDto> {
        let owner = require_owner(identity).await?;
        let values = form.into_values()?;

        let created = self
            .repo
            .insert(NewTransaction {
                user_id: owner,
                values,
            })
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to save transaction", err))?;
        tracing::info!(transaction_id = %created.id, "transaction created");

        self.effects
            .audit(
                identity,
                AuditEntry::insert(TABLE_NAME, created.id, snapshot(&created)),
            )
            .await;
        self.effects.invalidate(&AFFECTED_VIEWS);

        Ok(created.into())
    }
}
