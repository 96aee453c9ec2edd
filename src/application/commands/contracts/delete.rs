use super::{ContractCommandService, service::AFFECTED_VIEWS};
use crate::{
    application::{
        audit::AuditEntry,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::{
        audit::snapshot,
        contract::{TABLE_NAME, ContractId},
    },
};
use uuid::Uuid;

pub struct DeleteContractCommand {
    pub id: Uuid,
}

impl ContractCommandService {
    pub async fn delete_contract(
        &self,
        identity: &dyn IdentityProvider,
        command: DeleteContractCommand,
    ) -> ApplicationResult<()> {
        let owner = require_owner(identity).await?;
        let id = ContractId::new(command.id);

        let existing = self
            .repo
            .find_owned(id, owner)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to load contract", err))?
            .ok_or(ApplicationError::NotFoundOrForbidden)?;

        let removed = self
            .repo
            .delete_owned(id, owner)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to delete contract", err))?;
        if removed == 0 {
            return Err(ApplicationError::NotFoundOrForbidden);
        }
        tracing::info!(contract_id = %id, "contract deleted");

        self.effects
            .audit(identity, AuditEntry::delete(TABLE_NAME, id, snapshot(&existing)))
            .await;
        self.effects.invalidate(&AFFECTED_VIEWS);

        Ok(())
    }
}
