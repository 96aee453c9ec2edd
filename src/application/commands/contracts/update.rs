use super::{ContractCommandService, service::AFFECTED_VIEWS};
use crate::{
    application::{
        audit::AuditEntry,
        dto::ContractDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::{
        audit::{changed_fields, snapshot},
        contract::{TABLE_NAME, ContractId},
        validation::ContractForm,
    },
};
use uuid::Uuid;

pub struct UpdateContractCommand {
    pub id: Uuid,
    pub form: ContractForm,
}

impl ContractCommandService {
    /// Replaces every editable field of an owned contract.
    pub async fn update_contract(
        &self,
        identity: &dyn IdentityProvider,
        command: UpdateContractCommand,
    ) -> ApplicationResult<ContractDto> {
        let owner = require_owner(identity).await?;
        let id = ContractId::new(command.id);

        let mut existing = self
            .repo
            .find_owned(id, owner)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to load contract", err))?
            .ok_or(ApplicationError::NotFoundOrForbidden)?;

        let values = command.form.into_values()?;

        let affected = self
            .repo
            .update_owned(id, owner, &values)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to update contract", err))?;
        if affected == 0 {
            tracing::warn!(contract_id = %id, "contract vanished between fetch and update");
            return Err(ApplicationError::ConcurrentModification);
        }

        let old_values = snapshot(&existing);
        let new_values = snapshot(&values);
        let changed = changed_fields(&old_values, &new_values);
        if changed.is_empty() {
            tracing::debug!(contract_id = %id, "update changed nothing; audit skipped");
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
        tracing::info!(contract_id = %id, "contract updated");
        Ok(existing.into())
    }
}
