use super::{ContractCommandService, service::AFFECTED_VIEWS};
use crate::{
    application::{
        audit::AuditEntry,
        dto::ContractDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::{
        audit::snapshot,
        contract::{NewContract, TABLE_NAME},
        validation::ContractForm,
    },
};

impl ContractCommandService {
    pub async fn add_contract(
        &self,
        identity: &dyn IdentityProvider,
        form: ContractForm,
    ) -> ApplicationResult<ContractDto> {
        let owner = require_owner(identity).await?;
        let values = form.into_values()?;

        let created = self
            .repo
            .insert(NewContract {
                user_id: owner,
                values,
            })
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to save contract", err))?;
        tracing::info!(contract_id = %created.id, "contract created");

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
