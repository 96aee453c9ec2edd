use super::{EmployeeCommandService, service::AFFECTED_VIEWS};
use crate::{
    application::{
        audit::AuditEntry,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::{
        audit::snapshot,
        employee::{TABLE_NAME, EmployeeId},
    },
};
use uuid::Uuid;

pub struct DeleteEmployeeCommand {
    pub id: Uuid,
}

impl EmployeeCommandService {
    pub async fn delete_employee(
        &self,
        identity: &dyn IdentityProvider,
        command: DeleteEmployeeCommand,
    ) -> ApplicationResult<()> {
        let owner = require_owner(identity).await?;
        let id = EmployeeId::new(command.id);

        let existing = self
            .repo
            .find_owned(id, owner)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to load employee", err))?
            .ok_or(ApplicationError::NotFoundOrForbidden)?;

        let removed = self
            .repo
            .delete_owned(id, owner)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to delete employee", err))?;
        if removed == 0 {
            return Err(ApplicationError::NotFoundOrForbidden);
        }
        tracing::info!(employee_id = %id, "employee deleted");

        self.effects
            .audit(identity, AuditEntry::delete(TABLE_NAME, id, snapshot(&existing)))
            .await;
        self.effects.invalidate(&AFFECTED_VIEWS);

        Ok(())
    }
}
