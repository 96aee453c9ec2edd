use super::{EmployeeCommandService, service::AFFECTED_VIEWS};
use crate::{
    application::{
        audit::AuditEntry,
        dto::EmployeeDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::{
        audit::{changed_fields, snapshot},
        employee::{TABLE_NAME, EmployeeId},
        validation::EmployeeForm,
    },
};
use uuid::Uuid;

pub struct UpdateEmployeeCommand {
    pub id: Uuid,
    pub form: EmployeeForm,
}

impl EmployeeCommandService {
    /// Replaces every editable field of an owned employee.
    pub async fn update_employee(
        &self,
        identity: &dyn IdentityProvider,
        command: UpdateEmployeeCommand,
    ) -> ApplicationResult<EmployeeDto> {
        let owner = require_owner(identity).await?;
        let id = EmployeeId::new(command.id);

        let mut existing = self
            .repo
            .find_owned(id, owner)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to load employee", err))?
            .ok_or(ApplicationError::NotFoundOrForbidden)?;

        let values = command.form.into_values()?;

        let affected = self
            .repo
            .update_owned(id, owner, &values)
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to update employee", err))?;
        if affected == 0 {
            tracing::warn!(employee_id = %id, "employee vanished between fetch and update");
            return Err(ApplicationError::ConcurrentModification);
        }

        let old_values = snapshot(&existing);
        let new_values = snapshot(&values);
        let changed = changed_fields(&old_values, &new_values);
        if changed.is_empty() {
            tracing::debug!(employee_id = %id, "update changed nothing; audit skipped");
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
        tracing::info!(employee_id = %id, "employee updated");
        Ok(existing.into())
    }
}
