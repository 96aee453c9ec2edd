use super::{EmployeeCommandService, service::AFFECTED_VIEWS};
use crate::{
    application::{
        audit::AuditEntry,
        dto::EmployeeDto,
        error::{ApplicationError, ApplicationResult},
        ports::identity::{IdentityProvider, require_owner},
    },
    domain::{
        audit::snapshot,
        employee::{NewEmployee, TABLE_NAME},
        validation::EmployeeForm,
    },
};

impl EmployeeCommandService {
    pub async fn add_employee(
        &self,
        identity: &dyn IdentityProvider,
        form: EmployeeForm,
    ) -> ApplicationResult<EmployeeDto> {
        let owner = require_owner(identity).await?;
        let values = form.into_values()?;

        let created = self
            .repo
            .insert(NewEmployee {
                user_id: owner,
                values,
            })
            .await
            .map_err(|err| ApplicationError::persistence_with("failed to save employee", err))?;
        tracing::info!(employee_id = %created.id, "employee created");

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
