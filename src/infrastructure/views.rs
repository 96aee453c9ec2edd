// src/infrastructure/views.rs
use crate::application::ports::views::{RouteScope, ViewInvalidator};
use serde::Serialize;
use std::{collections::HashMap, sync::Mutex};
use utoipa::ToSchema;

/// Current revision of a cached view. Clients refetch when it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct ViewRevision {
    pub scope: RouteScope,
    pub path: &'static str,
    pub revision: u64,
}

/// In-process revision counter per route scope.
#[derive(Debug, Default)]
pub struct ViewRevisionRegistry {
    revisions: Mutex<HashMap<RouteScope, u64>>,
}

impl ViewRevisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revision(&self, scope: RouteScope) -> ViewRevision {
        let revision = match self.revisions.lock() {
            Ok(map) => map.get(&scope).copied().unwrap_or(0),
            Err(poisoned) => poisoned.into_inner().get(&scope).copied().unwrap_or(0),
        };
        ViewRevision {
            scope,
            path: scope.as_path(),
            revision,
        }
    }
}

impl ViewInvalidator for ViewRevisionRegistry {
    fn invalidate(&self, scope: RouteScope) {
        let mut map = self
            .revisions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let revision = map.entry(scope).or_insert(0);
        *revision += 1;
        tracing::debug!(scope = %scope, path = scope.as_path(), revision = *revision, "view invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidation_bumps_only_the_given_scope() {
        let registry = ViewRevisionRegistry::new();
        registry.invalidate(RouteScope::Dashboard);
        registry.invalidate(RouteScope::Dashboard);
        registry.invalidate(RouteScope::Payroll);

        assert_eq!(registry.revision(RouteScope::Dashboard).revision, 2);
        assert_eq!(registry.revision(RouteScope::Payroll).revision, 1);
        assert_eq!(registry.revision(RouteScope::Contracts).revision, 0);
        assert_eq!(registry.revision(RouteScope::Payroll).path, "/dashboard/payroll");
    }
}
