// src/application/ports/views.rs
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Cached page groups whose data must be refetched after a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RouteScope {
    Dashboard,
    Contracts,
    Payroll,
    Reports,
    Account,
}

impl RouteScope {
    pub const ALL: [RouteScope; 5] = [
        RouteScope::Dashboard,
        RouteScope::Contracts,
        RouteScope::Payroll,
        RouteScope::Reports,
        RouteScope::Account,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteScope::Dashboard => "dashboard",
            RouteScope::Contracts => "contracts",
            RouteScope::Payroll => "payroll",
            RouteScope::Reports => "reports",
            RouteScope::Account => "account",
        }
    }

    pub fn as_path(&self) -> &'static str {
        match self {
            RouteScope::Dashboard => "/dashboard",
            RouteScope::Contracts => "/dashboard/contracts",
            RouteScope::Payroll => "/dashboard/payroll",
            RouteScope::Reports => "/dashboard/reports",
            RouteScope::Account => "/dashboard/account",
        }
    }
}

impl fmt::Display for RouteScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteScope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| format!("unknown view scope '{s}'"))
    }
}

/// Marks cached views stale so the next read refetches.
pub trait ViewInvalidator: Send + Sync {
    fn invalidate(&self, scope: RouteScope);
}
