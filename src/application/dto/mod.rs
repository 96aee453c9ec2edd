pub mod audit;
pub mod auth;
pub mod contracts;
pub mod employees;
pub mod pagination;
pub mod payroll;
pub mod reports;
pub mod serde_time;
pub mod transactions;
pub mod users;

pub use audit::{AuditLogDto, AuditStatusDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use contracts::ContractDto;
pub use employees::{EmployeeDto, EmployeeRosterDto};
pub use pagination::CursorPage;
pub use payroll::PayrollRunDto;
pub use reports::{
    CategoryTotalDto, DashboardSummaryDto, MonthlyTotalsDto, PeriodTotalsDto, ProfitAndLossDto,
};
pub use transactions::TransactionDto;
pub use users::UserProfileDto;
