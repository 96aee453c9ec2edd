mod list;
mod service;
mod status;

pub use list::ListAuditTrailQuery;
pub use service::AuditQueryService;
