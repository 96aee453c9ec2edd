// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
    response::Response,
};
use finboard_core::application::{
    commands::payroll::PayrollAuditPolicy,
    dto::AuthenticatedUser,
    ports::{identity::Session, views::ViewInvalidator},
    services::{ApplicationServices, Repositories},
};
use finboard_core::domain::{
    transaction::{TransactionKind, TransactionValues},
    user::UserId,
    validation::{ContractForm, EmployeeForm, TransactionForm},
};
use finboard_core::infrastructure::views::ViewRevisionRegistry;
use finboard_core::presentation::http::{routes::build_router, state::HttpState};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use super::mocks::*;

/// Services wired over in-memory stores, with handles to every double.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub users: Arc<InMemoryUserRepo>,
    pub transactions: Arc<InMemoryTransactionRepo>,
    pub contracts: Arc<InMemoryContractRepo>,
    pub employees: Arc<InMemoryEmployeeRepo>,
    pub audit: Arc<InMemoryAuditRepo>,
    pub views: Arc<CapturingInvalidator>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_payroll_audit(PayrollAuditPolicy::default())
    }

    pub fn with_payroll_audit(policy: PayrollAuditPolicy) -> Self {
        let views = Arc::new(CapturingInvalidator::default());
        Self::build(policy, views.clone(), views)
    }

    fn build(
        policy: PayrollAuditPolicy,
        views: Arc<CapturingInvalidator>,
        invalidator: Arc<dyn ViewInvalidator>,
    ) -> Self {
        let users = Arc::new(InMemoryUserRepo::default());
        let transactions = Arc::new(InMemoryTransactionRepo::default());
        let contracts = Arc::new(InMemoryContractRepo::default());
        let employees = Arc::new(InMemoryEmployeeRepo::default());
        let audit = Arc::new(InMemoryAuditRepo::default());

        let repos = Repositories {
            users: users.clone(),
            transactions: transactions.clone(),
            contracts: contracts.clone(),
            employees: employees.clone(),
            audit_logs: audit.clone(),
        };
        let services = Arc::new(ApplicationServices::new(
            repos,
            Arc::new(PlainPasswordHasher),
            Arc::new(DummyTokenManager),
            invalidator,
            Arc::new(FixedClock),
            policy,
        ));

        Self {
            services,
            users,
            transactions,
            contracts,
            employees,
            audit,
            views,
        }
    }
}

pub fn session_for(owner: UserId) -> Session {
    Session::authenticated(AuthenticatedUser {
        id: owner,
        email: "owner@example.com".into(),
        issued_at: *FIXED_NOW,
        expires_at: *FIXED_NOW + chrono::Duration::hours(1),
        session_id: None,
    })
}

pub fn signed_in() -> (UserId, Session) {
    let owner = UserId::generate();
    (owner, session_for(owner))
}

pub fn money(raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap()
}

pub fn coffee_form() -> TransactionForm {
    TransactionForm {
        description: "Coffee".into(),
        amount: "4.50".into(),
        kind: "expense".into(),
        category: "Alimentação".into(),
        date: "2024-03-01".into(),
    }
}

pub fn contract_form() -> ContractForm {
    ContractForm {
        client_name: "Acme".into(),
        title: "Website".into(),
        total_value: "1200".into(),
        status: "active".into(),
        start_date: "2024-01-10".into(),
        end_date: None,
    }
}

pub fn employee_form() -> EmployeeForm {
    EmployeeForm {
        name: "Ana".into(),
        role: Some("Designer".into()),
        salary: "3000".into(),
        hire_date: "2023-06-01".into(),
    }
}

pub fn tx_values(amount: &str, kind: TransactionKind, category: &str, date: &str) -> TransactionValues {
    TransactionValues {
        description: category.to_string(),
        amount: money(amount),
        kind,
        category: category.into(),
        date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
    }
}

/// Router over in-memory services, with the revision registry as the view
/// invalidator.
pub fn make_test_router() -> (Router, TestApp, Arc<ViewRevisionRegistry>) {
    let registry = Arc::new(ViewRevisionRegistry::new());
    let app = TestApp::build(
        PayrollAuditPolicy::default(),
        Arc::new(CapturingInvalidator::default()),
        registry.clone(),
    );
    let state = HttpState {
        services: app.services.clone(),
        views: registry.clone(),
    };
    let router = build_router(state, &["http://localhost:3000".to_string()]);
    (router, app, registry)
}

pub fn bearer(owner: UserId) -> String {
    format!("Bearer {}", token_for(owner, "owner@example.com"))
}

pub fn json_request(method: &str, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Asserts an `ErrorResponse` body with the given status and `error` text.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json["error"], expected_error);
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected a message in {json}"
    );
    json
}
