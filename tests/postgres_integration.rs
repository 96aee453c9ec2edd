// tests/postgres_integration.rs
use std::sync::Arc;

use finboard_core::domain::{
    audit::{AuditAction, AuditLogRepository, NewAuditLog},
    transaction::{NewTransaction, TransactionFilter, TransactionKind, TransactionRepository},
    user::{Email, FullName, NewUser, PasswordHash, UserRepository},
};
use finboard_core::infrastructure::{
    database,
    repositories::{PostgresAuditLogRepository, PostgresTransactionRepository, PostgresUserRepository},
};

mod support;
use support::*;

fn enabled() -> Option<String> {
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return None;
    }
    Some(std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests"))
}

#[tokio::test]
async fn owner_scoped_writes_and_audit_paging() {
    let Some(database_url) = enabled() else {
        return;
    };
    let pool = database::init_pool(&database_url, 2).await.expect("init pool");
    database::run_migrations(&pool).await.expect("run migrations");

    let users = PostgresUserRepository::new(pool.clone());
    let owner = users
        .insert(NewUser {
            email: Email::new(format!("it-{}@example.com", uuid::Uuid::new_v4())).unwrap(),
            full_name: FullName::new("Integration Owner").unwrap(),
            password_hash: PasswordHash::new("plain:unused").unwrap(),
            created_at: chrono::Utc::now(),
        })
        .await
        .expect("insert user")
        .id;

    let txs: Arc<dyn TransactionRepository> =
        Arc::new(PostgresTransactionRepository::new(pool.clone()));
    let created = txs
        .insert_batch(vec![
            NewTransaction {
                user_id: owner,
                values: tx_values("-3000", TransactionKind::Expense, "Payroll", "2024-03-15"),
            },
            NewTransaction {
                user_id: owner,
                values: tx_values("100", TransactionKind::Income, "Salário", "2024-03-01"),
            },
        ])
        .await
        .expect("batch");
    assert_eq!(created.len(), 2);
    assert_eq!(created[0].values.category, "Payroll");
    assert_eq!(created[1].values.amount, money("100.00"));

    let zero_expense = NewTransaction {
        user_id: owner,
        values: tx_values("0", TransactionKind::Expense, "Misc", "2024-03-02"),
    };
    let rejected = txs
        .insert_batch(vec![
            NewTransaction {
                user_id: owner,
                values: tx_values("-10", TransactionKind::Expense, "Misc", "2024-03-02"),
            },
            zero_expense,
        ])
        .await;
    assert!(rejected.is_err(), "sign constraint rejects a zero expense");

    let stranger = finboard_core::domain::user::UserId::generate();
    assert!(txs.find_owned(created[0].id, stranger).await.unwrap().is_none());
    assert_eq!(txs.delete_owned(created[0].id, stranger).await.unwrap(), 0);

    let listed = txs.list_owned(owner, TransactionFilter::all()).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].values.date >= listed[1].values.date);

    let audit: Arc<dyn AuditLogRepository> = Arc::new(PostgresAuditLogRepository::new(pool));
    for tx in &created {
        audit
            .insert(NewAuditLog {
                user_id: owner,
                table_name: "transactions".into(),
                record_id: tx.id.to_string(),
                action: AuditAction::Insert,
                old_values: None,
                new_values: Some(serde_json::json!({"amount": tx.values.amount})),
                changed_fields: None,
            })
            .await
            .expect("audit insert");
    }

    let (page, next) = audit.list_for_actor(owner, 1, None).await.unwrap();
    assert_eq!(page.len(), 1);
    let cursor = finboard_core::domain::audit::AuditLogCursor::decode(&next.expect("next cursor"))
        .unwrap();
    let (rest, tail) = audit.list_for_actor(owner, 1, Some(cursor)).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert!(tail.is_none());
    assert_ne!(page[0].id, rest[0].id);
}
