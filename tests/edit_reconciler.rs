// tests/edit_reconciler.rs
use std::sync::Arc;

use finboard_core::application::{
    commands::transactions::UpdateTransactionCommand, dto::TransactionDto,
    ports::notify::NoticeKind,
};
use finboard_core::domain::validation::TransactionForm;
use finboard_core::presentation::view::{EditOutcome, EditReconciler, ListView, OptimisticList};

mod support;
use support::*;

fn form_from(dto: &TransactionDto) -> TransactionForm {
    TransactionForm {
        description: dto.description.clone(),
        amount: dto.amount.abs().to_string(),
        kind: dto.kind.clone(),
        category: dto.category.clone(),
        date: dto.date.to_string(),
    }
}

#[tokio::test]
async fn inline_edit_round_trip_against_services() {
    let app = TestApp::new();
    let (_, session) = signed_in();
    let notifier = Arc::new(CapturingNotifier::default());
    let reconciler = EditReconciler::new(notifier.clone(), "Transaction");

    app.services
        .transaction_commands
        .add_transaction(&session, coffee_form())
        .await
        .unwrap();
    let queries = app.services.transaction_queries.clone();
    let commands = app.services.transaction_commands.clone();
    let mut list = OptimisticList::new(queries.recent(&session, None).await.unwrap());

    let mut edited = list.rendered()[0].clone();
    edited.category = "Compras".into();

    let outcome = reconciler
        .submit(
            &mut list,
            edited,
            |row| {
                let commands = commands.clone();
                let session = session.clone();
                async move {
                    commands
                        .update_transaction(
                            &session,
                            UpdateTransactionCommand {
                                id: row.id,
                                form: form_from(&row),
                            },
                        )
                        .await
                        .map(|_| ())
                }
            },
            || {
                let queries = queries.clone();
                let session = session.clone();
                async move { queries.recent(&session, None).await }
            },
        )
        .await;

    assert_eq!(outcome, EditOutcome::Saved);
    assert!(!list.is_pending());
    assert_eq!(list.rendered()[0].category, "Compras");
    assert_eq!(list.rendered()[0].amount, money("-4.50"));
    let notices = notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Success);
}

#[tokio::test]
async fn rejected_inline_edit_keeps_server_state() {
    let app = TestApp::new();
    let (_, session) = signed_in();
    let notifier = Arc::new(CapturingNotifier::default());
    let reconciler = EditReconciler::new(notifier.clone(), "Transaction");

    app.services
        .transaction_commands
        .add_transaction(&session, coffee_form())
        .await
        .unwrap();
    let queries = app.services.transaction_queries.clone();
    let commands = app.services.transaction_commands.clone();
    let original = queries.recent(&session, None).await.unwrap();
    let mut list = OptimisticList::new(original.clone());

    let mut edited = original[0].clone();
    edited.description = String::new();

    let outcome = reconciler
        .submit(
            &mut list,
            edited,
            |row| {
                let commands = commands.clone();
                let session = session.clone();
                async move {
                    commands
                        .update_transaction(
                            &session,
                            UpdateTransactionCommand {
                                id: row.id,
                                form: form_from(&row),
                            },
                        )
                        .await
                        .map(|_| ())
                }
            },
            || {
                let queries = queries.clone();
                let session = session.clone();
                async move { queries.recent(&session, None).await }
            },
        )
        .await;

    match outcome {
        EditOutcome::Failed { field_errors, .. } => {
            assert_eq!(
                field_errors.get("description").map(String::as_str),
                Some("Description is required")
            );
        }
        EditOutcome::Saved => panic!("expected failure"),
    }
    assert_eq!(list.rendered(), original);
    assert_eq!(notifier.notices()[0].kind, NoticeKind::Error);
    assert_eq!(app.audit.entries().len(), 1);
}

#[tokio::test]
async fn edited_row_is_visible_before_the_server_answers() {
    let app = TestApp::new();
    let (_, session) = signed_in();
    let notifier = Arc::new(CapturingNotifier::default());
    let reconciler = EditReconciler::new(notifier.clone(), "Transaction");

    app.services
        .transaction_commands
        .add_transaction(&session, coffee_form())
        .await
        .unwrap();
    let queries = app.services.transaction_queries.clone();
    let commands = app.services.transaction_commands.clone();
    let mut list = OptimisticList::new(queries.recent(&session, None).await.unwrap());

    let mut edited = list.rendered()[0].clone();
    edited.description = "Espresso".into();
    let sent = reconciler.begin(&mut list, edited);

    let pending = {
        let session = session.clone();
        async move {
            commands
                .update_transaction(
                    &session,
                    UpdateTransactionCommand {
                        id: sent.id,
                        form: form_from(&sent),
                    },
                )
                .await
                .map(|_| ())
        }
    };

    assert!(matches!(list.state(), ListView::Optimistic { .. }));
    assert_eq!(list.rendered()[0].description, "Espresso");
    assert_eq!(list.authoritative()[0].description, "Coffee");
    assert!(notifier.notices().is_empty());

    let outcome = reconciler.settle(&mut list, pending.await);
    assert_eq!(outcome, EditOutcome::Saved);
    assert_eq!(list.rendered()[0].description, "Espresso");

    reconciler.finish(&mut list, queries.recent(&session, None).await);
    assert!(!list.is_pending());
    assert_eq!(list.rendered()[0].description, "Espresso");
    assert_eq!(notifier.notices().len(), 1);
}
