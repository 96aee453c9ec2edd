// src/presentation/view/reconciler.rs
use std::{collections::BTreeMap, future::Future, sync::Arc};

use tracing::warn;

use crate::application::{
    ApplicationError, ApplicationResult,
    ports::notify::{Notice, Notifier},
};
use crate::infrastructure::notify::TracingNotifier;
use crate::presentation::view::optimistic::{Keyed, OptimisticList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    /// The edit surface stays open so the user can correct and retry.
    Failed {
        message: String,
        field_errors: BTreeMap<String, String>,
    },
}

impl EditOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Drives one inline edit: optimistic overlay, the mutation, a single
/// notice and the authoritative refetch.
pub struct EditReconciler {
    notifier: Arc<dyn Notifier>,
    entity: &'static str,
}

impl EditReconciler {
    pub fn new(notifier: Arc<dyn Notifier>, entity: &'static str) -> Self {
        Self { notifier, entity }
    }

    /// Reconciler whose notices go to the log.
    pub fn logging(entity: &'static str) -> Self {
        Self::new(Arc::new(TracingNotifier), entity)
    }

    /// Shows `edited` right away and hands back the record to send. The
    /// list is free for rendering until [`settle`](Self::settle).
    pub fn begin<T: Keyed + Clone>(&self, list: &mut OptimisticList<T>, edited: T) -> T {
        list.propose(edited.clone());
        edited
    }

    /// Records the mutation response and emits exactly one notice. The
    /// overlay stays visible until [`finish`](Self::finish).
    pub fn settle<T: Keyed + Clone>(
        &self,
        list: &mut OptimisticList<T>,
        result: ApplicationResult<()>,
    ) -> EditOutcome {
        list.mark_response_observed();

        match result {
            Ok(()) => {
                self.notifier.notify(Notice::success(
                    format!("{} updated", self.entity),
                    "Your changes have been saved.",
                ));
                EditOutcome::Saved
            }
            Err(err) => {
                let message = match &err {
                    ApplicationError::PersistenceFailed { context, .. } => context.clone(),
                    other => other.to_string(),
                };
                self.notifier.notify(Notice::error(
                    format!("Error updating {}", self.entity.to_lowercase()),
                    message.clone(),
                ));
                let field_errors = match err {
                    ApplicationError::ValidationFailed(errors) => errors.into_inner(),
                    _ => BTreeMap::new(),
                };
                EditOutcome::Failed {
                    message,
                    field_errors,
                }
            }
        }
    }

    /// Applies the authoritative refetch, or falls back to the last known
    /// records when it failed.
    pub fn finish<T: Keyed + Clone>(
        &self,
        list: &mut OptimisticList<T>,
        refetched: ApplicationResult<Vec<T>>,
    ) {
        match refetched {
            Ok(records) => list.refresh(records),
            Err(err) => {
                warn!(entity = self.entity, error = %err, "refetch after edit failed");
                list.discard_overlay();
            }
        }
    }

    /// Runs all three steps back to back for callers that do not render
    /// while the edit is in flight.
    pub async fn submit<T, M, MF, R, RF>(
        &self,
        list: &mut OptimisticList<T>,
        edited: T,
        mutation: M,
        refetch: R,
    ) -> EditOutcome
    where
        T: Keyed + Clone,
        M: FnOnce(T) -> MF,
        MF: Future<Output = ApplicationResult<()>>,
        R: FnOnce() -> RF,
        RF: Future<Output = ApplicationResult<Vec<T>>>,
    {
        let edited = self.begin(list, edited);
        let result = mutation(edited).await;
        let outcome = self.settle(list, result);
        self.finish(list, refetch().await);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::notify::NoticeKind;
    use crate::presentation::view::optimistic::ListView;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct Captured(Mutex<Vec<Notice>>);

    impl Notifier for Captured {
        fn notify(&self, notice: Notice) {
            self.0.lock().unwrap().push(notice);
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: Uuid,
        amount: i64,
    }

    impl Keyed for Row {
        fn key(&self) -> Uuid {
            self.id
        }
    }

    #[tokio::test]
    async fn saved_edit_notifies_once_and_shows_server_records() {
        let notices = Arc::new(Captured::default());
        let reconciler = EditReconciler::new(notices.clone(), "Transaction");
        let id = Uuid::new_v4();
        let mut list = OptimisticList::new(vec![Row { id, amount: 5 }]);

        let outcome = reconciler
            .submit(
                &mut list,
                Row { id, amount: 7 },
                |_| async { Ok::<(), ApplicationError>(()) },
                || async move { Ok::<_, ApplicationError>(vec![Row { id, amount: 6 }]) },
            )
            .await;

        assert!(outcome.is_saved());
        assert_eq!(list.rendered(), vec![Row { id, amount: 6 }]);
        let notices = notices.0.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[0].title, "Transaction updated");
    }

    #[tokio::test]
    async fn rejected_edit_reverts_and_reports_fields() {
        let notices = Arc::new(Captured::default());
        let reconciler = EditReconciler::new(notices.clone(), "Contract");
        let id = Uuid::new_v4();
        let original = vec![Row { id, amount: 5 }];
        let mut list = OptimisticList::new(original.clone());

        let refetched = original.clone();
        let outcome = reconciler
            .submit(
                &mut list,
                Row { id, amount: -1 },
                |_| async {
                    Err::<(), _>(ApplicationError::validation(
                        "total_value",
                        "Value must be positive",
                    ))
                },
                || async move { Ok::<_, ApplicationError>(refetched) },
            )
            .await;

        match outcome {
            EditOutcome::Failed { field_errors, .. } => {
                assert_eq!(
                    field_errors.get("total_value").map(String::as_str),
                    Some("Value must be positive")
                );
            }
            EditOutcome::Saved => panic!("expected failure"),
        }
        assert_eq!(list.rendered(), original);
        let notices = notices.0.lock().unwrap();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(notices[0].title, "Error updating contract");
    }

    #[tokio::test]
    async fn failed_refetch_discards_overlay() {
        let notices = Arc::new(Captured::default());
        let reconciler = EditReconciler::new(notices, "Employee");
        let id = Uuid::new_v4();
        let original = vec![Row { id, amount: 5 }];
        let mut list = OptimisticList::new(original.clone());

        reconciler
            .submit(
                &mut list,
                Row { id, amount: 9 },
                |_| async { Ok::<(), ApplicationError>(()) },
                || async { Err::<Vec<Row>, _>(ApplicationError::persistence("offline")) },
            )
            .await;

        assert_eq!(list.rendered(), original);
        assert!(!list.is_pending());
    }

    #[tokio::test]
    async fn logging_reconciler_still_applies_the_edit() {
        let reconciler = EditReconciler::logging("Transaction");
        let id = Uuid::new_v4();
        let mut list = OptimisticList::new(vec![Row { id, amount: 1 }]);
        let updated = vec![Row { id, amount: 2 }];
        let served = updated.clone();

        let outcome = reconciler
            .submit(
                &mut list,
                Row { id, amount: 2 },
                |_| async { Ok::<(), ApplicationError>(()) },
                move || async move { Ok::<Vec<Row>, ApplicationError>(served) },
            )
            .await;

        assert!(outcome.is_saved());
        assert_eq!(list.rendered(), updated);
    }

    #[tokio::test]
    async fn overlay_is_rendered_while_the_mutation_is_in_flight() {
        let notices = Arc::new(Captured::default());
        let reconciler = EditReconciler::new(notices.clone(), "Transaction");
        let id = Uuid::new_v4();
        let mut list = OptimisticList::new(vec![Row { id, amount: 5 }]);
        let (respond, response) = tokio::sync::oneshot::channel::<ApplicationResult<()>>();

        let sent = reconciler.begin(&mut list, Row { id, amount: 7 });
        let in_flight = tokio::spawn(async move {
            let _payload = sent;
            response.await.unwrap_or(Err(ApplicationError::persistence("dropped")))
        });

        assert_eq!(list.rendered(), vec![Row { id, amount: 7 }]);
        assert_eq!(list.authoritative(), &[Row { id, amount: 5 }]);
        assert!(notices.0.lock().unwrap().is_empty());

        respond.send(Ok(())).unwrap();
        let outcome = reconciler.settle(&mut list, in_flight.await.unwrap());
        assert!(outcome.is_saved());
        assert!(matches!(list.state(), ListView::AwaitingRefresh { .. }));
        assert_eq!(list.rendered(), vec![Row { id, amount: 7 }]);

        reconciler.finish(&mut list, Ok(vec![Row { id, amount: 8 }]));
        assert_eq!(list.rendered(), vec![Row { id, amount: 8 }]);
        assert_eq!(notices.0.lock().unwrap().len(), 1);
    }
}
