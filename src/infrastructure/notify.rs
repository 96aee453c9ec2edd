// src/infrastructure/notify.rs
use crate::application::ports::notify::{Notice, NoticeKind, Notifier};

/// Emits notices as log events.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => {
                tracing::info!(title = %notice.title, description = %notice.description, "notice")
            }
            NoticeKind::Error => {
                tracing::warn!(title = %notice.title, description = %notice.description, "notice")
            }
        }
    }
}
