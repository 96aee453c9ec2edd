// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::infrastructure::views::ViewRevisionRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub views: Arc<ViewRevisionRegistry>,
}
