use std::sync::Arc;

use bento_core::application::BentoService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BentoService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BentoService) -> Self {
        Self { args, service }
    }
}
