use std::sync::Arc;

use pickyjoy_core::application::PickyJoyService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PickyJoyService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PickyJoyService) -> Self {
        Self { args, service }
    }
}
