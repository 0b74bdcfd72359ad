use std::sync::Arc;

use crate::advisor::AdvisorApi;
use crate::session::SessionResolver;

#[derive(Clone)]
pub struct AppState {
    pub api: AdvisorApi,
    pub sessions: Arc<dyn SessionResolver>,
}
