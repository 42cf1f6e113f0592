use crate::modules::activities::adapters::outbound::directory_in_memory::InMemoryActivityDirectory;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up::handler::SignUpHandler;
use crate::modules::activities::use_cases::withdraw::handler::WithdrawHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpHandler<InMemoryActivityDirectory>>,
    pub withdraw_handler: Arc<WithdrawHandler<InMemoryActivityDirectory>>,
}

impl AppState {
    pub fn new(directory: Arc<InMemoryActivityDirectory>) -> Self {
        Self {
            queries: directory.clone(),
            sign_up_handler: Arc::new(SignUpHandler::new(directory.clone())),
            withdraw_handler: Arc::new(WithdrawHandler::new(directory)),
        }
    }

    /// Fresh state over a newly seeded directory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryActivityDirectory::seeded()))
    }
}
