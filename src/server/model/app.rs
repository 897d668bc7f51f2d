use crate::server::{config::RuntimeMode, service::challengermode::ChallengermodeClient};

#[derive(Clone)]
pub struct AppState {
    pub challengermode: ChallengermodeClient,
    pub mode: RuntimeMode,
}
