use std::sync::Arc;

use crate::adapter::http::views::Views;
use crate::adapter::supabase::client::SupabaseClient;
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

pub mod app;
pub mod config;
pub mod setup;
pub mod state;

pub fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend = SupabaseClient::new(&config.supabase)?;
    let views = Views::new()?;

    Ok(AppState {
        config: Arc::new(config.clone()),
        backend: Arc::new(backend),
        views: Arc::new(views),
    })
}
