// Route exports
pub mod matches;
pub mod profiles;

use actix_web::web;
use std::sync::Arc;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::services::SqliteStorage;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<SqliteStorage>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(profiles::health_check))
        .service(
            web::scope("/api")
                .configure(profiles::configure)
                .configure(matches::configure),
        );
}
