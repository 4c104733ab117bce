// Route exports
pub mod analytics;
pub mod matches;

use actix_web::web;

use crate::analytics::AnalyticsEngine;
use crate::config::{MatchingSettings, Settings};
use crate::core::Matcher;
use crate::services::PlaceholderCollaborationData;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub analytics: AnalyticsEngine,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        let matcher = Matcher::new(settings.scoring_weights())
            .with_admission_threshold(settings.matching.group_admission_threshold);
        let source = PlaceholderCollaborationData::from(&settings.analytics);

        Self {
            matcher,
            analytics: AnalyticsEngine::new(Arc::new(source)),
            matching: settings.matching.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            matcher: Matcher::default(),
            analytics: AnalyticsEngine::default(),
            matching: MatchingSettings::default(),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(analytics::configure),
    );
}
