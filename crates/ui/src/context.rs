use std::sync::Arc;

use services::{SurveyService, TrackerService};

/// What the views need from the composition root.
pub trait UiApp: Send + Sync {
    fn survey_service(&self) -> Arc<SurveyService>;
    fn tracker_service(&self) -> Arc<TrackerService>;
}

#[derive(Clone)]
pub struct AppContext {
    surveys: Arc<SurveyService>,
    tracker: Arc<TrackerService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            surveys: app.survey_service(),
            tracker: app.tracker_service(),
        }
    }

    #[must_use]
    pub fn surveys(&self) -> Arc<SurveyService> {
        Arc::clone(&self.surveys)
    }

    #[must_use]
    pub fn tracker(&self) -> Arc<TrackerService> {
        Arc::clone(&self.tracker)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
