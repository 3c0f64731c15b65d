use crate::modules::feedback::core::feedback::FeedbackStore;
use crate::modules::feedback::use_cases::list_feedback::queries_port::FeedbackQueries;
use crate::modules::feedback::use_cases::submit_feedback::handler::SubmitFeedbackHandler;
use crate::modules::predictions::core::classifier::Classifier;
use crate::modules::predictions::core::prediction::StatsStore;
use crate::modules::predictions::use_cases::classify_text::handler::ClassifyTextHandler;
use crate::modules::predictions::use_cases::get_stats::queries_port::StatsQueries;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub stats: Arc<StatsStore>,
    pub feedback: Arc<FeedbackStore>,
    pub stats_queries: Arc<dyn StatsQueries + Send + Sync>,
    pub feedback_queries: Arc<dyn FeedbackQueries + Send + Sync>,
    pub classify_handler: Arc<ClassifyTextHandler>,
    pub feedback_handler: Arc<SubmitFeedbackHandler>,
}

impl AppState {
    /// Wires handlers and read ports around already recovered stores.
    pub fn new(
        classifier: Arc<dyn Classifier>,
        stats: Arc<StatsStore>,
        feedback: Arc<FeedbackStore>,
    ) -> Self {
        Self {
            classify_handler: Arc::new(ClassifyTextHandler::new(classifier.clone(), stats.clone())),
            feedback_handler: Arc::new(SubmitFeedbackHandler::new(feedback.clone())),
            stats_queries: stats.clone(),
            feedback_queries: feedback.clone(),
            classifier,
            stats,
            feedback,
        }
    }
}
