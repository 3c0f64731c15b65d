use crate::modules::predictions::core::classifier::Classifier;
use crate::modules::predictions::core::prediction::{Classification, PredictionScores, StatsStore};
use crate::shared::core::validation::{ValidationError, input_text};
use std::sync::Arc;

/// Classifies text and records every prediction in the stats store.
pub struct ClassifyTextHandler {
    classifier: Arc<dyn Classifier>,
    stats: Arc<StatsStore>,
}

impl ClassifyTextHandler {
    pub fn new(classifier: Arc<dyn Classifier>, stats: Arc<StatsStore>) -> Self {
        Self { classifier, stats }
    }

    pub async fn handle(&self, text: &str) -> Result<Classification, ValidationError> {
        let text = input_text(text)?;
        let classification = self.classifier.classify(&text);
        self.remember(&text, &classification).await;
        Ok(classification)
    }

    /// All texts are validated before any is classified, so a bad item records nothing.
    pub async fn handle_batch(&self, texts: &[String]) -> Result<Vec<Classification>, ValidationError> {
        let texts = texts
            .iter()
            .map(|text| input_text(text))
            .collect::<Result<Vec<_>, _>>()?;
        let classifications = self.classifier.classify_batch(&texts);
        for (text, classification) in texts.iter().zip(&classifications) {
            self.remember(text, classification).await;
        }
        Ok(classifications)
    }

    async fn remember(&self, text: &str, classification: &Classification) {
        self.stats
            .record(
                text,
                classification.label.clone(),
                PredictionScores(classification.scores.clone()),
            )
            .await;
    }
}
