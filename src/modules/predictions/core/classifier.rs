// Classifier port.
//
// The scoring model is swappable; the service only relies on this contract:
// scores cover `labels()`, sum to roughly 1.0, and `label` is their arg-max.

use crate::modules::predictions::core::prediction::{Classification, Scores};

pub trait Classifier: Send + Sync {
    fn name(&self) -> &str;

    fn labels(&self) -> &[String];

    fn classify(&self, text: &str) -> Classification;

    fn classify_batch(&self, texts: &[String]) -> Vec<Classification> {
        texts.iter().map(|text| self.classify(text)).collect()
    }
}

/// Picks the highest score; ties go to the label listed first in `order`.
pub fn arg_max(order: &[String], scores: &Scores) -> Option<String> {
    order
        .iter()
        .filter_map(|label| scores.get(label).map(|score| (label, *score)))
        .fold(None::<(&String, f64)>, |best, (label, score)| match best {
            Some((_, top)) if top >= score => best,
            _ => Some((label, score)),
        })
        .map(|(label, _)| label.clone())
}
