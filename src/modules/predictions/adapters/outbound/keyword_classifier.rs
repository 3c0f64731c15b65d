// Keyword-based classifier used when no trained model is wired in.
//
// Counts positive and negative keyword hits in the lower-cased text and turns
// them into normalised scores over negative, neutral, positive.

use crate::modules::predictions::core::classifier::{Classifier, arg_max};
use crate::modules::predictions::core::prediction::{Classification, Scores};

const POSITIVE_KEYWORDS: &[&str] = &[
    "нравится",
    "спасибо",
    "удобно",
    "люблю",
    "хорошо",
    "стабильно",
    "отремонтирована",
];

const NEGATIVE_KEYWORDS: &[&str] = &[
    "ужас",
    "плохо",
    "вылетает",
    "невозможно",
    "запутался",
    "молчит",
    "устаревшая",
    "ошибка",
    "проблема",
];

const NO_SIGNAL: [f64; 3] = [0.2, 0.6, 0.2];

pub struct KeywordClassifier {
    labels: Vec<String>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self {
            labels: ["negative", "neutral", "positive"].map(String::from).to_vec(),
        }
    }

    fn probabilities(text: &str) -> [f64; 3] {
        let lowered = text.to_lowercase();
        let hits = |keywords: &[&str]| keywords.iter().filter(|k| lowered.contains(*k)).count();
        let positive = hits(POSITIVE_KEYWORDS) as f64;
        let negative = hits(NEGATIVE_KEYWORDS) as f64;
        let total = positive + negative;
        if total == 0.0 {
            return NO_SIGNAL;
        }

        let negative = negative / total;
        let positive = positive / total;
        let neutral = (1.0 - (negative + positive) / 2.0).max(0.0);
        let sum = negative + neutral + positive;
        if sum == 0.0 {
            return [1.0 / 3.0; 3];
        }
        [negative / sum, neutral / sum, positive / sum]
    }
}

impl Classifier for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword-fallback"
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn classify(&self, text: &str) -> Classification {
        let scores: Scores = self
            .labels
            .iter()
            .cloned()
            .zip(Self::probabilities(text))
            .collect();
        let label = arg_max(&self.labels, &scores).unwrap_or_else(|| self.labels[1].clone());
        Classification { label, scores }
    }
}
