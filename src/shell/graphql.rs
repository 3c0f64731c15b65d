use std::collections::BTreeMap;

use async_graphql::{EmptySubscription, InputObject, MergedObject, Schema, SimpleObject};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::feedback::use_cases::list_feedback::inbound::graphql::FeedbackQuery;
use crate::modules::feedback::use_cases::submit_feedback::inbound::graphql::FeedbackMutation;
use crate::modules::predictions::use_cases::classify_text::inbound::graphql::ClassifyMutation;
use crate::modules::predictions::use_cases::get_stats::inbound::graphql::StatsQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(StatsQuery, FeedbackQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ClassifyMutation, FeedbackMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// One entry of a label-to-score map; GraphQL has no map type.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct GqlLabelScore {
    pub label: String,
    pub score: f64,
}

#[derive(InputObject, Clone, Debug)]
pub struct GqlLabelScoreInput {
    pub label: String,
    pub score: f64,
}

pub fn label_scores(scores: &BTreeMap<String, f64>) -> Vec<GqlLabelScore> {
    scores
        .iter()
        .map(|(label, score)| GqlLabelScore {
            label: label.clone(),
            score: *score,
        })
        .collect()
}

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn execute(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[cfg(test)]
mod schema_tests {
    use tempfile::TempDir;

    use crate::tests::fixtures::state::make_test_state;

    use super::*;

    #[tokio::test]
    async fn it_should_predict_and_then_report_stats() {
        let workspace = TempDir::new().unwrap();
        let schema = build_schema(make_test_state(workspace.path()).await);

        let predicted = schema
            .execute(r#"mutation { predict(text: "Спасибо, удобно") { label scores { label score } } }"#)
            .await;
        assert!(predicted.errors.is_empty(), "{:?}", predicted.errors);
        let predicted = predicted.data.into_json().unwrap();
        assert_eq!(predicted["predict"]["label"], "positive");
        assert_eq!(predicted["predict"]["scores"][0]["label"], "negative");

        let stats = schema
            .execute("{ stats(limit: 5) { totalPredictions recentPredictions { text label } } }")
            .await
            .data
            .into_json()
            .unwrap();
        assert_eq!(stats["stats"]["totalPredictions"], 1);
        assert_eq!(stats["stats"]["recentPredictions"][0]["text"], "Спасибо, удобно");
    }

    #[tokio::test]
    async fn it_should_surface_validation_failures_as_errors() {
        let workspace = TempDir::new().unwrap();
        let schema = build_schema(make_test_state(workspace.path()).await);

        let response = schema
            .execute(r#"mutation { predictBatch(texts: ["хорошо", "   "]) { label } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("must not be empty"));
    }

    #[tokio::test]
    async fn it_should_submit_and_list_feedback() {
        let workspace = TempDir::new().unwrap();
        let schema = build_schema(make_test_state(workspace.path()).await);

        let submitted = schema
            .execute(
                r#"mutation {
                    submitFeedback(input: {
                        text: "Поддержка молчит",
                        predictedLabel: "neutral",
                        userLabel: "negative",
                        scores: [{ label: "neutral", score: 0.6 }]
                    }) { userLabel timestamp }
                }"#,
            )
            .await;
        assert!(submitted.errors.is_empty(), "{:?}", submitted.errors);

        let listed = schema
            .execute("{ feedback { totalItems items { text userLabel scores { label score } } } }")
            .await
            .data
            .into_json()
            .unwrap();
        assert_eq!(listed["feedback"]["totalItems"], 1);
        assert_eq!(listed["feedback"]["items"][0]["userLabel"], "negative");
        assert_eq!(listed["feedback"]["items"][0]["scores"][0]["score"], 0.6);
    }

    #[test]
    fn it_should_flatten_score_maps_in_label_order() {
        let scores = BTreeMap::from([("positive".to_string(), 0.7), ("negative".to_string(), 0.3)]);
        let flattened = label_scores(&scores);
        assert_eq!(flattened[0].label, "negative");
        assert_eq!(flattened[1].score, 0.7);
    }
}
