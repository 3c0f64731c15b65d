use async_graphql::{Context, InputObject, Object, Result as GqlResult};

use crate::modules::feedback::use_cases::list_feedback::inbound::graphql::GqlFeedbackEntry;
use crate::modules::feedback::use_cases::submit_feedback::command::SubmitFeedback;
use crate::shell::graphql::GqlLabelScoreInput;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct GqlFeedbackInput {
    pub text: String,
    pub predicted_label: String,
    pub user_label: Option<String>,
    pub scores: Option<Vec<GqlLabelScoreInput>>,
    pub notes: Option<String>,
}

impl From<GqlFeedbackInput> for SubmitFeedback {
    fn from(input: GqlFeedbackInput) -> Self {
        Self {
            text: input.text,
            predicted_label: input.predicted_label,
            user_label: input.user_label,
            scores: input
                .scores
                .map(|scores| scores.into_iter().map(|s| (s.label, s.score)).collect()),
            notes: input.notes,
        }
    }
}

#[derive(Default)]
pub struct FeedbackMutation;

#[Object]
impl FeedbackMutation {
    async fn submit_feedback(
        &self,
        context: &Context<'_>,
        input: GqlFeedbackInput,
    ) -> GqlResult<GqlFeedbackEntry> {
        let state = context.data_unchecked::<AppState>();
        let entry = state.feedback_handler.handle(input.into()).await?;
        Ok(entry.into())
    }
}
