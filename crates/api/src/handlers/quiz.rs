//! Handlers for the career recommendation quiz (`/quiz`).
//!
//! Both endpoints are public; the quiz is offered before sign-up.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use careerpath_core::quiz::{parse_answers, questions, score_answers, QuizOutcome};
use careerpath_db::models::career_path::CareerPath;
use careerpath_db::repositories::CareerPathRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /quiz`: one answer (`A`-`D`) per question, in order.
#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizResult {
    #[serde(flatten)]
    pub outcome: QuizOutcome,
    /// Seeded paths whose names match the recommended categories.
    pub recommended_paths: Vec<CareerPath>,
}

// ---------------------------------------------------------------------------
// GET /quiz/questions
// ---------------------------------------------------------------------------

pub async fn get_questions() -> impl IntoResponse {
    Json(DataResponse { data: questions() })
}

// ---------------------------------------------------------------------------
// POST /quiz
// ---------------------------------------------------------------------------

/// Score a submission. Missing, blank or out-of-range answers are rejected
/// with 400 before scoring.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<QuizSubmission>,
) -> AppResult<impl IntoResponse> {
    let answers = parse_answers(&input.answers)?;
    let outcome = score_answers(&answers);

    let names: Vec<&str> = outcome.recommended.iter().map(|c| c.label()).collect();
    let recommended_paths = CareerPathRepo::find_by_names(&state.pool, &names).await?;

    tracing::debug!(
        top_score = outcome.top_score,
        recommended = ?names,
        "Quiz scored"
    );

    Ok(Json(DataResponse {
        data: QuizResult {
            outcome,
            recommended_paths,
        },
    }))
}
