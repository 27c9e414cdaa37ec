//! Module quiz endpoints.

use axum::extract::{Path, State};
use axum::Json;
use onboardpro_core::error::CoreError;
use onboardpro_core::quiz::{QuizAttempt, ScoreReport};
use onboardpro_core::types::EntityId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::rbac::{RequireAuth, RequireTrainee};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A question as shown to the learner: no answer key.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizView {
    pub module_id: EntityId,
    pub questions: Vec<QuestionView>,
}

/// One entry per question, `null` where unanswered.
#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<Option<usize>>,
}

#[derive(Debug, Serialize)]
pub struct QuizResult {
    #[serde(flatten)]
    pub report: ScoreReport,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/modules/{id}/quiz
pub async fn get_quiz(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(module_id): Path<String>,
) -> AppResult<Json<DataResponse<QuizView>>> {
    let quiz = state.catalog.quiz_for(&module_id).await?;
    let questions = quiz
        .into_iter()
        .enumerate()
        .map(|(index, q)| QuestionView {
            index,
            prompt: q.prompt,
            options: q.options,
        })
        .collect();

    Ok(Json(DataResponse {
        data: QuizView {
            module_id,
            questions,
        },
    }))
}

/// POST /api/v1/trainee/modules/{id}/quiz
///
/// Score a full set of answers. Any unanswered question fails the whole
/// submission with 422 and the list of unanswered indices.
pub async fn submit_quiz(
    RequireTrainee(user): RequireTrainee,
    State(state): State<AppState>,
    Path(module_id): Path<String>,
    Json(input): Json<QuizSubmission>,
) -> AppResult<Json<DataResponse<QuizResult>>> {
    let quiz = state.catalog.quiz_for(&module_id).await?;

    if input.answers.len() != quiz.len() {
        return Err(CoreError::Validation(format!(
            "Expected {} answers, got {}",
            quiz.len(),
            input.answers.len()
        ))
        .into());
    }

    let mut attempt = QuizAttempt::new(&quiz);
    for (question, answer) in input.answers.iter().enumerate() {
        if let Some(option) = answer {
            attempt.select(question, *option)?;
        }
    }
    let report = attempt.submit()?;

    tracing::info!(
        user_id = %user.identity.id,
        module_id = %module_id,
        correct = report.correct_count,
        total = report.total_count,
        remark = ?report.remark,
        "Quiz submitted"
    );

    Ok(Json(DataResponse {
        data: QuizResult {
            message: report.remark.message(),
            report,
        },
    }))
}
