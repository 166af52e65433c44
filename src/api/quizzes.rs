use std::collections::HashMap;

use serde::Serialize;

use super::{ApiClient, ApiError, GeneratedQuiz, PublishReceipt, Quiz, QuizDetail};
use crate::session::Identity;

/// Everything the generate-quiz form carries to the platform. Field names
/// follow the platform API.
pub struct GenerateQuizForm {
    pub file_name: String,
    pub file_bytes: Vec<u8>,
    pub question_count: i64,
    pub difficulty: String,
    pub include_multiple_choice: bool,
    pub include_fill_in_blank: bool,
    pub notes: String,
    pub selected_pages: Option<String>,
}

#[derive(Serialize)]
struct PublishBody {
    cno: i64,
}

#[derive(Serialize)]
struct AnalyzeBody<'a> {
    answers: &'a HashMap<String, String>,
    quiz_id: i64,
}

impl ApiClient {
    pub async fn list_quizzes(&self, identity: Identity) -> Result<Vec<Quiz>, ApiError> {
        let (name, number) = identity.query_pair();
        self.get("/quizzes", &[(name, number.to_string())]).await
    }

    pub async fn get_quiz(
        &self,
        identity: Identity,
        quiz_id: i64,
    ) -> Result<QuizDetail, ApiError> {
        let (name, number) = identity.query_pair();
        self.get(
            &format!("/quizzes/{quiz_id}"),
            &[(name, number.to_string())],
        )
        .await
    }

    /// Publish a quiz to a class. The platform keys the new homework off the
    /// quiz id; the caller identity is not part of this request.
    pub async fn publish_quiz(
        &self,
        quiz_id: i64,
        cno: i64,
    ) -> Result<PublishReceipt, ApiError> {
        self.post_json(
            &format!("/quizzes/{quiz_id}/publish"),
            &[],
            &PublishBody { cno },
        )
        .await
    }

    pub async fn generate_quiz(
        &self,
        identity: Identity,
        form: GenerateQuizForm,
    ) -> Result<GeneratedQuiz, ApiError> {
        let file = reqwest::multipart::Part::bytes(form.file_bytes)
            .file_name(form.file_name)
            .mime_str("application/pdf")
            .map_err(ApiError::Transport)?;

        let mut multipart = reqwest::multipart::Form::new()
            .part("file", file)
            .text("questionCount", form.question_count.to_string())
            .text("difficulty", form.difficulty)
            .text(
                "includeMultipleChoice",
                form.include_multiple_choice.to_string(),
            )
            .text("includeFillInBlank", form.include_fill_in_blank.to_string())
            .text("notes", form.notes);
        if let Some(pages) = form.selected_pages {
            multipart = multipart.text("selectedPages", pages);
        }

        let (name, number) = identity.query_pair();
        self.post_multipart("/generate-quiz", &[(name, number.to_string())], multipart)
            .await
    }

    pub async fn analyze_quiz(
        &self,
        identity: Identity,
        answers: &HashMap<String, String>,
        quiz_id: i64,
    ) -> Result<super::AnalysisReport, ApiError> {
        let (name, number) = identity.query_pair();
        self.post_json(
            "/analyze-quiz",
            &[(name, number.to_string())],
            &AnalyzeBody { answers, quiz_id },
        )
        .await
    }
}
