use serde::Deserialize;

/// A generated quiz as listed for a student or a teacher.
#[derive(Debug, Clone, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub file_name: String,
    pub created_at: String,
    pub question_count: i64,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other,
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other,
        }
    }
}

/// One quiz fetched by id, question document included.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizDetail {
    pub id: i64,
    pub title: String,
    pub quiz_json: String,
}

impl QuizDetail {
    /// The question document is stored by the platform as a JSON string
    /// inside the quiz record.
    pub fn document(&self) -> Result<QuizDocument, serde_json::Error> {
        serde_json::from_str(&self.quiz_json)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizDocument {
    #[serde(default)]
    pub pages: Vec<QuizPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizPage {
    #[serde(default)]
    pub elements: Vec<QuizElement>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub choices: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Class {
    pub cno: i64,
    pub cname: String,
}

/// A quiz instance published to a class, tracked separately from the
/// originating quiz template.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    pub id: i64,
    pub qid: i64,
    pub cname: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSummary {
    pub id: i64,
    pub quiz_id: i64,
    pub created_at: String,
    pub quiz_title: String,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisDetail {
    pub id: i64,
    pub quiz_id: i64,
    pub created_at: String,
    pub analysis_json: String,
}

impl AnalysisDetail {
    pub fn report(&self) -> Result<AnalysisReport, serde_json::Error> {
        serde_json::from_str(&self.analysis_json)
    }
}

/// Server-computed result of one quiz submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub total_questions: i64,
    pub correct_count: i64,
    pub incorrect_count: i64,
    #[serde(default)]
    pub incorrect_questions: Vec<IncorrectQuestion>,
    pub knowledge_analysis: String,
    #[serde(default)]
    pub error_index: Option<String>,
    // Present when the platform persisted the analysis.
    #[serde(rename = "analysis_id", default)]
    pub analysis_id: Option<i64>,
}

/// Answers may be a single string or a list, depending on the question type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncorrectQuestion {
    pub question: Option<String>,
    #[serde(default)]
    pub user_answer: serde_json::Value,
    #[serde(default)]
    pub correct_answer: serde_json::Value,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Aggregate and per-question incorrect-answer proportions for one quiz.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorRateReport {
    pub error_rate: f64,
    pub question_error_rates: Vec<QuestionErrorRate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionErrorRate {
    pub question: i64,
    #[serde(rename = "correctRate")]
    pub correct_rate: f64,
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct WordCloudEntry {
    pub text: String,
    pub value: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedQuiz {
    pub success: bool,
    pub quiz_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishReceipt {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub quiz_id: i64,
    pub class_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfPreview {
    pub success: bool,
    #[serde(default)]
    pub previews: Vec<String>,
    pub total_pages: i64,
}
