use crate::session::Identity;

pub const GENERATE_QUIZ_URL: &str = "/generate-quiz";
pub const ANALYZE_QUIZ_URL: &str = "/analyze-quiz";
pub const PDF_PREVIEW_URL: &str = "/pdf-preview";

/// The surrounding course system this client is launched from.
pub const COURSE_SYSTEM_BASE_URL: &str = "http://127.0.0.1:5000";

pub fn course_system_url(identity: Identity) -> String {
    match identity {
        Identity::Student { sno } => format!("{COURSE_SYSTEM_BASE_URL}/student/{sno}"),
        Identity::Teacher { tno } => format!("{COURSE_SYSTEM_BASE_URL}/teacher/{tno}"),
    }
}

pub fn home_url(identity: Identity) -> String {
    format!("/?{}", identity.query())
}

pub fn quiz_list_url(identity: Identity) -> String {
    format!("/quiz?{}", identity.query())
}

pub fn survey_url(identity: Identity) -> String {
    format!("/survey?{}", identity.query())
}

pub fn survey_quiz_url(quiz_id: i64, identity: Identity) -> String {
    format!("/survey/{quiz_id}?{}", identity.query())
}

pub fn publish_url(quiz_id: i64, identity: Identity) -> String {
    format!("/survey/{quiz_id}/publish?{}", identity.query())
}

pub fn analytics_url(identity: Identity) -> String {
    format!("/analytics?{}", identity.query())
}

pub fn analysis_url(analysis_id: i64, identity: Identity) -> String {
    format!("/analytics/{analysis_id}?{}", identity.query())
}

pub fn homework_url(identity: Identity) -> String {
    format!("/HWanalytics?{}", identity.query())
}

pub fn homework_detail_url(quiz_id: i64, identity: Identity) -> String {
    format!("/HWanalytics/{quiz_id}?{}", identity.query())
}

pub fn export_url(identity: Identity) -> String {
    format!("/export?{}", identity.query())
}

pub fn generate_quiz_url(identity: Identity) -> String {
    format!("{GENERATE_QUIZ_URL}?{}", identity.query())
}

pub fn analyze_quiz_url(identity: Identity) -> String {
    format!("{ANALYZE_QUIZ_URL}?{}", identity.query())
}

// Generate-quiz form defaults, mirrored from the platform API.
pub const MIN_QUESTION_COUNT: i64 = 5;
pub const MAX_QUESTION_COUNT: i64 = 30;
pub const DEFAULT_QUESTION_COUNT: i64 = 10;
pub const DEFAULT_DIFFICULTY: &str = "medium";

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "zh-CN";
