use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    api::{AnalysisReport, AnalysisSummary},
    names,
    session::Identity,
    utils,
    views::components::{empty_state, nav_link, pie_chart, pie_slices},
};

pub fn list(analyses: Vec<AnalysisSummary>, identity: Identity, locale: &str) -> Markup {
    html! {
        h1 { (t!("analytics.list_title", locale = locale)) }

        @if analyses.is_empty() {
            (empty_state(
                &t!("analytics.empty_title", locale = locale),
                &t!("analytics.empty_body", locale = locale),
                &t!("quiz.empty_cta", locale = locale),
                &names::home_url(identity),
            ))
        } @else {
            @for analysis in &analyses {
                article.analysis-row {
                    header.quiz-row-header {
                        h5 { (analysis.quiz_title) }
                        div.quiz-row-actions {
                            (nav_link(&names::analysis_url(analysis.id, identity), html! {
                                span role="button" title=(t!("analytics.view", locale = locale)) {
                                    (t!("analytics.view", locale = locale))
                                }
                            }))
                        }
                    }
                    @if let Some(file_name) = &analysis.file_name {
                        p.quiz-row-meta {
                            (t!("quiz.file_label", locale = locale)) ": " (file_name)
                        }
                    }
                    p.quiz-row-meta {
                        (t!("quiz.created_label", locale = locale)) ": "
                        (utils::format_datetime(&analysis.created_at))
                    }
                    div.quiz-row-chips {
                        span."chip chip-secondary" { (t!("analytics.report_chip", locale = locale)) }
                    }
                }
            }
        }
    }
}

/// Analysis report body, shared by the analysis-detail page and the page
/// rendered right after a quiz submission.
pub fn report(report: &AnalysisReport, identity: Identity, locale: &str) -> Markup {
    html! {
        h1 { (t!("analytics.detail_title", locale = locale)) }

        article {
            table {
                tbody {
                    tr {
                        td { (t!("analytics.total_questions", locale = locale)) }
                        td { strong { (report.total_questions) } }
                    }
                    tr {
                        td { (t!("analytics.correct_count", locale = locale)) }
                        td { strong { (report.correct_count) } }
                    }
                    tr {
                        td { (t!("analytics.incorrect_count", locale = locale)) }
                        td { strong { (report.incorrect_count) } }
                    }
                }
            }
        }

        @if report.total_questions > 0 {
            article {
                h4 { (t!("analytics.accuracy", locale = locale)) }
                @let correct = report.correct_count as f64 / report.total_questions as f64;
                (pie_chart(
                    "accuracy-pie",
                    [
                        &t!("analytics.pie_incorrect", locale = locale),
                        &t!("analytics.pie_correct", locale = locale),
                    ],
                    pie_slices(1.0 - correct),
                ))
            }
        }

        @if !report.incorrect_questions.is_empty() {
            article {
                h4 { (t!("analytics.incorrect_title", locale = locale)) }
                @for question in &report.incorrect_questions {
                    div.incorrect-question {
                        p { strong { (question.question.as_deref().unwrap_or("-")) } }
                        p {
                            (t!("analytics.your_answer", locale = locale)) ": "
                            (answer_text(&question.user_answer))
                        }
                        p {
                            (t!("analytics.correct_answer", locale = locale)) ": "
                            (answer_text(&question.correct_answer))
                        }
                    }
                }
            }
        }

        article {
            h4 { (t!("analytics.knowledge_title", locale = locale)) }
            div.analysis-text { (report.knowledge_analysis) }
        }

        div.page-footer {
            (nav_link(&names::analytics_url(identity), html! {
                span role="button" { (t!("analytics.back_to_list", locale = locale)) }
            }))
        }
    }
}

/// Answers arrive as a string or a list depending on the question type.
fn answer_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
