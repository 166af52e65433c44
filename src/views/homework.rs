use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    api::{ErrorRateReport, Homework, WordCloudEntry},
    names,
    session::Identity,
    views::components::{empty_state, line_chart, line_points, nav_link, pie_chart, pie_slices, word_cloud},
};

pub fn list(homework: Vec<Homework>, identity: Identity, locale: &str) -> Markup {
    html! {
        h1 { (t!("hw.list_title", locale = locale)) }

        @if homework.is_empty() {
            (empty_state(
                &t!("hw.empty_title", locale = locale),
                &t!("hw.empty_body", locale = locale),
                &t!("quiz.empty_cta", locale = locale),
                &names::home_url(identity),
            ))
        } @else {
            @for entry in &homework {
                article.homework-row {
                    header.quiz-row-header {
                        h5 { (entry.cname) }
                        div.quiz-row-actions {
                            (nav_link(&names::homework_detail_url(entry.qid, identity), html! {
                                span role="button" title=(t!("analytics.view", locale = locale)) {
                                    (t!("analytics.view", locale = locale))
                                }
                            }))
                        }
                    }
                    p.quiz-row-meta {
                        (t!("hw.name_label", locale = locale)) ": " (entry.title)
                    }
                    div.quiz-row-chips {
                        span."chip chip-secondary" { (t!("analytics.report_chip", locale = locale)) }
                    }
                }
            }
        }
    }
}

pub struct HomeworkDetailData {
    pub report: ErrorRateReport,
    pub terms: Vec<WordCloudEntry>,
}

/// Charts render only once both the error-rate report and the word-cloud
/// terms have arrived; a failed fetch of either never reaches this view.
pub fn detail(data: &HomeworkDetailData, locale: &str) -> Markup {
    let (labels, values) = line_points(&data.report.question_error_rates);

    html! {
        h1 { (t!("hw.detail_title", locale = locale)) }

        article {
            h4 { (t!("hw.overall_title", locale = locale)) }
            (pie_chart(
                "error-rate-pie",
                [
                    &t!("analytics.pie_incorrect", locale = locale),
                    &t!("analytics.pie_correct", locale = locale),
                ],
                pie_slices(data.report.error_rate),
            ))
        }

        article {
            h4 { (t!("hw.per_question_title", locale = locale)) }
            (line_chart(
                "question-rate-line",
                &labels,
                &values,
                &t!("hw.line_series", locale = locale),
            ))
        }

        article {
            h4 { (t!("hw.cloud_title", locale = locale)) }
            (word_cloud(&data.terms))
        }
    }
}
