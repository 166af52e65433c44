use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    api::Quiz,
    names,
    session::Identity,
    utils,
    views::components::{difficulty_chip, empty_state, nav_link, question_count_chip},
};

pub fn quiz_list(quizzes: Vec<Quiz>, identity: Identity, locale: &str) -> Markup {
    html! {
        h1 { (t!("quiz.list_title", locale = locale)) }

        @if quizzes.is_empty() {
            (empty_state(
                &t!("quiz.empty_title", locale = locale),
                &t!("quiz.empty_body", locale = locale),
                &t!("quiz.empty_cta", locale = locale),
                &names::home_url(identity),
            ))
        } @else {
            @for quiz in &quizzes {
                (quiz_row(quiz, locale, play_action(quiz.id, identity, locale), html! {}))
            }
        }
    }
}

/// One quiz entry; `actions` is the per-row navigation (play, ...) and
/// `footer` any extra controls (the teacher page's publish row) supplied by
/// the surrounding page.
pub fn quiz_row(quiz: &Quiz, locale: &str, actions: Markup, footer: Markup) -> Markup {
    html! {
        article.quiz-row {
            header.quiz-row-header {
                h5 { (quiz.title) }
                div.quiz-row-actions { (actions) }
            }
            p.quiz-row-meta {
                (t!("quiz.file_label", locale = locale)) ": " (quiz.file_name)
            }
            p.quiz-row-meta {
                (t!("quiz.created_label", locale = locale)) ": "
                (utils::format_datetime(&quiz.created_at))
            }
            div.quiz-row-chips {
                (question_count_chip(quiz.question_count, locale))
                (difficulty_chip(quiz.difficulty, locale))
            }
            (footer)
        }
    }
}

pub fn play_action(quiz_id: i64, identity: Identity, locale: &str) -> Markup {
    nav_link(&names::survey_quiz_url(quiz_id, identity), html! {
        span role="button" title=(t!("quiz.start", locale = locale)) { "\u{25B6}" }
    })
}
