use maud::{html, Markup, PreEscaped};
use rust_i18n::t;

use crate::{
    api::{Class, Quiz, QuizDetail, QuizDocument},
    names,
    session::Identity,
    views::components::empty_state,
    views::quizzes::{play_action, quiz_row},
};

pub fn student_history(quizzes: Vec<Quiz>, identity: Identity, locale: &str) -> Markup {
    html! {
        h1 { (t!("survey.title", locale = locale)) }

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

pub struct TeacherHistoryData {
    pub quizzes: Vec<Quiz>,
    pub classes: Vec<Class>,
}

pub fn teacher_history(data: TeacherHistoryData, identity: Identity, locale: &str) -> Markup {
    html! {
        h1 { (t!("survey.title", locale = locale)) }

        @if data.quizzes.is_empty() {
            (empty_state(
                &t!("quiz.empty_title", locale = locale),
                &t!("quiz.empty_body", locale = locale),
                &t!("quiz.empty_cta", locale = locale),
                &names::home_url(identity),
            ))
        } @else {
            @for quiz in &data.quizzes {
                (quiz_row(
                    quiz,
                    locale,
                    play_action(quiz.id, identity, locale),
                    publish_controls(quiz.id, &data.classes, identity, locale),
                ))
            }
        }
    }
}

/// Per-quiz publish control. The class selection is uncommitted page state
/// keyed by quiz id; publishing with no selection is blocked in the browser
/// and never reaches the network.
fn publish_controls(quiz_id: i64, classes: &[Class], identity: Identity, locale: &str) -> Markup {
    let alert_json =
        serde_json::to_string(&t!("publish.select_class_alert", locale = locale).to_string())
            .unwrap_or_default();
    let publish_js = format!(
        "var s=document.getElementById('class-select-{quiz_id}');\
if(!s.value){{alert({alert_json});return;}}\
htmx.ajax('POST','{url}',{{target:'#publish-status-{quiz_id}',swap:'innerHTML',values:{{cno:s.value}}}});",
        url = names::publish_url(quiz_id, identity),
    );

    html! {
        div.publish-controls {
            select id=(format!("class-select-{quiz_id}")) aria-label=(t!("publish.select_label", locale = locale)) {
                option value="" selected { (t!("publish.select_placeholder", locale = locale)) }
                @for class in classes {
                    option value=(class.cno) { (class.cname) }
                }
            }
            button.publish-button onclick=(publish_js) {
                (t!("publish.button", locale = locale))
            }
            span id=(format!("publish-status-{quiz_id}")) class="publish-status" {}
        }
    }
}

/// Fragment swapped into the row's status slot after a successful publish.
/// The list itself is not refreshed; the next full reload reflects the new
/// homework.
pub fn publish_receipt(class_id: i64, locale: &str) -> Markup {
    let alert_json = serde_json::to_string(
        &t!("publish.success_alert", locale = locale, cno = class_id).to_string(),
    )
    .unwrap_or_default();

    html! {
        span.publish-ok { (t!("publish.published_to", locale = locale, cno = class_id)) }
        (PreEscaped(format!("<script>alert({alert_json})</script>")))
    }
}

pub struct TakingData {
    pub quiz: QuizDetail,
    pub doc: QuizDocument,
}

pub fn taking(data: &TakingData, identity: Identity, locale: &str) -> Markup {
    html! {
        h1 { (data.quiz.title) }

        form hx-post=(names::analyze_quiz_url(identity)) hx-target="main" hx-swap="innerHTML" {
            input type="hidden" name="quiz_id" value=(data.quiz.id);

            @for (index, element) in data.doc.pages.iter().flat_map(|p| &p.elements).enumerate() {
                fieldset.question {
                    legend { (format!("{}. {}", index + 1, element.title)) }
                    @if element.kind == "text" || element.choices.is_empty() {
                        input type="text"
                              name=(element.name)
                              placeholder=(t!("survey.answer_placeholder", locale = locale));
                    } @else {
                        @for choice in &element.choices {
                            label {
                                input type="radio" name=(element.name) value=(choice);
                                (choice)
                            }
                        }
                    }
                }
            }

            button type="submit" { (t!("survey.submit", locale = locale)) }
        }
    }
}
