use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, session::Identity, views::components::nav_link};

const DIFFICULTY_OPTIONS: &[(&str, &str)] = &[
    ("easy", "difficulty.easy"),
    ("medium", "difficulty.medium"),
    ("hard", "difficulty.hard"),
];

/// Quiz generation form; both roles land here, the post target carries the
/// caller identity.
pub fn generate(identity: Identity, locale: &str) -> Markup {
    html! {
        h1 { (t!("home.title", locale = locale)) }

        form hx-post=(names::generate_quiz_url(identity))
             hx-target="main"
             hx-swap="innerHTML"
             hx-encoding="multipart/form-data" {
            label {
                (t!("home.upload_label", locale = locale))
                input type="file" name="file" accept="application/pdf" required;
            }

            div.form-grid {
                label {
                    (t!("home.question_count_label", locale = locale))
                    input type="number"
                          name="questionCount"
                          min=(names::MIN_QUESTION_COUNT)
                          max=(names::MAX_QUESTION_COUNT)
                          value=(names::DEFAULT_QUESTION_COUNT);
                }
                label {
                    (t!("home.difficulty_label", locale = locale))
                    select name="difficulty" {
                        @for (value, key) in DIFFICULTY_OPTIONS {
                            option value=(value) selected[*value == names::DEFAULT_DIFFICULTY] {
                                (t!(*key, locale = locale))
                            }
                        }
                    }
                }
            }

            label {
                input type="checkbox" name="includeMultipleChoice" checked;
                (t!("home.include_mc", locale = locale))
            }
            label {
                input type="checkbox" name="includeFillInBlank";
                (t!("home.include_fib", locale = locale))
            }

            label {
                (t!("home.notes_label", locale = locale))
                textarea name="notes" rows="3" {}
            }

            button type="submit" { (t!("home.submit", locale = locale)) }
        }
    }
}

pub fn generated(quiz_id: i64, identity: Identity, locale: &str) -> Markup {
    html! {
        article.generate-ok {
            h4 { (t!("home.generated_title", locale = locale)) }
            p { (t!("home.generated_body", locale = locale, quiz_id = quiz_id)) }
            (nav_link(&names::survey_url(identity), html! {
                span role="button" { (t!("home.view_history", locale = locale)) }
            }))
        }
    }
}
