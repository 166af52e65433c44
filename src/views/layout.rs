use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, session::Identity, utils, views::components::nav_link};

const PICO_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
const HTMX_URL: &str = "https://unpkg.com/htmx.org@1.9.12/dist/htmx.min.js";

fn css() -> Markup {
    html! {
        link rel="stylesheet" href=(PICO_CSS_URL);
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src=(HTMX_URL) {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(identity: Option<Identity>, locale: &str) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        @if let Some(id) = identity {
                            a href=(names::home_url(id)) { strong { "AutoQuiz" } }
                        } @else {
                            a href="/" { strong { "AutoQuiz" } }
                        }
                    }
                }
                @if let Some(id) = identity {
                    @if id.is_teacher() {
                        ul {
                            li { (nav_link(&names::home_url(id), html! { (t!("nav.generate", locale = locale)) })) }
                            li { (nav_link(&names::survey_url(id), html! { (t!("nav.history", locale = locale)) })) }
                            li { (nav_link(&names::homework_url(id), html! { (t!("nav.hw_analytics", locale = locale)) })) }
                            li { (nav_link(&names::export_url(id), html! { (t!("nav.export", locale = locale)) })) }
                            li { a href=(names::course_system_url(id)) { (t!("nav.course_system", locale = locale)) } }
                        }
                    } @else {
                        ul {
                            li { (nav_link(&names::home_url(id), html! { (t!("nav.home", locale = locale)) })) }
                            li { (nav_link(&names::quiz_list_url(id), html! { (t!("nav.view_quizzes", locale = locale)) })) }
                            li { (nav_link(&names::survey_url(id), html! { (t!("nav.view_homework", locale = locale)) })) }
                            li { (nav_link(&names::analytics_url(id), html! { (t!("nav.analytics", locale = locale)) })) }
                            li { (nav_link(&names::export_url(id), html! { (t!("nav.export", locale = locale)) })) }
                            li { a href=(names::course_system_url(id)) { (t!("nav.course_system", locale = locale)) } }
                        }
                    }
                } @else {
                    ul {
                        li."secondary" { (utils::VERSION) }
                    }
                }
            }
        }
    }
}

fn main(body: Markup, locale: &str) -> Markup {
    html! {
        div #loading-indicator .htmx-indicator {
            span aria-busy="true" { (t!("loading.label", locale = locale)) }
        }
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, identity: Option<Identity>, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())
            (icon())

            title { (format!("{title} - AutoQuiz")) }
        }

        body."container" hx-indicator="#loading-indicator" {
            (header(identity, locale))
            (main(body, locale))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - AutoQuiz" }
        (body)
    }
}

pub fn render(
    is_htmx: bool,
    title: &str,
    body: Markup,
    identity: Option<Identity>,
    locale: &str,
) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, identity, locale)
    }
}
