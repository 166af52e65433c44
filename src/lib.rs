rust_i18n::i18n!("locales", fallback = "zh-CN");

pub mod api;
pub mod handlers;
pub mod names;
pub mod rejections;
pub mod session;
pub mod statics;
pub mod utils;
pub mod views;

use warp::Filter;

use crate::{api::ApiClient, rejections::MissingIdentity, session::Identity};

pub fn routes(
    api: ApiClient,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    handlers::home::route(api.clone())
        .or(handlers::quizzes::route(api.clone()))
        .or(handlers::survey::route(api.clone()))
        .or(handlers::analytics::route(api.clone()))
        .or(handlers::homework::route(api.clone()))
        .or(handlers::export::route(api))
}

pub fn with_state(
    api: ApiClient,
) -> impl Filter<Extract = (ApiClient,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || api.clone())
}

/// Whether the request came from an htmx in-page swap (`HX-Request` header).
pub fn is_htmx() -> impl Filter<Extract = (bool,), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>("hx-request").map(|v: Option<String>| {
        v.as_deref().is_some_and(|v| v == "true")
    })
}

/// Resolves the caller identity from the query string. The identity policy is
/// strict: a request carrying neither `tno` nor `sno` is rejected before any
/// platform API call is made.
pub fn with_identity() -> impl Filter<Extract = (Identity,), Error = warp::Rejection> + Clone {
    warp::query::<session::IdentityQuery>().and_then(|q: session::IdentityQuery| async move {
        Identity::from_query(q).ok_or_else(|| warp::reject::custom(MissingIdentity))
    })
}

/// Display locale, read from the `lang` cookie. The product UI defaults to
/// Simplified Chinese.
pub fn with_locale() -> impl Filter<Extract = (String,), Error = warp::Rejection> + Clone {
    warp::header::optional::<String>("cookie").map(|header: Option<String>| {
        header
            .as_deref()
            .and_then(cookie_value)
            .and_then(match_supported_locale)
            .unwrap_or(names::DEFAULT_LOCALE)
            .to_string()
    })
}

fn cookie_value(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == names::LOCALE_COOKIE_NAME).then_some(value)
    })
}

fn match_supported_locale(raw: &str) -> Option<&'static str> {
    match raw {
        "en" => Some("en"),
        "zh-CN" => Some("zh-CN"),
        _ => None,
    }
}
