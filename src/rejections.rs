use std::convert::Infallible;

use maud::{html, Markup};
use rust_i18n::t;
use warp::{
    http::StatusCode,
    reject::{Reject, Rejection},
    reply::Reply,
};

use crate::{names, views};

macro_rules! rejects {
    ($($name:ident),*) => {
        $(
            #[derive(Debug)]
            pub struct $name;

            impl Reject for $name {}
        )*
    };
}

rejects!(ApiUnavailable, MissingIdentity, InputError);

/// Adapter from a platform API (or any other) error to a rejection. The
/// original error is logged here; the visitor only ever sees the generic
/// error page.
pub trait ResultExt<T> {
    fn reject(self, context: &'static str) -> Result<T, Rejection>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, context: &'static str) -> Result<T, Rejection> {
        self.map_err(|e| {
            tracing::error!("{context}: {e}");
            warp::reject::custom(ApiUnavailable)
        })
    }
}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message_key;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message_key = "error.not_found";
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        code = StatusCode::BAD_REQUEST;
        message_key = "error.bad_request";
    } else if let Some(ApiUnavailable) = err.find() {
        code = StatusCode::BAD_GATEWAY;
        message_key = "error.load_failed";
    } else if let Some(MissingIdentity) = err.find() {
        code = StatusCode::BAD_REQUEST;
        message_key = "error.missing_identity";
    } else if let Some(InputError) = err.find() {
        code = StatusCode::BAD_REQUEST;
        message_key = "error.bad_request";
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message_key = "error.bad_request";
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        code = StatusCode::BAD_REQUEST;
        message_key = "error.missing_identity";
    } else {
        tracing::error!("unhandled rejection: {:?}", err);
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message_key = "error.internal";
    }

    Ok(warp::reply::with_status(error_page(message_key), code))
}

fn error_page(message_key: &str) -> Markup {
    let locale = names::DEFAULT_LOCALE;
    views::page(
        &t!("error.title", locale = locale),
        html! {
            article.error-state {
                h1 { (t!("error.title", locale = locale)) }
                p { (t!(message_key, locale = locale)) }
            }
        },
        None,
        locale,
    )
}
