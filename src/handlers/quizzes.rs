use rust_i18n::t;
use warp::Filter;

use crate::{
    api::ApiClient, is_htmx, rejections::ResultExt, session::Identity, views,
    views::quizzes as quiz_views, with_identity, with_locale, with_state,
};

pub fn route(
    api: ApiClient,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::get()
        .and(is_htmx())
        .and(with_state(api))
        .and(warp::path!("quiz"))
        .and(with_identity())
        .and(with_locale())
        .and_then(quiz_list)
}

/// Student quiz list; the teacher route table has no entry for this page.
async fn quiz_list(
    is_htmx: bool,
    api: ApiClient,
    identity: Identity,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    if identity.is_teacher() {
        return Err(warp::reject::not_found());
    }

    let quizzes = api
        .list_quizzes(identity)
        .await
        .reject("could not get quizzes")?;

    Ok(views::render(
        is_htmx,
        &t!("quiz.list_title", locale = &locale),
        quiz_views::quiz_list(quizzes, identity, &locale),
        Some(identity),
        &locale,
    ))
}
