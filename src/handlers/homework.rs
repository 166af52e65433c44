use rust_i18n::t;
use warp::Filter;

use crate::{
    api::ApiClient, is_htmx, rejections::ResultExt, session::Identity, views,
    views::homework as homework_views, with_identity, with_locale, with_state,
};

pub fn route(
    api: ApiClient,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let list = warp::get()
        .and(is_htmx())
        .and(with_state(api.clone()))
        .and(warp::path!("HWanalytics"))
        .and(with_identity())
        .and(with_locale())
        .and_then(list);

    let detail = warp::get()
        .and(is_htmx())
        .and(with_state(api))
        .and(warp::path!("HWanalytics" / i64))
        .and(with_identity())
        .and(with_locale())
        .and_then(detail);

    list.or(detail)
}

async fn list(
    is_htmx: bool,
    api: ApiClient,
    identity: Identity,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let tno = identity
        .teacher_number()
        .ok_or_else(warp::reject::not_found)?;

    let homework = api
        .list_homework(tno)
        .await
        .reject("could not get homework")?;

    Ok(views::render(
        is_htmx,
        &t!("hw.list_title", locale = &locale),
        homework_views::list(homework, identity, &locale),
        Some(identity),
        &locale,
    ))
}

async fn detail(
    is_htmx: bool,
    api: ApiClient,
    quiz_id: i64,
    identity: Identity,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    if !identity.is_teacher() {
        return Err(warp::reject::not_found());
    }

    // Both fetches run concurrently and both must land before any chart is
    // drawn; either failure takes the whole page to the error state.
    let (report, terms) = tokio::try_join!(api.error_rates(quiz_id), api.word_cloud(quiz_id))
        .reject("could not load homework analysis")?;

    Ok(views::render(
        is_htmx,
        &t!("hw.detail_title", locale = &locale),
        homework_views::detail(
            &homework_views::HomeworkDetailData { report, terms },
            &locale,
        ),
        Some(identity),
        &locale,
    ))
}
