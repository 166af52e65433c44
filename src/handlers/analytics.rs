use rust_i18n::t;
use warp::Filter;

use crate::{
    api::ApiClient, is_htmx, rejections::ResultExt, session::Identity, views,
    views::analytics as analytics_views, with_identity, with_locale, with_state,
};

pub fn route(
    api: ApiClient,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let list = warp::get()
        .and(is_htmx())
        .and(with_state(api.clone()))
        .and(warp::path!("analytics"))
        .and(with_identity())
        .and(with_locale())
        .and_then(list);

    let detail = warp::get()
        .and(is_htmx())
        .and(with_state(api))
        .and(warp::path!("analytics" / i64))
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
    let analyses = api
        .list_analyses(identity)
        .await
        .reject("could not get analyses")?;

    Ok(views::render(
        is_htmx,
        &t!("analytics.list_title", locale = &locale),
        analytics_views::list(analyses, identity, &locale),
        Some(identity),
        &locale,
    ))
}

async fn detail(
    is_htmx: bool,
    api: ApiClient,
    analysis_id: i64,
    identity: Identity,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let analysis = api
        .get_analysis(identity, analysis_id)
        .await
        .reject("could not get analysis")?;
    let report = analysis
        .report()
        .reject("analysis payload did not parse")?;

    Ok(views::render(
        is_htmx,
        &t!("analytics.detail_title", locale = &locale),
        analytics_views::report(&report, identity, &locale),
        Some(identity),
        &locale,
    ))
}
