use rust_i18n::t;
use warp::Filter;

use crate::{
    api::ApiClient,
    is_htmx,
    rejections::{InputError, ResultExt},
    session::Identity,
    views,
    views::export as export_views,
    with_identity, with_locale, with_state,
};

const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

pub fn route(
    api: ApiClient,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let page = warp::get()
        .and(is_htmx())
        .and(warp::path!("export"))
        .and(with_identity())
        .and(with_locale())
        .and_then(page);

    let pdf_preview = warp::post()
        .and(with_state(api))
        .and(warp::path!("pdf-preview"))
        .and(warp::multipart::form().max_length(MAX_UPLOAD_BYTES))
        .and(with_locale())
        .and_then(pdf_preview);

    page.or(pdf_preview)
}

async fn page(
    is_htmx: bool,
    identity: Identity,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(views::render(
        is_htmx,
        &t!("export.title", locale = &locale),
        export_views::export(identity, &locale),
        Some(identity),
        &locale,
    ))
}

async fn pdf_preview(
    api: ApiClient,
    form: warp::multipart::FormData,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let (file, _fields) = super::read_upload(form).await?;
    let file = file.ok_or_else(|| warp::reject::custom(InputError))?;

    let preview = api
        .pdf_preview(file.file_name, file.bytes)
        .await
        .reject("could not generate pdf preview")?;

    Ok(export_views::previews(&preview, &locale))
}
