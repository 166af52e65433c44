use rust_i18n::t;
use warp::Filter;

use crate::{
    api::{ApiClient, GenerateQuizForm},
    is_htmx, names,
    rejections::{InputError, ResultExt},
    session::Identity,
    views,
    views::home as home_views,
    with_identity, with_locale, with_state,
};

const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

pub fn route(
    api: ApiClient,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let home = warp::get()
        .and(warp::path::end())
        .and(is_htmx())
        .and(with_identity())
        .and(with_locale())
        .and_then(home_page);

    let generate_quiz = warp::post()
        .and(with_state(api))
        .and(warp::path!("generate-quiz"))
        .and(with_identity())
        .and(warp::multipart::form().max_length(MAX_UPLOAD_BYTES))
        .and(with_locale())
        .and_then(generate_quiz);

    home.or(generate_quiz)
}

async fn home_page(
    is_htmx: bool,
    identity: Identity,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(views::render(
        is_htmx,
        &t!("home.title", locale = &locale),
        home_views::generate(identity, &locale),
        Some(identity),
        &locale,
    ))
}

async fn generate_quiz(
    api: ApiClient,
    identity: Identity,
    form: warp::multipart::FormData,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let (file, fields) = super::read_upload(form).await?;
    let file = file.ok_or_else(|| warp::reject::custom(InputError))?;

    let form = GenerateQuizForm {
        file_name: file.file_name,
        file_bytes: file.bytes,
        question_count: fields
            .get("questionCount")
            .and_then(|v| v.parse().ok())
            .unwrap_or(names::DEFAULT_QUESTION_COUNT),
        difficulty: fields
            .get("difficulty")
            .cloned()
            .unwrap_or_else(|| names::DEFAULT_DIFFICULTY.to_string()),
        include_multiple_choice: fields.contains_key("includeMultipleChoice"),
        include_fill_in_blank: fields.contains_key("includeFillInBlank"),
        notes: fields.get("notes").cloned().unwrap_or_default(),
        selected_pages: fields.get("selectedPages").cloned(),
    };

    let generated = api
        .generate_quiz(identity, form)
        .await
        .reject("could not generate quiz")?;

    Ok(views::titled(
        &t!("home.generated_title", locale = &locale),
        home_views::generated(generated.quiz_id, identity, &locale),
    ))
}
