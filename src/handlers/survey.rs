use std::collections::HashMap;

use rust_i18n::t;
use warp::Filter;

use crate::{
    api::ApiClient,
    is_htmx,
    rejections::{InputError, ResultExt},
    session::Identity,
    views,
    views::survey as survey_views,
    with_identity, with_locale, with_state,
};

pub fn route(
    api: ApiClient,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let history = warp::get()
        .and(is_htmx())
        .and(with_state(api.clone()))
        .and(warp::path!("survey"))
        .and(with_identity())
        .and(with_locale())
        .and_then(history);

    let taking = warp::get()
        .and(is_htmx())
        .and(with_state(api.clone()))
        .and(warp::path!("survey" / i64))
        .and(with_identity())
        .and(with_locale())
        .and_then(taking);

    let publish = warp::post()
        .and(with_state(api.clone()))
        .and(warp::path!("survey" / i64 / "publish"))
        .and(with_identity())
        .and(warp::body::bytes())
        .and(with_locale())
        .and_then(publish);

    let analyze = warp::post()
        .and(with_state(api))
        .and(warp::path!("analyze-quiz"))
        .and(with_identity())
        .and(warp::body::form::<HashMap<String, String>>())
        .and(with_locale())
        .and_then(analyze);

    history.or(taking).or(publish).or(analyze)
}

async fn history(
    is_htmx: bool,
    api: ApiClient,
    identity: Identity,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let body = match identity {
        Identity::Student { .. } => {
            let quizzes = api
                .list_quizzes(identity)
                .await
                .reject("could not get quiz history")?;
            survey_views::student_history(quizzes, identity, &locale)
        }
        Identity::Teacher { tno } => {
            let (quizzes, classes) =
                tokio::join!(api.list_quizzes(identity), api.list_classes(tno));
            let quizzes = quizzes.reject("could not get quiz history")?;
            // A failed class fetch leaves the publish selects empty; the
            // history itself still renders.
            let classes = classes.unwrap_or_else(|e| {
                tracing::error!("could not get classes: {e}");
                Vec::new()
            });
            survey_views::teacher_history(
                survey_views::TeacherHistoryData { quizzes, classes },
                identity,
                &locale,
            )
        }
    };

    Ok(views::render(
        is_htmx,
        &t!("survey.title", locale = &locale),
        body,
        Some(identity),
        &locale,
    ))
}

async fn taking(
    is_htmx: bool,
    api: ApiClient,
    quiz_id: i64,
    identity: Identity,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let quiz = api
        .get_quiz(identity, quiz_id)
        .await
        .reject("could not get quiz")?;
    let doc = quiz.document().reject("quiz document did not parse")?;

    let title = quiz.title.clone();
    Ok(views::render(
        is_htmx,
        &title,
        survey_views::taking(&survey_views::TakingData { quiz, doc }, identity, &locale),
        Some(identity),
        &locale,
    ))
}

async fn publish(
    api: ApiClient,
    quiz_id: i64,
    identity: Identity,
    body: warp::hyper::body::Bytes,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    if !identity.is_teacher() {
        return Err(warp::reject::not_found());
    }

    let cno = parse_cno(&body).ok_or_else(|| warp::reject::custom(InputError))?;
    let receipt = api
        .publish_quiz(quiz_id, cno)
        .await
        .reject("could not publish quiz")?;

    tracing::info!("quiz {quiz_id} published to class {}", receipt.class_id);
    Ok(survey_views::publish_receipt(receipt.class_id, &locale))
}

/// The publish POST arrives urlencoded from `htmx.ajax` values, or as JSON
/// from scripted callers; the class number may be a string either way.
fn parse_cno(body: &[u8]) -> Option<i64> {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        let cno = &value["cno"];
        return cno
            .as_i64()
            .or_else(|| cno.as_str().and_then(|s| s.parse().ok()));
    }

    std::str::from_utf8(body).ok()?.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == "cno").then(|| value.parse().ok())?
    })
}

async fn analyze(
    api: ApiClient,
    identity: Identity,
    mut form: HashMap<String, String>,
    locale: String,
) -> Result<impl warp::Reply, warp::Rejection> {
    let quiz_id = form
        .remove("quiz_id")
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| warp::reject::custom(InputError))?;

    let report = api
        .analyze_quiz(identity, &form, quiz_id)
        .await
        .reject("could not analyze quiz")?;

    Ok(views::titled(
        &t!("analytics.detail_title", locale = &locale),
        views::analytics::report(&report, identity, &locale),
    ))
}
