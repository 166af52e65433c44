mod common;

use common::{app, client, offline_client, spawn_stub};
use serde_json::json;
use warp::{http::StatusCode, Filter, Reply};

fn algebra_stub() -> impl Filter<Extract = (warp::reply::Response,), Error = warp::Rejection> + Clone
{
    warp::path!("quizzes").map(|| {
        warp::reply::json(&json!([{
            "id": 1,
            "title": "Algebra",
            "file_name": "a.pdf",
            "created_at": "2024-01-01T10:00:00Z",
            "question_count": 5,
            "difficulty": "easy"
        }]))
        .into_response()
    })
}

#[tokio::test]
async fn quiz_list_renders_row_chips_and_play_link() {
    let stub = spawn_stub(algebra_stub()).await;
    let app = app(client(&stub));

    let resp = warp::test::request().path("/quiz?sno=42").reply(&app).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(&resp);
    assert!(body.contains("Algebra"));
    assert!(body.contains("5题"));
    assert!(body.contains("简单"));
    assert!(body.contains("/survey/1?sno=42"));
    assert!(body.contains("2024-01-01 10:00"));

    assert!(stub.saw_request("/quizzes?sno=42"));
}

#[tokio::test]
async fn empty_quiz_list_renders_call_to_action() {
    let stub = spawn_stub(
        warp::path!("quizzes").map(|| warp::reply::json(&json!([])).into_response()),
    )
    .await;
    let app = app(client(&stub));

    let resp = warp::test::request().path("/quiz?sno=42").reply(&app).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(&resp);
    assert!(body.contains("暂无测验历史"));
    assert!(body.contains("创建测验"));
    assert!(!body.contains("quiz-row-header"));
}

#[tokio::test]
async fn missing_identity_shows_error_without_any_outbound_request() {
    let stub = spawn_stub(algebra_stub()).await;
    let app = app(client(&stub));

    let resp = warp::test::request().path("/quiz").reply(&app).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = common::body_text(&resp);
    assert!(body.contains("缺少身份参数"));
    assert_eq!(stub.hit_count(), 0);
}

#[tokio::test]
async fn upstream_failure_renders_the_error_state() {
    let stub = spawn_stub(warp::path!("quizzes").map(|| {
        warp::reply::with_status("boom", StatusCode::INTERNAL_SERVER_ERROR).into_response()
    }))
    .await;
    let app = app(client(&stub));

    let resp = warp::test::request().path("/quiz?sno=42").reply(&app).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = common::body_text(&resp);
    assert!(body.contains("无法加载数据"));
}

#[tokio::test]
async fn unreachable_platform_renders_the_error_state() {
    let app = app(offline_client());

    let resp = warp::test::request().path("/quiz?sno=42").reply(&app).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert!(common::body_text(&resp).contains("无法加载数据"));
}

#[tokio::test]
async fn teacher_has_no_student_quiz_page() {
    let stub = spawn_stub(algebra_stub()).await;
    let app = app(client(&stub));

    let resp = warp::test::request().path("/quiz?tno=9").reply(&app).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
