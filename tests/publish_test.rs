mod common;

use common::{app, client, spawn_stub};
use serde_json::json;
use warp::{http::StatusCode, Filter, Reply};

fn teacher_stub() -> impl Filter<Extract = (warp::reply::Response,), Error = warp::Rejection> + Clone
{
    let quizzes = warp::path!("quizzes").map(|| {
        warp::reply::json(&json!([{
            "id": 7,
            "title": "几何测验",
            "file_name": "geometry.pdf",
            "created_at": "2024-03-05T09:30:00Z",
            "question_count": 8,
            "difficulty": "medium"
        }]))
        .into_response()
    });

    let classes = warp::path!("classes").map(|| {
        warp::reply::json(&json!([
            {"cno": 3, "cname": "三年二班"},
            {"cno": 4, "cname": "三年三班"}
        ]))
        .into_response()
    });

    let publish = warp::post()
        .and(warp::path!("quizzes" / i64 / "publish"))
        .and(warp::body::json::<serde_json::Value>())
        .map(|quiz_id: i64, body: serde_json::Value| {
            warp::reply::json(&json!({
                "success": true,
                "message": "测验发布成功",
                "quiz_id": quiz_id,
                "class_id": body["cno"]
            }))
            .into_response()
        });

    quizzes.or(classes).unify().or(publish).unify()
}

#[tokio::test]
async fn teacher_history_renders_publish_controls_with_client_side_guard() {
    let stub = spawn_stub(teacher_stub()).await;
    let app = app(client(&stub));

    let resp = warp::test::request().path("/survey?tno=9").reply(&app).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(&resp);
    assert!(body.contains("class-select-7"));
    assert!(body.contains("三年二班"));
    assert!(body.contains("三年三班"));
    // The no-selection guard is a blocking alert wired into the button; it
    // fires before any request is issued.
    assert!(body.contains("请选择一个班级后再发布测验"));
    assert!(body.contains("publish-status-7"));
    // Play action still carries the teacher identity.
    assert!(body.contains("/survey/7?tno=9"));

    assert!(stub.saw_request("/quizzes?tno=9"));
    assert!(stub.saw_request("/classes?tno=9"));
}

#[tokio::test]
async fn publish_forwards_the_class_and_echoes_it_back() {
    let stub = spawn_stub(teacher_stub()).await;
    let app = app(client(&stub));

    let resp = warp::test::request()
        .method("POST")
        .path("/survey/7/publish?tno=9")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("cno=3")
        .reply(&app)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = common::body_text(&resp);
    assert!(body.contains("已发布至班级 3"));
    assert!(body.contains("测验发布成功！班级编号: 3"));

    assert!(stub.saw_request("/quizzes/7/publish"));
}

#[tokio::test]
async fn publish_accepts_a_json_body_too() {
    let stub = spawn_stub(teacher_stub()).await;
    let app = app(client(&stub));

    let resp = warp::test::request()
        .method("POST")
        .path("/survey/7/publish?tno=9")
        .header("content-type", "application/json")
        .body(r#"{"cno":"4"}"#)
        .reply(&app)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(common::body_text(&resp).contains("已发布至班级 4"));
}

#[tokio::test]
async fn publish_without_a_class_is_rejected_without_reaching_the_platform() {
    let stub = spawn_stub(teacher_stub()).await;
    let app = app(client(&stub));

    let resp = warp::test::request()
        .method("POST")
        .path("/survey/7/publish?tno=9")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("cno=")
        .reply(&app)
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(stub.hit_count(), 0);
}

#[tokio::test]
async fn students_cannot_publish() {
    let stub = spawn_stub(teacher_stub()).await;
    let app = app(client(&stub));

    let resp = warp::test::request()
        .method("POST")
        .path("/survey/7/publish?sno=1")
        .header("content-type", "application/x-www-form-urlencoded")
        .body("cno=3")
        .reply(&app)
        .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(stub.hit_count(), 0);
}
