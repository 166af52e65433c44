mod common;

use autoquiz::{api::ApiError, session::Identity};
use common::{client, offline_client, spawn_stub};
use serde_json::json;
use warp::{http::StatusCode, Filter, Reply};

#[tokio::test]
async fn classes_decode_into_typed_records_with_the_teacher_param() {
    let stub = spawn_stub(warp::path!("classes").map(|| {
        warp::reply::json(&json!([
            {"cno": 3, "cname": "三年二班"},
            {"cno": 4, "cname": "三年三班"}
        ]))
        .into_response()
    }))
    .await;

    let classes = client(&stub).list_classes(5).await.expect("classes");

    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].cno, 3);
    assert_eq!(classes[0].cname, "三年二班");
    assert!(stub.saw_request("/classes?tno=5"));
}

#[tokio::test]
async fn analyses_path_branches_on_the_role() {
    let stub = spawn_stub(
        warp::path!("analyses")
            .map(|| warp::reply::json(&json!([])).into_response())
            .or(warp::path!("teacher_analyses")
                .map(|| warp::reply::json(&json!([])).into_response()))
            .unify(),
    )
    .await;
    let api = client(&stub);

    api.list_analyses(Identity::Student { sno: 42 })
        .await
        .expect("student analyses");
    assert!(stub.saw_request("/analyses?sno=42"));

    api.list_analyses(Identity::Teacher { tno: 9 })
        .await
        .expect("teacher analyses");
    assert!(stub.saw_request("/teacher_analyses?tno=9"));
}

#[tokio::test]
async fn a_non_2xx_answer_is_a_status_error() {
    let stub = spawn_stub(warp::any().and_then(|| async {
        Ok::<_, warp::Rejection>(
            warp::reply::with_status("boom", StatusCode::INTERNAL_SERVER_ERROR).into_response(),
        )
    }))
    .await;

    let err = client(&stub).error_rates(1).await.expect_err("must fail");

    match err {
        ApiError::Status { status, path } => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(path, "/error-rates/1");
        }
        other => panic!("expected a status error, got: {other}"),
    }
}

#[tokio::test]
async fn a_payload_that_misses_the_schema_is_a_decode_error() {
    let stub = spawn_stub(
        warp::path!("error-rates" / i64)
            .map(|_: i64| warp::reply::json(&json!({"unexpected": true})).into_response()),
    )
    .await;

    let err = client(&stub).error_rates(1).await.expect_err("must fail");

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn an_unreachable_platform_is_a_transport_error() {
    let err = offline_client()
        .list_quizzes(Identity::Student { sno: 1 })
        .await
        .expect_err("must fail");

    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn quiz_detail_parses_its_embedded_question_document() {
    let quiz_json = json!({
        "pages": [{
            "elements": [
                {
                    "type": "radiogroup",
                    "name": "question1",
                    "title": "1 + 1 = ?",
                    "choices": ["1", "2", "3"],
                    "correctAnswer": "2"
                },
                {
                    "type": "text",
                    "name": "question2",
                    "title": "说明你的推导过程。"
                }
            ]
        }]
    })
    .to_string();

    let stub = spawn_stub(warp::path!("quizzes" / i64).map(move |id: i64| {
        warp::reply::json(&json!({
            "id": id,
            "title": "Algebra",
            "quiz_json": quiz_json.clone(),
            "question_count": 2,
            "difficulty": "easy",
            "created_at": "2024-01-01T10:00:00Z"
        }))
        .into_response()
    }))
    .await;

    let quiz = client(&stub)
        .get_quiz(Identity::Student { sno: 42 }, 1)
        .await
        .expect("quiz");
    let doc = quiz.document().expect("document");

    let elements: Vec<_> = doc.pages.iter().flat_map(|p| &p.elements).collect();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].kind, "radiogroup");
    assert_eq!(elements[0].choices, vec!["1", "2", "3"]);
    assert_eq!(elements[1].kind, "text");
    assert!(elements[1].choices.is_empty());
    assert!(stub.saw_request("/quizzes/1?sno=42"));
}

#[tokio::test]
async fn analyze_quiz_posts_answers_with_the_identity_attached() {
    let stub = spawn_stub(
        warp::post()
            .and(warp::path!("analyze-quiz"))
            .and(warp::body::json::<serde_json::Value>())
            .map(|body: serde_json::Value| {
                assert_eq!(body["quiz_id"], 7);
                let correct = if body["answers"]["question1"] == "2" { 1 } else { 0 };
                warp::reply::json(&json!({
                    "totalQuestions": 1,
                    "correctCount": correct,
                    "incorrectCount": 1 - correct,
                    "incorrectQuestions": [],
                    "knowledgeAnalysis": "恭喜！您回答了所有问题正确。",
                    "errorIndex": "0"
                }))
                .into_response()
            }),
    )
    .await;

    let mut answers = std::collections::HashMap::new();
    answers.insert("question1".to_string(), "2".to_string());

    let report = client(&stub)
        .analyze_quiz(Identity::Student { sno: 42 }, &answers, 7)
        .await
        .expect("report");

    assert_eq!(report.total_questions, 1);
    assert_eq!(report.correct_count, 1);
    assert!(stub.saw_request("/analyze-quiz?sno=42"));
}
