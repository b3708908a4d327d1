//! End-to-end tests for the contract harness against a local posts service
//!
//! These tests:
//! 1. Start an axum server that behaves like the public posts API
//! 2. Run the built-in suite through the harness
//! 3. Verify the rows appended to the CSV result log

use std::path::{Path, PathBuf};

use axum::extract::Path as UrlPath;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, put};
use axum::{Json, Router};

use contract::http::RequestExecutor;
use contract::testing::{self, run_suite, CaseStatus, Harness, ResultLog, Verdict};
use contract::{Error, Post, PostPayload};

const JSON_UTF8: &str = "application/json; charset=utf-8";
const POST_COUNT: u64 = 100;

// --- mock service ---------------------------------------------------------

fn json_reply(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, JSON_UTF8)], body).into_response()
}

fn seeded_post(id: u64) -> Post {
    Post {
        id,
        title: format!("title {id}"),
        body: format!("body {id}"),
        user_id: Some((id - 1) / 10 + 1),
    }
}

async fn list_posts() -> Response {
    let posts: Vec<Post> = (1..=POST_COUNT).map(seeded_post).collect();
    json_reply(StatusCode::OK, serde_json::to_string(&posts).unwrap())
}

async fn create_post(Json(payload): Json<PostPayload>) -> Response {
    let post = Post {
        id: POST_COUNT + 1,
        title: payload.title.unwrap_or_default(),
        body: payload.body.unwrap_or_default(),
        user_id: payload.user_id,
    };
    json_reply(StatusCode::CREATED, serde_json::to_string(&post).unwrap())
}

async fn update_post(UrlPath(id): UrlPath<u64>, Json(payload): Json<PostPayload>) -> Response {
    let post = Post {
        id,
        title: payload.title.unwrap_or_default(),
        body: payload.body.unwrap_or_default(),
        user_id: payload.user_id,
    };
    json_reply(StatusCode::OK, serde_json::to_string(&post).unwrap())
}

async fn delete_post(UrlPath(id): UrlPath<u64>) -> Response {
    if (1..=POST_COUNT).contains(&id) {
        json_reply(StatusCode::OK, "{}".to_string())
    } else {
        json_reply(StatusCode::NOT_FOUND, "{}".to_string())
    }
}

async fn not_found() -> Response {
    json_reply(StatusCode::NOT_FOUND, "{}".to_string())
}

fn posts_router() -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id", put(update_post).delete(delete_post))
        .fallback(not_found)
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    format!("http://{addr}")
}

// --- helpers --------------------------------------------------------------

/// Generous budget so slow CI machines do not trip the response-time case
const LOCAL_BUDGET_MS: u64 = 5_000;

fn harness(log: &Path) -> Harness {
    Harness::new(
        RequestExecutor::new().expect("executor"),
        ResultLog::new(log.to_path_buf()),
    )
}

fn log_rows(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read result log")
        .lines()
        .skip(1)
        .map(String::from)
        .collect()
}

fn temp_log() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    (dir, path)
}

// --- tests ----------------------------------------------------------------

#[tokio::test]
async fn test_full_suite_passes_against_healthy_backend() {
    let base = serve(posts_router()).await;
    let (_dir, log) = temp_log();

    let suite = testing::suite::builtin(LOCAL_BUDGET_MS);
    let cases = suite.resolve(&base).unwrap();
    let summary = run_suite(&harness(&log), &suite.name, &cases, false).await;

    assert_eq!(summary.total(), 16);
    assert!(summary.all_passed(), "{:?}", summary.results);

    let rows = log_rows(&log);
    assert_eq!(rows.len(), 16);
    for (row, case) in rows.iter().zip(&cases) {
        assert!(
            row.starts_with(&format!("{},{},", case.method, case.name)),
            "row {row} out of order"
        );
        assert!(row.ends_with(",Pass"), "{row}");
    }

    let header = std::fs::read_to_string(&log).unwrap();
    assert!(header.starts_with("Request Type,Test,Response Status,Result\r\n"));
}

#[tokio::test]
async fn test_rows_per_endpoint() {
    let base = serve(posts_router()).await;
    let (_dir, log) = temp_log();

    let cases = testing::suite::builtin(LOCAL_BUDGET_MS).resolve(&base).unwrap();
    run_suite(&harness(&log), "posts", &cases, false).await;

    let rows = log_rows(&log);
    let count = |prefix: &str, status: &str| {
        rows.iter()
            .filter(|r| r.starts_with(prefix) && r.ends_with(&format!(",{status},Pass")))
            .count()
    };

    assert_eq!(count("GET,test_", "200"), 5);
    assert_eq!(count("GET,test_", "404"), 2);
    assert_eq!(count("PUT,", "200"), 3);
    assert_eq!(count("POST,", "201"), 4);
    assert_eq!(count("DELETE,test_delete_post_success", "200"), 1);
    assert_eq!(count("DELETE,test_delete_post_not_found", "404"), 1);
}

#[tokio::test]
async fn test_rerun_appends_identical_verdicts() {
    let base = serve(posts_router()).await;
    let (_dir, log) = temp_log();
    let cases = testing::suite::builtin(LOCAL_BUDGET_MS).resolve(&base).unwrap();

    run_suite(&harness(&log), "posts", &cases, false).await;
    run_suite(&harness(&log), "posts", &cases, false).await;

    let rows = log_rows(&log);
    assert_eq!(rows.len(), 32);
    assert_eq!(rows[..16], rows[16..]);

    let headers = std::fs::read_to_string(&log)
        .unwrap()
        .lines()
        .filter(|l| l.starts_with("Request Type,"))
        .count();
    assert_eq!(headers, 1);
}

#[tokio::test]
async fn test_updated_post_decodes_as_typed_post() {
    let base = serve(posts_router()).await;
    let (_dir, log) = temp_log();

    let suite = testing::suite::builtin(LOCAL_BUDGET_MS);
    let case = suite
        .case("test_updated_post_fields")
        .unwrap()
        .resolve(&base)
        .unwrap();

    let report = harness(&log).run_case(&case).await.unwrap();
    assert_eq!(report.record.result, Verdict::Pass);
    assert_eq!(report.checks.len(), 4);
    assert_eq!(report.checks[3].condition, "body decodes as a post");

    let post: Post = report.response.decode().unwrap();
    assert_eq!(post.id, 1);
    assert_eq!(post.title, "my new title");
    assert_eq!(post.body, "updated post");
}

#[tokio::test]
async fn test_broken_backend_logs_fail_then_reports_condition() {
    let broken = Router::new().route(
        "/posts",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let base = serve(broken).await;
    let (_dir, log) = temp_log();
    let harness = harness(&log);
    let suite = testing::suite::builtin(LOCAL_BUDGET_MS);

    let status_case = suite.case("test_status_code_200").unwrap().resolve(&base).unwrap();
    match harness.run_case(&status_case).await {
        Err(Error::AssertionFailed {
            test,
            condition,
            detail,
        }) => {
            assert_eq!(test, "test_status_code_200");
            assert_eq!(condition, "status is 200");
            assert_eq!(detail, "got status 500");
        }
        other => panic!("expected assertion failure, got {other:?}"),
    }

    let fields_case = suite
        .case("test_post_contains_required_fields")
        .unwrap()
        .resolve(&base)
        .unwrap();
    let err = harness.run_case(&fields_case).await.unwrap_err();
    assert!(err.is_assertion());
    assert!(err.to_string().contains("body is not JSON"));

    let json_case = suite.case("test_response_is_json").unwrap().resolve(&base).unwrap();
    assert!(harness.run_case(&json_case).await.unwrap_err().is_assertion());

    assert_eq!(
        log_rows(&log),
        vec![
            "GET,test_status_code_200,500,Fail",
            "GET,test_post_contains_required_fields,500,Fail",
            "GET,test_response_is_json,500,Fail",
        ]
    );
}

#[tokio::test]
async fn test_delete_of_missing_post_is_a_verdict() {
    // A backend that accepts any delete, like the public service does
    let lenient = Router::new().route(
        "/posts/:id",
        delete(|| async { json_reply(StatusCode::OK, "{}".to_string()) }),
    );
    let base = serve(lenient).await;
    let (_dir, log) = temp_log();

    let case = testing::suite::builtin(LOCAL_BUDGET_MS)
        .case("test_delete_post_not_found")
        .unwrap()
        .resolve(&base)
        .unwrap();

    let err = harness(&log).run_case(&case).await.unwrap_err();
    assert!(err.is_assertion(), "{err}");
    assert_eq!(log_rows(&log), vec!["DELETE,test_delete_post_not_found,200,Fail"]);
}

#[tokio::test]
async fn test_unreachable_host_is_infrastructure_error() {
    let dead = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    };
    let live = serve(posts_router()).await;
    let (_dir, log) = temp_log();
    let harness = harness(&log);

    let suite = testing::suite::builtin(LOCAL_BUDGET_MS).filtered("test_status_code_200");
    let dead_cases = suite.resolve(&dead).unwrap();
    let live_cases = suite.resolve(&live).unwrap();

    let err = harness.run_case(&dead_cases[0]).await.unwrap_err();
    assert!(matches!(err, Error::Http(_)), "{err}");
    assert!(!log.exists(), "no row is written when the request never completes");

    let mixed = [dead_cases[0].clone(), live_cases[0].clone()];
    let summary = run_suite(&harness, "mixed", &mixed, false).await;
    assert!(matches!(summary.results[0].status, CaseStatus::Errored(_)));
    assert_eq!(summary.results[1].status, CaseStatus::Passed);
    assert_eq!(summary.unsuccessful(), vec!["GET test_status_code_200"]);
    assert_eq!(log_rows(&log), vec!["GET,test_status_code_200,200,Pass"]);
}

#[tokio::test]
async fn test_shipped_yaml_suite_runs() {
    let base = serve(posts_router()).await;
    let (_dir, log) = temp_log();

    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("suites").join("posts.yaml");
    let suite = testing::SuiteDefinition::load(&path).unwrap();
    let cases = suite.resolve(&base).unwrap();

    let summary = run_suite(&harness(&log), &suite.name, &cases, true).await;
    // The shipped file keeps the public service's 400 ms budget; everything
    // else must pass locally.
    let failures: Vec<_> = summary
        .results
        .iter()
        .filter(|r| r.status != CaseStatus::Passed && r.name != "test_response_time")
        .collect();
    assert!(failures.is_empty(), "{failures:?}");
    assert_eq!(log_rows(&log).len(), 16);
}
