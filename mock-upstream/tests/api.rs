use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_upstream::{app, failing_app, fixture, garbage_app, DATASET_PATH};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

#[tokio::test]
async fn serves_the_dataset_verbatim() {
    let resp = app(fixture()).oneshot(get(DATASET_PATH)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body, serde_json::Value::Array(fixture()));
}

#[tokio::test]
async fn serves_an_empty_dataset() {
    let resp = app(Vec::new()).oneshot(get(DATASET_PATH)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"[]");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let resp = app(fixture()).oneshot(get("/v2/all")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn failing_app_returns_configured_status_and_message() {
    let resp = failing_app(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
        .oneshot(get(DATASET_PATH))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(&body_bytes(resp).await[..], b"upstream exploded");
}

#[tokio::test]
async fn garbage_app_returns_ok_with_non_json() {
    let resp = garbage_app().oneshot(get(DATASET_PATH)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(serde_json::from_slice::<serde_json::Value>(&body_bytes(resp).await).is_err());
}
