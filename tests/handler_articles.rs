mod common;

use article_api::api::routes::article_routes;
use article_api::domain::repositories::ArticleRepository;
use article_api::state::AppState;
use axum::{Router, http::StatusCode};
use axum_test::TestServer;
use serde_json::{Value, json};

fn make_server(state: AppState) -> TestServer {
    let app = Router::new().nest("/v1", article_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

fn valid_body() -> Value {
    json!({
        "title": "Rust in production",
        "content": "Notes from a year of running Axum services.",
        "publish_date": "2024-05-01"
    })
}

#[tokio::test]
async fn test_list_articles_empty_store() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/v1/list-articles").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "status": 404, "message": "Article empty" }));
}

#[tokio::test]
async fn test_list_articles_orders_by_publish_date_desc() {
    let (state, repo) = common::create_test_state();
    common::create_test_article(&repo, "Older", common::date(2024, 1, 1)).await;
    common::create_test_article(&repo, "Newest", common::date(2024, 3, 1)).await;
    common::create_test_article(&repo, "Middle", common::date(2024, 2, 1)).await;
    let server = make_server(state);

    let response = server.get("/v1/list-articles").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], 200);
    assert_eq!(json["message"], "Liste des articles");

    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Older"]);
}

#[tokio::test]
async fn test_list_articles_items_omit_id() {
    let (state, repo) = common::create_test_state();
    common::create_test_article(&repo, "Only", common::date(2024, 1, 1)).await;
    let server = make_server(state);

    let json = server.get("/v1/list-articles").await.json::<Value>();

    assert_eq!(
        json["data"][0],
        json!({ "title": "Only", "content": "Body", "publish_date": "2024-01-01" })
    );
}

#[tokio::test]
async fn test_store_article_success() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.post("/v1/store-article").json(&valid_body()).await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["status"], 201);
    assert_eq!(json["message"], "Article created successfully");
    assert_eq!(json["data"]["title"], "Rust in production");
    assert_eq!(json["data"]["publish_date"], "2024-05-01");
    assert!(json["data"]["id"].as_i64().unwrap() > 0);
    assert!(json["data"].get("created_at").is_some());

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_store_article_assigns_distinct_ids() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let first = server.post("/v1/store-article").json(&valid_body()).await;
    let second = server.post("/v1/store-article").json(&valid_body()).await;

    let first_id = first.json::<Value>()["data"]["id"].as_i64().unwrap();
    let second_id = second.json::<Value>()["data"]["id"].as_i64().unwrap();
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn test_store_article_missing_fields() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.post("/v1/store-article").json(&json!({})).await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "Validation failed");
    assert!(json["errors"]["title"].is_array());
    assert!(json["errors"]["content"].is_array());
    assert!(json["errors"]["publish_date"].is_array());

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_store_article_missing_title_only() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/v1/store-article")
        .json(&json!({ "content": "B", "publish_date": "2024-01-01" }))
        .await;

    response.assert_status_bad_request();
    let errors = &response.json::<Value>()["errors"];
    assert_eq!(errors["title"], json!(["The title field is required."]));
    assert!(errors.get("content").is_none());
    assert!(errors.get("publish_date").is_none());

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_store_article_invalid_date() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/v1/store-article")
        .json(&json!({ "title": "A", "content": "B", "publish_date": "not-a-date" }))
        .await;

    response.assert_status_bad_request();
    let errors = &response.json::<Value>()["errors"];
    assert_eq!(
        errors["publish_date"],
        json!(["The publish date field must be a valid date."])
    );

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_store_article_malformed_body() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.post("/v1/store-article").text("title=A").await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(
        json["errors"]["body"],
        json!(["The request body must be sent as JSON."])
    );
}

#[tokio::test]
async fn test_store_article_non_object_body() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.post("/v1/store-article").json(&json!(["A"])).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["errors"]["body"],
        json!(["The request body must be a JSON object."])
    );
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_store_article_wrongly_typed_field() {
    let (state, repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/v1/store-article")
        .json(&json!({ "title": 123, "content": "B", "publish_date": "2024-01-01" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(
        json["errors"]["title"],
        json!(["The title field must be a string."])
    );
    assert!(json["errors"].get("body").is_none());
    assert!(json["errors"].get("content").is_none());

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_article_wrongly_typed_date() {
    let (state, repo) = common::create_test_state();
    let article = common::create_test_article(&repo, "Draft", common::date(2024, 1, 1)).await;
    let server = make_server(state);

    let response = server
        .put(&format!("/v1/update-article/{}", article.id))
        .json(&json!({ "title": "A", "content": "B", "publish_date": 20240101 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["errors"]["publish_date"],
        json!(["The publish date field must be a valid date."])
    );
    assert_eq!(
        repo.find_by_id(article.id).await.unwrap().unwrap().publish_date,
        common::date(2024, 1, 1)
    );
}

#[tokio::test]
async fn test_update_article_success() {
    let (state, repo) = common::create_test_state();
    let article = common::create_test_article(&repo, "Draft", common::date(2024, 1, 1)).await;
    let server = make_server(state);

    let response = server
        .put(&format!("/v1/update-article/{}", article.id))
        .json(&json!({ "title": "Final", "content": "Rewritten", "publish_date": "2024-02-02" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["status"], 200);
    assert_eq!(json["message"], "Article updated successfully");
    assert_eq!(json["data"]["id"], article.id);
    assert_eq!(json["data"]["title"], "Final");
    assert_eq!(json["data"]["publish_date"], "2024-02-02");

    let stored = repo.find_by_id(article.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Final");
    assert_eq!(stored.content, "Rewritten");
}

#[tokio::test]
async fn test_update_article_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .put("/v1/update-article/999")
        .json(&valid_body())
        .await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "status": 404, "message": "Article not found" }));
}

#[tokio::test]
async fn test_update_article_non_numeric_id() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .put("/v1/update-article/abc")
        .json(&valid_body())
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_update_article_validation_leaves_article_untouched() {
    let (state, repo) = common::create_test_state();
    let article = common::create_test_article(&repo, "Draft", common::date(2024, 1, 1)).await;
    let server = make_server(state);

    let response = server
        .put(&format!("/v1/update-article/{}", article.id))
        .json(&json!({ "title": "", "content": "B", "publish_date": "2024-01-01" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["errors"]["title"].is_array());

    let stored = repo.find_by_id(article.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Draft");
}

#[tokio::test]
async fn test_delete_article_success() {
    let (state, repo) = common::create_test_state();
    let article = common::create_test_article(&repo, "Doomed", common::date(2024, 1, 1)).await;
    let server = make_server(state);

    let response = server
        .delete(&format!("/v1/delete-article/{}", article.id))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());
    assert!(repo.find_by_id(article.id).await.unwrap().is_none());

    let again = server
        .delete(&format!("/v1/delete-article/{}", article.id))
        .await;
    again.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_article_not_found() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    let response = server.delete("/v1/delete-article/42").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "status": 404, "message": "Article not found" }));
}

#[tokio::test]
async fn test_store_failure_hides_cause() {
    let server = make_server(common::create_failing_state());

    let response = server.post("/v1/store-article").json(&valid_body()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "status": 500, "message": "Failed to store data" }));
    assert!(!response.text().contains("secret-db-host"));
}

#[tokio::test]
async fn test_list_failure_returns_generic_error() {
    let server = make_server(common::create_failing_state());

    let response = server.get("/v1/list-articles").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "status": 500, "message": "Failed to retrieve data" }));
}

#[tokio::test]
async fn test_update_and_delete_failures_return_generic_errors() {
    let server = make_server(common::create_failing_state());

    let updated = server
        .put("/v1/update-article/1")
        .json(&valid_body())
        .await;
    updated.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    updated.assert_json(&json!({ "status": 500, "message": "Failed to update data" }));

    let deleted = server.delete("/v1/delete-article/1").await;
    deleted.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    deleted.assert_json(&json!({ "status": 500, "message": "Failed to delete data" }));
}

#[tokio::test]
async fn test_article_lifecycle() {
    let (state, _repo) = common::create_test_state();
    let server = make_server(state);

    server
        .get("/v1/list-articles")
        .await
        .assert_status_not_found();

    let created = server
        .post("/v1/store-article")
        .json(&json!({ "title": "A", "content": "B", "publish_date": "2024-01-01" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let id = created.json::<Value>()["data"]["id"].as_i64().unwrap();

    server
        .post("/v1/store-article")
        .json(&json!({ "title": "C", "content": "D", "publish_date": "2024-06-01" }))
        .await
        .assert_status(StatusCode::CREATED);

    let listed = server.get("/v1/list-articles").await.json::<Value>();
    assert_eq!(listed["data"][0]["title"], "C");
    assert_eq!(listed["data"][1]["title"], "A");

    server
        .put(&format!("/v1/update-article/{id}"))
        .json(&json!({ "title": "A2", "content": "B2", "publish_date": "2024-12-01" }))
        .await
        .assert_status_ok();

    let listed = server.get("/v1/list-articles").await.json::<Value>();
    assert_eq!(listed["data"][0]["title"], "A2");

    server
        .delete(&format!("/v1/delete-article/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let listed = server.get("/v1/list-articles").await.json::<Value>();
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["title"], "C");
}
