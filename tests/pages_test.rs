use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use book_nook::controller::{Dialog, ResourcePage};
use book_nook::models::{Books, Borrowings, Categories};
use book_nook::pages::{BooksPage, BorrowingsPage, CategoriesPage};
use book_nook::{ApiClient, Config};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&Config::with_base_url(server.uri()))
}

fn category_rows() -> serde_json::Value {
    json!([
        {"id": 1, "name": "Fiction", "description": "Novels"},
        {"id": 2, "name": "History", "description": ""}
    ])
}

#[tokio::test]
async fn test_loading_flag_clears_after_first_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_rows()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = CategoriesPage::new();
    assert!(page.is_loading());
    page.refresh(&client).await;
    assert!(!page.is_loading());
    assert_eq!(page.rows().len(), 2);
}

#[tokio::test]
async fn test_loading_flag_clears_even_on_failure() {
    // nothing mounted: every request 404s
    let server = MockServer::start().await;
    let client = client_for(&server);

    let mut page = CategoriesPage::new();
    page.refresh(&client).await;
    assert!(!page.is_loading());
    assert!(page.rows().is_empty());
    assert_eq!(page.error.current(), Some("Failed to fetch categories"));
}

#[tokio::test]
async fn test_fetch_failure_message_uses_plural_label() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let mut page: ResourcePage<Borrowings> = ResourcePage::new();
    page.refresh(&client).await;
    assert_eq!(page.error.current(), Some("Failed to fetch borrowings"));
}

#[tokio::test]
async fn test_create_flow_posts_once_then_refetches_once() {
    let server = MockServer::start().await;
    // one mount refresh + exactly one post-create refetch
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_rows()))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = CategoriesPage::new();
    page.refresh(&client).await;

    page.open_new();
    page.draft_mut().unwrap().name = "Adventure".to_string();
    page.submit(&client).await;

    assert_eq!(*page.dialog(), Dialog::Closed);
    assert!(page.error.current().is_none());
}

#[tokio::test]
async fn test_failed_update_keeps_dialog_open_with_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_rows()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/categories/1"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"message": "stock conflict"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = CategoriesPage::new();
    page.refresh(&client).await;

    let row = page.rows()[0].clone();
    page.open_edit(&row);
    page.draft_mut().unwrap().name = "Fiction & Poetry".to_string();
    page.submit(&client).await;

    assert!(page.dialog().is_open());
    assert_eq!(page.error.current(), Some("stock conflict"));
}

#[tokio::test]
async fn test_validation_failure_issues_no_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let mut page: ResourcePage<Books> = ResourcePage::new();
    page.open_new();
    {
        let draft = page.draft_mut().unwrap();
        draft.name = "Moby Dick".to_string();
        draft.publication_year = "2000".to_string();
        draft.stock = "-1".to_string();
    }
    page.submit(&client).await;

    assert!(page.dialog().is_open());
    assert_eq!(page.error.current(), Some("Stock must be a positive number"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_name_blocks_post() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let mut page: ResourcePage<Books> = ResourcePage::new();
    page.open_new();
    {
        let draft = page.draft_mut().unwrap();
        draft.publication_year = "2000".to_string();
        draft.stock = "1".to_string();
    }
    page.submit(&client).await;

    assert_eq!(page.error.current(), Some("Book name cannot be empty"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_then_refetch_drops_row() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/categories/5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    // the refetch after delete no longer contains id 5
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_rows()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = CategoriesPage::new();
    page.delete(&client, 5).await;

    assert!(page.rows().iter().all(|row| row.id != 5));
    assert!(page.error.current().is_none());
}

#[tokio::test]
async fn test_delete_failure_reports_without_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/categories/5"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = CategoriesPage::new();
    page.delete(&client, 5).await;

    assert_eq!(page.error.current(), Some("Failed to delete category"));
    // only the DELETE went out, no GET
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_books_mount_populates_selectors_in_any_order() {
    let server = MockServer::start().await;
    // the main collection answers last; selector state must not depend on order
    Mock::given(method("GET"))
        .and(path("/api/v1/books"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/authors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Herman Melville", "birthDate": "1819-08-01", "country": "USA"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/publishers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([
                    {"id": 1, "name": "Harper & Brothers", "establishmentYear": 1833, "address": "New York"}
                ]))
                .set_delay(Duration::from_millis(50)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(category_rows()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = BooksPage::new();
    assert!(page.author_options().is_none());
    assert!(page.publisher_options().is_none());
    assert!(page.category_options().is_none());

    page.mount(&client).await;

    assert_eq!(page.author_options().unwrap().len(), 1);
    assert_eq!(page.publisher_options().unwrap().len(), 1);
    assert_eq!(page.category_options().unwrap().len(), 2);
    assert!(!page.page.is_loading());
}

#[tokio::test]
async fn test_books_mount_failed_support_fetch_leaves_selector_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/publishers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    // authors endpoint is down
    Mock::given(method("GET"))
        .and(path("/api/v1/authors"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = BooksPage::new();
    page.mount(&client).await;

    assert!(page.author_options().is_none());
    assert!(page.publisher_options().is_some());
    assert_eq!(page.page.error.current(), Some("Failed to fetch authors"));
}

#[tokio::test]
async fn test_borrowings_mount_seeds_dates_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/borrows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 4,
            "borrowerName": "Ishmael",
            "borrowerEmail": "ishmael@pequod.example",
            "borrowingDate": "2024-03-05T10:30:00Z",
            "returnDate": null,
            "book": {"id": 1, "name": "Moby Dick", "publicationYear": 1851, "stock": 3}
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page = BorrowingsPage::new();
    page.mount(&client).await;

    let row = page.page.rows()[0].clone();
    page.page.open_edit(&row);
    match page.page.dialog() {
        Dialog::Editing { id, draft } => {
            assert_eq!(*id, 4);
            assert_eq!(draft.borrower_name, "Ishmael");
            assert_eq!(draft.borrowing_date, "2024-03-05");
            assert_eq!(draft.return_date, "");
            assert_eq!(draft.book.as_ref().unwrap().name, "Moby Dick");
        }
        other => panic!("expected editing dialog, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_array_payload_renders_empty_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut page: ResourcePage<Categories> = ResourcePage::new();
    page.refresh(&client).await;

    assert!(page.rows().is_empty());
    assert!(page.error.current().is_none());
}
