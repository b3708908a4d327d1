//! Built-in posts contract suite

use super::config::{CaseDefinition, SuiteDefinition};
use super::predicate::Predicate;
use crate::http::{Method, PostPayload};

/// Content type the service declares for every JSON response
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// The sixteen contract cases for the posts resource, in execution order
///
/// Every case sends its own request; none relies on state left behind by an
/// earlier one.
pub fn builtin(elapsed_budget_ms: u64) -> SuiteDefinition {
    let update = || PostPayload::update("my new title", "updated post");
    let create = || PostPayload::create("Ayat", "new post1", 5);

    let cases = vec![
        // GET
        CaseDefinition::new("test_status_code_200", Method::Get, "/posts")
            .expect(Predicate::status(200)),
        CaseDefinition::new("test_response_time", Method::Get, "/posts")
            .expect(Predicate::elapsed_below(elapsed_budget_ms)),
        CaseDefinition::new("test_post_contains_required_fields", Method::Get, "/posts")
            .expect(Predicate::each_item_has_keys(&["id", "title", "body"])),
        CaseDefinition::new("test_content_type_json", Method::Get, "/posts")
            .expect(Predicate::header_equals("Content-Type", JSON_CONTENT_TYPE)),
        CaseDefinition::new("test_response_is_json", Method::Get, "/posts")
            .expect(Predicate::BodyIsJson),
        CaseDefinition::new("test_status_code_404", Method::Get, "/invalid_endpoint")
            .expect(Predicate::status(404)),
        CaseDefinition::new("test_empty_body", Method::Get, "/invalid_endpoint")
            .expect(Predicate::body_equals("{}")),
        // PUT
        CaseDefinition::new("test_status_code_200_after_update", Method::Put, "/posts/1")
            .with_body(update())
            .expect(Predicate::status(200)),
        CaseDefinition::new("test_updated_post_fields", Method::Put, "/posts/1")
            .with_body(update())
            .expect(Predicate::field_equals("id", 1))
            .expect(Predicate::field_equals("title", "my new title"))
            .expect(Predicate::field_equals("body", "updated post"))
            .expect(Predicate::BodyIsPost),
        CaseDefinition::new("test_content_type_json_after_update", Method::Put, "/posts/1")
            .with_body(update())
            .expect(Predicate::header_equals("Content-Type", JSON_CONTENT_TYPE)),
        // POST
        CaseDefinition::new("test_response_id_is_positive", Method::Post, "/posts")
            .with_body(PostPayload::create("new post", "test body", 1))
            .expect(Predicate::field_present("id"))
            .expect(Predicate::field_positive_integer("id")),
        CaseDefinition::new("test_status_code_201", Method::Post, "/posts")
            .with_body(create())
            .expect(Predicate::status(201)),
        CaseDefinition::new("test_response_body_contains_id", Method::Post, "/posts")
            .with_body(create())
            .expect(Predicate::field_present("id")),
        CaseDefinition::new("test_response_is_json_after_create", Method::Post, "/posts")
            .with_body(create())
            .expect(Predicate::BodyIsJson),
        // DELETE
        CaseDefinition::new("test_delete_post_success", Method::Delete, "/posts/1")
            .expect(Predicate::status(200)),
        CaseDefinition::new("test_delete_post_not_found", Method::Delete, "/posts/9999")
            .expect(Predicate::status(404)),
    ];

    SuiteDefinition {
        name: "posts".to_string(),
        description: Some("Contract checks for the posts resource".to_string()),
        cases,
    }
}
