//! Router-level tests driven through `tower::ServiceExt::oneshot`.

use std::time::Duration;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use nexus_core::contact::{DeskPhase, DeskTiming};
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::{AppState, router};

fn state() -> AppState {
  AppState::seeded(DeskTiming {
    delay:       Duration::from_millis(20),
    reset_after: Duration::from_millis(20),
  })
}

async fn call(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(json) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(json.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };
  let resp = router(state.clone()).oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
  let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
  (status, value)
}

fn titles(list: &Value) -> Vec<&str> {
  list.as_array().unwrap().iter().map(|p| p["title"].as_str().unwrap()).collect()
}

// ── Public ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn home_lists_whole_showcase() {
  let s = state();
  let (status, body) = call(&s, "GET", "/", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["portfolio"].as_array().unwrap().len(), 6);
  assert_eq!(body["services"].as_array().unwrap().len(), 6);
  assert_eq!(body["hero_stats"][0]["metric"], "PROJECTS");
}

#[tokio::test]
async fn home_filters_by_category() {
  let s = state();
  let (_, body) = call(&s, "GET", "/?category=branding", None).await;
  assert_eq!(titles(&body["portfolio"]), vec!["Brand Identity Design"]);

  let (status, body) = call(&s, "GET", "/?category=print", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["error"].as_str().unwrap().contains("print"));
}

#[tokio::test]
async fn showcase_is_independent_of_admin_portfolio() {
  let s = state();
  let (_, ticket) = call(&s, "DELETE", "/admin/portfolio/1", None).await;
  let uri = format!("/admin/portfolio/deletions/{}", ticket["token"].as_str().unwrap());
  call(&s, "POST", &uri, Some(json!({ "confirm": true }))).await;

  let (_, body) = call(&s, "GET", "/", None).await;
  assert_eq!(body["portfolio"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn unknown_route_is_json_404() {
  let s = state();
  let (status, body) = call(&s, "GET", "/nowhere", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn overviews_render() {
  let s = state();
  let (status, body) = call(&s, "GET", "/admin", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["stats"].as_array().unwrap().len(), 4);
  assert_eq!(body["quick_actions"][3]["href"], "/admin/analytics");

  let (status, body) = call(&s, "GET", "/admin/analytics", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["top_sources"][0]["source"], "Google Search");
}

// ── Contact ──────────────────────────────────────────────────────────────────

fn contact_body() -> Value {
  json!({ "name": "Rin", "email": "rin@example.net", "message": "Hello there" })
}

#[tokio::test(start_paused = true)]
async fn contact_accepts_complete_form() {
  let s = state();
  let (status, body) = call(&s, "POST", "/contact", Some(contact_body())).await;
  assert_eq!(status, StatusCode::ACCEPTED);
  assert_eq!(body["email"], "rin@example.net");
  assert_eq!(s.contact.phase(), DeskPhase::Submitted);
}

#[tokio::test]
async fn contact_rejects_missing_fields() {
  let s = state();
  let (status, body) = call(&s, "POST", "/contact", Some(json!({ "name": "Rin", "email": "", "message": "" }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "missing required field(s): email, message");
  assert_eq!(s.contact.phase(), DeskPhase::Idle);
}

#[tokio::test]
async fn contact_rejects_blank_fields() {
  let s = state();
  let body = json!({ "name": "  ", "email": "rin@example.net", "message": "\n\t" });
  let (status, body) = call(&s, "POST", "/contact", Some(body)).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"], "missing required field(s): name, message");
  assert_eq!(s.contact.phase(), DeskPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn contact_refuses_while_in_flight() {
  let s = state();
  let background = s.clone();
  let first = tokio::spawn(async move { call(&background, "POST", "/contact", Some(contact_body())).await });

  while s.contact.phase() != DeskPhase::Submitting {
    tokio::task::yield_now().await;
  }
  let (status, _) = call(&s, "POST", "/contact", Some(contact_body())).await;
  assert_eq!(status, StatusCode::CONFLICT);

  let (status, _) = first.await.unwrap();
  assert_eq!(status, StatusCode::ACCEPTED);
}

// ── Portfolio ────────────────────────────────────────────────────────────────

fn project_body(title: &str) -> Value {
  json!({
    "title": title,
    "category": "web",
    "description": "Fresh build",
    "technologies": "Rust, Axum ,  Tokio",
  })
}

#[tokio::test]
async fn portfolio_create_then_list() {
  let s = state();
  let (status, created) = call(&s, "POST", "/admin/portfolio", Some(project_body("Edge Cache"))).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(created["id"], 3);
  assert_eq!(created["technologies"], json!(["Rust", "Axum", "Tokio"]));
  assert_eq!(created["status"], "active");

  let (_, list) = call(&s, "GET", "/admin/portfolio", None).await;
  assert_eq!(titles(&list), vec!["E-commerce Platform", "FinTech Mobile App", "Edge Cache"]);
}

#[tokio::test]
async fn portfolio_create_requires_title() {
  let s = state();
  let (status, _) = call(&s, "POST", "/admin/portfolio", Some(project_body("  "))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, list) = call(&s, "GET", "/admin/portfolio", None).await;
  assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn portfolio_search_and_filter() {
  let s = state();
  let (_, list) = call(&s, "GET", "/admin/portfolio?search=fin", None).await;
  assert_eq!(titles(&list), vec!["FinTech Mobile App"]);

  let (_, list) = call(&s, "GET", "/admin/portfolio?category=web", None).await;
  assert_eq!(titles(&list), vec!["E-commerce Platform"]);

  let (_, list) = call(&s, "GET", "/admin/portfolio?filter=all&search=", None).await;
  assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn portfolio_update_and_missing_id() {
  let s = state();
  let (status, updated) = call(&s, "PUT", "/admin/portfolio/2", Some(project_body("Wallet"))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(updated["id"], 2);
  assert_eq!(updated["title"], "Wallet");

  let (status, body) = call(&s, "PUT", "/admin/portfolio/42", Some(project_body("Ghost"))).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"], "project 42 not found");
}

#[tokio::test]
async fn portfolio_toggle_featured() {
  let s = state();
  let (_, body) = call(&s, "POST", "/admin/portfolio/1/featured", None).await;
  assert_eq!(body["featured"], false);
  let (_, body) = call(&s, "POST", "/admin/portfolio/1/featured", None).await;
  assert_eq!(body["featured"], true);
}

#[tokio::test]
async fn portfolio_delete_is_two_step() {
  let s = state();
  let (status, ticket) = call(&s, "DELETE", "/admin/portfolio/1", None).await;
  assert_eq!(status, StatusCode::ACCEPTED);
  assert_eq!(ticket["id"], 1);

  let (_, list) = call(&s, "GET", "/admin/portfolio", None).await;
  assert_eq!(list.as_array().unwrap().len(), 2);

  let uri = format!("/admin/portfolio/deletions/{}", ticket["token"].as_str().unwrap());
  let (status, body) = call(&s, "POST", &uri, Some(json!({ "confirm": true }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["deleted"]["title"], "E-commerce Platform");

  let (_, list) = call(&s, "GET", "/admin/portfolio", None).await;
  assert_eq!(titles(&list), vec!["FinTech Mobile App"]);

  let (status, _) = call(&s, "POST", &uri, Some(json!({ "confirm": true }))).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Services ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn services_filter_by_category() {
  let s = state();
  let (_, list) = call(&s, "GET", "/admin/services?category=Development", None).await;
  assert_eq!(titles(&list), vec!["Web Development"]);
}

#[tokio::test]
async fn services_cycle_status_and_popular() {
  let s = state();
  let (_, body) = call(&s, "POST", "/admin/services/2/status", None).await;
  assert_eq!(body["status"], "draft");
  let (_, body) = call(&s, "POST", "/admin/services/2/status", None).await;
  assert_eq!(body["status"], "active");

  let (_, body) = call(&s, "POST", "/admin/services/2/popular", None).await;
  assert_eq!(body["popular"], true);

  let (status, _) = call(&s, "POST", "/admin/services/9/popular", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn services_cancelled_delete_keeps_record() {
  let s = state();
  let (_, ticket) = call(&s, "DELETE", "/admin/services/3", None).await;
  let uri = format!("/admin/services/deletions/{}", ticket["token"].as_str().unwrap());
  let (status, body) = call(&s, "POST", &uri, Some(json!({ "confirm": false }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["deleted"], Value::Null);

  let (_, list) = call(&s, "GET", "/admin/services", None).await;
  assert_eq!(list.as_array().unwrap().len(), 3);
}

// ── Messages ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn messages_list_carries_counts() {
  let s = state();
  let (status, body) = call(&s, "GET", "/admin/messages", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["unread"], 1);
  assert_eq!(body["total"], 3);

  let (_, body) = call(&s, "GET", "/admin/messages?status=replied", None).await;
  assert_eq!(body["messages"].as_array().unwrap().len(), 1);
  assert_eq!(body["messages"][0]["name"], "Mike Chen");
  assert_eq!(body["unread"], 0);
  assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn reply_workflow() {
  let s = state();
  let (status, opened) = call(&s, "POST", "/admin/messages/1/open", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(opened["status"], "read");

  let (status, _) = call(&s, "POST", "/admin/messages/reply", Some(json!({ "text": "   " }))).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (status, reply) =
    call(&s, "POST", "/admin/messages/reply", Some(json!({ "text": "Thanks, let's talk" }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(reply["to"], "john@techcorp.com");
  assert_eq!(reply["subject"], "Re: Website Redesign Project");

  let (_, dialog) = call(&s, "GET", "/admin/messages/reply", None).await;
  assert_eq!(dialog["selected"], Value::Null);
  assert_eq!(dialog["draft"], "");

  let (_, body) = call(&s, "GET", "/admin/messages?filter=replied", None).await;
  assert_eq!(body["messages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn reply_without_open_message_conflicts() {
  let s = state();
  let (status, _) = call(&s, "POST", "/admin/messages/reply", Some(json!({ "text": "Hi" }))).await;
  assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn closing_the_dialog_keeps_the_draft() {
  let s = state();
  call(&s, "POST", "/admin/messages/2/open", None).await;
  s.inbox.lock().await.composer.set_draft("Half written");

  let (status, _) = call(&s, "DELETE", "/admin/messages/reply", None).await;
  assert_eq!(status, StatusCode::NO_CONTENT);

  let (_, dialog) = call(&s, "GET", "/admin/messages/reply", None).await;
  assert_eq!(dialog["selected"], Value::Null);
  assert_eq!(dialog["draft"], "Half written");
  assert_eq!(dialog["can_send"], false);
}

#[tokio::test]
async fn message_status_and_archive() {
  let s = state();
  let (_, body) = call(&s, "PUT", "/admin/messages/3/status", Some(json!({ "status": "read" }))).await;
  assert_eq!(body["status"], "read");

  let (_, body) = call(&s, "POST", "/admin/messages/3/archive", None).await;
  assert_eq!(body["status"], "archived");

  let (status, _) = call(&s, "POST", "/admin/messages/7/archive", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn message_create_and_delete() {
  let s = state();
  let (status, created) = call(
    &s,
    "POST",
    "/admin/messages",
    Some(json!({
      "name": "Ada Park",
      "email": "ada@example.org",
      "subject": "Quote",
      "body": "Landing page?",
    })),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(created["id"], 4);
  assert_eq!(created["status"], "unread");
  assert_eq!(created["priority"], "medium");

  let (_, ticket) = call(&s, "DELETE", "/admin/messages/4", None).await;
  let uri = format!("/admin/messages/deletions/{}", ticket["token"].as_str().unwrap());
  let (_, body) = call(&s, "POST", &uri, Some(json!({ "confirm": true }))).await;
  assert_eq!(body["deleted"]["id"], 4);

  let (_, body) = call(&s, "GET", "/admin/messages", None).await;
  assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn message_cancelled_delete_keeps_record() {
  let s = state();
  let (_, ticket) = call(&s, "DELETE", "/admin/messages/2", None).await;
  let uri = format!("/admin/messages/deletions/{}", ticket["token"].as_str().unwrap());
  let (status, body) = call(&s, "POST", &uri, Some(json!({ "confirm": false }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["deleted"], Value::Null);

  let (_, body) = call(&s, "GET", "/admin/messages", None).await;
  assert_eq!(body["total"], 3);
  assert_eq!(s.inbox.lock().await.messages.pending_deletions(), 0);
}

// ── Pickers and tickets ──────────────────────────────────────────────────────

#[tokio::test]
async fn category_pickers() {
  let s = state();
  let (status, body) = call(&s, "GET", "/admin/portfolio/categories", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[0], json!({ "value": "web", "label": "Web Development" }));
  assert_eq!(body.as_array().unwrap().len(), 4);

  let (_, body) = call(&s, "GET", "/admin/services/categories", None).await;
  assert_eq!(body, json!(["Marketing", "Development", "Design", "Strategy"]));
}

#[tokio::test]
async fn repeated_delete_requests_reuse_the_ticket() {
  let s = state();
  let (_, first) = call(&s, "DELETE", "/admin/services/1", None).await;
  for _ in 0..20 {
    let (status, again) = call(&s, "DELETE", "/admin/services/1", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(again["token"], first["token"]);
  }
  assert_eq!(s.services.lock().await.pending_deletions(), 1);

  let uri = format!("/admin/services/deletions/{}", first["token"].as_str().unwrap());
  call(&s, "POST", &uri, Some(json!({ "confirm": true }))).await;
  assert_eq!(s.services.lock().await.pending_deletions(), 0);
}
