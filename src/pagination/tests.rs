//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use futures::stream::FusedStream;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::json;
use std::collections::VecDeque;
use test_case::test_case;
use std::sync::{Arc, Mutex};

/// Fetch closure that replays scripted pages and records every token it was given
fn scripted(
    pages: Vec<Result<JsonValue>>,
    seen: Arc<Mutex<Vec<Option<String>>>>,
) -> impl FnMut(Option<String>) -> futures::future::Ready<Result<JsonValue>> + Send + 'static {
    let mut pages: VecDeque<Result<JsonValue>> = pages.into();
    move |token| {
        seen.lock().unwrap().push(token);
        let next = pages
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("fetched past the script".to_string())));
        futures::future::ready(next)
    }
}

fn tokens(seen: &Arc<Mutex<Vec<Option<String>>>>) -> Vec<Option<String>> {
    seen.lock().unwrap().clone()
}

#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
struct Period {
    id: String,
}

// ============================================================================
// PageShape Tests
// ============================================================================

#[test]
fn test_page_shape_default() {
    let shape = PageShape::default();
    assert_eq!(shape.has_more_field, "has_more");
    assert_eq!(shape.token_fields, vec!["page_token", "next_page_token"]);
    assert_eq!(shape.items_field, "items");
    assert_eq!(shape.token_param, "page_token");
}

#[test]
fn test_page_shape_builders() {
    let shape = PageShape::items("okr_list")
        .with_has_more_field("more")
        .with_token_fields(["cursor"])
        .with_token_param("cursor");
    assert_eq!(shape.items_field, "okr_list");
    assert_eq!(shape.has_more_field, "more");
    assert_eq!(shape.token_fields, vec!["cursor"]);
    assert_eq!(shape.token_param, "cursor");
}

#[test]
fn test_split_strips_pagination_fields() {
    let shape = PageShape::default();
    let page = shape
        .split::<Period>(json!({
            "has_more": true,
            "page_token": "p2",
            "items": [{"id": "1"}, {"id": "2"}],
            "total": 7
        }))
        .unwrap();

    assert!(page.has_more);
    assert_eq!(page.token.as_deref(), Some("p2"));
    assert_eq!(
        page.body.items,
        vec![Period { id: "1".into() }, Period { id: "2".into() }]
    );
    assert_eq!(JsonValue::Object(page.body.rest), json!({"total": 7}));
}

#[test]
fn test_split_next_page_token_fallback() {
    let page = PageShape::default()
        .split::<JsonValue>(json!({"has_more": true, "next_page_token": "n2", "items": []}))
        .unwrap();
    assert_eq!(page.token.as_deref(), Some("n2"));
    assert!(page.body.rest.is_empty());
}

#[test]
fn test_split_empty_page_token_falls_back() {
    let page = PageShape::default()
        .split::<JsonValue>(json!({"has_more": true, "page_token": "", "next_page_token": "n3"}))
        .unwrap();
    assert_eq!(page.token.as_deref(), Some("n3"));
    assert!(page.body.rest.is_empty());
}

#[test]
fn test_split_null_data_is_last_page() {
    let page = PageShape::default().split::<JsonValue>(JsonValue::Null).unwrap();
    assert!(!page.has_more);
    assert!(page.token.is_none());
    assert!(page.body.is_empty());
}

#[test_case(json!("true"), true; "string true")]
#[test_case(json!("false"), true; "non-empty string")]
#[test_case(json!(""), false; "empty string")]
#[test_case(json!(1), true; "one")]
#[test_case(json!(0), false; "zero")]
#[test_case(json!(0.0), false; "float zero")]
#[test_case(json!([]), true; "array")]
#[test_case(json!({}), true; "object")]
#[test_case(JsonValue::Null, false; "null")]
fn test_split_non_boolean_has_more(flag: JsonValue, expected: bool) {
    let page = PageShape::default()
        .split::<JsonValue>(json!({"has_more": flag}))
        .unwrap();
    assert_eq!(page.has_more, expected);
}

#[test]
fn test_split_rejects_non_object() {
    let result = PageShape::default().split::<JsonValue>(json!([1, 2]));
    assert!(matches!(result, Err(Error::Pagination { .. })));
}

#[test]
fn test_split_bad_items() {
    let result = PageShape::default().split::<Period>(json!({"items": [{"name": "x"}]}));
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[test]
fn test_page_body_to_value() {
    let page = PageShape::items("okr_list")
        .split::<JsonValue>(json!({"has_more": false, "okr_list": [1], "total": 1}))
        .unwrap();
    assert_eq!(
        page.body.to_value("okr_list").unwrap(),
        json!({"okr_list": [1], "total": 1})
    );
}

// ============================================================================
// CursorState / PageEvent Tests
// ============================================================================

#[test]
fn test_cursor_state() {
    let mut state = CursorState::new();
    assert!(state.has_more);
    assert!(state.page_token.is_none());

    state.advance(true, Some("t1".to_string()));
    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.page_token.as_deref(), Some("t1"));

    state.finish();
    assert!(!state.has_more);
}

#[test]
fn test_page_event_accessors() {
    let page: PageEvent<JsonValue> = PageEvent::Page(PageBody {
        items: vec![json!(1)],
        rest: serde_json::Map::new(),
    });
    assert!(page.is_page());
    assert_eq!(page.page().unwrap().len(), 1);

    let failed: PageEvent<JsonValue> = PageEvent::Failed(Error::Other("x".into()));
    assert!(failed.is_failed());
    assert!(failed.page().is_none());
    assert!(failed.into_result().is_err());
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[tokio::test]
async fn test_yields_every_page_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![
            Ok(json!({"has_more": true, "page_token": "t1", "items": [{"id": "a"}]})),
            Ok(json!({"has_more": true, "page_token": "t2", "items": [{"id": "b"}]})),
            Ok(json!({"has_more": false, "items": [{"id": "c"}], "total": 3})),
        ],
        seen.clone(),
    );

    let events: Vec<PageEvent<Period>> = Paginator::new(PageShape::default(), fetch)
        .into_stream()
        .collect()
        .await;

    assert_eq!(events.len(), 3);
    let ids: Vec<String> = events
        .iter()
        .map(|e| e.page().unwrap().items[0].id.clone())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(
        JsonValue::Object(events[2].page().unwrap().rest.clone()),
        json!({"total": 3})
    );
    assert_eq!(
        tokens(&seen),
        vec![None, Some("t1".to_string()), Some("t2".to_string())]
    );
}

#[tokio::test]
async fn test_single_page() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![Ok(json!({"has_more": false, "items": []}))],
        seen.clone(),
    );

    let events: Vec<PageEvent<JsonValue>> = Paginator::new(PageShape::default(), fetch)
        .into_stream()
        .collect()
        .await;

    assert_eq!(events.len(), 1);
    assert!(events[0].page().unwrap().is_empty());
    assert_eq!(tokens(&seen).len(), 1);
}

#[tokio::test]
async fn test_missing_token_with_has_more_refetches_without_token() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![
            Ok(json!({"has_more": true, "page_token": "t1", "items": [1]})),
            Ok(json!({"has_more": true, "items": [2]})),
            Ok(json!({"has_more": false, "items": [3]})),
        ],
        seen.clone(),
    );

    let events: Vec<PageEvent<JsonValue>> = Paginator::new(PageShape::default(), fetch)
        .into_stream()
        .collect()
        .await;

    assert_eq!(events.len(), 3);
    assert!(events.iter().all(PageEvent::is_page));
    assert_eq!(tokens(&seen), vec![None, Some("t1".to_string()), None]);
}

#[tokio::test]
async fn test_string_has_more_continues() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![
            Ok(json!({"has_more": "true", "page_token": "t1", "items": [1]})),
            Ok(json!({"has_more": 0, "items": [2]})),
        ],
        seen.clone(),
    );

    let items: Vec<i64> = Paginator::new(PageShape::default(), fetch)
        .into_stream()
        .try_collect_items()
        .await
        .unwrap();
    assert_eq!(items, vec![1, 2]);
    assert_eq!(tokens(&seen), vec![None, Some("t1".to_string())]);
}

#[tokio::test]
async fn test_failure_yields_marker_then_ends() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![
            Ok(json!({"has_more": true, "page_token": "t1", "items": [1]})),
            Ok(json!({"has_more": true, "page_token": "t2", "items": [2]})),
            Err(Error::api(99991400, "request trigger frequency limit")),
            Ok(json!({"has_more": false, "items": [4]})),
        ],
        seen.clone(),
    );

    let events: Vec<PageEvent<JsonValue>> = Paginator::new(PageShape::default(), fetch)
        .into_stream()
        .collect()
        .await;

    // K = 3: two pages, one marker, nothing after
    assert_eq!(events.len(), 3);
    assert!(events[0].is_page());
    assert!(events[1].is_page());
    match &events[2] {
        PageEvent::Failed(e) => assert_eq!(e.api_code(), Some(99991400)),
        PageEvent::Page(_) => panic!("Expected failure marker"),
    }
    assert_eq!(tokens(&seen).len(), 3);
}

#[tokio::test]
async fn test_failure_on_first_page() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(vec![Err(Error::http_status(503, ""))], seen.clone());

    let events: Vec<PageEvent<JsonValue>> = Paginator::new(PageShape::default(), fetch)
        .into_stream()
        .collect()
        .await;

    assert_eq!(events.len(), 1);
    assert!(events[0].is_failed());
    assert_eq!(tokens(&seen).len(), 1);
}

#[tokio::test]
async fn test_undecodable_page_is_failure() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![
            Ok(json!({"has_more": true, "page_token": "t1", "items": [{"id": "a"}]})),
            Ok(json!({"has_more": true, "page_token": "t2", "items": [{"id": 5}]})),
        ],
        seen.clone(),
    );

    let events: Vec<PageEvent<Period>> = Paginator::new(PageShape::default(), fetch)
        .into_stream()
        .collect()
        .await;

    assert_eq!(events.len(), 2);
    assert!(events[0].is_page());
    assert!(matches!(events[1], PageEvent::Failed(Error::Decode { .. })));
    assert_eq!(tokens(&seen).len(), 2);
}

#[tokio::test]
async fn test_lazy_until_polled() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![
            Ok(json!({"has_more": true, "page_token": "t1", "items": [1]})),
            Ok(json!({"has_more": false, "items": [2]})),
        ],
        seen.clone(),
    );

    let mut stream = Paginator::new(PageShape::default(), fetch).into_stream::<JsonValue>();
    assert!(tokens(&seen).is_empty());

    let first = stream.next().await.unwrap();
    assert!(first.is_page());
    assert_eq!(tokens(&seen).len(), 1);

    // dropping mid-way leaves the second page unfetched
    drop(stream);
    assert_eq!(tokens(&seen).len(), 1);
}

#[tokio::test]
async fn test_next_page_and_exhaustion() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![Ok(json!({"has_more": false, "items": [1, 2]}))],
        seen.clone(),
    );

    let mut stream = Paginator::new(PageShape::default(), fetch).into_stream::<i64>();
    let page = stream.next_page().await.unwrap().unwrap();
    assert_eq!(page.items, vec![1, 2]);
    assert!(!stream.is_terminated());
    assert!(stream.next_page().await.is_none());
    assert!(stream.is_terminated());
    assert!(stream.next_page().await.is_none());
    assert!(stream.next().await.is_none());
    assert_eq!(tokens(&seen).len(), 1);
}

#[tokio::test]
async fn test_polling_after_failure_marker_stays_ended() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![
            Ok(json!({"has_more": true, "page_token": "t1", "items": [1]})),
            Err(Error::Other("network down".to_string())),
        ],
        seen.clone(),
    );

    let mut stream = Paginator::new(PageShape::default(), fetch).into_stream::<i64>();
    assert!(stream.next().await.unwrap().is_page());
    assert!(matches!(stream.next().await, Some(PageEvent::Failed(_))));

    for _ in 0..3 {
        assert!(stream.next().await.is_none());
        assert!(stream.next_page().await.is_none());
    }
    assert!(stream.is_terminated());
    assert_eq!(tokens(&seen), vec![None, Some("t1".to_string())]);
}

#[tokio::test]
async fn test_select_over_fused_page_streams() {
    let fetch_a = scripted(
        vec![Ok(json!({"has_more": false, "items": [1]}))],
        Arc::new(Mutex::new(Vec::new())),
    );
    let fetch_b = scripted(
        vec![
            Ok(json!({"has_more": true, "page_token": "b1", "items": [2]})),
            Ok(json!({"has_more": false, "items": [3]})),
        ],
        Arc::new(Mutex::new(Vec::new())),
    );
    let mut a = Paginator::new(PageShape::default(), fetch_a).into_stream::<i64>();
    let mut b = Paginator::new(PageShape::default(), fetch_b).into_stream::<i64>();

    let mut items = Vec::new();
    loop {
        futures::select! {
            event = a.next() => {
                if let Some(event) = event {
                    items.extend(event.into_result().unwrap().items);
                }
            }
            event = b.next() => {
                if let Some(event) = event {
                    items.extend(event.into_result().unwrap().items);
                }
            }
            complete => break,
        }
    }
    items.sort_unstable();
    assert_eq!(items, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_try_collect_items() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![
            Ok(json!({"has_more": true, "next_page_token": "n1", "items": [1, 2]})),
            Ok(json!({"has_more": false, "items": [3]})),
        ],
        seen.clone(),
    );

    let items: Vec<i64> = Paginator::new(PageShape::default(), fetch)
        .into_stream()
        .try_collect_items()
        .await
        .unwrap();
    assert_eq!(items, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_try_collect_surfaces_failure() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![
            Ok(json!({"has_more": true, "page_token": "t1", "items": [1]})),
            Err(Error::Other("network down".to_string())),
        ],
        seen,
    );

    let result = Paginator::new(PageShape::default(), fetch)
        .into_stream::<i64>()
        .try_collect_pages()
        .await;
    assert!(result.unwrap_err().to_string().contains("network down"));
}

#[tokio::test]
async fn test_custom_items_field() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let fetch = scripted(
        vec![Ok(json!({"has_more": false, "okr_list": [{"id": "o1"}], "total": 1}))],
        seen,
    );

    let pages = Paginator::new(PageShape::items("okr_list"), fetch)
        .into_stream::<Period>()
        .try_collect_pages()
        .await
        .unwrap();
    assert_eq!(pages[0].items, vec![Period { id: "o1".into() }]);
}

#[tokio::test]
async fn test_failed_stream_helper() {
    let events: Vec<PageEvent<JsonValue>> =
        failed_stream(Error::missing_path_param("user_id"))
            .collect()
            .await;
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], PageEvent::Failed(Error::MissingPathParam { .. })));

    let mut stream = failed_stream::<JsonValue>(Error::missing_path_param("user_id"));
    assert!(stream.next().await.is_some());
    assert!(stream.next().await.is_none());
    assert!(stream.next().await.is_none());
    assert!(stream.is_terminated());
}
