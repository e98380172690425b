use std::time::Duration;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use queue_client::{ApiError, ClientSettings, QueueApi, ReqwestQueueApi};
use queue_core::{EntryUpdate, NewEntry};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> ClientSettings {
    ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    }
}

fn queue_body() -> serde_json::Value {
    json!({
        "queue": [
            {
                "id": 7,
                "submissiontimestamp": "2024-03-01 12:00:00",
                "staff": "A",
                "customer": "B",
                "contact": "c@x",
                "filename": "local:foo.gcode",
                "note": "n",
                "printtype": 0,
                "cost": 1.5,
                "prepaid": 1,
                "archived": 0
            }
        ]
    })
}

#[tokio::test]
async fn fetch_queue_parses_records_and_passes_force() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queue_body()))
        .mount(&server)
        .await;

    let api = ReqwestQueueApi::new(&settings(&server)).expect("client builds");
    let entries = api.fetch_queue(true).await.expect("fetch ok");

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.id, 7);
    assert_eq!(entry.staff, "A");
    assert_eq!(entry.file_ref, "local:foo.gcode");
    assert_eq!(entry.display_name(), "foo.gcode");
    assert!(entry.prepaid);
    assert!(!entry.archived);
    assert_eq!(
        entry.submitted_at,
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn malformed_record_degrades_without_blocking_the_rest() {
    let server = MockServer::start().await;
    let body = json!({
        "queue": [
            { "id": "garbage", "cost": [], "archived": "nope" },
            {
                "id": 2,
                "submissiontimestamp": "2024-03-01 12:00:00",
                "filename": "ok.gcode",
                "archived": 1
            }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/queue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let api = ReqwestQueueApi::new(&settings(&server)).expect("client builds");
    let entries = api.fetch_queue(false).await.expect("fetch ok");

    assert_eq!(entries.len(), 2);
    // Bad fields default instead of failing the refresh.
    assert_eq!(entries[0].id, 0);
    assert_eq!(entries[0].cost, 0.0);
    assert!(!entries[0].archived);
    // The well-formed sibling is untouched.
    assert_eq!(entries[1].id, 2);
    assert!(entries[1].archived);
}

#[tokio::test]
async fn missing_envelope_yields_empty_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = ReqwestQueueApi::new(&settings(&server)).expect("client builds");
    let entries = api.fetch_queue(false).await.expect("fetch ok");
    assert!(entries.is_empty());
}

#[tokio::test]
async fn http_status_maps_to_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = ReqwestQueueApi::new(&settings(&server)).expect("client builds");
    let err = api.fetch_queue(false).await.unwrap_err();
    assert_eq!(err, ApiError::Status(500));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/queue"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "queue": [] })),
        )
        .mount(&server)
        .await;

    let api = ReqwestQueueApi::new(&ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    })
    .expect("client builds");

    let err = api.fetch_queue(false).await.unwrap_err();
    assert_eq!(err, ApiError::Timeout);
}

#[tokio::test]
async fn add_to_queue_sends_exact_payload_with_archived_zero() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/addtoqueue"))
        .and(body_json(json!({
            "staff": "A",
            "customer": "B",
            "contact": "c@x",
            "filename": "local:foo.gcode",
            "note": "n",
            "cost": 1.5,
            "prepaid": 1,
            "printtype": 0,
            "archived": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(queue_body()))
        .mount(&server)
        .await;

    let api = ReqwestQueueApi::new(&settings(&server)).expect("client builds");
    let entries = api
        .add_to_queue(&NewEntry {
            staff: "A".to_string(),
            customer: "B".to_string(),
            contact: "c@x".to_string(),
            file_ref: "local:foo.gcode".to_string(),
            note: "n".to_string(),
            cost: 1.5,
            prepaid: true,
            print_type: 0,
        })
        .await
        .expect("create ok");

    // The response is the authoritative collection with the assigned id.
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, 7);
}

#[tokio::test]
async fn set_archived_sends_toggle_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/archive"))
        .and(body_json(json!({ "id": 3, "archived": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "queue": [{ "id": 3, "archived": 1 }]
        })))
        .mount(&server)
        .await;

    let api = ReqwestQueueApi::new(&settings(&server)).expect("client builds");
    let entries = api.set_archived(3, true).await.expect("archive ok");

    assert_eq!(entries.len(), 1);
    assert!(entries[0].archived);
}

#[tokio::test]
async fn modify_item_sends_the_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/modifyitem"))
        .and(body_json(json!({
            "id": 7,
            "staff": "A",
            "customer": "B",
            "contact": "c@x",
            "filename": "local:foo.gcode",
            "note": "updated",
            "cost": 2.0,
            "prepaid": 0,
            "archived": 0,
            "printtype": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(queue_body()))
        .mount(&server)
        .await;

    let api = ReqwestQueueApi::new(&settings(&server)).expect("client builds");
    let entries = api
        .modify_item(&EntryUpdate {
            id: 7,
            staff: "A".to_string(),
            customer: "B".to_string(),
            contact: "c@x".to_string(),
            file_ref: "local:foo.gcode".to_string(),
            note: "updated".to_string(),
            cost: 2.0,
            prepaid: false,
            archived: false,
            print_type: 1,
        })
        .await
        .expect("modify ok");

    assert_eq!(entries.len(), 1);
}
