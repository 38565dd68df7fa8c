//! End-to-end tests for the submit-and-notify flow.
//!
//! The external collaborators are stood up in-process: a stub weather
//! provider serving a canned payload and a webhook receiver that forwards
//! every delivery to the test over a channel.

use axum::{
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use weather_agent::{
    card, create_routes, AppState, TaskDispatcher, WeatherClient, WebhookNotifier,
    PUSH_CREDENTIAL_HEADER,
};

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(5);

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stub weather provider answering every GET with the given payload.
async fn spawn_provider(payload: Value) -> String {
    let app = Router::new().route(
        "/",
        get(move || {
            let payload = payload.clone();
            async move { Json(payload) }
        }),
    );
    serve(app).await
}

/// Webhook receiver forwarding (credential header, body) pairs to the test.
async fn spawn_webhook() -> (String, mpsc::Receiver<(String, Value)>) {
    let (tx, rx) = mpsc::channel(4);
    let app = Router::new().route(
        "/hook",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let tx = tx.clone();
            async move {
                let credential = headers
                    .get(PUSH_CREDENTIAL_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                tx.send((credential, body)).await.ok();
                StatusCode::OK
            }
        }),
    );
    let base = serve(app).await;
    (format!("{base}/hook"), rx)
}

/// The agent itself, wired to the given provider URL.
async fn spawn_agent(provider_url: &str) -> String {
    let http = reqwest::Client::new();
    let weather = WeatherClient::new(http.clone(), format!("{provider_url}/"), "test-key");
    let dispatcher = Arc::new(TaskDispatcher::new(weather, WebhookNotifier::new(http)));
    let state = AppState {
        dispatcher,
        card: Arc::new(card::agent_card()),
    };
    serve(create_routes(state)).await
}

fn submit_body(request_id: &str, text: &str, webhook_url: &str, credential: &str) -> Value {
    json!({
        "id": request_id,
        "params": {
            "message": {"role": "user", "parts": [{"text": text, "contentType": "text/plain"}]},
            "configuration": {
                "pushNotificationConfig": {
                    "url": webhook_url,
                    "authentication": {"credentials": credential}
                }
            }
        }
    })
}

#[tokio::test]
async fn completed_task_is_delivered_to_the_webhook() {
    let provider = spawn_provider(json!({
        "location": {"name": "Abuja"},
        "current": {
            "temp_c": 29.5,
            "feelslike_c": 32.4,
            "condition": {"text": "partly cloudy"}
        }
    }))
    .await;
    let (webhook_url, mut webhook_rx) = spawn_webhook().await;
    let agent = spawn_agent(&provider).await;

    let response = reqwest::Client::new()
        .post(&agent)
        .json(&submit_body("r1", "Abuja", &webhook_url, "K"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let ack: Value = response.json().await.unwrap();
    assert_eq!(ack["id"], "r1");
    assert_eq!(ack["result"]["status"]["state"], "SUBMITTED");
    assert!(ack.get("error").is_none());

    let task_id = ack["result"]["id"].as_str().unwrap().to_string();
    assert_eq!(task_id.len(), 32);
    assert!(task_id.chars().all(|c| c.is_ascii_hexdigit()));

    let (credential, delivery) = tokio::time::timeout(WEBHOOK_TIMEOUT, webhook_rx.recv())
        .await
        .expect("webhook should be called")
        .expect("receiver open");

    assert_eq!(credential, "K");
    assert_eq!(delivery["id"], "r1");
    assert_eq!(delivery["result"]["id"], task_id.as_str());
    assert_eq!(delivery["result"]["status"]["state"], "COMPLETED");
    assert!(delivery.get("error").is_none());
    assert_eq!(
        delivery["result"]["artifacts"][0]["parts"][0]["text"],
        "The weather in Abuja is 29.5 degrees but feels like 32.4 degrees. Partly cloudy"
    );
}

#[tokio::test]
async fn minimal_role_less_request_completes_end_to_end() {
    let provider = spawn_provider(json!({
        "current": {
            "temp_c": 29.5,
            "feelslike_c": 32.4,
            "condition": {"text": "partly cloudy"}
        }
    }))
    .await;
    let (webhook_url, mut webhook_rx) = spawn_webhook().await;
    let agent = spawn_agent(&provider).await;

    // The leanest accepted caller shape: no role on the message, no jsonrpc
    // field, configuration as a sibling of params.
    let body = json!({
        "id": "r1",
        "params": {"message": {"parts": [{"text": "Abuja"}]}},
        "configuration": {
            "pushNotificationConfig": {
                "url": webhook_url,
                "authentication": {"credentials": "K"}
            }
        }
    });

    let ack: Value = reqwest::Client::new()
        .post(&agent)
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(ack["id"], "r1");
    assert!(ack.get("error").is_none());
    assert_eq!(ack["result"]["status"]["state"], "SUBMITTED");

    let (credential, delivery) = tokio::time::timeout(WEBHOOK_TIMEOUT, webhook_rx.recv())
        .await
        .expect("webhook should be called")
        .expect("receiver open");

    assert_eq!(credential, "K");
    assert_eq!(delivery["id"], "r1");
    assert_eq!(delivery["result"]["id"], ack["result"]["id"]);
    assert_eq!(delivery["result"]["status"]["state"], "COMPLETED");
    assert_eq!(
        delivery["result"]["artifacts"][0]["parts"][0]["text"],
        "The weather in Abuja is 29.5 degrees but feels like 32.4 degrees. Partly cloudy"
    );
}

#[tokio::test]
async fn malformed_provider_payload_delivers_a_failed_task() {
    let provider = spawn_provider(json!({"error": {"message": "No matching location found."}})).await;
    let (webhook_url, mut webhook_rx) = spawn_webhook().await;
    let agent = spawn_agent(&provider).await;

    let ack: Value = reqwest::Client::new()
        .post(&agent)
        .json(&submit_body("r2", "Nowhere", &webhook_url, "K"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ack["result"]["status"]["state"], "SUBMITTED");

    let (credential, delivery) = tokio::time::timeout(WEBHOOK_TIMEOUT, webhook_rx.recv())
        .await
        .expect("webhook should be called")
        .expect("receiver open");

    assert_eq!(credential, "K");
    assert_eq!(delivery["id"], "r2");
    assert_eq!(delivery["result"]["id"], ack["result"]["id"]);
    assert_eq!(delivery["result"]["status"]["state"], "FAILED");
    assert!(delivery["result"].get("artifacts").is_none());
}

#[tokio::test]
async fn empty_message_text_schedules_no_webhook_call() {
    let provider = spawn_provider(json!({
        "current": {"temp_c": 20.0, "feelslike_c": 20.0, "condition": {"text": "Sunny"}}
    }))
    .await;
    let (webhook_url, mut webhook_rx) = spawn_webhook().await;
    let agent = spawn_agent(&provider).await;

    let response = reqwest::Client::new()
        .post(&agent)
        .json(&submit_body("r3", "", &webhook_url, "K"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: Value = response.json().await.unwrap();
    assert_eq!(envelope["id"], "r3");
    assert_eq!(envelope["error"]["code"], -32602);
    assert_eq!(envelope["error"]["message"], "Message cannot be empty.");
    assert!(envelope.get("result").is_none());

    let no_delivery = tokio::time::timeout(Duration::from_millis(400), webhook_rx.recv()).await;
    assert!(no_delivery.is_err(), "no webhook call expected");
}

#[tokio::test]
async fn unparseable_body_returns_parse_error_with_null_id() {
    let provider = spawn_provider(json!({})).await;
    let agent = spawn_agent(&provider).await;

    let response = reqwest::Client::new()
        .post(&agent)
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let envelope: Value = response.json().await.unwrap();
    assert_eq!(envelope["id"], Value::Null);
    assert_eq!(envelope["error"]["code"], -32700);
    assert!(envelope.get("result").is_none());
}

#[tokio::test]
async fn agent_card_is_rewritten_for_the_serving_host() {
    let provider = spawn_provider(json!({})).await;
    let agent = spawn_agent(&provider).await;

    let card: Value = reqwest::get(format!("{agent}/.well-known/agent.json"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(card["name"], "CurrentWeatherAgent");
    assert_eq!(card["url"], agent.as_str());
    assert_eq!(card["provider"]["url"], agent.as_str());
    assert_eq!(card["documentationUrl"], format!("{agent}/docs"));
    assert_eq!(card["capabilities"]["pushNotifications"], true);
    assert_eq!(card["capabilities"]["streaming"], false);
}

#[tokio::test]
async fn landing_page_is_served() {
    let provider = spawn_provider(json!({})).await;
    let agent = spawn_agent(&provider).await;

    let body = reqwest::get(&agent).await.unwrap().text().await.unwrap();
    assert!(body.contains("Current Weather Agent"));
}
