//! Form flow tests: keystrokes through submission to the displayed greeting.
//!
//! Requests go to real listeners on 127.0.0.1: either greetd itself or a
//! scripted server that records raw query strings.

use axum::extract::RawQuery;
use axum::routing::get;
use axum::{Json, Router};
use crossterm::event::{KeyCode, KeyModifiers};
use greetctl::endpoint::parse_base_url;
use greetctl::{dispatch, Completion, GreetingClient, GreetingForm};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

// ============================================================================
// Helpers
// ============================================================================

/// Queries seen by the scripted server, in arrival order
type QueryLog = Arc<Mutex<Vec<String>>>;

async fn start_router(app: Router) -> GreetingClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    GreetingClient::new(parse_base_url(&format!("http://{}/", addr)).unwrap())
}

async fn start_greetd() -> GreetingClient {
    let state = greetd::server::AppState::new(greetd::config::GreetingConfig::default());
    start_router(greetd::server::router(state)).await
}

/// Server that records each raw query and answers with `reply(query)`
async fn start_scripted<F>(reply: F) -> (GreetingClient, QueryLog)
where
    F: Fn(&str) -> (Duration, Value) + Clone + Send + Sync + 'static,
{
    let log: QueryLog = Arc::new(Mutex::new(Vec::new()));

    let handler_log = log.clone();
    let app = Router::new().route(
        "/",
        get(move |RawQuery(query): RawQuery| {
            let log = handler_log.clone();
            let reply = reply.clone();
            async move {
                let query = query.unwrap_or_default();
                log.lock().unwrap().push(query.clone());
                let (delay, body) = reply(&query);
                tokio::time::sleep(delay).await;
                Json(body)
            }
        }),
    );

    (start_router(app).await, log)
}

fn type_name(form: &mut GreetingForm, name: &str) {
    for c in name.chars() {
        form.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
    }
}

/// Press Enter and run every resulting request to completion
async fn submit_and_settle(form: &mut GreetingForm, client: &GreetingClient) {
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();

    let submission = form
        .handle_key(KeyCode::Enter, KeyModifiers::NONE)
        .expect("Enter submits");
    dispatch(client, submission, tx).await.unwrap();

    while let Some(completion) = rx.recv().await {
        form.apply(completion);
    }
}

// ============================================================================
// Input
// ============================================================================

#[test]
fn test_typing_updates_name_char_for_char() {
    let samples = [
        "Ada",
        "a b",
        "João!",
        "O'Brien-Smith",
        "100% & more?",
        "名前",
        "  padded  ",
        "~`!@#$%^&*()_+{}|:\"<>?",
    ];

    for sample in samples {
        let mut form = GreetingForm::new();
        let mut typed = String::new();
        for c in sample.chars() {
            form.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
            typed.push(c);
            assert_eq!(form.name(), typed);
        }
        assert_eq!(form.name(), sample);
    }
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn test_submit_issues_exactly_one_request() {
    let (client, log) =
        start_scripted(|_| (Duration::ZERO, json!({"message": "Hello, Ada"}))).await;

    let mut form = GreetingForm::new();
    type_name(&mut form, "Ada");
    submit_and_settle(&mut form, &client).await;

    assert_eq!(*log.lock().unwrap(), vec!["name=Ada".to_string()]);
    assert_eq!(form.greeting(), Some("Hello, Ada"));
}

#[tokio::test]
async fn test_space_and_reserved_chars_are_encoded() {
    let (client, log) = start_scripted(|_| (Duration::ZERO, json!({"message": "ok"}))).await;

    let mut form = GreetingForm::new();
    type_name(&mut form, "a b");
    submit_and_settle(&mut form, &client).await;

    let mut form = GreetingForm::new();
    type_name(&mut form, "x&y=z");
    submit_and_settle(&mut form, &client).await;

    assert_eq!(
        *log.lock().unwrap(),
        vec!["name=a+b".to_string(), "name=x%26y%3Dz".to_string()]
    );
}

// ============================================================================
// Response handling
// ============================================================================

#[tokio::test]
async fn test_greeting_from_greetd() {
    let client = start_greetd().await;

    let mut form = GreetingForm::new();
    type_name(&mut form, "João Silva");
    submit_and_settle(&mut form, &client).await;

    assert_eq!(form.greeting(), Some("Olá, João Silva"));
}

#[tokio::test]
async fn test_greetd_rejection_clears_greeting() {
    let client = start_greetd().await;

    let mut form = GreetingForm::new();
    type_name(&mut form, "Ada");
    submit_and_settle(&mut form, &client).await;
    assert_eq!(form.greeting(), Some("Olá, Ada"));

    // An empty name gets a 422 whose body has no message
    for _ in 0..3 {
        form.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
    }
    submit_and_settle(&mut form, &client).await;
    assert_eq!(form.greeting(), None);
}

#[tokio::test]
async fn test_body_without_message_clears_greeting() {
    let (client, _) = start_scripted(|query| {
        if query == "name=first" {
            (Duration::ZERO, json!({"message": "Hello, first"}))
        } else {
            (Duration::ZERO, json!({"greeting": "wrong field"}))
        }
    })
    .await;

    let mut form = GreetingForm::new();
    type_name(&mut form, "first");
    submit_and_settle(&mut form, &client).await;
    assert_eq!(form.greeting(), Some("Hello, first"));

    form.handle_key(KeyCode::Char('!'), KeyModifiers::NONE);
    submit_and_settle(&mut form, &client).await;
    assert_eq!(form.greeting(), None);
}

#[tokio::test]
async fn test_non_json_body_leaves_greeting_unchanged() {
    let app = Router::new().route("/", get(|| async { "plain text, not JSON" }));
    let client = start_router(app).await;

    let mut form = GreetingForm::new();
    form.apply(Completion {
        seq: 0,
        greeting: Some("previous".to_string()),
    });
    type_name(&mut form, "Ada");
    submit_and_settle(&mut form, &client).await;

    assert_eq!(form.greeting(), Some("previous"));
}

#[tokio::test]
async fn test_unreachable_endpoint_leaves_greeting_unchanged() {
    // Grab a free port, then close it
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GreetingClient::new(parse_base_url(&format!("http://{}/", addr)).unwrap());

    let mut form = GreetingForm::new();
    type_name(&mut form, "Ada");
    submit_and_settle(&mut form, &client).await;

    assert_eq!(form.greeting(), None);
    assert_eq!(form.name(), "Ada");
}

// ============================================================================
// Overlapping submissions
// ============================================================================

#[tokio::test]
async fn test_last_completion_wins() {
    let (client, log) = start_scripted(|query| {
        if query == "name=slow" {
            (Duration::from_millis(300), json!({"message": "Hello, slow"}))
        } else {
            (Duration::ZERO, json!({"message": "Hello, fast"}))
        }
    })
    .await;

    let mut form = GreetingForm::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    type_name(&mut form, "slow");
    let first = form.handle_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    let slow = dispatch(&client, first, tx.clone());

    // Give the first request time to reach the server
    tokio::time::sleep(Duration::from_millis(50)).await;

    for _ in 0.."slow".len() {
        form.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
    }
    type_name(&mut form, "fast");
    let second = form.handle_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    let fast = dispatch(&client, second, tx);

    fast.await.unwrap();
    slow.await.unwrap();

    let mut arrival = Vec::new();
    while let Some(completion) = rx.recv().await {
        arrival.push(completion.seq);
        form.apply(completion);
    }

    assert_eq!(log.lock().unwrap().len(), 2);
    // The second submission answered first; the first one answered last
    assert_eq!(arrival, vec![2, 1]);
    assert_eq!(form.greeting(), Some("Hello, slow"));
}
