// tests/api_tests.rs

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use privacypal::{
    config::Config,
    content,
    routes,
    state::AppState,
    store::MemoryStore,
    utils::clock::FixedClock,
};
use serde_json::{Value, json};

const ADMIN_EMAIL: &str = "admin@privacypal.test";
const ADMIN_PASSWORD: &str = "correct horse battery";

fn test_state() -> AppState {
    let config = Config {
        data_dir: PathBuf::from("unused"),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        rust_log: "error".to_string(),
        admin_email: ADMIN_EMAIL.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
        daily_question_limit: 5,
    };
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());

    AppState::new(config, Arc::new(MemoryStore::new()), Arc::new(clock)).unwrap()
}

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app() -> String {
    let app = routes::create_router(test_state());

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn register(client: &reqwest::Client, address: &str, email: &str, level: &str) -> Value {
    let response = client
        .post(format!("{}/api/auth/register", address))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "secret123",
            "level": level,
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 201);
    response.json().await.unwrap()
}

async fn login_admin(client: &reqwest::Client, address: &str) {
    let response = client
        .post(format!("{}/api/auth/login", address))
        .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

async fn logout(client: &reqwest::Client, address: &str) {
    let response = client
        .post(format!("{}/api/auth/logout", address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

async fn post_json(client: &reqwest::Client, url: String, body: Value) -> reqwest::Response {
    client.post(url).json(&body).send().await.unwrap()
}

#[tokio::test]
async fn unknown_path_is_404() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn router_rejects_anonymous_session_routes() {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    let app = routes::create_router(test_state());
    let response = app
        .oneshot(Request::get("/api/auth/me").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn register_opens_session_and_rejects_duplicates() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let user = register(&client, &address, "alice@example.com", "mid").await;
    assert_eq!(user["email"], "alice@example.com");
    assert_eq!(user["level"], "mid");

    let me: Value = client
        .get(format!("{}/api/auth/me", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(me["id"], user["id"]);

    let duplicate = post_json(
        &client,
        format!("{}/api/auth/register", address),
        json!({
            "name": "Other",
            "email": "alice@example.com",
            "password": "secret123",
            "level": "entry",
        }),
    )
    .await;
    assert_eq!(duplicate.status().as_u16(), 409);
    let body: Value = duplicate.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn register_validates_input() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let bad_email = post_json(
        &client,
        format!("{}/api/auth/register", address),
        json!({ "name": "A", "email": "not-an-email", "password": "secret123", "level": "entry" }),
    )
    .await;
    assert_eq!(bad_email.status().as_u16(), 400);

    let as_admin = post_json(
        &client,
        format!("{}/api/auth/register", address),
        json!({ "name": "A", "email": "a@example.com", "password": "secret123", "level": "admin" }),
    )
    .await;
    assert_eq!(as_admin.status().as_u16(), 400);
}

#[tokio::test]
async fn login_by_email_and_admin_credential() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "bob@example.com", "top").await;
    logout(&client, &address).await;

    let me = client.get(format!("{}/api/auth/me", address)).send().await.unwrap();
    assert_eq!(me.status().as_u16(), 401);

    // Registered users are matched on email alone
    let login = post_json(
        &client,
        format!("{}/api/auth/login", address),
        json!({ "email": "bob@example.com", "password": "anything" }),
    )
    .await;
    assert_eq!(login.status().as_u16(), 200);
    let user: Value = login.json().await.unwrap();
    assert_eq!(user["level"], "top");

    let unknown = post_json(
        &client,
        format!("{}/api/auth/login", address),
        json!({ "email": "nobody@example.com", "password": "anything" }),
    )
    .await;
    assert_eq!(unknown.status().as_u16(), 401);

    let wrong_admin = post_json(
        &client,
        format!("{}/api/auth/login", address),
        json!({ "email": ADMIN_EMAIL, "password": "wrong" }),
    )
    .await;
    assert_eq!(wrong_admin.status().as_u16(), 401);

    let admin = post_json(
        &client,
        format!("{}/api/auth/login", address),
        json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(admin.status().as_u16(), 200);
    let admin: Value = admin.json().await.unwrap();
    assert_eq!(admin["level"], "admin");
}

#[tokio::test]
async fn admin_routes_require_admin_level() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let anonymous = client.get(format!("{}/api/admin/users", address)).send().await.unwrap();
    assert_eq!(anonymous.status().as_u16(), 401);

    register(&client, &address, "carol@example.com", "entry").await;
    let forbidden = client.get(format!("{}/api/admin/users", address)).send().await.unwrap();
    assert_eq!(forbidden.status().as_u16(), 403);
    let body: Value = forbidden.json().await.unwrap();
    assert!(body["error"].is_string());

    logout(&client, &address).await;
    login_admin(&client, &address).await;

    let users: Value = client
        .get(format!("{}/api/admin/users", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);

    let stats: Value = client
        .get(format!("{}/api/admin/stats", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["entry"], 100);
    assert_eq!(stats["mid"], 0);
}

#[tokio::test]
async fn audit_log_records_logins_newest_first() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    post_json(
        &client,
        format!("{}/api/auth/login", address),
        json!({ "email": "ghost@example.com", "password": "x" }),
    )
    .await;

    let response = client
        .post(format!("{}/api/auth/login", address))
        .header("User-Agent", "integration-test")
        .header("X-Forwarded-For", "10.1.2.3")
        .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let entries: Value = client
        .get(format!("{}/api/admin/audit-logs", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let entries = entries.as_array().unwrap();
    let actions: Vec<&str> = entries.iter().map(|e| e["action"].as_str().unwrap()).collect();
    assert_eq!(
        actions,
        ["login_success", "login_attempt", "login_failure", "login_attempt"]
    );
    assert_eq!(entries[0]["userLevel"], "admin");
    assert_eq!(entries[0]["ipAddress"], "10.1.2.3");
    assert_eq!(entries[0]["userAgent"], "integration-test");
}

#[tokio::test]
async fn tips_are_filtered_by_level_and_category() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "dave@example.com", "entry").await;

    let tips: Value = client
        .get(format!("{}/api/tips", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<&str> = tips
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 6);
    assert!(!ids.contains(&"7"));
    assert!(!ids.contains(&"8"));

    let filtered: Value = client
        .get(format!("{}/api/tips?category=password-security", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(
        filtered
            .as_array()
            .unwrap()
            .iter()
            .all(|t| t["category"] == "password-security")
    );
}

#[tokio::test]
async fn admin_manages_tips() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    login_admin(&client, &address).await;

    let created = post_json(
        &client,
        format!("{}/api/admin/tips", address),
        json!({
            "title": "Lock your screen",
            "content": "Press Win+L before leaving your desk.",
            "category": "office-safety",
            "level": ["top"],
        }),
    )
    .await;
    assert_eq!(created.status().as_u16(), 201);
    let tip: Value = created.json().await.unwrap();
    let id = tip["id"].as_str().unwrap().to_string();

    let all: Value = client
        .get(format!("{}/api/admin/tips", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 9);

    let deleted = client
        .delete(format!("{}/api/admin/tips/{}", address, id))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status().as_u16(), 204);

    let again = client
        .delete(format!("{}/api/admin/tips/{}", address, id))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status().as_u16(), 404);
}

#[tokio::test]
async fn anonymous_reports_stay_out_of_my_reports() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "erin@example.com", "mid").await;

    for (title, anonymous) in [("Phishing email", false), ("Tailgating", true)] {
        let response = post_json(
            &client,
            format!("{}/api/reports", address),
            json!({ "title": title, "description": "Seen today", "isAnonymous": anonymous }),
        )
        .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let mine: Value = client
        .get(format!("{}/api/reports/mine", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["title"], "Phishing email");

    logout(&client, &address).await;
    login_admin(&client, &address).await;

    let all: Value = client
        .get(format!("{}/api/admin/reports", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 2);
    let anonymous = all.iter().find(|r| r["isAnonymous"] == true).unwrap();
    assert!(anonymous.get("userId").is_none());

    let updated = client
        .put(format!(
            "{}/api/admin/reports/{}/status",
            address,
            anonymous["id"].as_str().unwrap()
        ))
        .json(&json!({ "status": "resolved" }))
        .send()
        .await
        .unwrap();
    assert_eq!(updated.status().as_u16(), 200);
    let updated: Value = updated.json().await.unwrap();
    assert_eq!(updated["status"], "resolved");
}

#[tokio::test]
async fn reminders_belong_to_their_owner() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "frank@example.com", "entry").await;

    let created = post_json(
        &client,
        format!("{}/api/reminders", address),
        json!({ "title": "Rotate passwords", "dueDate": "2024-04-01" }),
    )
    .await;
    assert_eq!(created.status().as_u16(), 201);
    let reminder: Value = created.json().await.unwrap();
    let id = reminder["id"].as_str().unwrap().to_string();
    assert_eq!(reminder["completed"], false);

    let toggled: Value = client
        .post(format!("{}/api/reminders/{}/toggle", address, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled["completed"], true);

    let updated: Value = client
        .put(format!("{}/api/reminders/{}", address, id))
        .json(&json!({ "title": "Rotate all passwords" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["title"], "Rotate all passwords");
    assert_eq!(updated["completed"], true);

    logout(&client, &address).await;
    register(&client, &address, "grace@example.com", "top").await;

    let theirs: Value = client
        .get(format!("{}/api/reminders", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(theirs.as_array().unwrap().is_empty());

    let foreign = client
        .delete(format!("{}/api/reminders/{}", address, id))
        .send()
        .await
        .unwrap();
    assert_eq!(foreign.status().as_u16(), 404);
}

fn quiz_answer(id: u64) -> usize {
    content::quiz::questions()
        .iter()
        .find(|q| u64::from(q.id) == id)
        .map(|q| q.correct)
        .unwrap()
}

fn true_false_answer(id: u64) -> bool {
    content::true_false::questions()
        .iter()
        .find(|q| u64::from(q.id) == id)
        .map(|q| q.correct)
        .unwrap()
}

#[tokio::test]
async fn quiz_reuses_daily_questions_until_play_again() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    register(&client, &address, "heidi@example.com", "mid").await;

    let not_started = client.get(format!("{}/api/games/quiz", address)).send().await.unwrap();
    assert_eq!(not_started.status().as_u16(), 404);

    let first: Value = client
        .post(format!("{}/api/games/quiz/start", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["total"], 5);
    assert_eq!(first["phase"], "awaiting_answer");
    assert!(first["question"].get("correct").is_none());

    let question_id = first["question"]["id"].as_u64().unwrap();
    let answered: Value = post_json(
        &client,
        format!("{}/api/games/quiz/answer", address),
        json!({ "answer": quiz_answer(question_id) }),
    )
    .await
    .json()
    .await
    .unwrap();
    assert_eq!(answered["phase"], "answer_shown");
    assert_eq!(answered["score"], 1);
    assert_eq!(answered["lastCorrect"], true);
    assert!(answered["question"]["explanation"].is_string());

    let twice = post_json(
        &client,
        format!("{}/api/games/quiz/answer", address),
        json!({ "answer": 0 }),
    )
    .await;
    assert_eq!(twice.status().as_u16(), 409);

    let next: Value = client
        .post(format!("{}/api/games/quiz/next", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(next["index"], 1);
    assert_eq!(next["phase"], "awaiting_answer");

    // Starting again the same day replays the same first question
    let restarted: Value = client
        .post(format!("{}/api/games/quiz/start", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(restarted["question"]["id"], first["question"]["id"]);
    assert_eq!(restarted["index"], 0);
    assert_eq!(restarted["score"], 0);

    let again: Value = client
        .post(format!("{}/api/games/quiz/play-again", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again["index"], 0);
    assert_eq!(again["score"], 0);
    assert_eq!(again["total"], 5);

    let out_of_range = post_json(
        &client,
        format!("{}/api/games/quiz/answer", address),
        json!({ "answer": 9 }),
    )
    .await;
    assert_eq!(out_of_range.status().as_u16(), 400);
}

#[tokio::test]
async fn true_false_game_runs_to_completion() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    register(&client, &address, "ivan@example.com", "entry").await;

    let mut view: Value = client
        .post(format!("{}/api/games/true-false/start", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    for round in 0..5 {
        let id = view["question"]["id"].as_u64().unwrap();
        view = post_json(
            &client,
            format!("{}/api/games/true-false/answer", address),
            json!({ "answer": true_false_answer(id) }),
        )
        .await
        .json()
        .await
        .unwrap();

        if round < 4 {
            view = client
                .post(format!("{}/api/games/true-false/next", address))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
        }
    }

    assert_eq!(view["phase"], "complete");
    assert_eq!(view["score"], 5);
    assert!(view["message"].as_str().unwrap().starts_with("Excellent"));

    let after = client
        .post(format!("{}/api/games/true-false/next", address))
        .send()
        .await
        .unwrap();
    assert_eq!(after.status().as_u16(), 409);
}

#[tokio::test]
async fn matching_round_scores_placements() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();
    register(&client, &address, "judy@example.com", "top").await;

    let missing = post_json(&client, format!("{}/api/games/matching/submit", address), json!({})).await;
    assert_eq!(missing.status().as_u16(), 404);

    let round: Value = client
        .post(format!("{}/api/games/matching/start", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let term_ids: Vec<u64> = round["terms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(term_ids.len(), 5);
    assert_eq!(round["definitions"].as_array().unwrap().len(), 5);

    let unknown = post_json(
        &client,
        format!("{}/api/games/matching/place", address),
        json!({ "termId": 999, "definitionId": term_ids[0] }),
    )
    .await;
    assert_eq!(unknown.status().as_u16(), 400);

    for id in &term_ids {
        let placed = post_json(
            &client,
            format!("{}/api/games/matching/place", address),
            json!({ "termId": id, "definitionId": id }),
        )
        .await;
        assert_eq!(placed.status().as_u16(), 200);
    }

    let result: Value = post_json(&client, format!("{}/api/games/matching/submit", address), json!({}))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(result["score"], 5);
    assert_eq!(result["complete"], true);
    assert!(result["message"].as_str().unwrap().starts_with("Perfect"));
}

#[tokio::test]
async fn games_require_a_session() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/games/quiz/start", address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn games_do_not_carry_over_between_users() {
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    register(&client, &address, "alice@example.com", "mid").await;
    let started: Value = client
        .post(format!("{}/api/games/true-false/start", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = started["question"]["id"].as_u64().unwrap();
    let answered = post_json(
        &client,
        format!("{}/api/games/true-false/answer", address),
        json!({ "answer": true_false_answer(id) }),
    )
    .await;
    assert_eq!(answered.status().as_u16(), 200);
    client
        .post(format!("{}/api/games/matching/start", address))
        .send()
        .await
        .unwrap();
    logout(&client, &address).await;

    register(&client, &address, "bob@example.com", "entry").await;
    for game in ["quiz", "true-false", "matching"] {
        let response = client
            .get(format!("{}/api/games/{}", address, game))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 404, "{game}");
    }

    let answer = post_json(
        &client,
        format!("{}/api/games/true-false/answer", address),
        json!({ "answer": true }),
    )
    .await;
    assert_eq!(answer.status().as_u16(), 404);
}
