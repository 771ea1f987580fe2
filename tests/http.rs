use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct FoodEntry {
    id: String,
    name: String,
    calories: u32,
    protein: u32,
    carbs: u32,
    fats: u32,
}

#[derive(Debug, Deserialize)]
struct MacroTotals {
    calories: u64,
    protein: u64,
    carbs: u64,
    fats: u64,
}

#[derive(Debug, Deserialize)]
struct NutritionResponse {
    breakfast: Vec<FoodEntry>,
    lunch: Vec<FoodEntry>,
    dinner: Vec<FoodEntry>,
    totals: MacroTotals,
}

#[derive(Debug, Deserialize)]
struct ProgressResponse {
    calorie_progress: f64,
    weight_progress: f64,
    total_calories: u64,
    calorie_goal: u32,
    current_weight: f64,
    weight_goal: f64,
    starting_weight: f64,
}

#[derive(Debug, Deserialize)]
struct HydrationResponse {
    date: String,
    glasses: u32,
}

#[derive(Debug, Deserialize)]
struct ReminderPlan {
    title: String,
    body: String,
    times: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SleepEntry {
    date: String,
    hours: f64,
}

#[derive(Debug, Deserialize)]
struct SleepResponse {
    entries: Vec<SleepEntry>,
}

#[derive(Debug, Deserialize)]
struct LeaderboardUser {
    username: String,
    count: u32,
}

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    username: String,
    current_weight: f64,
    height_cm: String,
    use_kilograms: bool,
    birthday: Option<String>,
    age_years: Option<i32>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("fitness_app_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/summary")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_fitness_app"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_nutrition(client: &Client, base_url: &str) -> NutritionResponse {
    client
        .get(format!("{base_url}/api/nutrition"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn get_progress(client: &Client, base_url: &str) -> ProgressResponse {
    client
        .get(format!("{base_url}/api/progress"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn add_food(
    client: &Client,
    base_url: &str,
    meal: &str,
    name: &str,
    calories: &str,
    protein: &str,
    carbs: &str,
    fats: &str,
) -> reqwest::Response {
    client
        .post(format!("{base_url}/api/nutrition/food"))
        .json(&serde_json::json!({
            "meal": meal,
            "name": name,
            "calories": calories,
            "protein": protein,
            "carbs": carbs,
            "fats": fats,
        }))
        .send()
        .await
        .unwrap()
}

fn totals_tuple(totals: &MacroTotals) -> (u64, u64, u64, u64) {
    (totals.calories, totals.protein, totals.carbs, totals.fats)
}

#[tokio::test]
async fn http_worked_example_add_add_remove() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/nutrition/reset", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = add_food(&client, &server.base_url, "breakfast", "Egg", "70", "6", "1", "5").await;
    assert!(response.status().is_success());
    let nutrition: NutritionResponse = response.json().await.unwrap();
    assert_eq!(totals_tuple(&nutrition.totals), (70, 6, 1, 5));
    assert_eq!(nutrition.breakfast.len(), 1);
    assert_eq!(nutrition.breakfast[0].name, "Egg");

    let response = add_food(&client, &server.base_url, "lunch", "Rice", "200", "4", "45", "0").await;
    assert!(response.status().is_success());
    let nutrition: NutritionResponse = response.json().await.unwrap();
    assert_eq!(totals_tuple(&nutrition.totals), (270, 10, 46, 5));
    assert_eq!(nutrition.lunch[0].calories, 200);
    assert_eq!(nutrition.lunch[0].protein, 4);
    assert_eq!(nutrition.lunch[0].fats, 0);

    let egg_id = nutrition.breakfast[0].id.clone();
    let response = client
        .post(format!("{}/api/nutrition/remove", server.base_url))
        .json(&serde_json::json!({ "meal": "breakfast", "id": egg_id }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let nutrition: NutritionResponse = response.json().await.unwrap();
    assert_eq!(totals_tuple(&nutrition.totals), (200, 4, 45, 0));
    assert!(nutrition.breakfast.is_empty());
    assert_eq!(nutrition.lunch.len(), 1);
    assert_eq!(nutrition.lunch[0].carbs, 45);
    assert!(nutrition.dinner.is_empty());
}

#[tokio::test]
async fn http_rejects_malformed_food_submission() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_nutrition(&client, &server.base_url).await;

    for (calories, protein) in [("abc", "6"), ("70", "-2"), ("70", "1.5"), ("", "6")] {
        let response =
            add_food(&client, &server.base_url, "breakfast", "Egg", calories, protein, "1", "5")
                .await;
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    }

    let response = add_food(&client, &server.base_url, "brunch", "Egg", "70", "6", "1", "5").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let after = get_nutrition(&client, &server.base_url).await;
    assert_eq!(totals_tuple(&after.totals), totals_tuple(&before.totals));
    assert_eq!(after.breakfast.len(), before.breakfast.len());
}

#[tokio::test]
async fn http_remove_with_unknown_id_is_a_noop() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_nutrition(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/nutrition/remove", server.base_url))
        .json(&serde_json::json!({
            "meal": "dinner",
            "id": "00000000-0000-4000-8000-000000000000"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let after = get_nutrition(&client, &server.base_url).await;
    assert_eq!(totals_tuple(&after.totals), totals_tuple(&before.totals));
    assert_eq!(after.dinner.len(), before.dinner.len());
}

#[tokio::test]
async fn http_reset_zeroes_totals_and_keeps_goals() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "calorie_goal": "1800", "weight_goal": "68.5" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = add_food(&client, &server.base_url, "dinner", "Pasta", "380", "12", "70", "6").await;
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/api/nutrition/reset", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let nutrition: NutritionResponse = response.json().await.unwrap();
    assert_eq!(totals_tuple(&nutrition.totals), (0, 0, 0, 0));

    let progress = get_progress(&client, &server.base_url).await;
    assert_eq!(progress.total_calories, 0);
    assert_eq!(progress.calorie_goal, 1800);
    assert_eq!(progress.weight_goal, 68.5);
    assert_eq!(progress.calorie_progress, 0.0);
}

#[tokio::test]
async fn http_malformed_goal_text_keeps_prior_goals() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "calorie_goal": "2200", "weight_goal": "71.0" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "calorie_goal": "abc", "weight_goal": "" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let progress: ProgressResponse = response.json().await.unwrap();
    assert_eq!(progress.calorie_goal, 2200);
    assert_eq!(progress.weight_goal, 71.0);

    // Zero and negative goals are ignored as well.
    let response = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "calorie_goal": "0", "weight_goal": "-4" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let progress: ProgressResponse = response.json().await.unwrap();
    assert_eq!(progress.calorie_goal, 2200);
    assert_eq!(progress.weight_goal, 71.0);
}

#[tokio::test]
async fn http_weight_progress_worked_example() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({ "current_weight": "72.0" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/api/goals", server.base_url))
        .json(&serde_json::json!({ "weight_goal": "70.0" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let progress: ProgressResponse = response.json().await.unwrap();

    // starting weight is the fixed 75.0 default: (75 - 72) / (75 - 70) = 0.6
    assert_eq!(progress.starting_weight, 75.0);
    assert_eq!(progress.current_weight, 72.0);
    assert!((progress.weight_progress - 0.6).abs() < 1e-9);
    assert!(progress.calorie_progress >= 0.0 && progress.calorie_progress <= 1.0);
}

#[tokio::test]
async fn http_hydration_counts_and_floors_at_zero() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let today: HydrationResponse = client
        .get(format!("{}/api/hydration", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Drain to zero, then check the floor holds.
    for _ in 0..today.glasses + 2 {
        let response = client
            .post(format!("{}/api/hydration", server.base_url))
            .json(&serde_json::json!({ "action": "sub" }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }
    let drained: HydrationResponse = client
        .get(format!("{}/api/hydration", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(drained.glasses, 0);
    assert!(!drained.date.is_empty());

    let response = client
        .post(format!("{}/api/hydration", server.base_url))
        .json(&serde_json::json!({ "action": "add" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let after: HydrationResponse = response.json().await.unwrap();
    assert_eq!(after.glasses, 1);

    let response = client
        .post(format!("{}/api/hydration", server.base_url))
        .json(&serde_json::json!({ "action": "chug" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_reminder_plan_is_fixed() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let plan: ReminderPlan = client
        .get(format!("{}/api/hydration/reminders", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(plan.title, "Drink Water Reminder");
    assert_eq!(plan.body, "Time to drink a glass of water!");
    assert_eq!(plan.times.len(), 8);
    assert_eq!(plan.times.first().map(String::as_str), Some("08:00"));
    assert_eq!(plan.times.last().map(String::as_str), Some("22:00"));
}

#[tokio::test]
async fn http_sleep_log_validates_and_resets() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/sleep", server.base_url))
        .json(&serde_json::json!({ "date": "2026-02-03", "hours": "lots" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/api/sleep", server.base_url))
        .json(&serde_json::json!({ "date": "2026-02-03", "hours": "-1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let response = client
        .post(format!("{}/api/sleep", server.base_url))
        .json(&serde_json::json!({ "date": "2026-02-03", "hours": "7.5" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let sleep_log: SleepResponse = response.json().await.unwrap();
    let last = sleep_log.entries.last().expect("entry added");
    assert_eq!(last.date, "2026-02-03");
    assert_eq!(last.hours, 7.5);

    let response = client
        .post(format!("{}/api/sleep/reset", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let sleep_log: SleepResponse = response.json().await.unwrap();
    assert!(sleep_log.entries.is_empty());
}

#[tokio::test]
async fn http_leaderboard_is_sorted() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let roster: Vec<LeaderboardUser> = client
        .get(format!("{}/api/leaderboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(roster.len(), 10);
    assert_eq!(roster[0].username, "Sam S");
    for pair in roster.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
}

#[tokio::test]
async fn http_profile_updates_and_ignores_malformed_weight() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({
            "username": "Alex",
            "current_weight": "81.5",
            "height_cm": "180",
            "birthday": "2000-03-01",
            "use_kilograms": true
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let profile: ProfileResponse = response.json().await.unwrap();
    assert_eq!(profile.username, "Alex");
    assert_eq!(profile.current_weight, 81.5);
    assert_eq!(profile.height_cm, "180");
    assert_eq!(profile.birthday.as_deref(), Some("2000-03-01"));
    assert!(profile.age_years.is_some_and(|age| age >= 25));
    assert!(profile.use_kilograms);

    let response = client
        .post(format!("{}/api/profile", server.base_url))
        .json(&serde_json::json!({ "current_weight": "heavy", "birthday": "soon" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let profile: ProfileResponse = response.json().await.unwrap();
    assert_eq!(profile.current_weight, 81.5);
    assert_eq!(profile.birthday.as_deref(), Some("2000-03-01"));
}
