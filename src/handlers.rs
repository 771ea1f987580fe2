use crate::errors::AppError;
use crate::models::{
    AddFoodRequest, AddSleepRequest, FoodEntry, GoalUpdateRequest, HydrationRequest,
    HydrationResponse, LeaderboardUser, Meal, NutritionLedger, NutritionResponse, Profile,
    ProfileResponse, ProfileUpdateRequest, ProgressResponse, ReminderPlan, RemoveFoodRequest,
    SleepEntry, SleepResponse, SummaryResponse,
};
use crate::state::AppState;
use crate::stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data.profile.username, &today_string()))
}

pub async fn get_summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(stats::build_summary(&data)))
}

pub async fn get_nutrition(
    State(state): State<AppState>,
) -> Result<Json<NutritionResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(nutrition_response(&data.nutrition)))
}

pub async fn add_food(
    State(state): State<AppState>,
    Json(payload): Json<AddFoodRequest>,
) -> Result<Json<NutritionResponse>, AppError> {
    let meal = parse_meal(&payload.meal)?;
    let entry = FoodEntry::parse(
        &payload.name,
        &payload.calories,
        &payload.protein,
        &payload.carbs,
        &payload.fats,
    )
    .ok_or_else(|| {
        AppError::bad_request("name is required and all macro fields must be non-negative integers")
    })?;

    let mut data = state.data.lock().await;
    data.nutrition.add(meal, entry);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(nutrition_response(&data.nutrition)))
}

pub async fn remove_food(
    State(state): State<AppState>,
    Json(payload): Json<RemoveFoodRequest>,
) -> Result<Json<NutritionResponse>, AppError> {
    let meal = parse_meal(&payload.meal)?;

    let mut data = state.data.lock().await;
    // An unknown id is a no-op, not an error.
    if data.nutrition.remove(meal, payload.id) {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(nutrition_response(&data.nutrition)))
}

pub async fn reset_nutrition(
    State(state): State<AppState>,
) -> Result<Json<NutritionResponse>, AppError> {
    let mut data = state.data.lock().await;
    data.nutrition.reset();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(nutrition_response(&data.nutrition)))
}

pub async fn get_progress(
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(stats::build_progress(&data)))
}

pub async fn update_goals(
    State(state): State<AppState>,
    Json(payload): Json<GoalUpdateRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let mut data = state.data.lock().await;

    // Unparseable or non-positive fields keep their prior value, per field.
    if let Some(raw) = payload.calorie_goal.as_deref() {
        if let Ok(goal) = raw.trim().parse::<u32>() {
            if goal > 0 {
                data.goals.calorie_goal = goal;
            }
        }
    }
    if let Some(raw) = payload.weight_goal.as_deref() {
        if let Ok(goal) = raw.trim().parse::<f64>() {
            if goal.is_finite() && goal > 0.0 {
                data.goals.weight_goal = goal;
            }
        }
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(stats::build_progress(&data)))
}

pub async fn get_hydration(
    State(state): State<AppState>,
) -> Result<Json<HydrationResponse>, AppError> {
    let date = today_string();
    let data = state.data.lock().await;
    let glasses = data.hydration.days.get(&date).copied().unwrap_or(0);

    Ok(Json(HydrationResponse { date, glasses }))
}

pub async fn hydrate(
    State(state): State<AppState>,
    Json(payload): Json<HydrationRequest>,
) -> Result<Json<HydrationResponse>, AppError> {
    let action = payload.action.trim();
    if action != "add" && action != "sub" {
        return Err(AppError::bad_request("action must be 'add' or 'sub'"));
    }

    let date = today_string();
    let mut data = state.data.lock().await;
    let glasses = {
        let entry = data.hydration.days.entry(date.clone()).or_default();
        if action == "add" {
            *entry = entry.saturating_add(1);
        } else {
            *entry = entry.saturating_sub(1);
        }
        *entry
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(HydrationResponse { date, glasses }))
}

pub async fn get_reminders() -> Json<ReminderPlan> {
    Json(stats::reminder_plan())
}

pub async fn get_sleep(State(state): State<AppState>) -> Result<Json<SleepResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(SleepResponse {
        entries: data.sleep.entries.clone(),
    }))
}

pub async fn add_sleep(
    State(state): State<AppState>,
    Json(payload): Json<AddSleepRequest>,
) -> Result<Json<SleepResponse>, AppError> {
    let hours = payload
        .hours
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|hours| hours.is_finite() && *hours >= 0.0)
        .ok_or_else(|| AppError::bad_request("hours must be a non-negative number"))?;

    let date = match payload.date.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::bad_request("date must be YYYY-MM-DD"))?
            .to_string(),
        None => today_string(),
    };

    let mut data = state.data.lock().await;
    data.sleep.entries.push(SleepEntry {
        id: Uuid::new_v4(),
        date,
        hours,
    });
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SleepResponse {
        entries: data.sleep.entries.clone(),
    }))
}

pub async fn reset_sleep(State(state): State<AppState>) -> Result<Json<SleepResponse>, AppError> {
    let mut data = state.data.lock().await;
    data.sleep.entries.clear();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SleepResponse {
        entries: data.sleep.entries.clone(),
    }))
}

pub async fn get_leaderboard() -> Json<Vec<LeaderboardUser>> {
    Json(stats::leaderboard())
}

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<ProfileResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(profile_response(&data.profile)))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileUpdateRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let mut data = state.data.lock().await;

    if let Some(name) = payload.username {
        data.profile.username = name.trim().to_string();
    }
    if let Some(raw) = payload.current_weight.as_deref() {
        if let Ok(weight) = raw.trim().parse::<f64>() {
            if weight.is_finite() && weight >= 0.0 {
                data.profile.current_weight = weight;
            }
        }
    }
    if let Some(height) = payload.height_cm {
        data.profile.height_cm = height.trim().to_string();
    }
    if let Some(flag) = payload.use_kilograms {
        data.profile.use_kilograms = flag;
    }
    if let Some(raw) = payload.birthday.as_deref() {
        if let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            data.profile.birthday = Some(date.to_string());
        }
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(profile_response(&data.profile)))
}

fn parse_meal(raw: &str) -> Result<Meal, AppError> {
    Meal::parse(raw)
        .ok_or_else(|| AppError::bad_request("meal must be 'breakfast', 'lunch' or 'dinner'"))
}

fn nutrition_response(ledger: &NutritionLedger) -> NutritionResponse {
    NutritionResponse {
        breakfast: ledger.breakfast.clone(),
        lunch: ledger.lunch.clone(),
        dinner: ledger.dinner.clone(),
        totals: ledger.totals(),
    }
}

fn profile_response(profile: &Profile) -> ProfileResponse {
    let age_years = profile
        .birthday
        .as_deref()
        .and_then(|birthday| stats::age_years(birthday, Local::now().date_naive()));
    ProfileResponse {
        username: profile.username.clone(),
        current_weight: profile.current_weight,
        height_cm: profile.height_cm.clone(),
        use_kilograms: profile.use_kilograms,
        birthday: profile.birthday.clone(),
        age_years,
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
