use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: Uuid,
    pub name: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NutritionLedger {
    pub breakfast: Vec<FoodEntry>,
    pub lunch: Vec<FoodEntry>,
    pub dinner: Vec<FoodEntry>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: u64,
    pub protein: u64,
    pub carbs: u64,
    pub fats: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSettings {
    pub calorie_goal: u32,
    pub weight_goal: f64,
    pub starting_weight: f64,
}

impl Default for GoalSettings {
    fn default() -> Self {
        Self {
            calorie_goal: 2000,
            weight_goal: 70.0,
            starting_weight: 75.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HydrationLog {
    pub days: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepEntry {
    pub id: Uuid,
    pub date: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SleepLog {
    pub entries: Vec<SleepEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub current_weight: f64,
    pub height_cm: String,
    pub use_kilograms: bool,
    pub birthday: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: "User".to_string(),
            current_weight: 0.0,
            height_cm: String::new(),
            use_kilograms: true,
            birthday: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub nutrition: NutritionLedger,
    #[serde(default)]
    pub goals: GoalSettings,
    #[serde(default)]
    pub hydration: HydrationLog,
    #[serde(default)]
    pub sleep: SleepLog,
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardUser {
    pub id: u32,
    pub username: String,
    pub count: u32,
}

#[derive(Debug, Deserialize)]
pub struct AddFoodRequest {
    pub meal: String,
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFoodRequest {
    pub meal: String,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct NutritionResponse {
    pub breakfast: Vec<FoodEntry>,
    pub lunch: Vec<FoodEntry>,
    pub dinner: Vec<FoodEntry>,
    pub totals: MacroTotals,
}

#[derive(Debug, Deserialize)]
pub struct GoalUpdateRequest {
    pub calorie_goal: Option<String>,
    pub weight_goal: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub calorie_progress: f64,
    pub weight_progress: f64,
    pub total_calories: u64,
    pub calorie_goal: u32,
    pub current_weight: f64,
    pub weight_goal: f64,
    pub starting_weight: f64,
}

#[derive(Debug, Deserialize)]
pub struct HydrationRequest {
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct HydrationResponse {
    pub date: String,
    pub glasses: u32,
}

#[derive(Debug, Serialize)]
pub struct ReminderPlan {
    pub title: String,
    pub body: String,
    pub times: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddSleepRequest {
    pub date: Option<String>,
    pub hours: String,
}

#[derive(Debug, Serialize)]
pub struct SleepResponse {
    pub entries: Vec<SleepEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdateRequest {
    pub username: Option<String>,
    pub current_weight: Option<String>,
    pub height_cm: Option<String>,
    pub use_kilograms: Option<bool>,
    pub birthday: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    pub current_weight: f64,
    pub height_cm: String,
    pub use_kilograms: bool,
    pub birthday: Option<String>,
    pub age_years: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub username: String,
    pub totals: MacroTotals,
    pub calorie_progress: f64,
    pub weight_progress: f64,
    pub weight: String,
    pub height: String,
}
