use crate::models::{AppData, LeaderboardUser, ProgressResponse, ReminderPlan, SummaryResponse};
use chrono::{Datelike, NaiveDate};

const REMINDER_TIMES: [&str; 8] = [
    "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00", "22:00",
];

/// Ratio of consumed calories to the daily goal, clamped to 1.0. A zero
/// goal saturates at 1.0 instead of dividing by zero.
pub fn calorie_progress(total_calories: u64, calorie_goal: u32) -> f64 {
    if calorie_goal == 0 {
        return 1.0;
    }
    (total_calories as f64 / f64::from(calorie_goal)).min(1.0)
}

/// Fraction of the planned weight change achieved so far, floored at 0.0.
/// When starting weight equals the goal there is nothing left to lose, so
/// the ratio saturates at 1.0 instead of dividing by zero. There is no
/// upper clamp: overshooting the goal reads as more than 100%.
pub fn weight_progress(starting: f64, current: f64, goal: f64) -> f64 {
    let planned_change = starting - goal;
    if planned_change == 0.0 {
        return 1.0;
    }
    ((starting - current) / planned_change).max(0.0)
}

pub fn build_progress(data: &AppData) -> ProgressResponse {
    let totals = data.nutrition.totals();
    ProgressResponse {
        calorie_progress: calorie_progress(totals.calories, data.goals.calorie_goal),
        weight_progress: weight_progress(
            data.goals.starting_weight,
            data.profile.current_weight,
            data.goals.weight_goal,
        ),
        total_calories: totals.calories,
        calorie_goal: data.goals.calorie_goal,
        current_weight: data.profile.current_weight,
        weight_goal: data.goals.weight_goal,
        starting_weight: data.goals.starting_weight,
    }
}

pub fn build_summary(data: &AppData) -> SummaryResponse {
    let totals = data.nutrition.totals();
    let unit = if data.profile.use_kilograms { "kg" } else { "lb" };
    let height = data.profile.height_cm.trim();
    SummaryResponse {
        username: data.profile.username.clone(),
        totals,
        calorie_progress: calorie_progress(totals.calories, data.goals.calorie_goal),
        weight_progress: weight_progress(
            data.goals.starting_weight,
            data.profile.current_weight,
            data.goals.weight_goal,
        ),
        weight: format!("{:.1} {unit}", data.profile.current_weight),
        height: if height.is_empty() {
            "N/A".to_string()
        } else {
            format!("{height} cm")
        },
    }
}

pub fn age_years(birthday: &str, today: NaiveDate) -> Option<i32> {
    let birthday = NaiveDate::parse_from_str(birthday, "%Y-%m-%d").ok()?;
    let mut age = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }
    Some(age.max(0))
}

pub fn reminder_plan() -> ReminderPlan {
    ReminderPlan {
        title: "Drink Water Reminder".to_string(),
        body: "Time to drink a glass of water!".to_string(),
        times: REMINDER_TIMES.iter().map(|time| time.to_string()).collect(),
    }
}

pub fn leaderboard() -> Vec<LeaderboardUser> {
    let user = |id: u32, username: &str, count: u32| LeaderboardUser {
        id,
        username: username.to_string(),
        count,
    };
    let mut roster = vec![
        user(1, "Sam S", 500),
        user(2, "Frank D", 435),
        user(3, "Abe L", 225),
        user(4, "Patrick M", 225),
        user(5, "Juan Carlos", 225),
        user(6, "Sally Mae", 225),
        user(7, "Xander L", 225),
        user(8, "Noserat S", 225),
        user(9, "John L", 225),
        user(10, "John L", 225),
    ];
    roster.sort_by(|a, b| b.count.cmp(&a.count).then(a.id.cmp(&b.id)));
    roster
}
