use crate::models::{FoodEntry, MacroTotals, Meal, NutritionLedger};
use uuid::Uuid;

impl Meal {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Some(Meal::Breakfast),
            "lunch" => Some(Meal::Lunch),
            "dinner" => Some(Meal::Dinner),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
        }
    }
}

impl FoodEntry {
    /// Builds an entry from raw form text. All four macro fields must parse
    /// as non-negative integers and the name must be non-empty, otherwise
    /// the whole submission is rejected.
    pub fn parse(name: &str, calories: &str, protein: &str, carbs: &str, fats: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            calories: parse_macro(calories)?,
            protein: parse_macro(protein)?,
            carbs: parse_macro(carbs)?,
            fats: parse_macro(fats)?,
        })
    }
}

fn parse_macro(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

impl NutritionLedger {
    pub fn bucket(&self, meal: Meal) -> &[FoodEntry] {
        match meal {
            Meal::Breakfast => &self.breakfast,
            Meal::Lunch => &self.lunch,
            Meal::Dinner => &self.dinner,
        }
    }

    fn bucket_mut(&mut self, meal: Meal) -> &mut Vec<FoodEntry> {
        match meal {
            Meal::Breakfast => &mut self.breakfast,
            Meal::Lunch => &mut self.lunch,
            Meal::Dinner => &mut self.dinner,
        }
    }

    pub fn add(&mut self, meal: Meal, entry: FoodEntry) {
        self.bucket_mut(meal).push(entry);
    }

    /// Removes the entry with the given id from the named bucket. An id
    /// that is not present leaves the bucket untouched.
    pub fn remove(&mut self, meal: Meal, id: Uuid) -> bool {
        let bucket = self.bucket_mut(meal);
        match bucket.iter().position(|entry| entry.id == id) {
            Some(index) => {
                bucket.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.breakfast.clear();
        self.lunch.clear();
        self.dinner.clear();
    }

    /// Aggregate macros are always a fold over the bucket contents; no
    /// separately tracked counter exists that could drift from them.
    pub fn totals(&self) -> MacroTotals {
        let mut totals = MacroTotals::default();
        for entry in self.breakfast.iter().chain(&self.lunch).chain(&self.dinner) {
            totals.calories = totals.calories.saturating_add(u64::from(entry.calories));
            totals.protein = totals.protein.saturating_add(u64::from(entry.protein));
            totals.carbs = totals.carbs.saturating_add(u64::from(entry.carbs));
            totals.fats = totals.fats.saturating_add(u64::from(entry.fats));
        }
        totals
    }
}
