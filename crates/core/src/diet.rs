use crate::models::{DietCategory, DietPlanRow, Weekday, WeeklyPlan};

pub const DAILY_SNACK: &str = "Roasted Nuts / Juice";

struct MealTable {
    breakfast: [&'static str; 7],
    lunch: [&'static str; 7],
    dinner: [&'static str; 7],
}

const VEGETARIAN: MealTable = MealTable {
    breakfast: ["Poha", "Oats", "Upma", "Idli", "Fruits", "Smoothie", "Besan Chilla"],
    lunch: [
        "Dal Rice",
        "Paratha",
        "Khichdi",
        "Pulao",
        "Paneer Bowl",
        "Veg Thali",
        "Stuffed Capsicum",
    ],
    dinner: [
        "Moong Dosa",
        "Kadhi",
        "Veg Soup",
        "Roti Sabzi",
        "Quinoa",
        "Paneer Tikka",
        "Mushroom Curry",
    ],
};

const NON_VEGETARIAN: MealTable = MealTable {
    breakfast: [
        "Eggs",
        "Oats Omelette",
        "Smoothie",
        "Rice Upma",
        "Chicken Sandwich",
        "Boiled Eggs",
        "Egg Bhurji",
    ],
    lunch: [
        "Chicken Curry",
        "Fish Rice",
        "Egg Fried Rice",
        "Dal Chicken",
        "Mutton Rice",
        "Keema Wrap",
        "Grilled Breast",
    ],
    dinner: [
        "Grilled Chicken",
        "Fish Tikka",
        "Egg Curry",
        "Soup",
        "Veg + Chicken",
        "Paneer Sabzi",
        "Roti + Curry",
    ],
};

const PLANT_BASED: MealTable = MealTable {
    breakfast: [
        "Tofu Scramble",
        "Oats with Almond Milk",
        "Chia Pudding",
        "Fruit Bowl",
        "Sweet Potato",
        "Rice Idli",
        "Smoothie",
    ],
    lunch: [
        "Soy Dal Rice",
        "Vegan Bowl",
        "Veg Khichdi",
        "Tofu Curry",
        "Millet Roti",
        "Stew",
        "Salad",
    ],
    dinner: [
        "Vegan Wrap",
        "Pumpkin Soup",
        "Tofu Bowl",
        "Chickpea Curry",
        "Rice Soup",
        "Stuffed Veggies",
        "Veg Stew",
    ],
};

fn meal_table(category: DietCategory) -> &'static MealTable {
    match category {
        DietCategory::Vegetarian => &VEGETARIAN,
        DietCategory::NonVegetarian => &NON_VEGETARIAN,
        DietCategory::Other => &PLANT_BASED,
    }
}

pub fn build_weekly_plan(category: DietCategory) -> WeeklyPlan {
    let table = meal_table(category);

    WeeklyPlan::new(std::array::from_fn(|index| DietPlanRow {
        day: Weekday::ALL[index],
        breakfast: table.breakfast[index].to_string(),
        lunch: table.lunch[index].to_string(),
        dinner: table.dinner[index].to_string(),
        snack: DAILY_SNACK.to_string(),
    }))
}
