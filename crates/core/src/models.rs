use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub barcode: String,
    pub is_gluten_free: bool,
    pub name: String,
}

impl ProductRecord {
    pub fn new(barcode: impl Into<String>, is_gluten_free: bool, name: impl Into<String>) -> Self {
        Self {
            barcode: barcode.into(),
            is_gluten_free,
            name: name.into(),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_gluten_free {
            "✅ Gluten-Free"
        } else {
            "❌ Contains Gluten"
        }
    }

    /// Human-readable `"<status> - <name>"` string returned by barcode lookups.
    pub fn display(&self) -> String {
        format!("{} - {}", self.status_label(), self.name)
    }
}

/// A trigger phrase and its canned reply. The trigger is always stored
/// trimmed and lowercased; the reply is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRule {
    pub trigger: String,
    pub reply: String,
}

impl ChatRule {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            trigger: question.trim().to_lowercase(),
            reply: answer.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomReport {
    pub illness: String,
    pub symptoms: String,
    pub duration: String,
    pub diet: String,
    pub period: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietCategory {
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    /// Plant-based table; also the landing spot for unrecognized selections.
    #[default]
    Other,
}

impl DietCategory {
    /// Maps the diet form's `diet_type` value. Only the two exact option
    /// values select a specific table; anything else, including a missing
    /// value, falls back to [`DietCategory::Other`].
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("Vegetarian") => Self::Vegetarian,
            Some("Non-Vegetarian") => Self::NonVegetarian,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::NonVegetarian => "Non-Vegetarian",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlanRow {
    pub day: Weekday,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

/// Seven rows, Monday first. The array length keeps the week complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyPlan {
    days: [DietPlanRow; 7],
}

impl WeeklyPlan {
    pub fn new(days: [DietPlanRow; 7]) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DietPlanRow; 7] {
        &self.days
    }

    pub fn day(&self, day: Weekday) -> &DietPlanRow {
        &self.days[day as usize]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DietPlanRow> {
        self.days.iter()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietPlanResponse {
    pub name: Option<String>,
    pub diet_type: DietCategory,
    pub weekly_plan: WeeklyPlan,
}
