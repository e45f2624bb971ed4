pub mod barcode;
pub mod chat;
pub mod diet;
pub mod models;
pub mod symptoms;

pub use barcode::{lookup_reply, ProductTable, BARCODE_NOT_FOUND};
pub use chat::{chat_reply, ChatRules, CHAT_FALLBACK};
pub use diet::{build_weekly_plan, DAILY_SNACK};
pub use models::*;
pub use symptoms::{assess_symptoms, SymptomAssessment, SymptomFinding, SYMPTOM_DEFAULT_ADVICE};
