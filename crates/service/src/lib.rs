use std::sync::Arc;

use gluten_core::{
    assess_symptoms, build_weekly_plan, chat_reply, lookup_reply, DietCategory,
    DietPlanResponse, SymptomReport,
};
use gluten_observability::AppMetrics;
use gluten_reference::{ReferenceData, ReferenceStats};
use tracing::{info, instrument};

/// Answers every query against tables loaded once at startup. None of
/// the query methods can fail: misses and unmatched input come back as
/// fixed fallback strings.
#[derive(Clone)]
pub struct GuideService {
    data: Arc<ReferenceData>,
    metrics: Arc<AppMetrics>,
}

impl GuideService {
    pub fn new(data: Arc<ReferenceData>, metrics: Arc<AppMetrics>) -> Self {
        Self { data, metrics }
    }

    pub fn stats(&self) -> ReferenceStats {
        self.data.stats()
    }

    pub fn metrics(&self) -> &Arc<AppMetrics> {
        &self.metrics
    }

    #[instrument(skip(self))]
    pub fn check_barcode(&self, barcode: Option<&str>) -> String {
        self.metrics.inc_request("check_barcode");

        let found = barcode.and_then(|code| self.data.products.get(code));
        self.metrics.record_barcode_lookup(found.is_some());
        info!(hit = found.is_some(), "barcode lookup");

        lookup_reply(found)
    }

    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub fn chat_message(&self, message: &str) -> String {
        self.metrics.inc_request("chat_message");

        let matched = self.data.chat_rules.first_match(message);
        match matched {
            Some(rule) => info!(trigger = %rule.trigger, "chat rule matched"),
            None => {
                self.metrics.inc_chat_fallback();
                info!("no chat rule matched");
            }
        }

        chat_reply(matched)
    }

    #[instrument(skip(self, report))]
    pub fn analyze_symptoms(&self, report: &SymptomReport) -> String {
        self.metrics.inc_request("analyze_symptoms");

        let assessment = assess_symptoms(report);
        if assessment.is_default() {
            self.metrics.inc_symptom_default();
        }
        info!(findings = ?assessment.findings, "symptom report analyzed");

        assessment.reply
    }

    #[instrument(skip(self, name))]
    pub fn generate_diet(&self, name: Option<String>, diet_type: Option<&str>) -> DietPlanResponse {
        self.metrics.inc_request("generate_diet");

        let category = DietCategory::parse(diet_type);
        self.metrics.inc_diet_plan();
        info!(category = category.as_str(), "weekly diet plan generated");

        DietPlanResponse {
            name,
            diet_type: category,
            weekly_plan: build_weekly_plan(category),
        }
    }
}
