use serde::{Deserialize, Serialize};

use crate::models::SymptomReport;

pub const SYMPTOM_DEFAULT_ADVICE: &str =
    "📋 Based on your symptoms, it's recommended to consult a gastroenterologist for deeper evaluation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomFinding {
    DigestiveDiscomfort,
    Diarrhea,
    Fatigue,
    SkinReaction,
}

struct SymptomRule {
    finding: SymptomFinding,
    keywords: &'static [&'static str],
    advice: &'static str,
}

// Evaluated in this order; every matching rule contributes its line.
const SYMPTOM_RULES: [SymptomRule; 4] = [
    SymptomRule {
        finding: SymptomFinding::DigestiveDiscomfort,
        keywords: &["bloating", "gas"],
        advice: "💨 You may be experiencing digestive discomfort. Avoid gluten and dairy temporarily.",
    },
    SymptomRule {
        finding: SymptomFinding::Diarrhea,
        keywords: &["diarrhea", "loose motion"],
        advice: "🚽 Diarrhea can be a symptom of gluten intolerance. Consider a gluten-free diet.",
    },
    SymptomRule {
        finding: SymptomFinding::Fatigue,
        keywords: &["fatigue"],
        advice: "😴 Fatigue is common in Celiac patients due to poor absorption. Get your iron and B12 levels checked.",
    },
    SymptomRule {
        finding: SymptomFinding::SkinReaction,
        keywords: &["skin rash", "itching"],
        advice: "🤕 This could be dermatitis herpetiformis – a skin condition linked with gluten.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomAssessment {
    pub findings: Vec<SymptomFinding>,
    pub reply: String,
}

impl SymptomAssessment {
    pub fn is_default(&self) -> bool {
        self.findings.is_empty()
    }
}

pub fn assess_symptoms(report: &SymptomReport) -> SymptomAssessment {
    let lower = report.symptoms.to_lowercase();
    let mut findings = Vec::new();
    let mut reply = String::new();

    for rule in &SYMPTOM_RULES {
        if contains_any(&lower, rule.keywords) {
            findings.push(rule.finding);
            reply.push_str(rule.advice);
            reply.push('\n');
        }
    }

    if findings.is_empty() {
        reply = SYMPTOM_DEFAULT_ADVICE.to_string();
    }

    SymptomAssessment { findings, reply }
}

fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
