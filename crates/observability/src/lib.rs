use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    requests_total: AtomicU64,
    barcode_hits_total: AtomicU64,
    barcode_misses_total: AtomicU64,
    chat_fallback_total: AtomicU64,
    symptom_default_total: AtomicU64,
    diet_plans_total: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub barcode_hits_total: u64,
    pub barcode_misses_total: u64,
    pub chat_fallback_total: u64,
    pub symptom_default_total: u64,
    pub diet_plans_total: u64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_request(&self, operation: &'static str) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("gluten_requests_total", "operation" => operation).increment(1);
    }

    pub fn record_barcode_lookup(&self, hit: bool) {
        if hit {
            self.barcode_hits_total.fetch_add(1, Ordering::Relaxed);
            metrics::counter!("gluten_barcode_hits_total").increment(1);
        } else {
            self.barcode_misses_total.fetch_add(1, Ordering::Relaxed);
            metrics::counter!("gluten_barcode_misses_total").increment(1);
        }
    }

    pub fn inc_chat_fallback(&self) {
        self.chat_fallback_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("gluten_chat_fallback_total").increment(1);
    }

    pub fn inc_symptom_default(&self) {
        self.symptom_default_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("gluten_symptom_default_total").increment(1);
    }

    pub fn inc_diet_plan(&self) {
        self.diet_plans_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("gluten_diet_plans_total").increment(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            barcode_hits_total: self.barcode_hits_total.load(Ordering::Relaxed),
            barcode_misses_total: self.barcode_misses_total.load(Ordering::Relaxed),
            chat_fallback_total: self.chat_fallback_total.load(Ordering::Relaxed),
            symptom_default_total: self.symptom_default_total.load(Ordering::Relaxed),
            diet_plans_total: self.diet_plans_total.load(Ordering::Relaxed),
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,gluten_api=info,gluten_service=info,gluten_reference=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
