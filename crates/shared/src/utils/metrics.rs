use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Operation {
    Login,
    Logout,
    UpdateProfile,
    RequestPage,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Outcome {
    Granted,
    Fallback,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub operation: Operation,
    pub status: Status,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct PageLabels {
    pub page: String,
    pub outcome: Outcome,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub session_events: Family<Labels, Counter>,
    pub page_requests: Family<PageLabels, Counter>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            session_events: Family::default(),
            page_requests: Family::default(),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "session_events",
            "Session transitions by operation and status",
            self.session_events.clone(),
        );
        registry.register(
            "page_requests",
            "Page change requests by requested page and outcome",
            self.page_requests.clone(),
        );
    }

    pub fn record(&self, operation: Operation, status: Status) {
        self.session_events
            .get_or_create(&Labels { operation, status })
            .inc();
    }

    pub fn record_page(&self, requested: &str, outcome: Outcome) {
        self.page_requests
            .get_or_create(&PageLabels {
                page: requested.to_string(),
                outcome,
            })
            .inc();
    }
}

pub fn render_metrics(registry: &Registry) -> Result<String, std::fmt::Error> {
    let mut buffer = String::new();
    encode(&mut buffer, registry)?;
    Ok(buffer)
}
