mod logs;
mod metrics;

pub use self::logs::init_logger;
pub use self::metrics::{
    Labels, Metrics, Operation, Outcome, PageLabels, Status, render_metrics,
};
