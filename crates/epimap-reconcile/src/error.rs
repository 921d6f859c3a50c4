use epimap_model::Metric;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The historical feed has no block at the metric's index.
    #[error("historical feed has no {0} block")]
    MissingMetric(Metric),

    /// The metric block carries no statistic or no region rows.
    #[error("historical feed's {0} block is empty")]
    EmptyMetric(Metric),
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
