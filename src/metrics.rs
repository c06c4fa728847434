//! Metrics collection
//!
//! Counter and histogram names for the command surface. Recording is a
//! no-op until the embedding application installs a `metrics` recorder.

use std::time::Duration;

use metrics::{counter, histogram};

/// Count of repository operations, labelled by entity and operation
pub const REPOSITORY_OPERATIONS_TOTAL: &str = "farmstead_repository_operations_total";
/// Repository operation latency in seconds, labelled by entity
pub const REPOSITORY_OPERATION_DURATION: &str = "farmstead_repository_operation_duration_seconds";
/// Count of failed repository operations, labelled by entity
pub const REPOSITORY_ERRORS_TOTAL: &str = "farmstead_repository_errors_total";

/// Record one repository operation.
pub fn record_operation(entity: &'static str, operation: &'static str) {
    counter!(REPOSITORY_OPERATIONS_TOTAL, "entity" => entity, "operation" => operation)
        .increment(1);
}

/// Record the latency of a repository operation.
pub fn record_duration(entity: &'static str, duration: Duration) {
    histogram!(REPOSITORY_OPERATION_DURATION, "entity" => entity).record(duration.as_secs_f64());
}

/// Record a failed repository operation.
pub fn record_error(entity: &'static str) {
    counter!(REPOSITORY_ERRORS_TOTAL, "entity" => entity).increment(1);
}
