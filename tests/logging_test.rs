use tempfile::tempdir;
use tracing::info;

use farmstead::logging::{init_logging, OperationTimer};

#[test]
fn test_init_logging_with_file_layer() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let guard = init_logging(Some("debug"), Some(temp_dir.path())).expect("init logging");
    assert!(guard.is_some(), "file layer must hand back its appender guard");

    info!("logging smoke test");

    let timer = OperationTimer::new("smoke");
    assert!(timer.elapsed().as_secs() < 60);
    drop(timer);
    drop(guard);
}
