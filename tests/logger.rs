use std::fs;
use std::io::Write;
use filterdesk::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());
    assert!(!logger.has_file_writer());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first_and_clearable() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));

    // Clones share the same buffer
    let clone = logger.clone();
    clone.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_log_buffer_is_bounded() {
    let logger = Logger::new();
    for i in 0..(filterdesk::constants::MAX_LOG_ENTRIES + 10) {
        logger.log(format!("entry {}", i));
    }
    let logs = logger.get_logs();
    assert_eq!(logs.len(), filterdesk::constants::MAX_LOG_ENTRIES);
    assert!(logs.last().unwrap().ends_with("entry 10"));
}

#[test]
fn test_config_based_logging_enabled() {
    let logger = match Logger::from_config(true) {
        Ok(logger) => logger,
        // No writable data directory in this environment
        Err(_) => return,
    };
    assert!(logger.is_enabled());
    assert!(logger.has_file_writer());

    logger.log("Test message with file".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message with file"));

    if let Some(ref writer_arc) = logger.file_writer() {
        if let Ok(mut writer) = writer_arc.lock() {
            let _ = writer.flush();
        }

        let log_path = Logger::get_log_file_path().unwrap();
        if log_path.exists() {
            let file_content = fs::read_to_string(&log_path).unwrap_or_default();
            assert!(file_content.contains("Test message with file"));
        }
    }
}

#[test]
fn test_flush_writes_buffered_lines_to_file() {
    let dir = std::env::temp_dir().join("filterdesk_test_logger_flush");
    let _ = fs::remove_dir_all(&dir);
    let log_path = dir.join("nested").join("filterdesk.log");

    let logger = Logger::with_log_file(&log_path).unwrap();
    assert!(logger.is_enabled());
    assert!(logger.has_file_writer());

    // A clone shares the writer, as the installed dispatch does
    let sink = logger.clone();
    sink.log("Dashboard exited with error: terminal lost".to_string());
    logger.flush();

    let file_content = fs::read_to_string(&log_path).unwrap();
    assert!(file_content.contains("Dashboard exited with error: terminal lost"));

    let _ = fs::remove_dir_all(&dir);
}
