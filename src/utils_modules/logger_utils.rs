use crate::common::*;

#[doc = "Custom log output format"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut flexi_logger::DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{:?}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().id(),
        &record.args()
    )
}

#[doc = r#"
    Initializes the global logger.

    Logs are written both to stdout and to daily-rotated files under `logs/`,
    keeping 30 rotated files before cleanup.

    # Panics
    When logger initialization fails - without logging the process must not run
"#]
pub fn set_global_logger() {
    Logger::try_with_str("info")
        .expect("Invalid log level configuration")
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(flexi_logger::Duplicate::All)
        .format(custom_format)
        .start()
        .expect("Failed to initialize logger");
}
