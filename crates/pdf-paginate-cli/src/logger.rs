use chrono::Local;
use log::{Level, Metadata, Record};
use std::io::Write;

/// Writes timestamped log lines to stderr
pub struct StderrLogger {
    max_level: Level,
}

impl StderrLogger {
    pub fn new(verbosity: u8) -> Self {
        let max_level = match verbosity {
            0 => Level::Warn,
            1 => Level::Info,
            2 => Level::Debug,
            _ => Level::Trace,
        };
        Self { max_level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let filter = self.max_level.to_level_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(
                stderr,
                "{} {:<5} [{}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(StderrLogger::new(0).max_level, Level::Warn);
        assert_eq!(StderrLogger::new(2).max_level, Level::Debug);
        assert_eq!(StderrLogger::new(9).max_level, Level::Trace);
    }

    #[test]
    fn test_install_boxed_logger() {
        let logger = StderrLogger::new(1);
        assert!(logger.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
        assert!(logger.init().is_ok());
        assert_eq!(log::max_level(), log::LevelFilter::Info);
    }
}
