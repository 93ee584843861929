use crate::CONSOLE;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// A [`Log`] implementation that writes records to the global [`CONSOLE`].
///
/// Records logged before [`init_console`](crate::init_console) are dropped,
/// just like any other print to an empty console.
pub struct ConsoleLogger {
    max_level: LevelFilter,
}

impl ConsoleLogger {
    #[must_use]
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    /// Installs this logger. Call once during early init.
    ///
    /// ```rust,no_run
    /// use kernel_console::ConsoleLogger;
    /// use log::LevelFilter;
    ///
    /// static LOGGER: ConsoleLogger = ConsoleLogger::new(LevelFilter::Debug);
    ///
    /// LOGGER.init().ok();
    /// ```
    ///
    /// # Errors
    /// Fails if a logger has already been installed.
    pub fn init(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self)?;
        log::set_max_level(self.max_level);
        Ok(())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Format: "[LEVEL] target: message\n", one lock acquisition per record.
        CONSOLE.println(format_args!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
    }

    fn flush(&self) {
        // unbuffered
    }
}
