use log::Level;

/// Destination for formatted compiler messages.
pub trait LogSink {
    fn log(&mut self, level: Level, text: &str);

    fn debug(&mut self, text: &str) {
        self.log(Level::Debug, text);
    }

    fn info(&mut self, text: &str) {
        self.log(Level::Info, text);
    }

    fn warn(&mut self, text: &str) {
        self.log(Level::Warn, text);
    }

    fn error(&mut self, text: &str) {
        self.log(Level::Error, text);
    }
}

/// Sink that discards everything.
impl LogSink for () {
    fn log(&mut self, _: Level, _: &str) {}
}

/// Keeps every write in order.
impl LogSink for Vec<(Level, String)> {
    fn log(&mut self, level: Level, text: &str) {
        self.push((level, text.to_owned()));
    }
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, level: Level, text: &str) {
        (**self).log(level, text);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn log(&mut self, level: Level, text: &str) {
        (**self).log(level, text);
    }
}

pub const DEFAULT_TARGET: &str = "msgcollect";

/// Sink that writes to whatever logger is installed for the `log` crate.
#[derive(Debug, Clone)]
pub struct LogFacadeSink {
    target: String,
}

impl Default for LogFacadeSink {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl LogFacadeSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        self.target.as_ref()
    }
}

impl LogSink for LogFacadeSink {
    fn log(&mut self, level: Level, text: &str) {
        log::log!(target: self.target.as_str(), level, "{}", text);
    }
}
