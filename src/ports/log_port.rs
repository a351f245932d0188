//! Algorithm log sink port.

pub trait LogSink {
    fn log(&self, message: &str);
}
