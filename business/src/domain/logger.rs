/// Logging port used by the application layer.
///
/// Use cases only depend on this trait; the concrete sink lives in the
/// `logger` infrastructure crate.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
