/// Deferred execution on the UI thread.
pub trait Scheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
