use crate::nav::scheduler::Scheduler;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Runs tasks after a `setTimeout` on the UI thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            task();
        });
    }
}
