use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use ztoline_core::{Scheduler, StageError};

/// [`Scheduler`] backed by `window.setInterval` with a pre-bound callback.
pub struct IntervalScheduler {
    window: web::Window,
    callback: Closure<dyn FnMut()>,
}

impl IntervalScheduler {
    pub fn new(window: web::Window, tick: impl FnMut() + 'static) -> Self {
        let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        Self { window, callback }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = i32;

    fn schedule(&mut self, period: Duration) -> Result<i32, StageError> {
        let f: &js_sys::Function = self.callback.as_ref().unchecked_ref();
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(f, period.as_millis() as i32)
            .map_err(|e| StageError::Schedule(format!("{:?}", e)))
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}
