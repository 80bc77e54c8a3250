use crate::input;
use crate::Stage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Routes primary-button pointer presses on the canvas to the tap handler.
pub fn wire_tap(canvas: &web::HtmlCanvasElement, stage: Rc<RefCell<Stage>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_press(ev.button()) {
            return;
        }
        ev.prevent_default();
        let Ok(mut stage) = stage.try_borrow_mut() else {
            return;
        };
        if let Err(e) = stage.handle_tap() {
            log::error!("[tap] {}", e);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
