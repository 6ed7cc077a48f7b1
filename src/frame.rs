use crate::app::AppState;
use crate::core::HandFrame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Everything the `requestAnimationFrame` loop touches.
///
/// `detect` is called with no arguments and returns a flat landmark array for
/// the first hand, or null. `render` receives `(positions, rotationX,
/// rotationY, scale, [r, g, b])` after every tick.
pub struct FrameContext {
    pub state: Rc<RefCell<AppState>>,
    pub detect: js_sys::Function,
    pub render: js_sys::Function,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let hand = self.detect_hand();
        // The render callback may call back into `ParticleApp`, so the state
        // borrow must end before it runs.
        let (positions, view) = {
            let mut state = self.state.borrow_mut();
            state.tick(hand.as_ref());
            (
                js_sys::Float32Array::from(state.field.positions_flat()),
                state.field.render_view(),
            )
        };
        let color: js_sys::Array = view
            .color
            .to_array()
            .iter()
            .map(|&c| JsValue::from_f64(c as f64))
            .collect();
        let args = js_sys::Array::of5(
            &positions.into(),
            &JsValue::from_f64(view.rotation.x as f64),
            &JsValue::from_f64(view.rotation.y as f64),
            &JsValue::from_f64(view.scale as f64),
            &color.into(),
        );
        if let Err(e) = self.render.apply(&JsValue::NULL, &args) {
            log::error!("render callback failed: {:?}", e);
        }
    }

    fn detect_hand(&self) -> Option<HandFrame> {
        let value = match self.detect.call0(&JsValue::NULL) {
            Ok(v) => v,
            Err(e) => {
                log::error!("detect callback failed: {:?}", e);
                return None;
            }
        };
        if value.is_null() || value.is_undefined() {
            return None;
        }
        let flat = js_sys::Float32Array::new(&value).to_vec();
        match HandFrame::from_flat(&flat) {
            Ok(frame) => Some(frame),
            Err(e) => {
                log::warn!("dropping hand: {}", e);
                None
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
