//! JS-facing surface of the particle field.
//!
//! The page owns the webcam, the hand-landmark model and the three.js scene.
//! It hands this module one landmark array per frame and reads back the
//! particle buffer and transforms to draw. Either the page drives the frames
//! itself through [`ParticleApp::tick`], or it passes its detect/render
//! callbacks to [`ParticleApp::start`] and lets the loop in `frame` run.

use crate::constants::{ADDITIVE_BLENDING, DEPTH_WRITE};
use crate::core::{FieldConfig, HandFrame, ParticleField, Rgb, Variant};
use crate::frame::{self, FrameContext};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gesture-particles starting");
    Ok(())
}

pub struct AppState {
    pub field: ParticleField,
    pub status_el: Option<web::Element>,
}

impl AppState {
    pub fn tick(&mut self, hand: Option<&HandFrame>) -> bool {
        let outcome = self.field.tick(hand);
        if outcome.shape_changed.is_some() {
            self.refresh_status();
        }
        outcome.shape_changed.is_some()
    }

    fn refresh_status(&self) {
        if let Some(el) = &self.status_el {
            overlay::set_status(el, self.field.status());
        }
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct ParticleApp {
    state: Rc<RefCell<AppState>>,
}

#[wasm_bindgen]
impl ParticleApp {
    /// `variant` is one of `classic`, `glyphs`, `words`.
    #[wasm_bindgen(constructor)]
    pub fn new(variant: &str) -> Result<ParticleApp, JsValue> {
        let variant: Variant = variant.parse().map_err(to_js)?;
        let field = ParticleField::new(FieldConfig::for_variant(variant)).map_err(to_js)?;
        Ok(Self {
            state: Rc::new(RefCell::new(AppState {
                field,
                status_el: None,
            })),
        })
    }

    /// Advance one frame. `landmarks` is the flat array for the first detected
    /// hand, or undefined when none was found. Returns whether the shape
    /// changed.
    pub fn tick(&self, landmarks: Option<Vec<f32>>) -> Result<bool, JsValue> {
        let hand = landmarks
            .map(|flat| HandFrame::from_flat(&flat))
            .transpose()
            .map_err(to_js)?;
        Ok(self.state.borrow_mut().tick(hand.as_ref()))
    }

    /// Hand the frame loop over to `requestAnimationFrame`.
    pub fn start(&self, detect: js_sys::Function, render: js_sys::Function) {
        let frame_ctx = Rc::new(RefCell::new(FrameContext {
            state: self.state.clone(),
            detect,
            render,
        }));
        frame::start_loop(frame_ctx);
    }

    /// Write status changes into the element with this id.
    pub fn bind_status(&self, element_id: &str) -> Result<(), JsValue> {
        let el = overlay::find_element(element_id).map_err(to_js)?;
        let mut state = self.state.borrow_mut();
        state.status_el = Some(el);
        state.refresh_status();
        Ok(())
    }

    pub fn show_shape(&self, name: &str) -> bool {
        let mut state = self.state.borrow_mut();
        let changed = state.field.show_shape(name);
        if changed {
            state.refresh_status();
        }
        changed
    }

    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.state.borrow().field.positions_flat())
    }

    pub fn rotation_x(&self) -> f32 {
        self.state.borrow().field.rotation().x
    }

    pub fn rotation_y(&self) -> f32 {
        self.state.borrow().field.rotation().y
    }

    pub fn scale(&self) -> f32 {
        self.state.borrow().field.scale()
    }

    pub fn status(&self) -> String {
        self.state.borrow().field.status().to_string()
    }

    pub fn shape(&self) -> String {
        self.state.borrow().field.active_shape().as_str().to_string()
    }

    /// Accepts the color picker's `#rrggbb` value.
    pub fn set_color(&self, hex: &str) -> Result<(), JsValue> {
        let color = Rgb::from_hex(hex).map_err(to_js)?;
        self.state.borrow_mut().field.set_color(color);
        Ok(())
    }

    pub fn color(&self) -> String {
        self.state.borrow().field.color().to_hex()
    }

    pub fn color_rgb(&self) -> Vec<f32> {
        self.state.borrow().field.color().to_array().to_vec()
    }

    pub fn particle_count(&self) -> u32 {
        self.state.borrow().field.config().particle_count as u32
    }

    pub fn camera_z(&self) -> f32 {
        self.state.borrow().field.config().camera_z
    }

    pub fn point_size(&self) -> f32 {
        self.state.borrow().field.config().point_size
    }

    pub fn additive_blending(&self) -> bool {
        ADDITIVE_BLENDING
    }

    pub fn depth_write(&self) -> bool {
        DEPTH_WRITE
    }
}
