pub mod runner;

pub use runner::{OrreryRunner, BODY_FLOATS, CAMERA_FLOATS};

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use orrery_core::{
    BodyId, InputEvent, OrreryConfig, CMD_BODY_CLICK, CMD_CLOSE_DETAIL, CMD_LOADING_DONE,
    CMD_RESET_VIEW, CMD_SET_ASPECT, CMD_SET_TIME_SCALE,
};

thread_local! {
    static RUNNER: RefCell<Option<OrreryRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut OrreryRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Orrery not initialized. Call orrery_init() first.");
        f(runner)
    })
}

/// Initialize the simulation. `days_from_j2000` is the simulated start
/// date; the host usually passes the real current date.
#[wasm_bindgen]
pub fn orrery_init(days_from_j2000: f64) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = OrreryConfig {
        start_days_from_j2000: days_from_j2000,
        ..OrreryConfig::default()
    };
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(OrreryRunner::new(config));
    });
    log::info!("orrery: initialized at J2000 + {days_from_j2000:.1} days");
}

#[wasm_bindgen]
pub fn orrery_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn orrery_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn orrery_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

#[wasm_bindgen]
pub fn orrery_secondary_down() {
    with_runner(|r| r.push_input(InputEvent::SecondaryDown));
}

#[wasm_bindgen]
pub fn orrery_wheel(dy: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { dy }));
}

// ---- UI commands ----

#[wasm_bindgen]
pub fn orrery_set_time_scale(scale: f64) {
    custom(CMD_SET_TIME_SCALE, scale as f32);
}

#[wasm_bindgen]
pub fn orrery_body_click(body_index: u32) {
    custom(CMD_BODY_CLICK, body_index as f32);
}

#[wasm_bindgen]
pub fn orrery_reset_view() {
    custom(CMD_RESET_VIEW, 0.0);
}

#[wasm_bindgen]
pub fn orrery_close_detail() {
    custom(CMD_CLOSE_DETAIL, 0.0);
}

#[wasm_bindgen]
pub fn orrery_set_aspect(aspect: f32) {
    custom(CMD_SET_ASPECT, aspect);
}

#[wasm_bindgen]
pub fn orrery_loading_done() {
    custom(CMD_LOADING_DONE, 0.0);
}

fn custom(kind: u32, a: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b: 0.0, c: 0.0 }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn orrery_bodies_ptr() -> *const f32 {
    with_runner(|r| r.bodies_ptr())
}

#[wasm_bindgen]
pub fn orrery_body_count() -> u32 {
    with_runner(|r| r.body_count())
}

#[wasm_bindgen]
pub fn orrery_body_floats() -> u32 {
    BODY_FLOATS as u32
}

#[wasm_bindgen]
pub fn orrery_camera_ptr() -> *const f32 {
    with_runner(|r| r.camera_ptr())
}

/// Per-frame state snapshot as JSON, for the UI layer.
#[wasm_bindgen]
pub fn orrery_state_json() -> String {
    with_runner(|r| r.state_json())
}

/// Events produced by the last tick as a JSON array.
#[wasm_bindgen]
pub fn orrery_events_json() -> String {
    with_runner(|r| r.events_json())
}

/// Closed orbit curve for one body: (segments + 1) xyz triples.
/// Empty for bodies with no orbit (the sun, or an unknown index).
#[wasm_bindgen]
pub fn orrery_orbit_path(body_index: u32, segments: u32) -> Vec<f32> {
    match BodyId::from_index(body_index as usize) {
        Some(body) => with_runner(|r| r.orbit_path(body, segments as usize)),
        None => Vec::new(),
    }
}
