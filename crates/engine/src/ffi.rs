//! C ABI for the `wasm32` module.
//!
//! The host instantiates the module, calls `initialize` once, then
//! `setDirection` on input and `update` on its own clock, reading the frame
//! from linear memory via `getBufferPointer`/`getBufferSize`.
//!
//! Export names are only applied on `wasm32`; native builds keep ordinary
//! Rust symbols so the functions can be called from tests without clashing
//! with anything else in the process.
//!
//! The session lives in thread-local storage. A wasm module has a single
//! thread; natively every thread gets its own independent session.

use std::cell::RefCell;

use crate::engine::Engine;

thread_local! {
    static ENGINE: RefCell<Engine> = RefCell::new(Engine::new());
}

fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

#[cfg_attr(target_arch = "wasm32", export_name = "initialize")]
pub extern "C" fn snake_initialize() {
    with_engine(Engine::initialize)
}

#[cfg_attr(target_arch = "wasm32", export_name = "drawGrid")]
pub extern "C" fn snake_draw_grid() {
    with_engine(Engine::draw_grid)
}

/// Direction codes: 0 = up, 1 = right, 2 = down, 3 = left. Anything else is ignored.
#[cfg_attr(target_arch = "wasm32", export_name = "setDirection")]
pub extern "C" fn snake_set_direction(code: u32) {
    with_engine(|engine| {
        engine.set_direction_code(code);
    })
}

/// Returns `true` if the tick was applied, `false` once the game is over.
#[cfg_attr(target_arch = "wasm32", export_name = "update")]
pub extern "C" fn snake_update() -> bool {
    with_engine(Engine::update)
}

#[cfg_attr(target_arch = "wasm32", export_name = "getBufferPointer")]
pub extern "C" fn snake_buffer_pointer() -> *const u8 {
    with_engine(|engine| engine.buffer_ptr())
}

#[cfg_attr(target_arch = "wasm32", export_name = "getBufferSize")]
pub extern "C" fn snake_buffer_size() -> u32 {
    with_engine(|engine| engine.buffer_size() as u32)
}

#[cfg_attr(target_arch = "wasm32", export_name = "getScore")]
pub extern "C" fn snake_score() -> u32 {
    with_engine(|engine| engine.score())
}

#[cfg_attr(target_arch = "wasm32", export_name = "isGameOver")]
pub extern "C" fn snake_is_game_over() -> bool {
    with_engine(|engine| engine.is_game_over())
}
