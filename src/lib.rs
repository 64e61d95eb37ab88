//! Liquid Engine - cellular-automaton liquid simulation in WASM
//!
//! Each tick every unsettled cell pushes part of its liquid to its four
//! neighbours (down first, then left, right, up) using a compression rule, and
//! all flows are applied together at the end of the tick. Cells that stay
//! flow-free long enough settle and are skipped until disturbed.
//!
//! Architecture:
//! - core/        - error type, logging and indexing macros
//! - domain/      - cells and flow tunables
//! - spatial/     - the cell grid
//! - systems/     - the flow simulator
//! - simulation/  - world orchestration and the JS facade

// Macros must be declared first
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use crate::core::error::LiquidError;
pub use domain::cell::{Cell, CellType, FlowDirection, FLOW_PRIORITY};
pub use domain::config::FlowConfig;
pub use simulation::{LiquidWorld, PerfStats, World};
pub use spatial::grid::Grid;
pub use systems::flow::{step_grids, vertical_flow_value, FlowSimulator};

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Liquid engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Cell type ids for JS
#[wasm_bindgen]
pub fn cell_empty() -> u8 { domain::cell::CELL_EMPTY }
#[wasm_bindgen]
pub fn cell_solid() -> u8 { domain::cell::CELL_SOLID }

// Flow bitmask weights for JS
#[wasm_bindgen]
pub fn flow_top() -> u8 { FlowDirection::Top.bit() }
#[wasm_bindgen]
pub fn flow_right() -> u8 { FlowDirection::Right.bit() }
#[wasm_bindgen]
pub fn flow_bottom() -> u8 { FlowDirection::Bottom.bit() }
#[wasm_bindgen]
pub fn flow_left() -> u8 { FlowDirection::Left.bit() }
