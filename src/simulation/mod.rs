//! LiquidWorld - owns a grid and drives the flow simulator
//!
//! Orchestration only. The flow rule lives in systems/flow, the cell arena in
//! spatial/grid. This layer adds the frame counter, editor commands, render
//! buffers and perf metrics, and is what the wasm facade wraps.

use crate::core::error::LiquidError;
use crate::domain::cell::CellType;
use crate::domain::config::FlowConfig;
use crate::spatial::grid::Grid;
use crate::systems::flow::FlowSimulator;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Row-major copies of the read contract, refreshed after every step
pub(crate) struct RenderBuffers {
    pub(crate) liquid: Vec<f32>,
    pub(crate) types: Vec<u8>,
    pub(crate) flow_bits: Vec<u8>,
}

pub struct LiquidWorld {
    grid: Grid,
    simulator: FlowSimulator,
    frame: u64,
    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl LiquidWorld {
    /// Create an all-Empty world with default tunables
    pub fn new(width: u32, height: u32) -> Result<Self, LiquidError> {
        init::create_world(Grid::new(width, height)?)
    }

    /// Create a world with one initial type per cell (row-major)
    pub fn with_types(width: u32, height: u32, types: &[CellType]) -> Result<Self, LiquidError> {
        init::create_world(Grid::with_types(width, height, types)?)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    // === Settings ===

    pub fn config(&self) -> &FlowConfig {
        self.simulator.config()
    }

    pub fn configure(&mut self, config: FlowConfig) -> Result<(), LiquidError> {
        settings::configure(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), LiquidError> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> Result<String, LiquidError> {
        settings::config_json(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Commands ===

    pub fn set_type(&mut self, x: u32, y: u32, cell_type: CellType) -> Result<(), LiquidError> {
        commands::set_type(self, x, y, cell_type)
    }

    pub fn add_liquid(&mut self, x: u32, y: u32, amount: f32) -> Result<(), LiquidError> {
        commands::add_liquid(self, x, y, amount)
    }

    /// Brush: add liquid to every cell within `radius` of the center
    pub fn add_liquid_in_radius(&mut self, cx: i32, cy: i32, radius: i32, amount: f32) -> Result<(), LiquidError> {
        commands::add_liquid_in_radius(self, cx, cy, radius, amount)
    }

    /// Brush: retype every cell within `radius` of the center
    pub fn set_type_in_radius(&mut self, cx: i32, cy: i32, radius: i32, cell_type: CellType) -> Result<(), LiquidError> {
        commands::set_type_in_radius(self, cx, cy, radius, cell_type)
    }

    pub fn clear_liquid(&mut self) {
        commands::clear_liquid(self)
    }

    // === Reads ===

    pub fn liquid_at(&self, x: u32, y: u32) -> Result<f32, LiquidError> {
        self.grid.liquid_at(x, y)
    }

    pub fn type_at(&self, x: u32, y: u32) -> Result<CellType, LiquidError> {
        self.grid.type_at(x, y)
    }

    pub fn settled_at(&self, x: u32, y: u32) -> Result<bool, LiquidError> {
        self.grid.settled_at(x, y)
    }

    pub fn flow_bitmask_at(&self, x: u32, y: u32) -> Result<u8, LiquidError> {
        self.grid.flow_bitmask_at(x, y)
    }

    pub fn total_liquid(&self) -> f64 {
        self.grid.total_liquid()
    }

    pub fn settled_count(&self) -> usize {
        self.grid.settled_count()
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Render buffers (for JS) ===

    /// Re-pack the render buffers from the grid
    pub fn extract_render_buffers(&mut self) {
        render_extract::extract_render_buffers(self);
    }

    pub fn liquid_ptr(&self) -> *const f32 {
        self.render.liquid.as_ptr()
    }

    pub fn types_ptr(&self) -> *const u8 {
        self.render.types.as_ptr()
    }

    pub fn flow_bits_ptr(&self) -> *const u8 {
        self.render.flow_bits.as_ptr()
    }

    /// Element count of each render buffer
    pub fn render_len(&self) -> usize {
        self.grid.size()
    }

    pub fn liquid_buffer(&self) -> &[f32] {
        &self.render.liquid
    }

    pub fn types_buffer(&self) -> &[u8] {
        &self.render.types
    }

    pub fn flow_bits_buffer(&self) -> &[u8] {
        &self.render.flow_bits
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
