use wasm_bindgen::prelude::*;

/// Snapshot of the last step; all zeros while perf metrics are off
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) extract_ms: f64,
    pub(super) cells_scanned: u32,
    pub(super) cells_skipped_settled: u32,
    pub(super) flows: u32,
    pub(super) cells_settled: u32,
    pub(super) wet_cells: u32,
    pub(super) settled_cells: u32,
    pub(super) grid_size: u32,
    pub(super) total_liquid: f64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_scanned(&self) -> u32 { self.cells_scanned }
    #[wasm_bindgen(getter)]
    pub fn cells_skipped_settled(&self) -> u32 { self.cells_skipped_settled }
    #[wasm_bindgen(getter)]
    pub fn flows(&self) -> u32 { self.flows }
    #[wasm_bindgen(getter)]
    pub fn cells_settled(&self) -> u32 { self.cells_settled }
    #[wasm_bindgen(getter)]
    pub fn wet_cells(&self) -> u32 { self.wet_cells }
    #[wasm_bindgen(getter)]
    pub fn settled_cells(&self) -> u32 { self.settled_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn total_liquid(&self) -> f64 { self.total_liquid }
}
