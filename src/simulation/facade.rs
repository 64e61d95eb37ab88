use wasm_bindgen::prelude::*;

use crate::core::error::LiquidError;
use crate::domain::cell::CellType;

use super::perf_stats::PerfStats;
use super::LiquidWorld;

fn to_js(e: LiquidError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: LiquidWorld,
}

#[wasm_bindgen]
impl World {
    /// Create an all-Empty world with default tunables
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        Ok(Self {
            core: LiquidWorld::new(width, height).map_err(to_js)?,
        })
    }

    /// Create a world from row-major cell type ids (0 = empty, 1 = solid)
    #[wasm_bindgen(js_name = withTypes)]
    pub fn with_types(width: u32, height: u32, type_ids: &[u8]) -> Result<World, JsValue> {
        let types = type_ids
            .iter()
            .map(|id| CellType::try_from(*id))
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_js)?;
        Ok(Self {
            core: LiquidWorld::with_types(width, height, &types).map_err(to_js)?,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Apply a (partial) JSON flow config
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)?;
        Ok(())
    }

    pub fn get_config_json(&self) -> Result<String, JsValue> {
        self.core.config_json().map_err(to_js)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    pub fn set_type(&mut self, x: u32, y: u32, type_id: u8) -> Result<(), JsValue> {
        let cell_type = CellType::try_from(type_id).map_err(to_js)?;
        self.core.set_type(x, y, cell_type).map_err(to_js)
    }

    pub fn add_liquid(&mut self, x: u32, y: u32, amount: f32) -> Result<(), JsValue> {
        self.core.add_liquid(x, y, amount).map_err(to_js)
    }

    /// Liquid brush
    pub fn add_liquid_in_radius(&mut self, cx: i32, cy: i32, radius: i32, amount: f32) -> Result<(), JsValue> {
        self.core.add_liquid_in_radius(cx, cy, radius, amount).map_err(to_js)
    }

    /// Wall / eraser brush
    pub fn set_type_in_radius(&mut self, cx: i32, cy: i32, radius: i32, type_id: u8) -> Result<(), JsValue> {
        let cell_type = CellType::try_from(type_id).map_err(to_js)?;
        self.core.set_type_in_radius(cx, cy, radius, cell_type).map_err(to_js)
    }

    pub fn clear_liquid(&mut self) {
        self.core.clear_liquid();
    }

    pub fn liquid_at(&self, x: u32, y: u32) -> Result<f32, JsValue> {
        self.core.liquid_at(x, y).map_err(to_js)
    }

    pub fn type_at(&self, x: u32, y: u32) -> Result<u8, JsValue> {
        self.core.type_at(x, y).map(CellType::id).map_err(to_js)
    }

    pub fn settled_at(&self, x: u32, y: u32) -> Result<bool, JsValue> {
        self.core.settled_at(x, y).map_err(to_js)
    }

    pub fn flow_bitmask_at(&self, x: u32, y: u32) -> Result<u8, JsValue> {
        self.core.flow_bitmask_at(x, y).map_err(to_js)
    }

    pub fn total_liquid(&self) -> f64 {
        self.core.total_liquid()
    }

    pub fn settled_count(&self) -> u32 {
        self.core.settled_count() as u32
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }

    // === Render buffers: views into wasm memory, valid until the next step ===

    pub fn liquid_ptr(&self) -> *const f32 {
        self.core.liquid_ptr()
    }

    pub fn types_ptr(&self) -> *const u8 {
        self.core.types_ptr()
    }

    pub fn flow_bits_ptr(&self) -> *const u8 {
        self.core.flow_bits_ptr()
    }

    /// Elements per render buffer (width * height)
    pub fn render_len(&self) -> usize {
        self.core.render_len()
    }
}
