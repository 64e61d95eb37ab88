//! FlowConfig - tunables of the compression flow rule
//!
//! Loaded from JSON the same way content bundles are: every field is optional
//! in the document and falls back to its default.

use serde::{Deserialize, Serialize};

use crate::core::error::LiquidError;

/// Consecutive flow-free ticks before a cell is settled
pub const DEFAULT_SETTLE_TICKS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Liquid a single cell holds before compression begins
    pub max_value: f32,
    /// Amounts below this are treated as zero
    pub min_value: f32,
    /// Extra liquid a column may hold before overflow is split evenly
    pub max_compression: f32,
    /// Flows at or below this are not throttled by `flow_speed`
    pub min_flow: f32,
    /// Hard per-tick cap on flow through one face
    pub max_flow: f32,
    /// Throttle in [0, 1] applied to flows above `min_flow`
    pub flow_speed: f32,
    pub settle_ticks: u32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            max_value: 1.0,
            min_value: 0.005,
            max_compression: 0.25,
            min_flow: 0.005,
            max_flow: 4.0,
            flow_speed: 1.0,
            settle_ticks: DEFAULT_SETTLE_TICKS,
        }
    }
}

impl FlowConfig {
    pub fn from_json(json: &str) -> Result<Self, LiquidError> {
        let config: FlowConfig = serde_json::from_str(json)
            .map_err(|e| LiquidError::config(format!("invalid flow config json: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, LiquidError> {
        serde_json::to_string(self)
            .map_err(|e| LiquidError::config(format!("flow config not serializable: {}", e)))
    }

    pub fn validate(&self) -> Result<(), LiquidError> {
        let fields = [
            ("max_value", self.max_value),
            ("min_value", self.min_value),
            ("max_compression", self.max_compression),
            ("min_flow", self.min_flow),
            ("max_flow", self.max_flow),
            ("flow_speed", self.flow_speed),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LiquidError::config(format!("{} must be finite, got {}", name, value)));
        }

        if self.min_value <= 0.0 {
            return Err(LiquidError::config(format!(
                "min_value must be > 0, got {}",
                self.min_value
            )));
        }
        if self.min_value >= self.max_value {
            return Err(LiquidError::config(format!(
                "min_value ({}) must be below max_value ({})",
                self.min_value, self.max_value
            )));
        }
        if self.max_flow <= 0.0 {
            return Err(LiquidError::config(format!(
                "max_flow must be > 0, got {}",
                self.max_flow
            )));
        }
        if self.max_compression < 0.0 {
            return Err(LiquidError::config(format!(
                "max_compression must be >= 0, got {}",
                self.max_compression
            )));
        }
        if !(0.0..=1.0).contains(&self.flow_speed) {
            return Err(LiquidError::config(format!(
                "flow_speed must be within [0, 1], got {}",
                self.flow_speed
            )));
        }
        if self.settle_ticks == 0 {
            return Err(LiquidError::config("settle_ticks must be >= 1"));
        }
        Ok(())
    }
}
