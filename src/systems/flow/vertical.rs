//! Vertical flow value - how much a destination cell should hold
//!
//! Given the combined liquid of a source and the cell below/above it, returns
//! the level the lower cell should end at. This is what makes columns stack
//! with pressure-like compression:
//!
//! - combined <= max_value: fill the lower cell to max_value
//! - combined < 2*max_value + max_compression: compress smoothly
//! - otherwise: split evenly plus the compression allowance

use crate::domain::config::FlowConfig;

#[inline]
pub fn vertical_flow_value(config: &FlowConfig, amount: f32, destination_liquid: f32) -> f32 {
    let max = config.max_value;
    let compression = config.max_compression;
    let sum = amount + destination_liquid;

    if sum <= max {
        max
    } else if sum < 2.0 * max + compression {
        (max * max + sum * compression) / (max + compression)
    } else {
        (sum + compression) / 2.0
    }
}
