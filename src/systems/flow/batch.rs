//! Stepping many independent grids at once
//!
//! A single grid's sweep is order-dependent and stays on one thread. Separate
//! grids share nothing, so with the `parallel` feature each rayon worker gets
//! its own simulator (and scratch buffer) and takes whole grids.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::FlowSimulator;
use crate::core::error::LiquidError;
use crate::domain::config::FlowConfig;
use crate::spatial::grid::Grid;

/// Advance every grid by one tick with the same tunables
pub fn step_grids(config: &FlowConfig, grids: &mut [Grid]) -> Result<(), LiquidError> {
    config.validate()?;

    #[cfg(feature = "parallel")]
    {
        grids.par_iter_mut().for_each_init(
            || FlowSimulator { config: config.clone(), diffs: Vec::new() },
            |sim, grid| sim.step(grid),
        );
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut sim = FlowSimulator::new(config.clone())?;
        for grid in grids.iter_mut() {
            sim.step(grid);
        }
    }

    Ok(())
}
