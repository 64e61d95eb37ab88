//! FlowSimulator - one tick of the compression flow rule
//!
//! Per tick:
//! 1. zero the diff buffer
//! 2. sweep x-outer / y-inner; each wet, unsettled cell tries Down, Left,
//!    Right, Up in that order and records flows into the diff buffer
//! 3. apply the diff buffer to every cell
//!
//! Liquid amounts only change in step 3, so every cell sees pre-tick amounts
//! of its neighbours. Settle flags are the exception: a flowing cell wakes its
//! neighbours immediately, mid-sweep.

mod batch;
mod directions;
mod perf;
mod vertical;

pub use batch::step_grids;
pub use perf::{reset_flow_counters, take_flow_counters, FlowCounters};
pub use vertical::vertical_flow_value;

use crate::core::error::LiquidError;
use crate::domain::cell::{CellType, FlowDirection, FLOW_PRIORITY};
use crate::domain::config::FlowConfig;
use crate::spatial::grid::Grid;

use directions::{down_flow, side_flow, up_flow};

pub struct FlowSimulator {
    config: FlowConfig,
    // Scratch; contents only meaningful inside `step`
    diffs: Vec<f32>,
}

impl FlowSimulator {
    pub fn new(config: FlowConfig) -> Result<Self, LiquidError> {
        config.validate()?;
        Ok(Self { config, diffs: Vec::new() })
    }

    #[inline]
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Replace the tunables. On error the previous config stays active.
    pub fn configure(&mut self, config: FlowConfig) -> Result<(), LiquidError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Advance `grid` by one tick
    pub fn step(&mut self, grid: &mut Grid) {
        self.diffs.clear();
        self.diffs.resize(grid.size(), 0.0);

        for x in 0..grid.width() {
            for y in 0..grid.height() {
                self.process_cell(grid, x, y);
            }
        }

        self.apply_diffs(grid);
    }

    fn process_cell(&mut self, grid: &mut Grid, x: u32, y: u32) {
        let idx = grid.index(x, y);
        let min_value = self.config.min_value;

        let cell = grid.cell_idx_mut(idx);
        cell.reset_flow_directions();

        if cell.cell_type == CellType::Solid {
            cell.liquid = 0.0;
            return;
        }
        if cell.liquid == 0.0 {
            return;
        }
        if cell.settled {
            perf::record(|c| c.cells_skipped_settled += 1);
            return;
        }
        if cell.liquid < min_value {
            cell.liquid = 0.0;
            return;
        }

        perf::record(|c| c.cells_scanned += 1);

        let start = cell.liquid;
        let mut remaining = start;

        for dir in FLOW_PRIORITY {
            if let Some(n) = grid.neighbor_index(x, y, dir) {
                let neighbor = grid.cell_idx(n);
                if neighbor.cell_type == CellType::Empty {
                    let flow = self.flow_across(dir, start, remaining, neighbor.liquid);
                    if flow != 0.0 {
                        remaining -= flow;
                        let src = *fast!(self.diffs, [idx]);
                        fast!(self.diffs, [idx] = src - flow);
                        let dst = *fast!(self.diffs, [n]);
                        fast!(self.diffs, [n] = dst + flow);
                        grid.cell_idx_mut(idx).mark_flow(dir);
                        grid.cell_idx_mut(n).unsettle();
                        perf::record(|c| c.flows += 1);
                    }
                }
            }

            // Whatever is left is below the noise floor: write it off
            if remaining < min_value {
                let src = *fast!(self.diffs, [idx]);
                fast!(self.diffs, [idx] = src - remaining);
                return;
            }
        }

        if start == remaining {
            let settle_ticks = self.config.settle_ticks;
            let cell = grid.cell_idx_mut(idx);
            cell.settle_count += 1;
            if cell.settle_count >= settle_ticks {
                cell.reset_flow_directions();
                cell.settled = true;
                perf::record(|c| c.cells_settled += 1);
            }
        } else {
            grid.unsettle_neighbors(x, y);
        }
    }

    #[inline]
    fn flow_across(&self, dir: FlowDirection, start: f32, remaining: f32, neighbor_liquid: f32) -> f32 {
        match dir {
            FlowDirection::Bottom => down_flow(&self.config, start, neighbor_liquid),
            FlowDirection::Left | FlowDirection::Right => {
                side_flow(&self.config, remaining, neighbor_liquid)
            }
            FlowDirection::Top => up_flow(&self.config, remaining, neighbor_liquid),
        }
    }

    fn apply_diffs(&mut self, grid: &mut Grid) {
        let min_value = self.config.min_value;
        for (cell, diff) in grid.cells.iter_mut().zip(self.diffs.iter()) {
            cell.liquid += *diff;
            if cell.liquid < min_value {
                cell.liquid = 0.0;
                cell.unsettle();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator() -> FlowSimulator {
        FlowSimulator::new(FlowConfig::default()).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let bad = FlowConfig { flow_speed: 2.0, ..FlowConfig::default() };
        assert!(matches!(FlowSimulator::new(bad), Err(LiquidError::Configuration(_))));
    }

    #[test]
    fn configure_keeps_previous_config_on_error() {
        let mut sim = simulator();
        let bad = FlowConfig { max_flow: -1.0, ..FlowConfig::default() };
        assert!(sim.configure(bad).is_err());
        assert_eq!(sim.config(), &FlowConfig::default());

        let good = FlowConfig { flow_speed: 0.25, ..FlowConfig::default() };
        sim.configure(good.clone()).unwrap();
        assert_eq!(sim.config(), &good);
    }

    #[test]
    fn lone_cell_settles_after_ten_quiet_ticks() {
        let mut sim = simulator();
        let mut grid = Grid::new(1, 1).unwrap();
        grid.add_liquid(0, 0, 0.5).unwrap();

        for tick in 1..10 {
            sim.step(&mut grid);
            assert_eq!(grid.settled_at(0, 0), Ok(false), "tick {}", tick);
            assert_eq!(grid.cell(0, 0).unwrap().settle_count(), tick);
        }
        sim.step(&mut grid);
        assert_eq!(grid.settled_at(0, 0), Ok(true));
        assert_eq!(grid.liquid_at(0, 0), Ok(0.5));

        grid.add_liquid(0, 0, 0.1).unwrap();
        assert_eq!(grid.settled_at(0, 0), Ok(false));
        assert_eq!(grid.cell(0, 0).unwrap().settle_count(), 0);
    }

    #[test]
    fn settle_threshold_follows_config() {
        let config = FlowConfig { settle_ticks: 3, ..FlowConfig::default() };
        let mut sim = FlowSimulator::new(config).unwrap();
        let mut grid = Grid::new(1, 1).unwrap();
        grid.add_liquid(0, 0, 0.5).unwrap();

        sim.step(&mut grid);
        sim.step(&mut grid);
        assert_eq!(grid.settled_at(0, 0), Ok(false));
        sim.step(&mut grid);
        assert_eq!(grid.settled_at(0, 0), Ok(true));
    }

    #[test]
    fn trace_below_min_value_is_zeroed() {
        let mut sim = simulator();
        let mut grid = Grid::new(1, 1).unwrap();
        grid.add_liquid(0, 0, 0.004).unwrap();

        sim.step(&mut grid);

        assert_eq!(grid.liquid_at(0, 0), Ok(0.0));
        assert_eq!(grid.settled_at(0, 0), Ok(false));
    }

    #[test]
    fn solid_cells_are_drained_by_the_sweep() {
        let mut sim = simulator();
        let mut grid = Grid::new(1, 1).unwrap();
        // bypass the editor to plant liquid in a wall
        grid.cells[0].cell_type = CellType::Solid;
        grid.cells[0].liquid = 0.7;

        sim.step(&mut grid);

        assert_eq!(grid.liquid_at(0, 0), Ok(0.0));
    }

    #[test]
    fn remainder_below_floor_is_written_off() {
        // 0.006 sends 0.0015 right, leaving 0.0045 < min_value
        let mut sim = simulator();
        let mut grid = Grid::new(2, 1).unwrap();
        grid.add_liquid(0, 0, 0.006).unwrap();

        sim.step(&mut grid);

        assert_eq!(grid.liquid_at(0, 0), Ok(0.0));
        // the 0.0015 that did arrive is itself below the floor
        assert_eq!(grid.liquid_at(1, 0), Ok(0.0));
        assert_eq!(grid.flow_bitmask_at(0, 0), Ok(2));
    }

    #[test]
    fn single_step_on_a_row_spreads_a_quarter_right() {
        let mut sim = simulator();
        let mut grid = Grid::new(4, 1).unwrap();
        grid.add_liquid(0, 0, 1.0).unwrap();

        sim.step(&mut grid);

        assert_eq!(grid.liquid_at(0, 0), Ok(0.75));
        assert_eq!(grid.liquid_at(1, 0), Ok(0.25));
        assert_eq!(grid.liquid_at(2, 0), Ok(0.0));
        assert_eq!(grid.flow_bitmask_at(0, 0), Ok(2));
    }

    #[test]
    fn flows_never_enter_walls() {
        let mut sim = simulator();
        let types = [CellType::Solid, CellType::Empty, CellType::Solid];
        let mut grid = Grid::with_types(3, 1, &types).unwrap();
        grid.add_liquid(1, 0, 1.0).unwrap();

        for _ in 0..20 {
            sim.step(&mut grid);
        }

        assert_eq!(grid.liquid_at(0, 0), Ok(0.0));
        assert_eq!(grid.liquid_at(2, 0), Ok(0.0));
        assert_eq!(grid.liquid_at(1, 0), Ok(1.0));
        assert_eq!(grid.settled_at(1, 0), Ok(true));
    }

    #[test]
    fn wide_source_fans_out_with_priority() {
        // 3.0 in the middle of the top row of a 3x3 grid
        let mut sim = simulator();
        let mut grid = Grid::new(3, 3).unwrap();
        grid.add_liquid(1, 0, 3.0).unwrap();

        sim.step(&mut grid);

        assert_eq!(grid.liquid_at(1, 1), Ok(1.625));
        assert_eq!(grid.liquid_at(0, 0), Ok(0.34375));
        assert_eq!(grid.liquid_at(2, 0), Ok(0.2578125));
        assert_eq!(grid.liquid_at(1, 0), Ok(0.7734375));
        // Right | Bottom | Left
        assert_eq!(grid.flow_bitmask_at(1, 0), Ok(14));
    }

    #[test]
    fn counters_track_scans_flows_and_settles() {
        let mut sim = simulator();
        let mut grid = Grid::new(2, 1).unwrap();
        grid.add_liquid(0, 0, 1.0).unwrap();

        reset_flow_counters();
        sim.step(&mut grid);
        let counters = take_flow_counters();

        assert_eq!(counters.cells_scanned, 1);
        assert_eq!(counters.flows, 1);
        assert_eq!(take_flow_counters(), FlowCounters::default());
    }
}
