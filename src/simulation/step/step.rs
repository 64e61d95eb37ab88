use crate::systems::flow::{reset_flow_counters, take_flow_counters};

use super::{LiquidWorld, PerfTimer};

pub(super) fn step(world: &mut LiquidWorld) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.grid_size = world.grid.size() as u32;
        reset_flow_counters();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    world.simulator.step(&mut world.grid);

    if perf_on {
        let t0 = PerfTimer::start();
        world.extract_render_buffers();
        world.perf_stats.extract_ms = t0.elapsed_ms();
    } else {
        world.extract_render_buffers();
    }

    if perf_on {
        let counters = take_flow_counters();
        world.perf_stats.cells_scanned = counters.cells_scanned as u32;
        world.perf_stats.cells_skipped_settled = counters.cells_skipped_settled as u32;
        world.perf_stats.flows = counters.flows as u32;
        world.perf_stats.cells_settled = counters.cells_settled as u32;
        // Full grid scans only when perf is on
        world.perf_stats.wet_cells = world.grid.wet_count() as u32;
        world.perf_stats.settled_cells = world.grid.settled_count() as u32;
        world.perf_stats.total_liquid = world.grid.total_liquid();
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
}
