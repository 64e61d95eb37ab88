use crate::core::error::LiquidError;
use crate::domain::config::FlowConfig;
use crate::spatial::grid::Grid;
use crate::systems::flow::FlowSimulator;

use super::perf_stats::PerfStats;
use super::{LiquidWorld, RenderBuffers};

pub(super) fn create_world(grid: Grid) -> Result<LiquidWorld, LiquidError> {
    let size = grid.size();
    let mut world = LiquidWorld {
        simulator: FlowSimulator::new(FlowConfig::default())?,
        frame: 0,
        render: RenderBuffers {
            liquid: vec![0.0; size],
            types: vec![0; size],
            flow_bits: vec![0; size],
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        grid,
    };
    world.extract_render_buffers();

    console_log!("Liquid world created: {}x{}", world.width(), world.height());
    Ok(world)
}
