use crate::core::error::LiquidError;
use crate::domain::config::FlowConfig;

use super::perf_stats::PerfStats;
use super::LiquidWorld;

pub(super) fn configure(world: &mut LiquidWorld, config: FlowConfig) -> Result<(), LiquidError> {
    match world.simulator.configure(config) {
        Ok(()) => {
            if let Ok(json) = world.simulator.config().to_json() {
                console_log!("Flow config applied: {}", json);
            }
            Ok(())
        }
        Err(e) => {
            console_warn!("Flow config rejected: {}", e);
            Err(e)
        }
    }
}

pub(super) fn load_config_json(world: &mut LiquidWorld, json: &str) -> Result<(), LiquidError> {
    let config = FlowConfig::from_json(json).map_err(|e| {
        console_warn!("Flow config json rejected: {}", e);
        e
    })?;
    configure(world, config)
}

pub(super) fn config_json(world: &LiquidWorld) -> Result<String, LiquidError> {
    world.simulator.config().to_json()
}

pub(super) fn enable_perf_metrics(world: &mut LiquidWorld, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &LiquidWorld) -> PerfStats {
    world.perf_stats.clone()
}
