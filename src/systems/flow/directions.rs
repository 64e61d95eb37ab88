//! Directional flow procedures
//!
//! Each returns the amount to move across one face, already scaled and
//! clamped. The sequence is always compute, scale if above `min_flow`, clamp
//! to `[0, min(max_flow, available)]`; that ordering is what keeps liquid
//! non-negative.

use super::vertical::vertical_flow_value;
use crate::domain::config::FlowConfig;

/// Flow into the cell below. Uses the source's liquid at sweep start.
#[inline]
pub(super) fn down_flow(config: &FlowConfig, source: f32, below: f32) -> f32 {
    let mut flow = vertical_flow_value(config, source, below) - below;
    if below > 0.0 && flow > config.min_flow {
        flow *= config.flow_speed;
    }
    constrain(config, flow, source)
}

/// Flow into a left/right neighbour.
///
/// Always divides by 4, even when the other side is a wall or the grid edge.
#[inline]
pub(super) fn side_flow(config: &FlowConfig, remaining: f32, side: f32) -> f32 {
    let mut flow = (remaining - side) / 4.0;
    if flow > config.min_flow {
        flow *= config.flow_speed;
    }
    constrain(config, flow, remaining)
}

/// Flow into the cell above, only what compression pushes out.
#[inline]
pub(super) fn up_flow(config: &FlowConfig, remaining: f32, above: f32) -> f32 {
    let mut flow = remaining - vertical_flow_value(config, remaining, above);
    if flow > config.min_flow {
        flow *= config.flow_speed;
    }
    constrain(config, flow, remaining)
}

#[inline]
fn constrain(config: &FlowConfig, flow: f32, available: f32) -> f32 {
    let flow = flow.max(0.0);
    let limit = config.max_flow.min(available);
    if flow > limit {
        limit
    } else {
        flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_fills_empty_cell_to_max_value() {
        let config = FlowConfig::default();
        assert_eq!(down_flow(&config, 0.6, 0.0), 0.6);
        assert_eq!(down_flow(&config, 1.0, 0.0), 1.0);
        // compressed split: lower cell should end at 1.2
        assert!((down_flow(&config, 2.0, 0.0) - 1.2).abs() < 1e-6);
    }

    #[test]
    fn down_never_pulls_liquid_upward() {
        let config = FlowConfig::default();
        // target level for the lower cell is below what it already holds
        assert_eq!(down_flow(&config, 0.16, 1.2), 0.0);
    }

    #[test]
    fn down_speed_applies_only_when_lower_cell_is_wet() {
        let config = FlowConfig { flow_speed: 0.5, ..FlowConfig::default() };
        assert_eq!(down_flow(&config, 0.6, 0.0), 0.6);
        // target 1.0 - 0.2 = 0.8, throttled to 0.4
        assert!((down_flow(&config, 0.6, 0.2) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn down_is_capped_by_max_flow_and_source() {
        let config = FlowConfig { max_flow: 0.5, ..FlowConfig::default() };
        assert_eq!(down_flow(&config, 0.9, 0.0), 0.5);

        let config = FlowConfig { max_compression: 4.0, ..FlowConfig::default() };
        // mid branch would ask for more than the source holds
        assert!(down_flow(&config, 1.5, 0.0) <= 1.5);
    }

    #[test]
    fn side_moves_a_quarter_of_the_difference() {
        let config = FlowConfig::default();
        assert_eq!(side_flow(&config, 1.0, 0.0), 0.25);
        assert_eq!(side_flow(&config, 0.5, 0.7), 0.0);
    }

    #[test]
    fn side_small_flows_skip_the_throttle() {
        let config = FlowConfig { flow_speed: 0.0, ..FlowConfig::default() };
        // 0.016 / 4 = 0.004 <= min_flow, so flow_speed is not applied
        assert!((side_flow(&config, 0.016, 0.0) - 0.004).abs() < 1e-7);
        // 0.4 / 4 = 0.1 > min_flow, throttled to zero
        assert_eq!(side_flow(&config, 0.4, 0.0), 0.0);
    }

    #[test]
    fn up_only_moves_compressed_excess() {
        let config = FlowConfig::default();
        assert_eq!(up_flow(&config, 0.9, 0.0), 0.0);
        // 3.0 alone: lower share is 1.625, push 1.375 up
        assert_eq!(up_flow(&config, 3.0, 0.0), 1.375);
    }
}
