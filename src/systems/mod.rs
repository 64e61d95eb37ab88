//! Systems - per-tick processing over a grid

pub mod flow;

pub use flow::{
    reset_flow_counters, step_grids, take_flow_counters, vertical_flow_value, FlowCounters,
    FlowSimulator,
};
