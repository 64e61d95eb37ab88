//! Domain - what a cell is and how the flow rule is tuned

pub mod cell;
pub mod config;

pub use cell::{Cell, CellType, FlowDirection, FLOW_PRIORITY};
pub use config::FlowConfig;
