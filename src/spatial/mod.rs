//! Spatial - the cell arena and coordinate arithmetic

pub mod grid;
