//! Cell - per-cell simulation state
//!
//! Pure simulation data: no sprites, no colors. Renderers read `liquid`,
//! `cell_type` and `flow_bitmask` and never write back.

use crate::core::error::LiquidError;

/// Cell type ids as exposed over the JS boundary
pub const CELL_EMPTY: u8 = 0;
pub const CELL_SOLID: u8 = 1;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellType {
    #[default]
    Empty = CELL_EMPTY,
    Solid = CELL_SOLID,
}

impl CellType {
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CellType {
    type Error = LiquidError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            CELL_EMPTY => Ok(CellType::Empty),
            CELL_SOLID => Ok(CellType::Solid),
            other => Err(LiquidError::UnknownCellType(other)),
        }
    }
}

/// Face of a cell. Discriminants index `Cell::flow_directions`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowDirection {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

/// Order in which a cell tries its faces. Reordering changes flow patterns.
pub const FLOW_PRIORITY: [FlowDirection; 4] = [
    FlowDirection::Bottom,
    FlowDirection::Left,
    FlowDirection::Right,
    FlowDirection::Top,
];

impl FlowDirection {
    pub const ALL: [FlowDirection; 4] = [
        FlowDirection::Top,
        FlowDirection::Right,
        FlowDirection::Bottom,
        FlowDirection::Left,
    ];

    /// Weight in the presentation bitmask (Top=1, Right=2, Bottom=4, Left=8)
    #[inline]
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Coordinate offset; y grows downward
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            FlowDirection::Top => (0, -1),
            FlowDirection::Right => (1, 0),
            FlowDirection::Bottom => (0, 1),
            FlowDirection::Left => (-1, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    x: u32,
    y: u32,
    pub(crate) cell_type: CellType,
    pub(crate) liquid: f32,
    pub(crate) settled: bool,
    pub(crate) settle_count: u32,
    pub(crate) flow_directions: [bool; 4],
}

impl Cell {
    pub fn new(x: u32, y: u32, cell_type: CellType) -> Self {
        Self {
            x,
            y,
            cell_type,
            liquid: 0.0,
            settled: false,
            settle_count: 0,
            flow_directions: [false; 4],
        }
    }

    #[inline]
    pub fn x(&self) -> u32 { self.x }

    #[inline]
    pub fn y(&self) -> u32 { self.y }

    #[inline]
    pub fn cell_type(&self) -> CellType { self.cell_type }

    #[inline]
    pub fn liquid(&self) -> f32 { self.liquid }

    #[inline]
    pub fn settled(&self) -> bool { self.settled }

    #[inline]
    pub fn settle_count(&self) -> u32 { self.settle_count }

    #[inline]
    pub fn is_solid(&self) -> bool {
        self.cell_type == CellType::Solid
    }

    #[inline]
    pub fn flow_directions(&self) -> [bool; 4] {
        self.flow_directions
    }

    #[inline]
    pub fn flows_toward(&self, dir: FlowDirection) -> bool {
        self.flow_directions[dir as usize]
    }

    /// Force this cell back into the sweep. Also restarts the settle countdown.
    #[inline]
    pub fn unsettle(&mut self) {
        self.settled = false;
        self.settle_count = 0;
    }

    #[inline]
    pub(crate) fn reset_flow_directions(&mut self) {
        self.flow_directions = [false; 4];
    }

    #[inline]
    pub(crate) fn mark_flow(&mut self, dir: FlowDirection) {
        self.flow_directions[dir as usize] = true;
    }

    /// 4-bit mask of last tick's outgoing faces
    pub fn flow_bitmask(&self) -> u8 {
        FlowDirection::ALL
            .iter()
            .filter(|dir| self.flows_toward(**dir))
            .fold(0, |mask, dir| mask | dir.bit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmask_weights_follow_top_right_bottom_left() {
        let mut cell = Cell::new(0, 0, CellType::Empty);
        assert_eq!(cell.flow_bitmask(), 0);

        cell.mark_flow(FlowDirection::Top);
        assert_eq!(cell.flow_bitmask(), 1);
        cell.mark_flow(FlowDirection::Bottom);
        assert_eq!(cell.flow_bitmask(), 5);
        cell.mark_flow(FlowDirection::Right);
        cell.mark_flow(FlowDirection::Left);
        assert_eq!(cell.flow_bitmask(), 15);

        cell.reset_flow_directions();
        assert_eq!(cell.flow_bitmask(), 0);
    }

    #[test]
    fn unsettle_restarts_the_countdown() {
        let mut cell = Cell::new(3, 4, CellType::Empty);
        cell.settle_count = 10;
        cell.settled = true;

        cell.unsettle();

        assert!(!cell.settled());
        assert_eq!(cell.settle_count(), 0);
        assert_eq!((cell.x(), cell.y()), (3, 4));
    }

    #[test]
    fn priority_is_down_left_right_up() {
        assert_eq!(
            FLOW_PRIORITY,
            [FlowDirection::Bottom, FlowDirection::Left, FlowDirection::Right, FlowDirection::Top]
        );
    }

    #[test]
    fn cell_type_ids_round_trip_and_reject_unknown() {
        assert_eq!(CellType::try_from(CELL_SOLID), Ok(CellType::Solid));
        assert_eq!(CellType::Empty.id(), CELL_EMPTY);
        assert_eq!(CellType::try_from(9), Err(LiquidError::UnknownCellType(9)));
    }
}
