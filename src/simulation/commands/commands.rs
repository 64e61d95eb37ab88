use crate::core::error::LiquidError;
use crate::domain::cell::CellType;

use super::LiquidWorld;

pub(super) fn set_type(world: &mut LiquidWorld, x: u32, y: u32, cell_type: CellType) -> Result<(), LiquidError> {
    world.grid.set_type(x, y, cell_type)
}

pub(super) fn add_liquid(world: &mut LiquidWorld, x: u32, y: u32, amount: f32) -> Result<(), LiquidError> {
    world.grid.add_liquid(x, y, amount)
}

/// Cells of the disc around `(cx, cy)` that lie on the grid.
/// Bounds are clipped to the grid before iterating and the math runs in i64.
/// A negative radius is empty.
fn disc(world: &LiquidWorld, cx: i32, cy: i32, radius: i32) -> Vec<(u32, u32)> {
    if radius < 0 {
        return Vec::new();
    }
    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    let max_x = world.grid.width() as i64 - 1;
    let max_y = world.grid.height() as i64 - 1;
    let (x0, x1) = ((cx - r).max(0), (cx + r).min(max_x));
    let (y0, y1) = ((cy - r).max(0), (cy + r).min(max_y));
    let r2 = r * r;

    let mut cells = Vec::new();
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                cells.push((x as u32, y as u32));
            }
        }
    }
    cells
}

pub(super) fn add_liquid_in_radius(
    world: &mut LiquidWorld,
    cx: i32,
    cy: i32,
    radius: i32,
    amount: f32,
) -> Result<(), LiquidError> {
    if !amount.is_finite() {
        return Err(LiquidError::InvalidAmount(amount));
    }
    for (x, y) in disc(world, cx, cy, radius) {
        world.grid.add_liquid(x, y, amount)?;
    }
    Ok(())
}

pub(super) fn set_type_in_radius(
    world: &mut LiquidWorld,
    cx: i32,
    cy: i32,
    radius: i32,
    cell_type: CellType,
) -> Result<(), LiquidError> {
    for (x, y) in disc(world, cx, cy, radius) {
        world.grid.set_type(x, y, cell_type)?;
    }
    Ok(())
}

pub(super) fn clear_liquid(world: &mut LiquidWorld) {
    world.grid.clear_liquid();
    world.extract_render_buffers();
}
