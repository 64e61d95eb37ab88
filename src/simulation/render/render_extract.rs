use super::LiquidWorld;

/// Pack liquid / type id / flow mask into the row-major render buffers.
/// Grid cells are already row-major, so this is a straight copy per cell.
pub(super) fn extract_render_buffers(world: &mut LiquidWorld) {
    let render = &mut world.render;
    let cells = world.grid.cells();

    for (((liquid, ty), bits), cell) in render
        .liquid
        .iter_mut()
        .zip(render.types.iter_mut())
        .zip(render.flow_bits.iter_mut())
        .zip(cells.iter())
    {
        *liquid = cell.liquid();
        *ty = cell.cell_type().id();
        *bits = cell.flow_bitmask();
    }
}
