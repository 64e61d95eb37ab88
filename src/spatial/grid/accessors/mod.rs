mod cells;
mod reads;
