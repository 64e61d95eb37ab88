//! Hot-loop indexing macro
//!
//! The flow sweep touches the diff buffer up to ten times per wet cell, always
//! with indices produced by `Grid::index` / `Grid::neighbor_index`. Debug builds
//! keep the normal bounds check; release builds drop it.
//!
//! ```rust
//! use liquid_engine::fast;
//!
//! let mut diffs = vec![0.0f32; 4];
//! fast!(diffs, [2] = 0.5);
//! let pending = *fast!(diffs, [2]);
//! assert_eq!(pending, 0.5);
//! ```

/// Indexed read/write that is bounds-checked only under `debug_assertions`.
///
/// - `fast!(slice, [i])` yields `&slice[i]`
/// - `fast!(slice, [i] = v)` stores `v`
///
/// Callers must only pass indices that come from the grid that sized `slice`.
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
