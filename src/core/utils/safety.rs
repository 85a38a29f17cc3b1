//! Checked-in-debug slice access
//!
//! The occupancy grid is read several times per particle per step. Callers
//! bounds-check the (col, row) pair once and then index the flat cell array
//! through `fast!`, which keeps the panic in debug builds and drops the
//! redundant check in release builds.
//!
//! ```rust
//! use tidepool_engine::fast;
//!
//! let mut cells: Vec<Option<u32>> = vec![None; 8];
//! fast!(cells, [3] = Some(7));
//! assert_eq!(*fast!(cells, [3]), Some(7));
//! assert_eq!(*fast!(cells, [4]), None);
//! ```

/// Index a slice with a bounds check in debug and `get_unchecked` in release.
///
/// Only use on indices that were already validated by the caller.
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
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
