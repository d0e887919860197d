pub mod bits;

pub use bits::{bit_shift_left, bit_shift_right, truncate_i64};
