//! 32-bit shift semantics on hosts whose native integers are wider.
//!
//! JS bitwise operators work on
//! [32 bits](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/Bitwise_Operators);
//! these helpers reproduce that behavior for 64-bit inputs.

/// Reinterprets the low 32 bits of `value` as a signed two's-complement
/// integer, discarding the high bits.
pub const fn truncate_i64(value: i64) -> i32 {
    value as i32
}

/// Left-shifts the low 32 bits of `a` by the low 5 bits of `b`, wrapping on
/// overflow.
pub const fn bit_shift_left(a: i64, b: i32) -> i32 {
    truncate_i64(a).wrapping_shl(b as u32)
}

/// Arithmetic right shift of the low 32 bits of `a` by the low 5 bits of
/// `b`. The sign bit is replicated into the vacated positions.
pub const fn bit_shift_right(a: i64, b: i32) -> i32 {
    truncate_i64(a).wrapping_shr(b as u32)
}
