/// Scalar carried by every node.
///
/// Arithmetic on values wraps on overflow, matching plain unsigned
/// machine integers.
pub type Value = u64;

/// Placeholder held by a combinator node until it is evaluated.
pub const EMPTY_VALUE: Value = 0;

#[inline]
pub fn wrapping_sum(a: Value, b: Value) -> Value {
    a.wrapping_add(b)
}

#[inline]
pub fn wrapping_product(a: Value, b: Value) -> Value {
    a.wrapping_mul(b)
}
