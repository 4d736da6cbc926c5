use vesta_math::{Uint256, Uint512};

/// Addition modulo `m`. Operands must already be reduced below `m`.
#[inline]
pub(crate) fn add_mod(a: Uint256, b: Uint256, m: Uint256) -> Uint256 {
    debug_assert!(a < m && b < m);
    let (sum, carry) = a.overflowing_add(b);
    if carry || sum >= m {
        sum.overflowing_sub(m).0
    } else {
        sum
    }
}

/// Subtraction modulo `m`. Operands must already be reduced below `m`.
#[inline]
pub(crate) fn sub_mod(a: Uint256, b: Uint256, m: Uint256) -> Uint256 {
    debug_assert!(a < m && b < m);
    if a >= b {
        a - b
    } else {
        m - b + a
    }
}

/// Multiplication modulo `m`, widened to 512 bits so the intermediate
/// product never overflows.
#[inline]
pub(crate) fn mul_mod(a: Uint256, b: Uint256, m: Uint256) -> Uint256 {
    let wide = Uint512::from(a) * Uint512::from(b);
    wide.div_rem(Uint512::from(m)).1.low_u256()
}

/// Square-and-multiply exponentiation modulo `m`.
pub(crate) fn pow_mod(base: Uint256, exponent: Uint256, m: Uint256) -> Uint256 {
    let mut acc = Uint256::from_u64(1);
    for bit in exponent.iter_be_bits() {
        acc = mul_mod(acc, acc, m);
        if bit {
            acc = mul_mod(acc, base, m);
        }
    }
    acc
}
