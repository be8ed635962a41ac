//! Pure arithmetic. Nothing in here traces or touches the host.
//!
//! Overflow wraps everywhere, matching what the Java caller sees from
//! `int`/`long` arithmetic.

use crate::common::buf::ScratchBuffer;
use crate::common::error::{CalcError, CalcResult};

/// Wrapping 32-bit addition.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Native IEEE-754 product.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `n!` accumulated in 64 bits, wrapping silently past `20!`.
pub fn factorial(n: i32) -> CalcResult<i64> {
    if n < 0 {
        return Err(CalcError::NegativeFactorial(n));
    }
    Ok((2..=i64::from(n)).fold(1i64, |acc, i| acc.wrapping_mul(i)))
}

/// Trial division by odd candidates up to `sqrt(n)`.
pub fn is_prime(n: i32) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let n = i64::from(n);
    let mut i = 3i64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Square a single element with `int` wraparound.
pub fn square(x: i32) -> i32 {
    x.wrapping_mul(x)
}

/// Square every element into a freshly allocated buffer of the same length.
pub fn square_all(input: &[i32]) -> CalcResult<ScratchBuffer<i32>> {
    let mut out = ScratchBuffer::try_with_capacity(input.len())?;
    for &x in input {
        out.push(square(x))?;
    }
    Ok(out)
}
