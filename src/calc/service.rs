//! Service layer pairing the pure operations with diagnostic tracing.

use crate::common::error::CalcResult;
use crate::common::log::Tracer;
use crate::sysinfo::probe::SystemProbe;
use crate::sysinfo::service as sysinfo_service;

use super::ops;

/// Stateless calculator. The tracer is the only thing it holds.
#[derive(Debug, Default, Clone)]
pub struct Calculator<T> {
    tracer: T,
}

impl<T: Tracer> Calculator<T> {
    pub fn new(tracer: T) -> Self {
        Self { tracer }
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        self.tracer.trace("add", &format!("Native: Adding {a} + {b}"));
        ops::add(a, b)
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        self.tracer
            .trace("multiply", &format!("Native: Multiplying {a:.2} * {b:.2}"));
        ops::multiply(a, b)
    }

    /// Traced only when an actual product was computed (`n >= 2`).
    pub fn factorial(&self, n: i32) -> CalcResult<i64> {
        let result = ops::factorial(n)?;
        if n >= 2 {
            self.tracer
                .trace("factorial", &format!("Native: Factorial of {n} = {result}"));
        }
        Ok(result)
    }

    /// Traced only for odd primes, which are the ones trial division confirms.
    pub fn is_prime(&self, n: i32) -> bool {
        let prime = ops::is_prime(n);
        if prime && n != 2 {
            self.tracer.trace("is_prime", &format!("Native: {n} is prime"));
        }
        prime
    }

    /// Square every element. One trace line per element.
    pub fn process_array(&self, input: &[i32]) -> CalcResult<Vec<i32>> {
        let squared = ops::square_all(input)?;
        for (x, y) in input.iter().zip(squared.as_slice()) {
            self.tracer.trace("process_array", &format!("Native: {x}^2 = {y}"));
        }
        Ok(squared.into_vec())
    }

    /// Five-line system report, or the fixed fallback text.
    pub fn system_info<P: SystemProbe + ?Sized>(&self, probe: &P) -> String {
        sysinfo_service::report_or_fallback(probe)
    }
}
