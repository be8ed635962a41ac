//! Walks through every bridge operation, the same tour the Java
//! `NativeCalculator.demonstrateJNI()` gives, without needing a JVM.

use nativecalc::api::FACTORIAL_SENTINEL;
use nativecalc::common::config::BridgeCfg;
use nativecalc::common::log::{self, TracingTracer};
use nativecalc::sysinfo::UnameProbe;
use nativecalc::Calculator;

fn main() {
    let cfg = BridgeCfg::load();
    log::init(&cfg);
    let calc = Calculator::new(TracingTracer::new(cfg.trace));

    println!("Native Calculator Demo");
    println!("{}", "=".repeat(40));

    println!("Basic Arithmetic:");
    println!("5 + 3 = {}", calc.add(5, 3));
    println!("4.5 * 2.2 = {}", calc.multiply(4.5, 2.2));

    println!("\nFactorial Calculation:");
    for i in 1..=5 {
        let value = calc.factorial(i).unwrap_or(FACTORIAL_SENTINEL);
        println!("{i}! = {value}");
    }

    println!("\nPrime Number Check:");
    for n in [2, 3, 4, 17, 25, 29] {
        let verdict = if calc.is_prime(n) { "prime" } else { "not prime" };
        println!("{n} is {verdict}");
    }

    println!("\nSystem Information:");
    println!("{}", calc.system_info(&UnameProbe));

    println!("\nArray Processing:");
    let input = [1, 2, 3, 4, 5];
    match calc.process_array(&input) {
        Ok(output) => {
            println!("Input:  {input:?}");
            println!("Output: {output:?}");
        }
        Err(err) => eprintln!("array processing failed: {err}"),
    }
}
