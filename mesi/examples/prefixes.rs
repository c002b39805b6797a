//! Prefix conversions on integer and float storage, and the literal helpers.
//!
//! Run with: cargo run --example prefixes

use mesi::prefixes::{KILO, MILLI};
use mesi::{Kilo, Length, Literals, Meters, Micro, Milli, Quantity, Unprefixed};

fn main() {
    println!("=== Integer storage ===\n");

    let five = Meters::<i32>::new(5);
    let mm: Quantity<i32, Length, Milli> = five.to();
    println!("{five} is {} * 10^-3 m", mm.value());
    assert_eq!(mm.to::<Unprefixed>(), five);

    // Scaling up truncates; `try_to` reports it instead.
    let km: Quantity<i32, Length, Kilo> = five.to();
    println!("{five} in kilo units truncates to {}", km.value());
    match five.try_to::<Kilo>() {
        Ok(q) => println!("exact: {q}"),
        Err(e) => println!("checked conversion refused: {e}"),
    }
    match Meters::<i32>::new(i32::MAX).try_to::<Micro>() {
        Ok(q) => println!("exact: {q}"),
        Err(e) => println!("checked conversion refused: {e}"),
    }

    println!("\n=== Float storage ===\n");

    let d = 1.5 * KILO * 1.0_f64.meters();
    println!("{d} = {}", d.to::<Unprefixed>());
    let gap = 250.0 * MILLI * 1.0_f64.meters();
    let total = d.to::<Unprefixed>() + gap.to::<Unprefixed>();
    println!("{d} + {gap} = {total}");

    println!("\n=== Literals ===\n");

    let speed = 120_u32.meters() / 60_u32.seconds();
    println!("120 m over 60 s: {speed}");
    let power = 12.0_f64.volts() * 2.0_f64.amperes();
    println!("12 V at 2 A: {power}");
}
