//! Minimal end-to-end example: build a force from base units and a pressure from a force.

use mesi::literals::{KG, M, S};
use mesi::{Kilo, MetersSq, Newtons, Pascals, Quantity, Unprefixed};

fn main() {
    let f: Newtons = (2.0 * KG * (3.0 * M) / (1.0 * S * S)).cast();
    assert_eq!(f, Newtons::<f64>::new(6.0));

    let p: Pascals = f / MetersSq::<f64>::new(4.0);
    assert!((p.value() - 1.5).abs() < 1e-12);
    println!("pressure: {p:.2}");

    let kpa: Quantity<f64, _, Kilo> = p.to();
    assert!((kpa.to::<Unprefixed>().value() - 1.5).abs() < 1e-12);
    println!("in kilo units: {kpa}");

    let side = MetersSq::<f64>::new(16.0).sqrt();
    let raised = side.pow::<3, 2>();
    println!("side {side}, side^(3/2) {raised}");
}
