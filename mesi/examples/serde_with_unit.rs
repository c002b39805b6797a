//! Example demonstrating the serde_with_unit helper module.
//!
//! Plain quantities serialize as their bare magnitude. Fields marked with
//! `#[serde(with = "mesi::serde_with_unit")]` also carry the rendered unit, which is checked
//! when the value is read back.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use mesi::{DynQuantity, Kilo, Length, Pascals, Quantity, Seconds};
    use serde::{Deserialize, Serialize};

    println!("=== Using serde_with_unit ===\n");

    #[derive(Serialize, Deserialize, Debug)]
    struct Sample {
        #[serde(with = "mesi::serde_with_unit")]
        depth: Quantity<f64, Length, Kilo>,

        #[serde(with = "mesi::serde_with_unit")]
        pressure: Pascals,

        elapsed: Seconds,
    }

    let sample = Sample {
        depth: Quantity::new(1.2),
        pressure: Pascals::<f64>::new(1.2e7),
        elapsed: Seconds::new(30.0),
    };

    let json = match serde_json::to_string_pretty(&sample) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("serialization failed: {e}");
            return;
        }
    };
    println!("{json}\n");

    match serde_json::from_str::<Sample>(&json) {
        Ok(back) => println!("read back: {back:?}\n"),
        Err(e) => eprintln!("round trip failed: {e}"),
    }

    println!("=== Unit mismatch ===\n");

    let wrong = r#"{
        "depth": {"value": 1.2, "unit": "m"},
        "pressure": {"value": 1.0, "unit": "m^-1 s^-2 kg"},
        "elapsed": 30.0
    }"#;
    match serde_json::from_str::<Sample>(wrong) {
        Ok(p) => println!("unexpectedly accepted: {p:?}"),
        Err(e) => println!("rejected: {e}\n"),
    }

    println!("=== Runtime-tagged values ===\n");

    let readings: Vec<DynQuantity<f64>> = vec![
        sample.depth.into(),
        sample.pressure.into(),
        sample.elapsed.into(),
    ];
    match serde_json::to_string(&readings) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("serialization failed: {e}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
