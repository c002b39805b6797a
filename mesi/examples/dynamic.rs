//! Runtime-tagged quantities: mixed collections, checked arithmetic and conversion back to a
//! static type.

use mesi::{DescribeCache, DynQuantity, Error, Joules, Meters, Newtons, Seconds, Watts};

fn main() {
    let log: Vec<DynQuantity<f64>> = vec![
        Joules::<f64>::new(500.0).into(),
        Seconds::new(20.0).into(),
        Meters::new(3.0).into(),
        Newtons::<f64>::new(4.0).into(),
    ];

    let cache = DescribeCache::new();
    for q in &log {
        println!("{:>8} [{}]", q.value(), cache.describe(q.tag()));
    }

    match log[0].checked_div(log[1]) {
        Ok(p) => {
            println!("\naverage power: {p}");
            let watts: Result<Watts, Error> = p.try_into();
            match watts {
                Ok(w) => println!("as watts: {w}"),
                Err(e) => println!("not a power: {e}"),
            }
        }
        Err(e) => println!("division failed: {e}"),
    }

    match log[2].checked_add(log[3]) {
        Ok(sum) => println!("sum: {sum}"),
        Err(e) => println!("\nrefused: {e}"),
    }

    let work: Result<Joules, Error> = log[2].checked_mul(log[3]).and_then(|w| w.try_into());
    match work {
        Ok(w) => println!("work: {w}"),
        Err(e) => println!("not an energy: {e}"),
    }

    println!("\ncached descriptions: {}", cache.len());
}
