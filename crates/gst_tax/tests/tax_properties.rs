//! # Tax Engine Properties
//!
//! Sweeps amounts and rates over the valid domain and checks the invariants
//! every breakdown must satisfy.
//!
//! Run with: cargo test -p gst_tax --test tax_properties

use gst_tax::{compute, CurrencyFormat, TaxError, TaxMode};

const AMOUNTS: [f64; 9] = [
    0.0,
    0.01,
    1.0,
    99.99,
    500.0,
    1000.0,
    1180.0,
    123_456.78,
    98_765_432.1,
];

const RATES: [f64; 10] = [0.0, 0.25, 3.0, 5.0, 12.0, 18.0, 28.0, 40.0, 99.5, 100.0];

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn add_tax_total_matches_formula() {
    for amount in AMOUNTS {
        for rate in RATES {
            let r = compute(amount, rate, TaxMode::AddTax).unwrap();
            assert!(
                relative_eq(r.total, amount + amount * rate / 100.0),
                "amount={amount} rate={rate} total={}",
                r.total
            );
        }
    }
}

#[test]
fn extract_undoes_add() {
    for amount in AMOUNTS {
        for rate in RATES {
            let added = compute(amount, rate, TaxMode::AddTax).unwrap();
            let extracted = compute(added.total, rate, TaxMode::ExtractTax).unwrap();
            assert!(
                relative_eq(extracted.original, amount),
                "amount={amount} rate={rate} original={}",
                extracted.original
            );
            assert!(relative_eq(extracted.tax, added.tax));
        }
    }
}

#[test]
fn every_breakdown_is_balanced() {
    for mode in TaxMode::ALL {
        for amount in AMOUNTS {
            for rate in RATES {
                let r = compute(amount, rate, mode).unwrap();
                assert!(r.is_balanced(1e-9), "{mode} amount={amount} rate={rate}");
                let slack = 1e-9 * r.total.max(1.0);
                assert!(r.tax >= -slack);
                assert!(r.original <= r.total + slack);
            }
        }
    }
}

#[test]
fn invalid_rates_never_produce_numbers() {
    for rate in [-100.0, -0.01, 100.000_1, 250.0, f64::NAN, f64::NEG_INFINITY] {
        for mode in TaxMode::ALL {
            assert!(matches!(
                compute(1000.0, rate, mode),
                Err(TaxError::InvalidRate(_))
            ));
        }
    }
}

#[test]
fn displayed_scenarios() {
    let inr = CurrencyFormat::default();

    let add = compute(1000.0, 18.0, TaxMode::AddTax).unwrap();
    assert_eq!(inr.format(add.original), "₹1,000.00");
    assert_eq!(inr.format(add.tax), "₹180.00");
    assert_eq!(inr.format(add.total), "₹1,180.00");

    let extract = compute(1180.0, 18.0, TaxMode::ExtractTax).unwrap();
    assert_eq!(inr.format(extract.original), "₹1,000.00");
    assert_eq!(inr.format(extract.tax), "₹180.00");
    assert_eq!(inr.format(extract.total), "₹1,180.00");

    let small = compute(500.0, 5.0, TaxMode::AddTax).unwrap();
    assert_eq!(inr.format(small.total), "₹525.00");
}
