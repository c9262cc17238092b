//! Crediting benchmarks
//!
//! Crediting cost scales with the number of policies written against the
//! credited flight, not the whole book, thanks to the per-flight index.
//! This bench tracks both the indexed path and the underwriting write path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use aerosure_common::AccountId;
use aerosure_ledger::Ledger;
use rust_decimal_macros::dec;

fn ledger_with_policies(per_flight: usize, flights: usize) -> (Ledger, AccountId, AccountId) {
    let owner = AccountId::new("acct:owner");
    let app = AccountId::new("acct:app");
    let airline = AccountId::new("acct:alpha-air");

    let ledger = Ledger::new(owner.clone());
    ledger.authorize_caller(&owner, app.clone()).unwrap();
    ledger
        .register_airline(&app, airline.clone(), "Alpha Air")
        .unwrap();

    for f in 0..flights {
        let name = format!("AB{f:03}");
        ledger
            .register_flight(&app, &name, 1000 + f as i64, airline.clone())
            .unwrap();
        for p in 0..per_flight {
            ledger
                .buy_insurance(
                    &app,
                    &name,
                    1000 + f as i64,
                    airline.clone(),
                    AccountId::new(format!("acct:p{f}-{p}")),
                    dec!(0.5),
                )
                .unwrap();
        }
    }

    (ledger, app, airline)
}

fn bench_credit_insurees(c: &mut Criterion) {
    let mut group = c.benchmark_group("credit_insurees");

    for per_flight in [10usize, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("policies_per_flight", per_flight),
            &per_flight,
            |b, &per_flight| {
                // 10 flights of book noise around the credited one
                let (ledger, app, airline) = ledger_with_policies(per_flight, 10);
                b.iter(|| {
                    // Idempotent after the first pass; measures the indexed
                    // scan over already-spent policies.
                    ledger
                        .credit_insurees(black_box(&app), "AB000", 1000, airline.clone())
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_buy_insurance(c: &mut Criterion) {
    c.bench_function("buy_insurance", |b| {
        let (ledger, app, airline) = ledger_with_policies(0, 1);
        let mut i = 0u64;
        b.iter(|| {
            i += 1;
            ledger
                .buy_insurance(
                    black_box(&app),
                    "AB000",
                    1000,
                    airline.clone(),
                    AccountId::new(format!("acct:p{i}")),
                    dec!(0.5),
                )
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_credit_insurees, bench_buy_insurance);
criterion_main!(benches);
