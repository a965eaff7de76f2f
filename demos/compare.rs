use std::env;
use std::time::Instant;

use digimul::{init_logger, Int, Multiplier, MOD};

const DEFAULT_ROUNDS: usize = 100;

// [20 % MOD, 19 % MOD, ..., 1 % MOD], most-significant first
fn large_pos() -> digimul::Result<Int> {
    Int::from_be_digits((1..=20).rev().map(|d| d % MOD as i64), 1)
}

fn rounds() -> usize {
    match env::var("DIGIMUL_ROUNDS") {
        Ok(s) => s.parse().unwrap_or_else(|_| {
            log::warn!("compare - ignoring DIGIMUL_ROUNDS='{s}'");
            DEFAULT_ROUNDS
        }),
        Err(_) => DEFAULT_ROUNDS,
    }
}

fn main() -> digimul::Result<()> {
    init_logger(false);
    let large = large_pos()?;
    let n = rounds();
    println!("{large}**{n}:");

    let mut results = Vec::with_capacity(Multiplier::ALL.len());
    for m in Multiplier::ALL {
        let start = Instant::now();
        let mut a = Int::one();
        for _ in 0..n {
            a = m.apply(&a, &large);
        }
        println!("{} {:?}", m.name(), start.elapsed());
        println!("{a}");
        results.push(a);
    }
    if results.windows(2).all(|w| w[0] == w[1]) {
        log::info!("compare - all {} strategies agree", results.len());
    } else {
        log::error!("compare - strategies disagree");
    }
    Ok(())
}
