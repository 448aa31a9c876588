use clap::Parser;
use near_prime::{next_prime, previous_prime};
use std::process;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

const SHORT_TIME: f64 = 0.0001;

/// Format an elapsed time, collapsing anything too short to measure
fn elapsed(start: Instant) -> String {
    let secs = start.elapsed().as_secs_f64();
    if secs < SHORT_TIME {
        format!("< {}s", SHORT_TIME)
    } else {
        format!("{:.3}s", secs)
    }
}

/// Find the primes closest to n
#[derive(Parser)]
#[command(name = "find_primes")]
struct Args {
    /// find primes closest to n
    n: u64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let n = Args::parse().n;

    let start = Instant::now();
    let prev = match previous_prime(n) {
        Ok(p) => p,
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };
    if prev == n {
        println!("{} is prime ({})", n, elapsed(start));
        return;
    }
    println!("{:20}  # previous prime ({})", prev, elapsed(start));

    let start = Instant::now();
    match next_prime(n) {
        Ok(next) => println!("{:20}  # next prime ({})", next, elapsed(start)),
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    }
}
