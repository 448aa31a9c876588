use near_prime::fixture;
use tracing_subscriber::EnvFilter;

/// Print the experiment table spanning the u64 range
fn main() -> Result<(), near_prime::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    for row in fixture::rows()? {
        println!("{}", row);
    }
    Ok(())
}
