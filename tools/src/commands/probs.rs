use clap::Parser;

use bitpack::decode::unpack_probabilities;
use bitpack::errors::BitpackResult;

#[derive(Debug, Parser)]
pub struct Config {
    #[arg(long, default_value_t = 6)]
    precision: usize,
}

pub fn command(data: &[u8], bits: u32, count: i64, cfg: Config) -> BitpackResult<()> {
    let probs = unpack_probabilities(data, bits, count)?;
    for p in probs {
        println!("{:.*}", cfg.precision, p);
    }
    Ok(())
}
