use clap::Parser;

use bitpack::decode::unpack_values;
use bitpack::errors::BitpackResult;

#[derive(Debug, Parser)]
pub struct Config {
    #[arg(long)]
    hex: bool,
}

pub fn command(data: &[u8], bits: u32, count: i64, cfg: Config) -> BitpackResult<()> {
    let values = unpack_values(data, bits, count)?;
    for v in values {
        if cfg.hex {
            println!("{:08x}", v);
        } else {
            println!("{}", v);
        }
    }
    Ok(())
}
