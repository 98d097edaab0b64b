use log::debug;

use crate::errors::{BitpackError, BitpackResult};
use crate::reader::BitReader;

/// Places a `bit_width`-wide sample in the most-significant bits of a
/// 32-bit word, zero-filling the rest, then reverses the word's byte
/// order. For byte-aligned widths this reads the sample back out
/// little-endian: an 8-bit sample maps to itself.
pub fn to_output_word(sample: u32, bit_width: u32) -> u32 {
    (sample << (32 - bit_width)).swap_bytes()
}

/// Decodes `count` packed `bit_width`-bit unsigned samples from `data`
/// into 32-bit output words. Samples are laid out contiguously,
/// most-significant bit first. Bytes beyond `count * bit_width` bits are
/// never read.
pub fn unpack_values(data: &[u8], bit_width: u32, count: i64) -> BitpackResult<Vec<u32>> {
    let count = check_args(data, bit_width, count)?;
    debug!(
        "unpack {} values of {} bits from {} bytes",
        count,
        bit_width,
        data.len()
    );
    let mut reader = BitReader::new(data);
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let sample = reader.next_sample(bit_width)?;
        values.push(to_output_word(sample, bit_width));
    }
    Ok(values)
}

/// Decodes `count` packed samples and scales each to a probability in
/// [0.0, 1.0] by dividing by the largest `bit_width`-bit value.
pub fn unpack_probabilities(data: &[u8], bit_width: u32, count: i64) -> BitpackResult<Vec<f64>> {
    let count = check_args(data, bit_width, count)?;
    let denom = ((1_u64 << bit_width) - 1) as f64;
    let mut reader = BitReader::new(data);
    let mut probs = Vec::with_capacity(count);
    for _ in 0..count {
        let sample = reader.next_sample(bit_width)?;
        probs.push(f64::from(sample) / denom);
    }
    Ok(probs)
}

fn check_args(data: &[u8], bit_width: u32, count: i64) -> BitpackResult<usize> {
    if !(1..=32).contains(&bit_width) {
        return Err(BitpackError::InvalidBitWidth(bit_width));
    }
    if count < 0 {
        return Err(BitpackError::InvalidCount(count));
    }
    // Checked in bits, in u128 so count * bit_width cannot overflow.
    let need_bits = count as u128 * u128::from(bit_width);
    if (data.len() as u128) * 8 < need_bits {
        let need = usize::try_from((need_bits + 7) / 8).unwrap_or(usize::MAX);
        return Err(BitpackError::InsufficientInput {
            need,
            got: data.len(),
        });
    }
    Ok(count as usize)
}
