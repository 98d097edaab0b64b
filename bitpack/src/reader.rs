use crate::errors::{BitpackError, BitpackResult};

/// Reads successive fixed-width unsigned samples from a packed byte
/// slice, most-significant bit first. State is scoped to one decode
/// pass; nothing persists across instances.
pub struct BitReader<'a> {
    data: &'a [u8],
    byte_offset: usize,
    // Holds the bits already read from `data` but not yet consumed.
    // At most width-1 bits remain before a refill, and a refill adds
    // whole bytes, so the buffer peaks at 39 bits for width 32.
    pending_bits: u64,
    pending_count: u32,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_offset: 0,
            pending_bits: 0,
            pending_count: 0,
        }
    }

    /// Consumes the next `width` bits of the stream and returns them as
    /// an unsigned value. `width` must be in 1..=32.
    pub fn next_sample(&mut self, width: u32) -> BitpackResult<u32> {
        while self.pending_count < width {
            let byte = self.data.get(self.byte_offset).copied().ok_or(
                BitpackError::InsufficientInput {
                    need: self.byte_offset + 1,
                    got: self.data.len(),
                },
            )?;
            self.pending_bits = (self.pending_bits << 8) | u64::from(byte);
            self.pending_count += 8;
            self.byte_offset += 1;
        }
        self.pending_count -= width;
        let sample = (self.pending_bits >> self.pending_count) as u32 & width_mask(width);
        // Drop the consumed bits with an explicit mask. pending_count is
        // at most 39 here, so the shift is always in range for u64.
        self.pending_bits &= (1u64 << self.pending_count) - 1;
        Ok(sample)
    }
}

fn width_mask(width: u32) -> u32 {
    if width == 32 {
        u32::MAX
    } else {
        (1u32 << width) - 1
    }
}
