//! Gamma correction lookup table.
//!
//! LEDs are driven linearly but perceived logarithmically; the table
//! remaps requested channel values to values that look linear on the
//! strip. Built once from a gamma exponent and immutable afterwards.

use libm::{pow, round};

/// Precomputed byte-to-byte gamma lookup.
///
/// `table[i] = round((i / 255)^gamma * 255 + 0.49999)`. The bias keeps
/// every non-zero input at least 1, so dim channels never drop out
/// entirely. `table[0]` is always 0 and `table[255]` always 255, and the
/// table is monotonic non-decreasing for any positive exponent.
///
/// Changing the exponent requires constructing a new table.
#[derive(Debug, Clone)]
pub struct GammaTable {
    table: [u8; 256],
}

impl GammaTable {
    /// Build the table for the given exponent.
    ///
    /// The exponent is caller-validated and expected to be positive.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn new(gamma: f64) -> Self {
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            let corrected = round(pow(i as f64 / 255.0, gamma) * 255.0 + 0.49999);
            *slot = corrected.clamp(0.0, 255.0) as u8;
        }
        Self { table }
    }

    /// Look up the corrected value for a raw channel value.
    #[inline]
    pub const fn correct(&self, value: u8) -> u8 {
        self.table[value as usize]
    }
}
