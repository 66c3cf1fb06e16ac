//! Strip driver facade tying buffer, encoder and transmit channel
//! together.

use embassy_time::Duration;

use crate::buffer::{CapacityError, PixelBuffer};
use crate::color::Pixel;
use crate::encoder::BitstreamEncoder;
use crate::gamma::GammaTable;
use crate::order::ColorOrder;
use crate::timing::StripKind;
use crate::{TransmitChannel, WaitStatus};

/// Configuration for a strip driver.
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    pub pixel_count: usize,
    pub kind: StripKind,
    pub order: ColorOrder,
    /// Gamma exponent, expected positive. 1.0 disables correction.
    pub gamma: f64,
}

/// Fatal configuration error at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Backing storage cannot hold `pixel_count * channel_count` bytes.
    BufferTooSmall(CapacityError),
}

impl From<CapacityError> for ConfigError {
    fn from(err: CapacityError) -> Self {
        Self::BufferTooSmall(err)
    }
}

/// Driver for one linear chain of addressable LEDs.
///
/// Owns the pixel buffer and the encoder; the transmit channel is the
/// hardware-facing collaborator implementing [`TransmitChannel`].
///
/// Single logical owner, no internal locking: mutating pixels between
/// [`Strip::write`] and completion races with the peripheral's read of
/// the buffer. Wait for completion (or external confirmation) before
/// mutating again.
pub struct Strip<C: TransmitChannel, const BYTES: usize> {
    channel: C,
    buffer: PixelBuffer<BYTES>,
    encoder: BitstreamEncoder,
}

impl<C: TransmitChannel, const BYTES: usize> Strip<C, BYTES> {
    /// Create a driver bound to an already configured transmit channel.
    ///
    /// The encoder timings are resolved against the channel's tick
    /// rate once, here.
    pub fn new(channel: C, config: &StripConfig) -> Result<Self, ConfigError> {
        let buffer = PixelBuffer::new(
            config.pixel_count,
            config.kind.channel_count(),
            config.order,
            GammaTable::new(config.gamma),
        )?;
        let encoder = BitstreamEncoder::new(config.kind, channel.resolution_hz());
        Ok(Self {
            channel,
            buffer,
            encoder,
        })
    }

    pub fn set_pixel(&mut self, index: usize, pixel: Pixel) {
        self.buffer.set_pixel(index, pixel);
    }

    pub fn set_rgbw(&mut self, index: usize, red: u8, green: u8, blue: u8, white: u8) {
        self.buffer.set_rgbw(index, red, green, blue, white);
    }

    /// Set a pixel from a packed `0x00RRGGBB` word, white forced to 0.
    pub fn set_packed(&mut self, index: usize, color: u32) {
        self.buffer.set_packed(index, color);
    }

    /// Read back the stored (gamma-corrected) channel values.
    pub fn get_pixel(&self, index: usize) -> Pixel {
        self.buffer.get_pixel(index)
    }

    /// Zero the whole buffer. Takes effect on the next [`Strip::write`].
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Enqueue a transmission of the current buffer contents.
    ///
    /// Non-blocking: returns once the channel has accepted the
    /// transmission; the peripheral drains the encoder in the
    /// background. A previous transmission may have been aborted
    /// mid-drain, so the encoder state is rewound first.
    pub fn write(&mut self) -> Result<(), C::Error> {
        self.encoder.reset();
        self.channel.transmit(self.buffer.bytes(), &mut self.encoder)
    }

    /// Block until the in-flight transmission completes or the timeout
    /// elapses. Timeout expiry is reported, not fatal; the caller may
    /// wait again.
    pub fn wait_till_write_completes(&mut self, timeout: Duration) -> WaitStatus {
        self.channel.wait_done(timeout)
    }

    pub const fn pixel_count(&self) -> usize {
        self.buffer.pixel_count()
    }

    /// Get a reference to the transmit channel.
    pub const fn channel(&self) -> &C {
        &self.channel
    }

    /// Get a mutable reference to the transmit channel.
    pub const fn channel_mut(&mut self) -> &mut C {
        &mut self.channel
    }
}
