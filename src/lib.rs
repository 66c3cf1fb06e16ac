#![no_std]

pub mod buffer;
pub mod color;
pub mod encoder;
pub mod gamma;
pub mod order;
pub mod strip;
pub mod sync;
pub mod timing;

pub use buffer::{MAX_CHANNELS, PixelBuffer, buffer_bytes};
pub use color::{ChannelId, Pixel, Rgb};
pub use encoder::{BitstreamEncoder, EncodeResult, EncodeStatus, Phase, Symbol};
pub use gamma::GammaTable;
pub use order::ColorOrder;
pub use strip::{ConfigError, Strip, StripConfig};
pub use sync::CompletionFlag;
pub use timing::{BitTiming, StripKind, TimingTable};

pub use embassy_time::Duration;

/// Outcome of a bounded completion wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStatus {
    Done,
    TimedOut,
}

/// Abstract transmit channel trait
///
/// Implement this trait to bind the encoder to a hardware peripheral.
/// The driver is generic over this trait; the channel owns pin and
/// peripheral configuration and the bounded on-chip symbol memory.
pub trait TransmitChannel {
    type Error;

    /// Tick rate the peripheral's symbol durations are expressed in.
    fn resolution_hz(&self) -> u32;

    /// Enqueue one transmission without blocking.
    ///
    /// The peripheral drains `encoder` incrementally, refilling its
    /// symbol memory until the encoder reports
    /// [`EncodeStatus::Complete`], potentially from interrupt context.
    fn transmit(
        &mut self,
        data: &[u8],
        encoder: &mut BitstreamEncoder,
    ) -> Result<(), Self::Error>;

    /// Block until the in-flight transmission completes or the timeout
    /// elapses.
    fn wait_done(&mut self, timeout: Duration) -> WaitStatus;
}
