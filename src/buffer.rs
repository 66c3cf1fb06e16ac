//! Gamma-corrected, order-mapped pixel byte storage.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::color::Pixel;
use crate::gamma::GammaTable;
use crate::order::ColorOrder;

/// Widest supported pixel format (RGBW).
pub const MAX_CHANNELS: usize = 4;

/// Byte capacity needed for `pixel_count` pixels of any supported
/// format. Use to size the const parameter of [`PixelBuffer`].
pub const fn buffer_bytes(pixel_count: usize) -> usize {
    pixel_count * MAX_CHANNELS
}

/// Error returned when the backing storage cannot hold the requested
/// pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    pub required: usize,
    pub capacity: usize,
}

/// Flat byte buffer holding every pixel's channel values in wire order.
///
/// Values are gamma-corrected and order-mapped on write; the stored
/// bytes are exactly what goes on the wire. Length is fixed at
/// construction to `pixel_count * channel_count`.
#[derive(Debug)]
pub struct PixelBuffer<const BYTES: usize> {
    data: Vec<u8, BYTES>,
    pixel_count: usize,
    channel_count: usize,
    order: ColorOrder,
    gamma: GammaTable,
}

impl<const BYTES: usize> PixelBuffer<BYTES> {
    /// Allocate a zeroed buffer for `pixel_count` pixels.
    pub fn new(
        pixel_count: usize,
        channel_count: usize,
        order: ColorOrder,
        gamma: GammaTable,
    ) -> Result<Self, CapacityError> {
        let required = pixel_count * channel_count;
        let mut data = Vec::new();
        if data.resize(required, 0).is_err() {
            return Err(CapacityError {
                required,
                capacity: BYTES,
            });
        }
        Ok(Self {
            data,
            pixel_count,
            channel_count,
            order,
            gamma,
        })
    }

    /// Store a pixel's gamma-corrected channel bytes.
    ///
    /// An out-of-range index is a logged no-op. Channels beyond the
    /// strip's channel count are silently dropped.
    pub fn set_pixel(&mut self, index: usize, pixel: Pixel) {
        if index >= self.pixel_count {
            #[cfg(feature = "esp32-log")]
            println!("pixel index {index} out of range");
            return;
        }
        let layout = self.order.layout();
        let start = index * self.channel_count;
        for (offset, id) in layout.iter().enumerate().take(self.channel_count) {
            self.data[start + offset] = self.gamma.correct(pixel.channel(*id));
        }
    }

    pub fn set_rgbw(&mut self, index: usize, red: u8, green: u8, blue: u8, white: u8) {
        self.set_pixel(index, Pixel::new(red, green, blue, white));
    }

    /// Store a pixel from a packed `0x00RRGGBB` word, white forced to 0.
    pub fn set_packed(&mut self, index: usize, color: u32) {
        self.set_pixel(index, Pixel::from_packed(color));
    }

    /// Read back the stored channel values of a pixel.
    ///
    /// Returns the gamma-corrected bytes as written to the wire, not
    /// the original input; gamma application is one-way. An
    /// out-of-range index yields a zeroed pixel.
    pub fn get_pixel(&self, index: usize) -> Pixel {
        if index >= self.pixel_count {
            #[cfg(feature = "esp32-log")]
            println!("pixel index {index} out of range");
            return Pixel::default();
        }
        let layout = self.order.layout();
        let start = index * self.channel_count;
        let mut pixel = Pixel::default();
        for (offset, id) in layout.iter().enumerate().take(self.channel_count) {
            pixel.set_channel(*id, self.data[start + offset]);
        }
        pixel
    }

    /// Zero every channel byte of every pixel.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Wire-order byte view handed to transmission.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    pub const fn channel_count(&self) -> usize {
        self.channel_count
    }
}
