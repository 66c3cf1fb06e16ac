use crate::color::ChannelId;

/// Physical byte order expected by the LED chipset.
///
/// Independent of logical channel meaning; a closed set chosen once at
/// construction. The white channel, when the strip has one, is always
/// the last physical byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    Rgb,
    /// Native order of the WS2812 family.
    #[default]
    Grb,
    Bgr,
}

impl ColorOrder {
    /// Logical channel stored at each physical byte position.
    ///
    /// 3-channel strips use only the first three positions.
    pub const fn layout(self) -> [ChannelId; 4] {
        match self {
            Self::Rgb => [
                ChannelId::Red,
                ChannelId::Green,
                ChannelId::Blue,
                ChannelId::White,
            ],
            Self::Grb => [
                ChannelId::Green,
                ChannelId::Red,
                ChannelId::Blue,
                ChannelId::White,
            ],
            Self::Bgr => [
                ChannelId::Blue,
                ChannelId::Green,
                ChannelId::Red,
                ChannelId::White,
            ],
        }
    }
}
