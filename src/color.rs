use crate::half::f32_to_half16;

/// An RGBA color with 8-bit channels, as it appears in declarative patch data.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from the three color channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Unpack a `0xRRGGBBAA` literal.
    pub const fn from_rgba_u32(packed: u32) -> Self {
        Self::new(
            (packed >> 24) as u8,
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
        )
    }

    /// Pack back into `0xRRGGBBAA` form.
    pub const fn to_rgba_u32(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Encode the channels selected by `order`, each serialized per
    /// `encoding`, into the byte sequence the target format expects.
    pub fn encode(self, order: ChannelOrder, encoding: ComponentEncoding) -> Vec<u8> {
        let mut out = Vec::with_capacity(order.channel_count() * encoding.byte_len());
        for channel in order.select(self) {
            encoding.push(&mut out, channel);
        }
        out
    }
}

/// Which channels are emitted, and in what sequence. The three-channel
/// variants omit alpha entirely.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum ChannelOrder {
    #[default]
    Rgba,
    Argb,
    Bgra,
    Rgb,
    Bgr,
}

impl ChannelOrder {
    pub fn channel_count(self) -> usize {
        match self {
            Self::Rgba | Self::Argb | Self::Bgra => 4,
            Self::Rgb | Self::Bgr => 3,
        }
    }

    pub fn has_alpha(self) -> bool {
        self.channel_count() == 4
    }

    /// Channel values of `color` in this order.
    pub fn select(self, color: Color) -> Vec<u8> {
        let Color { r, g, b, a } = color;
        match self {
            Self::Rgba => vec![r, g, b, a],
            Self::Argb => vec![a, r, g, b],
            Self::Bgra => vec![b, g, r, a],
            Self::Rgb => vec![r, g, b],
            Self::Bgr => vec![b, g, r],
        }
    }
}

/// Binary representation of a single 0-255 channel value.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum ComponentEncoding {
    /// The raw channel byte.
    #[default]
    Byte,
    /// `value / 255.0` as a little-endian IEEE-754 single.
    Float32,
    /// `value / 255.0` as a little-endian IEEE-754 half.
    Half16,
}

impl ComponentEncoding {
    pub fn byte_len(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Float32 => 4,
            Self::Half16 => 2,
        }
    }

    fn push(self, out: &mut Vec<u8>, channel: u8) {
        match self {
            Self::Byte => out.push(channel),
            Self::Float32 => {
                let v = f32::from(channel) / 255.0;
                out.extend_from_slice(&v.to_le_bytes());
            }
            Self::Half16 => {
                let v = f32::from(channel) / 255.0;
                out.extend_from_slice(&f32_to_half16(v).to_le_bytes());
            }
        }
    }
}
