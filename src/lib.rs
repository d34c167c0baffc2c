#![forbid(unsafe_code)]

pub mod color;
pub mod curve;
pub mod error;
pub mod half;
pub mod patch;

pub use color::{ChannelOrder, Color, ComponentEncoding};
pub use curve::{ColorCurve, ColorKeyframe, CURVE_SAMPLES};
pub use error::{HuepatchError, HuepatchResult};
pub use patch::{
    write_blueprint_split_color, write_byte, write_color, write_color_curve, write_colors,
    write_float,
};
