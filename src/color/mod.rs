mod blackbody;
mod utils;

pub use blackbody::{color_temperature_to_rgb, planck_radiance};
use smart_leds::RGB8;
pub use utils::{parse_hex_color, rgb_from_u32};

pub type Rgb = RGB8;
