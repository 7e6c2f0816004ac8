use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 120, g: 220, b: 140 };
pub const ACCENT: Color = Color::TrueColor { r: 250, g: 200, b: 90 };
pub const SEPARATOR: Color = Color::TrueColor { r: 110, g: 110, b: 110 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 210, g: 210, b: 210 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 100, g: 180, b: 255 };
pub const MAC_ADDR: Color = Color::TrueColor { r: 200, g: 140, b: 255 };
pub const VENDOR: Color = Color::TrueColor { r: 230, g: 160, b: 110 };
pub const UNKNOWN: Color = Color::TrueColor { r: 130, g: 130, b: 130 };
