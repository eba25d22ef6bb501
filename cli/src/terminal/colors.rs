use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 0x7f, g: 0xd9, b: 0x62 };
pub const ACCENT: Color = Color::TrueColor { r: 0xe6, g: 0xb4, b: 0x50 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 0xbf, g: 0xbd, b: 0xb6 };
pub const IPV4_ADDR: Color = Color::TrueColor { r: 0x59, g: 0xc2, b: 0xff };
pub const LOCAL_ADDR: Color = Color::TrueColor { r: 0x95, g: 0xe6, b: 0xcb };
pub const REACHABLE: Color = Color::Green;
pub const UNREACHABLE: Color = Color::Red;
