use std::fmt;

/// Straight-alpha RGBA colour, one byte per channel.
///
/// This is the representation vector canvases take for fill, stroke and text
/// colours, so it is passed through to the host unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(0xff, 0xff, 0xff)
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self.a != 0
    }

    /// Parses a colour the way UI descriptions write them.
    ///
    /// Accepted forms:
    /// - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
    /// - `rgb(r, g, b)` and `rgba(r, g, b, a)` with `a` in `[0, 1]`
    /// - a small set of CSS names (`red`, `white`, `transparent`, ...)
    ///
    /// Returns `None` for anything else.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(body) = s.strip_prefix("rgba(").and_then(|b| b.strip_suffix(')')) {
            return parse_functional(body, true);
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|b| b.strip_suffix(')')) {
            return parse_functional(body, false);
        }
        named(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    // Single digits expand as 0xf -> 0xff.
    let short = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::rgb(short(0)?, short(1)?, short(2)?)),
        4 => Some(Color::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
        6 => Some(Color::rgb(long(0)?, long(2)?, long(4)?)),
        8 => Some(Color::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
        _ => None,
    }
}

fn parse_functional(body: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }

    let channel = |s: &str| s.parse::<u8>().ok();
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        let a = parts[3].parse::<f32>().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        (a * 255.0).round() as u8
    } else {
        0xff
    };
    Some(Color::rgba(r, g, b, a))
}

fn named(name: &str) -> Option<Color> {
    let c = match name.to_ascii_lowercase().as_str() {
        "black" => Color::black(),
        "white" => Color::white(),
        "red" => Color::rgb(0xff, 0, 0),
        "green" => Color::rgb(0, 0x80, 0),
        "blue" => Color::rgb(0, 0, 0xff),
        "yellow" => Color::rgb(0xff, 0xff, 0),
        "orange" => Color::rgb(0xff, 0xa5, 0),
        "purple" => Color::rgb(0x80, 0, 0x80),
        "cyan" => Color::rgb(0, 0xff, 0xff),
        "magenta" => Color::rgb(0xff, 0, 0xff),
        "gray" | "grey" => Color::rgb(0x80, 0x80, 0x80),
        "transparent" => Color::transparent(),
        _ => return None,
    };
    Some(c)
}
