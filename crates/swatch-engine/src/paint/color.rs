use core::fmt;

/// Straight-alpha color packed as `0xAARRGGBB`.
///
/// Equality is on the packed value, so fully transparent colors with
/// different RGB channels stay distinct, exactly as style sheets spell them.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    argb: u32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { argb: 0 }
    }

    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self { argb }
    }

    /// Parses `#RRGGBB` (opaque) or `#AARRGGBB`.
    ///
    /// Returns `None` for anything else, including a missing `#`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let v = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Self::from_argb(0xFF00_0000 | v)),
            8 => Some(Self::from_argb(v)),
            _ => None,
        }
    }

    #[inline]
    pub const fn argb(self) -> u32 {
        self.argb
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.argb)
    }
}
