//! Line types.

use std::fmt;

/// Error returned when parsing an invalid hex colour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour: {reason}")]
pub struct InvalidColour {
    reason: &'static str,
}

/// An RGB display colour, written as 6 hex digits.
///
/// # Examples
///
/// ```
/// use tube_planner::domain::Colour;
///
/// let brown = Colour::parse("ab6612").unwrap();
/// assert_eq!(brown.rgb(), (0xab, 0x66, 0x12));
/// assert_eq!(brown.to_string(), "#ab6612");
///
/// // A leading '#' is accepted
/// assert!(Colour::parse("#ab6612").is_ok());
///
/// // Wrong length is rejected
/// assert!(Colour::parse("ab661").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour([u8; 3]);

impl Colour {
    /// Parse a colour from 6 hex digits, optionally prefixed with `#`.
    pub fn parse(s: &str) -> Result<Self, InvalidColour> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 {
            return Err(InvalidColour {
                reason: "must be exactly 6 hex digits",
            });
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColour {
                reason: "must contain only hex digits",
            });
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Colour([r, g, b])),
            _ => Err(InvalidColour {
                reason: "must contain only hex digits",
            }),
        }
    }

    /// Create a colour from its channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour([r, g, b])
    }

    /// Returns the red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.0[0], self.0[1], self.0[2])
    }

    /// Whether dark text reads better than light text on this colour.
    ///
    /// Uses the ITU-R BT.601 luma weights.
    pub fn is_light(&self) -> bool {
        let (r, g, b) = self.rgb();
        let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
        luma > 128_000
    }
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colour({})", self)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Numeric line identifier, as used by the network dataset.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineId(pub u32);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named line with its map colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub colour: Colour,
    /// Secondary stripe colour, for lines drawn with two colours.
    pub stripe: Option<Colour>,
}

impl Line {
    /// Create a line with no stripe.
    pub fn new(id: LineId, name: impl Into<String>, colour: Colour) -> Self {
        Self {
            id,
            name: name.into(),
            colour,
            stripe: None,
        }
    }
}
