use serde::{Deserialize, Serialize};

/// One of the four signal colors a sequence is made of.
///
/// The discriminant order matches the button layout and is stable:
/// frontends may rely on [`Color::index`] to address their drawing surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Red,
    Yellow,
    Blue,
}

impl Color {
    /// All colors in index order.
    pub const ALL: [Color; 4] = [Color::Green, Color::Red, Color::Yellow, Color::Blue];

    /// Number of distinct sequence colors.
    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> u8 {
        match self {
            Self::Green => 0,
            Self::Red => 1,
            Self::Yellow => 2,
            Self::Blue => 3,
        }
    }

    pub const fn from_index(index: u8) -> Option<Color> {
        match index {
            0 => Some(Self::Green),
            1 => Some(Self::Red),
            2 => Some(Self::Yellow),
            3 => Some(Self::Blue),
            _ => None,
        }
    }
}
