use ripetito_core::Color;
use serde::{Deserialize, Serialize};

/// One of the five pressable surfaces: the four sequence colors plus the
/// center control button that starts a session. The center button is part
/// of the input domain only; it never appears in a sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Color(Color),
    Center,
}

impl Button {
    /// Number of buttons on the surface.
    pub const COUNT: usize = Color::COUNT + 1;

    /// Index of the center control button.
    pub const CENTER_INDEX: u8 = Color::COUNT as u8;

    pub const fn index(self) -> u8 {
        match self {
            Self::Color(color) => color.index(),
            Self::Center => Self::CENTER_INDEX,
        }
    }

    pub const fn from_index(index: u8) -> Option<Button> {
        if index == Self::CENTER_INDEX {
            Some(Self::Center)
        } else {
            match Color::from_index(index) {
                Some(color) => Some(Self::Color(color)),
                None => None,
            }
        }
    }
}

impl From<Color> for Button {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_over_all_five_buttons() {
        for index in 0..Button::COUNT as u8 {
            let button = Button::from_index(index).unwrap();
            assert_eq!(button.index(), index);
        }
        assert_eq!(Button::from_index(4), Some(Button::Center));
        assert_eq!(Button::from_index(5), None);
    }
}
