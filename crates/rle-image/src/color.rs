//! Pixel classification

/// Classification of a single pixel
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// A zero byte, nothing is drawn
    #[default]
    Off,
    /// Any non-zero byte
    On,
}

impl From<bool> for Color {
    fn from(b: bool) -> Color {
        if b {
            Color::On
        } else {
            Color::Off
        }
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Color {
        Color::from(value != 0)
    }
}
