/// ASCII-art style names, in cycling order.
pub const FONTS: [&str; 12] = [
    "Straight",
    "ANSI Shadow",
    "Shimrod",
    "doom",
    "Big",
    "Ogre",
    "Small",
    "Standard",
    "Bigfig",
    "Mini",
    "Small Script",
    "Small Shadow",
];

/// Index into [`FONTS`], wrapping modulo its length.
///
/// Nothing in the widget calls [`advance`](Self::advance) yet; the time is
/// always drawn in the starting style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontCycle {
    index: usize,
}

impl FontCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(index: usize) -> Self {
        Self {
            index: index % FONTS.len(),
        }
    }

    pub fn current(&self) -> &'static str {
        FONTS[self.index % FONTS.len()]
    }

    pub fn advance(&mut self) -> &'static str {
        self.index = (self.index + 1) % FONTS.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_after_last_font() {
        let mut fonts = FontCycle::starting_at(FONTS.len() - 1);
        assert_eq!(fonts.current(), "Small Shadow");
        assert_eq!(fonts.advance(), "Straight");
        assert_eq!(fonts.advance(), "ANSI Shadow");
    }

    #[test]
    fn starting_index_is_reduced_modulo_length() {
        assert_eq!(FontCycle::starting_at(FONTS.len() + 3).current(), "doom");
        assert_eq!(FontCycle::new().current(), "Straight");
    }
}
