//! The six peg colors a code is built from

use std::fmt;

/// One symbol of the Mastermind alphabet
///
/// Each color has a single-letter form used for text input and display:
/// `r`ed, `o`range, `y`ellow, `g`reen, `b`lue, `p`urple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Color {
    /// The full alphabet, in cycling order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Number of symbols in the alphabet
    pub const COUNT: usize = Self::ALL.len();

    /// Parse a single lowercase letter
    ///
    /// Uppercase letters are not part of the alphabet; frontends that accept
    /// them lowercase the input first.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Color;
    ///
    /// assert_eq!(Color::from_char('r'), Some(Color::Red));
    /// assert_eq!(Color::from_char('P'), None);
    /// assert_eq!(Color::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'r' => Some(Self::Red),
            'o' => Some(Self::Orange),
            'y' => Some(Self::Yellow),
            'g' => Some(Self::Green),
            'b' => Some(Self::Blue),
            'p' => Some(Self::Purple),
            _ => None,
        }
    }

    /// Lowercase letter for this color
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Orange => 'o',
            Self::Yellow => 'y',
            Self::Green => 'g',
            Self::Blue => 'b',
            Self::Purple => 'p',
        }
    }

    /// Position of this color within [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color that follows this one, wrapping from purple back to red
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The color that precedes this one, wrapping from red back to purple
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
        }
    }

    /// Comma-separated list of accepted letters, for prompts
    #[must_use]
    pub fn alphabet_hint() -> String {
        Self::ALL
            .iter()
            .map(|c| c.to_char().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_round_trip_covers_alphabet() {
        for color in Color::ALL {
            assert_eq!(Color::from_char(color.to_char()), Some(color));
        }
    }

    #[test]
    fn from_char_is_lowercase_only() {
        assert_eq!(Color::from_char('g'), Some(Color::Green));
        for ch in ['R', 'O', 'Y', 'G', 'B', 'P'] {
            assert_eq!(Color::from_char(ch), None, "{ch:?} should be rejected");
        }
    }

    #[test]
    fn from_char_rejects_unknown() {
        for ch in ['x', 'w', ' ', '1', 's'] {
            assert_eq!(Color::from_char(ch), None, "{ch:?} should be rejected");
        }
    }

    #[test]
    fn alphabet_letters_are_distinct() {
        let letters: std::collections::HashSet<char> =
            Color::ALL.iter().map(|c| c.to_char()).collect();
        assert_eq!(letters.len(), Color::COUNT);
    }

    #[test]
    fn next_cycles_through_every_color() {
        let mut color = Color::Red;
        for expected in &Color::ALL[1..] {
            color = color.next();
            assert_eq!(color, *expected);
        }
        assert_eq!(color.next(), Color::Red);
    }

    #[test]
    fn prev_undoes_next() {
        for color in Color::ALL {
            assert_eq!(color.next().prev(), color);
        }
        assert_eq!(Color::Red.prev(), Color::Purple);
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn alphabet_hint_lists_letters() {
        assert_eq!(Color::alphabet_hint(), "r,o,y,g,b,p");
    }
}
