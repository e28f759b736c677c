//! Furniture marker alphabet.
//!
//! Simple `char` constants with no dependencies. Both the scanning core and
//! the CLI renderer use these.

pub mod chair_types {
    /// Wooden chair.
    pub const WOODEN: char = 'W';
    /// Plastic chair.
    pub const PLASTIC: char = 'P';
    /// Sofa chair.
    pub const SOFA: char = 'S';
    /// China chair.
    pub const CHINA: char = 'C';

    /// The full marker alphabet. Counting is case-sensitive; anything not
    /// listed here is ignored even if it looks like furniture.
    pub const ALL: [char; 4] = [PLASTIC, CHINA, SOFA, WOODEN];

    /// Field order consumers use when rendering counts.
    pub const DISPLAY_ORDER: [char; 4] = [WOODEN, PLASTIC, SOFA, CHINA];

    /// Returns true if this character is a countable furniture marker.
    pub fn is_chair(c: char) -> bool {
        ALL.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::chair_types;

    #[test]
    fn test_markers_are_chairs() {
        for m in chair_types::ALL {
            assert!(chair_types::is_chair(m));
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert!(chair_types::is_chair('W'));
        assert!(!chair_types::is_chair('w'));
        assert!(!chair_types::is_chair('X'));
    }
}
