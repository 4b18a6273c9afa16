use std::borrow::Cow;

/// Defines the case of characters in a control's text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Casing {
    /// Leaves all characters unchanged.
    #[default]
    Normal,
    /// Converts all characters to lowercase.
    Lower,
    /// Converts all characters to uppercase.
    Upper,
}

impl Casing {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Casing::Normal => Cow::Borrowed(text),
            Casing::Lower => Cow::Owned(text.to_lowercase()),
            Casing::Upper => Cow::Owned(text.to_uppercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert!(matches!(Casing::Normal.apply("Save"), Cow::Borrowed("Save")));
        assert_eq!(Casing::Upper.apply("Save as…"), "SAVE AS…");
        assert_eq!(Casing::Lower.apply("ÉTÉ"), "été");
    }
}
