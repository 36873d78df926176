// crates/toolforge-codegen/src/casing.rs
// ============================================================================
// Module: Case Formats
// Description: General-purpose identifier case-style conversion.
// Purpose: Convert names between hyphen, underscore, and camel styles.
// Dependencies: std
// ============================================================================

//! ## Overview
//! A small, general case-conversion utility: [`CaseFormat::to`] is defined
//! for every ordered pair of the five supported styles. Camel-style inputs
//! treat uppercase letters as word boundaries; delimited styles split on
//! their own separator character. The generator only exercises the
//! lower-camel to upper-underscore direction (preparation-constant naming)
//! and lower-camel to upper-camel (output-extension capitalization), but the
//! contract is general.

// ============================================================================
// SECTION: Case Formats
// ============================================================================

/// Supported identifier case styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    /// Hyphenated lowercase, for example `lower-hyphen`.
    LowerHyphen,
    /// Underscored lowercase, for example `lower_underscore`.
    LowerUnderscore,
    /// Camel case with a leading lowercase word, for example `lowerCamel`.
    LowerCamel,
    /// Camel case with a leading uppercase word, for example `UpperCamel`.
    UpperCamel,
    /// Underscored uppercase, for example `UPPER_UNDERSCORE`.
    UpperUnderscore,
}

impl CaseFormat {
    /// Converts a value from this style to the target style.
    ///
    /// Identity conversions return the input unchanged as a fast path.
    #[must_use]
    pub fn to(self, target: Self, value: &str) -> String {
        if self == target {
            return value.to_string();
        }
        let words = self.split_words(value);
        let mut out = String::with_capacity(value.len() + words.len());
        for (index, word) in words.iter().enumerate() {
            if index > 0
                && let Some(separator) = target.separator()
            {
                out.push(separator);
            }
            out.push_str(&target.render_word(index, word));
        }
        out
    }

    /// Returns the separator character for delimited styles.
    const fn separator(self) -> Option<char> {
        match self {
            Self::LowerHyphen => Some('-'),
            Self::LowerUnderscore | Self::UpperUnderscore => Some('_'),
            Self::LowerCamel | Self::UpperCamel => None,
        }
    }

    /// Splits a value into words using this style's boundary rule.
    ///
    /// Camel styles start a new word at every uppercase letter; delimited
    /// styles split on their separator character.
    fn split_words(self, value: &str) -> Vec<String> {
        self.separator().map_or_else(
            || {
                let mut words = Vec::new();
                let mut current = String::new();
                for ch in value.chars() {
                    if ch.is_uppercase() && !current.is_empty() {
                        words.push(current);
                        current = String::new();
                    }
                    current.push(ch);
                }
                if !current.is_empty() {
                    words.push(current);
                }
                words
            },
            |separator| value.split(separator).map(str::to_string).collect(),
        )
    }

    /// Renders one word in this style at the given word index.
    fn render_word(self, index: usize, word: &str) -> String {
        match self {
            Self::LowerHyphen | Self::LowerUnderscore => word.to_lowercase(),
            Self::UpperUnderscore => word.to_uppercase(),
            Self::LowerCamel => {
                if index == 0 {
                    word.to_lowercase()
                } else {
                    capitalize(word)
                }
            }
            Self::UpperCamel => capitalize(word),
        }
    }
}

/// Uppercases the first character of a word and lowercases the remainder.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
