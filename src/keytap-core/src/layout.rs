// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Keypad layout tables mapping digits to their letter sequences.

use std::collections::HashMap;

use thiserror::Error;

/// Letter sequence for a key on the standard telephone keypad.
fn standard_keys(digit: char) -> Option<&'static str> {
    match digit {
        '1' => Some("&’("),
        '2' => Some("abc"),
        '3' => Some("def"),
        '4' => Some("ghi"),
        '5' => Some("jkl"),
        '6' => Some("mno"),
        '7' => Some("pqrs"),
        '8' => Some("tuv"),
        '9' => Some("wxyz"),
        '0' => Some(" "),
        _ => None,
    }
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout key '{0}' is not a keypad digit")]
    NotADigit(char),

    #[error("layout for key '{0}' must map to at least one character")]
    EmptyKey(char),
}

/// Immutable digit -> letter-sequence table defining multi-tap semantics.
///
/// Pressing a key `n` times selects the letter at index `(n - 1) mod len`
/// of its sequence. Every mapped sequence is non-empty; construction
/// enforces this so lookups never index into an empty sequence.
#[derive(Debug, Clone)]
pub struct KeypadLayout {
    keys: HashMap<char, String>,
}

impl KeypadLayout {
    /// The standard telephone keypad layout.
    pub fn standard() -> Self {
        let keys = ('0'..='9')
            .filter_map(|d| standard_keys(d).map(|letters| (d, letters.to_string())))
            .collect();
        Self { keys }
    }

    /// Build a layout from an explicit digit -> letters table.
    pub fn from_keys(keys: HashMap<char, String>) -> Result<Self, LayoutError> {
        Self {
            keys: HashMap::new(),
        }
        .with_overrides(keys)
    }

    /// Replace the letter sequences for individual keys.
    pub fn with_overrides(
        mut self,
        overrides: HashMap<char, String>,
    ) -> Result<Self, LayoutError> {
        for (digit, letters) in overrides {
            if !digit.is_ascii_digit() {
                return Err(LayoutError::NotADigit(digit));
            }
            if letters.is_empty() {
                return Err(LayoutError::EmptyKey(digit));
            }
            self.keys.insert(digit, letters);
        }
        Ok(self)
    }

    /// Letter sequence assigned to a key, or `None` when the key is unmapped.
    pub fn keys_for(&self, digit: char) -> Option<&str> {
        self.keys.get(&digit).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_maps_all_digits() {
        let layout = KeypadLayout::standard();
        for digit in '0'..='9' {
            let letters = layout.keys_for(digit);
            assert!(letters.is_some(), "digit '{}' should be mapped", digit);
            assert!(!letters.unwrap().is_empty());
        }
    }

    #[test]
    fn test_standard_layout_letter_counts() {
        let layout = KeypadLayout::standard();
        assert_eq!(layout.keys_for('2'), Some("abc"));
        assert_eq!(layout.keys_for('7'), Some("pqrs"));
        assert_eq!(layout.keys_for('9'), Some("wxyz"));
        assert_eq!(layout.keys_for('0'), Some(" "));
    }

    #[test]
    fn test_non_digit_is_unmapped() {
        let layout = KeypadLayout::standard();
        assert_eq!(layout.keys_for('#'), None);
        assert_eq!(layout.keys_for('a'), None);
    }

    #[test]
    fn test_from_keys_rejects_empty_sequence() {
        let mut keys = HashMap::new();
        keys.insert('2', String::new());
        let err = KeypadLayout::from_keys(keys).unwrap_err();
        assert!(matches!(err, LayoutError::EmptyKey('2')));
    }

    #[test]
    fn test_from_keys_rejects_non_digit_key() {
        let mut keys = HashMap::new();
        keys.insert('x', "abc".to_string());
        let err = KeypadLayout::from_keys(keys).unwrap_err();
        assert!(matches!(err, LayoutError::NotADigit('x')));
    }

    #[test]
    fn test_with_overrides_replaces_key() {
        let mut overrides = HashMap::new();
        overrides.insert('1', ".,?".to_string());
        let layout = KeypadLayout::standard().with_overrides(overrides).unwrap();
        assert_eq!(layout.keys_for('1'), Some(".,?"));
        assert_eq!(layout.keys_for('2'), Some("abc"));
    }
}
