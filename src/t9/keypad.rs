// Copyright (c) 2025 T9 Decoder Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Telephone keypad letter table.
//!
//! Digits index the table directly. `0` and `1` carry no letters, and any
//! character that is not an ASCII digit has no entry at all.

/// Letters printed on each key, in the order a multi-tap keypad cycles them.
static KEYPAD: [&[char]; 10] = [
    &[],
    &[],
    &['a', 'b', 'c'],
    &['d', 'e', 'f'],
    &['g', 'h', 'i'],
    &['j', 'k', 'l'],
    &['m', 'n', 'o'],
    &['p', 'q', 'r', 's'],
    &['t', 'u', 'v'],
    &['w', 'x', 'y', 'z'],
];

/// Returns the letters for a key.
///
/// `Some(&[])` for `0` and `1`, `None` for anything that is not an ASCII digit.
pub fn letters_for(digit: char) -> Option<&'static [char]> {
    digit.to_digit(10).map(|d| KEYPAD[d as usize])
}

/// Returns the key that carries `letter`.
///
/// Only lowercase ASCII letters sit on the keypad, matching what the decoder
/// can produce.
pub fn digit_for(letter: char) -> Option<char> {
    KEYPAD
        .iter()
        .position(|letters| letters.contains(&letter))
        .and_then(|d| char::from_digit(d as u32, 10))
}

/// Encodes a word into the digit sequence typed for it.
///
/// Returns `None` if any character is not on the keypad.
pub fn encode(word: &str) -> Option<String> {
    word.chars().map(digit_for).collect()
}
