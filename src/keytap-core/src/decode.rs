// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Multi-tap keypress stream decoding.
//!
//! Repeated presses of one key accumulate into a run; a pause, a key
//! change, a backspace, or the send key resolves the run into one output
//! character.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::layout::KeypadLayout;

/// Send key ending the decodable input.
const SEND: char = '#';
/// Backspace key deleting the last decoded character.
const BACKSPACE: char = '*';
/// Pause separating two runs on the same key.
const PAUSE: char = ' ';

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("input must not be empty")]
    EmptyInput,
}

/// A decoded keypad message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeypadMessage {
    /// Raw keypress sequence as received
    pub keys: String,
    /// Decoded text
    pub text: String,
}

/// Run of identical keypresses not yet resolved to a character.
#[derive(Debug, Default)]
struct PendingRun {
    digit: Option<char>,
    presses: usize,
}

impl PendingRun {
    fn press(&mut self, digit: char, layout: &KeypadLayout, out: &mut String) {
        if let Some(current) = self.digit {
            if current != digit {
                // Key change without a pause resolves the previous run.
                self.resolve(layout, out);
            }
        }
        self.digit = Some(digit);
        self.presses += 1;
    }

    fn resolve(&mut self, layout: &KeypadLayout, out: &mut String) {
        let Some(digit) = self.digit.take() else {
            return;
        };
        let presses = std::mem::take(&mut self.presses);

        // Unmapped keys resolve to nothing.
        let Some(letters) = layout.keys_for(digit) else {
            return;
        };
        let index = (presses - 1) % letters.chars().count();
        if let Some(ch) = letters.chars().nth(index) {
            trace!("run of {}x'{}' resolved to '{}'", presses, digit, ch);
            out.extend(ch.to_uppercase());
        }
    }
}

/// Multi-tap decoder over a fixed keypad layout.
///
/// Holds no per-call state; `decode` is a pure scan, so one decoder can be
/// shared or cloned freely across independent inputs.
#[derive(Debug, Clone)]
pub struct Decoder {
    layout: KeypadLayout,
}

impl Decoder {
    pub fn new(layout: KeypadLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    /// Decode a keypress sequence into text.
    ///
    /// Scanning stops at the first send key (`#`); anything after it is
    /// ignored. Input without a send key is decoded as if one followed the
    /// last keypress. Letters are emitted uppercase. Fails only when the
    /// input is empty.
    pub fn decode(&self, input: &str) -> Result<String, DecodeError> {
        if input.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let mut run = PendingRun::default();
        let mut out = String::new();

        for key in input.chars() {
            match key {
                SEND => {
                    run.resolve(&self.layout, &mut out);
                    return Ok(out);
                }
                PAUSE => run.resolve(&self.layout, &mut out),
                BACKSPACE => {
                    run.resolve(&self.layout, &mut out);
                    out.pop();
                }
                d if d.is_ascii_digit() => run.press(d, &self.layout, &mut out),
                // Anything else is ignored without disturbing the run.
                _ => {}
            }
        }

        // No send key: treat end of input as an implicit one.
        run.resolve(&self.layout, &mut out);
        Ok(out)
    }

    /// Decode a keypress sequence into a message carrying the raw keys.
    pub fn decode_message(&self, input: &str) -> Result<KeypadMessage, DecodeError> {
        Ok(KeypadMessage {
            keys: input.to_string(),
            text: self.decode(input)?,
        })
    }
}

/// Decode a keypress sequence with the standard telephone layout.
pub fn decode(input: &str) -> Result<String, DecodeError> {
    Decoder::new(KeypadLayout::standard()).decode(input)
}
