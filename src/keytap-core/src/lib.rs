// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Core multi-tap keypad decoding for keytap-rs.

pub mod decode;
pub mod layout;

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use decode::{decode, DecodeError, Decoder, KeypadMessage};
pub use layout::{KeypadLayout, LayoutError};
