//! Base-12 Integer Operations
//!
//! Provides a non-negative integer stored as base-12 digits.
//!
//! Digits live in a [`ByteBuffer`], least-significant digit first, one digit
//! per byte. Arithmetic and comparison go through the native `u64` domain:
//! both operands are decoded, the result is computed with checked
//! arithmetic and encoded back into a fresh value. Anything that would leave
//! the `u64` range is reported as [`TwelveError::Overflow`] rather than
//! wrapping.
//!
//! Values never change after construction. The digit buffer is only written
//! while a value is being built.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use entities_data_handling::{BufferError, ByteBuffer};
use thiserror::Error;
use tracing::debug;

use crate::digit::{digit_from_char, digit_to_char, is_digit};

/// Radix of the representation
pub const BASE: u8 = 12;

/// Most base-12 digits a `u64` can need (12^17 < 2^64 <= 12^18)
pub const MAX_DIGITS: usize = 18;

/// Base-12 integer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TwelveError {
    /// Text to parse was empty
    #[error("empty base-12 string")]
    Empty,
    /// Text contained a character outside `0-9`, `A`, `B`
    #[error("invalid base-12 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    /// A digit value of 12 or more reached the formatter
    #[error("invalid base-12 digit value {0}")]
    InvalidDigit(u8),
    /// Subtraction would go below zero
    #[error("negative result: {minuend} - {subtrahend}")]
    NegativeResult { minuend: u64, subtrahend: u64 },
    /// Value does not fit in 64 bits
    #[error("value exceeds the 64-bit range")]
    Overflow,
    /// Digit index outside the stored digits
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// Non-negative base-12 integer
///
/// Equality, ordering and hashing are numeric: `"007"` and `"7"` compare
/// equal even though [`Twelve::to_text`] keeps the leading zeros of parsed
/// text.
#[derive(Clone, Debug)]
pub struct Twelve {
    digits: ByteBuffer,
}

impl Twelve {
    /// The value zero, stored as a single `0` digit
    pub fn zero() -> Self {
        Self {
            digits: ByteBuffer::filled(1, 0),
        }
    }

    /// Parse base-12 text such as `"1A5"` (case-insensitive)
    ///
    /// The last character of the text becomes digit 0. Leading zeros are
    /// kept as digits.
    pub fn parse(text: &str) -> Result<Self, TwelveError> {
        if text.is_empty() {
            return Err(TwelveError::Empty);
        }

        let chars: Vec<char> = text.chars().collect();
        let mut digits = ByteBuffer::filled(chars.len(), 0);
        for (place, position) in (0..chars.len()).rev().enumerate() {
            let character = chars[position];
            let digit = digit_from_char(character)
                .ok_or(TwelveError::InvalidCharacter { character, position })?;
            digits.write(place, digit)?;
        }

        debug!(text, digits = digits.len(), "parsed base-12 value");
        Ok(Self { digits })
    }

    /// Encode a native integer
    pub fn from_native(value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }

        let mut scratch = [0u8; MAX_DIGITS];
        let mut count = 0;
        let mut n = value;
        while n > 0 {
            scratch[count] = (n % BASE as u64) as u8;
            n /= BASE as u64;
            count += 1;
        }

        Self::from_digits(ByteBuffer::from_slice(&scratch[..count]))
    }

    /// Decode to a native integer
    ///
    /// Returns `TwelveError::Overflow` if the value does not fit in `u64`.
    /// Leading zero digits never overflow.
    pub fn to_native(&self) -> Result<u64, TwelveError> {
        let mut result: u64 = 0;
        // None once 12^place no longer fits; only a non-zero digit there overflows
        let mut power: Option<u64> = Some(1);
        for &digit in self.digits.iter() {
            if digit != 0 {
                let place_value = power
                    .and_then(|p| p.checked_mul(digit as u64))
                    .ok_or(TwelveError::Overflow)?;
                result = result
                    .checked_add(place_value)
                    .ok_or(TwelveError::Overflow)?;
            }
            power = power.and_then(|p| p.checked_mul(BASE as u64));
        }
        Ok(result)
    }

    /// Add two values: x + y
    pub fn add(&self, other: &Self) -> Result<Self, TwelveError> {
        let a = self.to_native()?;
        let b = other.to_native()?;
        let sum = a.checked_add(b).ok_or(TwelveError::Overflow)?;
        debug!(a, b, sum, "base-12 addition");
        Ok(Self::from_native(sum))
    }

    /// Subtract two values: x - y
    ///
    /// Fails with `TwelveError::NegativeResult` when `y > x`.
    pub fn sub(&self, other: &Self) -> Result<Self, TwelveError> {
        let a = self.to_native()?;
        let b = other.to_native()?;
        let difference = a.checked_sub(b).ok_or(TwelveError::NegativeResult {
            minuend: a,
            subtrahend: b,
        })?;
        debug!(a, b, difference, "base-12 subtraction");
        Ok(Self::from_native(difference))
    }

    /// Compare two values numerically
    ///
    /// Same order as `Ord`, so values past the `u64` range still compare.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    /// Compare two values
    ///
    /// Returns:
    /// - -1 if self < other
    /// - 0 if self == other
    /// - 1 if self > other
    pub fn compare_sign(&self, other: &Self) -> i32 {
        match self.compare(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Independent copy of this value
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Uppercase text, most-significant digit first
    pub fn to_text(&self) -> String {
        self.digits
            .iter()
            .rev()
            .map(|&digit| match digit_to_char(digit) {
                Ok(c) => c,
                Err(e) => unreachable!("corrupted base-12 value: {e}"),
            })
            .collect()
    }

    /// Number of stored digits, leading zeros included
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Digit at `place` (0 is least significant)
    pub fn digit(&self, place: usize) -> Result<u8, TwelveError> {
        Ok(self.digits.read(place)?)
    }

    /// Check if the value is zero
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Same value without leading zero digits
    pub fn normalized(&self) -> Self {
        Self::from_digits(ByteBuffer::from_slice(self.significant_digits()))
    }

    /// Digits with leading zeros stripped, keeping at least one
    fn significant_digits(&self) -> &[u8] {
        let digits = self.digits.as_slice();
        let len = digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(1, |top| top + 1);
        &digits[..len]
    }

    fn from_digits(digits: ByteBuffer) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| is_digit(d)));
        Self { digits }
    }
}

impl Default for Twelve {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Twelve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Twelve {
    type Err = TwelveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Twelve {
    type Error = TwelveError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<u64> for Twelve {
    fn from(value: u64) -> Self {
        Self::from_native(value)
    }
}

impl PartialEq for Twelve {
    fn eq(&self, other: &Self) -> bool {
        self.significant_digits() == other.significant_digits()
    }
}

impl Eq for Twelve {}

impl Ord for Twelve {
    // Digit-wise so the order stays total even past the u64 range
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.significant_digits();
        let b = other.significant_digits();
        a.len()
            .cmp(&b.len())
            .then_with(|| a.iter().rev().cmp(b.iter().rev()))
    }
}

impl PartialOrd for Twelve {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Twelve {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_digits().hash(state);
    }
}
