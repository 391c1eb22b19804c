//! Base-12 Digit Mapping
//!
//! Converts between the characters of the base-12 alphabet and digit
//! values. Input is case-insensitive; output is always uppercase.
//!
//! | Character | Digit |
//! |-----------|-------|
//! | `0`..`9`  | 0..9  |
//! | `A` / `a` | 10    |
//! | `B` / `b` | 11    |

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

use crate::twelve::{TwelveError, BASE};

/// Map a character to its digit value
///
/// Returns `None` for anything outside the base-12 alphabet.
pub fn digit_from_char(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A' | 'a' => Some(10),
        'B' | 'b' => Some(11),
        _ => None,
    }
}

/// Map a digit value to its uppercase character
pub fn digit_to_char(digit: u8) -> Result<char, TwelveError> {
    match digit {
        0..=9 => Ok((b'0' + digit) as char),
        10 => Ok('A'),
        11 => Ok('B'),
        _ => Err(TwelveError::InvalidDigit(digit)),
    }
}

/// Check whether a stored byte is a valid digit
pub fn is_digit(value: u8) -> bool {
    value < BASE
}
