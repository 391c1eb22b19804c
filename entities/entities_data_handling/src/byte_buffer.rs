//! Byte Buffer Module
//!
//! Provides a fixed-length, owned sequence of bytes with bounds-checked
//! element access. The length is chosen at construction and never changes;
//! the only way to "resize" a buffer is to replace its whole contents with
//! [`ByteBuffer::copy_from`] or [`ByteBuffer::take_from`].
//!
//! Storage is a boxed slice, so an empty buffer holds no allocation.

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

use thiserror::Error;
use tracing::trace;

/// Buffer operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Index at or past the end of the buffer
    #[error("index {index} out of range for buffer of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Fixed-length byte buffer
///
/// Cloning produces an independent deep copy. Moving out of a buffer that
/// must stay usable is done with [`ByteBuffer::take_from`], which leaves the
/// source empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteBuffer {
    data: Box<[u8]>,
}

impl ByteBuffer {
    /// Create an empty buffer (length 0, no storage)
    pub fn new() -> Self {
        Self { data: Box::default() }
    }

    /// Create a buffer of `len` bytes, each set to `fill`
    pub fn filled(len: usize, fill: u8) -> Self {
        Self {
            data: vec![fill; len].into_boxed_slice(),
        }
    }

    /// Create a buffer holding a copy of `bytes`, in order
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            data: bytes.into(),
        }
    }

    /// Create a buffer with one element per byte of `text`
    ///
    /// No validation is done here; callers decide what the bytes mean.
    pub fn from_text(text: &str) -> Self {
        Self::from_slice(text.as_bytes())
    }

    /// Replace this buffer's contents with a deep copy of `other`
    pub fn copy_from(&mut self, other: &ByteBuffer) {
        self.data = other.data.clone();
    }

    /// Take the storage of `other`, leaving it empty
    ///
    /// Any storage previously held by `self` is released.
    pub fn take_from(&mut self, other: &mut ByteBuffer) {
        trace!(len = other.data.len(), "transferring byte buffer storage");
        self.data = std::mem::take(&mut other.data);
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write `value` at `index`
    ///
    /// The bounds check happens before the write, so a failed write leaves
    /// the buffer unchanged.
    pub fn write(&mut self, index: usize, value: u8) -> Result<(), BufferError> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BufferError::OutOfRange { index, len }),
        }
    }

    /// Read the element at `index`
    pub fn read(&self, index: usize) -> Result<u8, BufferError> {
        self.data
            .get(index)
            .copied()
            .ok_or(BufferError::OutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Read-only view of the contents
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over the elements, index 0 first
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.data.iter()
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<&str> for ByteBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
