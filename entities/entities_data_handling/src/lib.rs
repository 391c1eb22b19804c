//! Entities Layer: Data Handling
//!
//! This crate provides the storage primitive the rest of the workspace builds on:
//! a fixed-length, owned, bounds-checked byte buffer.
//!
//! ## Overview
//!
//! The `entities_data_handling` crate is the innermost layer of the workspace. It has
//! no dependencies on other crates in the system, so value types in higher crates
//! (such as base-12 integers in `entities_utilities`) can store their raw digits here.
//!
//! ## Modules
//!
//! - **[`byte_buffer`](byte_buffer/index.html)**: The `ByteBuffer` type. A buffer is
//!   created with one of five constructors (empty, length and fill value, list of bytes,
//!   text, or a deep copy) and never changes length afterwards. Reads and writes are
//!   bounds-checked and report `BufferError::OutOfRange` instead of panicking. Ownership
//!   can be transferred out of a buffer with `take_from`, which leaves the source empty.
//!
//! ## Usage
//!
//! ```rust
//! use entities_data_handling::{ByteBuffer, BufferError};
//!
//! let mut buf = ByteBuffer::filled(3, 0);
//! buf.write(1, 7).unwrap();
//! assert_eq!(buf.read(1), Ok(7));
//! assert_eq!(buf.read(3), Err(BufferError::OutOfRange { index: 3, len: 3 }));
//!
//! let mut moved = ByteBuffer::new();
//! moved.take_from(&mut buf);
//! assert!(buf.is_empty());
//! assert_eq!(moved.len(), 3);
//! ```
//!
//! ## See Also
//!
//! - [`entities_utilities`](../entities_utilities/index.html): base-12 integers stored
//!   in a `ByteBuffer`

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

pub mod byte_buffer;

// Re-export main types for convenience
pub use byte_buffer::{BufferError, ByteBuffer};
