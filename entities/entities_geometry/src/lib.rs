//! Entities Layer: Geometry
//!
//! This crate provides a small polymorphic hierarchy of quadrilaterals and a container
//! for mixed collections of them.
//!
//! ## Overview
//!
//! Every figure stores four vertices and implements the [`Figure`] trait, which supplies
//! area (shoelace formula), center (vertex mean), text formatting and reading vertices
//! from text. Vertices may be given in any order; they are sorted counter-clockwise
//! around their mean before use.
//!
//! ## Modules
//!
//! - **[`point`](point/index.html)**: `Point`, a 2-D vertex.
//! - **[`figure`](figure/index.html)**: the `Figure` trait, vertex helpers, `FigureKind`
//!   and `GeometryError`.
//! - **[`square`](square/index.html)**, **[`rectangle`](rectangle/index.html)**,
//!   **[`trapezoid`](trapezoid/index.html)**: the concrete figures.
//! - **[`figure_array`](figure_array/index.html)**: `FigureArray`, an owning container of
//!   boxed figures with forgiving index handling.
//!
//! ## Usage
//!
//! ```rust
//! use entities_geometry::{Figure, FigureArray, Rectangle, Square, Trapezoid};
//!
//! let mut figures = FigureArray::new();
//! figures.push(Square::default());
//! figures.push(Rectangle::default());
//! figures.push(Trapezoid::default());
//!
//! assert_eq!(figures.size(), 3);
//! assert!((figures.total_area() - 9.0).abs() < 1e-9);
//! assert!(figures.get(7).is_none());
//! ```

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

pub mod figure;
pub mod figure_array;
pub mod point;
pub mod rectangle;
pub mod square;
pub mod trapezoid;

// Re-export main types for convenience
pub use figure::{Figure, FigureKind, GeometryError};
pub use figure_array::FigureArray;
pub use point::Point;
pub use rectangle::Rectangle;
pub use square::Square;
pub use trapezoid::Trapezoid;
