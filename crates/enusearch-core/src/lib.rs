// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Enusearch Core
//!
//! Foundational building blocks shared by the enusearch solvers. The crate is
//! deliberately small: it holds the pieces that every solver crate needs but
//! that carry no knowledge about problems, objectives or search strategies.
//!
//! ## Modules
//!
//! - `num`: the `ObjectiveValue` trait alias describing which scalar types an
//!   objective may return, plus a total ordering helper that keeps NaN-like
//!   values out of the way of the search.
//! - `utils`: phantom-tagged indices (`TypedIndex<T>`) used to address
//!   candidates inside a pool without mixing them up with plain counters.

pub mod num;
pub mod utils;
