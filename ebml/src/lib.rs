// ebml-rs
// Copyright (c) 2026 The ebml-rs Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An EBML (Extensible Binary Meta Language, RFC 8794) reader and writer.
//!
//! EBML is the recursive, length-prefixed binary format underlying Matroska and WebM. An EBML
//! document is a tree of elements. Each element is framed as a variable-length ID (1 to 4 bytes),
//! a variable-length payload size (1 to 8 bytes), and the payload itself. A *master* element's
//! payload is a sequence of child elements; a leaf element's payload is a scalar (unsigned or
//! signed integer, float, string, date) or raw binary.
//!
//! [`EbmlReader`] decodes elements from any pull-mode byte source provided by `ebml-core`. It
//! maintains a stack of open master elements so that a consumer dispatching on element IDs can be
//! told how many nesting levels were implicitly closed by the next element it peeks.
//!
//! [`EbmlWriter`] is the inverse. It serializes typed values into length-prefixed element records
//! and pushes them to a `MediaSink`, optionally batching small records through a write cache, and
//! supports master elements whose size is unknown at open time by reserving an 8-byte size field
//! and backpatching it when the element is finished.
//!
//! Both are strictly sequential, single-owner types. Neither retries nor resynchronizes on error;
//! a malformed stream fails the current call and recovery is the caller's concern.

pub mod element_ids;
pub mod read;
pub mod write;

pub use read::{EbmlHeader, EbmlReader};
pub use write::EbmlWriter;
