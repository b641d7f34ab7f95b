// ebml-rs
// Copyright (c) 2026 The ebml-rs Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Well-known EBML element IDs and their payload classification.
//!
//! These are the IDs defined by the EBML specification itself (RFC 8794 section 11.2). IDs of a
//! concrete document type (Matroska tracks, clusters, and so on) belong to the consumer, not to
//! this layer.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The EBML specification version this crate reads and writes.
pub const EBML_VERSION: u64 = 1;

/// The EBML document header master element.
pub const ID_EBML: u32 = 0x1A45_DFA3;
/// The EBML version the document was written with.
pub const ID_EBML_VERSION: u32 = 0x4286;
/// The minimum EBML version a reader needs to understand the document.
pub const ID_EBML_READ_VERSION: u32 = 0x42F7;
/// The maximum encoded length in octets of any element ID in the document.
pub const ID_EBML_MAX_ID_LENGTH: u32 = 0x42F2;
/// The maximum encoded length in octets of any element size in the document.
pub const ID_EBML_MAX_SIZE_LENGTH: u32 = 0x42F3;
/// The document type name, e.g. "matroska" or "webm".
pub const ID_DOC_TYPE: u32 = 0x4282;
/// The document type version the document was written with.
pub const ID_DOC_TYPE_VERSION: u32 = 0x4287;
/// The minimum document type version a reader needs to understand the document.
pub const ID_DOC_TYPE_READ_VERSION: u32 = 0x4285;
/// Dead space, used for padding and reservation.
pub const ID_VOID: u32 = 0xEC;
/// A CRC-32 checksum of the remainder of the parent element.
pub const ID_CRC32: u32 = 0xBF;

/// The payload encoding of an element.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Type {
    Master,
    Unsigned,
    Signed,
    Binary,
    String,
    Float,
    Date,
}

/// The semantic type of a well-known element.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ElementType {
    Ebml,
    EbmlVersion,
    EbmlReadVersion,
    EbmlMaxIdLength,
    EbmlMaxSizeLength,
    DocType,
    DocTypeVersion,
    DocTypeReadVersion,
    Void,
    Crc32,
    /// Special type for IDs this layer knows nothing about.
    Unknown,
}

pub(crate) static ELEMENTS: Lazy<HashMap<u32, (Type, ElementType)>> = Lazy::new(|| {
    let mut elems = HashMap::new();
    elems.insert(ID_EBML, (Type::Master, ElementType::Ebml));
    elems.insert(ID_EBML_VERSION, (Type::Unsigned, ElementType::EbmlVersion));
    elems.insert(ID_EBML_READ_VERSION, (Type::Unsigned, ElementType::EbmlReadVersion));
    elems.insert(ID_EBML_MAX_ID_LENGTH, (Type::Unsigned, ElementType::EbmlMaxIdLength));
    elems.insert(ID_EBML_MAX_SIZE_LENGTH, (Type::Unsigned, ElementType::EbmlMaxSizeLength));
    elems.insert(ID_DOC_TYPE, (Type::String, ElementType::DocType));
    elems.insert(ID_DOC_TYPE_VERSION, (Type::Unsigned, ElementType::DocTypeVersion));
    elems.insert(ID_DOC_TYPE_READ_VERSION, (Type::Unsigned, ElementType::DocTypeReadVersion));
    elems.insert(ID_VOID, (Type::Binary, ElementType::Void));
    elems.insert(ID_CRC32, (Type::Binary, ElementType::Crc32));
    elems
});

/// Looks up the semantic type of a well-known element ID.
pub fn element_type(id: u32) -> ElementType {
    ELEMENTS.get(&id).map_or(ElementType::Unknown, |(_, etype)| *etype)
}
