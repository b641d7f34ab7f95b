// ebml-rs
// Copyright (c) 2026 The ebml-rs Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ebml_core::errors::{decode_error, limit_error, unsupported_error, Error, Result};
use ebml_core::io::{ReadBytes, SeekBuffered};
use ebml_core::util::bits::sign_extend_leq64_to_i64;

use crate::element_ids::{element_type, ElementType, EBML_VERSION, ID_EBML};

/// The declared size of an element whose true length is not known up front. Streamed master
/// elements use this sentinel; it is the all-data-bits-set encoding on the wire.
pub const SIZE_UNKNOWN: u64 = u64::MAX;

/// Maximum number of master elements that may be open at once. A hard cap on the level stack so a
/// malicious stream cannot grow it without bound.
const MAX_NESTING_DEPTH: usize = 64;

/// Reads a single EBML element ID (as in RFC 8794) from the stream and returns its value and
/// length in bytes (1-4 bytes), or an error.
///
/// Unlike an element size, the length-class marker bit is retained in the returned ID value.
fn read_id<R: ReadBytes>(reader: &mut R) -> Result<(u32, u32)> {
    let byte = reader.read_byte()?;

    let extra_octets = byte.leading_zeros();
    if extra_octets > 3 {
        // No marker bit within the first 4 octets. This includes a leading zero byte.
        return decode_error("ebml: invalid element ID length");
    }

    // Read remaining octets.
    let mut id = u32::from(byte);
    for _ in 0..extra_octets {
        let byte = reader.read_byte()?;
        id = (id << 8) | u32::from(byte);
    }

    Ok((id, extra_octets + 1))
}

/// Reads a single EBML element size from the stream and returns it, or an error. A size occupies
/// 1-8 bytes; the length-class marker bit is stripped from the value. The all-data-bits-set
/// encoding of any width decodes to [`SIZE_UNKNOWN`].
fn read_size<R: ReadBytes>(reader: &mut R) -> Result<u64> {
    let byte = reader.read_byte()?;

    if byte == 0 {
        // A size needing more than 8 octets is not valid EBML.
        return decode_error("ebml: invalid element size length");
    }

    let extra_octets = byte.leading_zeros();

    // Clear the length-class marker bit.
    let mut size = u64::from(byte);
    size ^= 1 << (7 - extra_octets);

    // Read remaining octets.
    for _ in 0..extra_octets {
        let byte = reader.read_byte()?;
        size = (size << 8) | u64::from(byte);
    }

    // Every data bit set to one means the size is unknown.
    let octets = extra_octets + 1;
    if size + 1 == 1u64 << (7 * octets) {
        return Ok(SIZE_UNKNOWN);
    }

    Ok(size)
}

/// One open master element: the absolute offset of its payload and the payload's declared length.
#[derive(Copy, Clone, Debug)]
struct EbmlLevel {
    start: u64,
    length: u64,
}

impl EbmlLevel {
    /// The absolute offset one past the last payload byte, or [`None`] for an unknown-size
    /// element.
    fn end(&self) -> Option<u64> {
        if self.length == SIZE_UNKNOWN {
            None
        }
        else {
            self.start.checked_add(self.length)
        }
    }
}

/// A decoded EBML document header (the `EBML` master element and its children).
#[derive(Clone, Debug)]
pub struct EbmlHeader {
    pub version: u64,
    pub read_version: u64,
    pub max_id_length: u64,
    pub max_size_length: u64,
    pub doc_type: String,
    pub doc_type_version: u64,
    pub doc_type_read_version: u64,
}

/// An EBML element reader.
///
/// `EbmlReader` decodes a flat sequence of element headers and scalar payloads from a pull-mode
/// byte source, and tracks the stack of master elements that are currently open. A master element
/// is never closed explicitly: a frame is popped when the stream position reaches the end of its
/// declared payload, and the pop is observed by the caller as the level-up count reported by
/// [`EbmlReader::peek_id`].
pub struct EbmlReader<R> {
    reader: R,
    levels: Vec<EbmlLevel>,
}

impl<R: ReadBytes + SeekBuffered> EbmlReader<R> {
    pub fn new(reader: R) -> Self {
        EbmlReader { reader, levels: Vec::new() }
    }

    /// Gets the absolute position of the underlying stream.
    pub fn pos(&self) -> u64 {
        self.reader.pos()
    }

    /// Gets the number of master elements currently open.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Consumes this reader and returns the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Pops every level frame whose payload the stream position has moved past, and returns the
    /// number of frames popped. A single element can close multiple levels at once when a child
    /// ends exactly at (or overruns) its ancestors' end offsets.
    fn pop_completed_levels(&mut self) -> usize {
        let mut closed = 0;

        while let Some(level) = self.levels.last() {
            match level.end() {
                Some(end) if self.reader.pos() >= end => {
                    self.levels.pop();
                    closed += 1;
                }
                // Unknown-size masters are never closed by position.
                _ => break,
            }
        }

        closed
    }

    /// Peeks the ID of the next element without consuming it, and reports how many master-element
    /// levels were implicitly closed since the last element was read.
    ///
    /// This is the dispatch point for consumers iterating a document: peek, decide by ID and
    /// level-up count, then call the matching typed read.
    pub fn peek_id(&mut self) -> Result<(u32, usize)> {
        let closed = self.pop_completed_levels();

        let (id, len) = read_id(&mut self.reader)?;
        self.reader.seek_buffered_rev(len as usize);

        Ok((id, closed))
    }

    /// Reads the ID + size framing of the next element.
    fn read_element_header(&mut self) -> Result<(u32, u64)> {
        let (id, _) = read_id(&mut self.reader)?;
        let size = read_size(&mut self.reader)?;
        Ok((id, size))
    }

    /// Reads an element with an unsigned integer payload of 1-8 bytes, big-endian, zero-extended.
    pub fn read_uint(&mut self) -> Result<(u32, u64)> {
        let (id, size) = self.read_element_header()?;

        if size < 1 || size > 8 {
            return decode_error("ebml: invalid unsigned integer length");
        }

        let mut buf = [0u8; 8];
        self.reader.read_buf_exact(&mut buf[8 - size as usize..])?;

        Ok((id, u64::from_be_bytes(buf)))
    }

    /// Reads an element with a signed integer payload of 1-8 bytes, big-endian, two's complement.
    pub fn read_sint(&mut self) -> Result<(u32, i64)> {
        let (id, size) = self.read_element_header()?;

        if size < 1 || size > 8 {
            return decode_error("ebml: invalid signed integer length");
        }

        let mut buf = [0u8; 8];
        self.reader.read_buf_exact(&mut buf[8 - size as usize..])?;
        let value = u64::from_be_bytes(buf);

        Ok((id, sign_extend_leq64_to_i64(value, 8 * size as u32)))
    }

    /// Reads an element with an IEEE-754 floating-point payload. Only the 32-bit and 64-bit
    /// encodings are readable; the legacy 80-bit extended-precision encoding is rejected as
    /// unsupported rather than misread.
    pub fn read_float(&mut self) -> Result<(u32, f64)> {
        let (id, size) = self.read_element_header()?;

        let value = match size {
            4 => f64::from(self.reader.read_be_f32()?),
            8 => self.reader.read_be_f64()?,
            10 => return unsupported_error("ebml: 10-byte extended precision float"),
            _ => return decode_error("ebml: invalid float length"),
        };

        Ok((id, value))
    }

    /// Reads an element with an ASCII or UTF-8 string payload. Trailing NUL padding octets are
    /// stripped; the payload is not strictly validated as UTF-8.
    pub fn read_string(&mut self) -> Result<(u32, String)> {
        let (id, size) = self.read_element_header()?;

        if size == SIZE_UNKNOWN {
            return decode_error("ebml: invalid string length");
        }

        let data = self.reader.read_boxed_slice_exact(size as usize)?;

        // NUL octets may pad the end of a string element to serve as a terminator.
        let bytes = match data.iter().rposition(|&b| b != 0) {
            Some(idx) => &data[..idx + 1],
            None => &[],
        };

        Ok((id, String::from_utf8_lossy(bytes).into_owned()))
    }

    /// Reads an element with a date payload: a signed 8-byte-or-less integer. The nanosecond
    /// epoch-offset interpretation is the caller's concern.
    pub fn read_date(&mut self) -> Result<(u32, i64)> {
        self.read_sint()
    }

    /// Reads an element with a raw binary payload, returning an owned copy.
    pub fn read_binary(&mut self) -> Result<(u32, Box<[u8]>)> {
        let (id, size) = self.read_element_header()?;

        if size == SIZE_UNKNOWN {
            return decode_error("ebml: invalid binary length");
        }

        let data = self.reader.read_boxed_slice_exact(size as usize)?;

        Ok((id, data))
    }

    /// Reads the header of a master element, leaving the stream positioned at its first child.
    ///
    /// A new level frame is pushed for the element; it will be popped once reading moves past the
    /// declared payload, except for unknown-size masters which stay open until the reader is
    /// dropped. Returns the element's ID and declared payload size.
    pub fn read_master(&mut self) -> Result<(u32, u64)> {
        let (id, size) = self.read_element_header()?;

        if self.levels.len() >= MAX_NESTING_DEPTH {
            return limit_error("ebml: maximum element nesting depth reached");
        }

        log::trace!("push level: id={:#x} start={} length={}", id, self.reader.pos(), size);
        self.levels.push(EbmlLevel { start: self.reader.pos(), length: size });

        Ok((id, size))
    }

    /// Skips the next element entirely: header plus payload. Whether the payload is discarded
    /// in-buffer or with a seek is decided by the underlying stream.
    pub fn skip(&mut self) -> Result<()> {
        let (id, size) = self.read_element_header()?;

        if size == SIZE_UNKNOWN {
            return decode_error("ebml: cannot skip an unknown-size element");
        }

        log::trace!("skipping element: id={:#x} length={}", id, size);
        self.reader.ignore_bytes(size)?;

        Ok(())
    }

    /// Reads and validates the EBML document header that opens every EBML stream.
    ///
    /// The stream must be positioned at the `EBML` master element and no master element may be
    /// open. Children the reader cannot use are logged and skipped so that headers written by
    /// newer muxers remain readable.
    pub fn read_header(&mut self) -> Result<EbmlHeader> {
        if !self.levels.is_empty() {
            return decode_error("ebml: EBML header must occur at the top level");
        }

        let (id, _) = self.peek_id()?;
        if id != ID_EBML {
            return decode_error("ebml: expected EBML header at start of stream");
        }

        let (_, size) = self.read_master()?;
        if size == SIZE_UNKNOWN {
            return decode_error("ebml: EBML header with unknown size");
        }
        let end = self.pos() + size;

        let mut version = None;
        let mut read_version = None;
        let mut max_id_length = None;
        let mut max_size_length = None;
        let mut doc_type = None;
        let mut doc_type_version = None;
        let mut doc_type_read_version = None;

        loop {
            if self.pos() >= end {
                break;
            }

            let (id, closed) = self.peek_id()?;
            if closed > 0 {
                break;
            }

            match element_type(id) {
                ElementType::EbmlVersion => {
                    let (_, value) = self.read_uint()?;
                    if value > EBML_VERSION {
                        return unsupported_error("ebml: unsupported EBML version");
                    }
                    version = Some(value);
                }
                ElementType::EbmlReadVersion => {
                    let (_, value) = self.read_uint()?;
                    if value > EBML_VERSION {
                        return unsupported_error("ebml: unsupported EBML read version");
                    }
                    read_version = Some(value);
                }
                ElementType::EbmlMaxIdLength => {
                    let (_, value) = self.read_uint()?;
                    if value != 4 {
                        return unsupported_error("ebml: unsupported maximum ID length");
                    }
                    max_id_length = Some(value);
                }
                ElementType::EbmlMaxSizeLength => {
                    let (_, value) = self.read_uint()?;
                    if value != 8 {
                        return unsupported_error("ebml: unsupported maximum size length");
                    }
                    max_size_length = Some(value);
                }
                ElementType::DocType => {
                    let (_, value) = self.read_string()?;
                    doc_type = Some(value);
                }
                ElementType::DocTypeVersion => {
                    let (_, value) = self.read_uint()?;
                    doc_type_version = Some(value);
                }
                ElementType::DocTypeReadVersion => {
                    let (_, value) = self.read_uint()?;
                    doc_type_read_version = Some(value);
                }
                ElementType::Void | ElementType::Crc32 => {
                    self.skip()?;
                }
                _ => {
                    log::warn!("unknown element {:#x} in EBML header, skipping", id);
                    self.skip()?;
                }
            }
        }

        Ok(EbmlHeader {
            version: version.unwrap_or(1),
            read_version: read_version.unwrap_or(1),
            max_id_length: max_id_length.unwrap_or(4),
            max_size_length: max_size_length.unwrap_or(8),
            doc_type: doc_type.ok_or(Error::DecodeError("ebml: EBML header has no doctype"))?,
            doc_type_version: doc_type_version.unwrap_or(1),
            doc_type_read_version: doc_type_read_version.unwrap_or(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use ebml_core::errors::Error;
    use ebml_core::io::BufReader;

    use super::EbmlReader;
    use crate::read::SIZE_UNKNOWN;

    #[test]
    fn element_id_parsing() {
        let cases: [(&[u8], u32); 4] = [
            (&[0x82], 0x82),
            (&[0x40, 0x02], 0x4002),
            (&[0x20, 0x00, 0x02], 0x20_0002),
            (&[0x10, 0x00, 0x00, 0x02], 0x1000_0002),
        ];

        for (bytes, id) in cases {
            let mut ebml = EbmlReader::new(BufReader::new(bytes));
            assert_eq!(ebml.peek_id().unwrap(), (id, 0));
        }
    }

    #[test]
    fn peek_does_not_consume() {
        let data = [0x81, 0x81, 0x05];
        let mut ebml = EbmlReader::new(BufReader::new(&data));

        assert_eq!(ebml.peek_id().unwrap(), (0x81, 0));
        assert_eq!(ebml.peek_id().unwrap(), (0x81, 0));
        assert_eq!(ebml.pos(), 0);
        assert_eq!(ebml.read_uint().unwrap(), (0x81, 5));
    }

    #[test]
    fn invalid_id_lengths() {
        // A leading zero byte has no marker bit within the first 4 octets.
        let mut ebml = EbmlReader::new(BufReader::new(&[0x00, 0x80, 0x80, 0x80, 0x80]));
        assert!(matches!(ebml.peek_id(), Err(Error::DecodeError(_))));

        // A 5-octet length class is too long for an ID.
        let mut ebml = EbmlReader::new(BufReader::new(&[0x04, 0x80, 0x80, 0x80, 0x80]));
        assert!(matches!(ebml.peek_id(), Err(Error::DecodeError(_))));
    }

    #[test]
    fn unsigned_integer_reading() {
        // ID 0x81, 1-byte size of 2, payload 0x0005.
        let mut ebml = EbmlReader::new(BufReader::new(&[0x81, 0x82, 0x00, 0x05]));
        assert_eq!(ebml.read_uint().unwrap(), (0x81, 5));

        // Full width payload.
        let data = [0x81, 0x88, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        assert_eq!(ebml.read_uint().unwrap(), (0x81, 0x0102_0304_0506_0708));

        // Zero-length and over-long payloads are invalid for integers.
        let mut ebml = EbmlReader::new(BufReader::new(&[0x81, 0x80]));
        assert!(matches!(ebml.read_uint(), Err(Error::DecodeError(_))));

        let data = [0x81, 0x89, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05];
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        assert!(matches!(ebml.read_uint(), Err(Error::DecodeError(_))));
    }

    #[test]
    fn signed_integer_reading() {
        let mut ebml = EbmlReader::new(BufReader::new(&[0x81, 0x81, 0xff]));
        assert_eq!(ebml.read_sint().unwrap(), (0x81, -1));

        let mut ebml = EbmlReader::new(BufReader::new(&[0x81, 0x82, 0x80, 0x00]));
        assert_eq!(ebml.read_sint().unwrap(), (0x81, -32768));

        let mut ebml = EbmlReader::new(BufReader::new(&[0x81, 0x81, 0x7f]));
        assert_eq!(ebml.read_sint().unwrap(), (0x81, 127));

        // Date elements share the signed integer path.
        let mut ebml = EbmlReader::new(BufReader::new(&[0x81, 0x81, 0xfe]));
        assert_eq!(ebml.read_date().unwrap(), (0x81, -2));
    }

    #[test]
    fn float_reading() {
        let mut data = vec![0x81, 0x84];
        data.extend_from_slice(&1.5f32.to_be_bytes());
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        assert_eq!(ebml.read_float().unwrap(), (0x81, 1.5));

        let mut data = vec![0x81, 0x88];
        data.extend_from_slice(&(-0.25f64).to_be_bytes());
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        assert_eq!(ebml.read_float().unwrap(), (0x81, -0.25));

        // 80-bit extended precision must fail explicitly.
        let data = [0x81, 0x8a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        assert!(matches!(ebml.read_float(), Err(Error::Unsupported(_))));

        // Any other width is malformed.
        let data = [0x81, 0x83, 0, 0, 0];
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        assert!(matches!(ebml.read_float(), Err(Error::DecodeError(_))));
    }

    #[test]
    fn string_reading() {
        let mut data = vec![0x81, 0x89];
        data.extend_from_slice(b"matroska\0");
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        assert_eq!(ebml.read_string().unwrap(), (0x81, "matroska".to_string()));

        // Empty payload.
        let mut ebml = EbmlReader::new(BufReader::new(&[0x81, 0x80]));
        assert_eq!(ebml.read_string().unwrap(), (0x81, String::new()));
    }

    #[test]
    fn binary_reading() {
        let data = [0x81, 0x84, 0xde, 0xad, 0xbe, 0xef];
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        let (id, payload) = ebml.read_binary().unwrap();
        assert_eq!(id, 0x81);
        assert_eq!(&payload[..], &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn unknown_size_sentinel() {
        // A 1-byte size with all data bits set is the unknown-size sentinel, not 0x7f.
        let mut ebml = EbmlReader::new(BufReader::new(&[0x84, 0xff]));
        assert_eq!(ebml.read_master().unwrap(), (0x84, SIZE_UNKNOWN));

        // The same holds for wider encodings with every data bit set.
        let mut ebml = EbmlReader::new(BufReader::new(&[0x84, 0x7f, 0xff]));
        assert_eq!(ebml.read_master().unwrap(), (0x84, SIZE_UNKNOWN));

        // One data bit short of the sentinel is a regular value.
        let mut ebml = EbmlReader::new(BufReader::new(&[0x84, 0x7f, 0xfe]));
        assert_eq!(ebml.read_master().unwrap(), (0x84, 0x3ffe));
    }

    #[test]
    fn truncated_payload() {
        let mut ebml = EbmlReader::new(BufReader::new(&[0x81, 0x84, 0x00, 0x01]));
        assert!(matches!(ebml.read_uint(), Err(Error::IoError(_))));
    }

    #[test]
    fn nesting_cascade() {
        // Outer master (9 byte payload) containing an inner master (4 byte payload) containing a
        // single uint, followed by a sibling of the outer master. Reading the innermost scalar
        // lands exactly on both end offsets, so the next peek closes two levels at once.
        let data = [
            0x84, 0x86, // outer master, size 6
            0x85, 0x84, // inner master, size 4
            0x86, 0x82, 0x00, 0x07, // uint, value 7
            0x87, 0x81, 0x01, // outer sibling
        ];

        let mut ebml = EbmlReader::new(BufReader::new(&data));

        assert_eq!(ebml.read_master().unwrap(), (0x84, 6));
        assert_eq!(ebml.peek_id().unwrap(), (0x85, 0));
        assert_eq!(ebml.read_master().unwrap(), (0x85, 4));
        assert_eq!(ebml.depth(), 2);

        assert_eq!(ebml.peek_id().unwrap(), (0x86, 0));
        assert_eq!(ebml.read_uint().unwrap(), (0x86, 7));

        assert_eq!(ebml.peek_id().unwrap(), (0x87, 2));
        assert_eq!(ebml.depth(), 0);
        assert_eq!(ebml.read_uint().unwrap(), (0x87, 1));
    }

    #[test]
    fn child_overrun_closes_parent() {
        // The inner master declares a payload overrunning its parent's end. The overrun is
        // tolerated: both frames pop in one cascade once the position passes both ends.
        let data = [
            0x84, 0x86, // outer master, size 6
            0x85, 0x86, // inner master, size 6 (overruns outer by 2)
            0x86, 0x84, 0x00, 0x00, 0x00, 0x07, // uint ending past both
            0x87, 0x81, 0x01,
        ];

        let mut ebml = EbmlReader::new(BufReader::new(&data));
        ebml.read_master().unwrap();
        ebml.read_master().unwrap();
        ebml.read_uint().unwrap();
        assert_eq!(ebml.peek_id().unwrap(), (0x87, 2));
    }

    #[test]
    fn skip_element() {
        let data = [0x81, 0x83, 0xaa, 0xbb, 0xcc, 0x87, 0x81, 0x05];
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        ebml.skip().unwrap();
        assert_eq!(ebml.read_uint().unwrap(), (0x87, 5));
    }

    #[test]
    fn nesting_depth_limit() {
        let mut data = Vec::new();
        for _ in 0..65 {
            // Unknown-size masters never pop, so each read grows the level stack.
            data.extend_from_slice(&[0x84, 0xff]);
        }

        let mut ebml = EbmlReader::new(BufReader::new(&data));
        for _ in 0..64 {
            ebml.read_master().unwrap();
        }
        assert!(matches!(ebml.read_master(), Err(Error::LimitError(_))));
    }

    #[test]
    fn document_header_parsing() {
        let data = [
            0x1a, 0x45, 0xdf, 0xa3, 0xa4, // EBML header, size 36
            0x42, 0x86, 0x81, 0x01, // EBMLVersion 1
            0x42, 0xf7, 0x81, 0x01, // EBMLReadVersion 1
            0x42, 0xf2, 0x81, 0x04, // EBMLMaxIDLength 4
            0x42, 0xf3, 0x81, 0x08, // EBMLMaxSizeLength 8
            0x42, 0x82, 0x89, b'm', b'a', b't', b'r', b'o', b's', b'k', b'a', 0x00,
            0x42, 0x87, 0x81, 0x02, // DocTypeVersion 2
            0x42, 0x85, 0x81, 0x01, // DocTypeReadVersion 1
            0x18, 0x53, 0x80, 0x67, 0xff, // an unknown-size top-level element follows
        ];

        let mut ebml = EbmlReader::new(BufReader::new(&data));
        let header = ebml.read_header().unwrap();

        assert_eq!(header.version, 1);
        assert_eq!(header.read_version, 1);
        assert_eq!(header.max_id_length, 4);
        assert_eq!(header.max_size_length, 8);
        assert_eq!(header.doc_type, "matroska");
        assert_eq!(header.doc_type_version, 2);
        assert_eq!(header.doc_type_read_version, 1);

        // The header master is closed lazily by the next peek.
        assert_eq!(ebml.peek_id().unwrap(), (0x1853_8067, 1));
    }

    #[test]
    fn document_header_skips_unknown_children() {
        let data = [
            0x1a, 0x45, 0xdf, 0xa3, 0x91, // EBML header, size 17
            0x42, 0x82, 0x85, b'w', b'e', b'b', b'm', 0x00, // DocType "webm"
            0x40, 0x77, 0x82, 0xaa, 0xbb, // an unknown child, skipped
            0x42, 0x87, 0x81, 0x04, // DocTypeVersion 4
        ];

        let mut ebml = EbmlReader::new(BufReader::new(&data));
        let header = ebml.read_header().unwrap();

        assert_eq!(header.doc_type, "webm");
        assert_eq!(header.doc_type_version, 4);
        // Absent fields fall back to the RFC 8794 defaults.
        assert_eq!(header.version, 1);
        assert_eq!(header.max_id_length, 4);
    }

    #[test]
    fn document_header_requires_ebml_id() {
        let data = [0x18, 0x53, 0x80, 0x67, 0x81, 0x00];
        let mut ebml = EbmlReader::new(BufReader::new(&data));
        assert!(matches!(ebml.read_header(), Err(Error::DecodeError(_))));
    }

    #[test]
    fn document_header_rejects_bad_limits() {
        // EBMLMaxSizeLength of 16 cannot be honoured.
        let data = [
            0x1a, 0x45, 0xdf, 0xa3, 0x84, // EBML header, size 4
            0x42, 0xf3, 0x81, 0x10, // EBMLMaxSizeLength 16
        ];

        let mut ebml = EbmlReader::new(BufReader::new(&data));
        assert!(matches!(ebml.read_header(), Err(Error::Unsupported(_))));
    }
}
