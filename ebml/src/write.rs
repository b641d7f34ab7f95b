// ebml-rs
// Copyright (c) 2026 The ebml-rs Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::{Seek, SeekFrom, Write};

use ebml_core::errors::{seek_error, Result, SeekErrorKind};
use ebml_core::io::MediaSink;

use crate::element_ids::{
    EBML_VERSION, ID_DOC_TYPE, ID_DOC_TYPE_READ_VERSION, ID_DOC_TYPE_VERSION, ID_EBML,
    ID_EBML_MAX_ID_LENGTH, ID_EBML_MAX_SIZE_LENGTH, ID_EBML_READ_VERSION, ID_EBML_VERSION,
    ID_VOID,
};

/// Number of octets needed to encode an element ID. The length-class marker is part of the ID
/// value, so this is simply the byte width of the value.
fn id_length(id: u32) -> u32 {
    debug_assert!(id >= 0x80, "not a marked element ID");
    (32 - id.leading_zeros() + 7) / 8
}

/// Appends an element ID in its marked big-endian encoding.
fn put_id(buf: &mut Vec<u8>, id: u32) {
    let octets = id_length(id);
    for i in (0..octets).rev() {
        buf.push((id >> (8 * i)) as u8);
    }
}

/// Number of octets needed for the minimal big-endian encoding of an unsigned integer payload.
/// Zero still occupies one octet.
fn uint_length(value: u64) -> u32 {
    let mut octets = 1;
    while octets < 8 && value >= 1u64 << (8 * octets) {
        octets += 1;
    }
    octets
}

/// Number of octets needed for the minimal two's complement encoding of a signed integer payload.
fn sint_length(value: i64) -> u32 {
    // Fold the sign bit into a magnitude so that the boundary values (-128 fits one octet, -129
    // does not) come out right.
    let magnitude = if value >= 0 { (value as u64) << 1 } else { (!value as u64) << 1 | 1 };
    uint_length(magnitude)
}

/// Number of octets needed for the minimal size encoding of `size`. The all-data-bits-set pattern
/// of each width is reserved as the unknown-size sentinel, so a size one below a width boundary is
/// pushed to the next wider class.
fn size_length(size: u64) -> u32 {
    let mut octets = 1;
    while octets < 8 && size >= (1u64 << (7 * octets)) - 1 {
        octets += 1;
    }
    debug_assert!(size < (1u64 << 56) - 1, "size not encodable in 8 octets");
    octets
}

/// Appends an element size in its marked big-endian encoding, using exactly `octets` bytes. A
/// non-minimal width is permitted; the value must fit and must not alias the sentinel.
fn put_size(buf: &mut Vec<u8>, size: u64, octets: u32) {
    debug_assert!(octets >= size_length(size) && octets <= 8);
    let marked = size | 1u64 << (7 * octets);
    for i in (0..octets).rev() {
        buf.push((marked >> (8 * i)) as u8);
    }
}

/// The batching buffer of an [`EbmlWriter`].
///
/// `handled` counts the bytes of buffer content that have been produced since the cache was set,
/// net of any in-cache repositioning. The cache may only be flushed once every buffered byte has
/// been handled, i.e. a backward seek into the cache was balanced by rewriting up to the former
/// high-water mark.
struct WriteCache {
    buf: Vec<u8>,
    capacity: usize,
    start_pos: u64,
    cursor: usize,
    handled: usize,
}

impl WriteCache {
    /// Whether an element of `len` bytes fits at the current cursor.
    fn fits(&self, len: usize) -> bool {
        self.cursor + len <= self.capacity
    }

    /// Whether an absolute stream position falls within the cached extent.
    fn contains(&self, pos: u64) -> bool {
        pos >= self.start_pos && pos <= self.start_pos + self.buf.len() as u64
    }
}

/// An EBML element writer.
///
/// `EbmlWriter` serializes typed values into length-prefixed element records and pushes them to a
/// [`MediaSink`] in stream order. Small records can be batched through a write cache so that a
/// burst of header elements reaches the sink as a single push.
///
/// Master elements are written in two steps. [`EbmlWriter::write_master_start`] emits the ID
/// followed by an 8-byte placeholder size, and [`EbmlWriter::write_master_finish`] patches the
/// placeholder with the number of payload bytes written in between. Masters must be finished in
/// the reverse order they were started.
pub struct EbmlWriter<S: MediaSink> {
    sink: S,
    pos: u64,
    cache: Option<WriteCache>,
    open_masters: Vec<u64>,
}

impl<S: MediaSink> EbmlWriter<S> {
    pub fn new(sink: S) -> Self {
        EbmlWriter { sink, pos: 0, cache: None, open_masters: Vec::new() }
    }

    /// Gets the absolute position of the output stream.
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Consumes this writer and returns the underlying sink.
    ///
    /// Panics if a write cache is still active or a master element is still open, since either
    /// means the output is incomplete.
    pub fn into_inner(self) -> S {
        assert!(self.cache.is_none(), "write cache still active");
        assert!(self.open_masters.is_empty(), "unfinished master element");
        self.sink
    }

    /// Activates a write cache of the given capacity at the current position. Subsequent elements
    /// accumulate in memory until [`EbmlWriter::flush_cache`] pushes them downstream in one piece.
    ///
    /// Panics if a cache is already active.
    pub fn set_cache(&mut self, size: usize) {
        assert!(self.cache.is_none(), "write cache already active");

        log::debug!("activating write cache: capacity={} pos={}", size, self.pos);

        self.cache = Some(WriteCache {
            buf: Vec::with_capacity(size),
            capacity: size,
            start_pos: self.pos,
            cursor: 0,
            handled: 0,
        });
    }

    /// Pushes the contents of the write cache downstream and deactivates it. Does nothing if no
    /// cache is active.
    ///
    /// Panics if the cache holds bytes that were never rewritten after a backward in-cache seek,
    /// since flushing then would push content the producer no longer stands behind.
    pub fn flush_cache(&mut self) -> Result<()> {
        if let Some(cache) = self.cache.take() {
            assert!(cache.handled == cache.buf.len(), "write cache flushed with unhandled bytes");

            log::debug!("flushing write cache: len={}", cache.buf.len());
            self.sink.write_all(&cache.buf)?;
        }
        Ok(())
    }

    /// Emits one element record: into the cache when active and roomy, otherwise directly
    /// downstream as a single push.
    fn push(&mut self, data: &[u8]) -> Result<()> {
        if let Some(cache) = &mut self.cache {
            if cache.fits(data.len()) {
                let end = cache.cursor + data.len();
                if cache.buf.len() < end {
                    cache.buf.resize(end, 0);
                }
                cache.buf[cache.cursor..end].copy_from_slice(data);
                cache.cursor = end;
                cache.handled += data.len();
                self.pos += data.len() as u64;
                return Ok(());
            }

            // The record does not fit. Flush what was batched and fall through to a direct push.
            self.flush_cache()?;
        }

        self.sink.write_all(data)?;
        self.pos += data.len() as u64;
        Ok(())
    }

    /// Repositions the output stream to an absolute position.
    ///
    /// A seek whose target lies within the active cache is serviced in memory without touching the
    /// sink. Any other seek flushes the cache first and requires a seekable sink.
    pub fn seek(&mut self, pos: u64) -> Result<()> {
        if let Some(cache) = &mut self.cache {
            if cache.contains(pos) {
                let delta = pos as i64 - self.pos as i64;
                debug_assert!(delta >= 0 || cache.handled as i64 + delta >= 0);

                cache.handled = (cache.handled as i64 + delta) as usize;
                cache.cursor = (pos - cache.start_pos) as usize;
                self.pos = pos;
                return Ok(());
            }

            self.flush_cache()?;
        }

        if !self.sink.is_seekable() {
            return seek_error(SeekErrorKind::Unseekable);
        }

        log::debug!("seeking sink to {}", pos);

        self.sink.seek(SeekFrom::Start(pos))?;
        self.pos = pos;
        Ok(())
    }

    /// Writes an element with an unsigned integer payload in its minimal width.
    pub fn write_uint(&mut self, id: u32, value: u64) -> Result<()> {
        let octets = uint_length(value);

        let mut data = Vec::with_capacity(16);
        put_id(&mut data, id);
        put_size(&mut data, u64::from(octets), 1);
        data.extend_from_slice(&value.to_be_bytes()[8 - octets as usize..]);

        self.push(&data)
    }

    /// Writes an element with an unsigned integer payload padded to the full 8 octets, so that it
    /// can later be patched in place with [`EbmlWriter::replace_uint`].
    pub fn write_uint_fixed(&mut self, id: u32, value: u64) -> Result<()> {
        let mut data = Vec::with_capacity(16);
        put_id(&mut data, id);
        put_size(&mut data, 8, 1);
        data.extend_from_slice(&value.to_be_bytes());

        self.push(&data)
    }

    /// Writes an element with a signed integer payload in its minimal two's complement width.
    pub fn write_sint(&mut self, id: u32, value: i64) -> Result<()> {
        let octets = sint_length(value);

        let mut data = Vec::with_capacity(16);
        put_id(&mut data, id);
        put_size(&mut data, u64::from(octets), 1);
        data.extend_from_slice(&(value as u64).to_be_bytes()[8 - octets as usize..]);

        self.push(&data)
    }

    /// Writes an element with a 64-bit IEEE-754 floating-point payload.
    pub fn write_float(&mut self, id: u32, value: f64) -> Result<()> {
        let mut data = Vec::with_capacity(16);
        put_id(&mut data, id);
        put_size(&mut data, 8, 1);
        data.extend_from_slice(&value.to_be_bytes());

        self.push(&data)
    }

    /// Writes an element with an ASCII string payload, NUL-terminated on the wire.
    pub fn write_ascii(&mut self, id: u32, value: &str) -> Result<()> {
        debug_assert!(value.is_ascii());

        let mut payload = Vec::with_capacity(value.len() + 1);
        payload.extend_from_slice(value.as_bytes());
        payload.push(0);

        self.write_binary(id, &payload)
    }

    /// Writes an element with a UTF-8 string payload, NUL-terminated on the wire.
    pub fn write_utf8(&mut self, id: u32, value: &str) -> Result<()> {
        let mut payload = Vec::with_capacity(value.len() + 1);
        payload.extend_from_slice(value.as_bytes());
        payload.push(0);

        self.write_binary(id, &payload)
    }

    /// Writes an element with a date payload: a signed integer of nanoseconds relative to the
    /// document type's epoch.
    pub fn write_date(&mut self, id: u32, value: i64) -> Result<()> {
        self.write_sint(id, value)
    }

    /// Writes an element with a raw binary payload.
    pub fn write_binary(&mut self, id: u32, payload: &[u8]) -> Result<()> {
        let mut data = Vec::with_capacity(payload.len() + 12);
        put_id(&mut data, id);
        put_size(&mut data, payload.len() as u64, size_length(payload.len() as u64));
        data.extend_from_slice(payload);

        self.push(&data)
    }

    /// Writes only the ID + size framing of a binary element whose payload will follow via
    /// [`EbmlWriter::write_buffer`]. This avoids copying a large payload into an element record.
    pub fn write_buffer_header(&mut self, id: u32, len: u64) -> Result<()> {
        let mut data = Vec::with_capacity(12);
        put_id(&mut data, id);
        put_size(&mut data, len, size_length(len));

        self.push(&data)
    }

    /// Pushes a large payload downstream as-is. The active cache, if any, is flushed first so
    /// stream order is preserved; the payload itself is never cached.
    pub fn write_buffer(&mut self, payload: &[u8]) -> Result<()> {
        self.flush_cache()?;

        self.sink.write_all(payload)?;
        self.pos += payload.len() as u64;
        Ok(())
    }

    /// Starts a master element: writes its ID followed by an 8-byte placeholder size, and returns
    /// the absolute position of the placeholder. The element is closed, and its true size patched
    /// in, by passing that position to [`EbmlWriter::write_master_finish`].
    pub fn write_master_start(&mut self, id: u32) -> Result<u64> {
        let mut data = Vec::with_capacity(12);
        put_id(&mut data, id);

        let size_pos = self.pos + data.len() as u64;

        // Reserve the widest size encoding, as the unknown-size sentinel, so any payload length
        // can be patched in without moving data.
        data.push(0x01);
        data.extend_from_slice(&[0xff; 7]);

        self.push(&data)?;
        self.open_masters.push(size_pos);

        Ok(size_pos)
    }

    /// Finishes the most recently started master element, patching its placeholder size field
    /// with the payload length written since [`EbmlWriter::write_master_start`] returned.
    ///
    /// Panics if `start` is not the innermost open master; interleaved finishes would patch sizes
    /// that no longer describe contiguous payloads.
    pub fn write_master_finish(&mut self, start: u64) -> Result<()> {
        assert!(
            self.open_masters.pop() == Some(start),
            "master elements must be finished innermost-first"
        );

        let end = self.pos;

        self.seek(start)?;

        // An 8-octet size encoding: marker in the top octet, 56 bits of payload length below it.
        let size = 1u64 << 56 | (end - start - 8);
        self.push(&size.to_be_bytes())?;

        self.seek(end)
    }

    /// Overwrites the payload of a previously written fixed-width unsigned integer element (see
    /// [`EbmlWriter::write_uint_fixed`]) at absolute position `pos` of its payload, then restores
    /// the current position.
    pub fn replace_uint(&mut self, pos: u64, value: u64) -> Result<()> {
        let restore = self.pos;

        self.seek(pos)?;
        self.push(&value.to_be_bytes())?;
        self.seek(restore)
    }

    /// Writes a Void element whose total length, framing included, is exactly `len` bytes. Used to
    /// reserve space that a later pass overwrites in place.
    pub fn write_void(&mut self, len: u64) -> Result<()> {
        assert!(len >= 2, "a Void element occupies at least 2 bytes");

        // Find the narrowest size encoding such that framing plus payload hits `len` exactly. A
        // wider-than-minimal size field absorbs the slack when the payload length would not
        // otherwise line up.
        let mut octets = 1;
        let payload = loop {
            let payload = len - 1 - u64::from(octets);
            if size_length(payload) <= octets {
                break payload;
            }
            octets += 1;
        };

        let mut data = Vec::with_capacity(len as usize);
        put_id(&mut data, ID_VOID);
        put_size(&mut data, payload, octets);
        data.resize(len as usize, 0);

        self.push(&data)
    }

    /// Writes a complete EBML document header declaring the given document type and document type
    /// version. The header is batched through a write cache and reaches the sink as a single push.
    pub fn write_header(&mut self, doc_type: &str, version: u64) -> Result<()> {
        self.set_cache(0x40);

        let master = self.write_master_start(ID_EBML)?;
        self.write_uint(ID_EBML_VERSION, EBML_VERSION)?;
        self.write_uint(ID_EBML_READ_VERSION, EBML_VERSION)?;
        self.write_uint(ID_EBML_MAX_ID_LENGTH, 4)?;
        self.write_uint(ID_EBML_MAX_SIZE_LENGTH, 8)?;
        self.write_ascii(ID_DOC_TYPE, doc_type)?;
        self.write_uint(ID_DOC_TYPE_VERSION, version)?;
        self.write_uint(ID_DOC_TYPE_READ_VERSION, version)?;
        self.write_master_finish(master)?;

        self.flush_cache()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Seek, SeekFrom, Write};

    use ebml_core::io::{BufReader, MediaSink};

    use super::{sint_length, uint_length, EbmlWriter};
    use crate::read::EbmlReader;

    fn writer() -> EbmlWriter<Cursor<Vec<u8>>> {
        EbmlWriter::new(Cursor::new(Vec::new()))
    }

    fn finish(ebml: EbmlWriter<Cursor<Vec<u8>>>) -> Vec<u8> {
        ebml.into_inner().into_inner()
    }

    /// A seekable sink that counts how many downstream pushes it received.
    struct CountingSink {
        inner: Cursor<Vec<u8>>,
        writes: usize,
    }

    impl Write for CountingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.inner.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.inner.flush()
        }
    }

    impl Seek for CountingSink {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.inner.seek(pos)
        }
    }

    impl MediaSink for CountingSink {
        fn is_seekable(&self) -> bool {
            true
        }
    }

    #[test]
    fn integer_payload_widths() {
        assert_eq!(uint_length(0), 1);
        assert_eq!(uint_length(255), 1);
        assert_eq!(uint_length(256), 2);
        assert_eq!(uint_length(u64::MAX), 8);

        assert_eq!(sint_length(0), 1);
        assert_eq!(sint_length(127), 1);
        assert_eq!(sint_length(128), 2);
        assert_eq!(sint_length(-128), 1);
        assert_eq!(sint_length(-129), 2);
        assert_eq!(sint_length(i64::MIN), 8);
        assert_eq!(sint_length(i64::MAX), 8);
    }

    #[test]
    fn unsigned_integer_writing() {
        let mut ebml = writer();
        ebml.write_uint(0x81, 5).unwrap();
        ebml.write_uint(0x81, 300).unwrap();
        assert_eq!(finish(ebml), [0x81, 0x81, 0x05, 0x81, 0x82, 0x01, 0x2c]);
    }

    #[test]
    fn signed_integer_writing() {
        let mut ebml = writer();
        ebml.write_sint(0x81, -1).unwrap();
        ebml.write_sint(0x81, -129).unwrap();
        ebml.write_sint(0x81, 64).unwrap();
        assert_eq!(finish(ebml), [0x81, 0x81, 0xff, 0x81, 0x82, 0xff, 0x7f, 0x81, 0x81, 0x40]);
    }

    #[test]
    fn string_writing_nul_terminates() {
        let mut ebml = writer();
        ebml.write_ascii(0x4282, "webm").unwrap();
        assert_eq!(finish(ebml), [0x42, 0x82, 0x85, b'w', b'e', b'b', b'm', 0x00]);
    }

    #[test]
    fn multi_byte_size_encoding() {
        // A 127-byte payload cannot use a 1-octet size, as that is the unknown-size sentinel.
        let mut ebml = writer();
        ebml.write_binary(0x81, &[0xab; 127]).unwrap();

        let data = finish(ebml);
        assert_eq!(&data[..3], &[0x81, 0x40, 0x7f]);
        assert_eq!(data.len(), 3 + 127);
    }

    #[test]
    fn master_size_backpatch() {
        let mut ebml = writer();

        let master = ebml.write_master_start(0x1853_8067).unwrap();
        ebml.write_uint(0x81, 1).unwrap();
        ebml.write_uint(0x82, 2).unwrap();
        ebml.write_master_finish(master).unwrap();

        let data = finish(ebml);

        // 4-byte ID, 8-byte size field holding 6, then two 3-byte children.
        assert_eq!(&data[..4], &[0x18, 0x53, 0x80, 0x67]);
        assert_eq!(&data[4..12], &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06]);
        assert_eq!(&data[12..], &[0x81, 0x81, 0x01, 0x82, 0x81, 0x02]);
    }

    #[test]
    fn nested_master_backpatch() {
        let mut ebml = writer();

        let outer = ebml.write_master_start(0x84).unwrap();
        let inner = ebml.write_master_start(0x85).unwrap();
        ebml.write_uint(0x81, 9).unwrap();
        ebml.write_master_finish(inner).unwrap();
        ebml.write_master_finish(outer).unwrap();

        let data = finish(ebml);

        // Outer payload: inner ID + size field + 3-byte child = 12 bytes.
        assert_eq!(data[0], 0x84);
        assert_eq!(&data[1..9], &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c]);
        assert_eq!(data[9], 0x85);
        assert_eq!(&data[10..18], &[0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03]);
    }

    #[test]
    #[should_panic(expected = "innermost-first")]
    fn interleaved_master_finish_panics() {
        let mut ebml = writer();

        let outer = ebml.write_master_start(0x84).unwrap();
        let _inner = ebml.write_master_start(0x85).unwrap();
        ebml.write_master_finish(outer).unwrap();
    }

    #[test]
    #[should_panic(expected = "already active")]
    fn double_set_cache_panics() {
        let mut ebml = writer();
        ebml.set_cache(64);
        ebml.set_cache(64);
    }

    #[test]
    #[should_panic(expected = "unhandled bytes")]
    fn flush_after_unbalanced_rewind_panics() {
        let mut ebml = writer();
        ebml.set_cache(64);
        ebml.write_uint(0x81, 5).unwrap();

        // Rewind into the cache without rewriting back up to the high-water mark.
        ebml.seek(1).unwrap();
        ebml.flush_cache().unwrap();
    }

    #[test]
    fn cached_header_is_one_push() {
        let sink = CountingSink { inner: Cursor::new(Vec::new()), writes: 0 };

        let mut ebml = EbmlWriter::new(sink);
        ebml.write_header("matroska", 2).unwrap();

        let sink = ebml.into_inner();
        assert_eq!(sink.writes, 1);
        assert_eq!(sink.inner.get_ref().len(), 48);
    }

    #[test]
    fn header_wire_format() {
        let mut ebml = writer();
        ebml.write_header("matroska", 2).unwrap();

        #[rustfmt::skip]
        let expected = [
            0x1a, 0x45, 0xdf, 0xa3, // EBML
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x24, // backpatched size: 36
            0x42, 0x86, 0x81, 0x01, // EBMLVersion 1
            0x42, 0xf7, 0x81, 0x01, // EBMLReadVersion 1
            0x42, 0xf2, 0x81, 0x04, // EBMLMaxIDLength 4
            0x42, 0xf3, 0x81, 0x08, // EBMLMaxSizeLength 8
            0x42, 0x82, 0x89, b'm', b'a', b't', b'r', b'o', b's', b'k', b'a', 0x00,
            0x42, 0x87, 0x81, 0x02, // DocTypeVersion 2
            0x42, 0x85, 0x81, 0x02, // DocTypeReadVersion 2
        ];

        assert_eq!(finish(ebml), expected);
    }

    #[test]
    fn header_round_trip() {
        let mut ebml = writer();
        ebml.write_header("webm", 4).unwrap();
        let data = finish(ebml);

        let mut reader = EbmlReader::new(BufReader::new(&data));
        let header = reader.read_header().unwrap();

        assert_eq!(header.version, 1);
        assert_eq!(header.max_id_length, 4);
        assert_eq!(header.max_size_length, 8);
        assert_eq!(header.doc_type, "webm");
        assert_eq!(header.doc_type_version, 4);
        assert_eq!(header.doc_type_read_version, 4);
    }

    #[test]
    fn scalar_round_trip() {
        let mut ebml = writer();
        ebml.write_uint(0x81, 77_777).unwrap();
        ebml.write_sint(0x82, -40_000).unwrap();
        ebml.write_float(0x83, 1234.5).unwrap();
        ebml.write_utf8(0x84, "déjà vu").unwrap();
        ebml.write_date(0x85, -864_000_000_000).unwrap();
        ebml.write_binary(0x86, &[1, 2, 3]).unwrap();
        let data = finish(ebml);

        let mut reader = EbmlReader::new(BufReader::new(&data));
        assert_eq!(reader.read_uint().unwrap(), (0x81, 77_777));
        assert_eq!(reader.read_sint().unwrap(), (0x82, -40_000));
        assert_eq!(reader.read_float().unwrap(), (0x83, 1234.5));
        assert_eq!(reader.read_string().unwrap(), (0x84, "déjà vu".to_string()));
        assert_eq!(reader.read_date().unwrap(), (0x85, -864_000_000_000));
        assert_eq!(reader.read_binary().unwrap().1.as_ref(), &[1, 2, 3]);
    }

    #[test]
    fn replace_uint_patches_in_place() {
        let mut ebml = writer();
        ebml.write_uint_fixed(0x81, 0).unwrap();
        ebml.write_uint(0x82, 7).unwrap();

        // Patch the payload of the first element once the true value is known.
        ebml.replace_uint(2, 123_456).unwrap();
        assert_eq!(ebml.pos(), 13);

        let data = finish(ebml);
        let mut reader = EbmlReader::new(BufReader::new(&data));
        assert_eq!(reader.read_uint().unwrap(), (0x81, 123_456));
        assert_eq!(reader.read_uint().unwrap(), (0x82, 7));
    }

    #[test]
    fn buffer_header_then_payload() {
        let payload = vec![0x5a; 200];

        let mut ebml = writer();
        ebml.set_cache(64);
        ebml.write_buffer_header(0xa3, payload.len() as u64).unwrap();
        ebml.write_buffer(&payload).unwrap();

        let data = finish(ebml);
        assert_eq!(&data[..3], &[0xa3, 0x40, 0xc8]);
        assert_eq!(data.len(), 3 + 200);

        let mut reader = EbmlReader::new(BufReader::new(&data));
        let (id, read) = reader.read_binary().unwrap();
        assert_eq!(id, 0xa3);
        assert_eq!(read.as_ref(), &payload[..]);
    }

    #[test]
    fn oversized_element_flushes_cache() {
        let sink = CountingSink { inner: Cursor::new(Vec::new()), writes: 0 };

        let mut ebml = EbmlWriter::new(sink);
        ebml.set_cache(8);
        ebml.write_uint(0x81, 1).unwrap();
        // Does not fit the remaining cache: one push for the batch, one for the element.
        ebml.write_binary(0x82, &[0; 16]).unwrap();

        let sink = ebml.into_inner();
        assert_eq!(sink.writes, 2);
        assert_eq!(sink.inner.get_ref().len(), 3 + 18);
    }

    #[test]
    fn void_reserves_exact_length() {
        for len in [2u64, 64, 127, 128, 129, 300] {
            let mut ebml = writer();
            ebml.write_void(len).unwrap();

            let data = finish(ebml);
            assert_eq!(data.len() as u64, len);
            assert_eq!(data[0], 0xec);

            let mut reader = EbmlReader::new(BufReader::new(&data));
            reader.skip().unwrap();
            assert_eq!(reader.pos(), len);
        }
    }
}
