use half::f16;
use num_bigint::{BigInt, Sign};

use crate::error::{Error, Result};
use crate::options::{Mode, Options};
use crate::value::CborValue;

const MAJOR_UINT: u8 = 0;
const MAJOR_NEGINT: u8 = 1;
const MAJOR_BYTES: u8 = 2;
const MAJOR_TEXT: u8 = 3;
const MAJOR_ARRAY: u8 = 4;
const MAJOR_MAP: u8 = 5;
const MAJOR_TAG: u8 = 6;
const MAJOR_SIMPLE: u8 = 7;

const BREAK: u8 = 0xFF;

/// Encodes `value` to bytes under `opts`. Encoding never fails on a
/// well-formed [`CborValue`].
pub fn encode(value: &CborValue, opts: &Options) -> Vec<u8> {
    let mut out = Vec::new();
    encode_value(&mut out, value, opts);
    out
}

/// Decodes exactly one top-level value from `bytes`, failing if any bytes
/// remain afterwards.
pub fn decode(bytes: &[u8], opts: &Options) -> Result<CborValue> {
    let mut reader = Reader::new(bytes);
    let value = reader.decode_value(opts)?;
    if reader.pos != reader.buf.len() {
        return Err(Error::TrailingData);
    }
    Ok(value)
}

/// Decodes one top-level value, returning the number of bytes consumed.
/// Used by callers that embed CBOR inside a larger byte stream (e.g. Byron
/// addresses wrapping a CBOR payload after their header byte).
pub fn decode_partial(bytes: &[u8], opts: &Options) -> Result<(CborValue, usize)> {
    let mut reader = Reader::new(bytes);
    let value = reader.decode_value(opts)?;
    Ok((value, reader.pos))
}

fn write_head(out: &mut Vec<u8>, major: u8, arg: u64) {
    let b0 = major << 5;
    if arg < 24 {
        out.push(b0 | arg as u8);
    } else if arg <= u8::MAX as u64 {
        out.push(b0 | 24);
        out.push(arg as u8);
    } else if arg <= u16::MAX as u64 {
        out.push(b0 | 25);
        out.extend_from_slice(&(arg as u16).to_be_bytes());
    } else if arg <= u32::MAX as u64 {
        out.push(b0 | 26);
        out.extend_from_slice(&(arg as u32).to_be_bytes());
    } else {
        out.push(b0 | 27);
        out.extend_from_slice(&arg.to_be_bytes());
    }
}

fn encode_value(out: &mut Vec<u8>, value: &CborValue, opts: &Options) {
    match value {
        CborValue::Uint(n) => write_head(out, MAJOR_UINT, *n),
        CborValue::NegInt(n) => write_head(out, MAJOR_NEGINT, *n),
        CborValue::BigInt(b) => encode_bigint(out, b, opts),
        CborValue::Bytes(b) => encode_bytes(out, b, opts),
        CborValue::Text(s) => {
            write_head(out, MAJOR_TEXT, s.len() as u64);
            out.extend_from_slice(s.as_bytes());
        }
        CborValue::Array(items) => encode_array(out, items, opts),
        CborValue::Map(pairs) => encode_map(out, pairs, opts),
        CborValue::Tag(tag, inner) => {
            write_head(out, MAJOR_TAG, *tag);
            encode_value(out, inner, opts);
        }
        CborValue::Bool(false) => out.push(0xF4),
        CborValue::Bool(true) => out.push(0xF5),
        CborValue::Null => out.push(0xF6),
        CborValue::Undefined => out.push(0xF7),
        CborValue::Float16(f) => {
            out.push(0xF9);
            out.extend_from_slice(&f.to_bits().to_be_bytes());
        }
        CborValue::Float32(f) => {
            out.push(0xFA);
            out.extend_from_slice(&f.to_bits().to_be_bytes());
        }
        CborValue::Float64(f) => {
            out.push(0xFB);
            out.extend_from_slice(&f.to_bits().to_be_bytes());
        }
    }
}

fn encode_bigint(out: &mut Vec<u8>, b: &BigInt, opts: &Options) {
    let (tag, magnitude) = match b.sign() {
        Sign::Minus => {
            let magnitude = -(b + BigInt::from(1));
            (3u64, magnitude)
        }
        _ => (2u64, b.clone()),
    };
    write_head(out, MAJOR_TAG, tag);
    let (_, bytes) = magnitude.to_bytes_be();
    encode_bytes(out, &bytes, opts);
}

fn encode_bytes(out: &mut Vec<u8>, bytes: &[u8], opts: &Options) {
    // Unlike array/map indefinite-ness, byte-string chunking is not gated by
    // `mode` — Plutus Data's canonical bytestring encoding still chunks
    // anything over the threshold (see `cardano_primitives::plutus_data`).
    if bytes.len() as u64 > opts.bytes_threshold {
        out.push((MAJOR_BYTES << 5) | 31);
        for chunk in bytes.chunks(opts.bytes_threshold.max(1) as usize) {
            write_head(out, MAJOR_BYTES, chunk.len() as u64);
            out.extend_from_slice(chunk);
        }
        out.push(BREAK);
    } else {
        write_head(out, MAJOR_BYTES, bytes.len() as u64);
        out.extend_from_slice(bytes);
    }
}

fn encode_array(out: &mut Vec<u8>, items: &[CborValue], opts: &Options) {
    let indefinite =
        opts.mode == Mode::Conway && items.len() as u64 > opts.array_threshold;
    if indefinite {
        out.push((MAJOR_ARRAY << 5) | 31);
        for item in items {
            encode_value(out, item, opts);
        }
        out.push(BREAK);
    } else {
        write_head(out, MAJOR_ARRAY, items.len() as u64);
        for item in items {
            encode_value(out, item, opts);
        }
    }
}

fn encode_map(out: &mut Vec<u8>, pairs: &[(CborValue, CborValue)], opts: &Options) {
    match opts.mode {
        Mode::Canonical => {
            let canonical_opts = opts.as_canonical();
            let mut sorted: Vec<(Vec<u8>, &CborValue)> = pairs
                .iter()
                .map(|(k, v)| (encode(k, &canonical_opts), v))
                .collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));

            write_head(out, MAJOR_MAP, pairs.len() as u64);
            for (key_bytes, value) in &sorted {
                out.extend_from_slice(key_bytes);
                encode_value(out, value, opts);
            }
        }
        Mode::Conway => {
            let indefinite = pairs.len() as u64 > opts.map_threshold;
            if indefinite {
                out.push((MAJOR_MAP << 5) | 31);
                for (k, v) in pairs {
                    encode_value(out, k, opts);
                    encode_value(out, v, opts);
                }
                out.push(BREAK);
            } else {
                write_head(out, MAJOR_MAP, pairs.len() as u64);
                for (k, v) in pairs {
                    encode_value(out, k, opts);
                    encode_value(out, v, opts);
                }
            }
        }
    }
}

struct Head {
    major: u8,
    /// The raw additional-info nibble (0-31), kept alongside `arg` because
    /// major type 7 uses it to mean "payload width" rather than "integer
    /// argument width".
    info: u8,
    arg: u64,
    indefinite: bool,
    minimal: bool,
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn peek_u8(&self) -> Result<u8> {
        self.buf.get(self.pos).copied().ok_or(Error::UnexpectedEnd)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos.checked_add(n).ok_or(Error::UnexpectedEnd)?;
        let slice = self.buf.get(self.pos..end).ok_or(Error::UnexpectedEnd)?;
        self.pos = end;
        Ok(slice)
    }

    fn read_head(&mut self) -> Result<Head> {
        let b0 = self.take(1)?[0];
        let major = b0 >> 5;
        let info = b0 & 0x1F;

        let (arg, minimal, indefinite) = match info {
            0..=23 => (info as u64, true, false),
            24 => {
                let v = self.take(1)?[0] as u64;
                (v, v >= 24, false)
            }
            25 => {
                let bytes = self.take(2)?;
                let v = u16::from_be_bytes([bytes[0], bytes[1]]) as u64;
                (v, v > u8::MAX as u64, false)
            }
            26 => {
                let bytes = self.take(4)?;
                let v = u32::from_be_bytes(bytes.try_into().unwrap()) as u64;
                (v, v > u16::MAX as u64, false)
            }
            27 => {
                let bytes = self.take(8)?;
                let v = u64::from_be_bytes(bytes.try_into().unwrap());
                (v, v > u32::MAX as u64, false)
            }
            28..=30 => return Err(Error::InvalidHead(b0)),
            // Indefinite-length markers are themselves the non-canonical
            // form: `Mode::Canonical` always requires definite lengths.
            31 => (0, false, true),
            _ => unreachable!("3-bit additional info field"),
        };

        Ok(Head {
            major,
            info,
            arg,
            indefinite,
            minimal,
        })
    }

    fn check_canonical(&self, head: &Head, opts: &Options) -> Result<()> {
        // Indefinite-length byte/text strings are the legitimate chunked
        // form `encode_bytes` emits past `bytes_threshold` in every mode
        // (see its doc comment) — only an indefinite array/map, or a
        // non-minimal integer/length head, is actually non-canonical.
        let chunked_bytes_or_text =
            head.indefinite && matches!(head.major, MAJOR_BYTES | MAJOR_TEXT);
        if opts.mode == Mode::Canonical && !head.minimal && !chunked_bytes_or_text {
            return Err(Error::NonCanonicalHead);
        }
        Ok(())
    }

    fn check_len(&self, len: u64, opts: &Options) -> Result<()> {
        if len > opts.max_items {
            return Err(Error::MaxItemsExceeded {
                found: len,
                max: opts.max_items,
            });
        }
        Ok(())
    }

    fn decode_value(&mut self, opts: &Options) -> Result<CborValue> {
        let head = self.read_head()?;
        if head.major != MAJOR_SIMPLE {
            self.check_canonical(&head, opts)?;
        }

        match head.major {
            MAJOR_UINT if !head.indefinite => Ok(CborValue::Uint(head.arg)),
            MAJOR_NEGINT if !head.indefinite => Ok(CborValue::NegInt(head.arg)),
            MAJOR_BYTES => Ok(CborValue::Bytes(self.decode_bytes_payload(&head, opts)?)),
            MAJOR_TEXT => {
                let bytes = self.decode_bytes_payload(&head, opts)?;
                let text = String::from_utf8(bytes).map_err(|_| Error::OverlongUtf8)?;
                Ok(CborValue::Text(text))
            }
            MAJOR_ARRAY => self.decode_array_payload(&head, opts),
            MAJOR_MAP => self.decode_map_payload(&head, opts),
            MAJOR_TAG if !head.indefinite => self.decode_tag_payload(head.arg, opts),
            MAJOR_SIMPLE => self.decode_simple_payload(&head),
            _ => Err(Error::UnknownMajor(head.major)),
        }
    }

    fn decode_bytes_payload(&mut self, head: &Head, opts: &Options) -> Result<Vec<u8>> {
        if !head.indefinite {
            self.check_bytes_len(head.arg, opts)?;
            Ok(self.take(head.arg as usize)?.to_vec())
        } else {
            let mut out = Vec::new();
            loop {
                if self.peek_u8()? == BREAK {
                    self.pos += 1;
                    break;
                }
                let chunk_head = self.read_head()?;
                if chunk_head.major != head.major || chunk_head.indefinite {
                    return Err(Error::InvalidHead(self.buf[self.pos.saturating_sub(1)]));
                }
                self.check_canonical(&chunk_head, opts)?;
                let chunk = self.take(chunk_head.arg as usize)?;
                out.extend_from_slice(chunk);
                self.check_bytes_len(out.len() as u64, opts)?;
            }
            Ok(out)
        }
    }

    fn check_bytes_len(&self, len: u64, opts: &Options) -> Result<()> {
        if len > opts.max_bytes {
            return Err(Error::MaxBytesExceeded {
                found: len,
                max: opts.max_bytes,
            });
        }
        Ok(())
    }

    fn decode_array_payload(&mut self, head: &Head, opts: &Options) -> Result<CborValue> {
        let mut items = Vec::new();
        if !head.indefinite {
            self.check_len(head.arg, opts)?;
            for _ in 0..head.arg {
                items.push(self.decode_value(opts)?);
            }
        } else {
            loop {
                if self.peek_u8()? == BREAK {
                    self.pos += 1;
                    break;
                }
                items.push(self.decode_value(opts)?);
                self.check_len(items.len() as u64, opts)?;
            }
        }
        Ok(CborValue::Array(items))
    }

    fn decode_map_payload(&mut self, head: &Head, opts: &Options) -> Result<CborValue> {
        let mut pairs = Vec::new();
        if !head.indefinite {
            self.check_len(head.arg, opts)?;
            for _ in 0..head.arg {
                let k = self.decode_value(opts)?;
                let v = self.decode_value(opts)?;
                pairs.push((k, v));
            }
        } else {
            loop {
                if self.peek_u8()? == BREAK {
                    self.pos += 1;
                    break;
                }
                let k = self.decode_value(opts)?;
                let v = self.decode_value(opts)?;
                pairs.push((k, v));
                self.check_len(pairs.len() as u64, opts)?;
            }
        }
        Ok(CborValue::Map(pairs))
    }

    fn decode_tag_payload(&mut self, tag: u64, opts: &Options) -> Result<CborValue> {
        if tag == 2 || tag == 3 {
            let head = self.read_head()?;
            if head.major != MAJOR_BYTES {
                return Err(Error::TagMismatch { found: tag });
            }
            self.check_canonical(&head, opts)?;
            let magnitude_bytes = self.decode_bytes_payload(&head, opts)?;
            let magnitude = BigInt::from_bytes_be(Sign::Plus, &magnitude_bytes);
            let value = if tag == 2 {
                magnitude
            } else {
                -(magnitude + BigInt::from(1))
            };
            Ok(CborValue::BigInt(value))
        } else {
            let inner = self.decode_value(opts)?;
            Ok(CborValue::Tag(tag, Box::new(inner)))
        }
    }

    fn decode_simple_payload(&mut self, head: &Head) -> Result<CborValue> {
        // For major type 7 the additional-info nibble selects the payload
        // shape directly; 24-27 carry their bytes as the float bit pattern
        // rather than a length, already captured in `head.arg` by read_head.
        match head.info {
            20 => Ok(CborValue::Bool(false)),
            21 => Ok(CborValue::Bool(true)),
            22 => Ok(CborValue::Null),
            23 => Ok(CborValue::Undefined),
            25 => Ok(CborValue::Float16(f16::from_bits(head.arg as u16))),
            26 => Ok(CborValue::Float32(f32::from_bits(head.arg as u32))),
            27 => Ok(CborValue::Float64(f64::from_bits(head.arg))),
            _ => Err(Error::UnknownMajor(MAJOR_SIMPLE)),
        }
    }
}
