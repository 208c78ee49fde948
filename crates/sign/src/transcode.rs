//! Transcoding between ASN.1/DER and concatenated JWS signature encodings
//!
//! External providers exchange ECDSA signatures as a DER `SEQUENCE` of two
//! `INTEGER`s with variable-width signed contents. The JWS wire format is
//! the fixed-length big-endian concatenation `R || S` with no sign bytes,
//! each half zero-padded to half the total output length. Both conversions
//! are pure functions over byte slices.
//!
//! The DER parser is strict: every tag and length is checked before use,
//! lengths must be minimally encoded, and trailing bytes anywhere in the
//! input are a hard error. Non-minimal `INTEGER` contents (redundant leading
//! zeros) are accepted and normalized, so converting a lax provider's output
//! to concatenated form and back yields the canonical DER encoding.

use jwsig_api::error::TranscodeResult;
use jwsig_api::{Error, Result};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};

/// ASN.1 SEQUENCE tag
const SEQUENCE_TAG: u8 = 0x30;

/// ASN.1 INTEGER tag
const INTEGER_TAG: u8 = 0x02;

/// ECDSA signature components (r, s)
///
/// Both components are held as minimal big-endian unsigned magnitudes: no
/// sign bytes, no redundant leading zeros, at least one byte each. The pair
/// exists only in flight during transcoding and is never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureComponents {
    pub r: Vec<u8>,
    pub s: Vec<u8>,
}

impl SignatureComponents {
    /// Parse signature components from a DER-encoded signature
    pub fn from_der(der: &[u8]) -> TranscodeResult<Self> {
        let (r, s) = parse_signature(der)?;
        Ok(SignatureComponents {
            r: minimal(r.value).to_vec(),
            s: minimal(s.value).to_vec(),
        })
    }

    /// Split a concatenated `R || S` signature into its components
    pub fn from_concat(concat: &[u8]) -> TranscodeResult<Self> {
        if concat.is_empty() || concat.len() % 2 != 0 {
            return Err(Error::InvalidSignatureFormat {
                context: "concatenated signature must have a non-zero even length",
                offset: concat.len(),
                #[cfg(feature = "std")]
                message: format!("got {} bytes", concat.len()),
            });
        }
        let (r, s) = concat.split_at(concat.len() / 2);
        Ok(SignatureComponents {
            r: minimal(r).to_vec(),
            s: minimal(s).to_vec(),
        })
    }

    /// Serialize the components to their canonical DER encoding
    pub fn to_der(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(self.r.len() + self.s.len() + 6);
        push_integer(&mut body, &self.r);
        push_integer(&mut body, &self.s);

        let mut der = Vec::with_capacity(body.len() + 4);
        der.push(SEQUENCE_TAG);
        push_length(&mut der, body.len());
        der.extend_from_slice(&body);
        der
    }
}

/// Transcode a DER-encoded signature into the concatenated JWS encoding
///
/// `output_len` is the total signature size from the algorithm registry;
/// the result is exactly that many bytes, each component left-padded with
/// zeros to `output_len / 2`. A zero or odd `output_len` cannot hold two
/// equal-width components and fails with [`Error::InvalidLength`]; any
/// malformed DER structure, or a component that does not fit the target
/// width, fails with [`Error::InvalidSignatureFormat`].
pub fn der_to_concat(der: &[u8], output_len: usize) -> TranscodeResult<Vec<u8>> {
    if output_len == 0 || output_len % 2 != 0 {
        return Err(Error::InvalidLength {
            context: "concatenated signature width must be a non-zero even byte count",
            expected: (output_len + output_len % 2).max(2),
            actual: output_len,
        });
    }

    let (r, s) = parse_signature(der)?;

    let component_len = output_len / 2;
    let mut concat = vec![0u8; component_len * 2];
    let (r_out, s_out) = concat.split_at_mut(component_len);
    normalize_into(r_out, &r)?;
    normalize_into(s_out, &s)?;
    Ok(concat)
}

/// Transcode a concatenated JWS signature into its canonical DER encoding
///
/// The input length must be even and non-zero; each half is reduced to its
/// minimal unsigned magnitude, sign-extended with a single `0x00` byte when
/// the top bit is set, and the pair is wrapped in a DER `SEQUENCE` whose
/// length encoding mirrors the parser in [`der_to_concat`], making the two
/// true round-trip inverses.
pub fn concat_to_der(concat: &[u8]) -> TranscodeResult<Vec<u8>> {
    SignatureComponents::from_concat(concat).map(|sig| sig.to_der())
}

/* ------------------------------------------------------------------------- */
/*                             DER parsing helpers                           */
/* ------------------------------------------------------------------------- */

/// A raw INTEGER value inside the input buffer, with the offset of its
/// first content byte for diagnostics.
struct RawInteger<'a> {
    value: &'a [u8],
    offset: usize,
}

fn read_u8(der: &[u8], pos: usize) -> Result<u8> {
    der.get(pos)
        .copied()
        .ok_or_else(|| Error::InvalidSignatureFormat {
            context: "DER signature truncated",
            offset: pos,
            #[cfg(feature = "std")]
            message: String::from("input ends before the declared structure is complete"),
        })
}

/// Read a DER length field, short or long form, starting at `pos`
///
/// Returns the content length and the position immediately after the length
/// field. Indefinite and non-minimal encodings are rejected.
fn read_length(der: &[u8], pos: usize) -> Result<(usize, usize)> {
    let first = read_u8(der, pos)?;
    if first & 0x80 == 0 {
        return Ok((usize::from(first), pos + 1));
    }

    let count = usize::from(first & 0x7f);
    if count == 0 {
        return Err(Error::InvalidSignatureFormat {
            context: "indefinite lengths are not permitted in DER",
            offset: pos,
            #[cfg(feature = "std")]
            message: String::from("length byte 0x80 marks a BER indefinite length"),
        });
    }
    if count > core::mem::size_of::<usize>() {
        return Err(Error::InvalidSignatureFormat {
            context: "DER length field too large",
            offset: pos,
            #[cfg(feature = "std")]
            message: format!("{} length bytes exceed the addressable range", count),
        });
    }

    if read_u8(der, pos + 1)? == 0 {
        return Err(Error::InvalidSignatureFormat {
            context: "DER length must use the minimal number of bytes",
            offset: pos + 1,
            #[cfg(feature = "std")]
            message: String::from("long-form length starts with a zero byte"),
        });
    }

    let mut len: usize = 0;
    for i in 0..count {
        len = (len << 8) | usize::from(read_u8(der, pos + 1 + i)?);
    }
    if len < 0x80 {
        return Err(Error::InvalidSignatureFormat {
            context: "DER length below 128 must use the short form",
            offset: pos,
            #[cfg(feature = "std")]
            message: format!("length {} was encoded in long form", len),
        });
    }
    Ok((len, pos + 1 + count))
}

/// Read one INTEGER at `pos`, returning its contents and the position after it
fn read_integer(der: &[u8], pos: usize) -> Result<(RawInteger<'_>, usize)> {
    let tag = read_u8(der, pos)?;
    if tag != INTEGER_TAG {
        return Err(Error::InvalidSignatureFormat {
            context: "expected an INTEGER tag",
            offset: pos,
            #[cfg(feature = "std")]
            message: format!("expected 0x02, found {:#04x}", tag),
        });
    }
    let (len, start) = read_length(der, pos + 1)?;
    if len == 0 {
        return Err(Error::InvalidSignatureFormat {
            context: "INTEGER contents must not be empty",
            offset: pos + 1,
            #[cfg(feature = "std")]
            message: String::from("zero-length INTEGER"),
        });
    }
    if der.len() - start < len {
        return Err(Error::InvalidSignatureFormat {
            context: "INTEGER length exceeds the input",
            offset: start,
            #[cfg(feature = "std")]
            message: format!("{} content bytes declared, {} remain", len, der.len() - start),
        });
    }
    Ok((
        RawInteger {
            value: &der[start..start + len],
            offset: start,
        },
        start + len,
    ))
}

/// Parse a DER `SEQUENCE { INTEGER r, INTEGER s }`, rejecting trailing bytes
/// both after the sequence and inside it
fn parse_signature(der: &[u8]) -> Result<(RawInteger<'_>, RawInteger<'_>)> {
    let tag = read_u8(der, 0)?;
    if tag != SEQUENCE_TAG {
        return Err(Error::InvalidSignatureFormat {
            context: "DER signature must begin with a SEQUENCE tag",
            offset: 0,
            #[cfg(feature = "std")]
            message: format!("expected 0x30, found {:#04x}", tag),
        });
    }

    let (content_len, content_start) = read_length(der, 1)?;
    if der.len() - content_start != content_len {
        return Err(Error::InvalidSignatureFormat {
            context: "SEQUENCE length does not match the input",
            offset: 1,
            #[cfg(feature = "std")]
            message: format!(
                "declared {} content bytes, {} remain",
                content_len,
                der.len() - content_start
            ),
        });
    }

    let (r, after_r) = read_integer(der, content_start)?;
    let (s, after_s) = read_integer(der, after_r)?;
    if after_s != der.len() {
        return Err(Error::InvalidSignatureFormat {
            context: "trailing data after the second INTEGER",
            offset: after_s,
            #[cfg(feature = "std")]
            message: format!("{} unconsumed bytes", der.len() - after_s),
        });
    }
    Ok((r, s))
}

/* ------------------------------------------------------------------------- */
/*                       Normalization and DER emission                      */
/* ------------------------------------------------------------------------- */

/// Strip redundant leading zeros, keeping at least one byte
fn minimal(bytes: &[u8]) -> &[u8] {
    let redundant = bytes
        .iter()
        .take_while(|&&b| b == 0)
        .count()
        .min(bytes.len() - 1);
    &bytes[redundant..]
}

/// Right-align an INTEGER value into a fixed-width component slot
///
/// A single leading `0x00` sign byte may push the DER encoding one byte over
/// the component width; anything longer is out of range for the target curve.
fn normalize_into(dst: &mut [u8], int: &RawInteger<'_>) -> Result<()> {
    let mut value = int.value;
    if value.len() > dst.len() && value[0] == 0x00 {
        value = &value[1..];
    }
    if value.len() > dst.len() {
        return Err(Error::InvalidSignatureFormat {
            context: "signature component out of range for the target curve",
            offset: int.offset,
            #[cfg(feature = "std")]
            message: format!(
                "component occupies {} bytes, at most {} allowed",
                value.len(),
                dst.len()
            ),
        });
    }
    let pad = dst.len() - value.len();
    dst[pad..].copy_from_slice(value);
    Ok(())
}

/// Append one INTEGER, prepending a `0x00` sign byte when the top bit of the
/// minimal magnitude is set
fn push_integer(out: &mut Vec<u8>, value: &[u8]) {
    let value = minimal(if value.is_empty() { &[0x00] } else { value });
    let sign = usize::from(value[0] & 0x80 != 0);

    out.push(INTEGER_TAG);
    push_length(out, value.len() + sign);
    if sign == 1 {
        out.push(0x00);
    }
    out.extend_from_slice(value);
}

/// Append a DER length field: short form below 128, minimal long form above
fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let bytes = len.to_be_bytes();
        let skip = bytes.iter().take_while(|&&b| b == 0).count();
        out.push(0x80 | (bytes.len() - skip) as u8);
        out.extend_from_slice(&bytes[skip..]);
    }
}
