//! Binary encodings and hash digests.
//!
//! Length bounds on binary kinds count decoded bytes. They are converted to
//! encoded character counts before being emitted, so `.min()`/`.max()`
//! constrain the string Zod actually sees.

use super::push_call;
use crate::model::{BinaryType, HashType};

/// Alphabet a byte string is encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base32,
    Base36,
    Base64,
    Base64Url,
    Hex,
}

impl Encoding {
    /// Encoded character count for `bytes` bytes of payload.
    ///
    /// Base32 and base64 round to the nearest whole character; padding is
    /// not counted. Base36 has no fixed block size, so the ratio
    /// `ln 256 / ln 36` is rounded up.
    pub fn encoded_len(self, bytes: u64) -> u64 {
        match self {
            Encoding::Base32 => bytes.saturating_mul(8).saturating_add(4) / 5,
            Encoding::Base36 => {
                let ratio = 256f64.ln() / 36f64.ln();
                (bytes as f64 * ratio).ceil() as u64
            }
            Encoding::Base64 | Encoding::Base64Url => {
                bytes.saturating_mul(4).saturating_add(2) / 3
            }
            Encoding::Hex => bytes.saturating_mul(2),
        }
    }

    fn base(self) -> &'static str {
        match self {
            Encoding::Base32 => "z.string().regex(/^[A-Z2-7]+=*$/)",
            Encoding::Base36 => "z.string().regex(/^[0-9A-Z]+$/i)",
            Encoding::Base64 => "z.string().base64()",
            Encoding::Base64Url => "z.string().base64url()",
            Encoding::Hex => "z.string().regex(/^[0-9A-Fa-f]+$/)",
        }
    }
}

/// Encoded string with decoded-byte bounds converted to character bounds.
pub fn encoded(encoding: Encoding, ty: &BinaryType) -> String {
    let mut schema = encoding.base().to_string();

    push_call(
        &mut schema,
        "min",
        ty.min_length.map(|b| encoding.encoded_len(b)),
    );
    push_call(
        &mut schema,
        "max",
        ty.max_length.map(|b| encoding.encoded_len(b)),
    );

    schema
}

pub fn base32(ty: &BinaryType) -> String {
    encoded(Encoding::Base32, ty)
}

pub fn base36(ty: &BinaryType) -> String {
    encoded(Encoding::Base36, ty)
}

pub fn base64(ty: &BinaryType) -> String {
    encoded(Encoding::Base64, ty)
}

pub fn base64url(ty: &BinaryType) -> String {
    encoded(Encoding::Base64Url, ty)
}

pub fn hex(ty: &BinaryType) -> String {
    encoded(Encoding::Hex, ty)
}

/// Digest length used for algorithms not in the table.
pub const DEFAULT_DIGEST_HEX_LEN: u32 = 64;

/// Hex character count of a digest, if the algorithm is known.
///
/// Names are matched exactly: `"MD5"` is not `"md5"`.
pub fn digest_hex_len(algorithm: &str) -> Option<u32> {
    let len = match algorithm {
        "md5" => 32,
        "sha1" => 40,
        "sha128" => 32,
        "sha224" => 56,
        "sha256" => 64,
        "sha384" => 96,
        "sha512" => 128,
        "sha3-224" => 56,
        "sha3-256" => 64,
        "sha3-384" => 96,
        "sha3-512" => 128,
        _ => return None,
    };
    Some(len)
}

/// Fixed-length hex digest.
pub fn hash(ty: &HashType) -> String {
    let len = digest_hex_len(&ty.algorithm).unwrap_or_else(|| {
        tracing::debug!(
            algorithm = %ty.algorithm,
            len = DEFAULT_DIGEST_HEX_LEN,
            "Unknown hash algorithm, using default digest length"
        );
        DEFAULT_DIGEST_HEX_LEN
    });
    format!("z.string().regex(/^[0-9A-Fa-f]{{{}}}$/)", len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(algorithm: &str) -> String {
        hash(&HashType {
            algorithm: algorithm.to_string(),
            examples: vec![],
        })
    }

    #[test]
    fn test_unbounded_bases() {
        let plain = BinaryType::default();
        assert_eq!(base32(&plain), "z.string().regex(/^[A-Z2-7]+=*$/)");
        assert_eq!(base36(&plain), "z.string().regex(/^[0-9A-Z]+$/i)");
        assert_eq!(base64(&plain), "z.string().base64()");
        assert_eq!(base64url(&plain), "z.string().base64url()");
        assert_eq!(hex(&plain), "z.string().regex(/^[0-9A-Fa-f]+$/)");
    }

    #[test]
    fn test_base64_bounds_are_converted() {
        let ty = BinaryType::bytes(Some(3), Some(6));
        assert_eq!(base64(&ty), "z.string().base64().min(4).max(8)");
    }

    #[test]
    fn test_hex_bounds_are_doubled() {
        let ty = BinaryType::bytes(Some(16), Some(32));
        assert_eq!(hex(&ty), "z.string().regex(/^[0-9A-Fa-f]+$/).min(32).max(64)");
    }

    #[test]
    fn test_only_present_bounds_are_emitted() {
        let ty = BinaryType::bytes(None, Some(10));
        assert_eq!(base32(&ty), "z.string().regex(/^[A-Z2-7]+=*$/).max(16)");
    }

    #[test]
    fn test_encoded_len_table() {
        assert_eq!(Encoding::Base32.encoded_len(0), 0);
        assert_eq!(Encoding::Base32.encoded_len(1), 2);
        assert_eq!(Encoding::Base32.encoded_len(5), 8);
        assert_eq!(Encoding::Base64.encoded_len(1), 2);
        assert_eq!(Encoding::Base64.encoded_len(2), 3);
        assert_eq!(Encoding::Base64Url.encoded_len(3), 4);
        assert_eq!(Encoding::Base36.encoded_len(0), 0);
        assert_eq!(Encoding::Base36.encoded_len(1), 2);
        assert_eq!(Encoding::Base36.encoded_len(8), 13);
        assert_eq!(Encoding::Hex.encoded_len(7), 14);
    }

    #[test]
    fn test_known_digest_lengths() {
        assert_eq!(hash_of("md5"), "z.string().regex(/^[0-9A-Fa-f]{32}$/)");
        assert_eq!(hash_of("sha1"), "z.string().regex(/^[0-9A-Fa-f]{40}$/)");
        assert_eq!(hash_of("sha512"), "z.string().regex(/^[0-9A-Fa-f]{128}$/)");
        assert_eq!(hash_of("sha3-384"), "z.string().regex(/^[0-9A-Fa-f]{96}$/)");
        assert_eq!(hash_of("sha256"), "z.string().regex(/^[0-9A-Fa-f]{64}$/)");
    }

    #[test]
    fn test_digest_names_are_case_sensitive() {
        assert_eq!(digest_hex_len("MD5"), None);
        assert_eq!(hash_of("MD5"), "z.string().regex(/^[0-9A-Fa-f]{64}$/)");
        assert_eq!(hash_of("Sha1"), "z.string().regex(/^[0-9A-Fa-f]{64}$/)");
    }

    #[test]
    fn test_unknown_digest_uses_default() {
        assert_eq!(digest_hex_len("whirlpool"), None);
        assert_eq!(hash_of("whirlpool"), "z.string().regex(/^[0-9A-Fa-f]{64}$/)");
    }
}
