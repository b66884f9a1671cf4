//! Recorded SHA-512 test vectors.
//!
//! [`integrity_test`] recomputes every entry of [`VECTORS`] and fails on the
//! first mismatch, reporting expected and actual hex.

use tracing::debug;

use crate::chain::bloat;
use crate::error::{BloatError, Result};
use crate::hash::Sha512Hasher;
use crate::multi::multibloat;

/// A recorded output of one variant over SHA-512.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector {
    /// Name reported on failure.
    pub name: &'static str,
    /// Input key.
    pub key: &'static [u8],
    /// Chain length.
    pub iterations: usize,
    /// Stream count for `multibloat`, `None` for plain `bloat`.
    pub streams: Option<usize>,
    /// Expected output as lowercase hex.
    pub expected: &'static str,
}

/// The recorded vectors.
pub const VECTORS: [TestVector; 2] = [
    TestVector {
        name: "bloat-sha512-1024",
        key: b"test",
        iterations: 1024,
        streams: None,
        expected: concat!(
            "12054e5c7c35696b662caf49edace500367c7b5971486ba4cabe25c3e7a070f1",
            "2eb4b7772c8e3f29dd8939a23ea3be36c011751d8334293798654296757c5263"
        ),
    },
    TestVector {
        name: "multibloat-sha512-1024x4",
        key: b"test",
        iterations: 1024,
        streams: Some(4),
        expected: concat!(
            "c2335a69537f9cd2adcf7d9846a3adf4ffcb22261f958e9de8ba1b82217d3591",
            "8dd35fd19cf0c3eee1a2d12eaedc230acd1f01b83cf70aed2242c8d6ec4c23da"
        ),
    },
];

/// Recomputes a single vector.
///
/// # Errors
///
/// Returns [`BloatError::ConformanceFailure`] if the output differs, or any
/// error raised by the variant itself.
pub fn check_vector(vector: &TestVector) -> Result<()> {
    let actual = match vector.streams {
        None => bloat::<Sha512Hasher>(vector.key, vector.iterations)?,
        Some(streams) => multibloat::<Sha512Hasher>(vector.key, vector.iterations, streams)?,
    };

    let actual = actual.to_hex();
    if actual != vector.expected {
        return Err(BloatError::ConformanceFailure {
            vector: vector.name,
            expected: vector.expected.to_string(),
            actual,
        });
    }
    debug!(vector = vector.name, "conformance vector ok");
    Ok(())
}

/// Checks every recorded vector.
///
/// # Example
///
/// ```
/// keybloat::integrity_test()?;
/// # Ok::<(), keybloat::BloatError>(())
/// ```
pub fn integrity_test() -> Result<()> {
    VECTORS.iter().try_for_each(check_vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity() {
        integrity_test().unwrap();
    }

    #[test]
    fn test_each_vector() {
        for vector in &VECTORS {
            check_vector(vector).unwrap();
        }
    }

    #[test]
    fn test_mismatch_reports_hex() {
        let tampered = TestVector {
            iterations: 1023,
            ..VECTORS[0]
        };
        let err = check_vector(&tampered).unwrap_err();
        match err {
            BloatError::ConformanceFailure {
                vector,
                expected,
                actual,
            } => {
                assert_eq!(vector, "bloat-sha512-1024");
                assert_eq!(expected, VECTORS[0].expected);
                assert_eq!(actual.len(), 128);
                assert_ne!(actual, expected);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_vector_propagates_parameter_error() {
        let broken = TestVector {
            streams: Some(0),
            ..VECTORS[1]
        };
        assert!(matches!(
            check_vector(&broken),
            Err(BloatError::InvalidParameter { name: "streams", .. })
        ));
    }
}
