use crate::artifacts::objects::object_id::ObjectId;
use sha1::{Digest, Sha1};

/// SHA-1 fingerprint of `data`
///
/// To hash several parts together, build one buffer with
/// [`compose`](crate::artifacts::core::chunk::compose) first.
pub fn digest(data: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(data);

    ObjectId::from_sha1(hasher.finalize())
}

/// SHA-1 fingerprint of the UTF-8 bytes of `text`
pub fn digest_str(text: &str) -> ObjectId {
    digest(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::{prop_assert, prop_assert_eq, prop_assume, proptest};
    use rstest::rstest;

    proptest! {
        #[test]
        fn is_forty_lowercase_hex_chars(data in vec(proptest::num::u8::ANY, 0..512)) {
            let oid = digest(&data);

            prop_assert_eq!(oid.as_ref().len(), 40);
            prop_assert!(oid.as_ref().bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
        }

        #[test]
        fn is_deterministic(data in vec(proptest::num::u8::ANY, 0..512)) {
            prop_assert_eq!(digest(&data), digest(&data));
        }

        #[test]
        fn distinct_inputs_give_distinct_fingerprints(
            a in vec(proptest::num::u8::ANY, 0..64),
            b in vec(proptest::num::u8::ANY, 0..64)
        ) {
            prop_assume!(a != b);
            prop_assert!(digest(&a) != digest(&b));
        }

        #[test]
        fn text_is_hashed_as_utf8(text in "\\PC*") {
            prop_assert_eq!(digest_str(&text), digest(text.as_bytes()));
        }
    }

    #[rstest]
    #[case("", "da39a3ee5e6b4b0d3255bfef95601890afd80709")]
    #[case("abc", "a9993e364706816aba3e25717850c26c9cd0d89d")]
    #[case(
        "The quick brown fox jumps over the lazy dog",
        "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
    )]
    fn matches_known_digests(#[case] text: &str, #[case] expected: &str) {
        pretty_assertions::assert_eq!(digest_str(text).as_ref(), expected);
    }

    #[test]
    fn empty_bytes_and_empty_text_agree() {
        assert_eq!(digest(&[]), digest_str(""));
    }
}
