//! Tests for input hashing and the digest byte container

#[cfg(test)]
mod tests {

    use identikon::pipeline::digest::{DIGEST_LENGTH, DigestBytes, hash_input};

    // Reference vectors from RFC 1321
    #[test]
    fn test_hash_input_matches_known_vectors() {
        assert_eq!(
            hash_input("").to_hex(),
            "d41d8cd98f00b204e9800998ecf8427e",
            "empty string must still produce a deterministic digest"
        );
        assert_eq!(
            hash_input("abc").to_hex(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn test_digest_is_fixed_length() {
        assert_eq!(DIGEST_LENGTH, 16);
        assert_eq!(hash_input("alice").as_bytes().len(), DIGEST_LENGTH);
        assert_eq!(hash_input("").as_bytes().len(), DIGEST_LENGTH);
    }

    #[test]
    fn test_hash_input_is_deterministic() {
        assert_eq!(hash_input("alice"), hash_input("alice"));
        assert_ne!(hash_input("alice"), hash_input("bob"));
    }

    #[test]
    fn test_leading_triplet_returns_first_bytes() {
        let bytes = DigestBytes::from_bytes([
            10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150, 160,
        ]);

        assert_eq!(bytes.leading_triplet(), [10, 20, 30]);
    }

    #[test]
    fn test_from_bytes_round_trips() {
        let raw = [7u8; 16];
        let bytes = DigestBytes::from_bytes(raw);

        assert_eq!(*bytes.as_bytes(), raw);
        assert_eq!(bytes.to_hex(), "07".repeat(16));
    }
}
