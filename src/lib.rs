//! SHA1 hex digests for test assertions on fixtures and cache keys.
//!
//! ```
//! use fixture_digest::hex_digest;
//!
//! assert_eq!("da39a3ee5e6b4b0d3255bfef95601890afd80709", hex_digest(&[]));
//! ```

pub mod hash;

pub use self::hash::hex_digest;
pub use self::hash::hex_digest_file;
pub use self::hash::Sha1Hash;
