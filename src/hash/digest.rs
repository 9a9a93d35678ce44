use crate::hash::Sha1Hash;

#[derive(Default, Clone)]
pub struct Sha1Hasher(sha1::Sha1);

impl Sha1Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        sha1::Digest::update(&mut self.0, data);
        self
    }

    pub fn finalize(self) -> Sha1Hash {
        Sha1Hash::new(sha1::Digest::finalize(self.0).into())
    }

    pub fn compute(data: &[u8]) -> Sha1Hash {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

/// Returns SHA1 of `data` as 40 lowercase hex characters.
///
/// ```
/// assert_eq!(
///     "a9993e364706816aba3e25717850c26c9cd0d89d",
///     fixture_digest::hex_digest(b"abc")
/// );
/// ```
pub fn hex_digest(data: &[u8]) -> String {
    Sha1Hasher::compute(data).to_hex()
}
