use std::io::Read;

use crate::hash::Sha1Hash;
use crate::hash::Sha1Hasher;

pub struct Sha1Reader<R: Read> {
    reader: R,
    hasher: Sha1Hasher,
    nread: u64,
}

impl<R: Read> Sha1Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            hasher: Sha1Hasher::new(),
            nread: 0,
        }
    }

    // Reads the rest of the input and returns the hash of everything read so far.
    pub fn digest(mut self) -> Result<(Sha1Hash, u64), std::io::Error> {
        std::io::copy(&mut self, &mut std::io::sink())?;
        log::trace!("Hashed {} byte(s)", self.nread);
        Ok((self.hasher.finalize(), self.nread))
    }
}

impl<R: Read> Read for Sha1Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, std::io::Error> {
        let n = self.reader.read(buf)?;
        self.nread += n as u64;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> Result<usize, std::io::Error> {
            Err(ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn passthrough() {
        let data = b"fixture bytes";
        let mut reader = Sha1Reader::new(&data[..]);
        let mut head = [0_u8; 7];
        reader.read_exact(&mut head).unwrap();
        assert_eq!(b"fixture", &head);
        let (hash, size) = reader.digest().unwrap();
        assert_eq!(data.len() as u64, size);
        assert_eq!(Sha1Hasher::compute(data), hash);
    }

    #[test]
    fn empty() {
        let (hash, size) = Sha1Reader::new(&b""[..]).digest().unwrap();
        assert_eq!(0, size);
        assert_eq!("da39a3ee5e6b4b0d3255bfef95601890afd80709", hash.to_string());
    }

    #[test]
    fn error_is_propagated() {
        let error = Sha1Reader::new(FailingReader).digest().unwrap_err();
        assert_eq!(ErrorKind::BrokenPipe, error.kind());
    }
}
