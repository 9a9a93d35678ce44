use std::path::Path;

use crate::hash::Sha1Reader;

pub fn hex_digest_file<P: AsRef<Path>>(path: P) -> Result<String, std::io::Error> {
    let path = path.as_ref();
    let file = fs_err::File::open(path)?;
    let (hash, size) = Sha1Reader::new(file).digest()?;
    log::trace!("SHA1 of {:?} ({} byte(s)): {}", path, size, hash);
    Ok(hash.to_string())
}
