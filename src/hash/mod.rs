mod digest;
mod file;
mod reader;
mod sha1_hash;

pub use self::digest::*;
pub use self::file::*;
pub use self::reader::*;
pub use self::sha1_hash::*;
