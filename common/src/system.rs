use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArpSourceError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read ARP listing from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Anything that can produce the raw text of an `arp -an` style listing.
pub trait ArpSource {
    fn raw_table(&self) -> Result<String, ArpSourceError>;
}

/// Canned listing text, mostly useful for tests and replaying captures.
impl ArpSource for str {
    fn raw_table(&self) -> Result<String, ArpSourceError> {
        Ok(self.to_string())
    }
}

impl ArpSource for String {
    fn raw_table(&self) -> Result<String, ArpSourceError> {
        Ok(self.clone())
    }
}
