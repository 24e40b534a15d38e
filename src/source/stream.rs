use crate::block::Block;
use crate::error::{Error, Result};
use crate::seed::Seed;
use crate::source::EntropySource;
use std::fmt;
use std::io::{self, Read};
use tracing::warn;

/// A source that consumes a caller-supplied byte stream.
///
/// Useful for replaying captured entropy or piping in an external hardware
/// generator. Reads block on the underlying stream; once the stream cannot
/// supply a whole block the source fails with
/// [`Error::StreamExhausted`], which is terminal for this instance. Not
/// seedable, not clonable.
pub struct StreamSource {
    reader: Box<dyn Read + Send>,
}

impl StreamSource {
    /// Adapt `reader` into an entropy source.
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        StreamSource {
            reader: Box::new(reader),
        }
    }
}

impl fmt::Debug for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StreamSource")
    }
}

impl EntropySource for StreamSource {
    fn next_block(&mut self) -> Result<Block> {
        let mut bytes = [0u8; Block::BYTES];
        self.reader.read_exact(&mut bytes).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                warn!("entropy stream exhausted mid-request");
                Error::StreamExhausted
            } else {
                Error::Io(e)
            }
        })?;
        Ok(Block::new(bytes))
    }

    fn reseed(&mut self, _seed: &Seed) -> Result<()> {
        Err(Error::SeedRejected)
    }

    fn try_clone(&self) -> Option<Box<dyn EntropySource>> {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn consumes_the_stream_in_block_units() {
        let data: Vec<u8> = (0..32).collect();
        let mut src = StreamSource::new(io::Cursor::new(data));
        assert_eq!(src.next_block().unwrap().u8_at(0), 0);
        assert_eq!(src.next_block().unwrap().u8_at(0), 16);
    }

    #[test]
    fn exhaustion_mid_request_is_an_error() {
        // 20 bytes: one whole block, then a 4-byte tail that cannot satisfy
        // a block request
        let data = vec![0xab; 20];
        let mut src = StreamSource::new(io::Cursor::new(data));
        src.next_block().unwrap();
        assert!(matches!(src.next_block(), Err(Error::StreamExhausted)));
    }

    #[test]
    fn empty_stream_is_exhausted_immediately() {
        let mut src = StreamSource::new(io::empty());
        assert!(matches!(src.next_block(), Err(Error::StreamExhausted)));
    }

    #[test]
    fn refuses_seed_material_and_cloning() {
        let mut src = StreamSource::new(io::empty());
        assert!(matches!(
            src.reseed(&Seed::from(1u64)),
            Err(Error::SeedRejected)
        ));
        assert!(src.try_clone().is_none());
    }
}
