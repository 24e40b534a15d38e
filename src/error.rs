use thiserror::Error;

/// The error type for every fallible operation in this crate.
///
/// All errors are raised synchronously at the offending call; nothing is
/// retried internally. The internal redraw loop of rejection sampling is not
/// an error and never surfaces here. Every variant except
/// [`Error::StreamExhausted`] can be recovered from by fixing the arguments
/// or source state and retrying the call; stream exhaustion is terminal for
/// that source instance.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A ranged operation was given a zero (or non-positive) range.
    #[error("range must be positive")]
    EmptyRange,

    /// `min + range - 1` is not representable in the destination type.
    #[error("range upper bound exceeds the destination type's maximum")]
    RangeOverflow,

    /// An `(offset, count)` pair does not describe a sub-range of the buffer.
    #[error("sub-range out of bounds: offset {offset} + count {count} exceeds length {len}")]
    Bounds {
        /// First element of the requested sub-range.
        offset: usize,
        /// Number of elements in the requested sub-range.
        count: usize,
        /// Actual length of the buffer.
        len: usize,
    },

    /// A ranged xor-combine was given a range that is not a power of two.
    /// Xor-combining with any other modulus would not preserve uniformity.
    #[error("xor-combining requires a power-of-two range")]
    NotPowerOfTwo,

    /// The source backing this generator cannot be faithfully duplicated.
    #[error("entropy source cannot be cloned")]
    Unclonable,

    /// A cryptographic source was used before it was seeded.
    #[error("cryptographic source used before seeding")]
    Unseeded,

    /// The source draws from an external stream (host OS or caller-supplied
    /// bytes) and cannot honor seed material deterministically.
    #[error("entropy source does not accept seed material")]
    SeedRejected,

    /// The source was used after its context was disposed.
    #[error("entropy source used after dispose")]
    Disposed,

    /// A caller-supplied byte stream ran out of bytes mid-request.
    #[error("entropy stream exhausted")]
    StreamExhausted,

    /// The destination passed to the runtime-dispatched state derivation is
    /// not one of the supported element types.
    #[error("destination element type is not supported")]
    ElementType,

    /// Reading from a caller-supplied byte stream failed with an I/O error
    /// other than end-of-stream.
    #[error("reading from the entropy stream failed")]
    Io(#[from] std::io::Error),
}

/// Alias for `std::result::Result` specialized to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
