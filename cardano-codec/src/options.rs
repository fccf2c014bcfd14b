/// The two CBOR profiles this codec understands.
///
/// Two modes exist because mainnet-emitted bytes are not canonical: the
/// decoder accepts both, the encoder emits whichever the caller asks for.
/// The mode is never inferred from input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Definite-length containers, sorted map keys, shortest-head integers.
    /// Non-minimal integer/length heads are rejected on decode.
    Canonical,
    /// Indefinite-length arrays/maps once they pass the configured
    /// threshold, matching the wire format emitted by mainnet tooling.
    /// Non-minimal heads are tolerated on decode.
    Conway,
}

/// Configuration for a single encode or decode call.
///
/// Options are plain values passed explicitly to every call; there is no
/// global or thread-local codec state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
    /// Maps longer than this emit indefinite-length in [`Mode::Conway`].
    pub map_threshold: u64,
    /// Arrays longer than this emit indefinite-length in [`Mode::Conway`].
    pub array_threshold: u64,
    /// Byte strings longer than this chunk into indefinite-length bytes,
    /// regardless of [`Mode`] — unlike array/map indefinite-ness, this
    /// rule is not mode-gated (the same rule Plutus `Data::Bytes` uses).
    pub bytes_threshold: u64,
    /// Reject any container that claims a length beyond this bound.
    pub max_items: u64,
    /// Reject any byte or text string beyond this many bytes.
    pub max_bytes: u64,
}

impl Options {
    pub const fn canonical() -> Self {
        Self {
            mode: Mode::Canonical,
            ..Self::DEFAULT
        }
    }

    pub const fn conway() -> Self {
        Self {
            mode: Mode::Conway,
            ..Self::DEFAULT
        }
    }

    const DEFAULT: Self = Self {
        mode: Mode::Canonical,
        map_threshold: 23,
        array_threshold: 23,
        bytes_threshold: 64,
        max_items: 1 << 24,
        max_bytes: 16 * 1024 * 1024,
    };

    /// Returns a copy of `self` under [`Mode::Canonical`], keeping the
    /// thresholds and resource bounds untouched. Used internally to compute
    /// the canonical byte order of map keys regardless of the outer mode.
    pub(crate) fn as_canonical(self) -> Self {
        Self {
            mode: Mode::Canonical,
            ..self
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::DEFAULT
    }
}
