//! Error definitions.
//!
//! The MAU itself has no fault channel: interrupted writes, backpressure and
//! suppressed instructions are all expressed as protocol stalls. This module
//! covers what is fallible at the API boundary instead:
//! 1. **Value Conversion:** Out-of-range nibbles and unknown mnemonics.
//! 2. **Handshake Misuse:** Loading an occupied pipeline register.
//! 3. **Serial Readback:** Malformed or truncated result frames.
//! 4. **Configuration:** Parse failures and rejected settings.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MauError>;

/// Errors returned by the MAU model, its host driver, and its configuration.
#[derive(Debug, Error)]
pub enum MauError {
    /// An integer did not fit in a 4-bit nibble.
    #[error("value {0:#x} does not fit in a nibble")]
    NibbleOutOfRange(u8),

    /// An opcode mnemonic was not recognised.
    #[error("unknown opcode mnemonic `{0}`")]
    UnknownOpcode(String),

    /// A pipeline register was loaded while its occupant was still unconsumed.
    ///
    /// The register is left untouched when this is returned.
    #[error("pipeline register `{stage}` overrun: occupant not yet consumed")]
    SlotOverrun {
        /// Name of the register that rejected the load.
        stage: &'static str,
    },

    /// A result frame carried non-zero bits in a reserved position.
    #[error("malformed result frame {nibbles:02x?}: reserved bits set")]
    MalformedFrame {
        /// Raw nibble values as read off the wire.
        nibbles: [u8; 5],
    },

    /// A host readout finished without a transmission-done pulse.
    #[error("readout finished without a done pulse")]
    ReadoutIncomplete,

    /// A configuration value was rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document failed to parse.
    #[error("failed to parse configuration")]
    ConfigParse(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read configuration file")]
    Io(#[from] std::io::Error),
}
