//! # sep-mrid
//!
//! Deterministic mRID generation for reading types and mirror usage points.
//!
//! ## Design Principles
//!
//! - mRIDs are a pure function of their inputs; no registry, no state
//! - Every field has a fixed width and a typed representation
//! - Malformed inputs fail fast instead of producing a malformed mRID
//! - mRIDs support strict parsing back into their fields
//!
//! ## mRID Format
//!
//! An mRID is 32 uppercase hex characters: `{lfdi_prefix}{discriminator}{vendor}`
//!
//! | field         | width | source                                        |
//! |---------------|-------|-----------------------------------------------|
//! | LFDI prefix   | 16    | first 8 bytes of the device LFDI              |
//! | discriminator | 8     | SHA-256(reading type)[..4], or role flag (BE) |
//! | vendor        | 8     | vendor hex code, zero-padded on the left      |
//!
//! Examples:
//! - `C470E06CEFE7A3D64E40D79F00001A2B` (reading type "Voltage")
//! - `BC745D8A1C56D28D0000004900001A2B` (mirror usage point, role flag 0x49)

mod builder;
mod config;
mod error;
mod macros;
mod types;

pub use builder::{build_mup_mrid, build_reading_mrid, MridGenerator};
pub use config::{MridConfig, VENDOR_CODE_ENV};
pub use error::MridError;
pub use types::*;
