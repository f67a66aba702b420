//! Typed mRID fields and the composed identifier.
//!
//! Every field is a fixed-width byte array rendered as uppercase hex with no
//! separators and no `0x` prefix. An mRID is the concatenation
//! `[LFDI prefix (16)][discriminator (8)][vendor (8)]`.

use std::ops::BitOr;

use sha2::{Digest, Sha256};

use crate::define_hex_field;
use crate::MridError;

/// Length of a canonical LFDI in bytes.
pub const LFDI_LEN: usize = 20;

/// Length of an mRID in hex characters.
pub const MRID_LEN: usize = 32;

/// Decodes exactly `N` bytes from uppercase hex.
fn decode_upper_hex<const N: usize>(field: &'static str, s: &str) -> Result<[u8; N], MridError> {
    if let Some(c) = s.chars().find(|c| !matches!(c, '0'..='9' | 'A'..='F')) {
        return Err(MridError::invalid_hex(
            field,
            s,
            format!("invalid character '{}'", c),
        ));
    }

    if s.len() != N * 2 {
        return Err(MridError::invalid_hex(
            field,
            s,
            format!("expected {} hex characters, got {}", N * 2, s.len()),
        ));
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(s, &mut out)
        .map_err(|e| MridError::invalid_hex(field, s, e.to_string()))?;
    Ok(out)
}

// =============================================================================
// Device Identity
// =============================================================================

define_hex_field!(
    /// Long-form device identifier: the leading 20 bytes of a SHA-256 digest
    /// over a device certificate.
    Lfdi,
    20,
    "LFDI"
);

impl Lfdi {
    /// Derives the LFDI from a device certificate (or any unique device ID).
    #[must_use]
    pub fn from_certificate(certificate: &[u8]) -> Self {
        let digest = Sha256::digest(certificate);
        let mut bytes = [0u8; LFDI_LEN];
        bytes.copy_from_slice(&digest[..LFDI_LEN]);
        Self(bytes)
    }

    /// Takes the first 20 bytes of `bytes`, e.g. a full SHA-256 digest.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MridError> {
        bytes
            .first_chunk::<20>()
            .copied()
            .map(Self)
            .ok_or(MridError::InvalidIdentityLength {
                actual: bytes.len(),
                required: LFDI_LEN,
            })
    }

    /// Parses an LFDI from 40 hex characters. Either case is accepted.
    pub fn parse(s: &str) -> Result<Self, MridError> {
        decode_upper_hex(Self::LABEL, &s.to_ascii_uppercase()).map(Self)
    }

    /// Returns the leading bytes used as the first mRID field.
    #[must_use]
    pub fn prefix(&self) -> LfdiPrefix {
        let mut bytes = [0u8; LfdiPrefix::LEN];
        bytes.copy_from_slice(&self.0[..LfdiPrefix::LEN]);
        LfdiPrefix::from_bytes(bytes)
    }
}

define_hex_field!(
    /// The first 8 bytes of a device identity (16 hex characters).
    LfdiPrefix,
    8,
    "LFDI prefix"
);

impl LfdiPrefix {
    /// Takes the first 8 bytes of `identity`.
    ///
    /// Shorter identities are rejected rather than padded.
    pub fn from_identity(identity: &[u8]) -> Result<Self, MridError> {
        identity
            .first_chunk::<8>()
            .copied()
            .map(Self)
            .ok_or(MridError::InvalidIdentityLength {
                actual: identity.len(),
                required: Self::LEN,
            })
    }

    /// Parses the prefix from 16 uppercase hex characters.
    pub fn parse(s: &str) -> Result<Self, MridError> {
        decode_upper_hex(Self::LABEL, s).map(Self)
    }
}

// =============================================================================
// Discriminator
// =============================================================================

define_hex_field!(
    /// The middle mRID field: a hashed reading-type name or a role flag.
    Discriminator,
    4,
    "discriminator"
);

impl Discriminator {
    /// Leading 4 bytes of SHA-256 over the UTF-8 name.
    pub fn from_reading_type(name: &str) -> Result<Self, MridError> {
        if name.is_empty() {
            return Err(MridError::EmptyReadingType);
        }

        let digest = Sha256::digest(name.as_bytes());
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&digest[..4]);
        Ok(Self(bytes))
    }

    /// Big-endian encoding of the role flag.
    #[must_use]
    pub const fn from_role_flag(flag: RoleFlag) -> Self {
        Self(flag.value().to_be_bytes())
    }

    /// Parses the discriminator from 8 uppercase hex characters.
    pub fn parse(s: &str) -> Result<Self, MridError> {
        decode_upper_hex(Self::LABEL, s).map(Self)
    }
}

/// Mirror usage point `roleFlags` bitmap.
///
/// Any 32-bit value is accepted; the named constants cover the defined bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoleFlag(u32);

impl RoleFlag {
    pub const NONE: Self = Self(0);
    pub const IS_MIRROR: Self = Self(0x01);
    pub const IS_PREMISES_AGGREGATION_POINT: Self = Self(0x02);
    pub const IS_PEV: Self = Self(0x04);
    pub const IS_DER: Self = Self(0x08);
    pub const IS_REVENUE_QUALITY: Self = Self(0x10);
    pub const IS_DC: Self = Self(0x20);
    pub const IS_SUBMETER: Self = Self(0x40);

    /// Creates a RoleFlag from a raw bitmap.
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the underlying bitmap.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns true if every bit of `other` is set.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for RoleFlag {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl std::fmt::Display for RoleFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

impl From<u32> for RoleFlag {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<RoleFlag> for u32 {
    fn from(flag: RoleFlag) -> Self {
        flag.0
    }
}

impl TryFrom<u64> for RoleFlag {
    type Error = MridError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| MridError::EncodingOverflow { value })
    }
}

impl serde::Serialize for RoleFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RoleFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self(bits))
    }
}

// =============================================================================
// Vendor
// =============================================================================

define_hex_field!(
    /// Vendor / Private Enterprise Number suffix (8 hex characters).
    VendorCode,
    4,
    "vendor code"
);

impl VendorCode {
    /// Normalizes a hex vendor code.
    ///
    /// The code is uppercased and left-padded with `'0'` to 8 characters;
    /// longer codes keep their rightmost 8 characters.
    pub fn parse(code: &str) -> Result<Self, MridError> {
        if code.is_empty() {
            return Err(MridError::InvalidVendorCode {
                code: code.to_string(),
                reason: "vendor code cannot be empty".to_string(),
            });
        }

        if let Some(c) = code.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(MridError::InvalidVendorCode {
                code: code.to_string(),
                reason: format!("invalid character '{}'", c),
            });
        }

        let padded = format!(
            "{:0>width$}",
            code.to_ascii_uppercase(),
            width = Self::HEX_LEN
        );
        let suffix = &padded[padded.len() - Self::HEX_LEN..];

        decode_upper_hex(Self::LABEL, suffix).map(Self)
    }

    /// Encodes a numeric enterprise number.
    #[must_use]
    pub const fn from_pen(pen: u32) -> Self {
        Self(pen.to_be_bytes())
    }
}

// =============================================================================
// mRID
// =============================================================================

/// A 32-character uppercase hex master resource identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mrid {
    lfdi_prefix: LfdiPrefix,
    discriminator: Discriminator,
    vendor: VendorCode,
}

impl Mrid {
    /// Composes an mRID from its three fields.
    #[must_use]
    pub const fn new(
        lfdi_prefix: LfdiPrefix,
        discriminator: Discriminator,
        vendor: VendorCode,
    ) -> Self {
        Self {
            lfdi_prefix,
            discriminator,
            vendor,
        }
    }

    #[must_use]
    pub const fn lfdi_prefix(&self) -> LfdiPrefix {
        self.lfdi_prefix
    }

    #[must_use]
    pub const fn discriminator(&self) -> Discriminator {
        self.discriminator
    }

    #[must_use]
    pub const fn vendor(&self) -> VendorCode {
        self.vendor
    }

    /// Parses an mRID from exactly 32 uppercase hex characters.
    pub fn parse(s: &str) -> Result<Self, MridError> {
        if let Some(c) = s.chars().find(|c| !matches!(c, '0'..='9' | 'A'..='F')) {
            return Err(MridError::invalid_hex(
                "mRID",
                s,
                format!("invalid character '{}'", c),
            ));
        }

        if s.len() != MRID_LEN {
            return Err(MridError::invalid_hex(
                "mRID",
                s,
                format!("expected {} hex characters, got {}", MRID_LEN, s.len()),
            ));
        }

        let (prefix, rest) = s.split_at(LfdiPrefix::HEX_LEN);
        let (discriminator, vendor) = rest.split_at(Discriminator::HEX_LEN);

        Ok(Self {
            lfdi_prefix: LfdiPrefix::parse(prefix)?,
            discriminator: Discriminator::parse(discriminator)?,
            vendor: VendorCode::parse(vendor)?,
        })
    }

    /// Renders the mRID, bounded to 32 characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(
            LfdiPrefix::HEX_LEN + Discriminator::HEX_LEN + VendorCode::HEX_LEN,
        );
        out.push_str(&self.lfdi_prefix.to_hex());
        out.push_str(&self.discriminator.to_hex());
        out.push_str(&self.vendor.to_hex());
        out.truncate(MRID_LEN);
        out
    }
}

impl std::fmt::Display for Mrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Mrid {
    type Err = MridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Mrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Mrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
