//! mRID builders for reading types and mirror usage points.
//!
//! Both builders share the first and last fields (LFDI prefix and vendor
//! suffix) and differ only in how the middle discriminator is derived.

use tracing::{debug, debug_span};

use crate::config::MridConfig;
use crate::types::{Discriminator, Lfdi, LfdiPrefix, Mrid, RoleFlag, VendorCode};
use crate::MridError;

/// Builds the mRID of a reading type.
///
/// The discriminator is the leading 4 bytes of SHA-256 over `reading_type`,
/// so each distinct name maps to a stable 32-bit code without a lookup table.
///
/// # Errors
///
/// - [`MridError::InvalidIdentityLength`] if `identity` is shorter than 8 bytes
/// - [`MridError::EmptyReadingType`] if `reading_type` is empty
/// - [`MridError::InvalidVendorCode`] if `vendor_code` is empty or not hex
pub fn build_reading_mrid(
    identity: &[u8],
    reading_type: &str,
    vendor_code: &str,
) -> Result<Mrid, MridError> {
    let _span = debug_span!("build_reading_mrid", reading_type, vendor_code).entered();

    let lfdi_prefix = lfdi_prefix(identity)?;

    let discriminator = Discriminator::from_reading_type(reading_type).inspect_err(|e| {
        debug!(error = %e, "rejected reading type");
    })?;
    debug!(%discriminator, "hashed reading type");

    let vendor = vendor_suffix(vendor_code)?;

    Ok(compose(lfdi_prefix, discriminator, vendor))
}

/// Builds the mRID of a mirror usage point.
///
/// The discriminator is `role_flag` encoded as 4 big-endian bytes.
///
/// # Errors
///
/// - [`MridError::InvalidIdentityLength`] if `identity` is shorter than 8 bytes
/// - [`MridError::EncodingOverflow`] if `role_flag` exceeds `u32::MAX`
/// - [`MridError::InvalidVendorCode`] if `vendor_code` is empty or not hex
pub fn build_mup_mrid(
    identity: &[u8],
    role_flag: u64,
    vendor_code: &str,
) -> Result<Mrid, MridError> {
    let _span = debug_span!("build_mup_mrid", role_flag, vendor_code).entered();

    let lfdi_prefix = lfdi_prefix(identity)?;

    let flag = RoleFlag::try_from(role_flag).inspect_err(|e| {
        debug!(error = %e, "rejected role flag");
    })?;
    let discriminator = Discriminator::from_role_flag(flag);
    debug!(%flag, %discriminator, "encoded role flag");

    let vendor = vendor_suffix(vendor_code)?;

    Ok(compose(lfdi_prefix, discriminator, vendor))
}

fn lfdi_prefix(identity: &[u8]) -> Result<LfdiPrefix, MridError> {
    let prefix = LfdiPrefix::from_identity(identity).inspect_err(|e| {
        debug!(error = %e, "rejected identity");
    })?;
    debug!(identity = %hex::encode(identity), %prefix, "took LFDI prefix");
    Ok(prefix)
}

fn vendor_suffix(vendor_code: &str) -> Result<VendorCode, MridError> {
    let vendor = VendorCode::parse(vendor_code).inspect_err(|e| {
        debug!(error = %e, "rejected vendor code");
    })?;
    debug!(input = vendor_code, suffix = %vendor, "normalized vendor code");
    Ok(vendor)
}

fn compose(lfdi_prefix: LfdiPrefix, discriminator: Discriminator, vendor: VendorCode) -> Mrid {
    let mrid = Mrid::new(lfdi_prefix, discriminator, vendor);
    debug!(%mrid, "composed mRID");
    mrid
}

// =============================================================================
// Generator
// =============================================================================

/// Builds mRIDs for one device and vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MridGenerator {
    lfdi: Lfdi,
    vendor: VendorCode,
}

impl MridGenerator {
    /// Creates a generator for a device.
    #[must_use]
    pub const fn new(lfdi: Lfdi, vendor: VendorCode) -> Self {
        Self { lfdi, vendor }
    }

    /// Creates a generator using the vendor code from `config`.
    pub fn from_config(lfdi: Lfdi, config: &MridConfig) -> Result<Self, MridError> {
        Ok(Self::new(lfdi, config.vendor()?))
    }

    #[must_use]
    pub const fn lfdi(&self) -> Lfdi {
        self.lfdi
    }

    #[must_use]
    pub const fn vendor(&self) -> VendorCode {
        self.vendor
    }

    /// Builds the mRID of a reading type for this device.
    pub fn reading(&self, reading_type: &str) -> Result<Mrid, MridError> {
        let discriminator = Discriminator::from_reading_type(reading_type)?;
        Ok(Mrid::new(self.lfdi.prefix(), discriminator, self.vendor))
    }

    /// Builds one reading-type mRID per name, in input order.
    pub fn reading_all<'a, I>(&self, reading_types: I) -> Result<Vec<Mrid>, MridError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        reading_types
            .into_iter()
            .map(|name| self.reading(name))
            .collect()
    }

    /// Builds the mRID of a mirror usage point for this device.
    #[must_use]
    pub fn mirror_usage_point(&self, role_flag: RoleFlag) -> Mrid {
        Mrid::new(
            self.lfdi.prefix(),
            Discriminator::from_role_flag(role_flag),
            self.vendor,
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
