//! Generator configuration.
//!
//! The vendor code is the only setting; it is usually fixed per deployment
//! and supplied through the environment or a host's config file.

use serde::Deserialize;

use crate::types::VendorCode;
use crate::MridError;

/// Environment variable holding the vendor (PEN) hex code.
pub const VENDOR_CODE_ENV: &str = "SEP_MRID_VENDOR_CODE";

/// mRID generator configuration (env-driven).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MridConfig {
    /// Vendor / Private Enterprise Number as hex (example: "1A2B").
    pub vendor_code: String,
}

impl MridConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, MridError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, MridError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vendor_code = lookup(VENDOR_CODE_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| MridError::Config {
                key: VENDOR_CODE_ENV,
                message: "missing vendor code".to_string(),
            })?;

        let config = Self { vendor_code };
        config.vendor()?;
        Ok(config)
    }

    /// Returns the normalized vendor code.
    pub fn vendor(&self) -> Result<VendorCode, MridError> {
        VendorCode::parse(&self.vendor_code)
    }
}
