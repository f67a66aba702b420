//! Macros for defining fixed-width hex field types.

/// Macro to define a fixed-width byte field rendered as uppercase hex.
///
/// This generates a newtype wrapper around `[u8; N]` with:
/// - `LEN`, `HEX_LEN` and `LABEL` constants
/// - `from_bytes()`, `as_bytes()` and `to_hex()`
/// - `Display` and `FromStr` implementations (`FromStr` delegates to the
///   type's own `parse()`, which each field defines)
/// - `Serialize` and `Deserialize` as the hex string
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_hex_field!(
///     /// First eight bytes of an LFDI.
///     LfdiPrefix, 8, "LFDI prefix"
/// );
///
/// impl LfdiPrefix {
///     pub fn parse(s: &str) -> Result<Self, MridError> { ... }
/// }
/// ```
#[macro_export]
macro_rules! define_hex_field {
    ($(#[$meta:meta])* $name:ident, $len:literal, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Width of this field in bytes.
            pub const LEN: usize = $len;

            /// Width of this field in hex characters.
            pub const HEX_LEN: usize = $len * 2;

            /// Human-readable field name used in errors and logs.
            pub const LABEL: &'static str = $label;

            /// Creates the field from raw bytes.
            #[must_use]
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Returns the raw bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Renders the field as uppercase hex, most-significant nibble first.
            #[must_use]
            pub fn to_hex(&self) -> String {
                hex::encode_upper(self.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::MridError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}
