//! The fixed policy language version.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Version literal every document serializes with.
pub const CURRENT_VERSION: &str = "2012-10-17";

/// Older version literal still accepted on decode.
pub const LEGACY_VERSION: &str = "2008-10-17";

/// The version of an IAM policy document.
///
/// Always serializes to `"2012-10-17"`. A document using the older
/// `"2008-10-17"` version decodes successfully and is upgraded on read;
/// after decode the two are indistinguishable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyVersion;

impl Serialize for PolicyVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(CURRENT_VERSION)
    }
}

impl<'de> Deserialize<'de> for PolicyVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = PolicyVersion;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{CURRENT_VERSION:?} or {LEGACY_VERSION:?}")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<PolicyVersion, E> {
                match value {
                    CURRENT_VERSION => Ok(PolicyVersion),
                    LEGACY_VERSION => {
                        log::debug!("upgrading legacy policy version {LEGACY_VERSION}");
                        Ok(PolicyVersion)
                    }
                    other => Err(E::custom(format!("invalid policy version {other:?}"))),
                }
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
