//! The Allow/Deny effect of a statement.

use serde::{Deserialize, Serialize};

/// Whether a statement results in an allow or an explicit deny.
///
/// A freshly created statement denies: `Effect::default()` is
/// [`Effect::Deny`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    #[default]
    Deny,
}
