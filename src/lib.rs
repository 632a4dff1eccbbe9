//! Construct, serialize, and parse AWS IAM policy documents.
//!
//! The crate models the policy grammar — a fixed version, an optional id, and
//! an ordered list of statements carrying an effect, principal sets,
//! action lists, a resource, and nested conditions — and round-trips it
//! through the JSON wire format. It builds and parses documents only; it does
//! not evaluate them against requests.
//!
//! # Example
//!
//! ```
//! use iam_policy_document::{condition, Effect, Policy};
//!
//! let mut policy = Policy::new();
//! policy.set_id("policy-id");
//!
//! let statement = policy.add_statement();
//! statement.set_sid("statement-id");
//! statement.effect = Effect::Allow;
//! statement.add_principal("*");
//! statement.add_action("Describe*");
//! statement.resource = "*".to_string();
//! statement.add_condition(
//!     condition::operator::ARN_EQUALS,
//!     condition::variable::SOURCE_IP,
//!     "10.0.0.0/8",
//! );
//!
//! let json = policy.to_json()?;
//! let parsed = Policy::from_json(&json)?;
//! assert_eq!(policy, parsed);
//! # Ok::<(), iam_policy_document::PolicyError>(())
//! ```

pub mod condition;
mod effect;
mod errors;
mod policy;
mod version;

pub use effect::Effect;
pub use errors::{PolicyError, Result};
pub use policy::{Policy, Principal, Statement};
pub use version::{PolicyVersion, CURRENT_VERSION, LEGACY_VERSION};
