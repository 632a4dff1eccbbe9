//! The policy document model: construction, mutation, and JSON round-trip.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::condition::ConditionMap;
use crate::effect::Effect;
use crate::errors::{PolicyError, Result};
use crate::version::{PolicyVersion, CURRENT_VERSION, LEGACY_VERSION};

/// The person or persons who receive or are denied permission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Principal {
    #[serde(rename = "AWS", default)]
    pub aws: Vec<String>,
}

/// A single rule within a policy document.
///
/// Statements are created through [`Policy::add_statement`] and mutated in
/// place through the handle it returns. `effect` and `resource` are plain
/// fields assigned directly; the other fields have adder/setter methods that
/// preserve the field-presence contract: `Principal`, `Action`, and
/// `Resource` always serialize (as empty collections or the empty string),
/// while `Sid`, `NotPrincipal`, `NotAction`, and `Condition` are omitted
/// from the output until first populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Statement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Defaults to [`Effect::Deny`]; a statement never granted an explicit
    /// effect denies.
    #[serde(default)]
    pub effect: Effect,
    #[serde(default)]
    pub principal: Principal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_principal: Option<Principal>,
    #[serde(default)]
    pub action: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_action: Option<Vec<String>>,
    #[serde(default)]
    pub resource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionMap>,
}

impl Statement {
    /// Set the statement's Sid.
    pub fn set_sid(&mut self, sid: impl Into<String>) {
        self.sid = Some(sid.into());
    }

    /// Append a principal. Duplicates are kept and order is preserved.
    pub fn add_principal(&mut self, principal: impl Into<String>) {
        self.principal.aws.push(principal.into());
    }

    /// Append a not-principal, allocating the set on first call.
    pub fn add_not_principal(&mut self, principal: impl Into<String>) {
        self.not_principal
            .get_or_insert_with(Principal::default)
            .aws
            .push(principal.into());
    }

    /// Append an action pattern.
    pub fn add_action(&mut self, action: impl Into<String>) {
        self.action.push(action.into());
    }

    /// Append a not-action pattern, allocating the list on first call.
    pub fn add_not_action(&mut self, action: impl Into<String>) {
        self.not_action.get_or_insert_with(Vec::new).push(action.into());
    }

    /// Append `value` under `condition[operator][variable]`, creating either
    /// level of the mapping on demand. Repeated calls with the same operator
    /// and variable accumulate values rather than replacing them.
    pub fn add_condition(
        &mut self,
        operator: impl Into<String>,
        variable: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.condition
            .get_or_insert_with(BTreeMap::new)
            .entry(operator.into())
            .or_default()
            .entry(variable.into())
            .or_default()
            .push(value.into());
    }
}

/// A complete IAM policy document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Policy {
    /// Fixed version; always encodes `"2012-10-17"`.
    #[serde(rename = "Version", default)]
    pub version: PolicyVersion,
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Statements in insertion order; the order is preserved verbatim on
    /// serialize.
    #[serde(rename = "Statement", default)]
    pub statements: Vec<Statement>,
}

impl Policy {
    /// Create a new empty policy: fixed version, no id, no statements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the optional document id. Always overwrites.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Append a new deny-by-default statement and return a handle to mutate
    /// it. The statement stays owned by this policy.
    pub fn add_statement(&mut self) -> &mut Statement {
        self.statements.push(Statement::default());
        let last = self.statements.len() - 1;
        &mut self.statements[last]
    }

    /// Compact JSON encoding, ready for use in API calls.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Indented JSON encoding for human consumption (four-space indent).
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parse a policy document from its JSON encoding.
    ///
    /// Returns [`PolicyError::InvalidVersion`] or
    /// [`PolicyError::InvalidEffect`] when those fields hold unrecognized
    /// literals, both carrying the raw offending value, and the underlying
    /// `serde_json` error for any other malformed input. No partial document
    /// is ever returned alongside an error.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let doc: Value = serde_json::from_slice(bytes)?;

        if let Some(version) = doc.get("Version").and_then(Value::as_str) {
            if version != CURRENT_VERSION && version != LEGACY_VERSION {
                return Err(PolicyError::InvalidVersion(version.to_owned()));
            }
        }
        if let Some(statements) = doc.get("Statement").and_then(Value::as_array) {
            for statement in statements {
                if let Some(effect) = statement.get("Effect").and_then(Value::as_str) {
                    if effect != "Allow" && effect != "Deny" {
                        return Err(PolicyError::InvalidEffect(effect.to_owned()));
                    }
                }
            }
        }

        let policy: Self = serde_json::from_value(doc)?;
        log::debug!("decoded policy with {} statements", policy.statements.len());
        Ok(policy)
    }
}

/// Pretty-printed document for display. An encode failure renders as empty
/// output rather than an error; use [`Policy::to_json_pretty`] when the
/// failure matters.
impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json_pretty() {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{operator, variable};

    #[test]
    fn new_policy_is_empty() {
        let policy = Policy::new();
        assert!(policy.id.is_none());
        assert!(policy.statements.is_empty());
    }

    #[test]
    fn add_statement_defaults_to_deny() {
        let mut policy = Policy::new();
        let statement = policy.add_statement();
        assert_eq!(statement.effect, Effect::Deny);
        assert!(statement.sid.is_none());
        assert!(statement.principal.aws.is_empty());
        assert!(statement.not_principal.is_none());
        assert!(statement.action.is_empty());
        assert!(statement.not_action.is_none());
        assert_eq!(statement.resource, "");
        assert!(statement.condition.is_none());
    }

    #[test]
    fn statements_keep_insertion_order() {
        let mut policy = Policy::new();
        policy.add_statement().set_sid("first");
        policy.add_statement().set_sid("second");
        policy.add_statement().set_sid("third");
        let sids: Vec<_> = policy
            .statements
            .iter()
            .map(|s| s.sid.as_deref().unwrap())
            .collect();
        assert_eq!(sids, ["first", "second", "third"]);
    }

    #[test]
    fn set_id_overwrites() {
        let mut policy = Policy::new();
        policy.set_id("one");
        policy.set_id("two");
        assert_eq!(policy.id.as_deref(), Some("two"));
    }

    #[test]
    fn add_not_principal_allocates_lazily() {
        let mut policy = Policy::new();
        let statement = policy.add_statement();
        assert!(statement.not_principal.is_none());
        statement.add_not_principal("*");
        assert_eq!(
            statement.not_principal.as_ref().unwrap().aws,
            vec!["*".to_string()]
        );
        assert!(statement.principal.aws.is_empty());
    }

    #[test]
    fn add_not_action_allocates_lazily() {
        let mut policy = Policy::new();
        let statement = policy.add_statement();
        assert!(statement.not_action.is_none());
        statement.add_not_action("iam:*");
        assert_eq!(statement.not_action.as_deref(), Some(&["iam:*".to_string()][..]));
    }

    #[test]
    fn add_principal_keeps_duplicates() {
        let mut policy = Policy::new();
        let statement = policy.add_statement();
        statement.add_principal("alice");
        statement.add_principal("alice");
        assert_eq!(statement.principal.aws, ["alice", "alice"]);
    }

    #[test]
    fn add_condition_creates_levels_on_demand() {
        let mut policy = Policy::new();
        let statement = policy.add_statement();
        statement.add_condition(operator::ARN_EQUALS, variable::SOURCE_ARN, "arn:sns:foo");
        let values = &statement.condition.as_ref().unwrap()[operator::ARN_EQUALS]
            [variable::SOURCE_ARN];
        assert_eq!(values, &["arn:sns:foo"]);
    }

    #[test]
    fn add_condition_appends_to_existing_values() {
        let mut policy = Policy::new();
        let statement = policy.add_statement();
        statement.add_condition(operator::ARN_EQUALS, variable::SOURCE_ARN, "arn:sns:foo");
        statement.add_condition(operator::ARN_EQUALS, variable::SOURCE_ARN, "arn:sns:bar");
        let values = &statement.condition.as_ref().unwrap()[operator::ARN_EQUALS]
            [variable::SOURCE_ARN];
        assert_eq!(values, &["arn:sns:foo", "arn:sns:bar"]);
    }

    #[test]
    fn display_matches_pretty_encoding() {
        let mut policy = Policy::new();
        policy.add_statement().effect = Effect::Allow;
        assert_eq!(policy.to_string(), policy.to_json_pretty().unwrap());
    }
}
