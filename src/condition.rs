//! Condition operators and variables.
//!
//! The encode/decode contract carries any operator or variable string through
//! unmodified; the constants here cover the names recognized by the policy
//! language and exist for caller convenience.

use std::collections::BTreeMap;

/// Nested condition map: operator name, then variable name, then the ordered
/// list of values compared against. Values accumulate in insertion order and
/// duplicates are kept; map keys serialize in sorted order.
pub type ConditionMap = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Comparison operator names for statement conditions.
pub mod operator {
    pub const STRING_EQUALS: &str = "StringEquals";
    pub const STRING_NOT_EQUALS: &str = "StringNotEquals";
    pub const STRING_EQUALS_IGNORE_CASE: &str = "StringEqualsIgnoreCase";
    pub const STRING_NOT_EQUALS_IGNORE_CASE: &str = "StringNotEqualsIgnoreCase";
    pub const STRING_LIKE: &str = "StringLike";
    pub const STRING_NOT_LIKE: &str = "StringNotLike";
    pub const NUMERIC_EQUALS: &str = "NumericEquals";
    pub const NUMERIC_NOT_EQUALS: &str = "NumericNotEquals";
    pub const NUMERIC_LESS_THAN: &str = "NumericLessThan";
    pub const NUMERIC_LESS_THAN_EQUALS: &str = "NumericLessThanEquals";
    pub const NUMERIC_GREATER_THAN: &str = "NumericGreaterThan";
    pub const NUMERIC_GREATER_THAN_EQUALS: &str = "NumericGreaterThanEquals";
    pub const DATE_EQUALS: &str = "DateEquals";
    pub const DATE_NOT_EQUALS: &str = "DateNotEquals";
    pub const DATE_LESS_THAN: &str = "DateLessThan";
    pub const DATE_LESS_THAN_EQUALS: &str = "DateLessThanEquals";
    pub const DATE_GREATER_THAN: &str = "DateGreaterThan";
    pub const DATE_GREATER_THAN_EQUALS: &str = "DateGreaterThanEquals";
    pub const BOOL: &str = "Bool";
    pub const IP_ADDRESS: &str = "IpAddress";
    pub const NOT_IP_ADDRESS: &str = "NotIpAddress";
    pub const ARN_EQUALS: &str = "ArnEquals";
    pub const ARN_NOT_EQUALS: &str = "ArnNotEquals";
    pub const ARN_LIKE: &str = "ArnLike";
    pub const ARN_NOT_LIKE: &str = "ArnNotLike";
    pub const NULL: &str = "Null";
}

/// Variable names available for use in conditions.
pub mod variable {
    pub const CURRENT_TIME: &str = "aws:CurrentTime";
    pub const EPOCH_TIME: &str = "aws:EpochTime";
    pub const MULTI_FACTOR_AUTH_AGE: &str = "aws:MultiFactorAuthAge";
    pub const PRINCIPAL_TYPE: &str = "aws:principaltype";
    pub const SECURE_TRANSPORT: &str = "aws:SecureTransport";
    pub const SOURCE_ARN: &str = "aws:SourceArn";
    pub const SOURCE_IP: &str = "aws:SourceIp";
    pub const USER_AGENT: &str = "aws:UserAgent";
    pub const USER_ID: &str = "aws:userid";
    pub const USERNAME: &str = "aws:username";
}
