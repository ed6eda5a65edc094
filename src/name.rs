// Copyright 2025 Stacks BNS Contributors
// Licensed under GPL-3.0

//! Fully-qualified name resolution
//!
//! A fully-qualified name is `name.namespace` (e.g. `myname.id`) or
//! `subdomain.name.namespace` (e.g. `sub.myname.id`).

use crate::error::{BnsError, BnsResult};
use std::fmt;
use std::str::FromStr;

/// Result of a purely structural split of a name string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    pub name: String,
    pub namespace: Option<String>,
    pub subdomain: Option<String>,
}

/// Split `fqn` on `.` without validating it.
///
/// With more than two segments the first three are read as subdomain, name
/// and namespace and anything after them is dropped. With fewer than two
/// segments the namespace is absent.
pub fn decode(fqn: &str) -> DecodedName {
    let parts: Vec<&str> = fqn.split('.').collect();

    if parts.len() > 2 {
        DecodedName {
            subdomain: Some(parts[0].to_string()),
            name: parts[1].to_string(),
            namespace: Some(parts[2].to_string()),
        }
    } else {
        DecodedName {
            name: parts[0].to_string(),
            namespace: parts.get(1).map(|s| s.to_string()),
            subdomain: None,
        }
    }
}

/// A validated `[subdomain.]name.namespace`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullyQualifiedName {
    name: String,
    namespace: String,
    subdomain: Option<String>,
}

impl FullyQualifiedName {
    /// Parse with the strict grammar: two or three non-empty segments.
    pub fn parse(fqn: &str) -> BnsResult<Self> {
        let malformed = |reason: &str| BnsError::MalformedName {
            name: fqn.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = fqn.split('.').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(malformed("empty segment"));
        }

        match parts.as_slice() {
            [name, namespace] => Ok(Self {
                name: name.to_string(),
                namespace: namespace.to_string(),
                subdomain: None,
            }),
            [subdomain, name, namespace] => Ok(Self {
                name: name.to_string(),
                namespace: namespace.to_string(),
                subdomain: Some(subdomain.to_string()),
            }),
            [_] => Err(malformed("missing namespace")),
            _ => Err(malformed("expected at most three segments")),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn subdomain(&self) -> Option<&str> {
        self.subdomain.as_deref()
    }

    pub fn is_subdomain(&self) -> bool {
        self.subdomain.is_some()
    }
}

impl FromStr for FullyQualifiedName {
    type Err = BnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FullyQualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(subdomain) = &self.subdomain {
            write!(f, "{}.", subdomain)?;
        }
        write!(f, "{}.{}", self.name, self.namespace)
    }
}
