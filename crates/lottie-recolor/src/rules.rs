//! Classification of source colors into palette roles.
//!
//! The table is plain data so the runtime remapper and the variant builder
//! share one definition, and a config file can replace it wholesale.

use crate::scheme::Role;
use serde::{Deserialize, Serialize};

/// Constraint on one normalized channel. Comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Bound {
    #[default]
    Any,
    Above(f64),
    Below(f64),
}

impl Bound {
    pub fn admits(self, value: f64) -> bool {
        match self {
            Bound::Any => true,
            Bound::Above(limit) => value > limit,
            Bound::Below(limit) => value < limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelBounds {
    #[serde(default)]
    pub r: Bound,
    #[serde(default)]
    pub g: Bound,
    #[serde(default)]
    pub b: Bound,
}

impl ChannelBounds {
    pub fn admits(&self, [r, g, b]: [f64; 3]) -> bool {
        self.r.admits(r) && self.g.admits(g) && self.b.admits(b)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub when: ChannelBounds,
    pub role: Role,
}

impl Rule {
    pub fn new(r: Bound, g: Bound, b: Bound, role: Role) -> Self {
        Self {
            when: ChannelBounds { r, g, b },
            role,
        }
    }
}

/// Ordered rules; the first match wins, `fallback` catches the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub rules: Vec<Rule>,
    pub fallback: Role,
}

impl Default for RuleTable {
    fn default() -> Self {
        use Bound::{Above, Below};
        Self {
            rules: vec![
                // near-white
                Rule::new(Above(0.8), Above(0.8), Above(0.8), Role::Secondary),
                // red
                Rule::new(Above(0.5), Below(0.5), Below(0.5), Role::Primary),
                // yellow
                Rule::new(Above(0.5), Above(0.5), Below(0.5), Role::Accent),
                // green
                Rule::new(Below(0.5), Above(0.5), Below(0.5), Role::Gradient1),
            ],
            fallback: Role::Primary,
        }
    }
}

impl RuleTable {
    pub fn classify(&self, rgb: [f64; 3]) -> Role {
        self.rules
            .iter()
            .find(|rule| rule.when.admits(rgb))
            .map_or(self.fallback, |rule| rule.role)
    }
}
