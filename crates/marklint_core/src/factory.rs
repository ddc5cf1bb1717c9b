//! Binding effective configuration onto rule instances.

use marklint_rules::{Rule, RuleEntry, RuleOptions, Severity, catalog};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::EffectiveConfig;

/// Key holding the fallback for rules not mentioned in the configuration.
pub const DEFAULT_KEY: &str = "default";

/// How one rule is configured.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSetting {
    Disabled,
    Enabled(Severity),
    Configured(Map<String, Value>, Severity),
}

impl RuleSetting {
    /// Interprets a rule's configuration value.
    ///
    /// `false` and `"off"` disable, `true` and `"error"` enable at error
    /// severity, `"warning"` enables at warning severity and a mapping
    /// enables with options. A `severity` key inside the mapping may pick
    /// the severity. Anything else enables at error severity.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(false) => Self::Disabled,
            Value::Bool(true) => Self::Enabled(Severity::Error),
            Value::String(s) => match s.as_str() {
                "off" => Self::Disabled,
                "warning" | "warn" => Self::Enabled(Severity::Warning),
                "error" => Self::Enabled(Severity::Error),
                other => {
                    warn!("Unknown rule setting {:?}, treating as error", other);
                    Self::Enabled(Severity::Error)
                }
            },
            Value::Object(map) => {
                let severity = match map.get("severity").and_then(Value::as_str) {
                    Some("warning" | "warn") => Severity::Warning,
                    _ => Severity::Error,
                };
                Self::Configured(map.clone(), severity)
            }
            _ => Self::Enabled(Severity::Error),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Disabled => None,
            Self::Enabled(severity) | Self::Configured(_, severity) => Some(*severity),
        }
    }
}

/// A rule instance together with the severity its violations carry.
pub struct BoundRule {
    pub rule: Box<dyn Rule>,
    pub severity: Severity,
}

impl BoundRule {
    pub fn new(rule: Box<dyn Rule>, severity: Severity) -> Self {
        Self { rule, severity }
    }
}

impl std::fmt::Debug for BoundRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundRule")
            .field("rule", &self.rule.id())
            .field("severity", &self.severity)
            .finish()
    }
}

/// Builds rule instances from effective configuration.
pub struct RuleFactory;

impl RuleFactory {
    /// Finds the setting for a catalog entry: by id first, then by alias,
    /// then the `default` key, else enabled at error severity.
    pub fn setting_for(entry: &RuleEntry, effective: &EffectiveConfig) -> RuleSetting {
        let meta = entry.meta;
        let value = effective.get(meta.id).or_else(|| {
            effective
                .iter()
                .find(|(key, _)| meta.answers_to(key))
                .map(|(_, value)| value)
        });

        if let Some(value) = value {
            return RuleSetting::from_value(value);
        }

        match effective.get(DEFAULT_KEY) {
            Some(Value::Bool(false)) => RuleSetting::Disabled,
            Some(Value::Bool(true)) | None => RuleSetting::Enabled(Severity::Error),
            Some(other) => {
                warn!("Ignoring non-boolean {:?} value {}", DEFAULT_KEY, other);
                RuleSetting::Enabled(Severity::Error)
            }
        }
    }

    /// Instantiates every enabled catalog rule, in catalog order.
    pub fn build(effective: &EffectiveConfig) -> Vec<BoundRule> {
        for key in effective.keys() {
            if key != DEFAULT_KEY && !catalog().iter().any(|e| e.meta.answers_to(key)) {
                debug!("Ignoring unknown rule {:?}", key);
            }
        }

        catalog()
            .iter()
            .filter_map(|entry| {
                let setting = Self::setting_for(entry, effective);
                let rule = match &setting {
                    RuleSetting::Disabled => return None,
                    RuleSetting::Enabled(_) => entry.build(&RuleOptions::empty(entry.meta.id)),
                    RuleSetting::Configured(map, _) => {
                        entry.build(&RuleOptions::new(entry.meta.id, map))
                    }
                };
                let severity = setting.severity()?;
                Some(BoundRule::new(rule, severity))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marklint_rules::find_rule;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn effective(value: Value) -> EffectiveConfig {
        value.as_object().cloned().unwrap()
    }

    fn ids(rules: &[BoundRule]) -> Vec<&str> {
        rules.iter().map(|b| b.rule.id()).collect()
    }

    #[rstest]
    #[case(json!(false), RuleSetting::Disabled)]
    #[case(json!("off"), RuleSetting::Disabled)]
    #[case(json!(true), RuleSetting::Enabled(Severity::Error))]
    #[case(json!("error"), RuleSetting::Enabled(Severity::Error))]
    #[case(json!("warning"), RuleSetting::Enabled(Severity::Warning))]
    #[case(json!(3), RuleSetting::Enabled(Severity::Error))]
    fn test_setting_from_value(#[case] value: Value, #[case] expected: RuleSetting) {
        assert_eq!(RuleSetting::from_value(&value), expected);
    }

    #[test]
    fn test_mapping_with_severity() {
        let setting = RuleSetting::from_value(&json!({"line_length": 100, "severity": "warning"}));
        assert_eq!(setting.severity(), Some(Severity::Warning));
        assert!(matches!(setting, RuleSetting::Configured(ref m, _) if m["line_length"] == 100));
    }

    #[test]
    fn test_all_rules_enabled_by_default() {
        let rules = RuleFactory::build(&Map::new());
        assert_eq!(rules.len(), catalog().len());
        assert!(rules.iter().all(|b| b.severity == Severity::Error));
    }

    #[test]
    fn test_default_false_disables_unlisted() {
        let rules = RuleFactory::build(&effective(json!({
            "default": false,
            "MD041": true,
            "MD013": "warning"
        })));

        assert_eq!(ids(&rules), vec!["MD013", "MD041"]);
        assert_eq!(rules[0].severity, Severity::Warning);
    }

    #[test]
    fn test_rule_addressed_by_alias() {
        let rules = RuleFactory::build(&effective(json!({
            "default": false,
            "line-length": {"line_length": 20}
        })));

        assert_eq!(ids(&rules), vec!["MD013"]);
    }

    #[test]
    fn test_id_wins_over_alias() {
        let entry = find_rule("MD013").unwrap();
        let setting = RuleFactory::setting_for(
            entry,
            &effective(json!({"line-length": false, "MD013": "warning"})),
        );
        assert_eq!(setting, RuleSetting::Enabled(Severity::Warning));
    }

    #[test]
    fn test_build_preserves_catalog_order() {
        let rules = RuleFactory::build(&effective(json!({
            "default": false,
            "MD047": true,
            "MD001": true,
            "MD025": true
        })));

        assert_eq!(ids(&rules), vec!["MD001", "MD025", "MD047"]);
    }

    #[test]
    fn test_non_boolean_default_ignored() {
        let rules = RuleFactory::build(&effective(json!({"default": "nope"})));
        assert_eq!(rules.len(), catalog().len());
    }
}
