//! Ordered pattern→transform rule lists.
//!
//! Every regex-driven attribute is extracted by a [`Cascade`]: an explicit,
//! ordered list of rules where the first rule whose pattern matches wins and
//! no further rule is tried. Rule order is semantic and auditable through
//! [`Cascade::rule_names`].

use regex::{Captures, Regex};

/// A single pattern→transform pair within a cascade.
pub struct CascadeRule {
    name: &'static str,
    pattern: Regex,
    transform: fn(&Captures) -> String,
}

impl CascadeRule {
    /// Build a rule from a pattern literal. Patterns are authored against
    /// already lower-cased input.
    pub fn new(name: &'static str, pattern: &str, transform: fn(&Captures) -> String) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("invalid cascade pattern"),
            transform,
        }
    }

    /// Short rule name used in tests and priority audits.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// An ordered first-match-wins rule list for one attribute.
pub struct Cascade {
    rules: Vec<CascadeRule>,
}

impl Cascade {
    /// Build a cascade; rule order is the priority order.
    pub fn new(rules: Vec<CascadeRule>) -> Self {
        Self { rules }
    }

    /// Apply the cascade: the first rule whose pattern matches produces the
    /// value; later rules are shadowed. `None` when no rule matches.
    pub fn apply(&self, text: &str) -> Option<String> {
        self.rules
            .iter()
            .find_map(|rule| rule.pattern.captures(text).map(|caps| (rule.transform)(&caps)))
    }

    /// Like [`Cascade::apply`] but reports which rule fired.
    pub fn apply_named(&self, text: &str) -> Option<(&'static str, String)> {
        self.rules.iter().find_map(|rule| {
            rule.pattern
                .captures(text)
                .map(|caps| (rule.name, (rule.transform)(&caps)))
        })
    }

    /// Rule names in priority order, for auditing shadowing semantics.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(CascadeRule::name).collect()
    }
}

/// Transform: the whole match, as matched.
pub fn whole_match(caps: &Captures) -> String {
    caps[0].to_string()
}

/// Transform: the first capture group, as matched.
pub fn first_capture(caps: &Captures) -> String {
    caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits_cascade() -> Cascade {
        Cascade::new(vec![
            CascadeRule::new("pair", r"(\d\d)", first_capture),
            CascadeRule::new("single", r"(\d)", first_capture),
        ])
    }

    #[test]
    fn first_matching_rule_wins() {
        let cascade = digits_cascade();
        assert_eq!(cascade.apply("x 42 y"), Some("42".to_string()));
        assert_eq!(cascade.apply("x 4 y"), Some("4".to_string()));
        assert_eq!(cascade.apply("none"), None);
    }

    #[test]
    fn apply_named_reports_the_firing_rule() {
        let cascade = digits_cascade();
        assert_eq!(cascade.apply_named("42"), Some(("pair", "42".to_string())));
        assert_eq!(cascade.apply_named("4"), Some(("single", "4".to_string())));
    }

    #[test]
    fn rule_names_expose_priority_order() {
        assert_eq!(digits_cascade().rule_names(), vec!["pair", "single"]);
    }
}
