//! Carrier-phrase templates surrounding one entity placeholder.

use crate::error::ConfigError;
use crate::types::EntityLabel;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pattern of leading and trailing phrases around one entity.
///
/// An empty string is a valid option and contributes no text.
#[derive(Clone, Copy, Debug)]
pub struct Template {
    pub before: &'static [&'static str],
    pub label: EntityLabel,
    pub after: &'static [&'static str],
}

impl Template {
    pub const fn new(
        before: &'static [&'static str],
        label: EntityLabel,
        after: &'static [&'static str],
    ) -> Self {
        Self {
            before,
            label,
            after,
        }
    }

    /// Pick a leading phrase uniformly.
    pub fn choose_before<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.before.choose(rng).copied().unwrap_or_default()
    }

    /// Pick a trailing phrase uniformly.
    pub fn choose_after<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.after.choose(rng).copied().unwrap_or_default()
    }
}

/// Built-in template catalog.
pub static TEMPLATES: &[Template] = &[
    Template::new(&["my email is"], EntityLabel::Email, &["please contact me"]),
    Template::new(&["contact me at"], EntityLabel::Email, &[""]),
    Template::new(&["the card number is"], EntityLabel::CreditCard, &["for payment"]),
    Template::new(&["charge my card"], EntityLabel::CreditCard, &[""]),
    Template::new(&["call me at"], EntityLabel::Phone, &[""]),
    Template::new(&["my phone number is"], EntityLabel::Phone, &["thanks"]),
    Template::new(&["i was born on"], EntityLabel::Date, &["in the city"]),
    Template::new(&["the date is"], EntityLabel::Date, &["today"]),
    Template::new(&["my name is"], EntityLabel::PersonName, &["and i live in"]),
    Template::new(&["this is"], EntityLabel::PersonName, &["speaking"]),
    Template::new(&["i am in"], EntityLabel::City, &["right now"]),
    Template::new(&["traveling to"], EntityLabel::City, &["tomorrow"]),
    Template::new(&["located at"], EntityLabel::Location, &["near the bank"]),
];

/// Check that a catalog can be sampled from.
///
/// Every template needs at least one before and one after option; use `""` for none.
pub fn validate_catalog(templates: &[Template]) -> Result<(), ConfigError> {
    if templates.is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }

    for (index, template) in templates.iter().enumerate() {
        let side = if template.before.is_empty() {
            "before"
        } else if template.after.is_empty() {
            "after"
        } else {
            continue;
        };

        return Err(ConfigError::EmptyOptions {
            index,
            label: template.label,
            side,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(validate_catalog(TEMPLATES).is_ok());
    }

    #[test]
    fn builtin_catalog_covers_every_label() {
        let labels: HashSet<_> = TEMPLATES.iter().map(|t| t.label).collect();

        for label in EntityLabel::ALL {
            assert!(labels.contains(&label), "no template for {label}");
        }
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(validate_catalog(&[]), Err(ConfigError::EmptyCatalog)));
    }

    #[test]
    fn rejects_template_without_options() {
        let templates = [
            Template::new(&["call me at"], EntityLabel::Phone, &[""]),
            Template::new(&["i am in"], EntityLabel::City, &[]),
        ];

        assert!(matches!(
            validate_catalog(&templates),
            Err(ConfigError::EmptyOptions {
                index: 1,
                label: EntityLabel::City,
                side: "after"
            })
        ));
    }
}
