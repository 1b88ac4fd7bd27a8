//! Raw entity values for each label.

use crate::error::ProviderError;
use crate::types::EntityLabel;
use chrono::NaiveDate;
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::creditcard::en::CreditCardNumber;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

/// Days from 0001-01-01 to 1970-01-01
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Days from 0001-01-01 to 2025-12-31
const LATEST_DAYS_FROM_CE: i32 = 739_616;

/// Source of realistic raw strings, one operation per entity label.
///
/// Values must be non-empty and contain no line breaks.
pub trait ValueProvider {
    fn email<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError>;

    fn credit_card<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError>;

    fn phone<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError>;

    fn date<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError>;

    fn person_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError>;

    fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError>;

    fn address<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError>;

    /// Dispatch to the operation for `label`.
    fn value<R: Rng + ?Sized>(
        &self,
        label: EntityLabel,
        rng: &mut R,
    ) -> Result<String, ProviderError> {
        match label {
            EntityLabel::Email => self.email(rng),
            EntityLabel::CreditCard => self.credit_card(rng),
            EntityLabel::Phone => self.phone(rng),
            EntityLabel::Date => self.date(rng),
            EntityLabel::PersonName => self.person_name(rng),
            EntityLabel::City => self.city(rng),
            EntityLabel::Location => self.address(rng),
        }
    }
}

/// English-locale provider backed by the `fake` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FakeProvider;

impl ValueProvider for FakeProvider {
    fn email<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError> {
        Ok(SafeEmail().fake_with_rng(rng))
    }

    fn credit_card<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError> {
        Ok(CreditCardNumber().fake_with_rng(rng))
    }

    fn phone<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError> {
        Ok(PhoneNumber().fake_with_rng(rng))
    }

    /// ISO date between 1970-01-01 and 2025-12-31.
    fn date<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError> {
        let days = rng.random_range(EPOCH_DAYS_FROM_CE..=LATEST_DAYS_FROM_CE);

        NaiveDate::from_num_days_from_ce_opt(days)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .ok_or_else(|| ProviderError::Failed {
                label: EntityLabel::Date,
                message: format!("day {days} is out of range"),
            })
    }

    fn person_name<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError> {
        Ok(Name().fake_with_rng(rng))
    }

    fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError> {
        Ok(CityName().fake_with_rng(rng))
    }

    /// Single-line US-style street address.
    fn address<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ProviderError> {
        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let state: String = StateAbbr().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);

        Ok(format!("{building} {street}, {city}, {state} {zip}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn provides_non_empty_single_line_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let provider = FakeProvider;

        for _ in 0..50 {
            for label in EntityLabel::ALL {
                let value = provider.value(label, &mut rng).unwrap();
                assert!(!value.trim().is_empty(), "{label} value is empty");
                assert!(!value.contains(['\n', '\r']), "{label} value {value:?}");
            }
        }
    }

    #[test]
    fn emails_contain_at_sign() {
        let mut rng = StdRng::seed_from_u64(7);

        let email = FakeProvider.value(EntityLabel::Email, &mut rng).unwrap();

        assert!(email.contains('@'), "{email}");
    }

    #[test]
    fn dates_are_iso_formatted() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let date = FakeProvider.date(&mut rng).unwrap();
            let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d").unwrap();
            assert!((1970..=2025).contains(&chrono::Datelike::year(&parsed)));
        }
    }

    #[test]
    fn same_seed_same_values() {
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);

        for label in EntityLabel::ALL {
            assert_eq!(
                FakeProvider.value(label, &mut a).unwrap(),
                FakeProvider.value(label, &mut b).unwrap()
            );
        }
    }
}
