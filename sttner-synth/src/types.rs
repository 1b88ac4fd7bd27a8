//! Core types for sttner-synth

use crate::error::SpanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity categories emitted by the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Email,
    CreditCard,
    Phone,
    Date,
    PersonName,
    City,
    Location,
}

impl EntityLabel {
    /// Every label, in declaration order.
    pub const ALL: [EntityLabel; 7] = [
        EntityLabel::Email,
        EntityLabel::CreditCard,
        EntityLabel::Phone,
        EntityLabel::Date,
        EntityLabel::PersonName,
        EntityLabel::City,
        EntityLabel::Location,
    ];

    /// Serialized name, e.g. `CREDIT_CARD`.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityLabel::Email => "EMAIL",
            EntityLabel::CreditCard => "CREDIT_CARD",
            EntityLabel::Phone => "PHONE",
            EntityLabel::Date => "DATE",
            EntityLabel::PersonName => "PERSON_NAME",
            EntityLabel::City => "CITY",
            EntityLabel::Location => "LOCATION",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labeled entity span.
///
/// Offsets are half-open character (not byte) indices into [`Record::text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Start character index (inclusive)
    pub start: usize,
    /// End character index (exclusive)
    pub end: usize,
    /// Entity category
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, label: EntityLabel) -> Self {
        Self { start, end, label }
    }

    /// Number of characters covered by the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One generated training example.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Utterance id, e.g. `utt_train_0042`
    pub id: String,
    /// Noisy transcript text
    pub text: String,
    /// Entity spans in generation order
    pub entities: Vec<EntitySpan>,
}

impl Record {
    /// Number of characters in `text`.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Slice `text` by the span's character offsets.
    ///
    /// Returns `None` if the span is inverted or reaches past the end of the text.
    pub fn span_text(&self, span: &EntitySpan) -> Option<&str> {
        if span.start > span.end {
            return None;
        }
        let start = char_to_byte(&self.text, span.start)?;
        let end = char_to_byte(&self.text, span.end)?;
        self.text.get(start..end)
    }

    /// Check every span against the text.
    ///
    /// Spans must lie within the text, must not begin or end with whitespace, and must
    /// appear in order without overlapping.
    pub fn validate(&self) -> Result<(), SpanError> {
        let len = self.char_len();
        let mut prev_end = 0;

        for (index, span) in self.entities.iter().enumerate() {
            if span.start > span.end {
                return Err(SpanError::Inverted {
                    index,
                    start: span.start,
                    end: span.end,
                });
            }
            if span.end > len {
                return Err(SpanError::OutOfBounds {
                    index,
                    end: span.end,
                    len,
                });
            }
            if span.start < prev_end {
                return Err(SpanError::Overlap {
                    index,
                    start: span.start,
                    prev_end,
                });
            }

            let text = self.span_text(span).unwrap_or_default();
            if text.trim() != text {
                return Err(SpanError::Whitespace {
                    index,
                    text: text.to_string(),
                });
            }

            prev_end = span.end;
        }

        Ok(())
    }
}

/// Convert a character index to a byte index, allowing the one-past-the-end position.
fn char_to_byte(text: &str, char_index: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(char_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, entities: Vec<EntitySpan>) -> Record {
        Record {
            id: "utt_test_0000".to_string(),
            text: text.to_string(),
            entities,
        }
    }

    #[test]
    fn slices_by_characters_not_bytes() {
        let rec = record(
            "this is zoë müller speaking",
            vec![EntitySpan::new(8, 18, EntityLabel::PersonName)],
        );

        assert_eq!(rec.span_text(&rec.entities[0]), Some("zoë müller"));
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn span_may_end_at_text_end() {
        let rec = record("call me at 555", vec![EntitySpan::new(11, 14, EntityLabel::Phone)]);

        assert_eq!(rec.span_text(&rec.entities[0]), Some("555"));
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_bounds_span() {
        let rec = record("call me at 555", vec![EntitySpan::new(11, 15, EntityLabel::Phone)]);

        assert_eq!(rec.span_text(&rec.entities[0]), None);
        assert_eq!(
            rec.validate(),
            Err(SpanError::OutOfBounds {
                index: 0,
                end: 15,
                len: 14
            })
        );
    }

    #[test]
    fn rejects_whitespace_truncated_span() {
        let rec = record("call me at 555", vec![EntitySpan::new(10, 14, EntityLabel::Phone)]);

        assert!(matches!(
            rec.validate(),
            Err(SpanError::Whitespace { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_overlapping_spans() {
        let rec = record(
            "paris and rome",
            vec![
                EntitySpan::new(0, 5, EntityLabel::City),
                EntitySpan::new(4, 5, EntityLabel::City),
            ],
        );

        assert!(matches!(
            rec.validate(),
            Err(SpanError::Overlap { index: 1, .. })
        ));
    }

    #[test]
    fn serializes_with_upper_snake_labels() {
        let rec = record("charge my card 4111", vec![EntitySpan::new(15, 19, EntityLabel::CreditCard)]);

        let json = serde_json::to_string(&rec).unwrap();

        assert_eq!(
            json,
            r#"{"id":"utt_test_0000","text":"charge my card 4111","entities":[{"start":15,"end":19,"label":"CREDIT_CARD"}]}"#
        );
    }

    #[test]
    fn label_names_match_serde() {
        for label in EntityLabel::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{label}\""));
        }
    }
}
