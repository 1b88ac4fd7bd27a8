//! Sample assembly: template selection, per-fragment noise and offset bookkeeping.

use crate::error::Result;
use crate::noise::NoiseConfig;
use crate::provider::ValueProvider;
use crate::template::{Template, validate_catalog};
use crate::types::{EntityLabel, EntitySpan, Record};
use rand::Rng;

/// Separator inserted between segments
const SEGMENT_SEPARATOR: &str = " and ";

/// Maximum number of segments per sample
const MAX_SEGMENTS: usize = 2;

/// One template instantiation after noise has been applied to each fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoisedSegment {
    pub before: String,
    pub entity: String,
    pub after: String,
    pub label: EntityLabel,
}

/// Text buffer that tracks its length in characters.
#[derive(Debug, Default)]
struct Stitcher {
    text: String,
    chars: usize,
}

impl Stitcher {
    fn push(&mut self, s: &str) {
        self.text.push_str(s);
        self.chars += s.chars().count();
    }

    fn push_segment(&mut self, segment: &NoisedSegment) -> EntitySpan {
        if !self.text.is_empty() {
            self.push(SEGMENT_SEPARATOR);
        }

        if !segment.before.is_empty() {
            self.push(&segment.before);
            self.push(" ");
        }

        let start = self.chars;
        self.push(&segment.entity);
        let end = self.chars;

        if !segment.after.is_empty() {
            self.push(" ");
            self.push(&segment.after);
        }

        EntitySpan::new(start, end, segment.label)
    }
}

/// Concatenate noised segments, recording each entity's character span.
///
/// For every returned span, the text between `start` and `end` is exactly the
/// corresponding segment's `entity`.
pub fn stitch<'a, I>(segments: I) -> (String, Vec<EntitySpan>)
where
    I: IntoIterator<Item = &'a NoisedSegment>,
{
    let mut stitcher = Stitcher::default();
    let spans = segments
        .into_iter()
        .map(|segment| stitcher.push_segment(segment))
        .collect();

    (stitcher.text, spans)
}

/// Generates records from a template catalog and a value provider.
#[derive(Debug)]
pub struct SampleAssembler<'a, P> {
    templates: &'a [Template],
    provider: P,
    noise: NoiseConfig,
}

impl<'a, P: ValueProvider> SampleAssembler<'a, P> {
    /// Create an assembler, rejecting catalogs that cannot be sampled from.
    pub fn new(templates: &'a [Template], provider: P, noise: NoiseConfig) -> Result<Self> {
        validate_catalog(templates)?;
        noise.validate()?;

        Ok(Self {
            templates,
            provider,
            noise,
        })
    }

    pub fn noise_config(&self) -> &NoiseConfig {
        &self.noise
    }

    /// Catalog the assembler draws from.
    pub fn templates(&self) -> &[Template] {
        self.templates
    }

    /// Generate one record with one or two segments.
    ///
    /// Provider failures are returned unchanged.
    pub fn generate_sample<R: Rng + ?Sized>(
        &self,
        id: impl Into<String>,
        rng: &mut R,
    ) -> Result<Record> {
        let num_segments = rng.random_range(1..=MAX_SEGMENTS);

        let segments = (0..num_segments)
            .map(|_| self.noised_segment(rng))
            .collect::<Result<Vec<_>>>()?;

        let (text, entities) = stitch(&segments);
        let record = Record {
            id: id.into(),
            text,
            entities,
        };

        tracing::trace!(
            id = %record.id,
            segments = num_segments,
            text = %record.text,
            "generated sample"
        );

        Ok(record)
    }

    /// Generate `count` records with ids `{prefix}_{i:04}`.
    pub fn generate_split<'r, R: Rng + ?Sized>(
        &'r self,
        prefix: &'r str,
        count: usize,
        rng: &'r mut R,
    ) -> impl Iterator<Item = Result<Record>> + 'r {
        (0..count).map(move |i| self.generate_sample(format!("{prefix}_{i:04}"), rng))
    }

    /// Draw a template and noise its three fragments independently.
    fn noised_segment<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NoisedSegment> {
        let template = &self.templates[rng.random_range(0..self.templates.len())];

        let raw = self.provider.value(template.label, rng)?;

        let before = self.noise.apply(template.choose_before(rng), rng);
        let entity = self.noise.apply(&raw, rng);
        let after = self.noise.apply(template.choose_after(rng), rng);

        tracing::trace!(
            label = %template.label,
            raw = %raw,
            entity = %entity,
            "noised segment"
        );

        Ok(NoisedSegment {
            before,
            entity,
            after,
            label: template.label,
        })
    }
}
