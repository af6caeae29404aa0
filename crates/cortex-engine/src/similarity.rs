//! Weighted artifact-to-artifact similarity

use crate::config::{NormalizedWeights, WeightConfig};
use crate::error::{EngineError, SimilarityError};
use crate::tags::tag_score;
use crate::text::attribute_score;
use cortex_domain::{Artifact, SimilarityScore};
use tracing::debug;

/// Combines per-attribute similarity scores into one weighted score.
///
/// The engine captures a normalized copy of the weight table at
/// construction; reconstructing the engine is the only way to change
/// weights. Scoring is a pure function of the two artifacts and the
/// captured weights — no side effects beyond `tracing` debug events.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    weights: NormalizedWeights,
}

impl SimilarityEngine {
    /// Create an engine from a weight configuration.
    ///
    /// Rejects negative or non-finite weights; an all-zero table falls
    /// back to an equal split across the four attributes.
    pub fn new(config: &WeightConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            weights: config.normalized(),
        })
    }

    /// Create an engine with the default weight configuration
    pub fn with_defaults() -> Self {
        Self {
            weights: WeightConfig::default().normalized(),
        }
    }

    /// Compute the weighted similarity of two artifacts.
    ///
    /// Two artifacts with the same id score 0: self-comparison is never a
    /// valid connection. Absent attributes participate as empty (scoring 0
    /// for that component). The result is bounded in [0, 100].
    pub fn score(
        &self,
        a: &Artifact,
        b: &Artifact,
    ) -> Result<SimilarityScore, SimilarityError> {
        if let (Some(id_a), Some(id_b)) = (a.id, b.id) {
            if id_a == id_b {
                return Ok(SimilarityScore::zero());
            }
        }

        let title = attribute_score(&a.title, &b.title);
        let description = attribute_score(&a.description, &b.description);
        let content = attribute_score(&a.content, &b.content);
        let tags = tag_score(&a.tags, &b.tags);

        let combined = self.weights.title * title.value()
            + self.weights.description * description.value()
            + self.weights.content * content.value()
            + self.weights.tags * tags.value();

        if !combined.is_finite() {
            return Err(SimilarityError::NonFinite);
        }

        debug!(
            title = title.value(),
            description = description.value(),
            content = content.value(),
            tags = tags.value(),
            combined,
            "scored artifact pair"
        );

        Ok(SimilarityScore::new(combined))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use cortex_domain::{ArtifactId, ProjectId};
    use proptest::prelude::*;

    proptest! {
        /// Property: pair scores are always within [0, 100]
        #[test]
        fn test_pair_score_bounds(
            title_a in ".{0,20}",
            title_b in ".{0,20}",
            description_a in ".{0,20}",
            description_b in ".{0,20}",
            w_title in 0.0f64..5.0,
            w_description in 0.0f64..5.0,
            w_content in 0.0f64..5.0,
            w_tags in 0.0f64..5.0,
        ) {
            let engine = SimilarityEngine::new(&WeightConfig {
                title: w_title,
                description: w_description,
                content: w_content,
                tags: w_tags,
            }).unwrap();

            let a = Artifact::new(ProjectId::from_value(1), title_a)
                .with_description(description_a)
                .with_id(ArtifactId::from_value(1));
            let b = Artifact::new(ProjectId::from_value(1), title_b)
                .with_description(description_b)
                .with_id(ArtifactId::from_value(2));

            let score = engine.score(&a, &b).unwrap();
            prop_assert!(score.value() >= 0.0 && score.value() <= 100.0);
        }
    }
}
