//! Per-label hypotheses
//!
//! When a session is recorded with a known movement, the question is not
//! only "what did the classifier say" but "did this session show the
//! signature we expect for its movement". Each movement label gets a
//! hypothesis over the two features:
//!
//! - **Up**: both features exceed the `up` pair
//! - **Down**: both features exceed the `down` pair
//! - **Straight**: neither pair is exceeded
//!
//! `InsufficientData` has no hypothesis.

use crate::config::{ClassifierConfig, Threshold};
use crate::features::MovementFeatures;
use crate::label::Label;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Rule {
    Exceeds(Threshold),
    ExceedsNeither(Threshold, Threshold),
}

/// Expected feature signature for one movement label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hypothesis {
    label: Label,
    rule: Rule,
}

impl Hypothesis {
    /// Hypothesis for `label` under `config`, `None` for the no-data sentinel
    pub fn for_label(label: Label, config: &ClassifierConfig) -> Option<Self> {
        let rule = match label {
            Label::Up => Rule::Exceeds(config.up),
            Label::Down => Rule::Exceeds(config.down),
            Label::Straight => Rule::ExceedsNeither(config.up, config.down),
            Label::InsufficientData => return None,
        };
        Some(Self { label, rule })
    }

    /// Label this hypothesis is about
    pub fn label(&self) -> Label {
        self.label
    }

    /// Whether the features match the expected signature
    pub fn holds(&self, features: &MovementFeatures) -> bool {
        match self.rule {
            Rule::Exceeds(threshold) => threshold.exceeded_by(features),
            Rule::ExceedsNeither(up, down) => {
                !up.exceeded_by(features) && !down.exceeded_by(features)
            }
        }
    }
}
