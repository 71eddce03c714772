//! Evaluation metrics
//!
//! Scores predicted labels against ground truth. All counts are plain
//! additive tallies; nothing is normalized or weighted.
//!
//! ```text
//! accuracy          = correct / total
//! precision(label)  = tp / (tp + fp)
//! ```

use crate::errors::{MetricsError, MetricsResult};
use crate::label::Label;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

/// One ground-truth/prediction pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredictionResult {
    /// Label the session was recorded as
    pub true_label: Label,
    /// Label the classifier returned
    pub predicted_label: Label,
}

impl PredictionResult {
    /// Pair a ground-truth label with a prediction
    pub const fn new(true_label: Label, predicted_label: Label) -> Self {
        Self { true_label, predicted_label }
    }

    /// Whether the prediction matches ground truth
    pub fn is_correct(&self) -> bool {
        self.true_label == self.predicted_label
    }
}

/// Counts keyed by `(true_label, predicted_label)`
///
/// Only pairs that occurred are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    counts: BTreeMap<(Label, Label), usize>,
}

impl ConfusionMatrix {
    /// Empty matrix
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one prediction
    pub fn record(&mut self, result: &PredictionResult) {
        *self
            .counts
            .entry((result.true_label, result.predicted_label))
            .or_insert(0) += 1;
    }

    /// Count for a pair, zero if it never occurred
    pub fn get(&self, true_label: Label, predicted_label: Label) -> usize {
        self.counts.get(&(true_label, predicted_label)).copied().unwrap_or(0)
    }

    /// Sum of all cells
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Occurring pairs in label order
    pub fn iter(&self) -> impl Iterator<Item = ((Label, Label), usize)> + '_ {
        self.counts.iter().map(|(&pair, &count)| (pair, count))
    }

    /// Labels appearing on either side, in [`Label`] declaration order
    pub fn labels(&self) -> Vec<Label> {
        let mut labels: Vec<Label> = self
            .counts
            .keys()
            .flat_map(|&(t, p)| [t, p])
            .collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

impl<'a> Extend<&'a PredictionResult> for ConfusionMatrix {
    fn extend<I: IntoIterator<Item = &'a PredictionResult>>(&mut self, iter: I) {
        for result in iter {
            self.record(result);
        }
    }
}

impl fmt::Display for ConfusionMatrix {
    /// One line per true label: `Up: Up=3, Down=1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = self.labels();
        for true_label in &labels {
            write!(f, "{}:", true_label)?;
            let mut first = true;
            for predicted in &labels {
                let count = self.get(*true_label, *predicted);
                if count == 0 {
                    continue;
                }
                let sep = if first { " " } else { ", " };
                write!(f, "{}{}={}", sep, predicted, count)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fraction of predictions that match ground truth
pub fn calculate_accuracy(results: &[PredictionResult]) -> MetricsResult<f64> {
    if results.is_empty() {
        return Err(MetricsError::EmptyResults);
    }
    let correct = results.iter().filter(|r| r.is_correct()).count();
    Ok(correct as f64 / results.len() as f64)
}

/// Precision of one label, `0.0` when it was never predicted
pub fn calculate_precision(label: Label, results: &[PredictionResult]) -> f64 {
    let (tp, fp) = results
        .iter()
        .filter(|r| r.predicted_label == label)
        .fold((0usize, 0usize), |(tp, fp), r| {
            if r.true_label == label {
                (tp + 1, fp)
            } else {
                (tp, fp + 1)
            }
        });

    if tp + fp == 0 {
        0.0
    } else {
        tp as f64 / (tp + fp) as f64
    }
}

/// Tally predictions by `(true_label, predicted_label)`
pub fn calculate_confusion_matrix(results: &[PredictionResult]) -> ConfusionMatrix {
    let mut matrix = ConfusionMatrix::new();
    matrix.extend(results);
    matrix
}

/// All metrics for an evaluation run
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationReport {
    /// Labels seen as truth or prediction, in [`Label`] declaration order
    pub labels: Vec<Label>,
    /// Confusion matrix over all results
    pub confusion_matrix: ConfusionMatrix,
    /// Overall accuracy, `None` for an empty run
    pub accuracy: Option<f64>,
    /// Precision per entry of `labels`
    pub precision: Vec<(Label, f64)>,
    /// Number of results scored
    pub total: usize,
}

impl ClassificationReport {
    /// Build a report from raw results
    pub fn from_results(results: &[PredictionResult]) -> Self {
        let confusion_matrix = calculate_confusion_matrix(results);
        let labels = confusion_matrix.labels();
        let precision = labels
            .iter()
            .map(|&label| (label, calculate_precision(label, results)))
            .collect();

        Self {
            accuracy: calculate_accuracy(results).ok(),
            total: results.len(),
            labels,
            confusion_matrix,
            precision,
        }
    }

    /// Precision for one label, if it appeared in the run
    pub fn precision_of(&self, label: Label) -> Option<f64> {
        self.precision
            .iter()
            .find(|(l, _)| *l == label)
            .map(|&(_, p)| p)
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.accuracy {
            Some(accuracy) => writeln!(
                f,
                "Accuracy: {:.2}% ({} results)",
                accuracy * 100.0,
                self.total
            )?,
            None => writeln!(f, "Accuracy: n/a (no results)")?,
        }
        for (label, precision) in &self.precision {
            writeln!(f, "Precision {}: {:.2}%", label, precision * 100.0)?;
        }
        write!(f, "Confusion matrix:\n{}", self.confusion_matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn results() -> Vec<PredictionResult> {
        vec![
            PredictionResult::new(Label::Up, Label::Up),
            PredictionResult::new(Label::Up, Label::Down),
            PredictionResult::new(Label::Down, Label::Down),
            PredictionResult::new(Label::Straight, Label::Straight),
            PredictionResult::new(Label::Straight, Label::Down),
            PredictionResult::new(Label::Straight, Label::InsufficientData),
        ]
    }

    #[test]
    fn accuracy() {
        let half = [
            PredictionResult::new(Label::Up, Label::Up),
            PredictionResult::new(Label::Up, Label::Down),
        ];
        assert_eq!(calculate_accuracy(&half), Ok(0.5));
        assert_eq!(calculate_accuracy(&results()), Ok(0.5));
        assert_eq!(calculate_accuracy(&[]), Err(MetricsError::EmptyResults));
    }

    #[test]
    fn precision() {
        let results = results();
        assert_eq!(calculate_precision(Label::Up, &results), 1.0);
        assert!((calculate_precision(Label::Down, &results) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(calculate_precision(Label::Straight, &results), 1.0);
        assert_eq!(calculate_precision(Label::Up, &[]), 0.0);

        // Never predicted, though present as truth
        let missed = [PredictionResult::new(Label::Up, Label::Down)];
        assert_eq!(calculate_precision(Label::Up, &missed), 0.0);
    }

    #[test]
    fn confusion_matrix_counts() {
        let results = results();
        let matrix = calculate_confusion_matrix(&results);

        assert_eq!(matrix.total(), results.len());
        assert_eq!(matrix.get(Label::Up, Label::Down), 1);
        assert_eq!(matrix.get(Label::Down, Label::Up), 0);
        assert_eq!(matrix.labels(), Label::ALL.to_vec());
        assert_eq!(matrix.iter().count(), 6);
    }

    #[test]
    fn confusion_matrix_display() {
        let matrix = calculate_confusion_matrix(&[
            PredictionResult::new(Label::Up, Label::Up),
            PredictionResult::new(Label::Up, Label::Up),
            PredictionResult::new(Label::Up, Label::Down),
        ]);
        assert_eq!(matrix.to_string(), "Up: Up=2, Down=1\nDown:\n");
    }

    #[test]
    fn report() {
        let report = ClassificationReport::from_results(&results());
        assert_eq!(report.accuracy, Some(0.5));
        assert_eq!(report.total, 6);
        assert_eq!(report.labels.len(), 4);
        assert_eq!(report.precision_of(Label::InsufficientData), Some(0.0));

        let empty = ClassificationReport::from_results(&[]);
        assert_eq!(empty.accuracy, None);
        assert!(empty.labels.is_empty());
        assert!(empty.to_string().starts_with("Accuracy: n/a"));
    }
}
