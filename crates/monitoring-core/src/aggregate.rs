//! Single-pass aggregation of scanned prediction records.

use chrono::{DateTime, Utc};

use crate::model::{PredictionMetrics, PredictionRecord};

/// Sentiment label counted towards `positive_ratio` (exact, case-sensitive).
pub const POSITIVE_SENTIMENT: &str = "positive";

/// Summarize a full scan.
///
/// Every record counts towards `total_predictions`. A confidence that is
/// missing, unparseable, or not finite adds nothing to the sum but the record
/// still counts, so `avg_confidence` is `sum / total`. Ratios stay 0 for an
/// empty scan.
pub fn summarize<'a, I>(records: I, now: DateTime<Utc>) -> PredictionMetrics
where
    I: IntoIterator<Item = &'a PredictionRecord>,
{
    let mut total: u64 = 0;
    let mut positive: u64 = 0;
    let mut confidence_sum = 0.0_f64;

    for record in records {
        total += 1;

        if record.sentiment.as_deref() == Some(POSITIVE_SENTIMENT) {
            positive += 1;
        }

        match record.confidence.as_deref().map(parse_confidence) {
            Some(Some(v)) => confidence_sum += v,
            Some(None) => {
                tracing::trace!(confidence = ?record.confidence, "skipping unparseable confidence");
            }
            None => {}
        }
    }

    let mut metrics = PredictionMetrics {
        total_predictions: total,
        positive_ratio: 0.0,
        avg_confidence: 0.0,
        timestamp: now,
    };

    if total > 0 {
        metrics.positive_ratio = positive as f64 / total as f64;
        metrics.avg_confidence = confidence_sum / total as f64;
    }

    metrics
}

fn parse_confidence(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn empty_scan_keeps_zero_ratios() {
        let m = summarize(&Vec::<PredictionRecord>::new(), Utc::now());
        assert_eq!(m.total_predictions, 0);
        assert_eq!(m.positive_ratio, 0.0);
        assert_eq!(m.avg_confidence, 0.0);
    }

    #[test]
    fn mixed_sentiment_scenario() {
        let records = vec![
            PredictionRecord::new("positive", "0.9"),
            PredictionRecord::new("positive", "0.8"),
            PredictionRecord::new("negative", "0.5"),
        ];
        let m = summarize(&records, Utc::now());
        assert_eq!(m.total_predictions, 3);
        assert!(approx(m.positive_ratio, 0.6667));
        assert!(approx(m.avg_confidence, 0.7333));
    }

    #[test]
    fn positive_ratio_is_exact_fraction() {
        let mut records: Vec<PredictionRecord> = (0..7)
            .map(|_| PredictionRecord::new("negative", "1"))
            .collect();
        records.push(PredictionRecord::new("positive", "1"));
        let m = summarize(&records, Utc::now());
        assert_eq!(m.positive_ratio, 1.0 / 8.0);
    }

    #[test]
    fn sentiment_match_is_literal() {
        let records = vec![
            PredictionRecord::new("Positive", "0.5"),
            PredictionRecord::new(" positive", "0.5"),
        ];
        let m = summarize(&records, Utc::now());
        assert_eq!(m.positive_ratio, 0.0);
    }

    #[test]
    fn bad_confidence_is_skipped_not_fatal() {
        let records = vec![
            PredictionRecord::new("positive", "0.6"),
            PredictionRecord::new("negative", "high"),
            PredictionRecord::new("negative", "NaN"),
            PredictionRecord {
                sentiment: None,
                confidence: None,
            },
        ];
        let m = summarize(&records, Utc::now());
        assert_eq!(m.total_predictions, 4);
        assert_eq!(m.positive_ratio, 0.25);
        assert!(approx(m.avg_confidence, 0.15));
    }
}
