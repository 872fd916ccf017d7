use crate::domain::{AnnotatedRepository, AnnotationSummary};

/// Computes totals, the most-annotated repositories and term usage counts.
///
/// Pure over the given snapshot; every repository tied at the maximum term
/// count is kept as a holder.
pub fn summarize(records: &[AnnotatedRepository]) -> AnnotationSummary {
    let (max_count, max_holders) = records.iter().fold(
        (0usize, Vec::new()),
        |(max, mut holders): (usize, Vec<AnnotatedRepository>), record| {
            let len = record.term_count();
            if len > max {
                (len, vec![record.clone()])
            } else {
                if len == max {
                    holders.push(record.clone());
                }
                (max, holders)
            }
        },
    );

    let mut summary = AnnotationSummary {
        total_count: records.len(),
        max_count,
        max_holders,
        ..Default::default()
    };

    for term in records.iter().flat_map(|r| r.terms()) {
        *summary.term_histogram.entry(term.clone()).or_insert(0) += 1;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(id: i64, terms: &[&str]) -> AnnotatedRepository {
        AnnotatedRepository::new(id, "owner", format!("repo{}", id)).with_terms(terms.iter().copied())
    }

    fn holder_ids(summary: &AnnotationSummary) -> Vec<i64> {
        summary.max_holders.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_empty_input() {
        let summary = summarize(&[]);

        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.max_count, 0);
        assert!(summary.max_holders.is_empty());
        assert!(summary.term_histogram.is_empty());
        assert_eq!(summary, AnnotationSummary::default());
    }

    #[test]
    fn test_single_winner_and_histogram() {
        let records = vec![repo(1, &[]), repo(2, &["a", "b"]), repo(3, &["a"])];
        let summary = summarize(&records);

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.max_count, 2);
        assert_eq!(holder_ids(&summary), vec![2]);
        assert_eq!(summary.usage_of("a"), 2);
        assert_eq!(summary.usage_of("b"), 1);
        assert_eq!(summary.term_histogram.len(), 2);
    }

    #[test]
    fn test_all_tied_winners_are_kept() {
        let records = vec![repo(1, &["a", "b"]), repo(2, &["c", "d"])];
        let summary = summarize(&records);

        assert_eq!(summary.max_count, 2);
        assert_eq!(holder_ids(&summary), vec![1, 2]);
    }

    #[test]
    fn test_larger_count_reseeds_holders() {
        let records = vec![
            repo(1, &["a"]),
            repo(2, &["b"]),
            repo(3, &["a", "b", "c"]),
            repo(4, &["c"]),
            repo(5, &["d", "e", "f"]),
        ];
        let summary = summarize(&records);

        assert_eq!(summary.max_count, 3);
        assert_eq!(holder_ids(&summary), vec![3, 5]);
    }

    #[test]
    fn test_only_empty_records_are_all_holders_of_zero() {
        let records = vec![repo(1, &[]), repo(2, &[])];
        let summary = summarize(&records);

        assert_eq!(summary.max_count, 0);
        assert_eq!(holder_ids(&summary), vec![1, 2]);
        assert!(summary.term_histogram.is_empty());
    }

    #[test]
    fn test_histogram_sum_matches_term_total() {
        let records = vec![
            repo(1, &["a", "b", "c"]),
            repo(2, &["a"]),
            repo(3, &["c", "d"]),
            repo(4, &[]),
        ];
        let summary = summarize(&records);

        let histogram_sum: usize = summary.term_histogram.values().sum();
        let term_total: usize = records.iter().map(|r| r.term_count()).sum();
        assert_eq!(histogram_sum, term_total);
        assert_eq!(summary.total_count, records.len());
        assert!(summary
            .max_holders
            .iter()
            .all(|r| r.term_count() == summary.max_count));
        assert!(records.iter().all(|r| r.term_count() <= summary.max_count));
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let records = vec![repo(7, &["x", "y"]), repo(8, &["y"]), repo(9, &["x", "z"])];

        assert_eq!(summarize(&records), summarize(&records));
    }
}
