use crate::model::lead::{LeadRecord, SourceCategory};

/// Category counters over the current view.
///
/// Records with an unknown category count toward `total` only, so the three
/// named buckets may sum to less than `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub total: usize,
    pub schools_only: usize,
    pub salesnav_only: usize,
    pub both_tables: usize,
}

impl Statistics {
    pub fn from_records(records: &[LeadRecord]) -> Self {
        records.iter().fold(
            Statistics {
                total: records.len(),
                ..Default::default()
            },
            |mut stats, record| {
                match record.source_category {
                    SourceCategory::SchoolsOnly => stats.schools_only += 1,
                    SourceCategory::SalesnavOnly => stats.salesnav_only += 1,
                    SourceCategory::Both => stats.both_tables += 1,
                    SourceCategory::Unknown => {}
                }
                stats
            },
        )
    }

    pub fn categorised(&self) -> usize {
        self.schools_only + self.salesnav_only + self.both_tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(category: SourceCategory) -> LeadRecord {
        LeadRecord {
            uid: format!("{:?}", category),
            source_category: category,
            ..Default::default()
        }
    }

    #[test]
    fn one_of_each() {
        let records = vec![
            lead(SourceCategory::Both),
            lead(SourceCategory::SchoolsOnly),
            lead(SourceCategory::SalesnavOnly),
        ];
        assert_eq!(
            Statistics::from_records(&records),
            Statistics {
                total: 3,
                schools_only: 1,
                salesnav_only: 1,
                both_tables: 1,
            }
        );
    }

    #[test]
    fn empty_view_is_all_zero() {
        assert_eq!(Statistics::from_records(&[]), Statistics::default());
    }

    #[test]
    fn unknown_counts_toward_total_only() {
        let records = vec![
            lead(SourceCategory::Both),
            lead(SourceCategory::Unknown),
            lead(SourceCategory::Unknown),
        ];
        let stats = Statistics::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.both_tables, 1);
        assert_eq!(stats.categorised(), 1);
    }

    #[test]
    fn buckets_sum_to_total_iff_all_known() {
        let categories = [
            SourceCategory::SchoolsOnly,
            SourceCategory::SalesnavOnly,
            SourceCategory::Both,
            SourceCategory::Unknown,
        ];
        // every combination of up to three records
        for a in categories {
            for b in categories {
                for c in categories {
                    let records = vec![lead(a), lead(b), lead(c)];
                    let stats = Statistics::from_records(&records);
                    let all_known = records.iter().all(|r| r.source_category.is_known());
                    assert!(stats.categorised() <= stats.total);
                    assert_eq!(stats.categorised() == stats.total, all_known);
                }
            }
        }
    }
}
