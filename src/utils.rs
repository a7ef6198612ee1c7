use crate::data::{reduce_dataset, Category, Dataset, Record};
use crate::errors::TreeError;
use hashbrown::HashMap;

/// Count every label, in the order labels are first encountered.
pub fn label_counts<V: Category>(records: &[Record<V>]) -> Result<Vec<(&V, usize)>, TreeError> {
    let mut index: HashMap<&V, usize> = HashMap::new();
    let mut counts: Vec<(&V, usize)> = Vec::new();
    for (row, r) in records.iter().enumerate() {
        let label = r.last().ok_or(TreeError::ArityMismatch {
            row,
            expected: 1,
            found: 0,
        })?;
        match index.get(label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label, counts.len());
                counts.push((label, 1));
            }
        }
    }
    Ok(counts)
}

/// Shannon entropy, in bits, of the trailing labels.
///
/// Only observed labels are counted, so every probability is strictly
/// positive and `log2` is never evaluated at zero.
pub fn entropy<V: Category>(records: &[Record<V>]) -> Result<f64, TreeError> {
    if records.is_empty() {
        return Err(TreeError::EmptyDataset);
    }
    let n = records.len() as f64;
    let h = label_counts(records)?.iter().fold(0.0, |acc, (_, count)| {
        let p = *count as f64 / n;
        acc - p * p.log2()
    });
    Ok(h)
}

/// Expected entropy after partitioning on the attribute at `axis`.
pub fn split_entropy<V: Category>(dataset: &Dataset<V>, axis: usize) -> Result<f64, TreeError> {
    let n = dataset.n_records() as f64;
    let mut h = 0.0;
    for value in dataset.distinct_values(axis)? {
        let subset = reduce_dataset(dataset.records(), axis, &value);
        h += (subset.len() as f64 / n) * entropy(&subset)?;
    }
    Ok(h)
}

/// Reduction in entropy achieved by splitting on the attribute at `axis`.
pub fn information_gain<V: Category>(dataset: &Dataset<V>, axis: usize) -> Result<f64, TreeError> {
    Ok(entropy(dataset.records())? - split_entropy(dataset, axis)?)
}

/// Most frequent label. Ties go to the label seen first.
pub fn majority_label<V: Category>(records: &[Record<V>]) -> Result<V, TreeError> {
    let mut best: Option<(&V, usize)> = None;
    for (label, count) in label_counts(records)? {
        match best {
            Some((_, c)) if count <= c => (),
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label.clone()).ok_or(TreeError::EmptyDataset)
}

pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Value;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_records(rng: &mut StdRng, n_attr: usize, n_vals: i64, n_labels: i64) -> Vec<Record<i64>> {
        let n_rows = rng.gen_range(1..60);
        (0..n_rows)
            .map(|_| {
                let mut r: Record<i64> = (0..n_attr).map(|_| rng.gen_range(0..n_vals)).collect();
                r.push(rng.gen_range(0..n_labels));
                r
            })
            .collect()
    }

    #[test]
    fn test_label_counts_first_seen_order() {
        let records: Vec<Record<Value>> = vec![
            vec![0.into(), "b".into()],
            vec![1.into(), "a".into()],
            vec![0.into(), "b".into()],
            vec![1.into(), "c".into()],
        ];
        let counts = label_counts(&records).unwrap();
        let counts: Vec<(String, usize)> = counts.into_iter().map(|(l, c)| (l.to_string(), c)).collect();
        assert_eq!(
            counts,
            vec![("b".to_string(), 2), ("a".to_string(), 1), ("c".to_string(), 1)]
        );
    }

    #[test]
    fn test_entropy_pure() {
        let records = vec![vec![1, 0, 7], vec![0, 0, 7], vec![1, 1, 7]];
        assert_eq!(entropy(&records).unwrap(), 0.0);
    }

    #[test]
    fn test_entropy_even_split() {
        let records = vec![vec![1, 0], vec![0, 1], vec![1, 0], vec![0, 1]];
        assert_eq!(entropy(&records).unwrap(), 1.0);
    }

    #[test]
    fn test_entropy_fish() {
        let records = vec![vec![1, 1, 1], vec![1, 1, 1], vec![1, 0, 0], vec![0, 1, 0], vec![0, 1, 0]];
        assert_eq!(precision_round(entropy(&records).unwrap(), 6), 0.970951);
    }

    #[test]
    fn test_entropy_empty() {
        let records: Vec<Record<i32>> = Vec::new();
        assert_eq!(entropy(&records), Err(TreeError::EmptyDataset));
    }

    #[test]
    fn test_entropy_bounds() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..200 {
            let records = random_records(&mut rng, 2, 3, 4);
            let h = entropy(&records).unwrap();
            let n_distinct = label_counts(&records).unwrap().len() as f64;
            assert!(h >= 0.0);
            assert!(h <= n_distinct.log2() + 1e-12);
        }
    }

    #[test]
    fn test_information_gain() {
        let records = vec![vec![1, 1, 1], vec![1, 1, 1], vec![1, 0, 0], vec![0, 1, 0], vec![0, 1, 0]];
        let data = Dataset::new(records).unwrap();
        assert_eq!(precision_round(information_gain(&data, 0).unwrap(), 6), 0.419973);
        assert_eq!(precision_round(information_gain(&data, 1).unwrap(), 6), 0.170951);
        assert!(information_gain(&data, 2).is_err());
    }

    #[test]
    fn test_majority_label() {
        let records = vec![vec![0, 3], vec![1, 5], vec![0, 5], vec![1, 3], vec![1, 9]];
        // 3 and 5 tie, 3 is seen first.
        assert_eq!(majority_label(&records).unwrap(), 3);
        let records = vec![vec![0, 3], vec![1, 5], vec![0, 5]];
        assert_eq!(majority_label(&records).unwrap(), 5);
        let records: Vec<Record<i32>> = Vec::new();
        assert_eq!(majority_label(&records), Err(TreeError::EmptyDataset));
    }

    #[test]
    fn test_majority_label_dominates() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let records = random_records(&mut rng, 1, 2, 5);
            let winner = majority_label(&records).unwrap();
            let counts = label_counts(&records).unwrap();
            let winner_count = counts.iter().find(|(l, _)| **l == winner).map(|(_, c)| *c).unwrap();
            assert!(counts.iter().all(|(_, c)| winner_count >= *c));
        }
    }
}
