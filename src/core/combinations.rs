use crate::domain::catalog::{Catalog, HAND_PICKED_TRIPLES};
use crate::domain::model::StopValue;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Which stacks of three or more filters end up in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackSelection {
    /// Only the two triples that are practical in the field.
    #[default]
    HandPicked,
    /// Every triple plus the full stack of all filters.
    All,
}

/// Singles, then every pair in registry order, then the deeper stacks.
pub fn generate_combinations(
    catalog: &Catalog,
    selection: StackSelection,
) -> Result<Vec<StopValue>> {
    catalog.validate()?;

    let filters = catalog.filters();
    let mut combinations: Vec<StopValue> = filters.to_vec();

    for (i, first) in filters.iter().enumerate() {
        for second in &filters[i + 1..] {
            combinations.push(first + second);
        }
    }

    match selection {
        StackSelection::HandPicked => {
            for triple in HAND_PICKED_TRIPLES {
                combinations.push(catalog.stack(&triple)?);
            }
        }
        StackSelection::All => {
            for i in 0..filters.len() {
                for j in i + 1..filters.len() {
                    for k in j + 1..filters.len() {
                        combinations.push(&(&filters[i] + &filters[j]) + &filters[k]);
                    }
                }
            }

            let labels: Vec<&str> = filters.iter().map(|f| f.label.as_str()).collect();
            combinations.push(catalog.stack(&labels)?);
        }
    }

    tracing::debug!(
        "Generated {} filter combinations ({:?})",
        combinations.len(),
        selection
    );
    Ok(combinations)
}

/// Stable: stacks with equal stops keep the order they were generated in.
pub fn sort_combinations(mut combinations: Vec<StopValue>) -> Vec<StopValue> {
    combinations.sort_by(StopValue::cmp_stops);
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{standard_filters, standard_shutters};

    fn labels(combinations: &[StopValue]) -> Vec<&str> {
        combinations.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_hand_picked_generation() {
        let combinations =
            generate_combinations(&Catalog::standard(), StackSelection::HandPicked).unwrap();

        assert_eq!(combinations.len(), 12);
        assert_eq!(
            labels(&combinations),
            vec![
                "1k", "64", "8", "4", "1k 64", "1k 8", "1k 4", "64 8", "64 4", "8 4", "1k 64 4",
                "1k 8 4"
            ]
        );
    }

    #[test]
    fn test_all_stacks_generation() {
        let combinations =
            generate_combinations(&Catalog::standard(), StackSelection::All).unwrap();

        assert_eq!(combinations.len(), 15);
        assert_eq!(
            labels(&combinations[10..]),
            vec!["1k 64 8", "1k 64 4", "1k 8 4", "64 8 4", "1k 64 8 4"]
        );
        assert_eq!(combinations.last().unwrap().stops, 21);
    }

    #[test]
    fn test_generation_rejects_malformed_registry() {
        let mut filters = standard_filters();
        filters.reverse();
        let catalog = Catalog::new(filters, standard_shutters());

        assert!(generate_combinations(&catalog, StackSelection::HandPicked).is_err());
    }

    #[test]
    fn test_sorted_by_stops() {
        let combinations =
            generate_combinations(&Catalog::standard(), StackSelection::HandPicked).unwrap();
        let sorted = sort_combinations(combinations);

        let stops: Vec<u32> = sorted.iter().map(|c| c.stops).collect();
        assert_eq!(stops, vec![2, 3, 5, 6, 8, 9, 10, 12, 13, 15, 16, 18]);
        assert_eq!(
            labels(&sorted),
            vec![
                "4", "8", "8 4", "64", "64 4", "64 8", "1k", "1k 4", "1k 8", "1k 8 4", "1k 64",
                "1k 64 4"
            ]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_stops() {
        let sorted = sort_combinations(vec![
            StopValue::new(5, "b"),
            StopValue::new(3, "first"),
            StopValue::new(5, "a"),
            StopValue::new(3, "second"),
        ]);

        assert_eq!(labels(&sorted), vec!["first", "second", "b", "a"]);
    }
}
