// ============================================================================
// Reference Objects
// Sorted tables of everyday objects used to place a computed quantity
// ============================================================================

use crate::measurement::{Dimension, Measurement};
use crate::numeric::{find_closest_values_by_key, get_progress, CalcError, CalcResult};
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw reference object as supplied by reference data.
///
/// `value` is in the dimension's base unit; JSON documents may name it
/// `height` or `mass`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReferenceRecord {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(alias = "height", alias = "mass"))]
    pub value: u64,
}

/// An everyday object with a known measurement ("a pencil is 19 cm").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceObject<D: Dimension> {
    pub title: String,
    pub measure: Measurement<D>,
}

impl<D: Dimension> ReferenceObject<D> {
    pub fn new(title: impl Into<String>, measure: Measurement<D>) -> Self {
        Self {
            title: title.into(),
            measure,
        }
    }

    #[inline]
    fn key(&self) -> &BigInt {
        self.measure.value()
    }
}

impl<D: Dimension> From<ReferenceRecord> for ReferenceObject<D> {
    fn from(record: ReferenceRecord) -> Self {
        Self::new(record.title, Measurement::new(record.value))
    }
}

/// Where a measurement falls among reference objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement<'a, D: Dimension> {
    /// Largest object not exceeding the measurement
    pub below: Option<&'a ReferenceObject<D>>,
    /// Smallest object exceeding the measurement
    pub above: Option<&'a ReferenceObject<D>>,
    /// Whole-percent progress from `below` to `above`
    pub progress: Option<u8>,
}

/// Reference objects sorted ascending by base-unit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTable<D: Dimension> {
    objects: Vec<ReferenceObject<D>>,
}

impl<D: Dimension> ReferenceTable<D> {
    /// Build a table, validating its ordering.
    ///
    /// # Errors
    /// Returns `UnsortedReferences` at the first object smaller than its
    /// predecessor.
    pub fn new(objects: Vec<ReferenceObject<D>>) -> CalcResult<Self> {
        if let Some(index) = objects.windows(2).position(|pair| pair[1].key() < pair[0].key()) {
            tracing::warn!(
                "Unsorted {} reference table at index {} ({:?})",
                D::NAME,
                index + 1,
                objects[index + 1].title
            );
            return Err(CalcError::UnsortedReferences { index: index + 1 });
        }

        Ok(Self { objects })
    }

    /// Build a table from raw records.
    pub fn from_records(records: Vec<ReferenceRecord>) -> CalcResult<Self> {
        Self::new(records.into_iter().map(ReferenceObject::from).collect())
    }

    #[inline]
    pub fn objects(&self) -> &[ReferenceObject<D>] {
        &self.objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Place `measure` between its closest reference objects.
    pub fn locate(&self, measure: &Measurement<D>) -> Placement<'_, D> {
        let closest =
            find_closest_values_by_key(measure.value(), &self.objects, ReferenceObject::key);

        let progress = get_progress(
            measure.value(),
            closest.left.map(ReferenceObject::key),
            closest.right.map(ReferenceObject::key),
        );

        Placement {
            below: closest.left,
            above: closest.right,
            progress,
        }
    }
}

#[cfg(feature = "serde")]
impl<D: Dimension> ReferenceTable<D> {
    /// Parse a JSON array of reference records.
    ///
    /// # Errors
    /// - `Parse` if the document is malformed
    /// - `UnsortedReferences` if the records are not ascending
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let records: Vec<ReferenceRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{Length, Micrometer};

    fn heights() -> ReferenceTable<Length> {
        ReferenceTable::new(vec![
            ReferenceObject::new("Coin", Micrometer::new(2_000)),
            ReferenceObject::new("Pencil", Micrometer::new(190_000)),
            ReferenceObject::new("Broom", Micrometer::new(1_400_000)),
            ReferenceObject::new("Giraffe", Micrometer::new(5_500_000)),
        ])
        .unwrap()
    }

    #[test]
    fn test_sorted_table() {
        let table = heights();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        assert_eq!(table.objects()[0].title, "Coin");
    }

    #[test]
    fn test_unsorted_table_rejected() {
        let result = ReferenceTable::<Length>::from_records(vec![
            ReferenceRecord { title: "Broom".to_string(), value: 1_400_000 },
            ReferenceRecord { title: "Pencil".to_string(), value: 190_000 },
        ]);
        assert_eq!(result, Err(CalcError::UnsortedReferences { index: 1 }));
    }

    #[test]
    fn test_locate_between() {
        let table = heights();
        let stack = Micrometer::new(795_000);
        let placement = table.locate(&stack);

        assert_eq!(placement.below.unwrap().title, "Pencil");
        assert_eq!(placement.above.unwrap().title, "Broom");
        assert_eq!(placement.progress, Some(50));
    }

    #[test]
    fn test_locate_exact_match_goes_below() {
        let table = heights();
        let placement = table.locate(&Micrometer::new(190_000));

        assert_eq!(placement.below.unwrap().title, "Pencil");
        assert_eq!(placement.above.unwrap().title, "Broom");
        assert_eq!(placement.progress, Some(0));
    }

    #[test]
    fn test_locate_out_of_range() {
        let table = heights();

        let tiny = table.locate(&Micrometer::new(1));
        assert!(tiny.below.is_none());
        assert_eq!(tiny.above.unwrap().title, "Coin");
        assert_eq!(tiny.progress, None);

        let huge = table.locate(&Micrometer::new(10_000_000));
        assert_eq!(huge.below.unwrap().title, "Giraffe");
        assert!(huge.above.is_none());
        assert_eq!(huge.progress, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        use crate::measurement::Mass;

        let json = r#"[
            { "title": "Paperclip", "mass": 1000 },
            { "title": "Apple", "mass": 180000 }
        ]"#;
        let table = ReferenceTable::<Mass>::from_json(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.objects()[1].measure.to_string(), "180 g");
    }
}
