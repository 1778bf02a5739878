//! Institution records and the columns they can be sorted by

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A single row of the static dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: u64,
    pub name: String,
    /// Course fees in rupees
    pub fees: u64,
    pub ranking: u32,
    /// Placement metric (average package, in lakhs)
    #[serde(default)]
    pub placement: Option<f64>,
    /// Rating out of 10
    #[serde(default)]
    pub user_review_rating: Option<f64>,
    #[serde(default)]
    pub featured: bool,
}

/// Columns the table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Ranking,
    Fees,
    Placement,
    UserReviewRating,
    Name,
}

/// A borrowed field value used for comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl SortKey {
    /// Field name as it appears in the JSON dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Ranking => "ranking",
            SortKey::Fees => "fees",
            SortKey::Placement => "placement",
            SortKey::UserReviewRating => "userReviewRating",
            SortKey::Name => "name",
        }
    }

    /// Extract this column from a record. `None` when the record lacks it.
    pub fn field<'a>(&self, institution: &'a Institution) -> Option<FieldValue<'a>> {
        match self {
            SortKey::Ranking => Some(FieldValue::Number(institution.ranking as f64)),
            SortKey::Fees => Some(FieldValue::Number(institution.fees as f64)),
            SortKey::Placement => institution.placement.map(FieldValue::Number),
            SortKey::UserReviewRating => institution.user_review_rating.map(FieldValue::Number),
            SortKey::Name => Some(FieldValue::Text(&institution.name)),
        }
    }

    /// Three-way compare of two records on this column.
    ///
    /// Missing values order before present ones so the comparison stays a
    /// total order.
    pub fn compare(&self, a: &Institution, b: &Institution) -> Ordering {
        match (self.field(a), self.field(b)) {
            (Some(x), Some(y)) => x.compare(&y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl FieldValue<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            // A column never mixes kinds; numbers first keeps this total anyway
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, name: &str, fees: u64, rating: Option<f64>) -> Institution {
        Institution {
            id,
            name: name.to_string(),
            fees,
            ranking: id as u32,
            placement: None,
            user_review_rating: rating,
            featured: false,
        }
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id":7,"name":"IIT Madras","fees":209550,"ranking":1,"placement":21.5,"userReviewRating":9.1,"featured":true}"#;
        let inst: Institution = serde_json::from_str(json).unwrap();
        assert_eq!(inst.id, 7);
        assert_eq!(inst.user_review_rating, Some(9.1));
        assert!(inst.featured);
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = r#"{"id":1,"name":"College A","fees":1000,"ranking":3}"#;
        let inst: Institution = serde_json::from_str(json).unwrap();
        assert_eq!(inst.placement, None);
        assert_eq!(inst.user_review_rating, None);
        assert!(!inst.featured);
    }

    #[test]
    fn test_numeric_compare() {
        let a = record(1, "A", 500, None);
        let b = record(2, "B", 1500, None);
        assert_eq!(SortKey::Fees.compare(&a, &b), Ordering::Less);
        assert_eq!(SortKey::Fees.compare(&b, &a), Ordering::Greater);
        assert_eq!(SortKey::Fees.compare(&a, &a), Ordering::Equal);
    }

    #[test]
    fn test_text_compare_is_lexical() {
        let a = record(1, "College B", 0, None);
        let b = record(2, "College a", 0, None);
        // Uppercase sorts before lowercase, same as a plain string compare
        assert_eq!(SortKey::Name.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_missing_value_orders_first() {
        let rated = record(1, "A", 0, Some(4.0));
        let unrated = record(2, "B", 0, None);
        assert_eq!(SortKey::UserReviewRating.compare(&unrated, &rated), Ordering::Less);
        assert_eq!(SortKey::UserReviewRating.compare(&rated, &unrated), Ordering::Greater);
        assert_eq!(SortKey::UserReviewRating.compare(&unrated, &unrated), Ordering::Equal);
    }

    #[test]
    fn test_key_names_match_json() {
        assert_eq!(SortKey::UserReviewRating.as_str(), "userReviewRating");
        assert_eq!(SortKey::Fees.as_str(), "fees");
    }
}
