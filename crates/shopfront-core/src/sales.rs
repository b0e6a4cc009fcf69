//! Sales records and the aggregation engine.
//!
//! Every aggregation here is a pure function of an input slice: no hidden
//! state, and only commutative/associative reductions, so results are
//! identical under any reordering of the input. Money accumulates in
//! `Decimal`; quantities stay in integer arithmetic.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::ids::RecordId;

/// A single sales transaction.
///
/// Records are immutable once stored: there are no update or delete
/// operations for the `sales` collection anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Store-assigned identifier.
    pub id: RecordId,

    /// Invoice number, unique per record.
    pub invoice_id: String,

    /// Branch where the sale occurred.
    pub branch: String,

    /// City where the sale occurred.
    pub city: String,

    /// Product line; the grouping key for revenue aggregation,
    /// matched case-sensitively.
    pub product_line: String,

    /// Price of a single unit. Never negative.
    pub unit_price: Decimal,

    /// Units sold.
    pub quantity: u64,
}

impl SalesRecord {
    /// The revenue of this record: `unit_price * quantity`.
    ///
    /// Computed on demand, never persisted.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Check the record against the domain invariants.
    ///
    /// The store calls this when decoding documents, so upstream data that
    /// violates the invariants (a negative price smuggled into the
    /// collection) never reaches the aggregation functions.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.invoice_id.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "invoice_id" });
        }
        if self.product_line.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "product_line",
            });
        }
        if self.unit_price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice {
                price: self.unit_price,
            });
        }
        Ok(())
    }
}

/// Input payload for recording a new sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSale {
    /// Invoice number.
    pub invoice_id: String,
    /// Branch where the sale occurred.
    pub branch: String,
    /// City where the sale occurred.
    pub city: String,
    /// Product line being sold.
    pub product_line: String,
    /// Price of a single unit.
    pub unit_price: Decimal,
    /// Units sold.
    pub quantity: u64,
}

impl NewSale {
    /// Validate the payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.invoice_id.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "invoice_id" });
        }
        if self.product_line.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "product_line",
            });
        }
        if self.unit_price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice {
                price: self.unit_price,
            });
        }
        Ok(())
    }

    /// Build the record this sale will be stored as.
    #[must_use]
    pub fn into_record(self, id: RecordId) -> SalesRecord {
        SalesRecord {
            id,
            invoice_id: self.invoice_id,
            branch: self.branch,
            city: self.city,
            product_line: self.product_line,
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

/// Summary statistics over a set of sales records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesAnalysis {
    /// Sum of `quantity` over all records.
    pub total_quantity: u64,

    /// Arithmetic mean of `unit_price` across records.
    ///
    /// Zero for an empty input set.
    pub average_unit_price: Decimal,
}

/// Compute total quantity and average unit price.
///
/// An empty input yields `{0, 0}` rather than a division by zero.
#[must_use]
pub fn analyze(records: &[SalesRecord]) -> SalesAnalysis {
    let total_quantity = records.iter().map(|r| r.quantity).sum();

    let average_unit_price = if records.is_empty() {
        Decimal::ZERO
    } else {
        let price_sum: Decimal = records.iter().map(|r| r.unit_price).sum();
        price_sum / Decimal::from(records.len())
    };

    SalesAnalysis {
        total_quantity,
        average_unit_price,
    }
}

/// Sum `line_total` per product line.
///
/// Product lines absent from the input never appear in the output; there
/// is no zero-filling.
#[must_use]
pub fn revenue_by_category(records: &[SalesRecord]) -> BTreeMap<String, Decimal> {
    let mut revenue: BTreeMap<String, Decimal> = BTreeMap::new();
    for record in records {
        *revenue.entry(record.product_line.clone()).or_default() += record.line_total();
    }
    revenue
}

/// The distinct product lines present in the input.
#[must_use]
pub fn categories(records: &[SalesRecord]) -> BTreeSet<String> {
    records.iter().map(|r| r.product_line.clone()).collect()
}

/// The number of sales records (not the sum of quantities).
#[must_use]
pub fn total_sales(records: &[SalesRecord]) -> usize {
    records.len()
}

/// Sum of `line_total` over all records.
#[must_use]
pub fn total_revenue(records: &[SalesRecord]) -> Decimal {
    records.iter().map(SalesRecord::line_total).sum()
}

/// Records whose product line exactly matches `line`.
///
/// An unknown product line yields an empty vector, not an error.
#[must_use]
pub fn by_product_line(records: &[SalesRecord], line: &str) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|r| r.product_line == line)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(product_line: &str, unit_price: Decimal, quantity: u64) -> SalesRecord {
        SalesRecord {
            id: RecordId::generate(),
            invoice_id: format!("INV-{product_line}-{quantity}"),
            branch: "A".into(),
            city: "Yangon".into(),
            product_line: product_line.into(),
            unit_price,
            quantity,
        }
    }

    fn sample() -> Vec<SalesRecord> {
        vec![record("A", dec!(10), 2), record("B", dec!(5), 4)]
    }

    #[test]
    fn worked_example() {
        let records = sample();

        assert_eq!(total_revenue(&records), dec!(40));
        assert_eq!(total_sales(&records), 2);

        let by_cat = revenue_by_category(&records);
        assert_eq!(by_cat.get("A"), Some(&dec!(20)));
        assert_eq!(by_cat.get("B"), Some(&dec!(20)));
        assert_eq!(by_cat.len(), 2);

        let cats = categories(&records);
        assert!(cats.contains("A"));
        assert!(cats.contains("B"));
        assert_eq!(cats.len(), 2);
    }

    #[test]
    fn analyze_sums_quantity_and_averages_price() {
        let records = sample();
        let analysis = analyze(&records);
        assert_eq!(analysis.total_quantity, 6);
        assert_eq!(analysis.average_unit_price, dec!(7.5));
    }

    #[test]
    fn analyze_empty_returns_zeros() {
        let analysis = analyze(&[]);
        assert_eq!(analysis.total_quantity, 0);
        assert_eq!(analysis.average_unit_price, Decimal::ZERO);
    }

    #[test]
    fn aggregations_are_order_independent() {
        let forward = vec![
            record("A", dec!(12.30), 3),
            record("B", dec!(0.99), 100),
            record("A", dec!(7.45), 1),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(total_revenue(&forward), total_revenue(&reversed));
        assert_eq!(total_sales(&forward), total_sales(&reversed));
        assert_eq!(analyze(&forward), analyze(&reversed));
        assert_eq!(
            revenue_by_category(&forward),
            revenue_by_category(&reversed)
        );
        assert_eq!(categories(&forward), categories(&reversed));
    }

    #[test]
    fn grouped_revenue_sums_to_grand_total() {
        let records = vec![
            record("Food", dec!(3.33), 7),
            record("Drink", dec!(1.25), 12),
            record("Food", dec!(9.10), 2),
            record("Tech", dec!(499.99), 1),
        ];

        let grouped_sum: Decimal = revenue_by_category(&records).values().copied().sum();
        assert_eq!(grouped_sum, total_revenue(&records));
    }

    #[test]
    fn decimal_accumulation_is_exact() {
        // 0.1 repeated: the classic float-drift case.
        let records: Vec<_> = (0..1000).map(|_| record("A", dec!(0.10), 1)).collect();
        assert_eq!(total_revenue(&records), dec!(100.00));
    }

    #[test]
    fn total_sales_counts_records_not_quantity() {
        let records = vec![record("A", dec!(1), 50), record("A", dec!(1), 50)];
        assert_eq!(total_sales(&records), 2);
    }

    #[test]
    fn by_product_line_filters_exactly() {
        let records = sample();
        let a = by_product_line(&records, "A");
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].product_line, "A");

        // Case-sensitive exact match.
        assert!(by_product_line(&records, "a").is_empty());
    }

    #[test]
    fn by_product_line_unknown_line_is_empty_not_error() {
        let records = sample();
        assert!(by_product_line(&records, "Furniture").is_empty());
    }

    #[test]
    fn categories_have_no_duplicates() {
        let records = vec![
            record("A", dec!(1), 1),
            record("A", dec!(2), 1),
            record("B", dec!(3), 1),
        ];
        let cats = categories(&records);
        assert_eq!(cats.len(), 2);
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut r = record("A", dec!(1), 1);
        r.unit_price = dec!(-0.01);
        assert!(matches!(
            r.validate(),
            Err(ValidationError::NegativePrice { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_invoice() {
        let mut r = record("A", dec!(1), 1);
        r.invoice_id = "  ".into();
        assert_eq!(
            r.validate(),
            Err(ValidationError::EmptyField { field: "invoice_id" })
        );
    }

    #[test]
    fn new_sale_becomes_record() {
        let sale = NewSale {
            invoice_id: "INV-1".into(),
            branch: "C".into(),
            city: "Naypyitaw".into(),
            product_line: "Health and beauty".into(),
            unit_price: dec!(74.69),
            quantity: 7,
        };
        sale.validate().unwrap();

        let id = RecordId::generate();
        let record = sale.into_record(id);
        assert_eq!(record.id, id);
        assert_eq!(record.line_total(), dec!(522.83));
    }
}
