use bigdecimal::{BigDecimal, Zero};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum LineChange {
    Set { quantity: i32, subtotal: BigDecimal },
    Remove,
}

pub fn line_subtotal(unit_price: &BigDecimal, quantity: i32) -> BigDecimal {
    unit_price * BigDecimal::from(quantity)
}

/// Folds a quantity adjustment into an optional existing line. Lines whose
/// quantity drops to zero or below are removed.
pub fn apply_quantity_change(
    existing: Option<i32>,
    delta: i32,
    unit_price: &BigDecimal,
) -> LineChange {
    let quantity = existing.unwrap_or(0).saturating_add(delta);

    match quantity > 0 {
        true => LineChange::Set {
            quantity,
            subtotal: line_subtotal(unit_price, quantity),
        },
        false => LineChange::Remove,
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Totals {
    pub sub_total: BigDecimal,
    pub delivery_fee: BigDecimal,
    pub total: BigDecimal,
}

pub fn totals<'a>(
    subtotals: impl IntoIterator<Item = &'a BigDecimal>,
    delivery_fee: &BigDecimal,
) -> Totals {
    let sub_total = subtotals
        .into_iter()
        .fold(BigDecimal::zero(), |acc, subtotal| acc + subtotal);

    Totals {
        total: &sub_total + delivery_fee,
        sub_total,
        delivery_fee: delivery_fee.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn money(raw: &str) -> BigDecimal {
        BigDecimal::from_str(raw).unwrap()
    }

    #[test]
    fn new_line_uses_requested_quantity() {
        assert_eq!(
            apply_quantity_change(None, 2, &money("85.00")),
            LineChange::Set {
                quantity: 2,
                subtotal: money("170.00")
            }
        );
    }

    #[test]
    fn adding_same_item_twice_accumulates() {
        let price = money("149.50");

        let quantity = match apply_quantity_change(None, 1, &price) {
            LineChange::Set { quantity, .. } => quantity,
            LineChange::Remove => panic!("line should exist"),
        };

        assert_eq!(
            apply_quantity_change(Some(quantity), 1, &price),
            LineChange::Set {
                quantity: 2,
                subtotal: money("299.00")
            }
        );
    }

    #[test]
    fn dropping_to_zero_or_below_removes_line() {
        let price = money("60.00");

        assert_eq!(apply_quantity_change(Some(2), -2, &price), LineChange::Remove);
        assert_eq!(apply_quantity_change(Some(1), -5, &price), LineChange::Remove);
        assert_eq!(apply_quantity_change(None, -1, &price), LineChange::Remove);
        assert_eq!(apply_quantity_change(None, 0, &price), LineChange::Remove);
    }

    #[test]
    fn negative_adjustment_recomputes_subtotal() {
        assert_eq!(
            apply_quantity_change(Some(3), -1, &money("45.25")),
            LineChange::Set {
                quantity: 2,
                subtotal: money("90.50")
            }
        );
    }

    #[test]
    fn totals_add_the_delivery_fee() {
        let subtotals = [money("170.00"), money("299.00"), money("45.25")];
        let totals = totals(subtotals.iter(), &money("40.00"));

        assert_eq!(totals.sub_total, money("514.25"));
        assert_eq!(totals.delivery_fee, money("40.00"));
        assert_eq!(totals.total, money("554.25"));
    }

    #[test]
    fn empty_cart_totals_only_carry_the_fee() {
        let totals = totals(std::iter::empty(), &money("40.00"));
        assert_eq!(totals.sub_total, BigDecimal::zero());
        assert_eq!(totals.total, money("40.00"));
    }
}
