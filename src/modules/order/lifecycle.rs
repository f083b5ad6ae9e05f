use super::repository::{Delivery, OrderStatus};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Timeline labels shown to customers, one per stamped stage.
pub const STEP_LABELS: [&str; 4] = [
    "Order Confirmed",
    "Preparing Order",
    "Out for Delivery",
    "Delivered",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeliveryStages {
    pub confirmed_at: Option<NaiveDateTime>,
    pub preparing_at: Option<NaiveDateTime>,
    pub out_for_delivery_at: Option<NaiveDateTime>,
    pub delivered_at: Option<NaiveDateTime>,
}

impl From<&Delivery> for DeliveryStages {
    fn from(delivery: &Delivery) -> Self {
        Self {
            confirmed_at: delivery.confirmed_at,
            preparing_at: delivery.preparing_at,
            out_for_delivery_at: delivery.out_for_delivery_at,
            delivered_at: delivery.delivered_at,
        }
    }
}

impl DeliveryStages {
    fn slots(&self) -> [Option<NaiveDateTime>; 4] {
        [
            self.confirmed_at,
            self.preparing_at,
            self.out_for_delivery_at,
            self.delivered_at,
        ]
    }

    fn slots_mut(&mut self) -> [&mut Option<NaiveDateTime>; 4] {
        [
            &mut self.confirmed_at,
            &mut self.preparing_at,
            &mut self.out_for_delivery_at,
            &mut self.delivered_at,
        ]
    }

    pub fn timeline(&self) -> Vec<TimelineStep> {
        STEP_LABELS
            .into_iter()
            .zip(self.slots())
            .map(|(label, timestamp)| TimelineStep {
                label,
                timestamp,
                completed: timestamp.is_some(),
            })
            .collect()
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TimelineStep {
    pub label: &'static str,
    pub timestamp: Option<NaiveDateTime>,
    pub completed: bool,
}

/// Index into the stage slots; `Pending` has no timestamp of its own.
fn stage_index(status: OrderStatus) -> Option<usize> {
    match status {
        OrderStatus::Pending => None,
        OrderStatus::Confirmed => Some(0),
        OrderStatus::Preparing => Some(1),
        OrderStatus::OutForDelivery => Some(2),
        OrderStatus::Delivered => Some(3),
    }
}

/// Where an admin confirmation lands: the kitchen starts on the order at once.
pub const CONFIRMATION_TARGET: OrderStatus = OrderStatus::Preparing;

#[derive(Debug, PartialEq)]
pub enum TransitionError {
    NotForward { from: OrderStatus, to: OrderStatus },
}

/// Moves an order from `current` to `target`, stamping the target stage and
/// every earlier stage that is still empty with `now`. Stamps that are
/// already set are kept.
pub fn advance(
    current: OrderStatus,
    target: OrderStatus,
    stages: &DeliveryStages,
    now: NaiveDateTime,
) -> Result<DeliveryStages, TransitionError> {
    if target <= current {
        return Err(TransitionError::NotForward {
            from: current,
            to: target,
        });
    }

    let mut next = stages.clone();

    if let Some(index) = stage_index(target) {
        for slot in next.slots_mut().into_iter().take(index + 1) {
            slot.get_or_insert(now);
        }
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 17)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn confirming_stamps_only_the_first_stage() {
        let stages = advance(
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            &DeliveryStages::default(),
            at(9),
        )
        .unwrap();

        assert_eq!(
            stages,
            DeliveryStages {
                confirmed_at: Some(at(9)),
                ..Default::default()
            }
        );
    }

    #[test]
    fn admin_confirmation_starts_preparation() {
        let stages = advance(
            OrderStatus::Pending,
            CONFIRMATION_TARGET,
            &DeliveryStages::default(),
            at(9),
        )
        .unwrap();

        assert_eq!(
            stages,
            DeliveryStages {
                confirmed_at: Some(at(9)),
                preparing_at: Some(at(9)),
                ..Default::default()
            }
        );

        assert!(advance(OrderStatus::Preparing, CONFIRMATION_TARGET, &stages, at(10)).is_err());
    }

    #[test]
    fn jumping_to_delivered_leaves_no_stage_empty() {
        let stages = advance(
            OrderStatus::Pending,
            OrderStatus::Delivered,
            &DeliveryStages::default(),
            at(12),
        )
        .unwrap();

        assert!(stages.slots().iter().all(|slot| *slot == Some(at(12))));
    }

    #[test]
    fn existing_stamps_are_never_overwritten() {
        let confirmed = advance(
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            &DeliveryStages::default(),
            at(9),
        )
        .unwrap();

        let delivered = advance(
            OrderStatus::Confirmed,
            OrderStatus::Delivered,
            &confirmed,
            at(11),
        )
        .unwrap();

        assert_eq!(delivered.confirmed_at, Some(at(9)));
        assert_eq!(delivered.preparing_at, Some(at(11)));
        assert_eq!(delivered.out_for_delivery_at, Some(at(11)));
        assert_eq!(delivered.delivered_at, Some(at(11)));
    }

    #[test]
    fn stamps_stay_in_lifecycle_order() {
        let mut stages = DeliveryStages::default();
        let mut current = OrderStatus::Pending;

        for (offset, target) in ALL.into_iter().skip(1).enumerate() {
            stages = advance(current, target, &stages, at(8) + Duration::minutes(offset as i64))
                .unwrap();
            current = target;
        }

        let slots = stages.slots();
        assert!(slots.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(slots.iter().all(Option::is_some));
    }

    #[test]
    fn status_never_regresses() {
        for (i, from) in ALL.into_iter().enumerate() {
            for to in ALL.into_iter().take(i + 1) {
                assert_eq!(
                    advance(from, to, &DeliveryStages::default(), at(10)),
                    Err(TransitionError::NotForward { from, to })
                );
            }
        }
    }

    #[test]
    fn timeline_uses_customer_labels() {
        let stages = DeliveryStages {
            confirmed_at: Some(at(9)),
            ..Default::default()
        };

        let timeline = stages.timeline();
        assert_eq!(
            timeline.iter().map(|step| step.label).collect::<Vec<_>>(),
            STEP_LABELS.to_vec()
        );
        assert!(timeline[0].completed);
        assert!(!timeline[1].completed);
        assert_eq!(timeline[3].timestamp, None);
    }
}
