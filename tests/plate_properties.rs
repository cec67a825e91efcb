use barbell_rs::{Barbell, PlanError, PlateError, SetLabel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn reachable_totals_load_exactly(steps in 0u32..=560) {
        let barbell = Barbell::default();
        let total = 45.0 + f64::from(steps) * 0.5;
        let selection = barbell.select(total).unwrap();
        prop_assert!((2.0 * selection.per_side() + 45.0 - total).abs() < 1e-6);
        prop_assert!((selection.loaded_weight() - total).abs() < 1e-6);
    }

    #[test]
    fn plates_descend_once_each(steps in 0u32..=560) {
        let selection = Barbell::default().select(45.0 + f64::from(steps) * 0.5).unwrap();
        prop_assert!(selection.plates().iter().all(|(_, count)| *count == 1));
        prop_assert!(
            selection
                .plates()
                .windows(2)
                .all(|pair| pair[0].0.weight() > pair[1].0.weight())
        );
    }

    #[test]
    fn selection_is_repeatable(total in -100.0f64..500.0) {
        let barbell = Barbell::default();
        prop_assert_eq!(barbell.select(total), barbell.select(total));
    }

    #[test]
    fn below_bar_is_rejected(total in 0.0f64..45.0) {
        prop_assert_eq!(
            Barbell::default().select(total),
            Err(PlateError::BelowBarWeight { bar_weight: 45.0 })
        );
    }

    #[test]
    fn warmups_stay_between_start_and_working(
        start_steps in 0u32..200,
        gap_steps in 1u32..300,
        count in 1usize..8,
    ) {
        let barbell = Barbell::default();
        let start = 45.0 + f64::from(start_steps) * 0.5;
        let working = start + f64::from(gap_steps) * 0.5;
        let totals = barbell.warmup_totals(start, working, count).unwrap();

        prop_assert_eq!(totals.len(), count);
        prop_assert_eq!(totals[0], start);
        prop_assert!(totals.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert!(totals.iter().all(|total| *total >= start && *total < working));
    }

    #[test]
    fn plans_fail_whole_or_succeed_whole(
        start_steps in 0u32..400,
        gap_steps in 1u32..400,
        count in 1usize..6,
    ) {
        let barbell = Barbell::default();
        let start = 45.0 + f64::from(start_steps) * 0.5;
        let working = start + f64::from(gap_steps) * 0.5;

        match barbell.plan(start, working, count) {
            Ok(plan) => {
                prop_assert_eq!(plan.warmups().len(), count);
                prop_assert_eq!(plan.working().total(), working);
            }
            Err(PlanError::Set { source, .. }) => prop_assert_eq!(source, PlateError::Unmatchable),
            Err(other) => prop_assert!(false, "unexpected request error {}", other),
        }
    }

    #[test]
    fn off_grid_working_weight_is_blamed_on_working_set(
        start_steps in 0u32..400,
        gap_steps in 1u32..400,
        count in 1usize..8,
        offset in 0.05f64..0.45,
    ) {
        let barbell = Barbell::default();
        let start = 45.0 + f64::from(start_steps) * 0.5;
        let working = start + f64::from(gap_steps) * 0.5 + offset;

        let totals = barbell.warmup_totals(start, working, count).unwrap();
        let off_grid = Err(PlateError::InvalidIncrement { increment: 0.5 });
        prop_assert!(totals.iter().all(|total| barbell.select(*total) != off_grid));

        match barbell.plan(start, working, count) {
            Err(PlanError::Set { set: SetLabel::Working, source: PlateError::InvalidIncrement { .. } })
            | Err(PlanError::Set { source: PlateError::Unmatchable, .. }) => {}
            other => prop_assert!(false, "unexpected plan outcome {:?}", other),
        }
    }
}

#[test]
fn standard_warmup_ladder() {
    let plan = Barbell::default().plan(95.0, 135.0, 4).unwrap();
    let totals = plan.totals();
    assert_eq!(totals, vec![95.0, 105.0, 115.0, 125.0, 135.0]);
}

#[test]
fn start_above_working_is_rejected() {
    assert_eq!(
        Barbell::default().plan(100.0, 95.0, 4).map(|_| ()),
        Err(PlanError::Request(PlateError::StartNotBelowTarget))
    );
}
