use pbflot::{CurveSet, IronModel, OperatingPoint, PerformanceModel};
use proptest::prelude::*;

fn in_domain() -> impl Strategy<Value = OperatingPoint> {
    (
        (0.0..=150.0f64, 0.0..=100.0f64, 0.0..=300.0f64, 7.0..=10.0f64),
        (0.0..=500.0f64, 8.0..=13.0f64, 3.0..=6.0f64, 8.0..=13.0f64),
    )
        .prop_map(|((collector, air_rate, smbs, ph), (luproset, fe, c, zn))| {
            OperatingPoint::new(collector, air_rate, smbs, ph, luproset, fe, c, zn)
        })
}

fn any_levers() -> impl Strategy<Value = OperatingPoint> {
    (
        (-1e3..1e3f64, -1e3..1e3f64, -1e3..1e3f64, -20.0..20.0f64),
        (-1e3..1e3f64, 8.0..=13.0f64, 3.0..=6.0f64, 8.0..=13.0f64),
    )
        .prop_map(|((collector, air_rate, smbs, ph), (luproset, fe, c, zn))| {
            OperatingPoint::new(collector, air_rate, smbs, ph, luproset, fe, c, zn)
        })
}

fn assert_within_bounds(model: &PerformanceModel, p: &OperatingPoint) {
    let r = model.evaluate(p);
    let fe_ceiling = p.fe_feed_grade * model.iron_model().upper_clamp_factor();
    assert!((0.0..=100.0).contains(&r.recovery), "recovery {}", r.recovery);
    assert!((35.0..=75.0).contains(&r.grade), "grade {}", r.grade);
    assert!((0.1..=fe_ceiling).contains(&r.iron_grade), "iron {}", r.iron_grade);
    assert!(
        (0.1..=p.carbon_feed_grade * 4.0).contains(&r.carbon_grade),
        "carbon {}",
        r.carbon_grade
    );
    assert!(
        (0.01..=p.zn_feed_grade * 2.0).contains(&r.zinc_grade),
        "zinc {}",
        r.zinc_grade
    );
}

proptest! {
    #[test]
    fn outputs_stay_in_range(p in in_domain()) {
        assert_within_bounds(&PerformanceModel::default(), &p);
    }

    #[test]
    fn outputs_stay_in_range_with_activation(p in in_domain()) {
        let model = PerformanceModel::new(CurveSet::default(), IronModel::DepressionPlusActivation)
            .unwrap();
        assert_within_bounds(&model, &p);
    }

    #[test]
    fn out_of_domain_levers_are_absorbed(p in any_levers()) {
        assert_within_bounds(&PerformanceModel::default(), &p);
    }

    #[test]
    fn out_of_domain_levers_are_absorbed_with_activation(p in any_levers()) {
        let model = PerformanceModel::new(CurveSet::default(), IronModel::DepressionPlusActivation)
            .unwrap();
        assert_within_bounds(&model, &p);
    }
}
