use approx::assert_relative_eq;
use pbflot::{CurveSet, FlotationError, Lever, ResponseTable};

#[test]
fn test_interior_linearity() {
    let t = ResponseTable::from_rows("a", "-", &["a"], &[(0.0, &[0.0]), (100.0, &[10.0])]).unwrap();
    assert_relative_eq!(t.interpolate(50.0).get("a").unwrap(), 5.0);
    assert_relative_eq!(t.interpolate(25.0).get("a").unwrap(), 2.5);
}

#[test]
fn test_edges_return_authored_rows_exactly() {
    let curves = CurveSet::default();
    for lever in Lever::ALL {
        let table = curves.table(lever);
        let (lo, hi) = table.domain();
        let (_, first) = table.point(0).unwrap();
        let (_, last) = table.point(table.len() - 1).unwrap();

        for x in [lo, lo - 1.0, lo - 1e6, f64::NEG_INFINITY] {
            assert_eq!(table.interpolate(x), first, "{lever} at {x}");
        }
        for x in [hi, hi + 1.0, hi + 1e6, f64::INFINITY] {
            assert_eq!(table.interpolate(x), last, "{lever} at {x}");
        }
    }
}

#[test]
fn test_continuous_across_control_points() {
    let curves = CurveSet::default();
    let eps = 1e-9;
    for lever in Lever::ALL {
        let table = curves.table(lever);
        for i in 1..table.len() - 1 {
            let (key, at) = table.point(i).unwrap();
            let below = table.interpolate(key - eps);
            let above = table.interpolate(key + eps);
            for ((b, a), k) in below.values().iter().zip(above.values()).zip(at.values()) {
                assert!((b - k).abs() < 1e-6, "{lever} jumps below key {key}");
                assert!((a - k).abs() < 1e-6, "{lever} jumps above key {key}");
            }
        }
    }
}

#[test]
fn test_collector_midpoint() {
    let curves = CurveSet::default();
    let r = curves.collector.interpolate(12.5);
    assert_relative_eq!(r.get("recovery").unwrap(), 20.0);
    assert_relative_eq!(r.get("grade").unwrap(), 46.5);
    assert_relative_eq!(r.get("zn_activation").unwrap(), 0.2, epsilon = 1e-12);
}

#[test]
fn test_ph_between_half_units() {
    let curves = CurveSet::default();
    let r = curves.ph.interpolate(9.75);
    assert_relative_eq!(r.get("recovery_multiplier").unwrap(), 0.775, epsilon = 1e-12);
    assert_relative_eq!(r.get("grade_bonus").unwrap(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(r.get("zn_selectivity").unwrap(), 0.55, epsilon = 1e-12);
}

#[test]
fn test_single_point_table_is_constant() {
    let t = ResponseTable::from_rows("flat", "-", &["a", "b"], &[(3.0, &[1.5, -2.0])]).unwrap();
    for x in [-10.0, 3.0, 42.0] {
        assert_eq!(t.interpolate(x).values(), &[1.5, -2.0]);
    }
}

#[test]
fn test_response_map_has_every_attribute() {
    let curves = CurveSet::default();
    let map = curves.smbs.interpolate(125.0).to_map();
    let names: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(names, ["grade", "iron_rejection", "recovery", "zn_depression"]);
    assert_relative_eq!(map["iron_rejection"], 42.5);
}

#[test]
fn test_missing_attribute_lookup() {
    let curves = CurveSet::default();
    let err = curves.luproset.attribute_index("grade").unwrap_err();
    assert_eq!(
        err,
        FlotationError::MissingAttribute {
            table: "luproset".to_string(),
            attribute: "grade".to_string(),
        }
    );
}
