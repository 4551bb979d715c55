use pbflot::pack::{decode_pack, encode_record};
use pbflot::{CurveSet, FlotationError, IronModel, OperatingPoint, PerformanceModel};

fn compress(curves: &CurveSet) -> Vec<u8> {
    let bytes = encode_record(&curves.to_record()).unwrap();
    zstd::encode_all(&bytes[..], 19).unwrap()
}

#[test]
fn test_pack_round_trip() {
    let curves = CurveSet::default();
    let pack = compress(&curves);
    assert_eq!(CurveSet::from_pack(&pack).unwrap(), curves);
}

#[test]
fn test_pack_records_version() {
    let record = decode_pack(&compress(&CurveSet::default())).unwrap();
    assert_eq!(record.version.len(), 1);
    assert_eq!(record.tables.len(), 5);
}

#[test]
fn test_model_over_alternative_pack() {
    let mut record = CurveSet::default().to_record();
    // A plant whose Luproset rejects twice as much carbon.
    let luproset = record
        .tables
        .iter_mut()
        .find(|t| t.name == "luproset")
        .unwrap();
    let col = luproset
        .attributes
        .iter()
        .position(|a| a == "carbon_rejection")
        .unwrap();
    for point in &mut luproset.points {
        point.values[col] = (point.values[col] * 2.0).min(100.0);
    }
    let pack = zstd::encode_all(&encode_record(&record).unwrap()[..], 3).unwrap();

    let model = PerformanceModel::new(CurveSet::from_pack(&pack).unwrap(), IronModel::DepressionOnly)
        .unwrap();
    let r = model.evaluate(&OperatingPoint {
        luproset: 100.0,
        ..OperatingPoint::default()
    });
    // 18 * (1 - 0.70)
    approx::assert_relative_eq!(r.carbon_grade, 5.4, epsilon = 1e-9);
}

#[test]
fn test_pack_with_invalid_table_is_rejected() {
    let mut record = CurveSet::default().to_record();
    record.tables[2].points[1].key = record.tables[2].points[0].key;
    let pack = zstd::encode_all(&encode_record(&record).unwrap()[..], 3).unwrap();
    assert!(matches!(
        CurveSet::from_pack(&pack),
        Err(FlotationError::DuplicateKey { .. })
    ));
}

#[test]
fn test_truncated_pack_is_data_error() {
    let pack = compress(&CurveSet::default());
    let err = CurveSet::from_pack(&pack[..pack.len() / 2]).unwrap_err();
    assert!(matches!(err, FlotationError::DataError(_)));
}
