use kinetic_value_core::{
    narrow, parse_quaternion, parse_scalar, parse_vector2, parse_vector3, Color, ColorDomain,
    NativeValue, ParseValueError, QuaternionDomain, ScalarDomain, ValueDomain, Vector2Domain,
    Vector3Domain,
};

fn roundtrip<D: ValueDomain>(value: D::Value) -> D::Value {
    D::from_native(D::to_native(&value))
}

#[test]
fn scalar_roundtrip_is_exact() {
    for v in [0.0, 1.0, -1.0, 0.5, 0.1, 1.0e-3, 360.0, std::f32::consts::PI] {
        assert_eq!(roundtrip::<ScalarDomain>(v), v);
    }
}

#[test]
fn extreme_values_roundtrip_exactly() {
    let extremes = [
        f32::MAX,
        f32::MIN,
        f32::MIN_POSITIVE,
        f32::MIN_POSITIVE / 8.0,
        f32::EPSILON,
        -0.0,
    ];
    for v in extremes {
        assert_eq!(roundtrip::<ScalarDomain>(v).to_bits(), v.to_bits());
    }
    assert_eq!(
        roundtrip::<Vector3Domain>([f32::MAX, f32::MIN, 0.1]),
        [f32::MAX, f32::MIN, 0.1]
    );
    assert_eq!(
        roundtrip::<QuaternionDomain>([f32::MIN_POSITIVE, 0.0, 0.1, 1.0]),
        [f32::MIN_POSITIVE, 0.0, 0.1, 1.0]
    );
}

#[test]
fn vector_roundtrips() {
    assert_eq!(roundtrip::<Vector2Domain>([3.5, -8.0]), [3.5, -8.0]);
    assert_eq!(roundtrip::<Vector3Domain>([0.0, 100.0, -0.75]), [0.0, 100.0, -0.75]);
    assert_eq!(
        roundtrip::<QuaternionDomain>([0.0, 0.0, 0.5, 0.75]),
        [0.0, 0.0, 0.5, 0.75]
    );
}

#[test]
fn every_color_channel_value_roundtrips() {
    for v in 0..=u8::MAX {
        let color = Color::from_argb(v, v, 255 - v, v / 2);
        assert_eq!(roundtrip::<ColorDomain>(color), color);
    }
}

#[test]
fn parsed_text_flows_through_codec() {
    let declared = parse_vector3("<4, 5, 6>").unwrap();
    let native: NativeValue = Vector3Domain::to_native(&declared).into();
    assert_eq!(native, NativeValue::Vector3([4.0, 5.0, 6.0]));
}

#[test]
fn parsed_text_roundtrips_through_codec() {
    let declared = parse_scalar("0.1").unwrap();
    assert_eq!(roundtrip::<ScalarDomain>(declared), declared);
    let declared = parse_quaternion("0, 0, 0.3826834, 0.9238795").unwrap();
    assert_eq!(roundtrip::<QuaternionDomain>(declared), declared);
}

#[test]
fn out_of_range_text_never_reaches_the_codec() {
    for text in ["1e300", "-3.5e38", "1e39"] {
        assert!(
            matches!(parse_scalar(text), Err(ParseValueError::OutOfRange(_))),
            "{text} should be out of range"
        );
    }
    assert!(matches!(
        parse_vector2("1, 1e300"),
        Err(ParseValueError::OutOfRange(_))
    ));
    assert!(matches!(
        parse_quaternion("0, 0, 0, 1e300"),
        Err(ParseValueError::OutOfRange(_))
    ));
    assert!(narrow(f64::from(f32::MAX)).is_ok());
    assert!(narrow(f64::MAX).is_err());
}
