use chrono::{DateTime, FixedOffset, TimeDelta};
use proptest::prelude::*;
use typed_json::{CanonicalPair, Complex, Envelope, TypeTag, TypedValue};

fn round_trip(tag: TypeTag, value: TypedValue) -> (CanonicalPair, TypedValue) {
    let pair = Envelope::new(tag, value, None)
        .encode_with(None)
        .expect("encode must succeed");
    let mut decoded = Envelope::decoder(None);
    decoded.decode_with(&pair, None).expect("decode must succeed");
    (pair, decoded.value)
}

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

fn finite_f32() -> impl Strategy<Value = f32> {
    any::<f32>().prop_filter("finite", |v| v.is_finite())
}

fn datetime() -> impl Strategy<Value = DateTime<FixedOffset>> {
    // 0000-01-02 to 9999-12-30 UTC, so that no whole-minute offset pushes the
    // local date outside the years RFC 3339 can carry.
    let parts = (-62_167_132_800i64..253_402_214_400, 0u32..1_000_000_000, -1439i32..=1439);
    parts.prop_map(|(secs, nanos, minutes)| {
        let offset = FixedOffset::east_opt(minutes * 60).expect("offset in range");
        DateTime::from_timestamp(secs, nanos)
            .expect("timestamp in range")
            .with_timezone(&offset)
    })
}

fn duration() -> impl Strategy<Value = TimeDelta> {
    let full_range = (-i64::MAX / 1_000 - 1..=i64::MAX / 1_000, 0u32..1_000_000_000)
        .prop_filter_map("outside TimeDelta range", |(secs, nanos)| TimeDelta::new(secs, nanos));
    prop_oneof![
        any::<i64>().prop_map(TimeDelta::nanoseconds),
        full_range,
        Just(TimeDelta::MAX),
        Just(TimeDelta::MIN),
    ]
}

fn complex64() -> impl Strategy<Value = Complex<f32>> {
    (finite_f32(), finite_f32()).prop_map(|(re, im)| Complex::new(re, im))
}

fn complex128() -> impl Strategy<Value = Complex<f64>> {
    (finite_f64(), finite_f64()).prop_map(|(re, im)| Complex::new(re, im))
}

fn assert_round_trip(tag: TypeTag, value: impl Into<TypedValue>) -> Result<(), TestCaseError> {
    let value = value.into();
    prop_assert_eq!(round_trip(tag, value.clone()).1, value);
    Ok(())
}

proptest! {
    #[test]
    fn prop_integers_round_trip(
        a in any::<i8>(),
        b in any::<i64>(),
        c in any::<u64>(),
        d in any::<isize>()
    ) {
        prop_assert_eq!(round_trip(TypeTag::INT8, a.into()).1, TypedValue::Int8(a));
        prop_assert_eq!(round_trip(TypeTag::INT64, b.into()).1, TypedValue::Int64(b));
        prop_assert_eq!(round_trip(TypeTag::UINT64, c.into()).1, TypedValue::Uint64(c));
        prop_assert_eq!(round_trip(TypeTag::INT, d.into()).1, TypedValue::Int(d));
    }

    #[test]
    fn prop_remaining_scalars_round_trip(
        a in any::<i16>(),
        b in any::<i32>(),
        c in any::<usize>(),
        d in any::<u8>(),
        e in any::<u16>(),
        f in any::<u32>(),
        g in any::<bool>(),
        h in complex64()
    ) {
        assert_round_trip(TypeTag::INT16, a)?;
        assert_round_trip(TypeTag::INT32, b)?;
        assert_round_trip(TypeTag::UINT, c)?;
        assert_round_trip(TypeTag::UINT8, d)?;
        assert_round_trip(TypeTag::UINT16, e)?;
        assert_round_trip(TypeTag::UINT32, f)?;
        assert_round_trip(TypeTag::BOOL, g)?;
        assert_round_trip(TypeTag::COMPLEX64, h)?;
    }

    #[test]
    fn prop_integer_lists_round_trip(
        a in prop::collection::vec(any::<isize>(), 0..8),
        b in prop::collection::vec(any::<i8>(), 0..8),
        c in prop::collection::vec(any::<i16>(), 0..8),
        d in prop::collection::vec(any::<i64>(), 0..8),
        e in prop::collection::vec(any::<usize>(), 0..8),
        f in prop::collection::vec(any::<u8>(), 0..8),
        g in prop::collection::vec(any::<u16>(), 0..8),
        h in prop::collection::vec(any::<u32>(), 0..8),
        i in prop::collection::vec(any::<u64>(), 0..8)
    ) {
        assert_round_trip(TypeTag::INT_LIST, a)?;
        assert_round_trip(TypeTag::INT8_LIST, b)?;
        assert_round_trip(TypeTag::INT16_LIST, c)?;
        assert_round_trip(TypeTag::INT64_LIST, d)?;
        assert_round_trip(TypeTag::UINT_LIST, e)?;
        assert_round_trip(TypeTag::UINT8_LIST, f)?;
        assert_round_trip(TypeTag::UINT16_LIST, g)?;
        assert_round_trip(TypeTag::UINT32_LIST, h)?;
        assert_round_trip(TypeTag::UINT64_LIST, i)?;
    }

    #[test]
    fn prop_float_time_and_complex_lists_round_trip(
        a in prop::collection::vec(finite_f32(), 0..8),
        b in prop::collection::vec(finite_f64(), 0..8),
        c in prop::collection::vec(datetime(), 0..4),
        d in prop::collection::vec(complex64(), 0..4),
        e in prop::collection::vec(complex128(), 0..4)
    ) {
        assert_round_trip(TypeTag::FLOAT32_LIST, a)?;
        assert_round_trip(TypeTag::FLOAT64_LIST, b)?;
        assert_round_trip(TypeTag::DATETIME_LIST, c)?;
        assert_round_trip(TypeTag::COMPLEX64_LIST, d)?;
        assert_round_trip(TypeTag::COMPLEX128_LIST, e)?;
    }

    #[test]
    fn prop_floats_round_trip(a in finite_f32(), b in finite_f64()) {
        let (pair, value) = round_trip(TypeTag::FLOAT32, a.into());
        prop_assert!(pair.value.contains('E'));
        prop_assert_eq!(value, TypedValue::Float32(a));
        prop_assert_eq!(round_trip(TypeTag::FLOAT64, b.into()).1, TypedValue::Float64(b));
    }

    #[test]
    fn prop_strings_round_trip(text in any::<String>()) {
        let (pair, value) = round_trip(TypeTag::STRING, text.clone().into());
        prop_assert_eq!(&pair.value, &text);
        prop_assert_eq!(value, TypedValue::Str(text));
    }

    #[test]
    fn prop_datetimes_round_trip(at in datetime()) {
        prop_assert_eq!(round_trip(TypeTag::DATETIME, at.into()).1, TypedValue::DateTime(at));
    }

    #[test]
    fn prop_durations_round_trip(delta in duration()) {
        prop_assert_eq!(round_trip(TypeTag::DURATION, delta.into()).1, TypedValue::Duration(delta));
    }

    #[test]
    fn prop_complex_round_trip(c in complex128()) {
        prop_assert_eq!(round_trip(TypeTag::COMPLEX128, c.into()).1, TypedValue::Complex128(c));
    }

    #[test]
    fn prop_lists_round_trip(
        ints in prop::collection::vec(any::<i32>(), 0..16),
        flags in prop::collection::vec(any::<bool>(), 0..16),
        deltas in prop::collection::vec(duration(), 0..8)
    ) {
        let (_, value) = round_trip(TypeTag::INT32_LIST, ints.clone().into());
        prop_assert_eq!(value, TypedValue::Int32List(ints));
        let (_, value) = round_trip(TypeTag::BOOL_LIST, flags.clone().into());
        prop_assert_eq!(value, TypedValue::BoolList(flags));
        let (_, value) = round_trip(TypeTag::DURATION_LIST, deltas.clone().into());
        prop_assert_eq!(value, TypedValue::DurationList(deltas));
    }

    #[test]
    fn prop_string_lists_round_trip(items in prop::collection::vec(any::<String>(), 0..8)) {
        // A lone empty string encodes exactly like an empty list.
        prop_assume!(items != vec![String::new()]);
        let (pair, value) = round_trip(TypeTag::STRING_LIST, items.clone().into());
        prop_assert_eq!(pair.value.split(',').count(), items.len().max(1));
        prop_assert_eq!(value, TypedValue::StrList(items));
    }
}
