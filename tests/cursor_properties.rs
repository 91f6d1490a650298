use binread_cursor::{BinaryCursor, ByteOrder, Extent};
use proptest::prelude::*;

/// A value of one of the eight integer widths, remembered with its bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
}

impl Field {
    fn encode(self, out: &mut Vec<u8>) {
        match self {
            Field::I8(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Field::I16(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Field::I32(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Field::I64(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Field::U8(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Field::U16(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Field::U32(v) => out.extend_from_slice(&v.to_ne_bytes()),
            Field::U64(v) => out.extend_from_slice(&v.to_ne_bytes()),
        }
    }

    /// Read a value of the same kind back out of the cursor.
    fn read_same(self, cursor: &mut BinaryCursor<'_>) -> Field {
        match self {
            Field::I8(_) => Field::I8(cursor.read_i8()),
            Field::I16(_) => Field::I16(cursor.read_i16()),
            Field::I32(_) => Field::I32(cursor.read_i32()),
            Field::I64(_) => Field::I64(cursor.read_i64()),
            Field::U8(_) => Field::U8(cursor.read_u8()),
            Field::U16(_) => Field::U16(cursor.read_u16()),
            Field::U32(_) => Field::U32(cursor.read_u32()),
            Field::U64(_) => Field::U64(cursor.read_u64()),
        }
    }
}

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![
        any::<i8>().prop_map(Field::I8),
        any::<i16>().prop_map(Field::I16),
        any::<i32>().prop_map(Field::I32),
        any::<i64>().prop_map(Field::I64),
        any::<u8>().prop_map(Field::U8),
        any::<u16>().prop_map(Field::U16),
        any::<u32>().prop_map(Field::U32),
        any::<u64>().prop_map(Field::U64),
    ]
}

/// Width-dispatched silent read returning the value widened to u64.
fn read_width(cursor: &mut BinaryCursor<'_>, width: usize) -> u64 {
    match width {
        1 => u64::from(cursor.read_u8()),
        2 => u64::from(cursor.read_u16()),
        4 => u64::from(cursor.read_u32()),
        _ => cursor.read_u64(),
    }
}

fn width() -> impl Strategy<Value = usize> {
    prop_oneof![Just(1usize), Just(2), Just(4), Just(8)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn native_sequence_reads_back(fields in prop::collection::vec(field(), 0..32)) {
        let mut bytes = Vec::new();
        for f in &fields {
            f.encode(&mut bytes);
        }

        let mut cursor = BinaryCursor::new(&bytes);
        for f in &fields {
            prop_assert_eq!(f.read_same(&mut cursor), *f);
        }
        prop_assert_eq!(cursor.pos(), bytes.len());
        prop_assert!(!cursor.overran());
    }

    #[test]
    fn read_succeeds_iff_it_fits(
        data in prop::collection::vec(any::<u8>(), 0..24),
        declared in 0usize..40,
        start in 0usize..32,
        width in width(),
    ) {
        // A declared length past the slice still stops reads at the slice end.
        let readable = declared.min(data.len());
        let mut cursor = BinaryCursor::with_extent(&data, Extent::Bounded(declared), start);
        let fits = start + width <= readable;

        prop_assert_eq!(cursor.len(), declared);
        prop_assert_eq!(cursor.remaining(), readable.saturating_sub(start));

        prop_assert_eq!(cursor.can_read(width), fits);
        let value = read_width(&mut cursor, width);
        if fits {
            prop_assert_eq!(cursor.pos(), start + width);
            prop_assert!(!cursor.overran());
        } else {
            prop_assert_eq!(value, 0);
            prop_assert_eq!(cursor.pos(), start);
            prop_assert!(cursor.overran());
        }
    }

    #[test]
    fn unbounded_reads_always_advance(
        data in prop::collection::vec(any::<u8>(), 64..96),
        widths in prop::collection::vec(width(), 0..8),
    ) {
        let mut cursor = BinaryCursor::unbounded(&data);
        for w in widths {
            let before = cursor.pos();
            read_width(&mut cursor, w);
            prop_assert_eq!(cursor.pos(), before + w);
        }
    }

    #[test]
    fn seek_accepts_only_below_len(len in 0usize..32, target in 0usize..48) {
        let data = vec![0u8; len];
        let mut cursor = BinaryCursor::new(&data);
        cursor.seek(target);
        let expected = if target < len { target } else { 0 };
        prop_assert_eq!(cursor.pos(), expected);
    }

    #[test]
    fn skip_accepts_only_below_len(len in 1usize..32, start in 0usize..32, delta in 0usize..48) {
        let data = vec![0u8; len];
        let start = start % len;
        let mut cursor = BinaryCursor::with_extent(&data, Extent::Bounded(len), start);
        cursor.skip(delta);
        let expected = if start + delta < len { start + delta } else { start };
        prop_assert_eq!(cursor.pos(), expected);
    }

    #[test]
    fn array_read_zero_fills_tail(
        data in prop::collection::vec(any::<u8>(), 0..16),
        count in 0usize..24,
    ) {
        let mut cursor = BinaryCursor::new(&data);
        let out = cursor.read_uchars(count);
        let k = count.min(data.len());

        prop_assert_eq!(out.len(), count);
        prop_assert_eq!(&out[..k], &data[..k]);
        prop_assert!(out[k..].iter().all(|&b| b == 0));
        prop_assert_eq!(cursor.pos(), k);
    }

    #[test]
    fn checked_agrees_with_silent(
        data in prop::collection::vec(any::<u8>(), 0..16),
        start in 0usize..20,
    ) {
        let mut silent = BinaryCursor::with_extent(&data, Extent::Bounded(data.len()), start);
        let mut checked = silent;

        let value = silent.read_u32();
        match checked.try_read::<u32>() {
            Ok(v) => prop_assert_eq!(v, value),
            Err(_) => prop_assert_eq!(value, 0),
        }
        prop_assert_eq!(silent.pos(), checked.pos());
    }

    #[test]
    fn ordered_reads_match_std(value in any::<u32>()) {
        let le = value.to_le_bytes();
        let be = value.to_be_bytes();
        prop_assert_eq!(BinaryCursor::new(&le).read_with::<u32>(ByteOrder::Little), value);
        prop_assert_eq!(BinaryCursor::new(&be).read_with::<u32>(ByteOrder::Big), value);
    }
}
