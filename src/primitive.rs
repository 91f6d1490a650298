//! Fixed-width values the cursor knows how to decode.

use crate::config::ByteOrder;

mod sealed {
    pub trait Sealed {}
}

/// A plain fixed-width value that can be decoded from `WIDTH` raw bytes.
///
/// Implemented for the signed and unsigned integers up to 64 bits and for
/// `f32`/`f64`. Sealed; the set of decodable types is closed.
pub trait Primitive: sealed::Sealed + Copy + Default {
    /// Size of the encoded value in bytes.
    const WIDTH: usize;

    /// Decode from exactly `WIDTH` bytes in the requested order.
    ///
    /// Returns `None` when `bytes.len() != WIDTH`.
    fn decode(bytes: &[u8], order: ByteOrder) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                #[inline]
                fn decode(bytes: &[u8], order: ByteOrder) -> Option<Self> {
                    let raw: [u8; core::mem::size_of::<$ty>()] = bytes.try_into().ok()?;
                    Some(match order {
                        ByteOrder::Native => <$ty>::from_ne_bytes(raw),
                        ByteOrder::Little => <$ty>::from_le_bytes(raw),
                        ByteOrder::Big => <$ty>::from_be_bytes(raw),
                    })
                }
            }
        )*
    };
}

impl_primitive!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
