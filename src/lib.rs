//! Bounds-checked cursor for decoding fixed-width values out of a borrowed
//! byte buffer.
//!
//! ```
//! use binread_cursor::BinaryCursor;
//!
//! let mut bytes = 1u32.to_ne_bytes().to_vec();
//! bytes.push(0xFF);
//!
//! let mut cursor = BinaryCursor::new(&bytes);
//! assert_eq!(cursor.read_u32(), 1);
//! assert_eq!(cursor.read_u8(), 255);
//! assert_eq!(cursor.read_u8(), 0); // past the end: zero, no advance
//! assert_eq!(cursor.pos(), 5);
//! assert!(cursor.overran());
//! ```

/// Emit a `tracing` event when the `tracing` feature is enabled; no-op otherwise.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}

pub mod config;
pub mod cursor;
pub mod error;
pub mod extent;
pub mod primitive;

pub use config::{ByteOrder, CursorConfig};
pub use cursor::BinaryCursor;
pub use error::{CursorError, Result};
pub use extent::Extent;
pub use primitive::Primitive;
