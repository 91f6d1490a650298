use crate::extent::Extent;

/// Byte order used to decode multi-byte values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Host order; what the plain `read*` calls use.
    #[default]
    Native,
    Little,
    Big,
}

/// Construction parameters for [`BinaryCursor::from_config`](crate::BinaryCursor::from_config).
#[derive(Debug, Clone, Default)]
pub struct CursorConfig {
    /// Declared length. `None` means the length of the buffer handed in.
    pub extent: Option<Extent>,
    /// Starting offset. Not validated against the extent.
    pub start: usize,
}

impl CursorConfig {
    pub fn unbounded() -> Self {
        Self {
            extent: Some(Extent::Unbounded),
            start: 0,
        }
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_extent(mut self, extent: Extent) -> Self {
        self.extent = Some(extent);
        self
    }
}
