use core::ops::RangeInclusive;

/// Where a target item should land in the viewport after a programmatic scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Item flush with the viewport start.
    Start,
    /// Item centered in the viewport.
    Center,
    /// Item flush with the viewport end.
    End,
    /// Keep the current offset if the item is fully visible, otherwise snap to the nearer edge.
    #[default]
    Auto,
}

/// Exact position and extent of one item along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeAndPosition {
    /// Distance from the sequence start to the item's leading edge.
    pub offset: f64,
    /// Extent along the scroll axis.
    pub size: f64,
}

impl SizeAndPosition {
    /// Offset of the trailing edge (`offset + size`).
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// An inclusive window of item indexes to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start: usize,
    pub stop: usize, // inclusive
}

impl VisibleRange {
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.stop - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.stop
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index <= self.stop
    }

    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.stop
    }
}

/// Viewport geometry for [`crate::SizeIndex::visible_range`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRangeRequest {
    pub container_size: f64,
    /// Current scroll offset. Negative values are treated as 0 when locating the first item.
    pub offset: f64,
    /// Extra items rendered on each side of the strictly visible window.
    pub overscan_count: usize,
}

impl VisibleRangeRequest {
    pub fn new(container_size: f64, offset: f64) -> Self {
        Self {
            container_size,
            offset,
            overscan_count: 0,
        }
    }

    pub fn with_overscan(mut self, overscan_count: usize) -> Self {
        self.overscan_count = overscan_count;
        self
    }
}

/// A "scroll to index" request for [`crate::SizeIndex::updated_offset_for_index`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetRequest {
    pub align: Align,
    /// Viewport extent. `None`, NaN, or a non-positive size means no scroll is possible.
    pub container_size: Option<f64>,
    pub current_offset: f64,
    pub target_index: usize,
}

impl OffsetRequest {
    pub fn new(target_index: usize, container_size: f64) -> Self {
        Self {
            align: Align::Auto,
            container_size: Some(container_size),
            current_offset: 0.0,
            target_index,
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_current_offset(mut self, current_offset: f64) -> Self {
        self.current_offset = current_offset;
        self
    }
}
