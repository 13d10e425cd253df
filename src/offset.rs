use crate::{Align, OffsetRequest, Result, SizeIndex};

impl SizeIndex {
    /// Computes the scroll offset that brings `request.target_index` into view.
    ///
    /// The result is clamped to `[0, max(0, total_size - container_size)]`. A missing, NaN, or
    /// non-positive container size yields 0.
    pub fn updated_offset_for_index(&mut self, request: OffsetRequest) -> Result<f64> {
        let container_size = match request.container_size {
            Some(size) if size > 0.0 => size,
            _ => return Ok(0.0),
        };

        let datum = self.size_and_position(request.target_index)?;
        let max_offset = datum.offset;
        let min_offset = max_offset - container_size + datum.size;

        let ideal = match request.align {
            Align::Start => max_offset,
            Align::End => min_offset,
            Align::Center => max_offset - (container_size - datum.size) / 2.0,
            Align::Auto => request.current_offset.min(max_offset).max(min_offset),
        };

        let max_scroll = (self.total_size() - container_size).max(0.0);
        let offset = ideal.min(max_scroll).max(0.0);
        vtrace!(
            target_index = request.target_index,
            align = ?request.align,
            offset,
            "updated_offset_for_index"
        );
        Ok(offset)
    }

    /// Host-side "scroll to index": like [`Self::updated_offset_for_index`], but an
    /// out-of-range target falls back to the first item instead of failing.
    pub fn offset_for_index(
        &mut self,
        index: usize,
        align: Align,
        container_size: f64,
        current_offset: f64,
    ) -> Result<f64> {
        let target_index = if index < self.item_count() { index } else { 0 };
        self.updated_offset_for_index(OffsetRequest {
            align,
            container_size: Some(container_size),
            current_offset,
            target_index,
        })
    }
}
