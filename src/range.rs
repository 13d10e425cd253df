use crate::{Error, Result, SizeAndPosition, SizeIndex, VisibleRange, VisibleRangeRequest};

impl SizeIndex {
    /// Maps a scroll offset to the item whose leading edge is nearest at or before it.
    ///
    /// Offsets at or below 0 always map to item 0, even when leading items have zero size.
    /// Offsets inside the measured prefix are resolved with
    /// a binary search; offsets past it are bracketed by an exponential probe forward from the
    /// frontier, so only items up to the target get measured.
    pub fn find_nearest_item(&mut self, offset: f64) -> Result<usize> {
        if offset.is_nan() {
            vwarn!("find_nearest_item: NaN offset");
            return Err(Error::InvalidOffset { offset });
        }
        let offset = offset.max(0.0);
        if offset == 0.0 {
            // Zero-size leading items all start at 0; the first of them is the nearest.
            self.size_and_position(0)?;
            return Ok(0);
        }

        let last = self.last_measured_size_and_position();
        let last_index = self.last_measured_index().unwrap_or(0);

        if last.offset >= offset {
            self.binary_search(0, last_index, offset)
        } else {
            self.exponential_search(last_index, offset)
        }
    }

    /// Greatest index in `[low, high]` whose offset is `<= offset` (floored at 0).
    fn binary_search(&mut self, mut low: usize, mut high: usize, offset: f64) -> Result<usize> {
        while low <= high {
            let middle = low + (high - low) / 2;
            let current = self.size_and_position(middle)?.offset;

            if current == offset {
                return Ok(middle);
            } else if current < offset {
                low = middle + 1;
            } else {
                if middle == 0 {
                    break;
                }
                high = middle - 1;
            }
        }

        Ok(low.saturating_sub(1))
    }

    fn exponential_search(&mut self, mut index: usize, offset: f64) -> Result<usize> {
        let count = self.item_count();
        let mut interval = 1usize;

        while index < count && self.size_and_position(index)?.offset < offset {
            index = index.saturating_add(interval);
            interval = interval.saturating_mul(2);
        }

        vtrace!(probe = index, "exponential_search bracket");
        self.binary_search(index / 2, index.min(count.saturating_sub(1)), offset)
    }

    /// Computes the inclusive window of items intersecting the viewport, widened by overscan.
    ///
    /// Returns `None` when there is nothing to render (the total size is 0).
    pub fn visible_range(&mut self, request: VisibleRangeRequest) -> Result<Option<VisibleRange>> {
        if self.total_size() == 0.0 {
            return Ok(None);
        }

        let count = self.item_count();
        let max_offset = request.offset + request.container_size;
        let mut start = self.find_nearest_item(request.offset)?;

        let mut offset = self.size_and_position(start)?.end();
        let mut stop = start;
        while offset < max_offset && stop + 1 < count {
            stop += 1;
            offset += self.size_and_position(stop)?.size;
        }

        if request.overscan_count > 0 {
            start = start.saturating_sub(request.overscan_count);
            stop = stop
                .saturating_add(request.overscan_count)
                .min(count - 1);
        }

        Ok(Some(VisibleRange { start, stop }))
    }

    /// Calls `f` with the position of every item in the (overscanned) visible range.
    ///
    /// This is the host's render loop: each item is placed at its `offset` with its `size`.
    /// Returns the range that was walked, or `None` if there was nothing to render.
    pub fn for_each_visible_item(
        &mut self,
        request: VisibleRangeRequest,
        mut f: impl FnMut(usize, SizeAndPosition),
    ) -> Result<Option<VisibleRange>> {
        let Some(range) = self.visible_range(request)? else {
            return Ok(None);
        };
        for index in range.indices() {
            f(index, self.size_and_position(index)?);
        }
        Ok(Some(range))
    }
}
