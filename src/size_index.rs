use alloc::vec::Vec;

use crate::options::sanitize_estimate;
use crate::{ConfigUpdate, Error, Result, SizeAndPosition, SizeIndexOptions};

/// A lazily populated cache of item offsets and sizes along one scroll axis.
///
/// Items are measured on demand, in index order, up to the highest index any query has needed
/// (the *frontier*). Everything past the frontier is approximated with
/// [`SizeIndexOptions::estimated_item_size`], so queries never pay for items they don't touch.
///
/// Querying methods that may measure take `&mut self`; the index has exactly one writer.
#[derive(Clone, Debug)]
pub struct SizeIndex {
    options: SizeIndexOptions,
    // Entries past `last_measured` may still be physically present but are never read.
    cache: Vec<SizeAndPosition>,
    last_measured: Option<usize>,
}

impl SizeIndex {
    pub fn new(mut options: SizeIndexOptions) -> Self {
        vdebug!(
            item_count = options.item_count,
            estimated_item_size = options.estimated_item_size,
            "SizeIndex::new"
        );
        options.estimated_item_size = checked_estimate(options.estimated_item_size);
        Self {
            options,
            cache: Vec::new(),
            last_measured: None,
        }
    }

    pub fn options(&self) -> &SizeIndexOptions {
        &self.options
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count
    }

    pub fn estimated_item_size(&self) -> f64 {
        self.options.estimated_item_size
    }

    /// Replaces the given configuration fields.
    ///
    /// This does not invalidate measured entries, even when the size source changes. Call
    /// [`Self::reset_item`] (or [`Self::reset_all`]) when previously measured sizes are stale.
    /// Shrinking `item_count` below the frontier clamps the frontier to the new last item.
    pub fn update_config(&mut self, update: ConfigUpdate) {
        vdebug!(
            item_count = ?update.item_count,
            replaces_getter = update.item_size_getter.is_some(),
            estimated_item_size = ?update.estimated_item_size,
            "SizeIndex::update_config"
        );
        if let Some(item_count) = update.item_count {
            self.options.item_count = item_count;
            if self.last_measured.is_some_and(|i| i >= item_count) {
                self.last_measured = item_count.checked_sub(1);
            }
        }
        if let Some(estimated_item_size) = update.estimated_item_size {
            self.options.estimated_item_size = checked_estimate(estimated_item_size);
        }
        if let Some(getter) = update.item_size_getter {
            self.options.item_size_getter = getter;
        }
    }

    /// Highest index with a valid measurement, or `None` if nothing is measured.
    pub fn last_measured_index(&self) -> Option<usize> {
        self.last_measured
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.last_measured.is_some_and(|last| index <= last)
    }

    /// The valid measured prefix, indexed by item.
    pub fn measured(&self) -> &[SizeAndPosition] {
        match self.last_measured {
            Some(last) => &self.cache[..=last],
            None => &[],
        }
    }

    /// Position of the last measured item, or `{0, 0}` when nothing is measured.
    pub fn last_measured_size_and_position(&self) -> SizeAndPosition {
        match self.last_measured {
            Some(last) => self.cache[last],
            None => SizeAndPosition::default(),
        }
    }

    /// Returns the exact offset and size of `index`, measuring up to it if needed.
    ///
    /// On [`Error::InvalidSize`] the frontier stays at the last item that measured
    /// successfully; earlier measurements from the same call are kept.
    pub fn size_and_position(&mut self, index: usize) -> Result<SizeAndPosition> {
        let count = self.options.item_count;
        if index >= count {
            return Err(Error::OutOfRange { index, count });
        }

        if let Some(last) = self.last_measured {
            if index <= last {
                return Ok(self.cache[index]);
            }
        }

        let first = self.last_measured.map_or(0, |last| last + 1);
        vtrace!(from = first, to = index, "extend measurement frontier");

        let mut offset = self.last_measured_size_and_position().end();
        for i in first..=index {
            let size = match (self.options.item_size_getter)(i) {
                Some(size) if size.is_finite() && size >= 0.0 => size,
                size => {
                    vwarn!(index = i, size = ?size, "invalid item size");
                    return Err(Error::InvalidSize { index: i, size });
                }
            };

            let entry = SizeAndPosition { offset, size };
            if i < self.cache.len() {
                self.cache[i] = entry;
            } else {
                self.cache.push(entry);
            }
            self.last_measured = Some(i);
            offset += size;
        }

        Ok(self.cache[index])
    }

    /// Measured extent plus an estimate for every unmeasured item.
    ///
    /// Converges to the exact total as more items are measured; never measures anything.
    pub fn total_size(&self) -> f64 {
        let measured_end = self.last_measured_size_and_position().end();
        let measured_count = self.last_measured.map_or(0, |last| last + 1);
        let unmeasured = self.options.item_count.saturating_sub(measured_count);
        measured_end + unmeasured as f64 * self.options.estimated_item_size
    }

    /// Forgets measurements from `index` onward.
    ///
    /// The next query at or past `index` re-invokes the size source from `index`.
    pub fn reset_item(&mut self, index: usize) {
        let next = match (self.last_measured, index.checked_sub(1)) {
            (Some(last), Some(before)) => Some(last.min(before)),
            _ => None,
        };
        vtrace!(index, last_measured = ?next, "reset_item");
        self.last_measured = next;
    }

    /// Forgets every measurement.
    pub fn reset_all(&mut self) {
        self.reset_item(0);
    }
}

fn checked_estimate(estimated_item_size: f64) -> f64 {
    let sanitized = sanitize_estimate(estimated_item_size);
    if sanitized != estimated_item_size {
        vwarn!(
            estimated_item_size,
            fallback = sanitized,
            "estimated_item_size must be positive and finite"
        );
    }
    sanitized
}
