//! A lazily measured size and position index for virtualized lists.
//!
//! This crate answers the three questions a list virtualizer asks on every frame:
//! - where is item `i`, and how big is it ([`SizeIndex::size_and_position`])
//! - which items intersect the viewport ([`SizeIndex::visible_range`])
//! - what scroll offset brings item `i` into view ([`SizeIndex::updated_offset_for_index`])
//!
//! Item sizes may be unknown up front. They are pulled from a size source on demand, in index
//! order, and cached behind a measurement frontier; items past the frontier contribute an
//! estimated size to [`SizeIndex::total_size`]. Offset lookups use binary search over the
//! measured prefix and an exponential probe past it, so no query walks the whole list.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size and scroll offset
//! - item sizes (a constant, a table, or a callback; see [`ItemSize`])
//! - calls to [`SizeIndex::reset_item`] when sizes it already reported have changed
//!
//! ```
//! use lazy_virtualizer::{Align, OffsetRequest, SizeIndex, SizeIndexOptions, VisibleRangeRequest};
//!
//! let mut index = SizeIndex::new(SizeIndexOptions::from_item_size(10, 50.0, None));
//! let range = index
//!     .visible_range(VisibleRangeRequest::new(120.0, 0.0))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!((range.start, range.stop), (0, 2));
//!
//! let offset = index
//!     .updated_offset_for_index(OffsetRequest::new(5, 120.0).with_align(Align::Start))
//!     .unwrap();
//! assert_eq!(offset, 250.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod offset;
mod options;
mod range;
mod size_index;
mod types;


pub use error::{Error, Result};
pub use options::{
    ConfigUpdate, DEFAULT_ESTIMATED_ITEM_SIZE, ItemSize, ItemSizeGetter, SizeIndexOptions,
};
pub use size_index::SizeIndex;
pub use types::{Align, OffsetRequest, SizeAndPosition, VisibleRange, VisibleRangeRequest};
