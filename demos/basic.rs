// Example: fixed-size rows, a visible window, and scroll-to-index.
use lazy_virtualizer::{Align, OffsetRequest, SizeIndex, SizeIndexOptions, VisibleRangeRequest};

fn main() -> lazy_virtualizer::Result<()> {
    let mut index = SizeIndex::new(SizeIndexOptions::from_item_size(1_000_000, 20.0, None));

    let request = VisibleRangeRequest::new(400.0, 123_456.0).with_overscan(3);
    let range = index.visible_range(request)?;
    println!("total_size={}", index.total_size());
    println!("visible_range={range:?}");
    println!("measured={:?}", index.last_measured_index());

    let offset = index.updated_offset_for_index(
        OffsetRequest::new(999_999, 400.0)
            .with_align(Align::End)
            .with_current_offset(123_456.0),
    )?;
    println!("after scroll_to_index: offset={offset}");
    Ok(())
}
