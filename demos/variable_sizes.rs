// Example: rows whose height is only known once asked for, with a reset after an edit.
use std::sync::{Arc, RwLock};

use lazy_virtualizer::{SizeIndex, SizeIndexOptions, VisibleRangeRequest};

fn main() -> lazy_virtualizer::Result<()> {
    // Pretend each row wraps to a different number of 18px lines.
    let heights: Arc<RwLock<Vec<f64>>> = Arc::new(RwLock::new(
        (0..10_000).map(|i| 18.0 * (1 + i % 4) as f64).collect(),
    ));

    let source = Arc::clone(&heights);
    let mut index = SizeIndex::new(SizeIndexOptions::new(
        10_000,
        move |i| source.read().ok()?.get(i).copied(),
        36.0,
    ));

    let viewport = VisibleRangeRequest::new(600.0, 5_000.0).with_overscan(2);
    index.for_each_visible_item(viewport, |i, sp| {
        println!("row {i}: top={} height={}", sp.offset, sp.size);
    })?;
    println!(
        "estimated total={} (measured through {:?})",
        index.total_size(),
        index.last_measured_index()
    );

    // Row 10 grew; everything from it onward must be re-measured.
    if let Ok(mut h) = heights.write() {
        h[10] = 180.0;
    }
    index.reset_item(10);

    let range = index.visible_range(viewport)?;
    println!("after edit: visible_range={range:?}");
    Ok(())
}
