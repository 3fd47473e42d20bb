//! Basic SegmentedDeque usage example

use anyhow::{Context, Result};
use segdeque::{SegmentedDeque, SeqCursor};

fn main() -> Result<()> {
    println!("SegmentedDeque Basic Usage Example");
    println!("==================================");

    // Small segments make the layout easy to follow.
    let mut dq: SegmentedDeque<i32, 4> = (0..=8).collect();
    println!("Initial:        {dq}");
    println!(
        "  segments: {}, directory slots: {}",
        dq.segment_count(),
        dq.directory_capacity()
    );

    dq.insert(4, 99);
    println!("insert(4, 99):  {dq}");

    let erased = dq.erase_at(0).context("deque was empty")?;
    println!("erase_at(0):    {dq} (removed {erased})");

    let front = dq.pop_front().context("deque was empty")?;
    println!("pop_front():    {dq} (got {front})");

    dq.set(2, -1)?;
    println!("set(2, -1):     {dq}");

    // Out-of-range writes are reported, not ignored.
    if let Err(err) = dq.set(100, 0) {
        println!("set(100, 0):    {err}");
    }

    println!("Walking backward with a cursor:");
    let mut cursor = dq.last();
    while cursor.is_valid() {
        if let Some(v) = cursor.get() {
            println!("  [{}] = {v}", cursor.position());
        }
        cursor.move_prev();
    }

    dq.erase_range(1, 5);
    println!("erase_range(1, 5): {dq}");

    dq.clear();
    println!("clear():        {dq} (pooled segments: {})", dq.pooled_segments());

    Ok(())
}
