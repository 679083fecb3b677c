use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use windower::WindowOptions;
use windower_adapter::{LoadMoreOptions, ScrollController, ScrollMetrics};

fn main() {
    // Example: a momentum list that pages in 50 rows at a time as the user nears the end.
    //
    // An adapter would:
    // - forward each host scroll event to `handle_scroll`
    // - start a fetch from the load-more callback and raise its own `is_loading` flag
    // - call `set_item_count` when the page arrives and clear the flag
    let requested = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&requested);

    let mut list = match ScrollController::new(
        WindowOptions::new(28).with_viewport_extent(560).with_overscan(3),
        50,
    ) {
        Ok(list) => list.with_load_more(LoadMoreOptions::default(), move || {
            flag.store(true, Ordering::Relaxed);
        }),
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };

    let mut rows = 50usize;
    let mut is_loading = false;
    let mut offset = 0u64;
    while rows < 200 {
        offset += 84;
        let scroll_extent = list.total_extent();
        let out = list.handle_scroll(ScrollMetrics::new(offset, scroll_extent, 560), is_loading);
        if out.load_more_fired {
            is_loading = true;
            println!("offset={offset} range={:?} -> fetching", out.range);
        }

        if is_loading && requested.swap(false, Ordering::Relaxed) {
            rows += 50;
            list.set_item_count(rows);
            is_loading = false;
            println!("loaded page, rows={rows} total_extent={}", list.total_extent());
        }
    }

    println!("done: offset={} window={:?}", list.scroll_offset(), list.window());
}
