use windower::{Align, Rendered, WindowCalculator, WindowOptions, render_window};

fn main() {
    // A watchlist of 1_000 rows, 280 units each, in an 800-unit viewport.
    let tickers: Vec<String> = (0..1_000).map(|i| format!("ETF{i:04}")).collect();
    let calc = match WindowCalculator::new(
        WindowOptions::new(280).with_viewport_extent(800).with_overscan(3),
    ) {
        Ok(calc) => calc,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };

    let offset = 2_800;
    println!("window={:?}", calc.window(offset, tickers.len()));

    let rendered = render_window(
        &tickers,
        &calc,
        offset,
        |ticker, _| ticker.clone(),
        |it| format!("{:>7} @ {} ({})", it.key, it.offset_from_top, it.index),
        || String::from("no rows"),
    );
    if let Rendered::Window { nodes, .. } = rendered {
        for line in nodes {
            println!("{line}");
        }
    }

    match calc.scroll_to_index_offset(500, Align::Center, tickers.len()) {
        Ok(target) => println!("center 500 -> offset {target}"),
        Err(err) => println!("scroll failed: {err}"),
    }
    if let Err(err) = calc.scroll_to_index_offset(5_000, Align::Start, tickers.len()) {
        println!("scroll failed: {err}");
    }
}
