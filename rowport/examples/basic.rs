// Example: window a large collection and react to the end-reached signal.
use rowport::{Align, EndReached, ListWindow, WindowOptions};

fn main() -> rowport::Result<()> {
    let rows: Vec<String> = (0..1_000).map(|i| format!("row {i}")).collect();

    let mut w = ListWindow::new(
        WindowOptions::new(50.0)
            .with_item_count(rows.len())
            .with_viewport_height(400.0)
            .with_on_end_reached(Some(|e: EndReached| {
                println!("end reached: {} loaded, {}px left", e.item_count, e.distance_to_end);
            })),
    )?;

    w.on_scroll(2_500.0)?;
    println!("total_height={}", w.total_height());
    println!("range={:?} top_offset={}", w.range(), w.top_offset());
    for s in w.render_slice(&rows) {
        println!("  [{}] @{} {}", s.index, s.top, s.item);
    }

    let off = w.scroll_to_index_offset(999, Align::End);
    let update = w.on_scroll(off)?;
    println!("after scroll_to_index: offset={off} update={update:?}");
    Ok(())
}
