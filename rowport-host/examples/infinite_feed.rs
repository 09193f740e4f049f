// Example: a simulated host that scrolls through a paged feed.
use rowport::WindowOptions;
use rowport_host::{HostEvent, HostList, LoadMore};

struct Pages {
    page_size: usize,
    limit: usize,
}

impl LoadMore<String> for Pages {
    fn load_more(&mut self, loaded: usize) -> Option<Vec<String>> {
        if loaded >= self.limit {
            return None;
        }
        let end = (loaded + self.page_size).min(self.limit);
        Some((loaded..end).map(|i| format!("message #{i}")).collect())
    }
}

fn main() -> rowport::Result<()> {
    let mut host = HostList::new(Vec::new(), WindowOptions::new(24.0).with_overscan(3))?;
    let mut pages = Pages {
        page_size: 25,
        limit: 100,
    };

    host.mount(240.0)?;
    while host.load_requested() {
        host.pump(&mut pages)?;
    }

    let mut top = 0.0;
    while !host.is_exhausted() {
        top += 96.0;
        host.handle(HostEvent::Scroll(top))?;
        let appended = host.pump(&mut pages)?;
        let frame = host.render(|item, _| item.clone());
        println!(
            "scroll_top={top} spacer={} rendered={} first={:?} appended={appended}",
            frame.spacer_height,
            frame.nodes.len(),
            frame.nodes.first().map(|p| p.node.as_str()),
        );
        if top > 10_000.0 {
            break;
        }
    }
    println!("loaded {} items, exhausted={}", host.items().len(), host.is_exhausted());
    Ok(())
}
