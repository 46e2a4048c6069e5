use crate::cli::PagesArgs;
use crate::output;
use pager_core::{total_pages_for, PagerConfig};
use serde::Serialize;

#[derive(Serialize)]
struct PageCount {
    total_items: usize,
    page_size: usize,
    total_pages: usize,
}

pub fn handle(config: &PagerConfig, args: PagesArgs) -> anyhow::Result<()> {
    let page_size = args
        .page_size
        .unwrap_or_else(|| config.effective_page_size());

    let total_pages = match total_pages_for(args.total_items, page_size) {
        Ok(total_pages) => total_pages,
        Err(e) => output::output_error(&e.to_string()),
    };

    output::output_success(PageCount {
        total_items: args.total_items,
        page_size,
        total_pages,
    })
}
