use crate::cli::{NavArgs, NavTarget, OutputFormat};
use crate::output;
use pager_core::{PageNavigator, PagerConfig};

pub fn handle(config: &PagerConfig, args: NavArgs) -> anyhow::Result<()> {
    if args.total_pages == 0 {
        output::output_error("No pages: total page count must be at least 1");
    }

    let siblings = args
        .siblings
        .unwrap_or_else(|| config.effective_sibling_count());

    let mut nav = PageNavigator::new(args.total_pages).with_sibling_count(siblings);
    nav.go_to(args.current);

    let from = nav.current_page();
    let to = match args.to {
        NavTarget::First => nav.first(),
        NavTarget::Prev => nav.prev(),
        NavTarget::Next => nav.next(),
        NavTarget::Last => nav.last(),
        NavTarget::Page(page) => nav.go_to(page),
    };
    tracing::debug!(from, to, "Navigated");

    let view = nav.view();
    match args.format {
        OutputFormat::Json => output::output_success(&view)?,
        OutputFormat::Text => output::output_view_text(&view),
    }
    Ok(())
}
