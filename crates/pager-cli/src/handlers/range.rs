use crate::cli::{OutputFormat, RangeArgs};
use crate::output;
use pager_core::{validate, PageNavigator, PagerConfig, PagerError};

pub fn handle(config: &PagerConfig, args: RangeArgs) -> anyhow::Result<()> {
    let siblings = args
        .siblings
        .unwrap_or_else(|| config.effective_sibling_count());

    match validate(args.total_pages, args.current) {
        Ok(()) => {}
        Err(PagerError::PageOutOfRange { .. }) if !args.strict => {
            tracing::warn!(
                current = args.current,
                total_pages = args.total_pages,
                "Current page out of range, clamping"
            );
        }
        Err(e) => output::output_error(&e.to_string()),
    }

    let mut nav = PageNavigator::new(args.total_pages).with_sibling_count(siblings);
    nav.go_to(args.current);
    let view = nav.view();

    if view.tokens.is_empty() {
        output::output_error("Internal error: empty page range");
    }

    match args.format {
        OutputFormat::Json => output::output_success(&view)?,
        OutputFormat::Text => output::output_view_text(&view),
    }
    Ok(())
}
