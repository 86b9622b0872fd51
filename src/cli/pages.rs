//! Pages command implementation.

use crate::cli::args::PagesArgs;
use crate::core::models::{PagesPayload, RobotOutput};
use crate::core::pagination::{PaginationRequest, generate_pagination};
use crate::error::Result;
use crate::render;
use crate::storage::ResolvedConfig;

/// Build the pagination payload, validating bounds when `strict`.
///
/// # Errors
///
/// In strict mode, returns [`crate::error::DashfmtError::InvalidPage`] for
/// page numbers outside `1..=total`.
pub fn build(current: u32, total: u32, strict: bool) -> Result<PagesPayload> {
    let tokens = if strict {
        PaginationRequest::new(current, total)?.tokens()
    } else {
        generate_pagination(current, total)
    };

    Ok(PagesPayload {
        current_page: current,
        total_pages: total,
        tokens,
    })
}

/// Execute the pages command.
pub fn execute(args: &PagesArgs, config: &ResolvedConfig) -> Result<()> {
    let payload = build(args.current, args.total, args.strict)?;
    tracing::debug!(
        current = args.current,
        total = args.total,
        entries = payload.tokens.len(),
        "Generated pagination"
    );

    let flags = if args.strict {
        vec!["--strict".to_string()]
    } else {
        Vec::new()
    };
    let output = RobotOutput::new("pages", payload).with_flags(flags);
    let rendered = render::render_pages(&output, config.format, config.pretty, config.no_color)?;
    print!("{rendered}");
    Ok(())
}
