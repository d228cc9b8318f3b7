//! Per-kind suppression rules
//!
//! Each document kind decides, from the raw text preceding the cursor,
//! whether completion fires at the current position. Markup kinds
//! suppress inside syntactic constructs; source-code kinds invert the
//! polarity and allow completion only inside comments and strings. The
//! contract is the same either way: suppressed means an empty result.

mod html;
mod latex;
mod markdown;
mod source;

use crate::context::CursorContext;
use crate::types::DocumentKind;

/// Decide whether completion is suppressed at the cursor
pub fn should_suppress(ctx: &CursorContext) -> bool {
    match ctx.kind {
        DocumentKind::Markdown => markdown::in_link_target(&ctx.line_before),
        DocumentKind::Latex => latex::in_command_or_argument(&ctx.line_before),
        DocumentKind::Html => {
            html::in_tag_or_embedded_block(&ctx.line_before, &ctx.doc_before)
        }
        DocumentKind::Source(lang) => {
            !source::in_comment_or_string(lang, &ctx.line_before, &ctx.doc_before)
        }
    }
}
