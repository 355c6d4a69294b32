//! Compact: two dense lines next to a small logo

use crate::model::SignatureStyle;

use super::super::contact::SEPARATOR;
use super::{block, SignatureContext, StyleRenderer, VERDANA};

pub struct Compact;

impl StyleRenderer for Compact {
    fn style(&self) -> SignatureStyle {
        SignatureStyle::Compact
    }

    fn render_table(&self, ctx: &SignatureContext<'_>) -> String {
        let title_line = ctx.title_line();
        let title = if title_line.is_empty() {
            String::new()
        } else {
            format!(
                r#"<span class="sig-separator" style="margin: 0 6px; color: #CCCCCC;">|</span><span class="sig-title" style="color: #666666;">{}</span>"#,
                title_line
            )
        };
        let contacts = [ctx.tier1(), ctx.tier2()]
            .into_iter()
            .filter(|tier| !tier.is_empty())
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        format!(
            r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: {font}; font-size: 12px; line-height: 1.5; color: #333333;">
    <tr>
        <td style="vertical-align: middle; padding-right: 12px;">
            {logos}
        </td>
        <td style="vertical-align: middle;">
            <div style="font-size: 13px; margin-bottom: 2px;">
                <span class="sig-name" style="font-weight: bold; color: #333333;">{name}</span>{title}
            </div>
            {contacts}
            {social}
        </td>
    </tr>
</table>"#,
            font = VERDANA,
            logos = ctx.logos(24),
            name = ctx.name(),
            title = title,
            contacts = block(None, "font-size: 11px;", &contacts),
            social = ctx.social_html,
        )
    }
}
