//! Modern: logo column, accent divider, details on the right

use crate::model::SignatureStyle;

use super::{block, SignatureContext, StyleRenderer, VERDANA};

pub struct Modern;

impl StyleRenderer for Modern {
    fn style(&self) -> SignatureStyle {
        SignatureStyle::Modern
    }

    fn render_table(&self, ctx: &SignatureContext<'_>) -> String {
        format!(
            r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: {font}; font-size: 13px; line-height: 1.6; color: #333333;">
    <tr>
        <td style="vertical-align: middle; padding-right: 16px;">
            {logos}
        </td>
        <td style="width: 2px; background: {accent};">&nbsp;</td>
        <td style="vertical-align: middle; padding-left: 16px;">
            <div class="sig-name" style="font-size: 16px; font-weight: bold; color: #333333; margin-bottom: 2px;">
                {name}
            </div>
            {title}
            {tier1}
            {tier2}
            {social}
        </td>
    </tr>
</table>"#,
            font = VERDANA,
            logos = ctx.logos(40),
            accent = ctx.accent,
            name = ctx.name(),
            title = block(
                Some("sig-title"),
                "font-size: 13px; color: #666666; margin-bottom: 6px;",
                &ctx.title_line()
            ),
            tier1 = block(None, "font-size: 12px; margin-bottom: 3px;", &ctx.tier1()),
            tier2 = block(None, "font-size: 12px;", &ctx.tier2()),
            social = ctx.social_html,
        )
    }
}
