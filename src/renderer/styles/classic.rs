//! Classic: name and title over stacked contact rows, logo underneath

use crate::model::SignatureStyle;

use super::{block, SignatureContext, StyleRenderer, VERDANA};

pub struct Classic;

impl StyleRenderer for Classic {
    fn style(&self) -> SignatureStyle {
        SignatureStyle::Classic
    }

    fn render_table(&self, ctx: &SignatureContext<'_>) -> String {
        format!(
            r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: {font}; font-size: 13px; line-height: 1.6; color: #333333; max-width: 500px;">
    <tr>
        <td style="padding-bottom: 10px;">
            <div class="sig-name" style="font-size: 16px; font-weight: bold; color: #333333; margin-bottom: 2px;">
                {name}
            </div>
            {title}
            {tier1}
            {tier2}
            {social}
        </td>
    </tr>
    <tr>
        <td style="padding-top: 10px; border-top: 1px solid #E0E0E0;">
            {logos}
        </td>
    </tr>
</table>"#,
            font = VERDANA,
            name = ctx.name(),
            title = block(
                Some("sig-title"),
                "font-size: 13px; color: #666666; margin-bottom: 8px;",
                &ctx.title_line()
            ),
            tier1 = block(None, "font-size: 12px; margin-bottom: 4px;", &ctx.tier1()),
            tier2 = block(None, "font-size: 12px; margin-bottom: 2px;", &ctx.tier2()),
            social = ctx.social_html,
            logos = ctx.logos(32),
        )
    }
}
