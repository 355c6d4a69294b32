//! Creative: thick accent bar with the logo stacked above the name

use crate::model::SignatureStyle;

use super::{block, SignatureContext, StyleRenderer, VERDANA};

pub struct Creative;

impl StyleRenderer for Creative {
    fn style(&self) -> SignatureStyle {
        SignatureStyle::Creative
    }

    fn render_table(&self, ctx: &SignatureContext<'_>) -> String {
        format!(
            r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: {font}; font-size: 13px; line-height: 1.6; color: #333333;">
    <tr>
        <td style="width: 4px; background: {accent};">&nbsp;</td>
        <td style="padding-left: 14px; vertical-align: top;">
            <div style="margin-bottom: 10px;">
                {logos}
            </div>
            <div class="sig-name" style="font-size: 15px; font-weight: bold; color: #333333; margin-bottom: 3px;">
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
            accent = ctx.accent,
            logos = ctx.logos(32),
            name = ctx.name(),
            title = block(
                Some("sig-title"),
                "font-size: 13px; color: #666666; margin-bottom: 7px;",
                &ctx.title_line()
            ),
            tier1 = block(None, "font-size: 12px; margin-bottom: 4px;", &ctx.tier1()),
            tier2 = block(None, "font-size: 12px; margin-bottom: 2px;", &ctx.tier2()),
            social = ctx.social_html,
        )
    }
}
