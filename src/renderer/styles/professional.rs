//! Professional: accent rule, logo on top, website link in the contact rows

use crate::model::SignatureStyle;

use super::super::contact::{link, SEPARATOR};
use super::{block, SignatureContext, StyleRenderer, VERDANA};

pub struct Professional;

impl StyleRenderer for Professional {
    fn style(&self) -> SignatureStyle {
        SignatureStyle::Professional
    }

    fn render_table(&self, ctx: &SignatureContext<'_>) -> String {
        let website = link(ctx.website_url, &ctx.website_label(), ctx.accent);
        let tier1 = ctx.tier1();
        let primary = if tier1.is_empty() {
            website
        } else {
            format!("{}{}{}", tier1, SEPARATOR, website)
        };

        format!(
            r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: {font}; font-size: 13px; line-height: 1.6; color: #333333; max-width: 500px; border-top: 3px solid {accent};">
    <tr>
        <td style="padding-top: 12px;">
            <div style="margin-bottom: 10px;">
                {logos}
            </div>
            <div class="sig-name" style="font-size: 16px; font-weight: bold; color: #333333; margin-bottom: 2px;">
                {name}
            </div>
            {title}
            {primary}
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
                "font-size: 13px; color: #666666; margin-bottom: 8px;",
                &ctx.title_line()
            ),
            primary = block(None, "font-size: 12px; margin-bottom: 4px;", &primary),
            tier2 = block(None, "font-size: 12px; margin-bottom: 2px;", &ctx.tier2()),
            social = ctx.social_html,
        )
    }
}
