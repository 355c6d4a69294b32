//! Executive (legacy): centered large name, accent line, no social row

use crate::model::SignatureStyle;

use super::super::contact::{email_link, link, phone_link};
use super::{block, SignatureContext, StyleRenderer, ARIAL};

pub struct Executive;

impl StyleRenderer for Executive {
    fn style(&self) -> SignatureStyle {
        SignatureStyle::Executive
    }

    fn render_table(&self, ctx: &SignatureContext<'_>) -> String {
        let title = ctx.title().unwrap_or_default();
        let row = |content: Option<String>| {
            content
                .map(|html| block(None, "margin-bottom: 4px;", &html))
                .unwrap_or_default()
        };
        let website = link(ctx.website_url, &ctx.website_label(), ctx.accent);

        format!(
            r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: {font}; font-size: 14px; line-height: 1.6; max-width: 500px; margin: 0 auto;">
    <tr>
        <td style="padding: 20px 0; text-align: center;">
            <div class="sig-name" style="font-size: 20px; font-weight: 700; color: #000000; margin-bottom: 4px;">
                {name}
            </div>
            <div style="width: 60px; height: 2px; background: {accent}; margin: 8px auto 12px auto;"></div>
            {title}
            <div style="margin: 16px 0;">
                {logos}
            </div>
            {email}
            {phone}
            {website}
        </td>
    </tr>
</table>"#,
            font = ARIAL,
            name = ctx.name(),
            accent = ctx.accent,
            title = block(
                Some("sig-title"),
                "font-size: 14px; color: #666666; margin-bottom: 12px;",
                &title
            ),
            logos = ctx.logos(40),
            email = row(email_link(ctx.data, ctx.accent)),
            phone = row(phone_link(ctx.data, ctx.accent)),
            website = row(Some(website)),
        )
    }
}
