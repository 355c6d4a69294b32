//! Bold (legacy): colored name block beside the logo, icon social row

use crate::model::SignatureStyle;

use super::super::contact::{email_link, link, linkedin_link, phone_link, SEPARATOR};
use super::super::social::icon_links;
use super::{block, SignatureContext, StyleRenderer, ARIAL};

pub struct Bold;

impl Bold {
    /// Email, phone, LinkedIn and website on one line
    fn contacts(ctx: &SignatureContext<'_>) -> String {
        let website = link(ctx.website_url, &ctx.website_label(), ctx.accent);
        [
            email_link(ctx.data, ctx.accent),
            phone_link(ctx.data, ctx.accent),
            linkedin_link(ctx.data, ctx.accent),
            Some(website),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(SEPARATOR)
    }

    /// Icons straight from the social options; the shared text row is not used
    fn social_icons(ctx: &SignatureContext<'_>) -> String {
        if !ctx.social.is_active() {
            return String::new();
        }
        let icons = icon_links(&ctx.social.channels, ctx.accent, ctx.brand());
        block(None, "margin-top: 8px;", &icons)
    }
}

impl StyleRenderer for Bold {
    fn style(&self) -> SignatureStyle {
        SignatureStyle::Bold
    }

    fn render_table(&self, ctx: &SignatureContext<'_>) -> String {
        let title = ctx.title().unwrap_or_default();

        format!(
            r#"<table cellpadding="0" cellspacing="0" border="0" style="font-family: {font}; font-size: 14px; line-height: 1.6; max-width: 500px;">
    <tr>
        <td style="padding: 12px 0;">
            <table cellpadding="0" cellspacing="0" border="0" style="width: 100%;">
                <tr>
                    <td style="width: 60px; vertical-align: middle; padding-right: 12px;">
                        {logos}
                    </td>
                    <td style="vertical-align: middle;">
                        <div style="background: {accent}; color: {text}; padding: 12px 16px; border-radius: 8px; margin-bottom: 8px;">
                            <div class="sig-name" style="font-size: 16px; font-weight: 700; margin-bottom: 2px;">
                                {name}
                            </div>
                            {title}
                        </div>
                        {contacts}
                        {social}
                    </td>
                </tr>
            </table>
        </td>
    </tr>
</table>"#,
            font = ARIAL,
            logos = ctx.logos(32),
            accent = ctx.accent,
            text = ctx.accent.contrast_text(),
            name = ctx.name(),
            title = block(Some("sig-title"), "font-size: 13px; opacity: 0.9;", &title),
            contacts = block(None, "font-size: 13px; color: #666666;", &Self::contacts(ctx)),
            social = Self::social_icons(ctx),
        )
    }
}
