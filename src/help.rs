//! Field hints and paste instructions per email client

use std::fmt;

/// Inline help for form fields that need explaining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldHelp {
    EmailPrefix,
    Phone,
    LinkedinUsername,
    XHandle,
    BookingsId,
}

impl FieldHelp {
    pub const ALL: [FieldHelp; 5] = [
        FieldHelp::EmailPrefix,
        FieldHelp::Phone,
        FieldHelp::LinkedinUsername,
        FieldHelp::XHandle,
        FieldHelp::BookingsId,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FieldHelp::EmailPrefix => "email-prefix",
            FieldHelp::Phone => "phone",
            FieldHelp::LinkedinUsername => "linkedin-username",
            FieldHelp::XHandle => "twitter-username",
            FieldHelp::BookingsId => "bookings-id",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|help| help.id() == id)
    }

    /// One-line hint shown under the input
    pub fn hint(self) -> &'static str {
        match self {
            FieldHelp::EmailPrefix => {
                "Auto-generated from your name. Use only letters, numbers, and dots."
            }
            FieldHelp::Phone => {
                "Format: +1 (555) 123-4567. Include country code for international colleagues."
            }
            FieldHelp::LinkedinUsername => {
                "Your username from your profile URL (the part after /in/)."
            }
            FieldHelp::XHandle => "Your handle without the @ symbol (e.g., zoho).",
            FieldHelp::BookingsId => {
                "Your booking page ID from Zoho Bookings (found in Settings)."
            }
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FieldHelp::EmailPrefix => "Email Address Format",
            FieldHelp::Phone => "Phone Number Format",
            FieldHelp::LinkedinUsername => "Finding Your LinkedIn Username",
            FieldHelp::XHandle => "X (Twitter) Handle Format",
            FieldHelp::BookingsId => "Finding Your Zoho Bookings ID",
        }
    }
}

/// Where the signature will be pasted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmailClient {
    #[default]
    ZohoMail,
    ZohoDesk,
    Gmail,
    AppleMail,
    Outlook,
}

/// Paste walkthrough for one client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    pub title: &'static str,
    pub time_estimate: &'static str,
    pub steps: Vec<&'static str>,
    pub tip: &'static str,
}

impl EmailClient {
    pub const ALL: [EmailClient; 5] = [
        EmailClient::ZohoMail,
        EmailClient::ZohoDesk,
        EmailClient::Gmail,
        EmailClient::AppleMail,
        EmailClient::Outlook,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EmailClient::ZohoMail => "zoho-mail",
            EmailClient::ZohoDesk => "zoho-desk",
            EmailClient::Gmail => "gmail",
            EmailClient::AppleMail => "apple-mail",
            EmailClient::Outlook => "outlook",
        }
    }

    /// Client for an id; unknown ids get Zoho Mail
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|client| client.id() == id.trim().to_ascii_lowercase())
            .unwrap_or_default()
    }

    pub fn instructions(self) -> Instructions {
        match self {
            EmailClient::ZohoMail => Instructions {
                title: "Zoho Mail",
                time_estimate: "~1 minute",
                steps: vec![
                    "Copy the signature",
                    "Open Zoho Mail, then Settings, then Signature",
                    "Select your signature, then click the Insert HTML button",
                    "Paste using Cmd+V or Ctrl+V, then click Insert",
                    "Click Update to save your signature",
                ],
                tip: "Test your signature by composing a new email.",
            },
            EmailClient::ZohoDesk => Instructions {
                title: "Zoho Desk",
                time_estimate: "~2 minutes",
                steps: vec![
                    "Copy the signature",
                    "Open Zoho Desk and click your profile picture",
                    "Choose My Information, then Signature",
                    "Switch the editor to HTML mode and paste",
                    "Click Save",
                ],
                tip: "Agents in each department can keep their own signature.",
            },
            EmailClient::Gmail => Instructions {
                title: "Gmail",
                time_estimate: "~2 minutes",
                steps: vec![
                    "Copy the signature",
                    "Open Gmail, click the gear icon, then See all settings",
                    "In the General tab, scroll to Signature and click Create new",
                    "Paste into the signature editor",
                    "Scroll down and click Save Changes",
                ],
                tip: "Set the new signature as the default for new emails and replies.",
            },
            EmailClient::AppleMail => Instructions {
                title: "Apple Mail",
                time_estimate: "~2 minutes",
                steps: vec![
                    "Copy the signature",
                    "Open Mail, then Settings, then Signatures",
                    "Select your account and click + to add a signature",
                    "Uncheck Always match my default message font",
                    "Paste into the signature preview",
                ],
                tip: "Images load from the web, so remote content must be allowed.",
            },
            EmailClient::Outlook => Instructions {
                title: "Outlook",
                time_estimate: "~2 minutes",
                steps: vec![
                    "Copy the signature",
                    "Open Outlook, then Settings, then Mail, then Compose and reply",
                    "Click New signature and give it a name",
                    "Paste into the signature editor",
                    "Click Save",
                ],
                tip: "Choose the signature as the default for new messages.",
            },
        }
    }
}

impl fmt::Display for EmailClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl fmt::Display for Instructions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}, {} steps)", self.title, self.time_estimate, self.steps.len())?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, step)?;
        }
        write!(f, "Tip: {}", self.tip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_client_falls_back() {
        assert_eq!(EmailClient::from_id("thunderbird"), EmailClient::ZohoMail);
        assert_eq!(EmailClient::from_id("Gmail"), EmailClient::Gmail);
        assert_eq!(EmailClient::from_id("apple-mail"), EmailClient::AppleMail);
    }

    #[test]
    fn test_every_client_has_steps() {
        for client in EmailClient::ALL {
            let instructions = client.instructions();
            assert!(!instructions.steps.is_empty(), "{client}");
            assert!(instructions.steps[0].starts_with("Copy"));
        }
    }

    #[test]
    fn test_instructions_display() {
        let text = EmailClient::ZohoMail.instructions().to_string();
        assert!(text.starts_with("Zoho Mail (~1 minute, 5 steps)"));
        assert!(text.contains("  5. Click Update"));
        assert!(text.ends_with("Tip: Test your signature by composing a new email."));
    }

    #[test]
    fn test_field_help_ids() {
        for help in FieldHelp::ALL {
            assert_eq!(FieldHelp::from_id(help.id()), Some(help));
            assert!(!help.hint().is_empty());
        }
        assert_eq!(FieldHelp::from_id("twitter-username"), Some(FieldHelp::XHandle));
    }
}
