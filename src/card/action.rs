/// Text that can be copied from the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    Phone,
    Email,
    ShortLink,
}

impl CopyTarget {
    pub fn label(self) -> &'static str {
        match self {
            CopyTarget::Phone => "phone",
            CopyTarget::Email => "email",
            CopyTarget::ShortLink => "short link",
        }
    }
}

/// Interactive children of the back face. Activating one never flips the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    CopyPhone,
    CopyEmail,
    OpenLinkedIn,
    OpenGithub,
    OpenWebsite,
    CopyShortLink,
}

impl CardAction {
    /// Top-to-bottom order on the back face, which is also the focus order.
    pub const ALL: [CardAction; 6] = [
        CardAction::CopyPhone,
        CardAction::CopyEmail,
        CardAction::OpenLinkedIn,
        CardAction::OpenGithub,
        CardAction::OpenWebsite,
        CardAction::CopyShortLink,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CardAction::CopyPhone => "Phone",
            CardAction::CopyEmail => "Email",
            CardAction::OpenLinkedIn => "LinkedIn",
            CardAction::OpenGithub => "GitHub",
            CardAction::OpenWebsite => "Website",
            CardAction::CopyShortLink => "Short",
        }
    }

    pub fn copy_target(self) -> Option<CopyTarget> {
        match self {
            CardAction::CopyPhone => Some(CopyTarget::Phone),
            CardAction::CopyEmail => Some(CopyTarget::Email),
            CardAction::CopyShortLink => Some(CopyTarget::ShortLink),
            _ => None,
        }
    }

    pub fn is_link(self) -> bool {
        self.copy_target().is_none()
    }
}
