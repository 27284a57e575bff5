//! Static portfolio content: identity, current role, contact and social
//! links, and the technology stack.

/// How an outbound link is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Replace the current context (mail client handoff)
    SameContext,
    /// New context with no referrer and no opener
    NewContext,
}

impl LinkTarget {
    /// The `rel` policy applied to this target, if any
    pub fn rel(&self) -> Option<&'static str> {
        match self {
            LinkTarget::SameContext => None,
            LinkTarget::NewContext => Some("noopener noreferrer"),
        }
    }
}

/// One entry in the contact or social menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalLink {
    pub id: &'static str,
    pub label: &'static str,
    /// Human-readable handle shown next to the label
    pub value: &'static str,
    pub href: &'static str,
    pub target: LinkTarget,
}

/// Who the portfolio belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub logo_letters: &'static [char],
    pub greeting: &'static str,
    pub bio: &'static str,
    pub location: &'static str,
}

/// The "CURRENTLY" section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentRole {
    pub title: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

pub const IDENTITY: Identity = Identity {
    logo_letters: &['D', 'A', 'G', 'I', 'M'],
    greeting: "Hi, I am Dagim Wubeante,",
    bio: "a web developer with strong skills in both frontend and backend, building \
          functional, well structured applications with clean UI and smooth user \
          experiences, and a strong attention to detail.",
    location: "Adiss Ababa, Ethiopia",
};

pub const CURRENT_ROLE: CurrentRole = CurrentRole {
    title: "FullStack Developer",
    period: "2024 - Present",
    location: "Remote",
    summary: "React based application development with a strong backend focus, emphasizing \
              security, performance, and building reliable, user focused digital solutions.",
};

pub const CONTACT_LINKS: &[ExternalLink] = &[
    ExternalLink {
        id: "email",
        label: "Email",
        value: "dagimw14@gmail.com",
        href: "mailto:dagimw14@gmail.com",
        target: LinkTarget::SameContext,
    },
    ExternalLink {
        id: "whatsapp",
        label: "WhatsApp",
        value: "+251 98 020 7363",
        href: "https://wa.me/251980207363?text=Hi%2C%20I%27d%20like%20to%20get%20in%20touch",
        target: LinkTarget::NewContext,
    },
    ExternalLink {
        id: "telegram",
        label: "Telegram",
        value: "@cole_j_p",
        href: "https://t.me/cole_j_p",
        target: LinkTarget::NewContext,
    },
];

pub const SOCIAL_LINKS: &[ExternalLink] = &[
    ExternalLink {
        id: "github",
        label: "GitHub",
        value: "dagdag001",
        href: "https://github.com/dagdag001",
        target: LinkTarget::NewContext,
    },
    ExternalLink {
        id: "linkedin",
        label: "LinkedIn",
        value: "dagim-wubeante",
        href: "https://www.linkedin.com/in/dagim-wubeante-33291036b/",
        target: LinkTarget::NewContext,
    },
];

/// Technologies shown in the stack grid, in display order
pub const TECH_STACK: &[&str] = &[
    "React",
    "Node.js",
    "Express.js",
    "EJS",
    "PostgreSQL",
    "MongoDB",
    "TailwindCSS",
    "Docker",
    "HTML5",
    "CSS3",
    "JavaScript",
    "Jenkins",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_opens_in_same_context() {
        let email = CONTACT_LINKS.iter().find(|l| l.id == "email").unwrap();
        assert_eq!(email.target, LinkTarget::SameContext);
        assert!(email.href.starts_with("mailto:"));
        assert_eq!(email.target.rel(), None);
    }

    #[test]
    fn test_other_contacts_open_in_new_context_without_referrer() {
        for link in CONTACT_LINKS.iter().filter(|l| l.id != "email") {
            assert_eq!(link.target, LinkTarget::NewContext);
            assert_eq!(link.target.rel(), Some("noopener noreferrer"));
        }
    }

    #[test]
    fn test_social_links_open_in_new_context() {
        assert_eq!(SOCIAL_LINKS.len(), 2);
        assert!(SOCIAL_LINKS
            .iter()
            .all(|l| l.target == LinkTarget::NewContext));
    }

    #[test]
    fn test_tech_stack_has_twelve_unique_entries() {
        let unique: std::collections::HashSet<_> = TECH_STACK.iter().collect();
        assert_eq!(TECH_STACK.len(), 12);
        assert_eq!(unique.len(), 12);
    }
}
