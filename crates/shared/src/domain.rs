use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// The fixed set of pages the site can render. Routing resolves a URL
/// slug into one of these variants; rendering matches exhaustively, so
/// adding a page is a compile error until every dispatch site handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Experience,
    Projects,
    Education,
    Certifications,
    Leadership,
    Skills,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Experience,
        Page::Projects,
        Page::Education,
        Page::Certifications,
        Page::Leadership,
        Page::Skills,
        Page::Contact,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Experience => "experience",
            Page::Projects => "projects",
            Page::Education => "education",
            Page::Certifications => "certifications",
            Page::Leadership => "leadership",
            Page::Skills => "skills",
            Page::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Experience => "Experience",
            Page::Projects => "Technical Projects",
            Page::Education => "Education",
            Page::Certifications => "Certifications & Activities",
            Page::Leadership => "Leadership Roles",
            Page::Skills => "Skills",
            Page::Contact => "Contact",
        }
    }

    /// Request path serving this page. Home lives at the site root.
    pub fn path(self) -> String {
        match self {
            Page::Home => "/".to_string(),
            other => format!("/p/{}", other.slug()),
        }
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|page| page.slug() == slug)
    }
}

/// A validated contact-form submission. Construction is the only way to
/// obtain one, so anything handed to the store already satisfies the
/// invariant: non-empty sender email containing both '@' and '.', and a
/// non-empty message. The email check is deliberately the weak syntactic
/// one the form always used, not RFC validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    sender_email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub fn new(
        sender_email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, SiteError> {
        let sender_email = sender_email.into();
        let subject = subject.into();
        let message = message.into();

        if sender_email.is_empty() || !sender_email.contains('@') || !sender_email.contains('.') {
            return Err(SiteError::validation(
                "please enter a valid email address",
            ));
        }
        if message.is_empty() {
            return Err(SiteError::validation("please enter a short message"));
        }

        Ok(Self {
            sender_email,
            subject,
            message,
        })
    }

    pub fn sender_email(&self) -> &str {
        &self.sender_email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
