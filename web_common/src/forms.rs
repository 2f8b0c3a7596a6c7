//! Simulated form submissions.

use std::str::FromStr;

/// Forms that get field validation and a simulated submit.
pub const FORM_IDS: [&str; 3] = ["contactForm", "joinForm", "loginForm"];

pub const NEWSLETTER_FORM_ID: &str = "newsletterForm";
pub const NEWSLETTER_SUCCESS: &str = "Thank you for subscribing!";
pub const NEWSLETTER_MESSAGE_MS: u32 = 3000;

/// Controls validated on blur and submit.
pub const REQUIRED_FIELDS: &str = "input[required], textarea[required], select[required]";

/// Local storage key holding the remembered login name.
pub const REMEMBERED_USERNAME_KEY: &str = "rememberedUsername";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact,
    Join,
    Login,
}

/// Navigation to run once a submission has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp {
    pub page: &'static str,
    pub delay_ms: u32,
}

impl SubmissionKind {
    pub fn form_id(self) -> &'static str {
        match self {
            SubmissionKind::Contact => "contactForm",
            SubmissionKind::Join => "joinForm",
            SubmissionKind::Login => "loginForm",
        }
    }

    /// Submit button text while the request is pending.
    pub fn busy_label(self) -> &'static str {
        match self {
            SubmissionKind::Contact => "Sending...",
            SubmissionKind::Join => "Processing...",
            SubmissionKind::Login => "Logging in...",
        }
    }

    pub fn delay_ms(self) -> u32 {
        match self {
            SubmissionKind::Join => 2000,
            SubmissionKind::Contact | SubmissionKind::Login => 1500,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            SubmissionKind::Contact => "Message sent successfully! We will get back to you soon.",
            SubmissionKind::Join => {
                "Application submitted successfully! We will review your application and contact you soon."
            }
            SubmissionKind::Login => "Login successful! Redirecting to dashboard...",
        }
    }

    pub fn follow_up(self) -> Option<FollowUp> {
        match self {
            SubmissionKind::Login => Some(FollowUp {
                page: "dashboard",
                delay_ms: 1000,
            }),
            _ => None,
        }
    }
}

impl FromStr for SubmissionKind {
    type Err = String;

    fn from_str(form_id: &str) -> Result<Self, Self::Err> {
        match form_id {
            "contactForm" => Ok(SubmissionKind::Contact),
            "joinForm" => Ok(SubmissionKind::Join),
            "loginForm" => Ok(SubmissionKind::Login),
            other => Err(format!("No simulated submission for form: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_form_id_maps_back() {
        for id in FORM_IDS {
            let kind: SubmissionKind = id.parse().unwrap();
            assert_eq!(kind.form_id(), id);
        }
        assert!("newsletterForm".parse::<SubmissionKind>().is_err());
    }

    #[test]
    fn test_submission_timing_and_messages() {
        assert_eq!(SubmissionKind::Contact.delay_ms(), 1500);
        assert_eq!(SubmissionKind::Join.delay_ms(), 2000);
        assert_eq!(SubmissionKind::Login.busy_label(), "Logging in...");
        assert!(SubmissionKind::Join.success_message().starts_with("Application submitted"));
    }

    #[test]
    fn test_only_login_redirects() {
        assert_eq!(
            SubmissionKind::Login.follow_up(),
            Some(FollowUp { page: "dashboard", delay_ms: 1000 })
        );
        assert_eq!(SubmissionKind::Contact.follow_up(), None);
        assert_eq!(SubmissionKind::Join.follow_up(), None);
    }
}
