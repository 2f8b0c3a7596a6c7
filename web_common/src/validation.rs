//! Form field validation rules.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Input kinds with a dedicated format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Url,
}

impl FieldKind {
    /// Maps an `<input type>` attribute; anything without a format check is text.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type.to_ascii_lowercase().as_str() {
            "email" => FieldKind::Email,
            "tel" => FieldKind::Tel,
            "url" => FieldKind::Url,
            _ => FieldKind::Text,
        }
    }
}

/// Constraints read from a form control's attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldRules {
    /// `name` attribute, or the id when the name is missing.
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<String>,
    /// `title` attribute, used as the pattern mismatch message.
    pub title: Option<String>,
}

impl FieldRules {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: &str, title: Option<&str>) -> Self {
        self.pattern = Some(pattern.to_string());
        self.title = title.map(str::to_string);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(String),
    #[error("Email address is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a valid URL")]
    InvalidUrl,
    #[error("Minimum {0} characters required")]
    TooShort(usize),
    #[error("Maximum {0} characters allowed")]
    TooLong(usize),
    #[error("{}", .0.as_deref().unwrap_or("Please match the requested format"))]
    PatternMismatch(Option<String>),
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone regex"))
}

fn capital_regex() -> &'static Regex {
    static CAPITAL: OnceLock<Regex> = OnceLock::new();
    CAPITAL.get_or_init(|| Regex::new(r"([A-Z])").expect("valid capital regex"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Phone numbers are checked after stripping everything but digits and `+`.
pub fn is_valid_phone(value: &str) -> bool {
    let stripped: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    phone_regex().is_match(&stripped)
}

pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Human label for a control name: `firstName` → `First Name`,
/// `last_name` → `Last name`.
pub fn field_label(name: &str) -> String {
    let spaced = capital_regex().replace_all(name, " $1").replace('_', " ");
    let mut chars = spaced.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    capitalized.trim().to_string()
}

/// Validates a control's value. The first failing rule wins.
pub fn validate_field(rules: &FieldRules, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();

    if rules.required && value.is_empty() {
        return Err(ValidationError::Required(field_label(&rules.name)));
    }

    if !value.is_empty() {
        match rules.kind {
            FieldKind::Email if !is_valid_email(value) => return Err(ValidationError::InvalidEmail),
            FieldKind::Tel if !is_valid_phone(value) => return Err(ValidationError::InvalidPhone),
            FieldKind::Url if !is_valid_url(value) => return Err(ValidationError::InvalidUrl),
            _ => {}
        }
    }

    let length = value.chars().count();
    if let Some(min) = rules.min_length {
        if length < min {
            return Err(ValidationError::TooShort(min));
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            return Err(ValidationError::TooLong(max));
        }
    }

    if let Some(pattern) = rules.pattern.as_deref().filter(|_| !value.is_empty()) {
        // Browsers ignore patterns that fail to compile; so do we.
        if let Ok(regex) = Regex::new(pattern) {
            if !regex.is_match(value) {
                return Err(ValidationError::PatternMismatch(rules.title.clone()));
            }
        }
    }

    Ok(())
}

/// Newsletter signup: a required, well-formed email.
pub fn validate_newsletter_email(raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_uses_humanized_label() {
        let rules = FieldRules::new("firstName", FieldKind::Text).required();
        let err = validate_field(&rules, "   ").unwrap_err();
        assert_eq!(err.to_string(), "First Name is required");

        let rules = FieldRules::new("service_number", FieldKind::Text).required();
        assert_eq!(
            validate_field(&rules, "").unwrap_err().to_string(),
            "Service number is required"
        );
    }

    #[test]
    fn test_empty_optional_field() {
        let rules = FieldRules::new("website", FieldKind::Url).min_length(5);
        // min length still applies to the trimmed empty value
        assert_eq!(validate_field(&rules, ""), Err(ValidationError::TooShort(5)));

        let rules = FieldRules::new("website", FieldKind::Url);
        assert!(validate_field(&rules, "").is_ok());
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("cadet@army.in"));
        assert!(!is_valid_email("cadet@army"));
        assert!(!is_valid_email("ca det@army.in"));
        assert!(!is_valid_email("@army.in"));

        let rules = FieldRules::new("email", FieldKind::Email).required();
        assert_eq!(
            validate_field(&rules, "not-an-email").unwrap_err().to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone("+91 98765-43210"));
        assert!(is_valid_phone("(987) 654 3210"));
        assert!(!is_valid_phone("0123456789"));
        assert!(!is_valid_phone("+9112345678901234567"));

        let rules = FieldRules::new("phone", FieldKind::Tel);
        assert_eq!(validate_field(&rules, "abc"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_url_rules() {
        let rules = FieldRules::new("profile", FieldKind::Url);
        assert!(validate_field(&rules, "https://joinindianarmy.nic.in").is_ok());
        assert_eq!(
            validate_field(&rules, "joinindianarmy").unwrap_err().to_string(),
            "Please enter a valid URL"
        );
    }

    #[test]
    fn test_length_rules() {
        let rules = FieldRules::new("message", FieldKind::Text).min_length(10).max_length(20);
        assert_eq!(
            validate_field(&rules, "short").unwrap_err().to_string(),
            "Minimum 10 characters required"
        );
        assert_eq!(
            validate_field(&rules, "this message is far too long").unwrap_err().to_string(),
            "Maximum 20 characters allowed"
        );
        assert!(validate_field(&rules, "  just right!  ").is_ok());
    }

    #[test]
    fn test_pattern_rules() {
        let rules = FieldRules::new("pin", FieldKind::Text).pattern(r"^\d{6}$", Some("Six digit PIN code"));
        assert_eq!(
            validate_field(&rules, "12345").unwrap_err().to_string(),
            "Six digit PIN code"
        );
        assert!(validate_field(&rules, "110001").is_ok());

        let untitled = FieldRules::new("pin", FieldKind::Text).pattern(r"^\d+$", None);
        assert_eq!(
            validate_field(&untitled, "abc").unwrap_err().to_string(),
            "Please match the requested format"
        );

        let broken = FieldRules::new("pin", FieldKind::Text).pattern("(", None);
        assert!(validate_field(&broken, "anything").is_ok());
    }

    #[test]
    fn test_newsletter_email() {
        assert_eq!(
            validate_newsletter_email(" ").unwrap_err().to_string(),
            "Email address is required"
        );
        assert_eq!(validate_newsletter_email("x@y"), Err(ValidationError::InvalidEmail));
        assert!(validate_newsletter_email("recruit@example.com").is_ok());
    }

    #[test]
    fn test_field_kind_from_input_type() {
        assert_eq!(FieldKind::from_input_type("EMAIL"), FieldKind::Email);
        assert_eq!(FieldKind::from_input_type("tel"), FieldKind::Tel);
        assert_eq!(FieldKind::from_input_type("url"), FieldKind::Url);
        assert_eq!(FieldKind::from_input_type("password"), FieldKind::Text);
    }
}
