//! Toast and modal presentation types.

use std::fmt;
use std::str::FromStr;

/// Auto-dismiss delay used when a caller does not pick one.
pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// Font Awesome icon class.
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "fas fa-check-circle",
            ToastKind::Error => "fas fa-exclamation-circle",
            ToastKind::Warning => "fas fa-exclamation-triangle",
            ToastKind::Info => "fas fa-info-circle",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "bg-green-600 text-white",
            ToastKind::Error => "bg-red-600 text-white",
            ToastKind::Warning => "bg-yellow-600 text-white",
            ToastKind::Info => "bg-blue-600 text-white",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
        };
        f.write_str(name)
    }
}

impl FromStr for ToastKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(ToastKind::Success),
            "error" => Ok(ToastKind::Error),
            "warning" => Ok(ToastKind::Warning),
            "info" => Ok(ToastKind::Info),
            other => Err(format!("Unknown toast kind: {}", other)),
        }
    }
}

/// A single notification. `duration_ms == 0` keeps it until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(id: u64, kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            duration_ms: DEFAULT_TOAST_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn is_sticky(&self) -> bool {
        self.duration_ms == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl ModalSize {
    pub fn class(self) -> &'static str {
        match self {
            ModalSize::Sm => "max-w-sm",
            ModalSize::Md => "max-w-md",
            ModalSize::Lg => "max-w-lg",
            ModalSize::Xl => "max-w-xl",
            ModalSize::Full => "max-w-full",
        }
    }
}

impl FromStr for ModalSize {
    type Err = std::convert::Infallible;

    /// Unknown sizes fall back to `Md`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "sm" => ModalSize::Sm,
            "lg" => ModalSize::Lg,
            "xl" => ModalSize::Xl,
            "full" => ModalSize::Full,
            _ => ModalSize::Md,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_defaults() {
        let toast = Toast::new(1, ToastKind::Success, "Saved");
        assert_eq!(toast.duration_ms, 3000);
        assert!(!toast.is_sticky());
        assert!(Toast::new(2, ToastKind::Error, "Offline").with_duration(0).is_sticky());
    }

    #[test]
    fn test_toast_kind_styling() {
        assert_eq!(ToastKind::default(), ToastKind::Info);
        assert_eq!(ToastKind::Warning.icon(), "fas fa-exclamation-triangle");
        assert_eq!(ToastKind::Error.class(), "bg-red-600 text-white");
        assert_eq!("success".parse::<ToastKind>(), Ok(ToastKind::Success));
        assert_eq!(ToastKind::Info.to_string(), "info");
        assert!("loud".parse::<ToastKind>().is_err());
    }

    #[test]
    fn test_modal_size_falls_back_to_medium() {
        assert_eq!("xl".parse::<ModalSize>().map(ModalSize::class), Ok("max-w-xl"));
        assert_eq!("huge".parse::<ModalSize>(), Ok(ModalSize::Md));
        assert_eq!(ModalSize::default().class(), "max-w-md");
    }
}
