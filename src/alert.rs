//! Alert fragments for displaying success and error messages to users.
//!
//! Error responses carry an alert as their body, and the response-targets
//! htmx extension swaps it into the `#alert-container` div. Pages can also
//! render an alert inline.

use maud::{Markup, Render, html};

/// Alert message types for styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AlertType {
    Success,
    Error,
}

/// Renders an alert message with appropriate styling.
#[derive(Debug, Clone)]
pub(crate) struct AlertTemplate {
    alert_type: AlertType,
    message: String,
    details: String,
}

impl AlertTemplate {
    /// Create a new success alert
    pub(crate) fn success(message: &str, details: &str) -> Self {
        Self {
            alert_type: AlertType::Success,
            message: message.to_string(),
            details: details.to_string(),
        }
    }

    /// Create a new error alert
    pub(crate) fn error(message: &str, details: &str) -> Self {
        Self {
            alert_type: AlertType::Error,
            message: message.to_string(),
            details: details.to_string(),
        }
    }
}

impl Render for AlertTemplate {
    fn render(&self) -> Markup {
        let (container_style, text_style) = match self.alert_type {
            AlertType::Success => (
                "p-4 mb-4 rounded-lg bg-green-50 dark:bg-gray-800",
                "text-green-800 dark:text-green-400",
            ),
            AlertType::Error => (
                "p-4 mb-4 rounded-lg bg-red-50 dark:bg-gray-800",
                "text-red-800 dark:text-red-400",
            ),
        };

        html! {
            div class=(container_style) role="alert"
            {
                p class={ "font-medium " (text_style) } { (self.message) }

                @if !self.details.is_empty()
                {
                    p class={ "text-sm " (text_style) } { (self.details) }
                }
            }
        }
    }
}
