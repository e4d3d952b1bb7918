use serde::Serialize;

/// Google Apps Script web app that appends submissions to a sheet.
pub const SUBMIT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxJMCDAakjgXq31VBB40BCRekcF30bOUn4DPzvyM84nxXZuVoxTwv-eeajrwmIXJwOxtw/exec";

/// How long the success/error button state stays up before resetting.
pub const RESET_DELAY_MS: i32 = 3000;

/// Named inputs of `#contact-form`, in payload order.
pub const FORM_FIELDS: [&str; 5] = ["name", "email", "company", "industry", "message"];

/// Contact form fields, copied verbatim at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub industry: String,
    pub message: String,
}

impl FormPayload {
    /// Collect fields through `get`; absent fields become empty strings.
    pub fn collect(mut get: impl FnMut(&str) -> Option<String>) -> Self {
        let [name, email, company, industry, message] =
            FORM_FIELDS.map(|field| get(field).unwrap_or_default());
        Self {
            name,
            email,
            company,
            industry,
            message,
        }
    }

    pub fn to_json(&self) -> Result<String, SubmitError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("could not encode form payload: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network request failed: {0}")]
    Network(String),
}

/// Visual state of the submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

const SPINNER_SVG: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" class="spin"><path d="M12 2v4M12 18v4M4.93 4.93l2.83 2.83M16.24 16.24l2.83 2.83M2 12h4M18 12h4M4.93 19.07l2.83-2.83M16.24 7.76l2.83-2.83"/></svg>"#;
const CHECK_SVG: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="20 6 9 17 4 12"/></svg>"#;
const CROSS_SVG: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="15" y1="9" x2="9" y2="15"/><line x1="9" y1="9" x2="15" y2="15"/></svg>"#;

impl ButtonPhase {
    /// Phase once the POST has settled. The response itself is opaque
    /// (`no-cors`), so only whether the call threw matters.
    pub fn settle<T>(result: &Result<T, SubmitError>) -> Self {
        if result.is_ok() {
            ButtonPhase::Succeeded
        } else {
            ButtonPhase::Failed
        }
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            ButtonPhase::Idle => None,
            ButtonPhase::Sending => Some("Sending..."),
            ButtonPhase::Succeeded => Some("Thank you! We'll be in touch."),
            ButtonPhase::Failed => Some("Something went wrong. Try again."),
        }
    }

    /// Replacement button markup; `None` means "restore the original".
    pub fn inner_html(self) -> Option<String> {
        let icon = match self {
            ButtonPhase::Idle => return None,
            ButtonPhase::Sending => SPINNER_SVG,
            ButtonPhase::Succeeded => CHECK_SVG,
            ButtonPhase::Failed => CROSS_SVG,
        };
        self.label()
            .map(|label| format!("<span>{label}</span>{icon}"))
    }

    pub fn disabled(self) -> bool {
        self != ButtonPhase::Idle
    }

    /// Inline `opacity`; empty clears the override.
    pub fn opacity(self) -> &'static str {
        match self {
            ButtonPhase::Sending => "0.7",
            ButtonPhase::Succeeded | ButtonPhase::Failed => "1",
            ButtonPhase::Idle => "",
        }
    }

    /// Inline `background`; empty clears the override.
    pub fn background(self) -> &'static str {
        match self {
            ButtonPhase::Succeeded => "linear-gradient(135deg, #059669, #10b981)",
            ButtonPhase::Failed => "linear-gradient(135deg, #dc2626, #ef4444)",
            ButtonPhase::Idle | ButtonPhase::Sending => "",
        }
    }

    /// Whether the reset after a settled submit also clears the fields.
    pub fn clears_form(self) -> bool {
        self == ButtonPhase::Succeeded
    }
}

/// What happens after a submit settles: show `phase` now, then after
/// `reset_after_ms` go back to idle (clearing fields if `clear_fields`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub phase: ButtonPhase,
    pub reset_after_ms: i32,
    pub clear_fields: bool,
}

impl Settlement {
    pub fn from_result<T>(result: &Result<T, SubmitError>) -> Self {
        let phase = ButtonPhase::settle(result);
        Self {
            phase,
            reset_after_ms: RESET_DELAY_MS,
            clear_fields: phase.clears_form(),
        }
    }
}
