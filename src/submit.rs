//! Contact form submission.
//!
//! One `submit` capability with three interchangeable constructions: a
//! simulated delay that always succeeds, a JSON insert against an opaque
//! backend endpoint, and a `mailto:` navigation that pre-fills the visitor's
//! mail client. The strategy is picked once, where the form is built.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::form::FormData;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The backend rejected the insert; carries its error message verbatim.
    #[error("{0}")]
    Backend(String),
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("Could not open your email client")]
    MailClient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitter {
    /// Waits a fixed delay, then reports success. Used when no backend is
    /// wired up yet.
    Simulated { delay_ms: u32 },
    /// POSTs the trimmed fields as JSON to an insert endpoint.
    Remote { endpoint: String },
    /// Navigates the browser to a pre-filled `mailto:` URL. "Success" only
    /// means the navigation call did not throw; whether the visitor's mail
    /// client exists, opens, or sends anything is unknowable from here.
    Mailto { recipient: String },
}

impl Submitter {
    pub fn simulated(delay_ms: u32) -> Self {
        Self::Simulated { delay_ms }
    }

    pub fn remote(endpoint: impl Into<String>) -> Self {
        Self::Remote {
            endpoint: endpoint.into(),
        }
    }

    pub fn mailto(recipient: impl Into<String>) -> Self {
        Self::Mailto {
            recipient: recipient.into(),
        }
    }

    /// Submit button label while idle.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Simulated { .. } | Self::Remote { .. } => "Send Message",
            Self::Mailto { .. } => "Open Email Client",
        }
    }

    /// Submit button label while a submission is in flight.
    pub fn busy_label(&self) -> &'static str {
        match self {
            Self::Simulated { .. } | Self::Remote { .. } => "Sending...",
            Self::Mailto { .. } => "Opening Email...",
        }
    }

    /// Extra line shown above the submit button, if the strategy warrants one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Mailto { .. } => {
                Some("This will open your email client with a pre-filled message")
            }
            _ => None,
        }
    }

    /// Message for the success banner.
    pub fn success_notice(&self) -> &'static str {
        match self {
            Self::Simulated { .. } | Self::Remote { .. } => {
                "Message sent! I'll get back to you soon."
            }
            Self::Mailto { .. } => {
                "Your email client should open with the message pre-filled. \
                 Please send the email to complete your message."
            }
        }
    }

    pub async fn submit(&self, form: &FormData) -> Result<(), SubmitError> {
        match self {
            Self::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                Ok(())
            }
            Self::Remote { endpoint } => submit_remote(endpoint, form).await,
            Self::Mailto { recipient } => {
                let url = mailto_url(form, recipient);
                log::info!("opening mail client for contact form submission");
                open_mailto(&url)
            }
        }
    }
}

async fn submit_remote(endpoint: &str, form: &FormData) -> Result<(), SubmitError> {
    let payload = serde_json::json!({
        "name": form.name.trim(),
        "company": form.company.trim(),
        "email": form.email.trim(),
        "message": form.message.trim(),
    });
    let response = Request::post(endpoint)
        .json(&payload)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(());
    }
    let detail = response.text().await.unwrap_or_default();
    log::error!("contact insert failed with status {}", response.status());
    Err(SubmitError::Backend(if detail.is_empty() {
        format!("request failed with status {}", response.status())
    } else {
        detail
    }))
}

/// Build the `mailto:` URL for a filled form. Split out from navigation so
/// the encoding round-trips in tests.
pub fn mailto_url(form: &FormData, recipient: &str) -> String {
    let subject = format!("Portfolio Contact Form - {}", form.name);
    let company = if form.company.is_empty() {
        "Not specified"
    } else {
        form.company.as_str()
    };
    let body = format!(
        "Hi,\n\n\
         I'm reaching out through your portfolio contact form.\n\n\
         Name: {name}\n\
         Company: {company}\n\
         Email: {email}\n\n\
         Message:\n\
         {message}\n\n\
         Best regards,\n\
         {name}",
        name = form.name,
        company = company,
        email = form.email,
        message = form.message,
    );
    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

fn open_mailto(url: &str) -> Result<(), SubmitError> {
    let window = web_sys::window().ok_or(SubmitError::MailClient)?;
    window
        .location()
        .set_href(url)
        .map_err(|_| SubmitError::MailClient)
}

/// Lifecycle of the submit control. One submission at a time per form
/// instance; `Sent`/`Failed` drive the status banner until dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

impl SubmitPhase {
    /// Enter `Submitting`. Returns `false` without side effect if a
    /// submission is already in flight.
    #[must_use]
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Submitting) {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    /// Record the outcome of the in-flight submission. Ignored unless a
    /// submission is actually in flight, so a stale completion can't
    /// resurrect banner state.
    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        if !matches!(self, Self::Submitting) {
            return;
        }
        *self = match result {
            Ok(()) => Self::Sent,
            Err(e) => Self::Failed(e.to_string()),
        };
    }

    /// Clear the banner. A submission in flight is never dismissed.
    pub fn dismiss(&mut self) {
        if !matches!(self, Self::Submitting) {
            *self = Self::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormData {
        FormData {
            name: "Jo Doe".to_string(),
            company: "Acme Corp".to_string(),
            email: "jo@x.com".to_string(),
            message: "I have a project & a budget. Let's talk?".to_string(),
        }
    }

    fn decoded_body(url: &str) -> String {
        let raw = url
            .split("body=")
            .nth(1)
            .expect("mailto URL should have a body parameter");
        urlencoding::decode(raw)
            .expect("body should decode")
            .into_owned()
    }

    #[test]
    fn test_mailto_url_shape() {
        let url = mailto_url(&filled(), "me@example.com");
        assert!(url.starts_with("mailto:me@example.com?subject="));
        assert!(url.contains("&body="));
        // reserved characters in the body never appear raw
        let query = url.split('?').nth(1).unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query.contains('&') || query.matches('&').count() == 1);
    }

    #[test]
    fn test_mailto_subject_round_trip() {
        let url = mailto_url(&filled(), "me@example.com");
        let raw = url
            .split("subject=")
            .nth(1)
            .and_then(|rest| rest.split('&').next())
            .unwrap();
        let subject = urlencoding::decode(raw).unwrap();
        assert_eq!(subject, "Portfolio Contact Form - Jo Doe");
    }

    #[test]
    fn test_mailto_body_round_trip() {
        let form = filled();
        let body = decoded_body(&mailto_url(&form, "me@example.com"));
        assert!(body.contains(&form.name));
        assert!(body.contains(&form.email));
        assert!(body.contains(&form.message));
        assert!(body.contains("Company: Acme Corp"));
        assert!(body.ends_with("Best regards,\nJo Doe"));
    }

    #[test]
    fn test_mailto_empty_company_reads_not_specified() {
        let mut form = filled();
        form.company = String::new();
        let body = decoded_body(&mailto_url(&form, "me@example.com"));
        assert!(body.contains("Company: Not specified"));
    }

    #[test]
    fn test_phase_happy_path() {
        let mut phase = SubmitPhase::Idle;
        assert!(phase.begin());
        assert!(phase.is_submitting());
        phase.finish(Ok(()));
        assert_eq!(phase, SubmitPhase::Sent);
        phase.dismiss();
        assert_eq!(phase, SubmitPhase::Idle);
    }

    #[test]
    fn test_phase_failure_keeps_reason() {
        let mut phase = SubmitPhase::Idle;
        assert!(phase.begin());
        phase.finish(Err(SubmitError::Backend("duplicate row".to_string())));
        assert_eq!(phase, SubmitPhase::Failed("duplicate row".to_string()));
        phase.dismiss();
        assert_eq!(phase, SubmitPhase::Idle);
    }

    #[test]
    fn test_phase_rejects_reentry_while_submitting() {
        let mut phase = SubmitPhase::Idle;
        assert!(phase.begin());
        assert!(!phase.begin(), "second begin must be a no-op");
        assert!(phase.is_submitting());
    }

    #[test]
    fn test_phase_ignores_stale_completion() {
        let mut phase = SubmitPhase::Idle;
        phase.finish(Ok(()));
        assert_eq!(phase, SubmitPhase::Idle);

        assert!(phase.begin());
        phase.finish(Ok(()));
        phase.finish(Err(SubmitError::MailClient));
        assert_eq!(phase, SubmitPhase::Sent);
    }

    #[test]
    fn test_phase_never_dismissed_mid_flight() {
        let mut phase = SubmitPhase::Idle;
        assert!(phase.begin());
        phase.dismiss();
        assert!(phase.is_submitting());
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(Submitter::simulated(800).action_label(), "Send Message");
        assert_eq!(
            Submitter::remote("/api/contact").action_label(),
            "Send Message"
        );
        let mailto = Submitter::mailto("me@example.com");
        assert_eq!(mailto.action_label(), "Open Email Client");
        assert_eq!(mailto.busy_label(), "Opening Email...");
        assert!(mailto.hint().is_some());
        assert!(Submitter::simulated(0).hint().is_none());
    }
}
