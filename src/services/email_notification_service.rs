use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

use crate::config::DeliveryConfig;
use crate::errors::{PlanError, PlanResult};
use crate::models::{validate_email, GeneratedPlan, PlanRequest};

use super::plan_generation_service::PlanGenerationService;
use super::plan_rendering_service::{format_race_date, render_plan_text};

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
    #[error("Email sending timed out after {0}s")]
    Timeout(u64),
}

/// A composed plan email, ready for a transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl PlanEmail {
    pub fn compose(
        plan: &GeneratedPlan,
        recipient: &str,
        first_name: Option<&str>,
        config: &DeliveryConfig,
    ) -> Result<Self, EmailError> {
        validate_email(recipient)
            .map_err(|_| EmailError::InvalidEmailAddress(recipient.to_string()))?;

        let plan_text = render_plan_text(plan);
        let greeting = match first_name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => format!("Hi {},", name),
            None => "Hi there,".to_string(),
        };

        Ok(Self {
            from: config.sender(),
            to: recipient.to_string(),
            subject: format!("Your Custom {} Marathon Training Plan", plan.goal_time),
            text_body: text_body(plan, &greeting, &plan_text, config),
            html_body: html_body(plan, &greeting, &plan_text, config),
        })
    }
}

fn plan_details(plan: &GeneratedPlan) -> Vec<(&'static str, String)> {
    vec![
        ("Marathon Date", format_race_date(plan)),
        ("Training Duration", format!("{} weeks", plan.inputs.training_weeks)),
        ("Running Days", format!("{} days per week", plan.inputs.days_per_week)),
        (
            "Starting Weekly Mileage",
            format!("{} miles", plan.inputs.current_weekly_miles),
        ),
        ("Peak Weekly Mileage", format!("{} miles", plan.inputs.peak_weekly_miles)),
    ]
}

const TRAINING_NOTES: [(&str, &str); 6] = [
    (
        "Pace Key",
        "E=Easy, T=Tempo/Threshold, I=Interval, M=Marathon, WU=Warmup, CD=Cooldown",
    ),
    (
        "Easy Runs",
        "These should feel comfortable. You should be able to hold a conversation.",
    ),
    (
        "Long Runs",
        "Critical for building endurance. Start slow and maintain steady effort.",
    ),
    (
        "Workouts",
        "Interval and tempo runs improve speed and lactate threshold. \
         Follow the prescribed paces.",
    ),
    ("Rest Days", "Essential for recovery and adaptation. Don't skip them!"),
    (
        "Listen to Your Body",
        "If you're overly fatigued or injured, adjust the plan accordingly.",
    ),
];

fn text_body(
    plan: &GeneratedPlan,
    greeting: &str,
    plan_text: &str,
    config: &DeliveryConfig,
) -> String {
    let mut body = format!(
        "{}\n\nThank you for using {}! We've generated your custom {}-week training plan \
         to help you achieve your {} marathon goal.\n\nYOUR PLAN DETAILS:\n",
        greeting, config.from_name, plan.inputs.training_weeks, plan.goal_time
    );
    for (label, value) in plan_details(plan) {
        body.push_str(&format!("- {}: {}\n", label, value));
    }

    body.push_str(&format!(
        "\nYOUR TRAINING SCHEDULE:\n{}\n\nIMPORTANT TRAINING NOTES:\n",
        plan_text
    ));
    for (label, note) in TRAINING_NOTES {
        body.push_str(&format!("- {}: {}\n", label, note));
    }

    body.push_str(&format!(
        "\nGood luck with your training!\n\nVisit {} for more training resources and guides.\
         \n\n---\nThis is an automated email. Please do not reply.\n",
        config.site_url
    ));
    body
}

fn html_body(
    plan: &GeneratedPlan,
    greeting: &str,
    plan_text: &str,
    config: &DeliveryConfig,
) -> String {
    let details: String = plan_details(plan)
        .into_iter()
        .map(|(label, value)| format!("<li>{}: {}</li>", label, escape_html(&value)))
        .collect();
    let notes: String = TRAINING_NOTES
        .iter()
        .map(|(label, note)| {
            format!("<li><strong>{}:</strong> {}</li>", label, escape_html(note))
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Your Custom Marathon Training Plan</title></head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;
  max-width: 800px; margin: 0 auto; padding: 20px;">
<h1>Your Custom Marathon Training Plan</h1>
<p>Goal Time: {goal}</p>
<p>{greeting}</p>
<p>Thank you for using {app}! We've generated your custom {weeks}-week training plan
to help you achieve your {goal} marathon goal.</p>
<p><strong>Your Plan Details:</strong></p>
<ul>{details}</ul>
<h2>Your Training Schedule</h2>
<pre style="font-family: 'Courier New', monospace; font-size: 11px;
  white-space: pre;">{schedule}</pre>
<h3>Important Training Notes</h3>
<ul>{notes}</ul>
<p>Good luck with your training!</p>
<p>Visit <a href="{site}">{site}</a> for more training resources and guides.</p>
<p style="font-size: 12px;">This is an automated email. Please do not reply.</p>
</body>
</html>
"#,
        goal = plan.goal_time,
        greeting = escape_html(greeting),
        app = escape_html(&config.from_name),
        weeks = plan.inputs.training_weeks,
        details = details,
        schedule = escape_html(plan_text),
        notes = notes,
        site = escape_html(&config.site_url),
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Transport for plan emails.
pub trait PlanMailer {
    fn send(&self, email: &PlanEmail) -> impl Future<Output = Result<(), EmailError>> + Send;

    /// Whether a successful `send` means the message actually left for the recipient.
    fn delivers(&self) -> bool {
        true
    }
}

/// Mailer that records messages in the log instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl PlanMailer for LogMailer {
    async fn send(&self, email: &PlanEmail) -> Result<(), EmailError> {
        tracing::info!(
            "Email delivery not configured, logging message to: {}, subject: {}, from: {}",
            email.to,
            email.subject,
            email.from
        );
        Ok(())
    }

    fn delivers(&self) -> bool {
        false
    }
}

/// What happened to the plan email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// No address was given.
    NotRequested,
    Sent,
    /// Composed and handed to a mailer that only records it.
    Logged,
    Failed,
}

impl DeliveryStatus {
    pub fn message(&self) -> &'static str {
        match self {
            DeliveryStatus::NotRequested => "Your training plan has been generated!",
            DeliveryStatus::Sent => "Your training plan has been generated and emailed to you!",
            DeliveryStatus::Logged => {
                "Your training plan has been generated! Email delivery is not configured, \
                 so no email was sent."
            }
            DeliveryStatus::Failed => {
                "Your plan has been generated, but we couldn't send the email. \
                 Please copy your plan from the output above."
            }
        }
    }
}

/// Result of a generate-and-deliver request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDeliveryOutcome {
    pub plan: GeneratedPlan,
    pub plan_text: String,
    pub status: DeliveryStatus,
    pub message: String,
}

impl PlanDeliveryOutcome {
    fn new(plan: GeneratedPlan, plan_text: String, status: DeliveryStatus) -> Self {
        Self {
            plan,
            plan_text,
            status,
            message: status.message().to_string(),
        }
    }

    pub fn emailed(&self) -> bool {
        self.status == DeliveryStatus::Sent
    }
}

/// Generates a plan and, when the request carries an address, emails it.
///
/// A failed email never fails the request; the plan is still returned.
pub struct PlanDeliveryService<M: PlanMailer> {
    generator: PlanGenerationService,
    mailer: M,
    config: DeliveryConfig,
}

impl<M: PlanMailer> PlanDeliveryService<M> {
    pub fn new(mailer: M, config: DeliveryConfig) -> Self {
        Self {
            generator: PlanGenerationService::new(),
            mailer,
            config,
        }
    }

    pub async fn generate_and_deliver(
        &self,
        request: &PlanRequest,
        today: NaiveDate,
    ) -> PlanResult<PlanDeliveryOutcome> {
        let inputs = request.validate(today).map_err(PlanError::Validation)?;
        let plan = self.generator.generate_plan(&inputs);
        let plan_text = render_plan_text(&plan);

        let recipient = request.email.as_deref().filter(|e| !e.is_empty());
        let Some(recipient) = recipient else {
            return Ok(PlanDeliveryOutcome::new(plan, plan_text, DeliveryStatus::NotRequested));
        };

        let status = match self.send_plan(&plan, recipient, request.first_name.as_deref()).await {
            Ok(()) if self.mailer.delivers() => {
                tracing::info!("Sent training plan to {}", recipient);
                DeliveryStatus::Sent
            }
            Ok(()) => DeliveryStatus::Logged,
            Err(e) => {
                tracing::error!("Failed to send email: {}", e);
                DeliveryStatus::Failed
            }
        };

        Ok(PlanDeliveryOutcome::new(plan, plan_text, status))
    }

    async fn send_plan(
        &self,
        plan: &GeneratedPlan,
        recipient: &str,
        first_name: Option<&str>,
    ) -> Result<(), EmailError> {
        let email = PlanEmail::compose(plan, recipient, first_name, &self.config)?;
        let timeout = Duration::from_secs(self.config.send_timeout_seconds);

        tokio::time::timeout(timeout, self.mailer.send(&email))
            .await
            .map_err(|_| EmailError::Timeout(self.config.send_timeout_seconds))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanInputs;
    use crate::services::plan_generation_service::generate_plan;
    use assert_matches::assert_matches;

    fn plan() -> GeneratedPlan {
        generate_plan(&PlanInputs {
            marathon_date: NaiveDate::from_ymd_opt(2026, 10, 11).unwrap(),
            training_weeks: 16,
            current_weekly_miles: 25,
            peak_weekly_miles: 45,
            days_per_week: 4,
            goal_time: "3:45:00".parse().unwrap(),
        })
    }

    #[test]
    fn test_compose_subject_and_greeting() {
        let config = DeliveryConfig::default();
        let email =
            PlanEmail::compose(&plan(), "runner@example.com", Some("Sam"), &config).unwrap();
        assert_eq!(email.subject, "Your Custom 3:45:00 Marathon Training Plan");
        assert!(email.text_body.starts_with("Hi Sam,"));
        assert!(email.text_body.contains("- Marathon Date: October 11, 2026"));
        assert!(email.text_body.contains("MARATHON TRAINING PLAN"));
        assert!(email.html_body.contains("<pre"));
    }

    #[test]
    fn test_compose_without_name() {
        let config = DeliveryConfig::default();
        let email = PlanEmail::compose(&plan(), "runner@example.com", Some("  "), &config).unwrap();
        assert!(email.text_body.starts_with("Hi there,"));
    }

    #[test]
    fn test_compose_rejects_bad_address() {
        let result = PlanEmail::compose(&plan(), "nobody", None, &DeliveryConfig::default());
        assert_matches!(
            result,
            Err(EmailError::InvalidEmailAddress(address)) if address == "nobody"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }

    #[test]
    fn test_log_mailer_accepts_message() {
        let config = DeliveryConfig::default();
        let email = PlanEmail::compose(&plan(), "runner@example.com", None, &config).unwrap();
        assert!(tokio_test::block_on(LogMailer.send(&email)).is_ok());
        assert!(!LogMailer.delivers());
    }

    #[test]
    fn test_log_mailer_outcome_is_not_reported_as_sent() {
        let service = PlanDeliveryService::new(LogMailer, DeliveryConfig::default());
        let request = PlanRequest {
            marathon_date: NaiveDate::from_ymd_opt(2026, 10, 11).unwrap(),
            training_weeks: 16,
            current_weekly_miles: 25,
            peak_weekly_miles: 45,
            days_per_week: 4,
            goal_time: "3:45:00".to_string(),
            email: Some("runner@example.com".to_string()),
            first_name: None,
        };
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        let outcome = tokio_test::block_on(service.generate_and_deliver(&request, today)).unwrap();

        assert_eq!(outcome.status, DeliveryStatus::Logged);
        assert!(!outcome.emailed());
        assert!(!outcome.message.contains("emailed to you"));
        assert!(outcome.message.contains("no email was sent"));
    }
}
