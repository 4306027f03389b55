use super::domain::{Priority, TokenNumber, TriageDecision};

const NOTIFICATION_HEADER: &str = "Hospital Triage Notification";
const NOTIFICATION_SIGNATURE: &str = "- Smart Hospital Triage Desk";

/// Instruction shown to the patient for a tier.
pub const fn action_for(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "Proceed to Emergency Ward immediately",
        Priority::Medium => "Consult a doctor today",
        Priority::Low => "OPD visit can be scheduled later",
    }
}

/// Patient-facing notification text. The layout is part of the output contract.
pub fn notification_for(priority: Priority, token: &TokenNumber) -> String {
    format!(
        "{NOTIFICATION_HEADER}\n\nPriority: {}\nToken Number: {}\n\n{}.\n\n{NOTIFICATION_SIGNATURE}",
        priority.label().to_uppercase(),
        token,
        action_for(priority),
    )
}

/// Bundle tier, action, and notification for a freshly issued token.
pub fn decide(priority: Priority, token: TokenNumber) -> TriageDecision {
    TriageDecision {
        priority,
        action: action_for(priority).to_string(),
        message: notification_for(priority, &token),
        token_number: token,
    }
}
