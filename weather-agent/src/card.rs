use a2a_task::{AgentCard, AgentSkill};

/// The agent's self-description template. URL fields are rewritten to the
/// serving host per request by the discovery route.
pub fn agent_card() -> AgentCard {
    AgentCard::new(
        "CurrentWeatherAgent",
        "An agent that accepts a request, creates a task and sends the task status back \
         to the client, keeps processing the task and then sends the task response when \
         the task is completed",
        "1.0.0",
    )
    .with_provider("Telex Org.", "https://telex.im")
    .with_streaming(false)
    .with_push_notifications(true)
    .add_skill(
        AgentSkill::new("weather", "Get current Weather")
            .with_description("Responds with the current weather.")
            .add_text_example(
                "Abuja",
                "The weather in Abuja is 29.5 degrees but feels like 32.4 degrees. Partly cloudy",
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_advertises_push_notifications_without_streaming() {
        let card = agent_card();
        assert!(card.capabilities.push_notifications);
        assert!(!card.capabilities.streaming);
        assert_eq!(card.skills.len(), 1);
        assert_eq!(card.skills[0].id, "weather");
    }
}
