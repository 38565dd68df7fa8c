use crate::Part;
use serde::{Deserialize, Serialize};

// ============================================================================
// Agent Card and Discovery Types
// ============================================================================

/// Optional capabilities supported by an agent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgentCapabilities {
    /// Whether the agent streams incremental responses.
    pub streaming: bool,
    /// Whether the agent delivers asynchronous task updates to a webhook.
    #[serde(rename = "pushNotifications")]
    pub push_notifications: bool,
}

/// The service provider of an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProvider {
    /// The name of the provider's organization.
    pub organization: String,
    /// A URL for the provider's website or relevant documentation.
    pub url: String,
}

/// A worked input/output example advertised for a skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillExample {
    /// The example request content.
    pub input: ExampleContent,
    /// The content the skill would produce for that request.
    pub output: ExampleContent,
}

/// The parts of one side of a skill example.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleContent {
    pub parts: Vec<Part>,
}

/// A distinct capability the agent can perform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSkill {
    /// A unique identifier for the skill.
    pub id: String,
    /// A human-readable name for the skill.
    pub name: String,
    /// A detailed description of the skill.
    pub description: String,
    /// Supported input modes for this skill.
    #[serde(rename = "inputModes")]
    pub input_modes: Vec<String>,
    /// Supported output modes for this skill.
    #[serde(rename = "outputModes")]
    pub output_modes: Vec<String>,
    /// Example interactions this skill can handle.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub examples: Vec<SkillExample>,
}

impl AgentSkill {
    /// Create a new skill with text input and output modes.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            input_modes: vec!["text".to_string()],
            output_modes: vec!["text".to_string()],
            examples: Vec::new(),
        }
    }

    /// Set the skill description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a worked text example.
    pub fn add_text_example(mut self, input: impl Into<String>, output: impl Into<String>) -> Self {
        self.examples.push(SkillExample {
            input: ExampleContent {
                parts: vec![Part::Text {
                    text: input.into(),
                    content_type: Some("text/plain".to_string()),
                }],
            },
            output: ExampleContent {
                parts: vec![Part::Text {
                    text: output.into(),
                    content_type: Some("text/plain".to_string()),
                }],
            },
        });
        self
    }
}

/// The agent card is a self-describing manifest, served from the well-known
/// discovery path. The `url` fields are placeholders until
/// [`AgentCard::for_base_url`] rewrites them to the serving host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCard {
    /// A human-readable name for the agent.
    pub name: String,
    /// A human-readable description of the agent.
    pub description: String,
    /// The preferred endpoint URL for interacting with the agent.
    pub url: String,
    /// Information about the agent's service provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<AgentProvider>,
    /// The agent's own version number.
    pub version: String,
    /// A URL to the agent's documentation.
    #[serde(rename = "documentationUrl")]
    pub documentation_url: String,
    /// Optional capabilities supported by the agent.
    pub capabilities: AgentCapabilities,
    /// Default supported input MIME types for all skills.
    #[serde(rename = "defaultInputModes")]
    pub default_input_modes: Vec<String>,
    /// Default supported output MIME types for all skills.
    #[serde(rename = "defaultOutputModes")]
    pub default_output_modes: Vec<String>,
    /// The set of skills the agent can perform.
    pub skills: Vec<AgentSkill>,
}

impl AgentCard {
    /// Create a new card with minimal required fields and text defaults.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: String::new(),
            provider: None,
            version: version.into(),
            documentation_url: String::new(),
            capabilities: AgentCapabilities::default(),
            default_input_modes: vec!["text/plain".to_string()],
            default_output_modes: vec!["text/plain".to_string()],
            skills: Vec::new(),
        }
    }

    /// Set the provider information.
    pub fn with_provider(
        mut self,
        organization: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        self.provider = Some(AgentProvider {
            organization: organization.into(),
            url: url.into(),
        });
        self
    }

    /// Enable or disable the push-notification capability.
    pub fn with_push_notifications(mut self, enabled: bool) -> Self {
        self.capabilities.push_notifications = enabled;
        self
    }

    /// Enable or disable the streaming capability.
    pub fn with_streaming(mut self, enabled: bool) -> Self {
        self.capabilities.streaming = enabled;
        self
    }

    /// Add a skill.
    pub fn add_skill(mut self, skill: AgentSkill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Produce a copy of this card with the endpoint, provider and
    /// documentation URLs rewritten for the host currently serving it.
    pub fn for_base_url(&self, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let mut card = self.clone();
        card.url = base.to_string();
        if let Some(provider) = card.provider.as_mut() {
            provider.url = base.to_string();
        }
        card.documentation_url = format!("{base}/docs");
        card
    }
}
