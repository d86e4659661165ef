//! Compiled-in content that drives the showcase screen.
//!
//! Everything here is `&'static` and read-only: features, quick commands,
//! the agent roster and the fixed page copy.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ShowcaseError;
use crate::style::{Hue, StyleTag};

/// Identifier of a showcased feature.
///
/// Closed set: a `FeatureId` can only name an entry that exists in
/// [`features()`], so selection never dangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    AiChat,
    VisualEditor,
    AiAgents,
    DataExport,
}

impl FeatureId {
    /// All ids in registry order
    pub const ALL: [FeatureId; 4] = [
        FeatureId::AiChat,
        FeatureId::VisualEditor,
        FeatureId::AiAgents,
        FeatureId::DataExport,
    ];

    /// Position in the registry
    pub fn index(self) -> usize {
        match self {
            FeatureId::AiChat => 0,
            FeatureId::VisualEditor => 1,
            FeatureId::AiAgents => 2,
            FeatureId::DataExport => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureId::AiChat => "ai-chat",
            FeatureId::VisualEditor => "visual-editor",
            FeatureId::AiAgents => "ai-agents",
            FeatureId::DataExport => "data-export",
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureId {
    type Err = ShowcaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ShowcaseError::UnknownFeature(s.to_string()))
    }
}

impl Serialize for FeatureId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One showcased capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    pub id: FeatureId,
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub style: StyleTag,
}

/// Percentage in the open interval (0, 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SuccessRate(u8);

impl SuccessRate {
    /// Panics at compile time (const context) when outside (0, 100).
    pub const fn new(percent: u8) -> Self {
        assert!(percent > 0 && percent < 100, "success rate must be in (0, 100)");
        Self(percent)
    }

    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SuccessRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Member of the agent roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgentProfile {
    pub name: &'static str,
    pub role: &'static str,
    pub success_rate: SuccessRate,
    pub style: StyleTag,
}

impl AgentProfile {
    /// Avatar glyph (first letter of the name)
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

static FEATURES: [FeatureDescriptor; 4] = [
    FeatureDescriptor {
        id: FeatureId::AiChat,
        title: "AI-Powered Pipeline Creation",
        description: "Chat with Nase7 to build pipelines using natural language",
        example: "\"Create a SaaS sales pipeline with 6 stages\"",
        style: StyleTag::gradient(Hue::Purple, Hue::Blue),
    },
    FeatureDescriptor {
        id: FeatureId::VisualEditor,
        title: "Interactive Visual Editor",
        description: "Drag and drop nodes, customize layouts, real-time updates",
        example: "Drag stages to reposition, connect with smooth animations",
        style: StyleTag::gradient(Hue::Blue, Hue::Cyan),
    },
    FeatureDescriptor {
        id: FeatureId::AiAgents,
        title: "Specialized AI Agents",
        description: "4 expert agents: Aria, Clio, Ivy, and Vee",
        example: "Click any agent to see detailed capabilities and metrics",
        style: StyleTag::gradient(Hue::Emerald, Hue::Teal),
    },
    FeatureDescriptor {
        id: FeatureId::DataExport,
        title: "Clean JSON Export",
        description: "Export pipeline data for automation and integrations",
        example: "Switch to JSON view for clean, structured data",
        style: StyleTag::gradient(Hue::Orange, Hue::Red),
    },
];

static COMMANDS: [&str; 5] = [
    "Create a modern sales pipeline",
    "Add a qualification stage after lead generation",
    "Assign Aria to lead generation",
    "Show me pipeline templates",
    "Optimize my current pipeline",
];

static AGENTS: [AgentProfile; 4] = [
    AgentProfile {
        name: "Aria",
        role: "Lead Generation",
        success_rate: SuccessRate::new(87),
        style: StyleTag::solid(Hue::Purple),
    },
    AgentProfile {
        name: "Clio",
        role: "Demo Expert",
        success_rate: SuccessRate::new(92),
        style: StyleTag::solid(Hue::Blue),
    },
    AgentProfile {
        name: "Ivy",
        role: "Deal Closer",
        success_rate: SuccessRate::new(94),
        style: StyleTag::solid(Hue::Emerald),
    },
    AgentProfile {
        name: "Vee",
        role: "Recovery Agent",
        success_rate: SuccessRate::new(76),
        style: StyleTag::solid(Hue::Red),
    },
];

/// Showcased features, in display order
pub fn features() -> &'static [FeatureDescriptor] {
    &FEATURES
}

/// Look up a feature by id
pub fn feature(id: FeatureId) -> &'static FeatureDescriptor {
    &FEATURES[id.index()]
}

/// Sample commands users can copy into the chat interface
pub fn commands() -> &'static [&'static str] {
    &COMMANDS
}

/// The AI sales team roster
pub fn agents() -> &'static [AgentProfile] {
    &AGENTS
}

/// Fixed page copy
pub mod copy {
    pub const PRODUCT_NAME: &str = "Magic Pipeline";
    pub const TAGLINE: &str = "Transform your sales process with AI-powered pipeline automation. \
        Build, modify, and optimize sales pipelines using natural language conversation.";
    pub const LAUNCH_LABEL: &str = "Launch Magic Pipeline";
    pub const REPOSITORY_LABEL: &str = "View on GitHub";
    pub const BADGES: [&str; 3] = ["Live Demo Ready", "AI Powered", "4 AI Agents"];
    pub const COMMANDS_HEADING: &str = "Try These AI Commands";
    pub const COMMANDS_HINT: &str =
        "Click any command to copy it, then paste in the AI chat interface";
    pub const AGENTS_HEADING: &str = "Meet Your AI Sales Team";
    pub const CTA_HEADING: &str = "Ready to Transform Your Sales Process?";
    pub const CTA_BODY: &str =
        "Experience the future of sales pipeline automation with AI-powered assistance";
    pub const START_LABEL: &str = "Start Building Your Pipeline";
    pub const DOCUMENTATION_LABEL: &str = "Documentation";
}
