pub mod config;
pub mod dispatch;
pub mod error;
pub mod export;
pub mod registry;
pub mod selection;
pub mod style;

pub use config::ShowcaseConfig;
pub use dispatch::{
    ActionOutcome, Clipboard, Dispatcher, ExternalLink, OpenPolicy, Opener, PlatformError,
    StartHook,
};
pub use error::{Result, ShowcaseError};
pub use registry::{AgentProfile, FeatureDescriptor, FeatureId, SuccessRate};
pub use selection::SelectionState;
pub use style::{Hue, StyleTag};
