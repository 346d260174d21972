use showcase_core::Effect;
use showcase_logging::{showcase_info, showcase_warn};

use super::observer::AnchorObserver;

/// Executes core effects against the host's resources.
#[derive(Debug, Default)]
pub struct EffectRunner {
    observer: AnchorObserver,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observer_mut(&mut self) -> &mut AnchorObserver {
        &mut self.observer
    }

    /// Runs the effects and returns notices meant for the user.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<String> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::ObserveAnchor { generation } => {
                    showcase_info!("ObserveAnchor generation={}", generation);
                    self.observer.observe(generation);
                }
                Effect::DisconnectObserver => {
                    showcase_info!("DisconnectObserver");
                    self.observer.disconnect();
                }
                Effect::Rejected(err) => {
                    showcase_warn!("Input rejected: {}", err);
                    notices.push(err.to_string());
                }
            }
        }
        notices
    }
}
