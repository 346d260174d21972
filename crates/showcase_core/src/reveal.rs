//! Bridges a host visibility signal for the end-of-list anchor to
//! [`PostListViewModel::reveal_more`].
//!
//! The controller never talks to the host directly. Every lifecycle call
//! returns the [`Effect`]s the host must carry out (start or stop observing
//! the anchor); visibility reports come back tagged with the generation of
//! the observation that produced them, so reports from an observation that
//! has since been replaced are dropped.

use showcase_logging::{showcase_debug, showcase_trace};

use crate::effect::Effect;
use crate::view_model::PostListViewModel;

/// Whether the host can report anchor visibility at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilitySupport {
    #[default]
    Observer,
    /// No visibility primitive: fall back to an explicit "load more" control.
    Manual,
}

/// What the presentation layer should render after the visible posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAffordance {
    None,
    Anchor,
    LoadMoreButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Armed, waiting for the anchor to be attached.
    Deferred,
    Watching { anchor_visible: bool },
    Manual,
    Exhausted,
    Released,
}

#[derive(Debug, Clone)]
pub struct RevealController {
    support: VisibilitySupport,
    anchor_attached: bool,
    phase: Phase,
    generation: u64,
}

impl RevealController {
    pub fn new(support: VisibilitySupport) -> Self {
        Self {
            support,
            anchor_attached: false,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn support(&self) -> VisibilitySupport {
        self.support
    }

    /// Generation of the current (or most recent) observation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_observing(&self) -> bool {
        matches!(self.phase, Phase::Watching { .. })
    }

    pub fn is_released(&self) -> bool {
        self.phase == Phase::Released
    }

    pub fn start(&mut self, posts: &PostListViewModel) -> Vec<Effect> {
        self.rearm(posts)
    }

    /// Drops the current observation and watches afresh. Called after every
    /// filter, search or sort change.
    pub fn rearm(&mut self, posts: &PostListViewModel) -> Vec<Effect> {
        if self.phase == Phase::Released {
            return Vec::new();
        }
        let mut effects = Vec::new();
        self.disconnect(&mut effects);
        self.arm(posts, &mut effects);
        effects
    }

    pub fn anchor_attached(&mut self, posts: &PostListViewModel) -> Vec<Effect> {
        self.anchor_attached = true;
        let mut effects = Vec::new();
        if self.phase == Phase::Deferred {
            self.arm(posts, &mut effects);
        }
        effects
    }

    pub fn anchor_detached(&mut self) -> Vec<Effect> {
        self.anchor_attached = false;
        let mut effects = Vec::new();
        if self.is_observing() {
            self.disconnect(&mut effects);
            self.phase = Phase::Deferred;
        }
        effects
    }

    /// Handles one visibility report. Reveals exactly once per
    /// not-visible to visible transition of the current observation.
    pub fn visibility_changed(
        &mut self,
        generation: u64,
        visible: bool,
        posts: &mut PostListViewModel,
    ) -> Vec<Effect> {
        let Phase::Watching { anchor_visible } = self.phase else {
            showcase_trace!("Visibility report ignored outside observation");
            return Vec::new();
        };
        if generation != self.generation {
            showcase_trace!(
                "Stale visibility report (generation {} != {})",
                generation,
                self.generation
            );
            return Vec::new();
        }
        self.phase = Phase::Watching {
            anchor_visible: visible,
        };
        if !visible || anchor_visible {
            return Vec::new();
        }

        posts.reveal_more();
        let mut effects = Vec::new();
        if !posts.has_more() {
            self.disconnect(&mut effects);
            self.phase = Phase::Exhausted;
        }
        effects
    }

    /// Explicit "load more" request; available whatever the support level.
    pub fn load_more_clicked(&mut self, posts: &mut PostListViewModel) -> Vec<Effect> {
        if self.phase == Phase::Released || !posts.reveal_more() {
            return Vec::new();
        }
        let mut effects = Vec::new();
        if !posts.has_more() {
            self.disconnect(&mut effects);
            self.phase = Phase::Exhausted;
        }
        effects
    }

    /// Tears the controller down. Further calls are no-ops.
    pub fn release(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.disconnect(&mut effects);
        self.phase = Phase::Released;
        effects
    }

    pub fn affordance(&self, posts: &PostListViewModel) -> RevealAffordance {
        if self.phase == Phase::Released || !posts.has_more() {
            return RevealAffordance::None;
        }
        match self.support {
            VisibilitySupport::Observer => RevealAffordance::Anchor,
            VisibilitySupport::Manual => RevealAffordance::LoadMoreButton,
        }
    }

    fn arm(&mut self, posts: &PostListViewModel, effects: &mut Vec<Effect>) {
        self.phase = if !posts.has_more() {
            Phase::Exhausted
        } else {
            match self.support {
                VisibilitySupport::Manual => Phase::Manual,
                VisibilitySupport::Observer if !self.anchor_attached => Phase::Deferred,
                VisibilitySupport::Observer => {
                    self.generation += 1;
                    effects.push(Effect::ObserveAnchor {
                        generation: self.generation,
                    });
                    Phase::Watching {
                        anchor_visible: false,
                    }
                }
            }
        };
        showcase_debug!("Reveal controller armed: {:?}", self.phase);
    }

    fn disconnect(&mut self, effects: &mut Vec<Effect>) {
        if self.is_observing() {
            effects.push(Effect::DisconnectObserver);
            self.phase = Phase::Idle;
        }
    }
}
