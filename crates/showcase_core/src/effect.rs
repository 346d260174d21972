use crate::ViewError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start watching the anchor. Visibility reports must echo `generation`.
    ObserveAnchor { generation: u64 },
    /// Stop watching the anchor and release the observation.
    DisconnectObserver,
    /// Host input was refused; state is unchanged.
    Rejected(ViewError),
}
