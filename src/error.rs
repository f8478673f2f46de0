//! Errors raised while wiring up or driving the synchronization hub.

use thiserror::Error;

use crate::controller::ControllerId;
use crate::models::ColorModel;

/// Errors that can occur while building or driving a [`crate::Hub`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A channel group does not have one slider per channel of its model.
    #[error("{model:?} needs {expected} channels, the group has {found}")]
    ChannelCount {
        /// The model the group was meant for.
        model: ColorModel,
        /// The number of channels the model needs.
        expected: usize,
        /// The number of sliders in the group.
        found: usize,
    },

    /// A controller received a change notification before it was registered
    /// with a hub.
    #[error("{0:?} controller is not registered with a hub")]
    Unregistered(ColorModel),

    /// A hub was created without any controllers.
    #[error("a hub needs at least one controller")]
    NoControllers,

    /// No controller is registered under the given id.
    #[error("unknown controller {0:?}")]
    UnknownController(ControllerId),

    /// A change arrived while a propagation was running. Holds the
    /// controller that changed, or `None` for [`crate::Hub::set_color`].
    #[error("change from {0:?} arrived while the hub was propagating")]
    Reentrant(Option<ControllerId>),

    /// A channel group was borrowed elsewhere when the hub had to write it.
    #[error("the {0:?} channel group is borrowed")]
    GroupBusy(ColorModel),

    /// A slider fired after its hub was dropped.
    #[error("the hub was dropped")]
    HubDropped,

    /// A string could not be parsed as a hex color.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
