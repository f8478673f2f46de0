//! trichrome keeps one color synchronized across three groups of sliders:
//! RGB, CIE-XYZ and CMYK.
//!
//! The UI toolkit supplies the sliders ([`Slider`]) and the preview swatch
//! ([`Surface`]). Each group of sliders is wrapped by a [`ModelController`]
//! and all controllers are registered with a [`Hub`], which pushes every
//! change made on one group to the others.
//!
//! ```rust
//! use trichrome::{ChannelGroup, Color, ColorModel, Hub, MemorySlider, MemorySurface, ModelController};
//!
//! let mut handles = vec![];
//! let controllers = ColorModel::ALL
//!     .iter()
//!     .map(|model| {
//!         let group = ChannelGroup::for_model(*model, |_| {
//!             let slider = MemorySlider::new();
//!             handles.push(slider.clone());
//!             Box::new(slider)
//!         });
//!         ModelController::new(*model, group.into_shared())
//!     })
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//!
//! let surface = MemorySurface::new();
//! let hub = Hub::new(controllers, Box::new(surface.clone()), Color::new(100, 100, 200)).unwrap();
//!
//! // Drag the blue slider.
//! handles[2].drag(20);
//! assert_eq!(surface.fill(), Some(Color::new(100, 100, 20)));
//! assert_eq!(hub.propagations(), 2);
//! ```

#![deny(missing_docs)]

mod channel;
mod color;
mod controller;
mod convert;
mod error;
mod hub;
mod math;
mod models;


pub use channel::{ChannelGroup, MemorySlider, SharedGroup, Slider};
pub use color::{clamp_channel, Color, Component, CHANNEL_MAX, CHANNEL_MIN};
pub use controller::{ControllerId, HubLink, ModelController, MuteGuard};
pub use convert::{denormalize, normalize, GAMMA, KEY_EPSILON};
pub use error::{Error, Result};
pub use hub::{Hub, MemorySurface, Propagation, State, Surface};
pub use models::{Channels, Cmyk, ColorModel, Models, Rgb, Xyz};
