//! The hub keeps every controller showing the same color.
//!
//! When the sliders of one controller move, the hub reads the canonical
//! color from that controller, pushes it to every other controller and
//! paints the preview surface. The other controllers are muted while they are
//! written to, so their sliders do not report the change back.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};

use crate::color::clamp_channel;
use crate::controller::{ControllerId, HubLink, ModelController};
use crate::models::{ColorModel, Models};
use crate::{Color, Error, Result};

/// The paintable-surface capability a UI toolkit has to provide.
pub trait Surface {
    /// Fill the surface with `color`.
    fn set_fill_color(&mut self, color: Color);
}

/// A surface that only remembers the last color it was filled with. Clones
/// share the same surface.
#[derive(Clone, Default)]
pub struct MemorySurface {
    fill: Rc<Cell<Option<Color>>>,
    paints: Rc<Cell<usize>>,
}

impl MemorySurface {
    /// Create a surface that was never painted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last fill color.
    pub fn fill(&self) -> Option<Color> {
        self.fill.get()
    }

    /// The number of times the surface was painted.
    pub fn paints(&self) -> usize {
        self.paints.get()
    }
}

impl Surface for MemorySurface {
    fn set_fill_color(&mut self, color: Color) {
        self.fill.set(Some(color));
        self.paints.set(self.paints.get() + 1);
    }
}

/// What the hub is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum State {
    /// Waiting for a controller to change.
    #[default]
    Idle,
    /// Pushing a color to the controllers and the surface.
    Propagating,
}

/// Holds the hub in [`State::Propagating`] until dropped.
struct Propagating<'a> {
    state: &'a Cell<State>,
}

impl<'a> Propagating<'a> {
    fn enter(state: &'a Cell<State>, source: Option<ControllerId>) -> Result<Self> {
        if state.get() == State::Propagating {
            return Err(Error::Reentrant(source));
        }
        state.set(State::Propagating);
        Ok(Self { state })
    }
}

impl Drop for Propagating<'_> {
    fn drop(&mut self) {
        self.state.set(State::Idle);
    }
}

/// The outcome of one propagation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Propagation {
    /// The controller that changed, or `None` when the color was set on the
    /// hub directly.
    pub source: Option<ControllerId>,
    /// The color that was broadcast.
    pub color: Color,
    /// The models of the controllers that were written to.
    pub updated: Models,
}

/// Owns the controllers of one color and keeps them synchronized.
///
/// Controllers written through [`Hub::controllers`] still notify the hub.
pub struct Hub {
    controllers: Vec<ModelController>,
    surface: RefCell<Box<dyn Surface>>,
    state: Cell<State>,
    color: Cell<Color>,
    propagations: Cell<usize>,
    /// The last slider values seen for each controller.
    shown: RefCell<Vec<Vec<i32>>>,
}

impl Hub {
    /// Create a hub over the final list of `controllers`, connect their
    /// sliders to it and show `initial` on every controller and on
    /// `surface`.
    pub fn new(
        mut controllers: Vec<ModelController>,
        surface: Box<dyn Surface>,
        initial: Color,
    ) -> Result<Rc<Hub>> {
        if controllers.is_empty() {
            return Err(Error::NoControllers);
        }

        let shown: Vec<Vec<i32>> = controllers
            .iter()
            .map(|c| vec![0; c.model().channel_count()])
            .collect();

        let hub = Rc::new_cyclic(|hub: &Weak<Hub>| {
            for (index, controller) in controllers.iter_mut().enumerate() {
                controller.attach(HubLink::new(hub.clone(), ControllerId(index)));
            }

            Hub {
                controllers,
                surface: RefCell::new(surface),
                state: Cell::new(State::Idle),
                color: Cell::new(initial),
                propagations: Cell::new(0),
                shown: RefCell::new(shown),
            }
        });

        hub.set_color(initial)?;

        Ok(hub)
    }

    /// The registered controllers, in registration order.
    pub fn controllers(&self) -> &[ModelController] {
        &self.controllers
    }

    /// The controller registered under `id`.
    pub fn controller(&self, id: ControllerId) -> Option<&ModelController> {
        self.controllers.get(id.index())
    }

    /// The id of the first controller for `model`.
    pub fn find(&self, model: ColorModel) -> Option<ControllerId> {
        self.controllers
            .iter()
            .position(|c| c.model() == model)
            .map(ControllerId)
    }

    /// The last color that was broadcast.
    pub fn color(&self) -> Color {
        self.color.get()
    }

    /// What the hub is doing.
    pub fn state(&self) -> State {
        self.state.get()
    }

    /// The number of propagations that ran, including the initial one.
    pub fn propagations(&self) -> usize {
        self.propagations.get()
    }

    /// The sliders of `source` moved: push its color to every other
    /// controller and to the surface. `source` itself is left untouched.
    pub fn controller_changed(&self, source: ControllerId) -> Result<Propagation> {
        self.propagate_from(source, None)
    }

    /// Show `color` on every controller and on the surface.
    pub fn set_color(&self, color: Color) -> Result<Propagation> {
        let _propagating = Propagating::enter(&self.state, None)?;
        self.color.set(color);
        Ok(self.broadcast(None, color))
    }

    /// One slider of `source` moved to `value`.
    pub(crate) fn slider_moved(
        &self,
        source: ControllerId,
        channel: usize,
        value: i32,
    ) -> Result<Propagation> {
        self.propagate_from(source, Some((channel, value)))
    }

    fn propagate_from(
        &self,
        source: ControllerId,
        moved: Option<(usize, i32)>,
    ) -> Result<Propagation> {
        let controller = self
            .controller(source)
            .ok_or(Error::UnknownController(source))?;
        let _propagating = Propagating::enter(&self.state, Some(source))?;

        let color = controller.color_of(&self.source_values(source, moved));
        self.color.set(color);

        Ok(self.broadcast(Some(source), color))
    }

    /// The slider values of `source`. While the UI holds its group, the last
    /// values seen are used with the slider that moved applied on top.
    fn source_values(&self, source: ControllerId, moved: Option<(usize, i32)>) -> Vec<i32> {
        let mut shown = self.shown.borrow_mut();
        let values = &mut shown[source.index()];

        match self.controllers[source.index()].try_slider_values() {
            Some(fresh) => *values = fresh,
            None => {
                debug!("{source:?} group is borrowed, using its last values");
                if let Some((channel, value)) = moved {
                    if let Some(slot) = values.get_mut(channel) {
                        *slot = clamp_channel(value);
                    }
                }
            }
        }

        values.clone()
    }

    fn broadcast(&self, source: Option<ControllerId>, color: Color) -> Propagation {
        debug!("propagating {color} from {source:?}");

        let mut updated = Models::empty();
        for (index, controller) in self.controllers.iter().enumerate() {
            if source == Some(ControllerId(index)) {
                continue;
            }

            match controller.show_muted(color) {
                Ok(values) => {
                    trace!("{:?} controller now shows {values:?}", controller.model());
                    self.shown.borrow_mut()[index] = values;
                    updated |= controller.model().flag();
                }
                Err(err) => warn!("{err}, it keeps its previous values"),
            }
        }

        self.surface.borrow_mut().set_fill_color(color);
        self.propagations.set(self.propagations.get() + 1);

        Propagation {
            source,
            color,
            updated,
        }
    }
}
