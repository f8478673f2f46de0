//! Controllers bind a channel group to a color model and translate between
//! the group's slider values and the canonical [`Color`].

use std::cell::RefCell;
use std::rc::Weak;

use log::error;

use crate::channel::{ChannelGroup, SharedGroup};
use crate::hub::{Hub, Propagation};
use crate::models::{Channels, Cmyk, ColorModel, Rgb, Xyz};
use crate::{Color, Error, Result};

/// Identifies a controller within its hub. Ids follow registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControllerId(pub(crate) usize);

impl ControllerId {
    /// The position of the controller in the hub.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A controller's back-reference to the hub it is registered with.
#[derive(Clone)]
pub struct HubLink {
    hub: Weak<Hub>,
    id: ControllerId,
}

impl HubLink {
    pub(crate) fn new(hub: Weak<Hub>, id: ControllerId) -> Self {
        Self { hub, id }
    }

    /// The id of the controller this link belongs to.
    pub fn id(&self) -> ControllerId {
        self.id
    }

    /// Tell the hub that the controller changed.
    pub fn notify(&self) -> Result<Propagation> {
        let hub = self.hub.upgrade().ok_or(Error::HubDropped)?;
        hub.controller_changed(self.id)
    }

    /// Slider callbacks can not return errors, so they are logged.
    fn dispatch(&self, channel: usize, value: i32) {
        let result = self
            .hub
            .upgrade()
            .ok_or(Error::HubDropped)
            .and_then(|hub| hub.slider_moved(self.id, channel, value));
        if let Err(err) = result {
            error!("change notification was dropped: {err}");
        }
    }
}

/// Keeps the notifications of a channel group blocked until dropped.
#[must_use = "notifications are unblocked as soon as the guard is dropped"]
pub struct MuteGuard<'a> {
    group: &'a RefCell<ChannelGroup>,
    previous: Vec<bool>,
}

impl Drop for MuteGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut group) = self.group.try_borrow_mut() {
            group.restore_notifications(&self.previous);
        } else {
            error!("channel group was borrowed while unmuting");
        }
    }
}

/// Binds a channel group to a [`ColorModel`].
pub struct ModelController {
    model: ColorModel,
    group: SharedGroup,
    link: Option<HubLink>,
}

impl ModelController {
    /// Create a controller for `model` over `group`. The group must have
    /// exactly one slider per channel of the model.
    pub fn new(model: ColorModel, group: SharedGroup) -> Result<Self> {
        let found = group.borrow().len();
        let expected = model.channel_count();
        if found != expected {
            return Err(Error::ChannelCount {
                model,
                expected,
                found,
            });
        }

        Ok(Self {
            model,
            group,
            link: None,
        })
    }

    /// The color model of this controller.
    pub fn model(&self) -> ColorModel {
        self.model
    }

    /// The channel group this controller reads and writes.
    pub fn group(&self) -> &SharedGroup {
        &self.group
    }

    /// The link to the hub, once registered.
    pub fn link(&self) -> Option<&HubLink> {
        self.link.as_ref()
    }

    /// The current slider values, in channel order.
    pub fn slider_values(&self) -> Vec<i32> {
        self.group.borrow().values()
    }

    /// Write slider values in channel order. The group clamps them.
    pub fn set_slider_values(&self, values: &[i32]) {
        self.group.borrow_mut().set_values(values);
    }

    /// The current slider values, or `None` while the group is mutably
    /// borrowed, which is the case while the UI writes to it.
    pub fn try_slider_values(&self) -> Option<Vec<i32>> {
        self.group.try_borrow().ok().map(|group| group.values())
    }

    /// The canonical color currently shown by the sliders.
    pub fn rgb(&self) -> Color {
        self.color_of(&self.slider_values())
    }

    /// The canonical color for slider values of this controller's model.
    pub fn color_of(&self, values: &[i32]) -> Color {
        match self.model {
            ColorModel::Rgb => Color::from_channels(values),
            ColorModel::Xyz => Xyz::from_slider_values(values).to_rgb().to_color(),
            ColorModel::Cmyk => Cmyk::from_slider_values(values).to_rgb().to_color(),
        }
    }

    /// Show `color` on the sliders, expressed in this controller's model.
    pub fn set_rgb(&self, color: Color) {
        let values = match self.model {
            ColorModel::Rgb => color.to_channels().to_vec(),
            ColorModel::Xyz => Rgb::from(color).to_xyz().to_slider_values(),
            ColorModel::Cmyk => Rgb::from(color).to_cmyk().to_slider_values(),
        };
        self.set_slider_values(&values);
    }

    /// Block the notifications of the channel group until the returned
    /// guard is dropped.
    pub fn mute(&self) -> MuteGuard<'_> {
        let previous = self.group.borrow_mut().block_notifications(true);
        MuteGuard {
            group: &self.group,
            previous,
        }
    }

    /// Show `color` with notifications blocked and return the written slider
    /// values. Fails instead of panicking when the group is borrowed.
    pub(crate) fn show_muted(&self, color: Color) -> Result<Vec<i32>> {
        if self.group.try_borrow_mut().is_err() {
            return Err(Error::GroupBusy(self.model));
        }

        let _muted = self.mute();
        self.set_rgb(color);
        Ok(self.slider_values())
    }

    /// Tell the hub that this controller changed. Registration connects the
    /// group's sliders to the hub directly, so this is only needed by UIs
    /// that deliver their own notifications.
    pub fn notify_changed(&self) -> Result<Propagation> {
        self.link
            .as_ref()
            .ok_or(Error::Unregistered(self.model))?
            .notify()
    }

    pub(crate) fn attach(&mut self, link: HubLink) {
        let callback = link.clone();
        self.group
            .borrow_mut()
            .connect(move |channel, value| callback.dispatch(channel, value));
        self.link = Some(link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{MemorySlider, Slider};

    fn controller(model: ColorModel) -> (ModelController, Vec<MemorySlider>) {
        let mut sliders = vec![];
        let group = ChannelGroup::for_model(model, |_| {
            let slider = MemorySlider::new();
            sliders.push(slider.clone());
            Box::new(slider)
        });
        let controller = ModelController::new(model, group.into_shared()).unwrap();
        (controller, sliders)
    }

    #[test]
    fn group_size_must_match_the_model() {
        let group = ChannelGroup::for_model(ColorModel::Rgb, |_| Box::new(MemorySlider::new()));
        let result = ModelController::new(ColorModel::Cmyk, group.into_shared());
        assert_eq!(
            result.err(),
            Some(Error::ChannelCount {
                model: ColorModel::Cmyk,
                expected: 4,
                found: 3,
            })
        );
    }

    #[test]
    fn rgb_is_verbatim() {
        let (c, sliders) = controller(ColorModel::Rgb);
        c.set_rgb(Color::new(100, 100, 200));
        assert_eq!(c.slider_values(), vec![100, 100, 200]);
        assert_eq!(sliders[2].get(), 200);
        assert_eq!(c.rgb(), Color::new(100, 100, 200));
    }

    #[test]
    fn out_of_range_writes_are_clamped() {
        let (c, _) = controller(ColorModel::Rgb);
        c.set_rgb(Color::clamped(300, -10, 255));
        assert_eq!(c.slider_values(), vec![255, 0, 255]);

        c.set_slider_values(&[1000, -1, 17]);
        assert_eq!(c.slider_values(), vec![255, 0, 17]);
        assert_eq!(c.rgb(), Color::new(255, 0, 17));
    }

    #[test]
    fn xyz_converts() {
        let (c, _) = controller(ColorModel::Xyz);
        let color = Color::new(100, 100, 200);
        c.set_rgb(color);
        assert_eq!(
            c.slider_values(),
            Rgb::from(color).to_xyz().to_slider_values()
        );

        c.set_slider_values(&[0, 0, 0]);
        assert_eq!(c.rgb(), Color::new(0, 0, 0));
    }

    #[test]
    fn cmyk_converts() {
        let (c, _) = controller(ColorModel::Cmyk);
        c.set_rgb(Color::new(255, 255, 255));
        // The key is clamped to 0.001, which truncates to 0.
        assert_eq!(c.slider_values(), vec![0, 0, 0, 0]);
        assert_eq!(c.rgb(), Color::new(255, 255, 255));

        c.set_slider_values(&[0, 255, 255, 0]);
        assert_eq!(c.rgb(), Color::new(255, 0, 0));

        c.set_slider_values(&[0, 0, 0, 255]);
        assert_eq!(c.rgb(), Color::new(0, 0, 0));
    }

    #[test]
    fn busy_group_is_reported() {
        let (c, _) = controller(ColorModel::Cmyk);
        let group = c.group().clone();
        let _writing = group.borrow_mut();
        assert_eq!(c.try_slider_values(), None);
        assert_eq!(
            c.show_muted(Color::new(1, 2, 3)),
            Err(Error::GroupBusy(ColorModel::Cmyk))
        );
        // Converting values does not touch the group.
        assert_eq!(c.color_of(&[0, 255, 255, 0]), Color::new(255, 0, 0));
    }

    #[test]
    fn mute_is_scoped() {
        let (c, sliders) = controller(ColorModel::Xyz);
        let mut last = sliders[2].clone();
        last.block_notifications(true);

        {
            let _muted = c.mute();
            assert!(sliders.iter().all(MemorySlider::is_blocked));
            c.set_rgb(Color::new(10, 20, 30));
        }

        assert!(!sliders[0].is_blocked());
        assert!(!sliders[1].is_blocked());
        assert!(sliders[2].is_blocked());
        assert!(sliders.iter().all(|s| s.notifications() == 0));
    }

    #[test]
    fn mute_is_released_on_panic() {
        let (c, sliders) = controller(ColorModel::Rgb);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _muted = c.mute();
            panic!("update failed");
        }));

        assert!(result.is_err());
        assert!(sliders.iter().all(|s| !s.is_blocked()));
    }

    #[test]
    fn unregistered_controller_fails_loudly() {
        let (c, sliders) = controller(ColorModel::Xyz);
        assert!(c.link().is_none());
        assert_eq!(
            c.notify_changed().err(),
            Some(Error::Unregistered(ColorModel::Xyz))
        );

        // Without a hub the sliders are not connected to anything.
        sliders[0].drag(12);
        assert_eq!(sliders[0].notifications(), 1);
    }
}
