//! Groups of sliders, one slider per channel of a color model.
//!
//! Sliders are supplied by the UI toolkit through the [`Slider`] trait. A
//! [`MemorySlider`] is provided for running without a toolkit.

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::clamp_channel;
use crate::models::ColorModel;

/// The slider capability a UI toolkit has to provide.
pub trait Slider {
    /// The current value of the slider.
    fn value(&self) -> i32;

    /// Move the slider to `value`. Fires the value-changed notification
    /// unless notifications are blocked.
    fn set_value(&mut self, value: i32);

    /// Register a callback fired with the new value every time the value
    /// changes while notifications are not blocked.
    fn on_value_changed(&mut self, callback: Box<dyn FnMut(i32)>);

    /// Block or unblock the value-changed notification. Returns whether
    /// notifications were blocked before the call.
    fn block_notifications(&mut self, block: bool) -> bool;
}

/// A channel group shared between the UI layer and a controller.
pub type SharedGroup = Rc<RefCell<ChannelGroup>>;

struct Channel {
    label: String,
    slider: Box<dyn Slider>,
}

/// A bundle of sliders representing the components of one color model.
/// Every value written through the group is clamped to `0..=255`.
#[derive(Default)]
pub struct ChannelGroup {
    channels: Vec<Channel>,
}

impl ChannelGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group with one labelled slider per channel of `model`. The
    /// `slider` factory is called with each channel label in order.
    pub fn for_model(model: ColorModel, mut slider: impl FnMut(&str) -> Box<dyn Slider>) -> Self {
        let mut group = Self::new();
        for label in model.labels() {
            group.push(*label, slider(label));
        }
        group
    }

    /// Add a slider as the next channel.
    pub fn push(&mut self, label: impl Into<String>, slider: Box<dyn Slider>) {
        self.channels.push(Channel {
            label: label.into(),
            slider,
        });
    }

    /// Wrap the group so it can be shared with a controller.
    pub fn into_shared(self) -> SharedGroup {
        Rc::new(RefCell::new(self))
    }

    /// The number of channels in the group.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if the group has no channels.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// The labels of the channels, in channel order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|c| c.label.as_str())
    }

    /// The current values of the sliders, in channel order.
    pub fn values(&self) -> Vec<i32> {
        self.channels
            .iter()
            .map(|c| clamp_channel(c.slider.value()))
            .collect()
    }

    /// Write one value per channel, in order. Values are clamped, extra
    /// values are ignored and missing values leave their sliders alone.
    pub fn set_values(&mut self, values: &[i32]) {
        self.channels
            .iter_mut()
            .zip(values)
            .for_each(|(channel, value)| channel.slider.set_value(clamp_channel(*value)));
    }

    /// Block or unblock the notifications of every slider. Returns the
    /// previous state of each slider so it can be restored.
    pub fn block_notifications(&mut self, block: bool) -> Vec<bool> {
        self.channels
            .iter_mut()
            .map(|c| c.slider.block_notifications(block))
            .collect()
    }

    /// Restore the states returned by [`ChannelGroup::block_notifications`].
    pub fn restore_notifications(&mut self, previous: &[bool]) {
        self.channels
            .iter_mut()
            .zip(previous)
            .for_each(|(channel, blocked)| {
                channel.slider.block_notifications(*blocked);
            });
    }

    /// Connect `callback` to the value-changed notification of every slider.
    /// The callback receives the channel index and the new value.
    pub(crate) fn connect(&mut self, callback: impl Fn(usize, i32) + Clone + 'static) {
        for (index, channel) in self.channels.iter_mut().enumerate() {
            let callback = callback.clone();
            channel
                .slider
                .on_value_changed(Box::new(move |value| callback(index, value)));
        }
    }
}

#[derive(Default)]
struct SliderState {
    value: i32,
    blocked: bool,
    notifications: usize,
    callbacks: Vec<Box<dyn FnMut(i32)>>,
}

/// A slider that only lives in memory. Clones share the same slider, so the
/// owner of a clone can drag a slider that was handed to a [`ChannelGroup`].
#[derive(Clone, Default)]
pub struct MemorySlider {
    state: Rc<RefCell<SliderState>>,
}

impl MemorySlider {
    /// Create a slider at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value.
    pub fn get(&self) -> i32 {
        self.state.borrow().value
    }

    /// Returns true while notifications are blocked.
    pub fn is_blocked(&self) -> bool {
        self.state.borrow().blocked
    }

    /// The number of value-changed notifications fired so far.
    pub fn notifications(&self) -> usize {
        self.state.borrow().notifications
    }

    /// Move the slider as if the user dragged it.
    pub fn drag(&self, value: i32) {
        let value = clamp_channel(value);

        let mut callbacks = {
            let mut state = self.state.borrow_mut();
            if state.value == value {
                return;
            }
            state.value = value;
            if state.blocked {
                return;
            }
            state.notifications += 1;
            std::mem::take(&mut state.callbacks)
        };

        // Callbacks are free to read this slider while they run.
        for callback in callbacks.iter_mut() {
            callback(value);
        }

        let mut state = self.state.borrow_mut();
        callbacks.append(&mut state.callbacks);
        state.callbacks = callbacks;
    }
}

impl Slider for MemorySlider {
    fn value(&self) -> i32 {
        self.get()
    }

    fn set_value(&mut self, value: i32) {
        self.drag(value);
    }

    fn on_value_changed(&mut self, callback: Box<dyn FnMut(i32)>) {
        self.state.borrow_mut().callbacks.push(callback);
    }

    fn block_notifications(&mut self, block: bool) -> bool {
        std::mem::replace(&mut self.state.borrow_mut().blocked, block)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn group_of(sliders: &[MemorySlider]) -> ChannelGroup {
        let mut group = ChannelGroup::new();
        for (index, slider) in sliders.iter().enumerate() {
            group.push(format!("c{index}"), Box::new(slider.clone()));
        }
        group
    }

    #[test]
    fn values_are_clamped_on_write() {
        let sliders = [MemorySlider::new(), MemorySlider::new(), MemorySlider::new()];
        let mut group = group_of(&sliders);

        group.set_values(&[300, -10, 255]);
        assert_eq!(group.values(), vec![255, 0, 255]);
        assert_eq!(sliders[0].get(), 255);
        assert_eq!(sliders[1].get(), 0);
    }

    #[test]
    fn missing_and_extra_values() {
        let sliders = [MemorySlider::new(), MemorySlider::new()];
        let mut group = group_of(&sliders);

        group.set_values(&[1, 2, 3]);
        assert_eq!(group.values(), vec![1, 2]);

        group.set_values(&[9]);
        assert_eq!(group.values(), vec![9, 2]);
    }

    #[test]
    fn for_model_labels_channels() {
        let mut created = vec![];
        let group = ChannelGroup::for_model(ColorModel::Cmyk, |label| {
            created.push(label.to_string());
            Box::new(MemorySlider::new())
        });

        assert_eq!(group.len(), 4);
        assert_eq!(
            group.labels().collect::<Vec<_>>(),
            vec!["Cyan", "Magenta", "Yellow", "Key"]
        );
        assert_eq!(created, vec!["Cyan", "Magenta", "Yellow", "Key"]);
    }

    #[test]
    fn slider_notifies_only_on_change() {
        let slider = MemorySlider::new();
        let seen = Rc::new(Cell::new(0));

        let mut handle = slider.clone();
        let counter = seen.clone();
        handle.on_value_changed(Box::new(move |value| counter.set(value)));

        slider.drag(10);
        assert_eq!(seen.get(), 10);
        assert_eq!(slider.notifications(), 1);

        slider.drag(10);
        assert_eq!(slider.notifications(), 1);

        slider.drag(1000);
        assert_eq!(seen.get(), 255);
        assert_eq!(slider.notifications(), 2);
    }

    #[test]
    fn blocked_slider_stays_silent() {
        let mut slider = MemorySlider::new();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        slider.on_value_changed(Box::new(move |_| flag.set(true)));

        assert!(!slider.block_notifications(true));
        slider.set_value(42);
        assert_eq!(slider.get(), 42);
        assert!(!fired.get());

        assert!(slider.block_notifications(false));
        slider.set_value(43);
        assert!(fired.get());
    }

    #[test]
    fn callbacks_can_read_the_slider() {
        let slider = MemorySlider::new();
        let seen = Rc::new(Cell::new(0));

        let mut handle = slider.clone();
        let (reader, out) = (slider.clone(), seen.clone());
        handle.on_value_changed(Box::new(move |_| out.set(reader.get())));

        slider.drag(77);
        assert_eq!(seen.get(), 77);

        // The callback survives being invoked.
        slider.drag(78);
        assert_eq!(seen.get(), 78);
    }

    #[test]
    fn connected_callbacks_know_their_channel() {
        let sliders = [MemorySlider::new(), MemorySlider::new(), MemorySlider::new()];
        let mut group = group_of(&sliders);

        let seen = Rc::new(RefCell::new(vec![]));
        let out = seen.clone();
        group.connect(move |channel, value| out.borrow_mut().push((channel, value)));

        sliders[2].drag(30);
        group.set_values(&[5, 0, 30]);

        assert_eq!(*seen.borrow(), vec![(2, 30), (0, 5)]);
    }

    #[test]
    fn block_and_restore_group() {
        let sliders = [MemorySlider::new(), MemorySlider::new()];
        let mut group = group_of(&sliders);

        let mut second = sliders[1].clone();
        second.block_notifications(true);

        let previous = group.block_notifications(true);
        assert_eq!(previous, vec![false, true]);
        assert!(sliders.iter().all(MemorySlider::is_blocked));

        group.restore_notifications(&previous);
        assert!(!sliders[0].is_blocked());
        assert!(sliders[1].is_blocked());
    }
}
