mod settings;
mod render;

use std::rc::Rc;

use anyhow::Context;
use log::{info, warn};
use trichrome::{ChannelGroup, Color, ColorModel, Hub, MemorySlider, MemorySurface, ModelController};

use settings::{Drag, Settings};
use render::render_strip;

/// Slider groups for every model, wired to one hub.
struct Panel {
    groups: Vec<(ColorModel, Vec<MemorySlider>)>,
    surface: MemorySurface,
    hub: Rc<Hub>,
}

impl Panel {
    fn new(initial: Color) -> anyhow::Result<Self> {
        let mut groups = vec![];
        let mut controllers = vec![];

        for model in ColorModel::ALL {
            let mut sliders = vec![];
            let group = ChannelGroup::for_model(model, |_| {
                let slider = MemorySlider::new();
                sliders.push(slider.clone());
                Box::new(slider)
            });
            controllers.push(ModelController::new(model, group.into_shared())?);
            groups.push((model, sliders));
        }

        let surface = MemorySurface::new();
        let hub = Hub::new(controllers, Box::new(surface.clone()), initial)?;

        Ok(Self {
            groups,
            surface,
            hub,
        })
    }

    fn drag(&self, drag: &Drag) {
        let model = ColorModel::from(drag.group);
        let slider = self
            .groups
            .iter()
            .find(|(m, _)| *m == model)
            .and_then(|(_, sliders)| sliders.get(drag.channel));

        match slider {
            Some(slider) => slider.drag(drag.value),
            None => warn!("{model:?} has no channel {}, skipping", drag.channel),
        }
    }

    fn log_sliders(&self) {
        for (model, sliders) in &self.groups {
            let values = model
                .labels()
                .iter()
                .zip(sliders)
                .map(|(label, slider)| format!("{label}={}", slider.get()))
                .collect::<Vec<_>>();
            info!("{model:?}: {}", values.join(" "));
        }
    }

    fn preview(&self) -> Color {
        self.surface
            .fill()
            .unwrap_or_else(|| self.hub.color())
    }
}

fn run(settings: &Settings) -> anyhow::Result<()> {
    let initial: Color = settings.initial_color.parse()?;
    let panel = Panel::new(initial)?;

    info!("seeded with {initial}");
    panel.log_sliders();

    let mut colors = vec![panel.preview()];
    for drag in &settings.drags {
        info!("dragging {:?} channel {} to {}", drag.group, drag.channel, drag.value);
        panel.drag(drag);
        panel.log_sliders();
        colors.push(panel.preview());
    }

    render_strip(&colors, settings.swatch_size)?
        .save(&settings.output)
        .with_context(|| format!("could not write swatches to {}", settings.output))?;

    info!(
        "wrote {} swatches after {} propagations to {}",
        colors.len(),
        panel.hub.propagations(),
        settings.output
    );

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let settings = settings::get_config().context("could not read swatch.json")?;

    env_logger::Builder::new()
        .filter_level(settings.log_level.parse()?)
        .init();

    run(&settings)
}
