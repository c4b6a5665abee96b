use crate::foundation::math::Rng64;
use crate::style::palette::{BACKGROUND_SWATCHES, FOREGROUND_SWATCHES};
use crate::style::params::{AnimationFlags, AspectRatio, BorderStyleParams, MotifStyle};

/// Draw a plausible startup parameter set.
///
/// Colors come from the fixed swatches; numeric controls are drawn from narrower ranges than the
/// control limits so the first frame looks balanced. Animation always starts off.
pub fn randomize(rng: &mut Rng64) -> BorderStyleParams {
    let canvas_color = *rng.choose(&BACKGROUND_SWATCHES);
    let border_color = *rng.choose(&FOREGROUND_SWATCHES);
    let style = *rng.choose(&MotifStyle::ALL);
    let border_width = f64::from(rng.range_inclusive(20, 60));
    let element_size = f64::from(rng.range_inclusive(10, 25));
    let element_spacing = f64::from(rng.range_inclusive(2, 10));
    let border_layers = rng.range_inclusive(1, 3);
    let aspect_ratio = *rng.choose(&AspectRatio::ALL);
    let flip_orientation = rng.chance(0.5);
    let invert_colors = rng.chance(0.3);

    BorderStyleParams {
        aspect_ratio,
        flip_orientation,
        canvas_color,
        border_color,
        border_width,
        style,
        element_size,
        element_spacing,
        border_layers,
        invert_colors,
        animation: AnimationFlags::default(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/randomize.rs"]
mod tests;
