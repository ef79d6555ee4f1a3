//! Declarative animation descriptions.
//!
//! A [`Timeline`] is data: a set of property tracks sharing one duration, delay, easing and
//! repeat mode. [`Timeline::to_css`] is the only consumer; it turns any timeline into a CSS
//! `@keyframes` rule plus a class carrying the `animation` shorthand.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
}

impl Property {
    fn is_transform(self) -> bool {
        !matches!(self, Property::Opacity)
    }

    fn transform_fn(self, value: f64) -> String {
        match self {
            Property::Opacity => String::new(),
            Property::TranslateX => format!("translateX({}px)", num(value)),
            Property::TranslateY => format!("translateY({}px)", num(value)),
            Property::Scale => format!("scale({})", num(value)),
            Property::Rotate => format!("rotate({}deg)", num(value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Infinite,
}

/// Values of one property, spread evenly from 0% to 100%.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub property: Property,
    pub values: Vec<f64>,
}

impl Track {
    pub fn new(property: Property, values: impl Into<Vec<f64>>) -> Self {
        Self {
            property,
            values: values.into(),
        }
    }

    fn offsets(&self) -> impl Iterator<Item = f64> + '_ {
        let last = self.values.len().saturating_sub(1).max(1) as f64;
        (0..self.values.len()).map(move |i| i as f64 * 100.0 / last)
    }

    /// Linear interpolation of the track at `offset` percent.
    fn sample(&self, offset: f64) -> Option<f64> {
        match self.values.as_slice() {
            [] => None,
            [only] => Some(*only),
            values => {
                let span = 100.0 / (values.len() - 1) as f64;
                let position = (offset / span).clamp(0.0, (values.len() - 1) as f64);
                let lower = position.floor() as usize;
                let upper = (lower + 1).min(values.len() - 1);
                let t = position - lower as f64;
                Some(values[lower] + (values[upper] - values[lower]) * t)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub name: &'static str,
    pub tracks: Vec<Track>,
    /// Seconds.
    pub duration: f64,
    /// Seconds.
    pub delay: f64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl Timeline {
    pub fn new(name: &'static str, duration: f64) -> Self {
        Self {
            name,
            tracks: Vec::new(),
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
            repeat: Repeat::Once,
        }
    }

    pub fn track(mut self, property: Property, values: impl Into<Vec<f64>>) -> Self {
        self.tracks.push(Track::new(property, values));
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn infinite(mut self) -> Self {
        self.repeat = Repeat::Infinite;
        self
    }

    /// Delay for the `index`-th child of a staggered list.
    pub fn stagger_delay(&self, index: usize, step: f64) -> f64 {
        round(self.delay + index as f64 * step)
    }

    /// Stop offsets (percent) across all tracks, ascending and deduplicated.
    fn stops(&self) -> Vec<f64> {
        let mut stops: Vec<f64> = self
            .tracks
            .iter()
            .flat_map(|t| t.offsets())
            .map(round)
            .collect();
        stops.sort_by(|a, b| a.total_cmp(b));
        stops.dedup();
        stops
    }

    /// The `animation` shorthand value for this timeline.
    pub fn animation(&self) -> String {
        let count = match self.repeat {
            Repeat::Once => "1",
            Repeat::Infinite => "infinite",
        };
        format!(
            "{} {}s {} {}s {} both",
            self.name,
            num(self.duration),
            self.easing.as_css(),
            num(self.delay),
            count
        )
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let _ = writeln!(css, "@keyframes {} {{", self.name);
        for stop in self.stops() {
            let mut declarations = Vec::new();
            let mut transforms = Vec::new();
            for track in &self.tracks {
                let Some(value) = track.sample(stop) else {
                    continue;
                };
                if track.property.is_transform() {
                    transforms.push(track.property.transform_fn(value));
                } else {
                    declarations.push(format!("opacity: {}", num(value)));
                }
            }
            if !transforms.is_empty() {
                declarations.push(format!("transform: {}", transforms.join(" ")));
            }
            let _ = writeln!(css, "  {}% {{ {}; }}", num(stop), declarations.join("; "));
        }
        css.push_str("}\n");
        let _ = writeln!(css, ".{} {{ animation: {}; }}", self.name, self.animation());
        css
    }
}

/// Timelines used by the site.
pub fn presets() -> Vec<Timeline> {
    vec![
        Timeline::new("fade-in-up", 0.6)
            .track(Property::Opacity, [0.0, 1.0])
            .track(Property::TranslateY, [20.0, 0.0]),
        Timeline::new("slide-in-left", 0.4)
            .track(Property::Opacity, [0.0, 1.0])
            .track(Property::TranslateX, [-20.0, 0.0]),
        Timeline::new("pulse", 2.0)
            .track(Property::Scale, [1.0, 1.05, 1.0])
            .easing(Easing::EaseInOut)
            .infinite(),
        Timeline::new("glow", 5.0)
            .track(Property::Opacity, [0.5, 0.8, 0.5])
            .easing(Easing::EaseInOut)
            .infinite(),
        Timeline::new("sway", 6.0)
            .track(Property::Rotate, [0.0, 2.0, 0.0, -2.0, 0.0])
            .easing(Easing::EaseInOut)
            .infinite(),
        Timeline::new("cursor-beat", 1.5)
            .track(Property::Scale, [1.0, 1.2, 1.0])
            .track(Property::Opacity, [0.7, 1.0, 0.7])
            .easing(Easing::Linear)
            .infinite(),
    ]
}

/// All preset timelines as one stylesheet.
pub fn stylesheet() -> String {
    presets().iter().map(Timeline::to_css).collect()
}

fn round(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn num(value: f64) -> String {
    let value = round(value);
    if value == 0.0 {
        // avoids "-0"
        return "0".into();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_in_up_renders_two_stops() {
        let timeline = presets().remove(0);
        assert_eq!(
            timeline.to_css(),
            "@keyframes fade-in-up {\n  \
             0% { opacity: 0; transform: translateY(20px); }\n  \
             100% { opacity: 1; transform: translateY(0px); }\n\
             }\n\
             .fade-in-up { animation: fade-in-up 0.6s ease-out 0s 1 both; }\n"
        );
    }

    #[test]
    fn tracks_with_different_lengths_are_interpolated() {
        let timeline = Timeline::new("mix", 1.0)
            .track(Property::Opacity, [0.0, 1.0])
            .track(Property::Scale, [1.0, 2.0, 1.0]);
        let css = timeline.to_css();
        assert!(css.contains("  50% { opacity: 0.5; transform: scale(2); }"), "{css}");
        assert!(css.contains("  100% { opacity: 1; transform: scale(1); }"), "{css}");
    }

    #[test]
    fn infinite_timelines_use_infinite_count() {
        let glow = presets().into_iter().find(|t| t.name == "glow").unwrap();
        assert_eq!(glow.animation(), "glow 5s ease-in-out 0s infinite both");
    }

    #[test]
    fn stagger_delay_steps_from_base() {
        let timeline = Timeline::new("x", 0.5).delay(0.2);
        let delays: Vec<f64> = (0..3).map(|i| timeline.stagger_delay(i, 0.1)).collect();
        assert_eq!(delays, vec![0.2, 0.3, 0.4]);
    }

    #[test]
    fn five_value_track_spreads_quarters() {
        let sway = presets().into_iter().find(|t| t.name == "sway").unwrap();
        let css = sway.to_css();
        for stop in ["0%", "25%", "50%", "75%", "100%"] {
            assert!(css.contains(&format!("  {stop} {{")), "missing {stop} in {css}");
        }
        assert!(css.contains("75% { transform: rotate(-2deg); }"));
    }

    #[test]
    fn stylesheet_contains_every_preset() {
        let css = stylesheet();
        for timeline in presets() {
            assert!(css.contains(&format!("@keyframes {} {{", timeline.name)));
        }
    }
}
