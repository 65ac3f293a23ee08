/// Animatable properties of a parallax layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TweenableProperty {
    X,
    Y,
    Opacity,
    Scale,
}

impl TweenableProperty {
    /// Value a property holds when it has no tween: positions rest at the
    /// origin, opacity and scale at full.
    pub fn default_value(self) -> f64 {
        match self {
            Self::X | Self::Y => 0.0,
            Self::Opacity | Self::Scale => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::X => "x position",
            Self::Y => "y position",
            Self::Opacity => "opacity",
            Self::Scale => "scale",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    pub time: f64,
    pub value: f64,
}

/// One animation track. Keyframes are not required to be sorted by time;
/// bracket lookup behaves as if they were.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    pub property: TweenableProperty,
    pub keyframes: Vec<Keyframe>,
}

/// Bracketing keyframes for `property` at `time`, using the property's
/// default when no tween is present.
pub fn tween_keyframes(
    tweens: &[Tween],
    property: TweenableProperty,
    time: f64,
) -> (Keyframe, Keyframe) {
    let tween = tweens.iter().find(|t| t.property == property);
    keyframes_bracketing(tween, time, property.default_value())
}

/// `from` is the keyframe with the greatest time <= `time`, `to` the one
/// with the least time >= `time`. The picks are independent: either side
/// falls back to a synthetic keyframe (`{0, default}` / `{1, default}`)
/// when no stored keyframe qualifies, which can produce a discontinuous
/// bracket. That is accepted behavior, not an error.
pub fn keyframes_bracketing(
    tween: Option<&Tween>,
    time: f64,
    default: f64,
) -> (Keyframe, Keyframe) {
    let start = Keyframe {
        time: 0.0,
        value: default,
    };
    let end = Keyframe {
        time: 1.0,
        value: default,
    };

    let Some(tween) = tween else {
        return (start, end);
    };

    let from = tween
        .keyframes
        .iter()
        .filter(|k| k.time <= time)
        .max_by(|a, b| a.time.total_cmp(&b.time))
        .copied()
        .unwrap_or(start);

    let to = tween
        .keyframes
        .iter()
        .filter(|k| k.time >= time)
        .min_by(|a, b| a.time.total_cmp(&b.time))
        .copied()
        .unwrap_or(end);

    (from, to)
}

/// Unclamped linear interpolation across a bracket. A degenerate bracket
/// (equal times) holds `from.value`.
pub fn interpolate(time: f64, (from, to): (Keyframe, Keyframe)) -> f64 {
    if to.time == from.time {
        return from.value;
    }
    from.value + (time - from.time) / (to.time - from.time) * (to.value - from.value)
}
