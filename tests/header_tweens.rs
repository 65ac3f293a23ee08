use carbon_bank::{Keyframe, Tween, TweenableProperty, interpolate, tween_keyframes};

fn header_layer() -> Vec<Tween> {
    // A typical parallax layer: drifts up while fading out over the header.
    vec![
        Tween {
            property: TweenableProperty::Y,
            keyframes: vec![
                Keyframe {
                    time: 0.0,
                    value: 0.0,
                },
                Keyframe {
                    time: 1.0,
                    value: -0.4,
                },
            ],
        },
        Tween {
            property: TweenableProperty::Opacity,
            keyframes: vec![
                Keyframe {
                    time: 0.6,
                    value: 1.0,
                },
                Keyframe {
                    time: 0.9,
                    value: 0.0,
                },
            ],
        },
    ]
}

fn sample(tweens: &[Tween], property: TweenableProperty, time: f64) -> f64 {
    interpolate(time, tween_keyframes(tweens, property, time))
}

#[test]
fn layer_samples_match_hand_computed_values() {
    let tweens = header_layer();

    assert_eq!(sample(&tweens, TweenableProperty::Y, 0.0), 0.0);
    assert_eq!(sample(&tweens, TweenableProperty::Y, 0.5), -0.2);
    assert_eq!(sample(&tweens, TweenableProperty::Y, 1.0), -0.4);

    // Before its first keyframe the opacity track brackets [{0,1},{0.6,1}].
    assert_eq!(sample(&tweens, TweenableProperty::Opacity, 0.3), 1.0);
    assert_eq!(sample(&tweens, TweenableProperty::Opacity, 0.75), 0.5);
    assert_eq!(sample(&tweens, TweenableProperty::Opacity, 0.9), 0.0);
}

#[test]
fn untweened_properties_rest_at_their_defaults() {
    let tweens = header_layer();
    for time in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(sample(&tweens, TweenableProperty::X, time), 0.0);
        assert_eq!(sample(&tweens, TweenableProperty::Scale, time), 1.0);
    }
}
