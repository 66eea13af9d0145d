//! The hand-tuned show of the reference skates

use embassy_time::Duration;

use crate::{
    color::{BLUE, ORANGE, PURPLE, RED},
    config::SkateConfig,
    effect::{
        ChaseEffect, CometEffect, CometPaint, EffectSlot, SparkleEffect, SweepChaseEffect,
        SweepEffect,
    },
    error::ConfigError,
    flash::StartupAnimation,
    sequencer::{Entry, Playlist},
    topology::{SKATE_PIXELS, SkateTopologies, Topology},
};

/// Step interval of the power on comet
const POWER_UP_SPEED: Duration = Duration::from_millis(10);
/// One wheel revolution per second at the sweep's hue step
const RAINBOW_SPEED: Duration = Duration::from_millis(31);
const SPARKLE_SPEED: Duration = Duration::from_millis(10);
const SPARKLE2_SPEED: Duration = Duration::from_millis(50);

/// Build the skate playlist, bound to `maps`
pub fn skate_playlist(
    maps: &SkateTopologies,
) -> Result<Playlist<'_, SKATE_PIXELS>, ConfigError> {
    let forward = maps.get(Topology::Forward);
    let reverse = maps.get(Topology::Reverse);
    let around = maps.get(Topology::Around);
    let radiate = maps.get(Topology::Radiate);

    let rainbow = SweepEffect::new(forward).with_speed(RAINBOW_SPEED);
    let rainbow_chase = SweepChaseEffect::new(forward, 4, 15)
        .with_hue_step(10)
        .with_tempo_factor(0.05);
    let rainbow_chase2 = SweepChaseEffect::new(around, 10, 1)
        .with_hue_step(18)
        .with_tempo_factor(0.1);
    let chase = ChaseEffect::new(around, RED, 1, 3).with_tempo_factor(0.3);
    let lava = CometEffect::new(radiate, CometPaint::Solid(ORANGE))
        .with_tail_length(40)
        .with_tempo_factor(0.1);
    let rainbow_comet = CometEffect::new(around, CometPaint::Wheel { offset: 0, step: 1 })
        .with_tail_length(32)
        .with_bounce(true)
        .with_tempo_factor(0.1);
    let rainbow_comet2 = CometEffect::new(reverse, CometPaint::Wheel { offset: 80, step: 1 })
        .with_tail_length(64)
        .with_bounce(true)
        .with_tempo_factor(0.5);

    let sparkle = SparkleEffect::new(reverse, BLUE, 10).with_speed(SPARKLE_SPEED);
    let strum = CometEffect::new(radiate, CometPaint::Wheel { offset: 50, step: 4 })
        .with_tail_length(25)
        .with_tempo_factor(0.1);

    let sparkle2 = SparkleEffect::new(forward, PURPLE, 4)
        .with_seed(0x5EED)
        .with_speed(SPARKLE2_SPEED);
    let rainbow_comet3 = CometEffect::new(forward, CometPaint::Wheel { offset: 80, step: 4 })
        .with_tail_length(25)
        .with_tempo_factor(0.1);

    Ok(Playlist::new([
        Entry::single(rainbow),
        Entry::single(rainbow_chase),
        Entry::single(rainbow_chase2),
        Entry::single(chase),
        Entry::single(lava),
        Entry::single(rainbow_comet),
        Entry::single(rainbow_comet2),
        Entry::group([EffectSlot::from(sparkle), EffectSlot::from(strum)])?,
        Entry::group([
            EffectSlot::from(sparkle2),
            EffectSlot::from(rainbow_comet3),
        ])?,
    ])?
    .with_auto_clear(true)
    .with_auto_reset(true))
}

/// Orange comet bouncing out from the middle, played once at power on
pub fn power_up<'a>(
    maps: &'a SkateTopologies,
    config: &SkateConfig,
) -> StartupAnimation<'a, SKATE_PIXELS> {
    let comet = CometEffect::new(maps.get(Topology::Radiate), CometPaint::Solid(ORANGE))
        .with_tail_length(40)
        .with_bounce(true)
        .with_speed(POWER_UP_SPEED);
    StartupAnimation::new(comet, config.startup_duration)
}
