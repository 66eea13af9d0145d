mod tests {
    use embassy_time::{Duration, Instant};
    use skate_lights::{
        ConfigError, EffectSlot, Entry, PixelMap, Playlist,
        color::{BLACK, BLUE, RED},
        effect::{
            ChaseEffect, CometEffect, CometPaint, SparkleEffect, SweepChaseEffect, SweepEffect,
        },
        sequencer::{MAX_ENTRIES, MAX_GROUP},
    };

    const FRAME: Duration = Duration::from_millis(10);

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_playlist_rejects_empty() {
        let result: Result<Playlist<'_, 8>, _> = Playlist::new([]);
        assert_eq!(result.err(), Some(ConfigError::EmptyPlaylist));
    }

    #[test]
    fn test_playlist_rejects_too_many_entries() {
        let map = PixelMap::<8>::identity().unwrap();
        let entries = (0..=MAX_ENTRIES).map(|_| Entry::single(SweepEffect::new(&map)));
        let result = Playlist::new(entries);
        assert_eq!(
            result.err(),
            Some(ConfigError::PlaylistTooLong {
                capacity: MAX_ENTRIES
            })
        );
    }

    #[test]
    fn test_group_rejects_bad_sizes() {
        let map = PixelMap::<8>::identity().unwrap();
        let error = ConfigError::InvalidGroup {
            capacity: MAX_GROUP,
        };

        let empty = Entry::<'_, 8>::group(core::iter::empty());
        assert_eq!(empty.err(), Some(error));

        let oversized = Entry::group(
            (0..=MAX_GROUP).map(|_| EffectSlot::from(SweepEffect::new(&map))),
        );
        assert_eq!(oversized.err(), Some(error));
    }

    #[test]
    fn test_advance_wraps_to_start() {
        let map = PixelMap::<8>::identity().unwrap();
        let mut playlist = Playlist::new([
            Entry::single(SweepEffect::new(&map)),
            Entry::single(ChaseEffect::new(&map, RED, 1, 1)),
            Entry::single(SparkleEffect::new(&map, BLUE, 2)),
        ])
        .unwrap();

        assert_eq!(playlist.len(), 3);
        assert!(!playlist.is_empty());
        assert_eq!(playlist.current_index(), 0);
        for expected in [1, 2, 0] {
            playlist.advance_to_next();
            assert_eq!(playlist.current_index(), expected);
        }
    }

    #[test]
    fn test_auto_clear_blanks_frame_on_entry() {
        let map = PixelMap::<8>::identity().unwrap();
        let mut playlist =
            Playlist::new([Entry::single(SparkleEffect::new(&map, BLUE, 1).with_speed(FRAME))])
                .unwrap();

        let mut frame = [RED; 8];
        playlist.tick(at(0), &mut frame);
        assert_eq!(frame.iter().filter(|&&pixel| pixel == BLUE).count(), 1);
        assert_eq!(frame.iter().filter(|&&pixel| pixel == BLACK).count(), 7);
    }

    #[test]
    fn test_without_auto_clear_frame_is_kept() {
        let map = PixelMap::<8>::identity().unwrap();
        let mut playlist =
            Playlist::new([Entry::single(SparkleEffect::new(&map, BLUE, 1).with_speed(FRAME))])
                .unwrap()
                .with_auto_clear(false);

        let mut frame = [RED; 8];
        playlist.tick(at(0), &mut frame);
        assert_eq!(frame.iter().filter(|&&pixel| pixel == RED).count(), 7);
    }

    #[test]
    fn test_auto_reset_keeps_running() {
        let map = PixelMap::<8>::identity().unwrap();
        let sweep = SweepEffect::new(&map).with_hue_step(128).with_speed(FRAME);
        let mut playlist = Playlist::new([Entry::single(sweep)]).unwrap();

        let mut completed = [BLACK; 8];
        playlist.tick(at(0), &mut completed);
        playlist.tick(at(10), &mut completed);
        let mut next = [BLACK; 8];
        playlist.tick(at(20), &mut next);
        assert_ne!(completed, next);
    }

    #[test]
    fn test_auto_reset_keeps_sweep_chase_hue_drift() {
        let map = PixelMap::<8>::identity().unwrap();
        let chase = SweepChaseEffect::new(&map, 1, 3)
            .with_hue_step(85)
            .with_speed(FRAME);
        let mut playlist = Playlist::new([Entry::single(chase)]).unwrap();

        let mut frames = Vec::new();
        for tick in 0..9 {
            let mut frame = [BLACK; 8];
            playlist.tick(at(tick * 10), &mut frame);
            frames.push(frame);
        }
        // Same scroll offset one period apart, shifted along the wheel
        assert_ne!(frames[0], frames[4]);
        assert_ne!(frames[4], frames[8]);
        assert_ne!(frames[0], frames[8]);
    }

    #[test]
    fn test_auto_reset_keeps_comet_hue_drift() {
        let map = PixelMap::<8>::identity().unwrap();
        let comet = CometEffect::new(&map, CometPaint::Wheel { offset: 0, step: 4 })
            .with_tail_length(3)
            .with_speed(FRAME);
        let mut playlist = Playlist::new([Entry::single(comet)]).unwrap();

        let mut frames = Vec::new();
        for tick in 0..13 {
            let mut frame = [BLACK; 8];
            playlist.tick(at(tick * 10), &mut frame);
            frames.push(frame);
        }
        // The wrap completes on tick 10, tick 11 repeats the position of tick 0
        assert_ne!(frames[0], frames[11]);
        assert_ne!(frames[11][0], BLACK);
    }

    #[test]
    fn test_entering_resets_hue_drift() {
        let map = PixelMap::<8>::identity().unwrap();
        let chase = SweepChaseEffect::new(&map, 1, 3)
            .with_hue_step(85)
            .with_speed(FRAME);
        let mut playlist = Playlist::new([Entry::single(chase)]).unwrap();

        let mut first = [BLACK; 8];
        playlist.tick(at(0), &mut first);
        let mut frame = [BLACK; 8];
        for tick in 1..6 {
            playlist.tick(at(tick * 10), &mut frame);
        }
        playlist.reset_current();
        let mut entered = [BLACK; 8];
        playlist.tick(at(60), &mut entered);
        assert_eq!(first, entered);
    }

    #[test]
    fn test_without_auto_reset_holds_last_frame() {
        let map = PixelMap::<8>::identity().unwrap();
        let sweep = SweepEffect::new(&map).with_hue_step(128).with_speed(FRAME);
        let mut playlist = Playlist::new([Entry::single(sweep)])
            .unwrap()
            .with_auto_reset(false);

        let mut completed = [BLACK; 8];
        playlist.tick(at(0), &mut completed);
        playlist.tick(at(10), &mut completed);
        let mut held = [BLACK; 8];
        playlist.tick(at(20), &mut held);
        playlist.tick(at(30), &mut held);
        assert_eq!(completed, held);
    }

    #[test]
    fn test_group_draws_members_in_order() {
        let map = PixelMap::<8>::identity().unwrap();
        let group = Entry::group([
            EffectSlot::from(ChaseEffect::new(&map, RED, 8, 0).with_speed(FRAME)),
            EffectSlot::from(SparkleEffect::new(&map, BLUE, 2).with_speed(FRAME)),
        ])
        .unwrap();
        let mut playlist = Playlist::new([group]).unwrap();

        let mut frame = [BLACK; 8];
        playlist.tick(at(0), &mut frame);

        let EffectSlot::Sparkle(sparkle) = &playlist.current().effects()[1] else {
            panic!("second member should be the sparkle");
        };
        for (i, pixel) in frame.iter().enumerate() {
            if sparkle.lit().contains(&i) {
                assert_eq!(*pixel, BLUE);
            } else {
                assert_eq!(*pixel, RED);
            }
        }
    }

    #[test]
    fn test_entering_restarts_effects() {
        let map = PixelMap::<8>::identity().unwrap();
        let mut playlist = Playlist::new([
            Entry::single(SweepEffect::new(&map).with_speed(FRAME)),
            Entry::single(SweepEffect::new(&map).with_speed(FRAME)),
        ])
        .unwrap();

        let mut frame = [BLACK; 8];
        for ms in [0, 10, 20] {
            playlist.tick(at(ms), &mut frame);
        }
        playlist.advance_to_next();
        playlist.advance_to_next();
        playlist.tick(at(30), &mut frame);

        let EffectSlot::Sweep(sweep) = &playlist.current().effects()[0] else {
            panic!("entry should be a sweep");
        };
        assert_eq!(sweep.phase(), 8);
    }

    #[test]
    fn test_apply_tempo_reaches_every_entry() {
        let map = PixelMap::<8>::identity().unwrap();
        let mut playlist = Playlist::new([
            Entry::single(SweepEffect::new(&map).with_tempo_factor(0.5)),
            Entry::single(ChaseEffect::new(&map, RED, 1, 1).with_tempo_factor(0.5)),
        ])
        .unwrap();

        playlist.apply_tempo(0.2);
        for entry in playlist.entries() {
            assert_eq!(entry.effects()[0].speed(), Duration::from_millis(100));
        }
    }
}
