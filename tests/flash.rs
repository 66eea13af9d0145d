mod tests {
    use embassy_time::{Duration, Instant};
    use skate_lights::{
        EffectKind, Entry, SKATE_PIXELS, SkateConfig, SkateTopologies,
        color::{BLACK, ORANGE, RED, WHITE},
        flash::FlashAnimation,
        show::{power_up, skate_playlist},
    };

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_flash_strobe_pattern() {
        let flash = FlashAnimation::new(RED, at(0), Duration::from_millis(1_000));
        assert_eq!(flash.accent(), RED);

        let expected = [
            (0, RED),
            (9, RED),
            (10, BLACK),
            (40, WHITE),
            (60, BLACK),
            (65, RED),
            (75, BLACK),
            (105, RED),
        ];
        for (ms, color) in expected {
            assert_eq!(flash.color_at(at(ms)), Some(color), "at {ms} ms");
        }
    }

    #[test]
    fn test_flash_ends_after_duration() {
        let flash = FlashAnimation::new(RED, at(100), Duration::from_millis(1_000));
        assert!(!flash.is_finished(at(1_100)));
        assert!(flash.color_at(at(1_100)).is_some());
        assert!(flash.is_finished(at(1_101)));
        assert_eq!(flash.color_at(at(1_101)), None);
    }

    #[test]
    fn test_power_up_plays_for_startup_duration() {
        let maps = SkateTopologies::new().unwrap();
        let config = SkateConfig::DEFAULT;
        let mut startup = power_up(&maps, &config);
        let mut frame = [BLACK; SKATE_PIXELS];

        assert!(startup.play(at(5_000), &mut frame));
        assert!(frame.contains(&ORANGE));
        assert!(startup.play(at(6_600), &mut frame));
        assert!(!startup.play(at(6_601), &mut frame));
    }

    #[test]
    fn test_skate_playlist_layout() {
        let maps = SkateTopologies::new().unwrap();
        let playlist = skate_playlist(&maps).unwrap();
        assert_eq!(playlist.len(), 9);

        let kinds: Vec<Vec<EffectKind>> = playlist
            .entries()
            .iter()
            .map(|entry| entry.effects().iter().map(|effect| effect.kind()).collect())
            .collect();
        assert_eq!(
            kinds,
            vec![
                vec![EffectKind::Sweep],
                vec![EffectKind::SweepChase],
                vec![EffectKind::SweepChase],
                vec![EffectKind::Chase],
                vec![EffectKind::Comet],
                vec![EffectKind::Comet],
                vec![EffectKind::Comet],
                vec![EffectKind::Sparkle, EffectKind::Comet],
                vec![EffectKind::Sparkle, EffectKind::Comet],
            ]
        );
        assert!(matches!(playlist.entries()[7], Entry::Group(_)));
    }

    #[test]
    fn test_skate_playlist_fixed_speeds_ignore_tempo() {
        let maps = SkateTopologies::new().unwrap();
        let mut playlist = skate_playlist(&maps).unwrap();
        playlist.apply_tempo(1.0);

        let entries = playlist.entries();
        assert_eq!(entries[0].effects()[0].speed(), Duration::from_millis(31));
        assert_eq!(entries[1].effects()[0].speed(), Duration::from_millis(50));
        assert_eq!(entries[7].effects()[0].speed(), Duration::from_millis(10));
        assert_eq!(entries[8].effects()[0].speed(), Duration::from_millis(50));
        assert_eq!(entries[8].effects()[1].speed(), Duration::from_millis(100));
    }
}
