mod tests {
    use skate_lights::{
        ConfigError, PixelMap, SKATE_PIXELS, SkateTopologies, Topology,
        color::{BLACK, RED, Rgb},
    };

    #[test]
    fn test_skate_topologies_are_permutations() {
        let maps = SkateTopologies::new().unwrap();
        for topology in Topology::ALL {
            let map = maps.get(topology);
            assert_eq!(map.width(), SKATE_PIXELS);

            let mut seen = [false; SKATE_PIXELS];
            for logical in 0..SKATE_PIXELS {
                let physical = map.resolve(logical).unwrap();
                assert!(!seen[physical], "{} maps {physical} twice", topology.as_str());
                seen[physical] = true;
            }
            assert!(seen.iter().all(|&hit| hit));
        }
    }

    #[test]
    fn test_skate_topology_orders() {
        let maps = SkateTopologies::new().unwrap();

        let reverse = maps.get(Topology::Reverse);
        assert_eq!(reverse.resolve(0), Some(0));
        assert_eq!(reverse.resolve(1), Some(33));
        assert_eq!(reverse.resolve(33), Some(17));

        let forward = maps.get(Topology::Forward);
        assert_eq!(forward.resolve(0), Some(16));
        assert_eq!(forward.resolve(1), Some(17));
        assert_eq!(forward.resolve(33), Some(33));

        let around = maps.get(Topology::Around);
        assert_eq!(around.resolve(0), Some(0));
        assert_eq!(around.resolve(20), Some(20));

        let radiate = maps.get(Topology::Radiate);
        assert_eq!(radiate.resolve(0), Some(8));
        assert_eq!(radiate.resolve(1), Some(26));
        assert_eq!(radiate.resolve(33), Some(17));
    }

    #[test]
    fn test_resolve_outside_width() {
        let maps = SkateTopologies::new().unwrap();
        assert_eq!(maps.get(Topology::Forward).resolve(SKATE_PIXELS), None);
    }

    #[test]
    fn test_pixel_map_rejects_duplicate() {
        assert_eq!(
            PixelMap::<4>::new([0, 1, 1, 3]),
            Err(ConfigError::DuplicatePixel { physical: 1 })
        );
    }

    #[test]
    fn test_pixel_map_rejects_out_of_range() {
        assert_eq!(
            PixelMap::<4>::new([0, 1, 2, 4]),
            Err(ConfigError::PixelOutOfRange {
                logical: 3,
                physical: 4
            })
        );
    }

    #[test]
    fn test_pixel_map_rejects_wrong_length() {
        assert_eq!(
            PixelMap::<4>::from_slice(&[0, 1, 2]),
            Err(ConfigError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(PixelMap::<4>::from_slice(&[3, 2, 1, 0]).is_ok());
    }

    #[test]
    fn test_paint_goes_through_map() {
        let map = PixelMap::<4>::new([3, 2, 1, 0]).unwrap();
        let mut frame = [BLACK; 4];
        map.paint(&mut frame, 0, RED);
        assert_eq!(frame, [BLACK, BLACK, BLACK, RED]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside width")]
    fn test_paint_outside_width_panics_in_debug() {
        let map = PixelMap::<4>::identity().unwrap();
        let mut frame = [Rgb::default(); 4];
        map.paint(&mut frame, 4, RED);
    }
}
