//! Cross-module regression tests for the quantization pipeline.
//!
//! Everything here pins a behavior that is cheap to break without any other
//! test noticing: the raw-byte dither contract, palette orderings that
//! stored indices depend on, and the isolation of per-run palette overrides.

#[cfg(test)]
mod domain_tests {
    use crate::color::Rgb;
    use crate::dither::quantize;
    use crate::mode::ModeTable;
    use crate::palette::Palette;

    fn solid(color: Rgb, count: usize) -> Vec<Rgb> {
        vec![color; count]
    }

    fn index_ratio(indices: &[u8], target: u8) -> f64 {
        let hits = indices.iter().filter(|&&i| i == target).count();
        hits as f64 / indices.len() as f64
    }

    // ========================================================================
    // GAP 1: Raw-byte arithmetic -- dithering must NOT gamma-decode input
    // ========================================================================

    /// If this breaks, it means: someone "corrected" the pipeline to work in
    /// linear light. Historical conversion tools dithered raw pixel bytes,
    /// so gray 128 on a black/white palette must come out ~50% white
    /// (128/255), not the ~21% a linearized pipeline would produce. Gray 186
    /// must come out ~73% white, not ~50%.
    #[test]
    fn test_dither_ratios_follow_raw_bytes() {
        let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
        let size = 32;
        let total = size * size;

        let indices = quantize(&solid(Rgb::new(128, 128, 128), total), size, size, &palette);
        let ratio_128 = index_ratio(&indices, 1);
        assert!(
            (ratio_128 - 128.0 / 255.0).abs() < 0.12,
            "REGRESSION: gray 128 produced {ratio_128:.3} white ratio, expected ~0.50. \
             A reading near 0.21 means a gamma decode crept into the pipeline."
        );

        let indices = quantize(&solid(Rgb::new(64, 64, 64), total), size, size, &palette);
        let ratio_64 = index_ratio(&indices, 1);
        assert!(
            (ratio_64 - 64.0 / 255.0).abs() < 0.1,
            "REGRESSION: gray 64 produced {ratio_64:.3} white ratio, expected ~0.25. \
             A reading near 0.05 means a gamma decode crept into the pipeline."
        );

        let indices = quantize(&solid(Rgb::new(186, 186, 186), total), size, size, &palette);
        let ratio_186 = index_ratio(&indices, 1);
        assert!(
            (ratio_186 - 186.0 / 255.0).abs() < 0.1,
            "REGRESSION: gray 186 produced {ratio_186:.3} white ratio, expected ~0.73. \
             A reading near 0.50 means a gamma decode crept into the pipeline."
        );
    }

    // ========================================================================
    // GAP 2: Valid palette indices for every built-in mode
    // ========================================================================

    /// If this breaks, it means: quantization emitted an index outside the
    /// mode's palette, which would panic on color lookup or write garbage
    /// into an encoded file.
    #[test]
    fn test_all_modes_produce_valid_indices() {
        let table = ModeTable::builtin();
        let size = 16;
        let pixels: Vec<Rgb> = (0..size * size)
            .map(|i| {
                Rgb::new(
                    (i % 256) as u8,
                    (i * 3 % 256) as u8,
                    (i * 7 % 256) as u8,
                )
            })
            .collect();

        for mode in table.iter() {
            let indices = quantize(&pixels, size, size, mode.palette());
            assert_eq!(indices.len(), size * size, "{}", mode.name());
            let limit = mode.palette().len();
            assert!(
                indices.iter().all(|&i| (i as usize) < limit),
                "{} emitted an index >= {limit}",
                mode.name()
            );
        }
    }

    // ========================================================================
    // GAP 3: VGA cube ordering is a storage contract
    // ========================================================================

    /// If this breaks, it means: the VGA palette enumeration order changed,
    /// silently remapping every stored VGA index to a different color.
    #[test]
    fn test_vga_index_contract() {
        let table = ModeTable::builtin();
        let vga = table.get("VGA").unwrap();
        let palette = vga.palette();

        // Inner loop is blue (4 levels), middle green, outer red.
        assert_eq!(palette.color(0), Rgb::new(0, 0, 0));
        assert_eq!(palette.color(1), Rgb::new(0, 0, 85));
        assert_eq!(palette.color(4), Rgb::new(0, 36, 0));
        assert_eq!(palette.color(32), Rgb::new(36, 0, 0));
        assert_eq!(palette.color(255), Rgb::new(255, 255, 255));

        // A pixel sitting exactly on a cube entry must quantize to exactly
        // that entry's index.
        for (pixel, index) in [
            (Rgb::new(0, 0, 85), 1u8),
            (Rgb::new(0, 36, 0), 4),
            (Rgb::new(36, 0, 0), 32),
            (Rgb::new(255, 255, 255), 255),
        ] {
            let indices = quantize(&[pixel], 1, 1, palette);
            assert_eq!(indices, [index], "pixel {pixel:?}");
        }
    }

    // ========================================================================
    // GAP 4: Background override never leaks into the shared table
    // ========================================================================

    /// If this breaks, it means: customizing a mode mutated the shared
    /// table, so later files in the same batch would silently convert with
    /// the wrong background color.
    #[test]
    fn test_background_override_is_isolated() {
        let table = ModeTable::builtin();
        let custom = table.get("CGA2").unwrap().with_background(14).unwrap();

        let yellow = Rgb::new(0xFF, 0xFF, 0x55);
        let grid = solid(yellow, 16);

        // The customized palette has yellow in slot 0, an exact match.
        let custom_indices = quantize(&grid, 4, 4, custom.palette());
        assert!(custom_indices.iter().all(|&i| i == 0));

        // The table's own CGA2 is untouched: slot 0 is still black and
        // yellow lands on light gray, never on the background slot.
        let base = table.get("CGA2").unwrap();
        assert_eq!(base.palette().color(0), Rgb::new(0, 0, 0));
        let base_indices = quantize(&grid, 4, 4, base.palette());
        assert!(base_indices.iter().all(|&i| i == 3));
    }

    // ========================================================================
    // GAP 5: Palette sizes match the adapters' bit depths
    // ========================================================================

    /// If this breaks, it means: a mode's palette no longer matches the bit
    /// depth of the hardware it emulates (1/2/4/8 bpp), so encoded files
    /// would not be faithful to that adapter class.
    #[test]
    fn test_mode_palette_sizes_match_bit_depths() {
        let table = ModeTable::builtin();
        let expected = [
            ("CGA1", 2),
            ("CGA2", 4),
            ("CGA2H", 4),
            ("CGA2A", 4),
            ("CGA2AH", 4),
            ("EGA", 16),
            ("VGA", 256),
        ];
        for (name, colors) in expected {
            assert_eq!(
                table.get(name).unwrap().palette().len(),
                colors,
                "{name} should have {colors} colors"
            );
        }
        // And nothing beyond these seven.
        assert_eq!(table.iter().count(), expected.len());
    }

    // ========================================================================
    // GAP 6: Quantization is deterministic in every mode
    // ========================================================================

    /// If this breaks, it means: some nondeterminism (hash ordering,
    /// randomness, uninitialized state) entered the pipeline, so the same
    /// input file would convert differently between runs.
    #[test]
    fn test_quantization_is_deterministic_per_mode() {
        let table = ModeTable::builtin();
        let size = 24;
        let pixels: Vec<Rgb> = (0..size * size)
            .map(|i| {
                Rgb::new(
                    (i * 31 % 256) as u8,
                    (i * 57 % 256) as u8,
                    (i * 91 % 256) as u8,
                )
            })
            .collect();

        for mode in table.iter() {
            let first = quantize(&pixels, size, size, mode.palette());
            let second = quantize(&pixels, size, size, mode.palette());
            assert_eq!(first, second, "{} is not deterministic", mode.name());
        }
    }

    // ========================================================================
    // GAP 7: Equidistant ties resolve to the lowest index
    // ========================================================================

    /// If this breaks, it means: the nearest-color comparison became
    /// non-strict, so a duplicate introduced by a background override would
    /// steal exact matches from slot 0 and flip tie pixels everywhere.
    #[test]
    fn test_duplicate_palette_ties_go_to_lowest_index() {
        let table = ModeTable::builtin();
        // Background 7 is light gray, duplicating CGA2's own slot 3.
        let custom = table.get("CGA2").unwrap().with_background(7).unwrap();
        assert_eq!(custom.palette().color(0), custom.palette().color(3));

        let gray = Rgb::new(0xAA, 0xAA, 0xAA);
        let indices = quantize(&solid(gray, 9), 3, 3, custom.palette());
        assert!(
            indices.iter().all(|&i| i == 0),
            "exact match must resolve to the lowest duplicate, got {indices:?}"
        );
    }
}
