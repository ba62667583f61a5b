//! Piecewise classification of controller values.
//!
//! The CZ-1 Mini packs several discrete selectors (waveform, line routing,
//! envelope breakpoints) into the 0-127 controller domain as bands of
//! consecutive values. [`RangeTable`] is the one evaluator shared by every
//! selector; each selector ships its own band table below.
//!
//! Band bounds are the hardware's literal splits. The envelope end point
//! tables in particular use unequal band widths, so the bounds must stay
//! written out rather than computed from a step size.

/// One inclusive sub-range of the controller domain and its output.
#[derive(Debug, Clone, Copy)]
pub struct Band<T: 'static> {
    pub lo: u8,
    pub hi: u8,
    pub out: T,
}

const fn band<T>(lo: u8, hi: u8, out: T) -> Band<T> {
    Band { lo, hi, out }
}

/// An ordered table of disjoint bands plus a fallback output.
///
/// [`classify`](RangeTable::classify) is total over `u8`: any value outside
/// every band (including raw values above 127) yields the fallback. Bands are
/// tested in order and the first match wins, which pins down the behavior if
/// a table is ever misconfigured with overlapping bands.
#[derive(Debug)]
pub struct RangeTable<T: 'static> {
    pub name: &'static str,
    pub fallback: T,
    pub bands: &'static [Band<T>],
}

impl<T: Copy> RangeTable<T> {
    pub fn classify(&self, value: u8) -> T {
        self.bands
            .iter()
            .find(|band| band.lo <= value && value <= band.hi)
            .map(|band| band.out)
            .unwrap_or(self.fallback)
    }
}

/// Label returned by every string table for values outside its bands.
pub const FALLBACK_LABEL: &str = "UNKNOWN";

/// DCO waveform selector. The eighth waveform sits on the single value 127.
pub static WAVEFORM: RangeTable<&'static str> = RangeTable {
    name: "waveform",
    fallback: FALLBACK_LABEL,
    bands: &[
        band(0, 18, "SAWTOOTH"),
        band(19, 36, "SQUARE"),
        band(37, 54, "PULSE"),
        band(55, 72, "DOUBLESINE"),
        band(73, 90, "SAW-PULSE"),
        band(91, 108, "RESONANCE I SAW"),
        band(109, 126, "RESONANCE II TRI"),
        band(127, 127, "RESONANCE III TRAP"),
    ],
};

/// Line routing selector (which oscillator lines are active).
pub static LINE_SELECT: RangeTable<&'static str> = RangeTable {
    name: "line select",
    fallback: FALLBACK_LABEL,
    bands: &[
        band(0, 42, "Line 1"),
        band(43, 84, "Line 2"),
        band(85, 126, "Line 1+2"),
        band(127, 127, "Line 1+1"),
    ],
};

/// Bank value derived from the line select position: Line 2 selects bank 1,
/// every other routing (Line 1, Line 1+2, Line 1+1) stays on bank 0.
pub static BANK_SELECT: RangeTable<u8> = RangeTable {
    name: "bank select",
    fallback: 0,
    bands: &[band(43, 84, 1)],
};

/// Envelope sustain point, an index 0-7 over the same splits as the
/// waveform selector.
pub static SUSTAIN_POINT: RangeTable<&'static str> = RangeTable {
    name: "sustain point",
    fallback: FALLBACK_LABEL,
    bands: &[
        band(0, 18, "0"),
        band(19, 36, "1"),
        band(37, 54, "2"),
        band(55, 72, "3"),
        band(73, 90, "4"),
        band(91, 108, "5"),
        band(109, 126, "6"),
        band(127, 127, "7"),
    ],
};

/// DCA/DCW envelope end point, an index 0-8. Band widths are irregular
/// (9,16,17,18,14,15,15,16,7) and do not follow a single step size.
pub static END_POINT: RangeTable<&'static str> = RangeTable {
    name: "end point",
    fallback: FALLBACK_LABEL,
    bands: &[
        band(0, 8, "0"),
        band(9, 24, "1"),
        band(25, 41, "2"),
        band(42, 59, "3"),
        band(60, 73, "4"),
        band(74, 88, "5"),
        band(89, 104, "6"),
        band(105, 120, "7"),
        band(121, 127, "8"),
    ],
};

/// Pitch envelope end point. The index domain starts at 2 on this synth and
/// the band widths (22,21,21,21,21,21,1) differ from the DCA/DCW table.
pub static PITCH_END_POINT: RangeTable<&'static str> = RangeTable {
    name: "pitch end point",
    fallback: FALLBACK_LABEL,
    bands: &[
        band(0, 21, "2"),
        band(22, 42, "3"),
        band(43, 63, "4"),
        band(64, 84, "5"),
        band(85, 105, "6"),
        band(106, 126, "7"),
        band(127, 127, "8"),
    ],
};

/// Every shipped label table, for table-wide checks.
pub static LABEL_TABLES: [&RangeTable<&'static str>; 5] = [
    &WAVEFORM,
    &LINE_SELECT,
    &SUSTAIN_POINT,
    &END_POINT,
    &PITCH_END_POINT,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_disjoint_bands(name: &str, bands: &[(u8, u8)]) {
        for (i, a) in bands.iter().enumerate() {
            assert!(a.0 <= a.1, "{name}: band {i} has lo > hi");
            for (j, b) in bands.iter().enumerate().skip(i + 1) {
                let overlap = a.0 <= b.1 && b.0 <= a.1;
                assert!(!overlap, "{name}: bands {i} and {j} overlap");
            }
        }
    }

    #[test]
    fn shipped_tables_are_disjoint() {
        for table in LABEL_TABLES {
            let bounds: Vec<(u8, u8)> =
                table.bands.iter().map(|b| (b.lo, b.hi)).collect();
            assert_disjoint_bands(table.name, &bounds);
        }
        let bounds: Vec<(u8, u8)> =
            BANK_SELECT.bands.iter().map(|b| (b.lo, b.hi)).collect();
        assert_disjoint_bands(BANK_SELECT.name, &bounds);
    }

    #[test]
    fn classify_is_total_and_deterministic() {
        for table in LABEL_TABLES {
            for value in 0..=u8::MAX {
                let first = table.classify(value);
                assert_eq!(first, table.classify(value), "{}: {value}", table.name);
            }
        }
    }

    #[test]
    fn waveform_literals() {
        assert_eq!(WAVEFORM.classify(0), "SAWTOOTH");
        assert_eq!(WAVEFORM.classify(18), "SAWTOOTH");
        assert_eq!(WAVEFORM.classify(19), "SQUARE");
        assert_eq!(WAVEFORM.classify(55), "DOUBLESINE");
        assert_eq!(WAVEFORM.classify(126), "RESONANCE II TRI");
        assert_eq!(WAVEFORM.classify(127), "RESONANCE III TRAP");
    }

    #[test]
    fn line_select_literals() {
        assert_eq!(LINE_SELECT.classify(42), "Line 1");
        assert_eq!(LINE_SELECT.classify(43), "Line 2");
        assert_eq!(LINE_SELECT.classify(84), "Line 2");
        assert_eq!(LINE_SELECT.classify(85), "Line 1+2");
        assert_eq!(LINE_SELECT.classify(127), "Line 1+1");
    }

    #[test]
    fn bank_derivation_from_line_select() {
        assert_eq!(BANK_SELECT.classify(42), 0);
        assert_eq!(BANK_SELECT.classify(43), 1);
        assert_eq!(BANK_SELECT.classify(84), 1);
        assert_eq!(BANK_SELECT.classify(85), 0);
        assert_eq!(BANK_SELECT.classify(127), 0);
    }

    #[test]
    fn end_point_irregular_bounds() {
        // First and last bands of each end point table, plus the interior
        // splits that do not fall on a uniform 128/9 or 128/7 grid.
        assert_eq!(END_POINT.classify(8), "0");
        assert_eq!(END_POINT.classify(9), "1");
        assert_eq!(END_POINT.classify(59), "3");
        assert_eq!(END_POINT.classify(60), "4");
        assert_eq!(END_POINT.classify(73), "4");
        assert_eq!(END_POINT.classify(74), "5");
        assert_eq!(END_POINT.classify(121), "8");

        assert_eq!(PITCH_END_POINT.classify(0), "2");
        assert_eq!(PITCH_END_POINT.classify(21), "2");
        assert_eq!(PITCH_END_POINT.classify(22), "3");
        assert_eq!(PITCH_END_POINT.classify(126), "7");
        assert_eq!(PITCH_END_POINT.classify(127), "8");
    }

    #[test]
    fn sustain_point_covers_full_domain() {
        for value in 0..=127u8 {
            assert_ne!(SUSTAIN_POINT.classify(value), FALLBACK_LABEL, "{value}");
        }
        // Adjacent bands must be contiguous for the full-domain tables.
        for table in [&WAVEFORM, &SUSTAIN_POINT, &END_POINT, &PITCH_END_POINT] {
            for pair in table.bands.windows(2) {
                assert_eq!(pair[0].hi + 1, pair[1].lo, "{}", table.name);
            }
        }
    }

    #[test]
    fn out_of_domain_falls_back() {
        for table in LABEL_TABLES {
            assert_eq!(table.classify(128), FALLBACK_LABEL, "{}", table.name);
            assert_eq!(table.classify(u8::MAX), FALLBACK_LABEL, "{}", table.name);
        }
        assert_eq!(BANK_SELECT.classify(128), 0);
    }

    #[test]
    fn first_match_wins_on_overlapping_bands() {
        // Not a shipped shape, but the tie-break must stay defined.
        static OVERLAPPING: RangeTable<&'static str> = RangeTable {
            name: "overlapping",
            fallback: "none",
            bands: &[band(0, 64, "first"), band(32, 127, "second")],
        };
        assert_eq!(OVERLAPPING.classify(40), "first");
        assert_eq!(OVERLAPPING.classify(64), "first");
        assert_eq!(OVERLAPPING.classify(65), "second");
    }
}
