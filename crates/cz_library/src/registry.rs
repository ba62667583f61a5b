//! The patch control registry.
//!
//! One [`ControlDescriptor`] per adjustable parameter, binding a stable id to
//! its CC address, default value, display name, and (where the value encodes
//! a discrete selector) the range table that labels it. The registry is
//! immutable after construction; the live value of each control belongs to
//! the UI layer, not here.

use rand::Rng;

use crate::cc;
use crate::ranges::{self, RangeTable};

/// Declarative dual-send rule: derive a second CC value from the primary
/// input via a range table and send it to `address` as well.
#[derive(Debug, Clone, Copy)]
pub struct SecondarySend {
    pub address: u8,
    pub derive: &'static RangeTable<u8>,
}

/// One adjustable parameter.
///
/// `address` is not required to be unique across the registry; the synth
/// reuses controller numbers between firmware variants.
#[derive(Debug, Clone, Copy)]
pub struct ControlDescriptor {
    /// Stable identifier, unique within the registry.
    pub id: &'static str,
    /// Human-readable name used in status labels.
    pub display: &'static str,
    /// Controller number this descriptor writes to (0-127).
    pub address: u8,
    /// Value applied on patch init (0-127).
    pub default_value: u8,
    /// Label table for discrete selectors, if any.
    pub decode: Option<&'static RangeTable<&'static str>>,
    /// Optional secondary send derived from the same input value.
    pub secondary: Option<SecondarySend>,
}

const fn control(
    id: &'static str,
    display: &'static str,
    address: u8,
    default_value: u8,
) -> ControlDescriptor {
    ControlDescriptor {
        id,
        display,
        address,
        default_value,
        decode: None,
        secondary: None,
    }
}

const fn selector(
    id: &'static str,
    display: &'static str,
    address: u8,
    default_value: u8,
    decode: &'static RangeTable<&'static str>,
) -> ControlDescriptor {
    ControlDescriptor {
        id,
        display,
        address,
        default_value,
        decode: Some(decode),
        secondary: None,
    }
}

/// Every CZ-1 Mini patch control, in registration order. Bulk operations
/// visit this table top to bottom.
static CZ1_MINI_CONTROLS: &[ControlDescriptor] = &[
    // DCO 1
    selector("dco1-wf1", "DCO 1 WF1", cc::CC_DCO1_WF1, 0, &ranges::WAVEFORM),
    selector("dco2-wf2", "DCO 2 WF2", cc::CC_DCO2_WF2, 0, &ranges::WAVEFORM),
    control("dco1-dcw", "DCO1 DCW", cc::CC_DCO1_DCW, 0),
    // Line select drives both its own address and bank select from one input
    ControlDescriptor {
        id: "line-select",
        display: "LINE SELECT",
        address: cc::CC_LINE_SELECT,
        default_value: 0,
        decode: Some(&ranges::LINE_SELECT),
        secondary: Some(SecondarySend {
            address: cc::CC_BANK_SELECT,
            derive: &ranges::BANK_SELECT,
        }),
    },
    // Vibrato
    control("vibrato-wave", "VIBRATO WAVE", cc::CC_VIBRATO_WAVE, 0),
    control("vibrato-rate", "VIBRATO RATE", cc::CC_VIBRATO_RATE, 0),
    control("vibrato-sync", "VIBRATO SYNC", cc::CC_VIBRATO_SYNC, 0),
    control("vibrato-sync-rate", "VIBRATO SYNC RATE", cc::CC_VIBRATO_SYNC_RATE, 0),
    control("vibrato-depth", "VIBRATO DEPTH", cc::CC_VIBRATO_DEPTH, 0),
    control("vibrato-delay", "VIBRATO DELAY", cc::CC_VIBRATO_DELAY, 0),
    // Detune
    control("detune-polarity", "DETUNE POLARITY", cc::CC_DETUNE_POLARITY, 0),
    control("detune-oct", "DETUNE OCT", cc::CC_DETUNE_OCT, 0),
    control("detune-note", "DETUNE NOTE", cc::CC_DETUNE_NOTE, 0),
    control("detune-fine", "DETUNE FINE", cc::CC_DETUNE_FINE, 0),
    // DCO 2 (line offset variants)
    selector(
        "dco1-wf1-lineoffset",
        "DCO 2 WF1",
        cc::CC_DCO1_WF1_LINEOFFSET,
        0,
        &ranges::WAVEFORM,
    ),
    selector(
        "dco1-wf2-lineoffset",
        "DCO 2 WF2",
        cc::CC_DCO1_WF2_LINEOFFSET,
        0,
        &ranges::WAVEFORM,
    ),
    // DCW params
    control("dco1-dcw-lineoffset", "DCO1 DCW LINEOFFSET", cc::CC_DCO1_DCW_LINEOFFSET, 0),
    control("dco1-dcw-keyfollow", "DCO1 DCW KEYFOLLOW", cc::CC_DCO1_DCW_KEYFOLLOW, 0),
    control(
        "dco1-dcw-keyfollow-range",
        "DCO1 DCW KEYFOLLOW RANGE",
        cc::CC_DCO1_DCW_KEYFOLLOW_RANGE,
        0,
    ),
    control(
        "dco1-dcw-keyfollow-lineoffset",
        "DCO1 DCW KEYFOLLOW LINEOFFSET",
        cc::CC_DCO1_DCW_KEYFOLLOW_LINEOFFSET,
        0,
    ),
    control(
        "dco1-dcw-keyfollow-range-lineoffset",
        "DCO1 DCW KEYFOLLOW RANGE LINEOFFSET",
        cc::CC_DCO1_DCW_KEYFOLLOW_RANGE_LINEOFFSET,
        0,
    ),
    // DCA params
    control("dco1-dca-keyfollow", "DCO1 DCA KEYFOLLOW", cc::CC_DCO1_DCA_KEYFOLLOW, 0),
    control(
        "dco1-dca-keyfollow-range",
        "DCO1 DCA KEYFOLLOW RANGE",
        cc::CC_DCO1_DCA_KEYFOLLOW_RANGE,
        0,
    ),
    control(
        "dco1-dca-keyfollow-lineoffset",
        "DCO1 DCA KEYFOLLOW LINEOFFSET",
        cc::CC_DCO1_DCA_KEYFOLLOW_LINEOFFSET,
        0,
    ),
    control(
        "dco1-dca-keyfollow-range-lineoffset",
        "DCO1 DCA KEYFOLLOW RANGE LINEOFFSET",
        cc::CC_DCO1_DCA_KEYFOLLOW_RANGE_LINEOFFSET,
        0,
    ),
    // DCA envelope
    selector("dca-sustain-point", "DCA SUSTAIN", cc::CC_DCA_SUSTAIN_POINT, 0, &ranges::SUSTAIN_POINT),
    selector("dca-end-point", "DCA END", cc::CC_DCA_END_POINT, 0, &ranges::END_POINT),
    control("dca-level-1", "DCA LEVEL 1", cc::CC_DCA_LEVEL[0], 0),
    control("dca-level-2", "DCA LEVEL 2", cc::CC_DCA_LEVEL[1], 0),
    control("dca-level-3", "DCA LEVEL 3", cc::CC_DCA_LEVEL[2], 0),
    control("dca-level-4", "DCA LEVEL 4", cc::CC_DCA_LEVEL[3], 0),
    control("dca-level-5", "DCA LEVEL 5", cc::CC_DCA_LEVEL[4], 0),
    control("dca-level-6", "DCA LEVEL 6", cc::CC_DCA_LEVEL[5], 0),
    control("dca-level-7", "DCA LEVEL 7", cc::CC_DCA_LEVEL[6], 0),
    control("dca-level-8", "DCA LEVEL 8", cc::CC_DCA_LEVEL[7], 0),
    control("dca-rate-1", "DCA RATE 1", cc::CC_DCA_RATE[0], 0),
    control("dca-rate-2", "DCA RATE 2", cc::CC_DCA_RATE[1], 0),
    control("dca-rate-3", "DCA RATE 3", cc::CC_DCA_RATE[2], 0),
    control("dca-rate-4", "DCA RATE 4", cc::CC_DCA_RATE[3], 0),
    control("dca-rate-5", "DCA RATE 5", cc::CC_DCA_RATE[4], 0),
    control("dca-rate-6", "DCA RATE 6", cc::CC_DCA_RATE[5], 0),
    control("dca-rate-7", "DCA RATE 7", cc::CC_DCA_RATE[6], 0),
    control("dca-rate-8", "DCA RATE 8", cc::CC_DCA_RATE[7], 0),
    // Pitch envelope
    selector(
        "pitch-sustain-point",
        "PITCH SUSTAIN",
        cc::CC_PITCH_SUSTAIN_POINT,
        0,
        &ranges::SUSTAIN_POINT,
    ),
    selector("pitch-end-point", "PITCH END", cc::CC_PITCH_END_POINT, 0, &ranges::PITCH_END_POINT),
    control("pitch-level-1", "PITCH LEVEL 1", cc::CC_PITCH_LEVEL[0], 0),
    control("pitch-level-2", "PITCH LEVEL 2", cc::CC_PITCH_LEVEL[1], 0),
    control("pitch-level-3", "PITCH LEVEL 3", cc::CC_PITCH_LEVEL[2], 0),
    control("pitch-level-4", "PITCH LEVEL 4", cc::CC_PITCH_LEVEL[3], 0),
    control("pitch-level-5", "PITCH LEVEL 5", cc::CC_PITCH_LEVEL[4], 0),
    control("pitch-level-6", "PITCH LEVEL 6", cc::CC_PITCH_LEVEL[5], 0),
    control("pitch-level-7", "PITCH LEVEL 7", cc::CC_PITCH_LEVEL[6], 0),
    control("pitch-level-8", "PITCH LEVEL 8", cc::CC_PITCH_LEVEL[7], 0),
    control("pitch-rate-1", "PITCH RATE 1", cc::CC_PITCH_RATE[0], 0),
    control("pitch-rate-2", "PITCH RATE 2", cc::CC_PITCH_RATE[1], 0),
    control("pitch-rate-3", "PITCH RATE 3", cc::CC_PITCH_RATE[2], 0),
    control("pitch-rate-4", "PITCH RATE 4", cc::CC_PITCH_RATE[3], 0),
    control("pitch-rate-5", "PITCH RATE 5", cc::CC_PITCH_RATE[4], 0),
    control("pitch-rate-6", "PITCH RATE 6", cc::CC_PITCH_RATE[5], 0),
    control("pitch-rate-7", "PITCH RATE 7", cc::CC_PITCH_RATE[6], 0),
    control("pitch-rate-8", "PITCH RATE 8", cc::CC_PITCH_RATE[7], 0),
    // DCW envelope
    selector("dcw-sustain-point", "DCW SUSTAIN", cc::CC_DCW_SUSTAIN_POINT, 0, &ranges::SUSTAIN_POINT),
    selector("dcw-end-point", "DCW END", cc::CC_DCW_END_POINT, 0, &ranges::END_POINT),
    control("dcw-level-1", "DCW LEVEL 1", cc::CC_DCW_LEVEL[0], 0),
    control("dcw-level-2", "DCW LEVEL 2", cc::CC_DCW_LEVEL[1], 0),
    control("dcw-level-3", "DCW LEVEL 3", cc::CC_DCW_LEVEL[2], 0),
    control("dcw-level-4", "DCW LEVEL 4", cc::CC_DCW_LEVEL[3], 0),
    control("dcw-level-5", "DCW LEVEL 5", cc::CC_DCW_LEVEL[4], 0),
    control("dcw-level-6", "DCW LEVEL 6", cc::CC_DCW_LEVEL[5], 0),
    control("dcw-level-7", "DCW LEVEL 7", cc::CC_DCW_LEVEL[6], 0),
    control("dcw-level-8", "DCW LEVEL 8", cc::CC_DCW_LEVEL[7], 0),
    control("dcw-rate-1", "DCW RATE 1", cc::CC_DCW_RATE[0], 0),
    control("dcw-rate-2", "DCW RATE 2", cc::CC_DCW_RATE[1], 0),
    control("dcw-rate-3", "DCW RATE 3", cc::CC_DCW_RATE[2], 0),
    control("dcw-rate-4", "DCW RATE 4", cc::CC_DCW_RATE[3], 0),
    control("dcw-rate-5", "DCW RATE 5", cc::CC_DCW_RATE[4], 0),
    control("dcw-rate-6", "DCW RATE 6", cc::CC_DCW_RATE[5], 0),
    control("dcw-rate-7", "DCW RATE 7", cc::CC_DCW_RATE[6], 0),
    control("dcw-rate-8", "DCW RATE 8", cc::CC_DCW_RATE[7], 0),
    // LFO 1
    control("lfo1-wave", "LFO1 WAVE", cc::CC_LFO1_WAVE, 0),
    control("lfo1-amount", "LFO1 AMOUNT", cc::CC_LFO1_AMOUNT, 0),
    control("lfo1-rate", "LFO1 RATE", cc::CC_LFO1_RATE, 0),
    // Filter EG
    control("filter-attack", "FILTER ATTACK", cc::CC_FILTER_ATTACK, 0),
    control("filter-decay", "FILTER DECAY", cc::CC_FILTER_DECAY, 0),
    control("filter-sustain", "FILTER SUSTAIN", cc::CC_FILTER_SUSTAIN, 0),
    control("filter-release", "FILTER RELEASE", cc::CC_FILTER_RELEASE, 0),
    // Filter
    control("filter-cutoff", "FILTER CUTOFF", cc::CC_FILTER_CUTOFF, 0),
    control("filter-resonance", "FILTER RESONANCE", cc::CC_FILTER_RESONANCE, 0),
    control("filter-env-amount", "FILTER ENV AMOUNT", cc::CC_FILTER_ENV_AMOUNT, 0),
    // Chorus
    control("chorus-rate", "CHORUS RATE", cc::CC_CHORUS_RATE, 0),
    control("chorus-depth", "CHORUS DEPTH", cc::CC_CHORUS_DEPTH, 0),
];

/// Ordered, immutable list of patch controls with bulk operations over them.
pub struct Registry {
    controls: &'static [ControlDescriptor],
}

impl Registry {
    /// The full CZ-1 Mini control set.
    pub fn cz1_mini() -> Self {
        Self {
            controls: CZ1_MINI_CONTROLS,
        }
    }

    /// Returns the descriptor for `id`, or `None` when the id is unknown.
    /// A miss is non-fatal; callers skip the control.
    pub fn lookup(&self, id: &str) -> Option<&ControlDescriptor> {
        self.controls.iter().find(|control| control.id == id)
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ControlDescriptor> {
        self.controls.iter()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Visits every descriptor exactly once in registration order with
    /// `(address, default_value)`.
    pub fn reset_all(&self, mut apply: impl FnMut(u8, u8)) {
        for control in self.controls {
            apply(control.address, control.default_value);
        }
    }

    /// Visits every descriptor in registration order with one independent
    /// uniform draw in 0-127. A seeded `rng` reproduces the same sequence.
    pub fn randomize_all<R: Rng>(&self, rng: &mut R, mut apply: impl FnMut(u8, u8)) {
        for control in self.controls {
            apply(control.address, rng.gen_range(0..=cc::CC_VALUE_MAX));
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::cz1_mini()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_values_in_range() {
        let registry = Registry::cz1_mini();
        let mut seen = HashSet::new();
        for control in registry.iter() {
            assert!(seen.insert(control.id), "duplicate id {:?}", control.id);
            assert!(control.address <= 127, "{}: address", control.id);
            assert!(control.default_value <= 127, "{}: default", control.id);
        }
        assert_eq!(registry.len(), 91);
    }

    #[test]
    fn lookup_hit_and_miss() {
        let registry = Registry::cz1_mini();

        let cutoff = registry.lookup("filter-cutoff").unwrap();
        assert_eq!(cutoff.address, 89);
        assert_eq!(cutoff.default_value, 0);

        assert!(registry.lookup("filter-cutoff-2").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn line_select_carries_the_bank_rule() {
        let registry = Registry::cz1_mini();
        let line = registry.lookup("line-select").unwrap();
        let secondary = line.secondary.unwrap();
        assert_eq!(line.address, 8);
        assert_eq!(secondary.address, 0);
        assert_eq!(secondary.derive.classify(43), 1);

        // Only line select is a compound control.
        let compound = registry.iter().filter(|c| c.secondary.is_some()).count();
        assert_eq!(compound, 1);
    }

    #[test]
    fn reset_all_reproduces_the_default_table_in_order() {
        let registry = Registry::cz1_mini();
        let mut sent = Vec::new();
        registry.reset_all(|address, value| sent.push((address, value)));

        let expected: Vec<(u8, u8)> = registry
            .iter()
            .map(|c| (c.address, c.default_value))
            .collect();
        assert_eq!(sent, expected);
        assert_eq!(sent.len(), registry.len());
        // Registration order starts at the DCO 1 block.
        assert_eq!(sent[0], (13, 0));
        assert_eq!(sent[3], (8, 0));
    }

    #[test]
    fn randomize_all_is_reproducible_under_a_seed() {
        let registry = Registry::cz1_mini();

        let draw = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sent = Vec::new();
            registry.randomize_all(&mut rng, |address, value| sent.push((address, value)));
            sent
        };

        let first = draw(42);
        assert_eq!(first, draw(42));
        assert_ne!(first, draw(43));

        assert_eq!(first.len(), registry.len());
        for ((address, value), control) in first.iter().zip(registry.iter()) {
            assert_eq!(*address, control.address);
            assert!(*value <= 127);
        }
    }
}
