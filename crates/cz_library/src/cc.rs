//! MIDI CC assignments for the CZ-1 Mini.
//!
//! These are typical CC assignments for phase distortion synthesizers; the
//! same controller number may serve different roles in other firmware
//! revisions, so the registry never assumes addresses are unique.

/// Status byte for a control change on channel 1. OR in the channel (0-15)
/// for other channels.
pub const CONTROL_CHANGE: u8 = 0xB0;

/// Largest controller number / controller value.
pub const CC_VALUE_MAX: u8 = 127;

// Bank select, also driven as the secondary send of the line select control
pub const CC_BANK_SELECT: u8 = 0;

// DCO 1
pub const CC_DCO1_WF1: u8 = 13;
pub const CC_DCO2_WF2: u8 = 14;
pub const CC_DCO1_DCW: u8 = 15;
pub const CC_LINE_SELECT: u8 = 8;

// Vibrato
pub const CC_VIBRATO_WAVE: u8 = 2;
pub const CC_VIBRATO_RATE: u8 = 3;
pub const CC_VIBRATO_SYNC: u8 = 4;
pub const CC_VIBRATO_SYNC_RATE: u8 = 5;
pub const CC_VIBRATO_DEPTH: u8 = 6;
pub const CC_VIBRATO_DELAY: u8 = 7;

// Detune
pub const CC_DETUNE_POLARITY: u8 = 9;
pub const CC_DETUNE_OCT: u8 = 10;
pub const CC_DETUNE_NOTE: u8 = 11;
pub const CC_DETUNE_FINE: u8 = 12;

// DCO 2 (line offset variants of the DCO 1 waveform controls)
pub const CC_DCO1_WF1_LINEOFFSET: u8 = 16;
pub const CC_DCO1_WF2_LINEOFFSET: u8 = 17;

// DCW params
pub const CC_DCO1_DCW_LINEOFFSET: u8 = 18;
pub const CC_DCO1_DCW_KEYFOLLOW: u8 = 19;
pub const CC_DCO1_DCW_KEYFOLLOW_RANGE: u8 = 20;
pub const CC_DCO1_DCW_KEYFOLLOW_LINEOFFSET: u8 = 23;
pub const CC_DCO1_DCW_KEYFOLLOW_RANGE_LINEOFFSET: u8 = 24;

// DCA params
pub const CC_DCO1_DCA_KEYFOLLOW: u8 = 21;
pub const CC_DCO1_DCA_KEYFOLLOW_RANGE: u8 = 22;
pub const CC_DCO1_DCA_KEYFOLLOW_LINEOFFSET: u8 = 25;
pub const CC_DCO1_DCA_KEYFOLLOW_RANGE_LINEOFFSET: u8 = 26;

// DCA envelope
pub const CC_DCA_SUSTAIN_POINT: u8 = 27;
pub const CC_DCA_END_POINT: u8 = 28;
/// DCA envelope stage levels, indexed by stage (0-7).
pub const CC_DCA_LEVEL: [u8; 8] = [29, 30, 31, 32, 33, 34, 35, 36];
/// DCA envelope stage rates, indexed by stage (0-7).
pub const CC_DCA_RATE: [u8; 8] = [37, 38, 39, 40, 41, 42, 43, 44];

// Pitch envelope
pub const CC_PITCH_SUSTAIN_POINT: u8 = 45;
pub const CC_PITCH_END_POINT: u8 = 46;
/// Pitch envelope stage levels, indexed by stage (0-7).
pub const CC_PITCH_LEVEL: [u8; 8] = [47, 48, 49, 50, 51, 52, 53, 54];
/// Pitch envelope stage rates, indexed by stage (0-7).
pub const CC_PITCH_RATE: [u8; 8] = [55, 56, 57, 58, 59, 60, 61, 62];

// DCW envelope
pub const CC_DCW_SUSTAIN_POINT: u8 = 63;
pub const CC_DCW_END_POINT: u8 = 64;
/// DCW envelope stage levels, indexed by stage (0-7).
pub const CC_DCW_LEVEL: [u8; 8] = [65, 66, 67, 68, 69, 70, 71, 72];
/// DCW envelope stage rates, indexed by stage (0-7).
pub const CC_DCW_RATE: [u8; 8] = [73, 74, 75, 76, 77, 78, 79, 80];

// LFO 1
pub const CC_LFO1_WAVE: u8 = 81;
pub const CC_LFO1_AMOUNT: u8 = 82;
pub const CC_LFO1_RATE: u8 = 83;

// Filter EG
pub const CC_FILTER_ATTACK: u8 = 84;
pub const CC_FILTER_DECAY: u8 = 85;
pub const CC_FILTER_SUSTAIN: u8 = 86;
pub const CC_FILTER_RELEASE: u8 = 87;

// Filter
pub const CC_FILTER_ENV_AMOUNT: u8 = 88;
pub const CC_FILTER_CUTOFF: u8 = 89;
pub const CC_FILTER_RESONANCE: u8 = 90;

// Chorus
pub const CC_CHORUS_RATE: u8 = 91;
pub const CC_CHORUS_DEPTH: u8 = 92;
