//! Property tests for the oracle, the palette generator and the round timer.

use proptest::prelude::*;

use chroma_round::color::HUE_STEP;
use chroma_round::oracle::largest_index_of;
use chroma_round::{
    contrast, largest_index, AttributeVector, ButtonIndex, HarmonyGenerator, PaletteGenerator,
    RoundRng, RoundState,
};

fn totals() -> impl Strategy<Value = [f32; 4]> {
    // Small integer-valued totals so ties show up often.
    prop::array::uniform4(0u8..6).prop_map(|a| a.map(f32::from))
}

proptest! {
    /// The oracle picks a maximal element, and the first one on ties.
    #[test]
    fn prop_largest_index_is_first_maximum(values in totals()) {
        let attributes = AttributeVector::new(values).unwrap();
        let index = largest_index(&attributes);
        let max = values.iter().copied().fold(f32::MIN, f32::max);

        prop_assert_eq!(attributes.get(index), max);
        for earlier in &values[..index.position()] {
            prop_assert!(*earlier < max);
        }
    }

    /// Real-valued totals agree with the slice entry point.
    #[test]
    fn prop_slice_and_vector_agree(values in prop::array::uniform4(0.0f32..1000.0)) {
        let from_slice = largest_index_of(&values).unwrap();
        let from_vector = largest_index(&AttributeVector::new(values).unwrap());
        prop_assert_eq!(from_slice, from_vector);
    }

    /// Anything but four values is rejected.
    #[test]
    fn prop_wrong_length_rejected(values in prop::collection::vec(0.0f32..10.0, 0..10)) {
        prop_assume!(values.len() != 4);
        prop_assert!(largest_index_of(&values).is_err());
    }

    /// Generated palettes clear the threshold and keep quarter-turn hue spacing.
    #[test]
    fn prop_palette_contrast_and_spacing(seed in any::<u64>(), min_contrast in 0.0f32..=0.4) {
        let mut generator = HarmonyGenerator::new(RoundRng::new(seed));
        let palette = generator.generate(min_contrast).unwrap();
        let rgb = palette.rgb();

        for i in 0..4 {
            for j in (i + 1)..4 {
                prop_assert!(contrast(rgb[i], rgb[j]) >= min_contrast);
            }
        }

        let base = palette.colors()[0].hue;
        for (i, color) in palette.colors().iter().enumerate() {
            let offset = (color.hue - base - i as f32 * HUE_STEP).rem_euclid(1.0);
            prop_assert!(offset < 1e-4 || offset > 1.0 - 1e-4);
        }
    }

    /// Splitting a tick into pieces consumes the same time while active.
    #[test]
    fn prop_tick_accumulates(pieces in 1usize..20, total in 0.0f32..30.0) {
        let mut split = RoundState::new(60.0);
        let mut whole = RoundState::new(60.0);

        for _ in 0..pieces {
            split.tick(total / pieces as f32);
        }
        whole.tick(total);

        prop_assert!((split.time_remaining() - whole.time_remaining()).abs() < 1e-3);
        prop_assert!(split.is_active() && whole.is_active());
    }

    /// Displayed seconds are never negative, whatever the overshoot.
    #[test]
    fn prop_displayed_seconds_non_negative(start in 0.1f32..5.0, dt in 0.0f32..20.0) {
        let mut state = RoundState::new(start);
        state.tick(dt);
        let expected = state.time_remaining().round().max(0.0) as u32;
        prop_assert_eq!(state.displayed_seconds(), expected);
    }

    /// Only the submitted-equals-correct case scores.
    #[test]
    fn prop_answer_scores_iff_correct(submitted in 1u8..=4, correct in 1u8..=4) {
        let mut state = RoundState::new(60.0);
        let submitted = ButtonIndex::new(submitted).unwrap();
        let correct = ButtonIndex::new(correct).unwrap();
        state.answer(submitted, correct, 2.0);

        prop_assert_eq!(state.is_active(), submitted == correct);
        prop_assert_eq!(state.score(), u32::from(submitted == correct));
    }
}
