// ABOUTME: Scales a food's per-100g nutrient profile to a requested portion quantity
// ABOUTME: Guards against degenerate portions before adding into the running total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logit Contributors

use logit_core::constants::food::PROFILE_BASIS_GRAMS;
use logit_core::models::{Food, Nutrition, Portion};

use super::ResolutionError;

/// Multiplier converting a per-100g profile into `requested` units of `portion`
///
/// `serving_grams = requested / portion.amount * portion.gram_weight`, and the
/// multiplier is `serving_grams / 100`.
///
/// # Errors
///
/// Returns [`ResolutionError::InvalidQuantity`] for a negative or non-finite
/// request, [`ResolutionError::DegeneratePortion`] when the portion amount is
/// zero, negative, or not finite, and [`ResolutionError::UnusableGramWeight`]
/// for a negative or non-finite gram weight.
pub fn serving_multiplier(portion: &Portion, requested: f32) -> Result<f64, ResolutionError> {
    if !requested.is_finite() || requested < 0.0 {
        return Err(ResolutionError::InvalidQuantity { value: requested });
    }
    if portion.is_degenerate() {
        return Err(ResolutionError::DegeneratePortion {
            fdc_id: portion.fdc_id,
            pid: portion.pid,
            amount: portion.amount,
        });
    }
    if !portion.has_usable_weight() {
        return Err(ResolutionError::UnusableGramWeight {
            fdc_id: portion.fdc_id,
            pid: portion.pid,
            gram_weight: portion.gram_weight,
        });
    }

    let serving_grams =
        f64::from(requested) / f64::from(portion.amount) * f64::from(portion.gram_weight);
    Ok(serving_grams / PROFILE_BASIS_GRAMS)
}

/// Scale `food` to `requested` units of `portion` and add it into `total`
///
/// Returns the multiplier that was applied. `total` is left untouched on error.
///
/// # Errors
///
/// Propagates the rejections of [`serving_multiplier`].
pub fn scale_and_add(
    total: &mut Nutrition,
    food: &Food,
    portion: &Portion,
    requested: f32,
) -> Result<f64, ResolutionError> {
    let multiplier = serving_multiplier(portion, requested)?;
    total.add_scaled(food, multiplier);
    Ok(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cup(amount: f32) -> Portion {
        Portion {
            pid: 9,
            fdc_id: 1,
            amount,
            unit_name: "cup".into(),
            abbr_unit_name: "c".into(),
            gram_weight: 120.0,
        }
    }

    fn flour() -> Food {
        Food {
            fdc_id: 1,
            description: "Wheat flour".into(),
            calories: 100.0,
            protein: 10.0,
            ..Food::default()
        }
    }

    #[test]
    fn test_two_cups_of_a_120g_cup() {
        let mut total = Nutrition::default();
        let multiplier = scale_and_add(&mut total, &flour(), &cup(1.0), 2.0).unwrap();

        assert!((multiplier - 2.4).abs() < 1e-9);
        assert!((total.calories - 240.0).abs() < 1e-6);
        assert!((total.protein - 24.0).abs() < 1e-6);
    }

    #[test]
    fn test_portion_amount_divides_request() {
        // 3 tbsp against a 2-unit portion weighing 120 g
        let multiplier = serving_multiplier(&cup(2.0), 3.0).unwrap();
        assert!((multiplier - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_zero_amount_portion_is_rejected() {
        let mut total = Nutrition::default();
        let result = scale_and_add(&mut total, &flour(), &cup(0.0), 2.0);

        assert_eq!(
            result,
            Err(ResolutionError::DegeneratePortion {
                fdc_id: 1,
                pid: 9,
                amount: 0.0
            })
        );
        assert!(total.is_empty());
        assert!(serving_multiplier(&cup(f32::NAN), 1.0).is_err());
        assert!(serving_multiplier(&cup(-1.0), 1.0).is_err());
    }

    #[test]
    fn test_bad_request_leaves_total_untouched() {
        let mut total = Nutrition {
            calories: 500.0,
            ..Nutrition::default()
        };

        for value in [-2.0, f32::NAN, f32::INFINITY] {
            let result = scale_and_add(&mut total, &flour(), &cup(1.0), value);
            assert!(matches!(result, Err(ResolutionError::InvalidQuantity { .. })));
        }
        assert!((total.calories - 500.0).abs() < 1e-9);

        // zero is a valid, empty contribution
        assert!(serving_multiplier(&cup(1.0), 0.0).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_unusable_gram_weight_is_rejected() {
        let mut total = Nutrition::default();
        for gram_weight in [f32::INFINITY, f32::NAN, -120.0] {
            let portion = Portion {
                gram_weight,
                ..cup(1.0)
            };
            let result = scale_and_add(&mut total, &flour(), &portion, 2.0);
            assert!(matches!(
                result,
                Err(ResolutionError::UnusableGramWeight { fdc_id: 1, pid: 9, .. })
            ));
        }
        assert!(total.is_empty());
    }
}
