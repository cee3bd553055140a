//! Shape rules for prediction submissions.
//!
//! A knockout round must be submitted whole: exactly one prediction per
//! bracket slot. Extra time is only predicted after a 90 minute draw, and a
//! penalty shootout only after extra time also ends level.

use crate::domain::model::group::MATCHES_PER_GROUP;
use crate::domain::model::{KnockoutPhase, MatchPrediction};
use crate::utils::error::{PredictionsError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_required_field};
use std::collections::HashSet;

pub fn validate_knockout_predictions(
    phase: KnockoutPhase,
    predictions: &[MatchPrediction],
) -> Result<()> {
    let expected = phase.expected_matches();
    if predictions.len() != expected {
        return Err(PredictionsError::BracketSize {
            phase: phase.to_string(),
            expected,
            actual: predictions.len(),
        });
    }

    ensure_unique_matches(predictions)?;
    predictions.iter().try_for_each(validate_knockout_prediction)
}

pub fn validate_knockout_prediction(prediction: &MatchPrediction) -> Result<()> {
    validate_non_empty_string("matchId", &prediction.match_id)?;

    if !prediction.has_extra_time() {
        if !prediction.is_draw_at_full_time() {
            return match prediction.penalties_winner {
                Some(_) => Err(PredictionsError::validation(
                    "penaltiesWinner",
                    &prediction.match_id,
                    "Penalties are only possible after a draw in extra time",
                )),
                None => Ok(()),
            };
        }
        return Err(PredictionsError::validation(
            "homeScoreET",
            &prediction.match_id,
            "A knockout draw after 90 minutes needs an extra time score",
        ));
    }

    if !prediction.is_draw_at_full_time() {
        return Err(PredictionsError::validation(
            "homeScoreET",
            &prediction.match_id,
            "Extra time is only played after a draw at 90 minutes",
        ));
    }

    let home_et = *validate_required_field("homeScoreET", &prediction.home_score_et)?;
    let away_et = *validate_required_field("awayScoreET", &prediction.away_score_et)?;
    if home_et < prediction.home_score || away_et < prediction.away_score {
        return Err(PredictionsError::validation(
            "homeScoreET",
            &prediction.match_id,
            "Extra time scores include the 90 minute goals and cannot be lower",
        ));
    }

    match (home_et == away_et, prediction.penalties_winner) {
        (true, None) => Err(PredictionsError::MissingField {
            field: "penaltiesWinner".to_string(),
        }),
        (false, Some(_)) => Err(PredictionsError::validation(
            "penaltiesWinner",
            &prediction.match_id,
            "Penalties are only possible after a draw in extra time",
        )),
        _ => Ok(()),
    }
}

/// Group matches are settled after 90 minutes.
pub fn validate_group_predictions(predictions: &[MatchPrediction]) -> Result<()> {
    if predictions.len() != MATCHES_PER_GROUP {
        return Err(PredictionsError::validation(
            "predictions",
            &predictions.len().to_string(),
            format!("A group needs exactly {} match predictions", MATCHES_PER_GROUP),
        ));
    }

    ensure_unique_matches(predictions)?;
    for prediction in predictions {
        validate_non_empty_string("matchId", &prediction.match_id)?;
        if prediction.has_extra_time() || prediction.penalties_winner.is_some() {
            return Err(PredictionsError::validation(
                "homeScoreET",
                &prediction.match_id,
                "Group stage matches have no extra time or penalties",
            ));
        }
    }
    Ok(())
}

fn ensure_unique_matches(predictions: &[MatchPrediction]) -> Result<()> {
    let mut seen = HashSet::with_capacity(predictions.len());
    for prediction in predictions {
        if !seen.insert(prediction.match_id.as_str()) {
            return Err(PredictionsError::validation(
                "matchId",
                &prediction.match_id,
                "Match predicted more than once in the same submission",
            ));
        }
    }
    Ok(())
}
