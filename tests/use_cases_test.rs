mod support;

use support::{repositories, FakeBackend, LEAGUE_ID, PREDICTION_ID};
use wc_predictions::domain::model::{
    Awards, Credentials, KnockoutPhase, LeagueCategory, MatchPrediction, NewLeague,
    PenaltiesWinner, ProfileUpdate,
};
use wc_predictions::{AppContainer, PredictionsError, SessionContext};

fn container(backend: &std::sync::Arc<FakeBackend>) -> AppContainer {
    AppContainer::new(repositories(backend), SessionContext::new())
}

fn full_round(phase: KnockoutPhase, count: usize) -> Vec<MatchPrediction> {
    (0..count)
        .map(|i| MatchPrediction::regular_time(format!("{}-{}", phase, i), 2, 1))
        .collect()
}

const BAD_IDS: [&str; 5] = [
    "",
    "   ",
    "not-a-uuid",
    "5b1f0e3a-8c2d-4f6e-9a7b-3c4d5e6f7a8",
    "5b1f0e3a8c2d4f6e9a7b3c4d5e6f7a8b",
];

#[tokio::test]
async fn test_get_league_by_id_forwards_and_returns_none() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    let league = app.get_league_by_id().execute(LEAGUE_ID).await.unwrap();
    assert!(league.is_none());
    assert_eq!(backend.calls(), 1);

    *backend.league.lock().unwrap() = Some(support::league());
    let league = app.get_league_by_id().execute(LEAGUE_ID).await.unwrap();
    assert_eq!(league.unwrap().name, "Office pool");
    assert_eq!(backend.calls(), 2);
}

#[tokio::test]
async fn test_uppercase_uuid_is_accepted() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    app.get_league_ranking()
        .execute(&LEAGUE_ID.to_uppercase())
        .await
        .unwrap();
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_malformed_ids_never_reach_repositories() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    for id in BAD_IDS {
        let results = vec![
            app.get_match_by_id().execute(id).await.map(|_| ()),
            app.get_team_by_id().execute(id).await.map(|_| ()),
            app.get_stadium_by_id().execute(id).await.map(|_| ()),
            app.get_players_by_team().execute(id).await.map(|_| ()),
            app.get_player_by_id().execute(id).await.map(|_| ()),
            app.get_league_by_id().execute(id).await.map(|_| ()),
            app.leave_league().execute(id).await,
            app.get_league_ranking().execute(id).await.map(|_| ()),
            app.get_league_members().execute(id).await.map(|_| ()),
            app.get_prediction_by_id().execute(id).await.map(|_| ()),
            app.create_prediction().execute(id).await.map(|_| ()),
            app.get_prediction_stats().execute(id).await.map(|_| ()),
            app.create_checkout().execute(id).await.map(|_| ()),
            app.submit_knockout_predictions()
                .execute(id, KnockoutPhase::Final, full_round(KnockoutPhase::Final, 1))
                .await
                .map(|_| ()),
            app.save_awards().execute(id, Awards::default()).await.map(|_| ()),
        ];
        for result in results {
            let err = result.unwrap_err();
            assert!(err.is_validation(), "{:?} for id {:?}", err, id);
        }
    }

    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_blank_non_uuid_identifiers_are_rejected() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    assert!(app.get_group_standings().execute(" ").await.is_err());
    assert!(app.join_league().execute("").await.is_err());
    assert!(app.get_payment_status().execute("\t").await.is_err());
    assert!(app.verify_email().execute("").await.is_err());
    assert_eq!(backend.calls(), 0);

    app.get_group_standings().execute("A").await.unwrap();
    app.join_league().execute("  ABC123 ").await.unwrap();
    app.get_payment_status().execute("cs_test_1").await.unwrap();
    assert_eq!(backend.calls(), 3);
}

#[tokio::test]
async fn test_category_filter() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    for bad in ["", "premium", "Friends", "all"] {
        let err = app.get_leagues_by_category().execute(bad).await.unwrap_err();
        assert!(
            matches!(err, PredictionsError::InvalidCategory { .. }),
            "{:?}",
            err
        );
    }
    assert_eq!(backend.calls(), 0);

    app.get_leagues_by_category().execute("community").await.unwrap();
    assert_eq!(
        *backend.last_category.lock().unwrap(),
        Some(Some(LeagueCategory::Community))
    );

    app.get_public_leagues().execute().await.unwrap();
    assert_eq!(*backend.last_category.lock().unwrap(), Some(None));
}

#[tokio::test]
async fn test_matches_by_phase_parses_phase() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    assert!(app.get_matches_by_phase().execute("ROUND_OF_64").await.is_err());
    assert_eq!(backend.calls(), 0);

    app.get_matches_by_phase().execute("group_stage").await.unwrap();
    assert_eq!(backend.calls(), 1);
}

#[tokio::test]
async fn test_knockout_size_mismatch_is_rejected_before_the_call() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    for phase in KnockoutPhase::ALL {
        let expected = phase.expected_matches();
        for count in [0, expected - 1, expected + 1] {
            let err = app
                .submit_knockout_predictions()
                .execute(PREDICTION_ID, phase, full_round(phase, count))
                .await
                .unwrap_err();
            match err {
                PredictionsError::BracketSize {
                    expected: e,
                    actual,
                    ..
                } => {
                    assert_eq!(e, expected);
                    assert_eq!(actual, count);
                }
                other => panic!("unexpected error {:?}", other),
            }
        }
    }

    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_knockout_submission_forwards_full_round() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    let mut predictions = full_round(KnockoutPhase::SemiFinals, 1);
    predictions.push(
        MatchPrediction::regular_time("sf-2", 1, 1)
            .with_extra_time(2, 2)
            .with_penalties(PenaltiesWinner::Away),
    );

    let result = app
        .submit_knockout_predictions()
        .execute(PREDICTION_ID, KnockoutPhase::SemiFinals, predictions.clone())
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.matches_saved, 2);

    let (id, phase, sent) = backend.last_knockout.lock().unwrap().clone().unwrap();
    assert_eq!(id, PREDICTION_ID);
    assert_eq!(phase, KnockoutPhase::SemiFinals);
    assert_eq!(sent, predictions);
}

#[tokio::test]
async fn test_knockout_draw_without_extra_time_is_rejected() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    let predictions = vec![MatchPrediction::regular_time("final", 1, 1)];
    let err = app
        .submit_knockout_predictions()
        .execute(PREDICTION_ID, KnockoutPhase::Final, predictions)
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_group_predictions_require_six_matches() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    let five: Vec<_> = (0..5)
        .map(|i| MatchPrediction::regular_time(format!("g-{}", i), 0, 0))
        .collect();
    assert!(app
        .save_group_predictions()
        .execute(PREDICTION_ID, "A", five)
        .await
        .is_err());
    assert_eq!(backend.calls(), 0);

    let six: Vec<_> = (0..6)
        .map(|i| MatchPrediction::regular_time(format!("g-{}", i), 0, 0))
        .collect();
    let result = app
        .save_group_predictions()
        .execute(PREDICTION_ID, "A", six)
        .await
        .unwrap();
    assert_eq!(result.matches_saved, 6);
}

#[tokio::test]
async fn test_create_league_validates_name() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    let league = |name: &str| NewLeague {
        name: name.to_string(),
        description: None,
        category: LeagueCategory::Friends,
        is_public: true,
    };

    assert!(app.create_league().execute(league("  ")).await.is_err());
    assert!(app
        .create_league()
        .execute(league(&"x".repeat(51)))
        .await
        .is_err());
    assert_eq!(backend.calls(), 0);

    let created = app.create_league().execute(league("Sunday five")).await.unwrap();
    assert_eq!(created.name, "Sunday five");
    assert_eq!(created.category, LeagueCategory::Friends);
}

#[tokio::test]
async fn test_save_awards_checks_each_pick() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    let awards = Awards {
        golden_boot_player_id: Some("kane".to_string()),
        ..Awards::default()
    };
    assert!(app.save_awards().execute(PREDICTION_ID, awards).await.is_err());
    assert_eq!(backend.calls(), 0);

    let awards = Awards {
        champion_team_id: Some(LEAGUE_ID.to_string()),
        ..Awards::default()
    };
    let saved = app.save_awards().execute(PREDICTION_ID, awards.clone()).await.unwrap();
    assert_eq!(saved, awards);
}

#[tokio::test]
async fn test_verify_email_requires_verified_user() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    let err = app.verify_email().execute("token-123").await.unwrap_err();
    assert!(matches!(err, PredictionsError::DomainConsistency { .. }));

    backend
        .verified
        .store(true, std::sync::atomic::Ordering::SeqCst);
    let user = app.verify_email().execute("token-123").await.unwrap();
    assert!(user.is_email_verified);
}

#[tokio::test]
async fn test_login_and_logout_update_session() {
    let backend = FakeBackend::new();
    let app = container(&backend);
    assert!(!app.session().is_authenticated());

    let credentials = Credentials {
        email: "ana@example.com".to_string(),
        password: "secret".to_string(),
    };
    app.login().execute(credentials).await.unwrap();
    assert_eq!(app.session().token().as_deref(), Some("token-login"));
    assert_eq!(app.session().current_user().unwrap().display_name, "Ana");

    let updated = app
        .update_profile()
        .execute(ProfileUpdate {
            display_name: "Ana M.".to_string(),
            avatar_url: None,
        })
        .await
        .unwrap();
    assert_eq!(updated.display_name, "Ana M.");
    assert_eq!(app.session().current_user().unwrap().display_name, "Ana M.");

    app.logout().execute().await.unwrap();
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_session_when_server_fails() {
    let backend = FakeBackend::new();
    let app = AppContainer::new(repositories(&backend), SessionContext::with_token("stale"));

    *backend.fail_with_status.lock().unwrap() = Some(503);
    assert!(app.logout().execute().await.is_err());
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_repository_errors_propagate_unchanged() {
    let backend = FakeBackend::new();
    let app = container(&backend);
    *backend.fail_with_status.lock().unwrap() = Some(500);

    let err = app.get_prediction_stats().execute(PREDICTION_ID).await.unwrap_err();
    match err {
        PredictionsError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend failed with 500");
        }
        other => panic!("unexpected error {:?}", other),
    }

    let err = app.get_calendar().execute().await.unwrap_err();
    assert!(!err.is_validation());
    assert_eq!(backend.calls(), 2);
}

#[test]
fn test_use_cases_run_on_a_blocking_runtime() {
    let backend = FakeBackend::new();
    let app = container(&backend);

    let stats = tokio_test::block_on(app.get_prediction_stats().execute(PREDICTION_ID)).unwrap();
    assert_eq!(stats.completion_percentage, 50);
    assert!(!stats.is_complete());
}
