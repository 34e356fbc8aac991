//! Integration tests for tournament creation, enrollment and roster import.

mod common;

use common::{director, knockout, league, load_tournament, participant, player, rng};
use tournament_engine::{
    apply_stats_after_match, create_standalone_match, create_tournament, enroll_participant,
    generate_matches, import_roster, record_result, register_participant, Actor, EngineError,
    MatchFormat, MemoryRepository, Participant, Repository, ResultCode, Role, Tournament,
    TournamentFormat,
};
use uuid::Uuid;

#[test]
fn only_directors_and_admins_create_tournaments() {
    let repo = MemoryRepository::new();
    let draft = Tournament::new("Open", TournamentFormat::League, MatchFormat::ScoreLimited, 21);
    assert_eq!(
        create_tournament(&repo, draft.clone(), &player()),
        Err(EngineError::Forbidden)
    );

    let author = director();
    let created = create_tournament(&repo, draft, &author).unwrap();
    assert_eq!(created.author_id, author.id);
    assert_eq!((created.win_points, created.draw_points), (3, 1));
}

#[test]
fn prefilled_roster_is_checked_like_enrollment() {
    let repo = MemoryRepository::new();
    let author = director();
    let ids: Vec<_> = ["Ana", "Ben", "Cleo"]
        .iter()
        .map(|name| register_participant(&repo, Participant::new(*name)).unwrap().id)
        .collect();

    let mut draft =
        Tournament::new("Invitational", TournamentFormat::League, MatchFormat::TimeLimited, 30);
    draft.participants = vec![ids[0], ids[0], ids[1], ids[2]];
    assert_eq!(
        create_tournament(&repo, draft.clone(), &author),
        Err(EngineError::DuplicateParticipant("Ana".to_string()))
    );
    assert!(matches!(
        repo.read(|tx| tx.tournament(draft.id)),
        Err(EngineError::NotFound(..))
    ));

    let shouting = register_participant(&repo, Participant::new("ANA")).unwrap();
    draft.participants = vec![ids[0], ids[1], shouting.id];
    assert_eq!(
        create_tournament(&repo, draft.clone(), &author),
        Err(EngineError::DuplicateParticipant("ANA".to_string()))
    );

    draft.participants = ids.clone();
    let created = create_tournament(&repo, draft, &author).unwrap();
    assert_eq!(created.participants, ids);
    let matches = generate_matches(&repo, created.id, &author, &mut rng(1)).unwrap();
    assert_eq!(matches.len(), 3);
    assert!(matches.iter().all(|m| m.player_a != m.player_b));
}

#[test]
fn names_are_unique_per_roster() {
    let (repo, t, author) = league(3);
    assert_eq!(
        enroll_participant(&repo, t.id, Participant::new("  p1 "), &author),
        Err(EngineError::DuplicateParticipant("p1".to_string()))
    );
    assert!(matches!(
        enroll_participant(&repo, t.id, Participant::new("   "), &author),
        Err(EngineError::Roster(_))
    ));
    assert_eq!(load_tournament(&repo, t.id).participants.len(), 3);
}

#[test]
fn roster_is_frozen_once_matches_exist() {
    let (repo, t, author) = knockout(4);
    generate_matches(&repo, t.id, &author, &mut rng(1)).unwrap();
    assert_eq!(
        enroll_participant(&repo, t.id, Participant::new("Late"), &author),
        Err(EngineError::AlreadyHasMatches(t.id))
    );
}

#[test]
fn strangers_cannot_enroll() {
    let (repo, t, _) = league(3);
    assert_eq!(
        enroll_participant(&repo, t.id, Participant::new("Sneaky"), &player()),
        Err(EngineError::Forbidden)
    );
}

#[test]
fn csv_roster_is_all_or_nothing() {
    let (repo, t, author) = knockout(0);
    let enrolled = import_roster(
        &repo,
        t.id,
        "name,country\nAna,Portugal\nBen,\nCleo,Kenya\nDan,Chile\n".as_bytes(),
        &author,
    )
    .unwrap();
    assert_eq!(enrolled.len(), 4);
    assert_eq!(load_tournament(&repo, t.id).participants.len(), 4);

    let (repo, t, author) = knockout(0);
    let err = import_roster(&repo, t.id, "name\nAna\nBen\nana\n".as_bytes(), &author);
    assert_eq!(err, Err(EngineError::DuplicateParticipant("ana".to_string())));
    assert!(load_tournament(&repo, t.id).participants.is_empty());
}

#[test]
fn one_participant_across_tournaments_shares_counters() {
    let (repo, first, author) = league(2);
    let second = create_tournament(
        &repo,
        Tournament::new("Second", TournamentFormat::League, MatchFormat::TimeLimited, 30),
        &author,
    )
    .unwrap();

    let veteran =
        register_participant(&repo, Participant::new("Veteran").with_country("Peru")).unwrap();
    enroll_participant(&repo, first.id, veteran.clone(), &author).unwrap();
    enroll_participant(&repo, second.id, veteran.clone(), &author).unwrap();
    assert_eq!(
        enroll_participant(&repo, second.id, veteran.clone(), &author),
        Err(EngineError::DuplicateParticipant("Veteran".to_string()))
    );

    let rival = load_tournament(&repo, first.id).participants[0];
    let game =
        create_standalone_match(&repo, veteran.id, rival, MatchFormat::TimeLimited, 20, &author)
            .unwrap();
    record_result(&repo, game.id, 1, 0, ResultCode::PlayerA, &author).unwrap();
    apply_stats_after_match(&repo, game.id, &author).unwrap();

    assert_eq!(participant(&repo, veteran.id).wins, 1);
    assert_eq!(participant(&repo, veteran.id).country.as_deref(), Some("Peru"));
}

#[test]
fn standalone_match_needs_two_distinct_known_participants() {
    let repo = MemoryRepository::new();
    let author = director();
    let ana = register_participant(&repo, Participant::new("Ana")).unwrap();
    assert_eq!(
        create_standalone_match(&repo, ana.id, ana.id, MatchFormat::TimeLimited, 10, &author),
        Err(EngineError::SameParticipant)
    );

    let ghost = Participant::new("Ghost");
    assert!(matches!(
        create_standalone_match(&repo, ana.id, ghost.id, MatchFormat::TimeLimited, 10, &author),
        Err(EngineError::NotFound(..))
    ));

    let ben = register_participant(&repo, Participant::new("Ben")).unwrap();
    let user = Actor::new(Uuid::new_v4(), Role::User);
    assert_eq!(
        create_standalone_match(&repo, ana.id, ben.id, MatchFormat::TimeLimited, 10, &user),
        Err(EngineError::Forbidden)
    );
    let game =
        create_standalone_match(&repo, ana.id, ben.id, MatchFormat::TimeLimited, 10, &author)
            .unwrap();
    assert_eq!(game.tournament_id, None);
    assert_eq!(game.author_id, author.id);
}
