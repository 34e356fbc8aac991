//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament_engine::{
    create_tournament, enroll_participant, Actor, GameMatch, MatchFormat, MemoryRepository,
    Participant, Repository, Role, Tournament, TournamentFormat, TournamentId,
};
use uuid::Uuid;

pub fn director() -> Actor {
    Actor::new(Uuid::new_v4(), Role::Director)
}

pub fn admin() -> Actor {
    Actor::new(Uuid::new_v4(), Role::Admin)
}

pub fn player() -> Actor {
    Actor::new(Uuid::new_v4(), Role::Player)
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Store `tournament` with `n` enrolled participants named P0..Pn-1.
pub fn setup(tournament: Tournament, n: usize) -> (MemoryRepository, Tournament, Actor) {
    let repo = MemoryRepository::new();
    let author = director();
    let t = create_tournament(&repo, tournament, &author).unwrap();
    for i in 0..n {
        enroll_participant(&repo, t.id, Participant::new(format!("P{i}")), &author).unwrap();
    }
    let t = load_tournament(&repo, t.id);
    (repo, t, author)
}

pub fn knockout(n: usize) -> (MemoryRepository, Tournament, Actor) {
    setup(
        Tournament::new("Spring Cup", TournamentFormat::Knockout, MatchFormat::TimeLimited, 30),
        n,
    )
}

pub fn league(n: usize) -> (MemoryRepository, Tournament, Actor) {
    setup(
        Tournament::new("City League", TournamentFormat::League, MatchFormat::TimeLimited, 90),
        n,
    )
}

pub fn load_tournament(repo: &MemoryRepository, id: TournamentId) -> Tournament {
    repo.read(|tx| tx.tournament(id)).unwrap()
}

pub fn stored_matches(repo: &MemoryRepository, id: TournamentId) -> Vec<GameMatch> {
    repo.read(|tx| Ok(tx.tournament_matches(id))).unwrap()
}

pub fn bracket_match(
    repo: &MemoryRepository,
    id: TournamentId,
    stage: u32,
    serial: u32,
) -> GameMatch {
    repo.read(|tx| Ok(tx.bracket_match(id, stage, serial)))
        .unwrap()
        .expect("bracket slot exists")
}

pub fn participant(repo: &MemoryRepository, id: Uuid) -> Participant {
    repo.read(|tx| tx.participant(id)).unwrap()
}
