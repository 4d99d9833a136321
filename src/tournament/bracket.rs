// Tournament bracket: 8 groups of 4, then single elimination
//
// Stages only move forward, and only once every fixture in the current one
// has been played. Recording the last result of a stage advances it.

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::error::TournamentError;
use super::group::{Fixture, Group};
use super::sim::simulate_match;
use super::team::{placeholder_team, Team, TeamSource};

pub const GROUP_COUNT: usize = 8;
pub const TEAMS_PER_GROUP: usize = 4;
pub const TEAM_COUNT: usize = GROUP_COUNT * TEAMS_PER_GROUP;

/// Round of 16 pairings as (group winner, group runner-up) indices
const ROUND_OF_16_PAIRINGS: [(usize, usize); 8] = [
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (1, 0),
    (3, 2),
    (5, 4),
    (7, 6),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Group,
    RoundOf16,
    QuarterFinals,
    SemiFinals,
    Final,
    Complete,
}

impl Stage {
    pub fn display_name(&self) -> &str {
        match self {
            Stage::Group => "Group Stage",
            Stage::RoundOf16 => "Round of 16",
            Stage::QuarterFinals => "Quarter Finals",
            Stage::SemiFinals => "Semi Finals",
            Stage::Final => "Final",
            Stage::Complete => "Tournament Complete",
        }
    }

    pub fn next(&self) -> Stage {
        match self {
            Stage::Group => Stage::RoundOf16,
            Stage::RoundOf16 => Stage::QuarterFinals,
            Stage::QuarterFinals => Stage::SemiFinals,
            Stage::SemiFinals => Stage::Final,
            Stage::Final | Stage::Complete => Stage::Complete,
        }
    }

    pub fn is_knockout(&self) -> bool {
        matches!(
            self,
            Stage::RoundOf16 | Stage::QuarterFinals | Stage::SemiFinals | Stage::Final
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Address of a fixture inside the bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRef {
    Group { group: usize, fixture: usize },
    Knockout { stage: Stage, index: usize },
}

/// How far a team got
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamProgress {
    EliminatedInGroups,
    EliminatedInRoundOf16,
    EliminatedInQuarterFinals,
    EliminatedInSemiFinals,
    RunnerUp,
    Winner,
    StillIn,
}

impl TeamProgress {
    pub fn display_name(&self) -> &str {
        match self {
            TeamProgress::EliminatedInGroups => "Eliminated in Group Stage",
            TeamProgress::EliminatedInRoundOf16 => "Eliminated in Round of 16",
            TeamProgress::EliminatedInQuarterFinals => "Eliminated in Quarter Finals",
            TeamProgress::EliminatedInSemiFinals => "Eliminated in Semi Finals",
            TeamProgress::RunnerUp => "Runner-up",
            TeamProgress::Winner => "Tournament Winner",
            TeamProgress::StillIn => "Still in Tournament",
        }
    }

    pub fn is_eliminated(&self) -> bool {
        !matches!(self, TeamProgress::Winner | TeamProgress::StillIn)
    }
}

pub struct Tournament {
    player_team: Rc<Team>,
    teams: Vec<Rc<Team>>,
    groups: Vec<Group>,
    round_of_16: Vec<Fixture>,
    quarter_finals: Vec<Fixture>,
    semi_finals: Vec<Fixture>,
    final_round: Vec<Fixture>,
    current_stage: Stage,
    winner: Option<Rc<Team>>,
    rng: ChaCha8Rng,
}

impl Tournament {
    /// Draw a tournament: 31 teams from `source` (topped up with
    /// placeholders) plus the human's team, shuffled into 8 groups
    pub fn new(player_team: Team, source: &dyn TeamSource, seed: u64) -> Result<Self, TournamentError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut candidates: Vec<Team> = source
            .teams(&mut rng)
            .into_iter()
            .filter(|t| t.id != player_team.id)
            .collect();
        candidates.shuffle(&mut rng);

        let mut seen = HashSet::new();
        let mut teams: Vec<Team> = candidates
            .into_iter()
            .filter(|t| seen.insert(t.id.clone()))
            .take(TEAM_COUNT - 1)
            .collect();

        let mut index = 0;
        while teams.len() < TEAM_COUNT - 1 {
            let filler = placeholder_team(index, &mut rng);
            index += 1;
            if seen.insert(filler.id.clone()) {
                teams.push(filler);
            }
        }

        let player_id = player_team.id.clone();
        teams.push(player_team);
        teams.shuffle(&mut rng);

        let next_seed: u64 = rng.gen();
        Self::from_teams(teams, &player_id, next_seed)
    }

    /// Build a bracket from exactly 32 teams, grouped in the given order
    /// (teams 0-3 form group A, 4-7 group B, ...)
    pub fn from_teams(teams: Vec<Team>, player_team_id: &str, seed: u64) -> Result<Self, TournamentError> {
        if teams.len() != TEAM_COUNT {
            return Err(TournamentError::WrongTeamCount {
                needed: TEAM_COUNT,
                got: teams.len(),
            });
        }
        let mut seen = HashSet::new();
        for team in &teams {
            if !seen.insert(team.id.as_str()) {
                return Err(TournamentError::DuplicateTeam(team.id.clone()));
            }
        }

        let teams: Vec<Rc<Team>> = teams.into_iter().map(Rc::new).collect();
        let player_team = teams
            .iter()
            .find(|t| t.id == player_team_id)
            .cloned()
            .ok_or_else(|| TournamentError::MissingPlayerTeam(player_team_id.to_string()))?;

        let groups = teams
            .chunks(TEAMS_PER_GROUP)
            .enumerate()
            .map(|(i, chunk)| Group::new((b'A' + i as u8) as char, chunk.to_vec()))
            .collect();

        info!("Tournament drawn with {} as the player's team", player_team.name);

        Ok(Self {
            player_team,
            teams,
            groups,
            round_of_16: Vec::new(),
            quarter_finals: Vec::new(),
            semi_finals: Vec::new(),
            final_round: Vec::new(),
            current_stage: Stage::Group,
            winner: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub fn current_stage(&self) -> Stage {
        self.current_stage
    }

    pub fn player_team(&self) -> &Rc<Team> {
        &self.player_team
    }

    pub fn teams(&self) -> &[Rc<Team>] {
        &self.teams
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Tournament winner once the final has been played
    pub fn winner(&self) -> Option<&Rc<Team>> {
        self.winner.as_ref()
    }

    pub fn is_player_team(&self, team: &Team) -> bool {
        team.id == self.player_team.id
    }

    /// Fixtures of a knockout round (empty until the round is drawn)
    pub fn knockout_round(&self, stage: Stage) -> &[Fixture] {
        match stage {
            Stage::RoundOf16 => &self.round_of_16,
            Stage::QuarterFinals => &self.quarter_finals,
            Stage::SemiFinals => &self.semi_finals,
            Stage::Final => &self.final_round,
            Stage::Group | Stage::Complete => &[],
        }
    }

    pub fn fixture(&self, match_ref: MatchRef) -> Option<&Fixture> {
        match match_ref {
            MatchRef::Group { group, fixture } => self.groups.get(group)?.fixtures.get(fixture),
            MatchRef::Knockout { stage, index } => self.knockout_round(stage).get(index),
        }
    }

    pub fn is_group_stage_complete(&self) -> bool {
        self.groups.iter().all(Group::is_complete)
    }

    fn is_stage_complete(&self, stage: Stage) -> bool {
        match stage {
            Stage::Group => self.is_group_stage_complete(),
            Stage::Complete => true,
            knockout => {
                let round = self.knockout_round(knockout);
                !round.is_empty() && round.iter().all(Fixture::is_played)
            }
        }
    }

    /// Ensure the bracket is in `from` and that stage is fully played
    fn check_can_leave(&self, from: Stage) -> Result<(), TournamentError> {
        if self.current_stage != from {
            return Err(TournamentError::WrongStage {
                current: self.current_stage,
                target: from.next(),
            });
        }
        if !self.is_stage_complete(from) {
            warn!("Cannot leave {}: unplayed matches remain", from);
            return Err(TournamentError::StageIncomplete(from));
        }
        Ok(())
    }

    /// Group winners meet runners-up of the neighbouring group
    pub fn advance_to_knockout(&mut self) -> Result<(), TournamentError> {
        self.check_can_leave(Stage::Group)?;

        let mut round = Vec::with_capacity(ROUND_OF_16_PAIRINGS.len());
        for (winner_group, runner_up_group) in ROUND_OF_16_PAIRINGS {
            let winner = self.groups[winner_group].winner();
            let runner_up = self.groups[runner_up_group].runner_up();
            if let (Some(a), Some(b)) = (winner, runner_up) {
                round.push(Fixture::new(Rc::clone(a), Rc::clone(b)));
            }
        }

        self.round_of_16 = round;
        self.current_stage = Stage::RoundOf16;
        info!("Advanced to {}", self.current_stage);
        Ok(())
    }

    pub fn advance_to_quarter_finals(&mut self) -> Result<(), TournamentError> {
        self.check_can_leave(Stage::RoundOf16)?;
        self.quarter_finals = pair_winners(&self.round_of_16);
        self.current_stage = Stage::QuarterFinals;
        info!("Advanced to {}", self.current_stage);
        Ok(())
    }

    pub fn advance_to_semi_finals(&mut self) -> Result<(), TournamentError> {
        self.check_can_leave(Stage::QuarterFinals)?;
        self.semi_finals = pair_winners(&self.quarter_finals);
        self.current_stage = Stage::SemiFinals;
        info!("Advanced to {}", self.current_stage);
        Ok(())
    }

    pub fn advance_to_final(&mut self) -> Result<(), TournamentError> {
        self.check_can_leave(Stage::SemiFinals)?;
        self.final_round = pair_winners(&self.semi_finals);
        self.current_stage = Stage::Final;
        info!("Advanced to {}", self.current_stage);
        Ok(())
    }

    pub fn complete_tournament(&mut self) -> Result<(), TournamentError> {
        self.check_can_leave(Stage::Final)?;
        self.winner = self.final_round.first().and_then(|f| f.advancing.clone());
        self.current_stage = Stage::Complete;
        if let Some(winner) = &self.winner {
            info!("{} win the tournament", winner.name);
        }
        Ok(())
    }

    fn advance_to_next_stage(&mut self) -> Result<(), TournamentError> {
        match self.current_stage {
            Stage::Group => self.advance_to_knockout(),
            Stage::RoundOf16 => self.advance_to_quarter_finals(),
            Stage::QuarterFinals => self.advance_to_semi_finals(),
            Stage::SemiFinals => self.advance_to_final(),
            Stage::Final => self.complete_tournament(),
            Stage::Complete => Ok(()),
        }
    }

    /// Next unplayed fixture of the current stage, in draw order
    pub fn next_match(&self) -> Option<MatchRef> {
        match self.current_stage {
            Stage::Group => self.groups.iter().enumerate().find_map(|(g, group)| {
                group
                    .fixtures
                    .iter()
                    .position(|f| !f.is_played())
                    .map(|fixture| MatchRef::Group { group: g, fixture })
            }),
            Stage::Complete => None,
            stage => self
                .knockout_round(stage)
                .iter()
                .position(|f| !f.is_played())
                .map(|index| MatchRef::Knockout { stage, index }),
        }
    }

    /// Record a result (team1 goals, team2 goals)
    ///
    /// Knockout fixtures need a winner: a level score is settled by a coin
    /// flip. Completing a stage draws the next one.
    pub fn record_result(&mut self, match_ref: MatchRef, score1: u32, score2: u32) -> Result<(), TournamentError> {
        match match_ref {
            MatchRef::Group { group, fixture } => {
                if self.current_stage != Stage::Group {
                    return Err(TournamentError::NoSuchMatch(match_ref));
                }
                let group = self
                    .groups
                    .get_mut(group)
                    .ok_or(TournamentError::NoSuchMatch(match_ref))?;
                match group.fixtures.get(fixture) {
                    None => return Err(TournamentError::NoSuchMatch(match_ref)),
                    Some(f) if f.is_played() => return Err(TournamentError::AlreadyPlayed(match_ref)),
                    Some(_) => {}
                }
                group.record(fixture, score1, score2);
            }
            MatchRef::Knockout { stage, index } => {
                if stage != self.current_stage {
                    return Err(TournamentError::NoSuchMatch(match_ref));
                }
                let Self {
                    round_of_16,
                    quarter_finals,
                    semi_finals,
                    final_round,
                    rng,
                    ..
                } = self;
                let round = match stage {
                    Stage::RoundOf16 => round_of_16,
                    Stage::QuarterFinals => quarter_finals,
                    Stage::SemiFinals => semi_finals,
                    Stage::Final => final_round,
                    Stage::Group | Stage::Complete => return Err(TournamentError::NoSuchMatch(match_ref)),
                };
                let fixture = round
                    .get_mut(index)
                    .ok_or(TournamentError::NoSuchMatch(match_ref))?;
                if fixture.is_played() {
                    return Err(TournamentError::AlreadyPlayed(match_ref));
                }
                fixture.score = Some((score1, score2));
                fixture.advancing = Some(settle_winner(fixture, rng));
            }
        }

        debug!("Recorded {:?}: {}-{}", match_ref, score1, score2);

        if self.is_stage_complete(self.current_stage) {
            self.advance_to_next_stage()?;
        }
        Ok(())
    }

    /// Simulate every computer-only fixture up to the human's next match
    ///
    /// Returns the human's next fixture, or None once they are out or the
    /// tournament is over.
    pub fn play_until_player_match(&mut self) -> Result<Option<MatchRef>, TournamentError> {
        while let Some(match_ref) = self.next_match() {
            let (team1, team2) = match self.fixture(match_ref) {
                Some(f) if f.involves(&self.player_team.id) => return Ok(Some(match_ref)),
                Some(f) => (Rc::clone(&f.team1), Rc::clone(&f.team2)),
                None => return Err(TournamentError::NoSuchMatch(match_ref)),
            };
            let (score1, score2) = simulate_match(&team1, &team2, &mut self.rng);
            self.record_result(match_ref, score1, score2)?;
        }
        Ok(None)
    }

    /// How far a team has got
    pub fn team_progress(&self, team_id: &str) -> TeamProgress {
        if self.current_stage != Stage::Group {
            let out_in_groups = self
                .groups
                .iter()
                .any(|g| g.position_of(team_id).map_or(false, |p| p > 2));
            if out_in_groups {
                return TeamProgress::EliminatedInGroups;
            }
        }

        let knockouts = [
            (&self.round_of_16, TeamProgress::EliminatedInRoundOf16),
            (&self.quarter_finals, TeamProgress::EliminatedInQuarterFinals),
            (&self.semi_finals, TeamProgress::EliminatedInSemiFinals),
            (&self.final_round, TeamProgress::RunnerUp),
        ];
        for (round, progress) in knockouts {
            if round.iter().any(|f| f.knocked_out(team_id)) {
                return progress;
            }
        }

        match &self.winner {
            Some(winner) if winner.id == team_id => TeamProgress::Winner,
            _ => TeamProgress::StillIn,
        }
    }
}

/// Winner of a played knockout fixture; a level score is a coin flip
fn settle_winner(fixture: &Fixture, rng: &mut (impl Rng + ?Sized)) -> Rc<Team> {
    if let Some(winner) = fixture.decisive_winner() {
        return Rc::clone(winner);
    }
    let winner = if rng.gen_bool(0.5) {
        &fixture.team1
    } else {
        &fixture.team2
    };
    warn!(
        "Level knockout match {} vs {}, {} go through on a coin flip",
        fixture.team1.name, fixture.team2.name, winner.name
    );
    Rc::clone(winner)
}

/// Pair winners of adjacent fixtures: 0 v 1, 2 v 3, ...
fn pair_winners(round: &[Fixture]) -> Vec<Fixture> {
    round
        .chunks(2)
        .filter_map(|pair| match pair {
            [a, b] => match (&a.advancing, &b.advancing) {
                (Some(x), Some(y)) => Some(Fixture::new(Rc::clone(x), Rc::clone(y))),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::team::{GeneratedLeague, PlaceholderRoster};

    fn numbered_teams() -> Vec<Team> {
        (0..TEAM_COUNT)
            .map(|i| Team::new(format!("t{}", i), format!("Team {}", i), "Testland"))
            .collect()
    }

    fn bracket() -> Tournament {
        Tournament::from_teams(numbered_teams(), "t0", 7).unwrap()
    }

    /// Play every group fixture so the first team of each group wins the
    /// group and the second finishes runner-up
    fn finish_groups(t: &mut Tournament) {
        while let Some(match_ref) = t.next_match() {
            if t.current_stage() != Stage::Group {
                break;
            }
            let f = t.fixture(match_ref).unwrap();
            let rank = |id: &str| id.trim_start_matches('t').parse::<usize>().unwrap() % TEAMS_PER_GROUP;
            let (r1, r2) = (rank(&f.team1.id), rank(&f.team2.id));
            let (s1, s2) = if r1 < r2 { (2, 0) } else { (0, 2) };
            t.record_result(match_ref, s1, s2).unwrap();
        }
    }

    /// Play the current knockout round with team1 always winning
    fn finish_round(t: &mut Tournament) {
        let stage = t.current_stage();
        while let Some(MatchRef::Knockout { stage: s, index }) = t.next_match() {
            if s != stage {
                break;
            }
            t.record_result(MatchRef::Knockout { stage: s, index }, 3, 1).unwrap();
        }
    }

    #[test]
    fn test_new_draw_has_32_unique_teams_and_the_player() {
        let player = Team::new("player", "Player United", "Home");
        let t = Tournament::new(player, &PlaceholderRoster::default(), 42).unwrap();

        assert_eq!(t.teams().len(), TEAM_COUNT);
        let ids: HashSet<&str> = t.teams().iter().map(|team| team.id.as_str()).collect();
        assert_eq!(ids.len(), TEAM_COUNT);
        assert!(ids.contains("player"));
        assert_eq!(t.groups().len(), GROUP_COUNT);
        assert!(t.groups().iter().all(|g| g.teams.len() == 4 && g.fixtures.len() == 6));
    }

    #[test]
    fn test_small_roster_topped_up_with_placeholders() {
        let player = Team::new("player", "Player United", "Home");
        let t = Tournament::new(player, &PlaceholderRoster::new(3), 1).unwrap();
        assert_eq!(t.teams().len(), TEAM_COUNT);
    }

    #[test]
    fn test_generated_league_draw() {
        let player = Team::new("player", "Player United", "Home");
        let t = Tournament::new(player, &GeneratedLeague::all(), 5).unwrap();
        assert_eq!(t.teams().len(), TEAM_COUNT);
        assert_eq!(t.teams().iter().filter(|team| team.country == "International").count(), 0);
    }

    #[test]
    fn test_wrong_team_count_rejected() {
        let mut teams = numbered_teams();
        teams.pop();
        assert!(matches!(
            Tournament::from_teams(teams, "t0", 1),
            Err(TournamentError::WrongTeamCount { needed: 32, got: 31 })
        ));
    }

    #[test]
    fn test_advance_before_group_stage_done_fails() {
        let mut t = bracket();
        assert_eq!(t.advance_to_knockout(), Err(TournamentError::StageIncomplete(Stage::Group)));
        assert!(t.advance_to_quarter_finals().is_err());
        assert_eq!(t.current_stage(), Stage::Group);
    }

    #[test]
    fn test_quarter_finals_need_complete_round_of_16() {
        let mut t = bracket();
        finish_groups(&mut t);
        assert_eq!(t.current_stage(), Stage::RoundOf16);

        t.record_result(MatchRef::Knockout { stage: Stage::RoundOf16, index: 0 }, 1, 0)
            .unwrap();
        assert_eq!(
            t.advance_to_quarter_finals(),
            Err(TournamentError::StageIncomplete(Stage::RoundOf16))
        );
        assert_eq!(t.current_stage(), Stage::RoundOf16);
        assert!(t.knockout_round(Stage::QuarterFinals).is_empty());
    }

    #[test]
    fn test_round_of_16_pairings() {
        let mut t = bracket();
        finish_groups(&mut t);

        // Group g's winner is team 4g, runner-up team 4g + 1
        let expected = [
            ("t0", "t5"),
            ("t8", "t13"),
            ("t16", "t21"),
            ("t24", "t29"),
            ("t4", "t1"),
            ("t12", "t9"),
            ("t20", "t17"),
            ("t28", "t25"),
        ];
        let round = t.knockout_round(Stage::RoundOf16);
        assert_eq!(round.len(), 8);
        for (fixture, (a, b)) in round.iter().zip(expected) {
            assert_eq!(fixture.team1.id, a);
            assert_eq!(fixture.team2.id, b);
        }
        assert_eq!(t.team_progress("t2"), TeamProgress::EliminatedInGroups);
        assert_eq!(t.team_progress("t1"), TeamProgress::StillIn);
    }

    #[test]
    fn test_later_rounds_pair_adjacent_winners() {
        let mut t = bracket();
        finish_groups(&mut t);
        finish_round(&mut t);

        assert_eq!(t.current_stage(), Stage::QuarterFinals);
        let qf = t.knockout_round(Stage::QuarterFinals);
        assert_eq!(qf.len(), 4);
        assert_eq!((qf[0].team1.id.as_str(), qf[0].team2.id.as_str()), ("t0", "t8"));
        assert_eq!((qf[3].team1.id.as_str(), qf[3].team2.id.as_str()), ("t20", "t28"));
        assert_eq!(t.team_progress("t5"), TeamProgress::EliminatedInRoundOf16);
    }

    #[test]
    fn test_full_run_to_a_winner() {
        let mut t = bracket();
        finish_groups(&mut t);
        for _ in 0..4 {
            finish_round(&mut t);
        }

        assert_eq!(t.current_stage(), Stage::Complete);
        assert_eq!(t.winner().map(|w| w.id.as_str()), Some("t0"));
        assert_eq!(t.team_progress("t0"), TeamProgress::Winner);
        assert_eq!(t.team_progress("t4"), TeamProgress::RunnerUp);
        assert_eq!(t.team_progress("t16"), TeamProgress::EliminatedInSemiFinals);
        assert!(t.next_match().is_none());
        assert!(t.complete_tournament().is_err());
    }

    #[test]
    fn test_replay_rejected() {
        let mut t = bracket();
        let first = t.next_match().unwrap();
        t.record_result(first, 1, 0).unwrap();
        assert_eq!(t.record_result(first, 0, 1), Err(TournamentError::AlreadyPlayed(first)));
    }

    #[test]
    fn test_knockout_ref_rejected_during_groups() {
        let mut t = bracket();
        let bogus = MatchRef::Knockout { stage: Stage::RoundOf16, index: 0 };
        assert_eq!(t.record_result(bogus, 1, 0), Err(TournamentError::NoSuchMatch(bogus)));
    }

    #[test]
    fn test_level_knockout_score_still_produces_a_winner() {
        let mut t = bracket();
        finish_groups(&mut t);
        let first = MatchRef::Knockout { stage: Stage::RoundOf16, index: 0 };
        t.record_result(first, 2, 2).unwrap();

        let fixture = t.fixture(first).unwrap();
        let advancing = fixture.advancing.as_ref().unwrap();
        assert!(advancing.id == "t0" || advancing.id == "t5");
    }

    #[test]
    fn test_play_until_player_match_stops_at_player() {
        let player = Team::new("player", "Player United", "Home");
        let mut t = Tournament::new(player, &PlaceholderRoster::default(), 9).unwrap();

        let next = t.play_until_player_match().unwrap().unwrap();
        let fixture = t.fixture(next).unwrap();
        assert!(fixture.involves("player"));
        assert!(!fixture.is_played());
    }

    #[test]
    fn test_simulated_tournament_always_finishes() {
        let player = Team::new("player", "Player United", "Home");
        let mut t = Tournament::new(player, &PlaceholderRoster::default(), 10).unwrap();

        // The human loses every match 0-1 (or 1-0 when listed second)
        while let Some(next) = t.play_until_player_match().unwrap() {
            let player_first = t.fixture(next).unwrap().team1.id == "player";
            let (s1, s2) = if player_first { (0, 1) } else { (1, 0) };
            t.record_result(next, s1, s2).unwrap();
        }

        assert_eq!(t.current_stage(), Stage::Complete);
        assert!(t.winner().is_some());
        assert!(t.team_progress("player").is_eliminated());
    }
}
