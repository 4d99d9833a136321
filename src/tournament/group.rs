// Group stage: round-robin fixtures and league tables

use std::rc::Rc;

use super::team::Team;

/// One match between two teams, played or not
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub team1: Rc<Team>,
    pub team2: Rc<Team>,
    /// (team1 goals, team2 goals) once played
    pub score: Option<(u32, u32)>,
    /// Team going through, for knockout fixtures
    pub advancing: Option<Rc<Team>>,
}

impl Fixture {
    pub fn new(team1: Rc<Team>, team2: Rc<Team>) -> Self {
        Self {
            team1,
            team2,
            score: None,
            advancing: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.score.is_some()
    }

    pub fn involves(&self, team_id: &str) -> bool {
        self.team1.id == team_id || self.team2.id == team_id
    }

    /// Winner on the scoreline; None if unplayed or level
    pub fn decisive_winner(&self) -> Option<&Rc<Team>> {
        match self.score {
            Some((a, b)) if a > b => Some(&self.team1),
            Some((a, b)) if b > a => Some(&self.team2),
            _ => None,
        }
    }

    /// Whether `team_id` played in this fixture and did not go through
    pub fn knocked_out(&self, team_id: &str) -> bool {
        match &self.advancing {
            Some(winner) => self.involves(team_id) && winner.id != team_id,
            None => false,
        }
    }
}

/// League table row
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub team: Rc<Team>,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl Standing {
    pub fn new(team: Rc<Team>) -> Self {
        Self {
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        if scored > conceded {
            self.won += 1;
            self.points += 3;
        } else if scored < conceded {
            self.lost += 1;
        } else {
            self.drawn += 1;
            self.points += 1;
        }
    }
}

/// Every pairing of `teams` exactly once, in (i, j) order with i < j
pub fn round_robin(teams: &[Rc<Team>]) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            fixtures.push(Fixture::new(Rc::clone(&teams[i]), Rc::clone(&teams[j])));
        }
    }
    fixtures
}

/// Sort by points, goal difference, then goals scored (all descending)
///
/// The sort is stable so fully level teams keep their draw order.
pub fn sort_standings(standings: &mut [Standing]) {
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
    });
}

#[derive(Debug, Clone)]
pub struct Group {
    pub name: char,
    pub teams: Vec<Rc<Team>>,
    pub fixtures: Vec<Fixture>,
    pub standings: Vec<Standing>,
}

impl Group {
    pub fn new(name: char, teams: Vec<Rc<Team>>) -> Self {
        let fixtures = round_robin(&teams);
        let standings = teams.iter().map(|t| Standing::new(Rc::clone(t))).collect();
        Self {
            name,
            teams,
            fixtures,
            standings,
        }
    }

    pub fn display_name(&self) -> String {
        format!("Group {}", self.name)
    }

    pub fn is_complete(&self) -> bool {
        self.fixtures.iter().all(Fixture::is_played)
    }

    /// Book a fixture's score and re-sort the table
    ///
    /// Returns false if the fixture doesn't exist or was already played.
    pub fn record(&mut self, fixture: usize, score1: u32, score2: u32) -> bool {
        let Some(f) = self.fixtures.get_mut(fixture) else {
            return false;
        };
        if f.is_played() {
            return false;
        }
        f.score = Some((score1, score2));
        let (id1, id2) = (f.team1.id.clone(), f.team2.id.clone());

        for standing in self.standings.iter_mut() {
            if standing.team.id == id1 {
                standing.record(score1, score2);
            } else if standing.team.id == id2 {
                standing.record(score2, score1);
            }
        }
        sort_standings(&mut self.standings);
        true
    }

    /// 1-based table position
    pub fn position_of(&self, team_id: &str) -> Option<usize> {
        self.standings
            .iter()
            .position(|s| s.team.id == team_id)
            .map(|p| p + 1)
    }

    pub fn winner(&self) -> Option<&Rc<Team>> {
        self.standings.first().map(|s| &s.team)
    }

    pub fn runner_up(&self) -> Option<&Rc<Team>> {
        self.standings.get(1).map(|s| &s.team)
    }
}
