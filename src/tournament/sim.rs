// Computer-vs-computer shootouts for fixtures the human isn't in

use rand::Rng;

use super::team::Team;

const REGULATION_KICKS: u32 = 5;

/// Per-kick conversion chance for a team with `share` of the combined strength
fn kick_probability(share: f32) -> f64 {
    (share * 0.8 + 0.1) as f64
}

/// Play out a shootout between two teams, biased by their strengths
///
/// Five kicks each, then rounds of one kick each until the scores differ.
/// Never returns a draw.
pub fn simulate_match(team1: &Team, team2: &Team, rng: &mut (impl Rng + ?Sized)) -> (u32, u32) {
    let s1 = team1.strength_or_default();
    let s2 = team2.strength_or_default();
    let share1 = s1 / (s1 + s2);
    let (p1, p2) = (kick_probability(share1), kick_probability(1.0 - share1));

    let mut score1 = 0;
    let mut score2 = 0;
    for _ in 0..REGULATION_KICKS {
        score1 += rng.gen_bool(p1) as u32;
        score2 += rng.gen_bool(p2) as u32;
    }
    while score1 == score2 {
        score1 += rng.gen_bool(p1) as u32;
        score2 += rng.gen_bool(p2) as u32;
    }
    (score1, score2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_never_a_draw() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let a = Team::new("a", "A", "X");
        let b = Team::new("b", "B", "X");
        for _ in 0..500 {
            let (s1, s2) = simulate_match(&a, &b, &mut rng);
            assert_ne!(s1, s2);
        }
    }

    #[test]
    fn test_stronger_team_wins_more() {
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        let strong = Team::new("s", "Strong", "X").with_strength(1.0);
        let weak = Team::new("w", "Weak", "X").with_strength(0.6);
        let wins = (0..1000)
            .filter(|_| {
                let (s1, s2) = simulate_match(&strong, &weak, &mut rng);
                s1 > s2
            })
            .count();
        assert!(wins > 550);
    }
}
