//! Puzzle Mania logic: generation, checking and answer entry.

use super::types::*;
use rand::seq::SliceRandom;
use rand::Rng;

impl SortPuzzle {
    /// Shuffle `1..=max` and keep the first `count` numbers.
    pub fn generate<R: Rng + ?Sized>(config: &PuzzleConfig, rng: &mut R) -> Self {
        let mut pool: Vec<u32> = (1..=config.max).collect();
        pool.shuffle(rng);
        pool.truncate(config.count);
        let mut solution = pool.clone();
        solution.sort_unstable();
        Self {
            numbers: pool,
            solution,
        }
    }

    /// Exact match against the ascending order.
    pub fn check(&self, answer: &[u32]) -> bool {
        answer == self.solution.as_slice()
    }
}

impl PuzzleScreen {
    pub fn new<R: Rng + ?Sized>(config: PuzzleConfig, rng: &mut R) -> Self {
        let puzzle = SortPuzzle::generate(&config, rng);
        Self {
            config,
            puzzle,
            entry: Vec::new(),
            message: None,
            solved: 0,
            attempts: 0,
        }
    }

    /// Replace the puzzle and clear the entry and message.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.puzzle = SortPuzzle::generate(&self.config, rng);
        self.entry.clear();
        self.message = None;
    }
}

/// Process player input.
pub fn process_input<R: Rng + ?Sized>(screen: &mut PuzzleScreen, input: PuzzleInput, rng: &mut R) {
    match input {
        PuzzleInput::Digit(d) => {
            if (1..=screen.config.max).contains(&d) && screen.entry.len() < screen.config.count {
                screen.entry.push(d);
                screen.message = None;
            }
        }
        PuzzleInput::Backspace => {
            screen.entry.pop();
            screen.message = None;
        }
        PuzzleInput::Submit => {
            screen.attempts += 1;
            if screen.puzzle.check(&screen.entry) {
                screen.solved += 1;
                screen.message = Some(PuzzleMessage::Solved);
                log::info!("puzzle: solved {:?}", screen.puzzle.numbers);
            } else {
                screen.message = Some(PuzzleMessage::Wrong);
            }
        }
        PuzzleInput::NewPuzzle => screen.regenerate(rng),
        PuzzleInput::Other => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn screen(seed: u64) -> (PuzzleScreen, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let screen = PuzzleScreen::new(PuzzleConfig::default(), &mut rng);
        (screen, rng)
    }

    #[test]
    fn test_generate_three_distinct() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let p = SortPuzzle::generate(&PuzzleConfig::default(), &mut rng);
            assert_eq!(p.numbers.len(), 3);
            assert!(p.numbers.iter().all(|n| (1..=9).contains(n)));
            let mut dedup = p.numbers.clone();
            dedup.sort_unstable();
            dedup.dedup();
            assert_eq!(dedup.len(), 3);
            assert!(p.solution.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(dedup, p.solution);
        }
    }

    #[test]
    fn test_count_larger_than_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = PuzzleConfig { count: 12, max: 4 };
        let p = SortPuzzle::generate(&config, &mut rng);
        assert_eq!(p.solution, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_check() {
        let p = SortPuzzle {
            numbers: vec![7, 2, 5],
            solution: vec![2, 5, 7],
        };
        assert!(p.check(&[2, 5, 7]));
        assert!(!p.check(&[7, 2, 5]));
        assert!(!p.check(&[2, 5]));
        assert!(!p.check(&[2, 5, 7, 9]));
    }

    #[test]
    fn test_entry_and_submit() {
        let (mut s, mut rng) = screen(8);
        let answer = s.puzzle.solution.clone();
        for d in &answer {
            process_input(&mut s, PuzzleInput::Digit(*d), &mut rng);
        }
        // Entry is capped at the puzzle size.
        process_input(&mut s, PuzzleInput::Digit(1), &mut rng);
        assert_eq!(s.entry, answer);
        process_input(&mut s, PuzzleInput::Submit, &mut rng);
        assert_eq!(s.message, Some(PuzzleMessage::Solved));
        assert_eq!(s.solved, 1);
    }

    #[test]
    fn test_wrong_answer() {
        let (mut s, mut rng) = screen(8);
        process_input(&mut s, PuzzleInput::Submit, &mut rng);
        assert_eq!(s.message, Some(PuzzleMessage::Wrong));
        assert_eq!(s.attempts, 1);
        assert_eq!(s.solved, 0);
    }

    #[test]
    fn test_zero_digit_rejected() {
        let (mut s, mut rng) = screen(8);
        process_input(&mut s, PuzzleInput::Digit(0), &mut rng);
        assert!(s.entry.is_empty());
    }

    #[test]
    fn test_backspace_and_new_puzzle() {
        let (mut s, mut rng) = screen(8);
        process_input(&mut s, PuzzleInput::Digit(4), &mut rng);
        process_input(&mut s, PuzzleInput::Digit(6), &mut rng);
        process_input(&mut s, PuzzleInput::Backspace, &mut rng);
        assert_eq!(s.entry, vec![4]);
        process_input(&mut s, PuzzleInput::Submit, &mut rng);
        process_input(&mut s, PuzzleInput::NewPuzzle, &mut rng);
        assert!(s.entry.is_empty());
        assert_eq!(s.message, None);
        assert_eq!(s.puzzle.numbers.len(), 3);
    }
}
