//! Snake logic: steering, stepping, growth and apple placement.

use super::types::*;
use crate::collision::{Aabb, Cell, CollisionRules, Contact, GridSize, Verdict};
use crate::core::input::{Command, InputEffect};
use crate::core::render::{Paint, RenderSurface};
use crate::core::session::TickInterval;
use crate::core::spawn::rejection_sample;
use crate::core::world::World;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::collections::VecDeque;

impl World for SnakeWorld {
    fn name(&self) -> &'static str {
        "snake"
    }

    fn rules(&self) -> CollisionRules {
        CollisionRules::SelfOccupancy {
            include_vacating_tail: self.config.include_vacating_tail,
        }
    }

    fn tick_interval(&self) -> TickInterval {
        TickInterval::Fixed(self.config.tick_ms)
    }

    fn field_size(&self) -> (f64, f64) {
        (
            f64::from(self.config.grid_width) * self.config.cell_px,
            f64::from(self.config.grid_height) * self.config.cell_px,
        )
    }

    fn reset(&mut self) {
        self.reset_state();
    }

    fn on_command(&mut self, command: Command) -> InputEffect {
        match Direction::from_command(command) {
            Some(_) => InputEffect::Latch,
            None => InputEffect::Ignored,
        }
    }

    fn integrate(&mut self, latched: Option<Command>) {
        if let Some(dir) = latched.and_then(Direction::from_command) {
            // A one-cell snake has no neck to run into.
            if self.body.len() <= 1 || dir != self.direction.opposite() {
                self.direction = dir;
            }
        }
        self.pending_head = Some(self.head().offset(self.direction.delta()));
    }

    fn contact(&self) -> Contact<'_> {
        let head = self.pending_head.unwrap_or_else(|| self.head());
        Contact::Grid {
            head,
            body: &self.body,
            grid: self.grid(),
            growing: self.apple == Some(head),
        }
    }

    fn award(&mut self, _verdict: Verdict, rng: &mut dyn RngCore) -> u32 {
        let Some(head) = self.pending_head.take() else {
            return 0;
        };
        self.body.push_front(head);
        if self.apple != Some(head) {
            self.body.pop_back();
            return 0;
        }

        self.apple = place_apple(self.grid(), &self.body, rng);
        if self.apple.is_none() {
            log::info!("snake: board full at length {}", self.body.len());
        }
        1
    }

    fn prune(&mut self) {
        // A terminal step never commits its head.
        self.pending_head = None;
    }

    fn draw(&self, surface: &mut dyn RenderSurface) {
        let s = self.config.cell_px;
        let cell_rect = |cell: Cell| Aabb::new(f64::from(cell.x) * s, f64::from(cell.y) * s, s, s);
        for &seg in &self.body {
            surface.fill_rect(cell_rect(seg), Paint::Snake);
        }
        if let Some(apple) = self.apple {
            surface.fill_rect(cell_rect(apple), Paint::Apple);
        }
    }
}

/// Random free cell for the apple, or `None` when the body fills the grid.
///
/// Draws uniformly until a free cell comes up; after `8 * cells` rejections
/// it picks among the remaining free cells directly.
pub fn place_apple(grid: GridSize, body: &VecDeque<Cell>, rng: &mut dyn RngCore) -> Option<Cell> {
    if body.len() >= grid.cell_count() {
        return None;
    }
    let sampled = sample_apple(body, || random_cell(grid, &mut *rng), grid.cell_count() * 8);
    match sampled {
        Some((cell, _)) => Some(cell),
        None => free_cells(grid, body).choose(rng).copied(),
    }
}

/// Rejection sampling over `draw`; returns the accepted cell and the number
/// of draws it took.
pub fn sample_apple<D>(body: &VecDeque<Cell>, draw: D, max_attempts: usize) -> Option<(Cell, usize)>
where
    D: FnMut() -> Cell,
{
    rejection_sample(draw, |cell| body.contains(&cell), max_attempts)
}

fn random_cell(grid: GridSize, rng: &mut dyn RngCore) -> Cell {
    Cell::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{GameLoopEngine, TickOutcome};
    use crate::core::render::DisplayList;
    use crate::core::session::SessionState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cells(list: &[(i16, i16)]) -> VecDeque<Cell> {
        list.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    fn started(config: SnakeConfig) -> GameLoopEngine<SnakeWorld> {
        let mut engine = GameLoopEngine::new(SnakeWorld::new(config));
        engine.start();
        engine
    }

    #[test]
    fn test_first_step_moves_up() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = started(SnakeConfig::default());
        assert_eq!(engine.tick(&mut rng), TickOutcome::Continue);
        assert_eq!(engine.world().body, cells(&[(8, 6), (8, 7)]));
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_steering_is_latched_until_tick() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = started(SnakeConfig::default());
        engine.handle_input(Command::Left);
        assert_eq!(engine.world().direction, Direction::Up);
        engine.tick(&mut rng);
        assert_eq!(engine.world().direction, Direction::Left);
        assert_eq!(engine.world().head(), Cell::new(7, 7));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = started(SnakeConfig::default());
        engine.handle_input(Command::Down);
        assert_eq!(engine.tick(&mut rng), TickOutcome::Continue);
        assert_eq!(engine.world().direction, Direction::Up);
        assert_eq!(engine.world().head(), Cell::new(8, 6));
    }

    #[test]
    fn test_single_cell_snake_may_reverse() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SnakeConfig {
            start_body: vec![Cell::new(5, 5)],
            ..SnakeConfig::default()
        };
        let mut engine = started(config);
        engine.handle_input(Command::Down);
        engine.tick(&mut rng);
        assert_eq!(engine.world().head(), Cell::new(5, 6));
    }

    #[test]
    fn test_only_last_input_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut engine = started(SnakeConfig::default());
        engine.handle_input(Command::Left);
        engine.handle_input(Command::Right);
        engine.tick(&mut rng);
        assert_eq!(engine.world().head(), Cell::new(9, 7));
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = SnakeConfig {
            apple_start: Cell::new(8, 6),
            ..SnakeConfig::default()
        };
        let mut engine = started(config);
        engine.tick(&mut rng);

        let world = engine.world();
        assert_eq!(world.body, cells(&[(8, 6), (8, 7), (8, 8)]));
        assert_eq!(engine.score(), 1);
        let apple = world.apple.unwrap();
        assert!(!world.body.contains(&apple));
        assert!(world.grid().contains(apple));
    }

    #[test]
    fn test_wall_hit_is_terminal() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = SnakeConfig {
            start_body: vec![Cell::new(0, 3), Cell::new(1, 3)],
            start_direction: Direction::Left,
            ..SnakeConfig::default()
        };
        let mut engine = started(config);
        assert_eq!(engine.tick(&mut rng), TickOutcome::GameOver { score: 0 });
        assert_eq!(engine.state(), SessionState::GameOver);
        // The losing move is not committed.
        assert_eq!(engine.world().body, cells(&[(0, 3), (1, 3)]));
        assert_eq!(engine.world().pending_head, None);
    }

    #[test]
    fn test_self_collision() {
        let mut rng = StdRng::seed_from_u64(1);
        // Head at (2,2) heading down into its own neck loop.
        let config = SnakeConfig {
            start_body: vec![
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(3, 3),
                Cell::new(2, 3),
                Cell::new(1, 3),
            ],
            start_direction: Direction::Down,
            ..SnakeConfig::default()
        };
        let mut engine = started(config);
        assert!(matches!(engine.tick(&mut rng), TickOutcome::GameOver { .. }));
    }

    fn tail_chase(include_vacating_tail: bool) -> TickOutcome {
        let mut rng = StdRng::seed_from_u64(1);
        // 2x2 loop: the head moves into the cell the tail leaves.
        let config = SnakeConfig {
            start_body: vec![
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(0, 1),
                Cell::new(0, 0),
            ],
            start_direction: Direction::Left,
            include_vacating_tail,
            ..SnakeConfig::default()
        };
        let mut engine = started(config);
        engine.tick(&mut rng)
    }

    #[test]
    fn test_tail_chasing_allowed_by_default() {
        assert_eq!(tail_chase(false), TickOutcome::Continue);
    }

    #[test]
    fn test_tail_chasing_counts_when_configured() {
        assert!(matches!(tail_chase(true), TickOutcome::GameOver { .. }));
    }

    #[test]
    fn test_tail_stays_when_growing_into_it() {
        let config = SnakeConfig {
            start_body: vec![
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(0, 1),
                Cell::new(0, 0),
            ],
            start_direction: Direction::Left,
            ..SnakeConfig::default()
        };
        let mut world = SnakeWorld::new(config);
        world.integrate(None);
        // Pretend the apple sits on the tail cell: the tail does not move.
        world.apple = Some(Cell::new(0, 0));
        assert_eq!(world.rules().check(&world.contact()), Verdict::Terminal);
    }

    #[test]
    fn test_sample_apple_rejects_occupied_draw() {
        let body = cells(&[(8, 7), (8, 8)]);
        let mut script = vec![Cell::new(8, 8), Cell::new(3, 4)].into_iter();
        let result = sample_apple(&body, || script.next().unwrap_or_default(), 10);
        assert_eq!(result, Some((Cell::new(3, 4), 2)));
    }

    #[test]
    fn test_seeded_placement_retries_past_body() {
        // 3x3 board with a single free cell: most seeds need several draws.
        let grid = GridSize { width: 3, height: 3 };
        let body: VecDeque<Cell> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Cell::new(x, y)))
            .filter(|&c| c != Cell::new(2, 1))
            .collect();

        let mut saw_retry = false;
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (cell, attempts) =
                sample_apple(&body, || random_cell(grid, &mut rng), 1000).unwrap();
            assert_eq!(cell, Cell::new(2, 1));
            saw_retry |= attempts > 1;
        }
        assert!(saw_retry);
    }

    #[test]
    fn test_place_apple_never_on_body() {
        let mut rng = StdRng::seed_from_u64(77);
        let grid = GridSize { width: 4, height: 4 };
        let body = cells(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]);
        for _ in 0..200 {
            let apple = place_apple(grid, &body, &mut rng).unwrap();
            assert!(!body.contains(&apple));
            assert!(grid.contains(apple));
        }
    }

    #[test]
    fn test_place_apple_full_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = GridSize { width: 2, height: 1 };
        let body = cells(&[(0, 0), (1, 0)]);
        assert_eq!(place_apple(grid, &body, &mut rng), None);
    }

    #[test]
    fn test_draw_paints_body_and_apple() {
        let world = SnakeWorld::new(SnakeConfig::default());
        let mut list = DisplayList::new(800.0, 600.0);
        world.draw(&mut list);
        assert_eq!(list.count_paint(Paint::Snake), 2);
        assert_eq!(list.count_paint(Paint::Apple), 1);
        assert_eq!(world.field_size(), (800.0, 600.0));
    }

    #[test]
    fn test_jump_ignored() {
        let mut world = SnakeWorld::new(SnakeConfig::default());
        assert_eq!(world.on_command(Command::Jump), InputEffect::Ignored);
        assert_eq!(world.on_command(Command::Up), InputEffect::Latch);
    }
}
