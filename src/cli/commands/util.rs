//! Shared utilities for CLI commands.

use tictactotal::board::Board;
use tictactotal::game::engine::EngineConfig;
use tictactotal::game::game_loop::GameLoop;
use tictactotal::game::input_source::InputSource;
use tictactotal::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config);
    game.run();
}

pub(crate) fn create_config(starting_position: Board) -> EngineConfig {
    EngineConfig { starting_position }
}
