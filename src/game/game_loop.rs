use crate::board::Outcome;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::InputError;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    display: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            display: GameDisplay::new(),
            input_source,
            renderer,
        }
    }

    pub fn run(&mut self) {
        loop {
            let current_turn = self.engine.board().turn();

            if let Some(outcome) = self.engine.check_game_over() {
                self.display.render_game_state(
                    self.engine.board(),
                    current_turn,
                    self.engine.last_move(),
                    None,
                );
                match outcome {
                    Outcome::Win { winner } => println!("The {} player wins!", winner),
                    Outcome::Tie => println!("Tie game!"),
                }
                break;
            }

            self.renderer
                .render(&mut self.display, &self.engine, current_turn);

            match self.input_source.get_move(current_turn) {
                Ok(Some(input)) => match self.engine.make_move_from_input(input) {
                    Ok(_) => {
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(error) => println!("error: {}", error),
                },
                Ok(None) => println!("Invalid input"),
                Err(InputError::UserExit) => break,
                Err(error) => println!("error: {}", error),
            }
        }
    }
}
