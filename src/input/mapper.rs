use crate::game::{Direction, Phase};

/// Normalized input, independent of keyboard, button or swipe origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    PauseToggle,
    Resume,
    /// Enter / "play again": restarts a finished game, resumes a paused one
    Confirm,
    Restart,
}

/// What the session should do in response to an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Resume,
    Restart,
    Ignore,
}

/// Turns input events into commands and remembers the committed direction.
///
/// The committed direction is the only state kept here. The tick reads it,
/// and only an accepted turn writes it.
#[derive(Debug, Clone)]
pub struct InputMapper {
    committed: Direction,
    initial: Direction,
}

impl InputMapper {
    pub fn new(initial: Direction) -> Self {
        Self {
            committed: initial,
            initial,
        }
    }

    /// Mapper for a game already heading `current`; restarts return to `initial`
    pub fn resuming(initial: Direction, current: Direction) -> Self {
        Self {
            committed: current,
            initial,
        }
    }

    /// Direction the next tick should apply
    pub fn committed(&self) -> Direction {
        self.committed
    }

    /// Back to the starting direction, for a restart
    pub fn reset(&mut self) {
        self.committed = self.initial;
    }

    /// Resolve `event` in the given `phase`.
    ///
    /// A turn is accepted iff it is off the committed direction's axis and
    /// does not reverse `applied`, the direction the most recent tick moved
    /// in. Two turns between ticks therefore cannot reverse the bird.
    pub fn resolve(&mut self, phase: Phase, applied: Direction, event: InputEvent) -> Command {
        match phase {
            Phase::Over => match event {
                InputEvent::Restart | InputEvent::Confirm | InputEvent::PauseToggle => {
                    Command::Restart
                }
                InputEvent::Move(_) | InputEvent::Resume => Command::Ignore,
            },
            Phase::Paused => match event {
                InputEvent::PauseToggle => Command::TogglePause,
                InputEvent::Resume | InputEvent::Confirm => Command::Resume,
                InputEvent::Restart => Command::Restart,
                InputEvent::Move(_) => Command::Ignore,
            },
            Phase::Running => match event {
                InputEvent::Move(direction) => {
                    if direction.shares_axis(self.committed) || direction.is_opposite(applied) {
                        return Command::Ignore;
                    }
                    self.committed = direction;
                    Command::Turn(direction)
                }
                InputEvent::PauseToggle => Command::TogglePause,
                InputEvent::Restart => Command::Restart,
                InputEvent::Resume | InputEvent::Confirm => Command::Ignore,
            },
        }
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(Direction::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_accepted_off_axis() {
        let mut mapper = InputMapper::new(Direction::Right);

        let command = mapper.resolve(Phase::Running, Direction::Right, InputEvent::Move(Direction::Up));

        assert_eq!(command, Command::Turn(Direction::Up));
        assert_eq!(mapper.committed(), Direction::Up);
    }

    #[test]
    fn test_same_axis_rejected() {
        let mut mapper = InputMapper::new(Direction::Right);

        for direction in [Direction::Left, Direction::Right] {
            let command =
                mapper.resolve(Phase::Running, Direction::Right, InputEvent::Move(direction));
            assert_eq!(command, Command::Ignore);
            assert_eq!(mapper.committed(), Direction::Right);
        }
    }

    #[test]
    fn test_never_accepts_committed_axis() {
        for initial in Direction::ALL {
            for attempt in Direction::ALL {
                let mut mapper = InputMapper::new(initial);
                let command = mapper.resolve(Phase::Running, initial, InputEvent::Move(attempt));
                if attempt.shares_axis(initial) {
                    assert_eq!(command, Command::Ignore);
                } else {
                    assert_eq!(command, Command::Turn(attempt));
                }
            }
        }
    }

    #[test]
    fn test_two_turns_between_ticks_cannot_reverse() {
        let mut mapper = InputMapper::new(Direction::Right);

        // Up is accepted but not yet applied by a tick
        assert_eq!(
            mapper.resolve(Phase::Running, Direction::Right, InputEvent::Move(Direction::Up)),
            Command::Turn(Direction::Up)
        );
        // Left is off the committed axis, but would reverse the applied one
        assert_eq!(
            mapper.resolve(Phase::Running, Direction::Right, InputEvent::Move(Direction::Left)),
            Command::Ignore
        );
        assert_eq!(mapper.committed(), Direction::Up);
    }

    #[test]
    fn test_turn_back_onto_applied_direction() {
        let mut mapper = InputMapper::new(Direction::Right);

        assert_eq!(
            mapper.resolve(Phase::Running, Direction::Right, InputEvent::Move(Direction::Up)),
            Command::Turn(Direction::Up)
        );
        // Changed mind before the tick: Right is off the Up axis and no reversal
        assert_eq!(
            mapper.resolve(Phase::Running, Direction::Right, InputEvent::Move(Direction::Right)),
            Command::Turn(Direction::Right)
        );
        assert_eq!(mapper.committed(), Direction::Right);
    }

    #[test]
    fn test_paused_ignores_moves() {
        let mut mapper = InputMapper::new(Direction::Right);

        assert_eq!(
            mapper.resolve(Phase::Paused, Direction::Right, InputEvent::Move(Direction::Up)),
            Command::Ignore
        );
        assert_eq!(mapper.committed(), Direction::Right);
        assert_eq!(
            mapper.resolve(Phase::Paused, Direction::Right, InputEvent::PauseToggle),
            Command::TogglePause
        );
        assert_eq!(
            mapper.resolve(Phase::Paused, Direction::Right, InputEvent::Resume),
            Command::Resume
        );
        assert_eq!(
            mapper.resolve(Phase::Paused, Direction::Right, InputEvent::Confirm),
            Command::Resume
        );
        assert_eq!(
            mapper.resolve(Phase::Paused, Direction::Right, InputEvent::Restart),
            Command::Restart
        );
    }

    #[test]
    fn test_over_only_restarts() {
        let mut mapper = InputMapper::new(Direction::Right);

        assert_eq!(
            mapper.resolve(Phase::Over, Direction::Right, InputEvent::Move(Direction::Up)),
            Command::Ignore
        );
        assert_eq!(
            mapper.resolve(Phase::Over, Direction::Right, InputEvent::Resume),
            Command::Ignore
        );
        for event in [InputEvent::Restart, InputEvent::Confirm, InputEvent::PauseToggle] {
            assert_eq!(
                mapper.resolve(Phase::Over, Direction::Right, event),
                Command::Restart
            );
        }
    }

    #[test]
    fn test_running_controls() {
        let mut mapper = InputMapper::default();
        assert_eq!(
            mapper.resolve(Phase::Running, Direction::Right, InputEvent::PauseToggle),
            Command::TogglePause
        );
        assert_eq!(
            mapper.resolve(Phase::Running, Direction::Right, InputEvent::Confirm),
            Command::Ignore
        );
        assert_eq!(
            mapper.resolve(Phase::Running, Direction::Right, InputEvent::Restart),
            Command::Restart
        );
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut mapper = InputMapper::new(Direction::Right);
        mapper.resolve(Phase::Running, Direction::Right, InputEvent::Move(Direction::Down));
        mapper.reset();
        assert_eq!(mapper.committed(), Direction::Right);
    }
}
