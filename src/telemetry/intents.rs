//! Intent handlers.
//!
//! Each handler is a pure `SystemState -> SystemState` transition. Intents
//! whose precondition fails (everything except `toggle_power` needs power)
//! return the state unchanged rather than an error.

use super::types::{Direction, Intent, POSITION_LIMIT, Position, SystemState};

pub fn toggle_power(state: SystemState) -> SystemState {
    SystemState { power: !state.power, ..state }
}

/// Step the robot one `step` in `direction`, saturating at the grid edge.
pub fn move_robot(state: SystemState, direction: Direction, step: i32) -> SystemState {
    if !state.power {
        return state;
    }
    let (dx, dy) = direction.offset();
    let shift = |coord: i32, unit: i32| coord.saturating_add(unit.saturating_mul(step)).clamp(-POSITION_LIMIT, POSITION_LIMIT);
    SystemState {
        position: Position {
            x: shift(state.position.x, dx),
            y: shift(state.position.y, dy),
        },
        ..state
    }
}

pub fn cycle_roller(state: SystemState) -> SystemState {
    if !state.power {
        return state;
    }
    SystemState {
        roller: state.roller.next(),
        ..state
    }
}

pub fn toggle_compressor(state: SystemState) -> SystemState {
    if !state.power {
        return state;
    }
    SystemState {
        compressor: !state.compressor,
        ..state
    }
}

impl Intent {
    /// Whether the intent can take effect in `state`.
    pub fn is_allowed(self, state: &SystemState) -> bool {
        match self {
            Intent::TogglePower => true,
            Intent::Move(_) | Intent::CycleRoller | Intent::ToggleCompressor => state.power,
        }
    }

    /// Dispatch to the matching handler.
    pub fn apply(self, state: SystemState, move_step: i32) -> SystemState {
        match self {
            Intent::TogglePower => toggle_power(state),
            Intent::Move(direction) => move_robot(state, direction, move_step),
            Intent::CycleRoller => cycle_roller(state),
            Intent::ToggleCompressor => toggle_compressor(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MOVE_STEP;
    use crate::telemetry::types::Roller;
    use proptest::prelude::*;

    fn powered() -> SystemState {
        toggle_power(SystemState::default())
    }

    #[test]
    fn move_is_ignored_without_power() {
        let state = SystemState::default();
        let next = move_robot(state, Direction::Up, DEFAULT_MOVE_STEP);
        assert_eq!(next.position, Position { x: 0, y: 0 });
        assert_eq!(next, state);
    }

    #[test]
    fn move_up_saturates_at_top_edge() {
        let mut state = powered();
        assert!(state.power);

        state = move_robot(state, Direction::Up, DEFAULT_MOVE_STEP);
        assert_eq!(state.position, Position { x: 0, y: -15 });

        for _ in 0..5 {
            state = move_robot(state, Direction::Up, DEFAULT_MOVE_STEP);
        }
        assert_eq!(state.position, Position { x: 0, y: -60 });
    }

    #[test]
    fn horizontal_moves_touch_only_x() {
        let state = move_robot(powered(), Direction::Right, DEFAULT_MOVE_STEP);
        assert_eq!(state.position, Position { x: 15, y: 0 });
        let state = move_robot(state, Direction::Left, DEFAULT_MOVE_STEP);
        let state = move_robot(state, Direction::Left, DEFAULT_MOVE_STEP);
        assert_eq!(state.position, Position { x: -15, y: 0 });
        let state = move_robot(state, Direction::Down, DEFAULT_MOVE_STEP);
        assert_eq!(state.position, Position { x: -15, y: 15 });
    }

    #[test]
    fn huge_step_does_not_overflow() {
        let state = move_robot(powered(), Direction::Right, i32::MAX);
        assert_eq!(state.position.x, POSITION_LIMIT);
        let state = move_robot(state, Direction::Left, i32::MAX);
        assert_eq!(state.position.x, -POSITION_LIMIT);
    }

    #[test]
    fn roller_returns_to_off_after_three_cycles() {
        let mut state = powered();
        state = cycle_roller(state);
        assert_eq!(state.roller, Roller::In);
        state = cycle_roller(state);
        assert_eq!(state.roller, Roller::Out);
        state = cycle_roller(state);
        assert_eq!(state.roller, Roller::Off);
    }

    #[test]
    fn actuators_are_locked_without_power() {
        let state = SystemState::default();
        assert_eq!(cycle_roller(state), state);
        assert_eq!(toggle_compressor(state), state);
        for intent in [Intent::Move(Direction::Left), Intent::CycleRoller, Intent::ToggleCompressor] {
            assert!(!intent.is_allowed(&state));
        }
        assert!(Intent::TogglePower.is_allowed(&state));
    }

    #[test]
    fn power_off_keeps_actuator_state() {
        let mut state = powered();
        state = Intent::Move(Direction::Down).apply(state, DEFAULT_MOVE_STEP);
        state = Intent::CycleRoller.apply(state, DEFAULT_MOVE_STEP);
        state = Intent::ToggleCompressor.apply(state, DEFAULT_MOVE_STEP);
        state = Intent::TogglePower.apply(state, DEFAULT_MOVE_STEP);

        assert!(!state.power);
        assert_eq!(state.position, Position { x: 0, y: 15 });
        assert_eq!(state.roller, Roller::In);
        assert!(state.compressor);
        assert_eq!(state.active_roller(), Roller::Off);
        assert!(!state.compressor_active());
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(vec![Direction::Up, Direction::Down, Direction::Left, Direction::Right])
    }

    fn any_roller() -> impl Strategy<Value = Roller> {
        prop::sample::select(vec![Roller::Off, Roller::In, Roller::Out])
    }

    proptest! {
        #[test]
        fn moves_stay_inside_grid(directions in prop::collection::vec(any_direction(), 0..200), step in 1i32..100) {
            let mut state = powered();
            for direction in directions {
                state = move_robot(state, direction, step);
                prop_assert!((-POSITION_LIMIT..=POSITION_LIMIT).contains(&state.position.x));
                prop_assert!((-POSITION_LIMIT..=POSITION_LIMIT).contains(&state.position.y));
            }
        }

        #[test]
        fn unpowered_moves_never_change_state(directions in prop::collection::vec(any_direction(), 0..50)) {
            let start = SystemState::default();
            let mut state = start;
            for direction in directions {
                state = move_robot(state, direction, DEFAULT_MOVE_STEP);
            }
            prop_assert_eq!(state, start);
        }

        #[test]
        fn three_roller_cycles_are_identity(roller in any_roller(), power in any::<bool>()) {
            let state = SystemState { power, roller, ..SystemState::default() };
            let cycled = cycle_roller(cycle_roller(cycle_roller(state)));
            prop_assert_eq!(cycled, state);
        }
    }
}
