//! Simulated telemetry random walk.
//!
//! One call to `tick` is one ticker period: the pulse counter always
//! advances, while pressures and sensors only drift when power is on. Each
//! reading moves by `(u - 0.5) * spread` with `u` uniform in [0, 1), then is
//! clamped to its range. Readings are independent of each other and of
//! previous ticks.

use rand::Rng;

use super::types::{PRESSURE_MAX, PRESSURE_MIN, PULSE_PERIOD, SENSOR_MAX, SENSOR_MIN, Sensors, SystemState};
use crate::config::PerturbationSpreads;

/// Apply one bounded random step to `value`.
pub fn perturb<R: Rng>(rng: &mut R, value: f64, spread: f64, min: f64, max: f64) -> f64 {
    let step = (rng.gen_range(0.0..1.0) - 0.5) * spread;
    (value + step).clamp(min, max)
}

/// Advance the simulation by one period.
pub fn tick<R: Rng>(state: SystemState, spreads: &PerturbationSpreads, rng: &mut R) -> SystemState {
    let pulse = (state.pulse % PULSE_PERIOD + 1) % PULSE_PERIOD;
    if !state.power {
        return SystemState { pulse, ..state };
    }

    let pressures = state.pressures.map(|p| perturb(rng, p, spreads.pressure, PRESSURE_MIN, PRESSURE_MAX));
    let sensors = Sensors {
        turgidity: perturb(rng, state.sensors.turgidity, spreads.turgidity, SENSOR_MIN, SENSOR_MAX),
        humidity: perturb(rng, state.sensors.humidity, spreads.humidity, SENSOR_MIN, SENSOR_MAX),
        gas: perturb(rng, state.sensors.gas, spreads.gas, SENSOR_MIN, SENSOR_MAX),
    };

    SystemState {
        pulse,
        pressures,
        sensors,
        ..state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn powered() -> SystemState {
        SystemState {
            power: true,
            ..SystemState::default()
        }
    }

    #[test]
    fn unpowered_tick_freezes_readings() {
        let mut rng = StdRng::seed_from_u64(7);
        let state = SystemState::default();
        let next = tick(state, &PerturbationSpreads::default(), &mut rng);

        assert_eq!(next.pulse, 1);
        // Bit-identical, not merely approximately equal.
        for (a, b) in state.pressures.iter().zip(next.pressures.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        assert_eq!(state.sensors.turgidity.to_bits(), next.sensors.turgidity.to_bits());
        assert_eq!(state.sensors.humidity.to_bits(), next.sensors.humidity.to_bits());
        assert_eq!(state.sensors.gas.to_bits(), next.sensors.gas.to_bits());
    }

    #[test]
    fn pulse_wraps_at_period() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = SystemState { pulse: 99, ..SystemState::default() };
        assert_eq!(tick(state, &PerturbationSpreads::default(), &mut rng).pulse, 0);
    }

    #[test]
    fn out_of_range_pulse_wraps_without_overflow() {
        let mut rng = StdRng::seed_from_u64(9);
        let state = SystemState { pulse: u8::MAX, ..SystemState::default() };
        let next = tick(state, &PerturbationSpreads::default(), &mut rng);
        assert_eq!(next.pulse, 56);
        assert!(next.pulse < PULSE_PERIOD);
    }

    #[test]
    fn powered_tick_moves_within_half_spread() {
        let mut rng = StdRng::seed_from_u64(42);
        let spreads = PerturbationSpreads::default();
        let state = powered();
        let next = tick(state, &spreads, &mut rng);

        for (before, after) in state.pressures.iter().zip(next.pressures.iter()) {
            assert!((after - before).abs() <= spreads.pressure / 2.0);
        }
        assert!((next.sensors.turgidity - state.sensors.turgidity).abs() <= spreads.turgidity / 2.0);
        assert!((next.sensors.humidity - state.sensors.humidity).abs() <= spreads.humidity / 2.0);
        assert!((next.sensors.gas - state.sensors.gas).abs() <= spreads.gas / 2.0);
    }

    #[test]
    fn tick_leaves_actuators_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let state = powered();
        let next = tick(state, &PerturbationSpreads::default(), &mut rng);
        assert_eq!(next.position, state.position);
        assert_eq!(next.roller, state.roller);
        assert_eq!(next.compressor, state.compressor);
        assert_eq!(next.power, state.power);
    }

    #[test]
    fn pressure_near_ceiling_never_exceeds_max() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut state = powered();
        state.pressures[0] = 495.0;
        let spreads = PerturbationSpreads { pressure: 10.0, ..PerturbationSpreads::default() };

        for _ in 0..1000 {
            state = tick(state, &spreads, &mut rng);
            assert!(state.pressures[0] <= PRESSURE_MAX, "pressure escaped: {}", state.pressures[0]);
        }
    }

    #[test]
    fn perturb_saturates_at_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let v = perturb(&mut rng, 0.0, 1000.0, 0.0, 100.0);
            assert!((0.0..=100.0).contains(&v));
        }
    }

    proptest! {
        #[test]
        fn readings_stay_clamped(seed in any::<u64>(), ticks in 1usize..500, start in 0.0f64..=500.0) {
            let mut rng = StdRng::seed_from_u64(seed);
            // Wide spreads push values into the bounds quickly.
            let spreads = PerturbationSpreads { pressure: 200.0, turgidity: 50.0, humidity: 50.0, gas: 50.0 };
            let mut state = SystemState { pressures: [start; 4], ..powered() };
            for _ in 0..ticks {
                state = tick(state, &spreads, &mut rng);
                for p in state.pressures {
                    prop_assert!((PRESSURE_MIN..=PRESSURE_MAX).contains(&p));
                }
                for v in [state.sensors.turgidity, state.sensors.humidity, state.sensors.gas] {
                    prop_assert!((SENSOR_MIN..=SENSOR_MAX).contains(&v));
                }
            }
        }

        #[test]
        fn unpowered_ticks_only_advance_pulse(seed in any::<u64>(), ticks in 1usize..300) {
            let mut rng = StdRng::seed_from_u64(seed);
            let start = SystemState::default();
            let mut state = start;
            for _ in 0..ticks {
                state = tick(state, &PerturbationSpreads::default(), &mut rng);
            }
            prop_assert_eq!(state.pulse as usize, ticks % PULSE_PERIOD as usize);
            prop_assert_eq!(SystemState { pulse: 0, ..state }, start);
        }
    }
}
