//! Type definitions for the telemetry state machine.
//!
//! Contains the data shared between the dashboard task and the UI:
//! - `SystemState` and its parts (sensors, position, roller)
//! - Intents dispatched by the UI
//! - Channel aliases connecting the two threads
//! - Clamp ranges and default readings

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Number of pressure gauges on the robot.
pub const PRESSURE_COUNT: usize = 4;
/// Inclusive pressure range (PSI).
pub const PRESSURE_MIN: f64 = 0.0;
pub const PRESSURE_MAX: f64 = 500.0;
/// Inclusive range shared by all percentage/ppm sensors.
pub const SENSOR_MIN: f64 = 0.0;
pub const SENSOR_MAX: f64 = 100.0;
/// The robot may travel this far from the origin on either axis.
pub const POSITION_LIMIT: i32 = 60;
/// The pulse counter wraps at this value.
pub const PULSE_PERIOD: u8 = 100;

pub const DEFAULT_PRESSURES: [f64; PRESSURE_COUNT] = [120.0, 250.0, 380.0, 450.0];

/// Depth of the snapshot channel (dashboard task → UI).
pub const STATE_UPDATE_QUEUE_SIZE: usize = 100;
pub type StateUpdateChannel = embassy_sync::channel::Channel<CriticalSectionRawMutex, SystemState, STATE_UPDATE_QUEUE_SIZE>;
pub type StateUpdateReceiver = embassy_sync::channel::Receiver<'static, CriticalSectionRawMutex, SystemState, STATE_UPDATE_QUEUE_SIZE>;
pub type StateUpdateSender = embassy_sync::channel::Sender<'static, CriticalSectionRawMutex, SystemState, STATE_UPDATE_QUEUE_SIZE>;

/// Depth of the intent channel (UI → dashboard task). Intents are tiny and
/// handled immediately, so this only absorbs bursts of clicks.
pub const INTENT_QUEUE_SIZE: usize = 32;
pub type IntentChannel = embassy_sync::channel::Channel<CriticalSectionRawMutex, Intent, INTENT_QUEUE_SIZE>;
pub type IntentReceiver = embassy_sync::channel::Receiver<'static, CriticalSectionRawMutex, Intent, INTENT_QUEUE_SIZE>;
pub type IntentSender = embassy_sync::channel::Sender<'static, CriticalSectionRawMutex, Intent, INTENT_QUEUE_SIZE>;

/// Raised once to stop the dashboard task.
pub type ShutdownSignal = Signal<CriticalSectionRawMutex, ()>;

/// Direction of the roller motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Roller {
    #[default]
    Off,
    In,
    Out,
}

impl Roller {
    /// Next state on the Off → In → Out → Off ring.
    pub fn next(self) -> Self {
        match self {
            Roller::Off => Roller::In,
            Roller::In => Roller::Out,
            Roller::Out => Roller::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Roller::Off => "ROLLER: STATIC",
            Roller::In => "ROLLER: IN",
            Roller::Out => "ROLLER: OUT",
        }
    }
}

/// Movement pad direction. Screen coordinates: up decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset `(dx, dy)` for one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// User requests dispatched from the UI to the dashboard task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TogglePower,
    Move(Direction),
    CycleRoller,
    ToggleCompressor,
}

/// Simulated environment sensors, all in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensors {
    /// Plastic skin turgidity (%).
    pub turgidity: f64,
    /// Air humidity (%).
    pub humidity: f64,
    /// Gas concentration (ppm).
    pub gas: f64,
}

impl Default for Sensors {
    fn default() -> Self {
        Self {
            turgidity: 85.0,
            humidity: 62.0,
            gas: 12.0,
        }
    }
}

impl Sensors {
    pub fn get(&self, kind: SensorKind) -> f64 {
        match kind {
            SensorKind::Turgidity => self.turgidity,
            SensorKind::Humidity => self.humidity,
            SensorKind::Gas => self.gas,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Turgidity,
    Humidity,
    Gas,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [SensorKind::Turgidity, SensorKind::Humidity, SensorKind::Gas];

    pub fn label(self) -> &'static str {
        match self {
            SensorKind::Turgidity => "PLASTIC TURGIDITY",
            SensorKind::Humidity => "AIR HUMIDITY",
            SensorKind::Gas => "GAS SENSOR",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SensorKind::Turgidity | SensorKind::Humidity => "%",
            SensorKind::Gas => "ppm",
        }
    }

    /// Whether a reading is inside the healthy band for this sensor.
    ///
    /// Turgidity must stay high (> 70), humidity and gas must stay low
    /// (< 80 and < 30). Anything else is shown as an alert.
    pub fn is_nominal(self, value: f64) -> bool {
        match self {
            SensorKind::Turgidity => value > 70.0,
            SensorKind::Humidity => value < 80.0,
            SensorKind::Gas => value < 30.0,
        }
    }
}

/// Robot position on the movement grid, each axis in [-60, 60].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Complete dashboard state. Owned by a `StateStore`; everything else sees
/// copies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemState {
    /// Master enable. Gates every actuator and the telemetry random walk.
    pub power: bool,
    pub pressures: [f64; PRESSURE_COUNT],
    pub sensors: Sensors,
    /// Set by the (simulated) gamepad link, not by intents.
    pub controller_connected: bool,
    pub roller: Roller,
    pub compressor: bool,
    pub position: Position,
    /// Cosmetic animation counter, advanced every tick regardless of power.
    pub pulse: u8,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            power: false,
            pressures: DEFAULT_PRESSURES,
            sensors: Sensors::default(),
            controller_connected: true,
            roller: Roller::Off,
            compressor: false,
            position: Position::default(),
            pulse: 0,
        }
    }
}

impl SystemState {
    /// Controller indicator is lit only while powered.
    pub fn controller_active(&self) -> bool {
        self.controller_connected && self.power
    }

    pub fn compressor_active(&self) -> bool {
        self.compressor && self.power
    }

    /// Roller direction as shown to the operator. Power-off keeps the stored
    /// direction but displays the roller as static.
    pub fn active_roller(&self) -> Roller {
        if self.power { self.roller } else { Roller::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roller_cycles_through_three_states() {
        assert_eq!(Roller::Off.next(), Roller::In);
        assert_eq!(Roller::In.next(), Roller::Out);
        assert_eq!(Roller::Out.next(), Roller::Off);
        assert_eq!(Roller::Off.label(), "ROLLER: STATIC");
    }

    #[test]
    fn default_state_matches_startup_readings() {
        let state = SystemState::default();
        assert!(!state.power);
        assert_eq!(state.pressures, [120.0, 250.0, 380.0, 450.0]);
        assert_eq!(state.sensors, Sensors { turgidity: 85.0, humidity: 62.0, gas: 12.0 });
        assert_eq!(state.position, Position { x: 0, y: 0 });
        assert_eq!(state.roller, Roller::Off);
        assert!(!state.compressor);
        assert!(state.controller_connected);
    }

    #[test]
    fn displayed_actuators_are_gated_by_power() {
        let mut state = SystemState {
            roller: Roller::Out,
            compressor: true,
            ..SystemState::default()
        };
        assert!(!state.controller_active());
        assert!(!state.compressor_active());
        assert_eq!(state.active_roller(), Roller::Off);

        state.power = true;
        assert!(state.controller_active());
        assert!(state.compressor_active());
        assert_eq!(state.active_roller(), Roller::Out);
    }

    #[test]
    fn sensor_health_thresholds() {
        assert!(SensorKind::Turgidity.is_nominal(85.0));
        assert!(!SensorKind::Turgidity.is_nominal(70.0));
        assert!(SensorKind::Humidity.is_nominal(79.9));
        assert!(!SensorKind::Humidity.is_nominal(80.0));
        assert!(SensorKind::Gas.is_nominal(12.0));
        assert!(!SensorKind::Gas.is_nominal(30.0));
    }

    #[test]
    fn startup_sensors_are_all_nominal() {
        let sensors = Sensors::default();
        for kind in SensorKind::ALL {
            assert!(kind.is_nominal(sensors.get(kind)), "{} should start nominal", kind.label());
        }
    }
}
