//! Boundary with the distance sensor driver.

/// Timer counts per overflow of the 16-bit capture timer.
const TIMER_WRAP: f64 = 65535.0;

/// Echo round-trip time, in microseconds, per distance unit.
const MICROS_PER_UNIT: f64 = 58.2;

/// Default CPU clock of the kiosk board.
const DEFAULT_CPU_HZ: u32 = 8_000_000;

/// A source of distance readings, one per sampling tick.
///
/// Implementations pace themselves: each call blocks until the next tick
/// and returns the distance measured then. A sensor never runs out.
pub trait DistanceSensor {
    /// Takes one reading.
    fn measure(&mut self) -> f64;

    /// Returns an endless iterator of readings for the gesture decoder.
    fn samples(&mut self) -> Samples<'_, Self>
    where
        Self: Sized,
    {
        Samples { sensor: self }
    }
}

/// Endless iterator over a [`DistanceSensor`]'s readings.
#[derive(Debug)]
pub struct Samples<'a, S> {
    sensor: &'a mut S,
}

impl<S: DistanceSensor> Iterator for Samples<'_, S> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.sensor.measure())
    }
}

/// Width of a captured ultrasonic echo.
///
/// The capture timer is 16 bits wide; long echoes wrap it, so the driver
/// counts overflows alongside the final timer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EchoPulse {
    /// Timer value at the falling edge.
    pub ticks: u16,
    /// Timer overflows counted during the echo.
    pub overflows: u32,
}

impl EchoPulse {
    /// Creates a pulse from a capture.
    #[must_use]
    pub const fn new(ticks: u16, overflows: u32) -> Self {
        Self { ticks, overflows }
    }

    /// Converts the pulse into a distance, for a timer clocked at the CPU
    /// frequency with no prescaler.
    #[must_use]
    pub fn distance(&self, cpu_hz: u32) -> f64 {
        let count = f64::from(self.ticks) + TIMER_WRAP * f64::from(self.overflows);
        count / (MICROS_PER_UNIT * f64::from(cpu_hz) / 1_000_000.0)
    }

    /// Converts the pulse using the kiosk board's 8 MHz clock.
    #[must_use]
    pub fn default_distance(&self) -> f64 {
        self.distance(DEFAULT_CPU_HZ)
    }
}
