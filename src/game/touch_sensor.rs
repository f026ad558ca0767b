// game/touch_sensor.rs

use std::time::{Duration, Instant};

use crate::config::input::DEBOUNCE_MS;
#[cfg(feature = "gpio")]
use crate::config::input::GPIO_PIN;

#[cfg(feature = "gpio")]
use rppal::gpio::{Gpio, InputPin, Level};

/// Debounced touch-sensor input. When the `gpio` feature is off or the
/// runtime probe fails, the sensor silently degrades to never-pressed
/// and the keyboard remains the only jump source.
pub struct TouchSensor {
    #[cfg(feature = "gpio")]
    pin: Option<InputPin>,
    last_press: Option<Instant>,
}

impl TouchSensor {
    #[cfg(feature = "gpio")]
    pub fn new() -> Self {
        let pin = match Gpio::new().and_then(|gpio| gpio.get(GPIO_PIN)) {
            Ok(pin) => {
                println!("GPIO initialized. Touch sensor on pin {}", GPIO_PIN);
                // Active LOW with the internal pull-up, released on drop
                Some(pin.into_input_pullup())
            }
            Err(e) => {
                println!(
                    "Warning: GPIO setup failed: {}. Using keyboard controls instead.",
                    e
                );
                None
            }
        };
        TouchSensor {
            pin,
            last_press: None,
        }
    }

    #[cfg(not(feature = "gpio"))]
    pub fn new() -> Self {
        println!("GPIO support not compiled in. Using keyboard controls: SPACE or UP arrow to jump");
        TouchSensor { last_press: None }
    }

    /// One synchronous poll per frame. True when the sensor reads its
    /// active level and the debounce window has elapsed.
    pub fn poll(&mut self) -> bool {
        if !self.read_active() {
            return false;
        }
        accept_press(
            &mut self.last_press,
            Instant::now(),
            Duration::from_millis(DEBOUNCE_MS),
        )
    }

    #[cfg(feature = "gpio")]
    fn read_active(&self) -> bool {
        match &self.pin {
            Some(pin) => pin.read() == Level::Low,
            None => false,
        }
    }

    #[cfg(not(feature = "gpio"))]
    fn read_active(&self) -> bool {
        false
    }
}

/// Debounce gate: accept a press only when the previous accepted press
/// is at least `window` in the past, then record it.
fn accept_press(last: &mut Option<Instant>, now: Instant, window: Duration) -> bool {
    if let Some(prev) = *last {
        if now.duration_since(prev) < window {
            return false;
        }
    }
    *last = Some(now);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_press_is_accepted() {
        let mut last = None;
        assert!(accept_press(
            &mut last,
            Instant::now(),
            Duration::from_millis(200)
        ));
        assert!(last.is_some());
    }

    #[test]
    fn presses_inside_the_window_are_rejected() {
        let mut last = None;
        let t0 = Instant::now();
        let window = Duration::from_millis(200);

        assert!(accept_press(&mut last, t0, window));
        assert!(!accept_press(
            &mut last,
            t0 + Duration::from_millis(50),
            window
        ));
        assert!(!accept_press(
            &mut last,
            t0 + Duration::from_millis(199),
            window
        ));
    }

    #[test]
    fn presses_after_the_window_are_accepted() {
        let mut last = None;
        let t0 = Instant::now();
        let window = Duration::from_millis(200);

        assert!(accept_press(&mut last, t0, window));
        assert!(accept_press(
            &mut last,
            t0 + Duration::from_millis(200),
            window
        ));
        // The window restarts from the newly accepted press
        assert!(!accept_press(
            &mut last,
            t0 + Duration::from_millis(350),
            window
        ));
    }
}
