use chrono::{DateTime, Utc};

/// Fuente de "ahora" para timestamps y etiquetas "hace N minutos"
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reloj real (Date.now() en wasm vía chrono/wasmbind)
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub use fixed::FixedClock;

#[cfg(test)]
mod fixed {
    use super::*;
    use chrono::Duration;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Reloj controlado para tests; los clones comparten la hora
    #[derive(Clone, Debug)]
    pub struct FixedClock {
        now: Rc<Cell<DateTime<Utc>>>,
    }

    impl FixedClock {
        pub fn at(rfc3339: &str) -> Self {
            let now = DateTime::parse_from_rfc3339(rfc3339)
                .expect("fecha de test inválida")
                .with_timezone(&Utc);
            Self { now: Rc::new(Cell::new(now)) }
        }

        pub fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }
    }
}
