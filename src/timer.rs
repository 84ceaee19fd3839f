//! Cuenta atrás de la sesión.
//!
//! Motor puro dirigido por ticks, sin hilos internos: quien lo usa
//! (el bucle de pintado de egui) llama a `tick()` una vez por segundo
//! transcurrido. Cancelarlo en cualquier transición terminal garantiza
//! que nunca dispare después.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Cancelled,
    Expired,
}

#[derive(Debug, Clone)]
pub struct SessionTimer {
    remaining: u32,
    state: TimerState,
}

impl SessionTimer {
    pub fn new(total_secs: u32) -> Self {
        Self {
            remaining: total_secs,
            state: TimerState::Running,
        }
    }

    /// Un tick = un segundo. Devuelve `true` únicamente en el tick que
    /// agota la cuenta; después el temporizador queda parado y los ticks
    /// posteriores no hacen nada.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.state = TimerState::Expired;
            return true;
        }
        false
    }

    /// Desarma la cuenta pendiente. Un temporizador cancelado no puede
    /// disparar jamás.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Cancelled;
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// "mm:ss" para la cabecera del quiz
    pub fn remaining_label(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_one_second_per_tick() {
        let mut timer = SessionTimer::new(120);
        assert_eq!(timer.remaining(), 120);
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), 119);
        assert!(timer.is_running());
    }

    #[test]
    fn fires_exactly_once_after_total_ticks() {
        let mut timer = SessionTimer::new(120);
        let mut fired = 0;
        for _ in 0..120 {
            if timer.tick() {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(timer.remaining(), 0);
        assert_eq!(timer.state(), TimerState::Expired);

        // Ticks de más: inertes
        for _ in 0..10 {
            assert!(!timer.tick());
        }
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = SessionTimer::new(2);
        timer.tick();
        timer.cancel();
        assert_eq!(timer.state(), TimerState::Cancelled);
        for _ in 0..5 {
            assert!(!timer.tick());
        }
        // Cancelar de nuevo tampoco cambia nada
        timer.cancel();
        assert_eq!(timer.state(), TimerState::Cancelled);
    }

    #[test]
    fn cancel_after_expiry_keeps_expired_state() {
        let mut timer = SessionTimer::new(1);
        assert!(timer.tick());
        timer.cancel();
        assert_eq!(timer.state(), TimerState::Expired);
    }

    #[test]
    fn remaining_label_is_mm_ss() {
        let timer = SessionTimer::new(5 * 60 + 7);
        assert_eq!(timer.remaining_label(), "05:07");
        let timer = SessionTimer::new(0);
        assert_eq!(timer.remaining_label(), "00:00");
    }
}
