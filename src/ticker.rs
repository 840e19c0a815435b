pub struct Ticker {
    interval: f32,
    elapsed: f32,
}

impl Ticker {
    pub fn new(interval: f32) -> Ticker {
        Ticker { interval, elapsed: 0.0 }
    }

    // Returns how many whole intervals have passed. The remainder is carried
    // over so frame jitter never drifts the cadence.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.elapsed += dt;
        let mut firings = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            firings += 1;
        }
        firings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_firing_before_interval() {
        let mut ticker = Ticker::new(2.0);
        assert_eq!(ticker.advance(1.5), 0);
        assert_eq!(ticker.advance(0.25), 0);
    }

    #[test]
    fn test_fires_on_whole_interval() {
        let mut ticker = Ticker::new(2.0);
        assert_eq!(ticker.advance(2.0), 1);
        assert_eq!(ticker.advance(2.0), 1);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut ticker = Ticker::new(2.0);
        assert_eq!(ticker.advance(1.5), 0);
        assert_eq!(ticker.advance(1.0), 1); // 2.5 elapsed, 0.5 left over
        assert_eq!(ticker.advance(1.5), 1); // the leftover completes this one
    }

    #[test]
    fn test_stall_yields_discrete_catchup_firings() {
        let mut ticker = Ticker::new(2.0);
        assert_eq!(ticker.advance(7.0), 3);
        assert_eq!(ticker.advance(1.0), 1); // 1.0 was left over from the stall
    }
}
