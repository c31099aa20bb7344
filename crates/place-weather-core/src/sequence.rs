/// Hands out increasing tickets so only the newest response of a kind is applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request; every earlier ticket becomes stale.
    pub fn next_ticket(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Drops whatever is in flight without starting a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}
