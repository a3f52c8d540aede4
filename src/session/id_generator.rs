use uuid::Uuid;

/// Identity source owned by the session. Mutation paths mint every position
/// and ledger id here instead of reaching for ambient state, so tests can
/// swap in the sequential flavor and get stable ids.
#[derive(Debug, Clone)]
pub enum IdGenerator {
    Uuid,
    Sequential(u64),
}

impl IdGenerator {
    pub fn uuid() -> Self {
        IdGenerator::Uuid
    }

    pub fn sequential() -> Self {
        IdGenerator::Sequential(0)
    }

    pub fn next_id(&mut self) -> String {
        match self {
            IdGenerator::Uuid => Uuid::new_v4().to_string(),
            IdGenerator::Sequential(counter) => {
                *counter += 1;
                counter.to_string()
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::Uuid
    }
}
