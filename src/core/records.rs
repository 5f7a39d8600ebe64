use bevy::prelude::*;

/// One completed round: the tag in force when the round ended (possibly
/// empty) and the score at the moment it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamerRecord {
    pub name: String,
    pub score: i32,
}

/// Append-only history of recorded rounds, kept in the order they were
/// played. Process lifetime only; nothing is persisted to disk. The sole
/// mutator is [`GamerLedger::record`], so entries can never be edited or
/// reordered after the fact.
#[derive(Resource, Default, Debug, Deref)]
pub struct GamerLedger(Vec<GamerRecord>);

impl GamerLedger {
    pub fn record(&mut self, name: impl Into<String>, score: i32) {
        self.0.push(GamerRecord {
            name: name.into(),
            score,
        });
    }
}
