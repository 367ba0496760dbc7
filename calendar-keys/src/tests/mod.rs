#[cfg(feature = "serde")]
mod persisted;
