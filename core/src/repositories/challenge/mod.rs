pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod in_memory;

pub use in_memory::InMemoryChallengeStore;
pub use r#trait::ChallengeStore;
