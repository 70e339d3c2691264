use super::mem_backend::MemBackend;
use super::prompt_store::PromptStore;

pub type InMemoryStore = PromptStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        PromptStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::PromptInput;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_prompts(mut self, count: usize) -> Self {
            for i in 0..count {
                let input = PromptInput::new(
                    format!("Prompt {}", i + 1),
                    format!("Content for prompt {}", i + 1),
                );
                self.store.save(&input).unwrap();
            }
            self
        }

        pub fn with_colored_prompt(mut self, name: &str, color: &str) -> Self {
            let input = PromptInput::new(name, format!("{} content", name)).with_color(color);
            self.store.save(&input).unwrap();
            self
        }

        pub fn with_prompt(mut self, name: &str, content: &str) -> Self {
            self.store.save(&PromptInput::new(name, content)).unwrap();
            self
        }
    }
}
