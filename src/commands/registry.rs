//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::CommandHandler;
use super::intent::CommandIntent;

/// Registry mapping command intents to handlers
///
/// Multiple intents can map to the same handler if they share logic. Registering a
/// second handler for an intent replaces the first.
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<CommandIntent, Arc<dyn CommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for its declared intents
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        for intent in handler.intents() {
            self.handlers.insert(*intent, Arc::clone(&handler));
        }
    }

    pub fn get(&self, intent: CommandIntent) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(&intent).cloned()
    }

    pub fn contains(&self, intent: CommandIntent) -> bool {
        self.handlers.contains_key(&intent)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
