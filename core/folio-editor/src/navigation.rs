//! Navigation and confirmation collaborators.
//!
//! The host application owns routing and dialogs. The editor tells it when
//! to start and stop intercepting navigation, and asks it to confirm
//! destructive actions.

use tracing::debug;

/// Prompt shown when leaving an entry with unsaved changes.
pub const LEAVE_MESSAGE: &str = "Are you sure you want to leave this page?";

/// Prompt shown before deleting an entry.
pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this entry?";

/// Host routing.
pub trait NavigationService: Send + Sync {
    /// Start consulting the editor's navigation prompt before leaving.
    fn block(&self);

    /// Stop consulting the editor's navigation prompt.
    fn unblock(&self);

    /// Leave the editor for the collection's entry list.
    fn close_entry(&self, collection: &str);
}

/// Host confirmation dialog.
pub trait ConfirmPrompt: Send + Sync {
    /// Returns true when the user accepts.
    fn confirm(&self, message: &str) -> bool;
}

/// State of the in-app navigation block.
///
/// The block is armed once on activation and released exactly once: on the
/// first completed navigation, or on teardown if no navigation happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationBlock {
    #[default]
    Inactive,
    Blocking,
    Released,
}

impl NavigationBlock {
    pub fn is_blocking(self) -> bool {
        self == Self::Blocking
    }

    /// Blocks navigation if it has never been blocked.
    pub fn arm(&mut self, navigation: &dyn NavigationService) {
        if *self == Self::Inactive {
            navigation.block();
            *self = Self::Blocking;
            debug!("Navigation block armed");
        }
    }

    /// Releases the block. Returns false if it was not blocking.
    pub fn release(&mut self, navigation: &dyn NavigationService) -> bool {
        if *self != Self::Blocking {
            return false;
        }
        navigation.unblock();
        *self = Self::Released;
        debug!("Navigation block released");
        true
    }
}
