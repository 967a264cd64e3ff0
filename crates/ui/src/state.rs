//! View-controller state: tab identity and the stale-response guard.
//!
//! Kept free of any DOM or framework dependency so it can be unit tested on
//! the native target.

/// The six navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    List,
    Create,
    Edit,
    Delete,
    Reserve,
    Return,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::List,
        Tab::Create,
        Tab::Edit,
        Tab::Delete,
        Tab::Reserve,
        Tab::Return,
    ];

    fn name(self) -> &'static str {
        match self {
            Tab::List => "list",
            Tab::Create => "create",
            Tab::Edit => "edit",
            Tab::Delete => "delete",
            Tab::Reserve => "reserve",
            Tab::Return => "return",
        }
    }

    /// Navigation button element id.
    pub fn button_id(self) -> String {
        format!("{}-button", self.name())
    }

    /// Panel element id; derived from the button id by suffix swap.
    pub fn panel_id(self) -> String {
        format!("{}-tab", self.name())
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::List => "Catalog",
            Tab::Create => "Register",
            Tab::Edit => "Edit",
            Tab::Delete => "Remove",
            Tab::Reserve => "Reserve",
            Tab::Return => "Return",
        }
    }
}

/// Monotonic counter identifying the view the user is looking at.
///
/// Every tab switch advances the epoch. An async load captures the token
/// before awaiting and must drop its result when the epoch has moved on, so
/// a stale in-flight response never writes into the current view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewEpoch(u64);

impl ViewEpoch {
    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn token(self) -> u64 {
        self.0
    }

    pub fn is_current(self, token: u64) -> bool {
        self.0 == token
    }
}
