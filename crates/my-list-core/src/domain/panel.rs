//! Navigation Panel Data
//!
//! Menu entries and the action slots they expose. None of the actions is
//! wired to a real subsystem yet; a host supplies a [`PanelActionHandler`]
//! once an auth or collection backend exists.

/// Something the user can trigger from the navigation panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    About,
    Login,
    Profile,
    /// Collection selected by id
    OpenCollection(String),
    NewCollection,
}

/// A fixed account/info entry at the top of the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub action: PanelAction,
}

pub const MENU_ENTRIES: [MenuEntry; 3] = [
    MenuEntry { title: "About", subtitle: "App information", action: PanelAction::About },
    MenuEntry { title: "Login", subtitle: "Access your account", action: PanelAction::Login },
    MenuEntry { title: "Profile", subtitle: "Manage settings", action: PanelAction::Profile },
];

/// Result of dispatching a panel action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Handled,
    /// No subsystem behind this action
    Unwired,
}

/// Receiver for panel actions
pub trait PanelActionHandler: Send + Sync {
    fn handle(&self, action: &PanelAction) -> ActionOutcome;
}

/// Default handler: records the action and does nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwiredActions;

impl PanelActionHandler for UnwiredActions {
    fn handle(&self, action: &PanelAction) -> ActionOutcome {
        log::debug!("[Panel] {:?} has no handler", action);
        ActionOutcome::Unwired
    }
}
