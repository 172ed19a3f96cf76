//! Screen routing.
//!
//! A stack of [`Route`]s, the terminal equivalent of a native stack
//! navigator. The bottom entry is never popped, so there is always a screen
//! to show.

/// Bottom tab in the signed-in area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Feed of posts.
    Home,
    /// Artist booking.
    BookArtist,
    /// Dashboard.
    Dashboard,
    /// Own profile.
    Profile,
}

impl Tab {
    /// All tabs in bar order.
    pub const ALL: [Self; 4] = [Self::Home, Self::BookArtist, Self::Dashboard, Self::Profile];

    /// Label under the tab icon.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::BookArtist => "Book Artist",
            Self::Dashboard => "Dashboard",
            Self::Profile => "Profile",
        }
    }

    /// Icon name from the icon set.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "House",
            Self::BookArtist => "Sparkle",
            Self::Dashboard => "Widget",
            Self::Profile => "User",
        }
    }

    /// Position in the bar.
    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::BookArtist => 1,
            Self::Dashboard => 2,
            Self::Profile => 3,
        }
    }

    /// Tab at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A screen in the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Mobile number entry.
    Login,
    /// Passcode entry for `identifier`.
    Otp {
        /// Mobile number the code was sent to.
        identifier: String,
    },
    /// Account creation.
    Register,
    /// Signed-in area on the given tab.
    Tabs(Tab),
}

impl Route {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Otp { .. } => "otp",
            Self::Register => "register",
            Self::Tabs(Tab::Home) => "tabs/home",
            Self::Tabs(Tab::BookArtist) => "tabs/book-artist",
            Self::Tabs(Tab::Dashboard) => "tabs/dashboard",
            Self::Tabs(Tab::Profile) => "tabs/profile",
        }
    }
}

/// Route stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Navigator {
    /// Create a stack holding only `root`.
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// Route on top of the stack.
    pub fn current(&self) -> &Route {
        // The stack is never empty.
        self.stack.last().unwrap_or(&Route::Login)
    }

    /// Stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `route` on top.
    pub fn push(&mut self, route: Route) {
        tracing::debug!(from = self.current().name(), to = route.name(), "push route");
        self.stack.push(route);
    }

    /// Swap the top route for `route`.
    pub fn replace(&mut self, route: Route) {
        tracing::debug!(from = self.current().name(), to = route.name(), "replace route");
        self.stack.pop();
        self.stack.push(route);
    }

    /// Pop the top route. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Switch tabs in place when the top route is the tab area.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        match self.stack.last_mut() {
            Some(Route::Tabs(current)) => {
                *current = tab;
                true
            },
            _ => false,
        }
    }
}
