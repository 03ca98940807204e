//! Presentation-level types shared across screens

/// Top-level screens, shown as a tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Inventory,
    Suppliers,
    Transactions,
    Alerts,
    Calendar,
    Forecast,
}

impl Screen {
    pub fn all() -> [Screen; 7] {
        [
            Screen::Dashboard,
            Screen::Inventory,
            Screen::Suppliers,
            Screen::Transactions,
            Screen::Alerts,
            Screen::Calendar,
            Screen::Forecast,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Inventory => "Inventory",
            Screen::Suppliers => "Suppliers",
            Screen::Transactions => "Transactions",
            Screen::Alerts => "Alerts",
            Screen::Calendar => "Calendar",
            Screen::Forecast => "Forecast",
        }
    }

    /// Digit key that jumps straight to this screen.
    pub fn shortcut(&self) -> char {
        match self {
            Screen::Dashboard => '1',
            Screen::Inventory => '2',
            Screen::Suppliers => '3',
            Screen::Transactions => '4',
            Screen::Alerts => '5',
            Screen::Calendar => '6',
            Screen::Forecast => '7',
        }
    }

    pub fn next(&self) -> Screen {
        let all = Screen::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(&self) -> Screen {
        let all = Screen::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_cycle_round_trips() {
        for screen in Screen::all() {
            assert_eq!(screen.next().prev(), screen);
        }
    }

    #[test]
    fn test_shortcuts_unique() {
        let shortcuts: Vec<char> = Screen::all().iter().map(|s| s.shortcut()).collect();
        for (i, a) in shortcuts.iter().enumerate() {
            for b in shortcuts.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
