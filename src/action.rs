//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::selection::ActionKind;
use crate::model::ui::Screen;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for polling background work
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Jump to a specific screen
    GotoScreen(Screen),
    /// Move to next screen tab
    NextScreen,
    /// Move to previous screen tab
    PrevScreen,
    /// Move to next row in the active table
    NextRow,
    /// Move to previous row in the active table
    PrevRow,
    /// Jump to first row
    FirstRow,
    /// Jump to last row
    LastRow,

    // ─────────────────────────────────────────────────────────────────────────
    // Selection & Record Workflow
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle selection of current row for bulk operations
    ToggleRowSelection,
    /// Clear all row selections
    ClearSelection,
    /// Select all visible rows
    SelectAllRows,
    /// Open the add form for the active screen
    OpenAddForm,
    /// Arm an edit or delete on the current selection
    RequestAction(ActionKind),
    /// Confirm the armed action
    ConfirmPending,
    /// Cancel the armed action and clear the selection
    CancelPending,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals & Forms
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Submit the form in the current modal
    SubmitForm,

    // ─────────────────────────────────────────────────────────────────────────
    // Data
    // ─────────────────────────────────────────────────────────────────────────
    /// Re-fetch everything from the backend
    Refresh,
    /// Write the inventory report CSV
    ExportCsv,

    // ─────────────────────────────────────────────────────────────────────────
    // Screen-local Toggles
    // ─────────────────────────────────────────────────────────────────────────
    /// Cycle the transaction kind filter (all/in/out)
    CycleFilter,
    /// Toggle the transactions calendar view
    ToggleCalendarView,
    /// Expand or collapse the highlighted alert
    ToggleAlertExpanded,

    // ─────────────────────────────────────────────────────────────────────────
    // Calendar
    // ─────────────────────────────────────────────────────────────────────────
    /// Move the day cursor by the given number of days
    CalendarMove(i64),
    /// Shift the visible month (-1 or +1)
    CalendarShiftMonth(i32),
    /// Add an event on the highlighted day
    CalendarAddEvent,
    /// Delete the event on the highlighted day
    CalendarDeleteEvent,

    // ─────────────────────────────────────────────────────────────────────────
    // Forecast
    // ─────────────────────────────────────────────────────────────────────────
    /// Validate the forecast form and post it
    SubmitForecast,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::GotoScreen(screen) => write!(f, "GotoScreen({})", screen.title()),
            Action::NextScreen => write!(f, "NextScreen"),
            Action::PrevScreen => write!(f, "PrevScreen"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::ToggleRowSelection => write!(f, "ToggleRowSelection"),
            Action::ClearSelection => write!(f, "ClearSelection"),
            Action::SelectAllRows => write!(f, "SelectAllRows"),
            Action::OpenAddForm => write!(f, "OpenAddForm"),
            Action::RequestAction(kind) => write!(f, "RequestAction({:?})", kind),
            Action::ConfirmPending => write!(f, "ConfirmPending"),
            Action::CancelPending => write!(f, "CancelPending"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::SubmitForm => write!(f, "SubmitForm"),
            Action::Refresh => write!(f, "Refresh"),
            Action::ExportCsv => write!(f, "ExportCsv"),
            Action::CycleFilter => write!(f, "CycleFilter"),
            Action::ToggleCalendarView => write!(f, "ToggleCalendarView"),
            Action::ToggleAlertExpanded => write!(f, "ToggleAlertExpanded"),
            Action::CalendarMove(days) => write!(f, "CalendarMove({})", days),
            Action::CalendarShiftMonth(delta) => write!(f, "CalendarShiftMonth({})", delta),
            Action::CalendarAddEvent => write!(f, "CalendarAddEvent"),
            Action::CalendarDeleteEvent => write!(f, "CalendarDeleteEvent"),
            Action::SubmitForecast => write!(f, "SubmitForecast"),
        }
    }
}
