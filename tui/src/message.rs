#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    SelectNext,
    SelectPrevious,
    OpenSelected,
    Back,

    // Search
    StartSearch,
    SearchPush(char),
    SearchPop,
    ConfirmSearch,
    CancelSearch,
    ClearSearch,

    // Settings sheet
    OpenSettings,
    CloseSettings,
    SettingsNext,
    SettingsPrevious,
    SettingsSelect,

    // Popups
    OpenKeybinds,
    ClosePopup,

    // Detail
    OpenImage,

    // Data loading results
    RequestRefresh,
    LoadFinished,
    ShowSnackbar(String),

    // System
    Tick,
    Quit,
}
