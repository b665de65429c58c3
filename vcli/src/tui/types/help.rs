//! Keybinding reference shown on the help screen

/// (screen, keys, action)
pub const HELP_ROWS: &[(&str, &str, &str)] = &[
    ("Global", "ctrl+c", "Quit from anywhere"),
    ("Home", "up/k down/j", "Move through the menu"),
    ("Home", "enter space", "Open the selected entry"),
    ("Home", "p r i t s ?", "Programs, rooms, device, tokens, service, help"),
    ("Home", "q esc", "Quit"),
    ("Programs", "n ctrl+n", "Upload a new program"),
    ("Programs", "e ctrl+e enter", "Edit the selected program"),
    ("Programs", "d ctrl+d delete", "Delete the selected program"),
    ("Programs", "c ctrl+r", "Create a room from the selected program"),
    ("Rooms", "s ctrl+s", "Start or stop the selected room"),
    ("Rooms", "r ctrl+r", "Restart the selected room"),
    ("Rooms", "d ctrl+d", "Toggle debugging"),
    ("Rooms", "n ctrl+n", "Create a new room"),
    ("Rooms", "e ctrl+e enter", "Edit the selected room"),
    ("Rooms", "x delete", "Delete the selected room"),
    ("Rooms", "i tab", "Show the room's IP table"),
    ("Authorization", "n ctrl+n", "Create an API token"),
    ("Authorization", "e ctrl+e enter", "Edit the selected token"),
    ("Authorization", "d ctrl+d delete", "Delete the selected token"),
    ("Service", "enter", "Run the selected action"),
    ("Service", "ctrl+s ctrl+n ctrl+r", "Stop, start, restart the service"),
    ("Service", "l ctrl+l", "Follow the service journal"),
    ("Forms", "tab down / shift+tab up", "Next / previous field"),
    ("Forms", "space left right", "Toggle a flag / change the program"),
    ("Forms", "enter ctrl+s", "Submit"),
    ("Forms", "ctrl+n", "Reset the form"),
    ("Dialogs", "y n enter", "Confirm, cancel, apply the highlighted choice"),
    ("Any list", "q esc", "Back"),
];
