use crate::command::types::Command;
use crate::display::DisplayStyle;

fn style_suffix(style: DisplayStyle) -> &'static str {
    match style {
        DisplayStyle::Default => "",
        DisplayStyle::Spins => " as spins",
        DisplayStyle::Bits => " in binary",
    }
}

/// One-line narration printed before a command runs
///
/// Commands that describe themselves through their own output get `None`.
/// `Quit` has a description, but the console ends the session before
/// announcing it, so it is never printed there.
pub fn describe(command: &Command) -> Option<String> {
    let text = match command {
        Command::Add(n) => format!("Adding {n} quantum random bytes to the store..."),
        Command::Live(style, n) => format!(
            "Fetching {n} live quantum random bytes{}:",
            style_suffix(*style)
        ),
        Command::Observe(style, n) => format!(
            "Observing {n} bytes from the store{}:",
            style_suffix(*style)
        ),
        Command::Peek(style, n) => format!(
            "Peeking at up to {n} bytes from the store{}:",
            style_suffix(*style)
        ),
        Command::PeekAll(style) => {
            format!("Peeking at every byte in the store{}:", style_suffix(*style))
        }
        Command::Fill => "Filling the store to its target size...".to_string(),
        Command::RestoreDefaults => "Restoring default settings.".to_string(),
        Command::Reinitialize => {
            "Restoring default settings and refilling the store...".to_string()
        }
        Command::Quit => "Quitting.".to_string(),
        Command::Status | Command::Save(_) | Command::Set(..) | Command::Help => return None,
    };
    Some(text)
}
