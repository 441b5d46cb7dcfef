use super::*;
use crate::display::DisplayStyle;

#[test]
fn test_narrated_commands() {
    let narrated = [
        Command::Add(5),
        Command::Live(DisplayStyle::Default, 5),
        Command::Observe(DisplayStyle::Spins, 5),
        Command::Peek(DisplayStyle::Bits, 5),
        Command::PeekAll(DisplayStyle::Default),
        Command::Fill,
        Command::RestoreDefaults,
        Command::Reinitialize,
        Command::Quit,
    ];
    for command in narrated {
        assert!(describe(&command).is_some(), "{command:?} should be described");
    }
}

#[test]
fn test_self_describing_commands() {
    let silent = [
        Command::Status,
        Command::Save("out.bin".to_string()),
        Command::Set(Setting::MinSize, 1),
        Command::Help,
    ];
    for command in silent {
        assert_eq!(describe(&command), None);
    }
}

#[test]
fn test_description_mentions_count_and_style() {
    let text = describe(&Command::Observe(DisplayStyle::Spins, 42)).unwrap();
    assert!(text.contains("42"));
    assert!(text.contains("spins"));

    let text = describe(&Command::Peek(DisplayStyle::Default, 3)).unwrap();
    assert_eq!(text, "Peeking at up to 3 bytes from the store:");
}

#[test]
fn test_description_is_single_line() {
    let text = describe(&Command::Live(DisplayStyle::Bits, 20)).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_help_lists_every_verb() {
    let help = help_text();
    for desc in COMMANDS {
        assert!(help.contains(desc.usage), "help is missing {}", desc.usage);
    }
    assert!(help.contains("minStoreSize"));
    assert!(help.contains("targetStoreSize"));
    assert!(help.contains("\"spins\""));
    assert!(help.contains("\"binary\""));
}

#[test]
fn test_help_is_stable() {
    assert_eq!(help_text(), help_text());
}

#[test]
fn test_descriptor_matches_aliases() {
    let quit = COMMANDS.iter().find(|d| d.name == "quit").unwrap();
    assert!(quit.matches("quit"));
    assert!(quit.matches("q"));
    assert!(!quit.matches("qu"));
}
