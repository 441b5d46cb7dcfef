use super::*;

fn render(style: DisplayStyle, bytes: &[u8]) -> String {
    let mut out = Vec::new();
    display(&mut out, style, bytes).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_style_words() {
    assert_eq!(DisplayStyle::from_word("spins"), Some(DisplayStyle::Spins));
    assert_eq!(DisplayStyle::from_word("binary"), Some(DisplayStyle::Bits));
    assert_eq!(DisplayStyle::from_word("bits"), None);
    assert_eq!(DisplayStyle::from_word("all"), None);
    assert_eq!(DisplayStyle::default(), DisplayStyle::Default);
}

#[test]
fn test_empty_run() {
    for style in [DisplayStyle::Default, DisplayStyle::Spins, DisplayStyle::Bits] {
        assert_eq!(render(style, &[]), "(no bytes)\n");
    }
}

#[test]
fn test_bits() {
    assert_eq!(render(DisplayStyle::Bits, &[0, 255, 5]), "00000000 11111111 00000101\n");
}

#[test]
fn test_bits_wraps_lines() {
    let out = render(DisplayStyle::Bits, &[1; 9]);
    assert_eq!(out.lines().count(), 2);
    assert_eq!(out.lines().nth(1), Some("00000001"));
}

#[test]
fn test_spins_msb_first() {
    assert_eq!(render(DisplayStyle::Spins, &[0b1000_0001]), "↑↓↓↓↓↓↓↑\n");
}

#[test]
fn test_default_contains_hex() {
    let out = render(DisplayStyle::Default, &[0xab, 0x01]);
    assert!(out.contains("ab"));
    assert!(out.contains("01"));
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_default_wraps_at_sixteen() {
    let out = render(DisplayStyle::Default, &[7; 17]);
    assert_eq!(out.lines().count(), 2);
}
