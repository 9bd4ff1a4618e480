use std::fmt::Write;
use wifi_connect_core::page::{InputKind, Page, TextField, TextInput, ids};

/// Draws the page as plain text, showing only the fields the form's
/// security class calls for.
pub fn render(page: &Page) -> String {
    let mut out = String::new();

    if page.submitted.visible {
        out.push_str("Connection request sent. The device is switching networks.\n");
        return out;
    }

    out.push_str("── Wi-Fi networks ──\n");
    let select = &page.ssid_select;
    for (i, option) in select.options().iter().enumerate() {
        let marker = if select.selected_index() == Some(i) { '>' } else { ' ' };
        let _ = writeln!(out, "{} {:>2}. {}", marker, i + 1, option.label());
    }
    if select.disabled {
        out.push_str("   (scanning...)\n");
    }

    let fields = page.connect_form.visible_fields();
    if fields.hidden_ssid {
        let _ = writeln!(out, "{}: {}", ids::HIDDEN_SSID, page.text_input(TextField::HiddenSsid).value);
    }
    if fields.hidden_security {
        let _ = writeln!(
            out,
            "{}: {}  [{}]",
            ids::HIDDEN_SECURITY,
            page.hidden_security.value(),
            page.hidden_security.choices().join(", ")
        );
    }
    if fields.passphrase {
        let _ = write!(out, "{}: {}", ids::PASSPHRASE, masked(page.text_input(TextField::Passphrase)));
        if !page.toggle_passphrase.disabled {
            out.push_str("  ('toggle' to show/hide)");
        }
        out.push('\n');
    }
    if fields.identity {
        let _ = writeln!(out, "{}: {}", ids::IDENTITY, page.text_input(TextField::Identity).value);
    }
    if !page.connect_button.disabled {
        out.push_str("type 'submit' to connect, 'help' for commands\n");
    }

    out
}

fn masked(input: &TextInput) -> String {
    match input.kind {
        InputKind::Text => input.value.clone(),
        InputKind::Password => "*".repeat(input.value.chars().count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wifi_connect_core::controller::{Controller, Event};
    use wifi_connect_core::structs::NetworkEntry;

    fn loaded() -> Controller {
        let mut controller = Controller::new(Page::default());
        controller.update(Event::Loaded);
        controller.update(Event::NetworksFetched(Ok(vec![
            NetworkEntry::new("Home", 80, "WPA"),
            NetworkEntry::new("Guest", 10, "OPEN"),
        ])));
        controller
    }

    #[test]
    fn lists_options_and_marks_selection() {
        let text = render(loaded().page());
        assert!(text.contains(">  1. \u{1F512}"));
        assert!(text.contains("   2. \u{1F513}"));
        assert!(text.contains("   3. Other..."));
        assert!(text.contains("passphrase: "));
        assert!(text.contains("('toggle' to show/hide)"));
        assert!(!text.contains("identity:"));
    }

    #[test]
    fn manual_entry_shows_hidden_fields() {
        let mut controller = loaded();
        controller.update(Event::SsidSelected(2));
        let text = render(controller.page());
        assert!(text.contains("hidden-ssid: "));
        assert!(text.contains("hidden-security: OPEN  [OPEN, WEP, WPA, WPA2, ENTERPRISE]"));
        assert!(!text.contains("passphrase:"));
    }

    #[test]
    fn disabled_toggle_is_not_offered() {
        let mut page = Page::default();
        page.toggle_passphrase.disabled = true;
        let mut controller = Controller::new(page);
        controller.update(Event::Loaded);
        controller.update(Event::NetworksFetched(Ok(vec![NetworkEntry::new("Home", 80, "WPA")])));

        let text = render(controller.page());
        assert!(text.contains("passphrase: "));
        assert!(!text.contains("'toggle'"));
    }

    #[test]
    fn passphrase_is_masked_until_toggled() {
        let mut controller = loaded();
        controller.update(Event::Input {
            field: TextField::Passphrase,
            value: "secret".into(),
        });
        assert!(render(controller.page()).contains("passphrase: ******"));

        controller.update(Event::TogglePassphrase);
        assert!(render(controller.page()).contains("passphrase: secret"));
    }

    #[test]
    fn placeholder_shows_scanning() {
        let mut controller = Controller::new(Page::default());
        controller.update(Event::RefreshClicked);
        let text = render(controller.page());
        assert!(text.contains("Loading networks..."));
        assert!(text.contains("(scanning...)"));
    }
}
