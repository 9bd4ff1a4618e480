//! In-memory model of the connect page.
//!
//! The host UI owns the screen; this module owns the state the controller
//! manipulates. Element names follow the page contract ids in [`ids`].

use crate::labels::network_label;
use crate::structs::{NetworkEntry, Security};

/// 页面约定的元素 id
pub mod ids {
    pub const SSID_SELECT: &str = "ssid-select";
    pub const HIDDEN_SECURITY: &str = "hidden-security";
    pub const CONNECT_FORM: &str = "connect-form";
    pub const CONNECT_BUTTON: &str = "connect-button";
    pub const REFRESH_NETWORKS: &str = "refresh-networks";
    pub const HIDDEN_SSID: &str = "hidden-ssid";
    pub const PASSPHRASE: &str = "passphrase";
    pub const IDENTITY: &str = "identity";
    pub const TOGGLE_PASSPHRASE: &str = "toggle-passphrase";
    pub const WIFI_INFO: &str = "wifi-info";
    pub const SUBMITTED: &str = "submitted";
}

pub const LOADING_LABEL: &str = "Loading networks... \u{a0}";
pub const MANUAL_ENTRY_LABEL: &str = "Other... \u{a0}";

/// Security choices offered for a hidden network when the config gives none.
pub const DEFAULT_HIDDEN_SECURITY_CHOICES: [&str; 5] = ["OPEN", "WEP", "WPA", "WPA2", "ENTERPRISE"];

/// One entry of the `ssid-select` dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SsidOption {
    /// Disabled "Loading networks..." entry shown while a scan is in flight.
    Placeholder,
    Network(NetworkEntry),
    /// "Other..." entry: the user types the ssid of a hidden network.
    ManualEntry,
}

impl SsidOption {
    pub fn label(&self) -> String {
        match self {
            SsidOption::Placeholder => LOADING_LABEL.to_string(),
            SsidOption::Network(entry) => network_label(entry),
            SsidOption::ManualEntry => MANUAL_ENTRY_LABEL.to_string(),
        }
    }

    /// The ssid carried by the option; empty for the synthetic entries.
    pub fn value(&self) -> &str {
        match self {
            SsidOption::Network(entry) => &entry.ssid,
            _ => "",
        }
    }

    pub fn security(&self) -> Option<&Security> {
        match self {
            SsidOption::Placeholder => None,
            SsidOption::Network(entry) => Some(&entry.security),
            SsidOption::ManualEntry => Some(&Security::Hidden),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, SsidOption::Placeholder)
    }
}

/// `ssid-select`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SsidSelect {
    options: Vec<SsidOption>,
    selected: Option<usize>,
    pub disabled: bool,
}

impl SsidSelect {
    pub fn options(&self) -> &[SsidOption] {
        &self.options
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&SsidOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    pub fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
    }

    /// Appends an option. Like a browser `<select>`, the first option added
    /// to an empty list becomes the selection.
    pub fn push(&mut self, option: SsidOption) {
        self.options.push(option);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
    }

    /// Selects the option at `index`. Disabled or missing options cannot be
    /// picked by the user and leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if self.disabled {
            return false;
        }
        match self.options.get(index) {
            Some(option) if !option.is_disabled() => {
                self.selected = Some(index);
                true
            }
            _ => false,
        }
    }
}

/// `hidden-security`: a plain list of security values for manual entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSelect {
    choices: Vec<String>,
    selected: usize,
}

impl ChoiceSelect {
    pub fn new(choices: Vec<String>) -> Self {
        Self { choices, selected: 0 }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn value(&self) -> &str {
        self.choices.get(self.selected).map(String::as_str).unwrap_or("")
    }

    /// Selects by value; unknown values are ignored.
    pub fn set_value(&mut self, value: &str) -> bool {
        match self.choices.iter().position(|c| c == value) {
            Some(i) => {
                self.selected = i;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    /// Obscured input.
    #[default]
    Password,
    Text,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub kind: InputKind,
}

impl TextInput {
    pub fn plain() -> Self {
        Self {
            value: String::new(),
            kind: InputKind::Text,
        }
    }

    pub fn obscured() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Button {
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub visible: bool,
}

/// Text inputs the user can type into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    HiddenSsid,
    Passphrase,
    Identity,
}

/// Which optional inputs the presentation should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibleFields {
    pub hidden_ssid: bool,
    pub hidden_security: bool,
    pub passphrase: bool,
    pub identity: bool,
}

/// `connect-form`. Its class markers describe the selected security class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    classes: Vec<String>,
}

impl Form {
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Overwrites every marker, mirroring an assignment to `className`.
    pub fn set_class(&mut self, class: Option<&str>) {
        self.classes.clear();
        if let Some(class) = class.filter(|c| !c.is_empty()) {
            self.classes.push(class.to_string());
        }
    }

    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn visible_fields(&self) -> VisibleFields {
        let Some(primary) = self.classes.first().map(|c| Security::from(c.as_str())) else {
            return VisibleFields::default();
        };
        let hidden = primary == Security::Hidden;
        let effective = if hidden {
            self.classes.get(1).map(|c| Security::from(c.as_str()))
        } else {
            Some(primary)
        };

        VisibleFields {
            hidden_ssid: hidden,
            hidden_security: hidden,
            passphrase: effective.as_ref().is_some_and(Security::needs_passphrase),
            identity: effective.as_ref().is_some_and(Security::needs_identity),
        }
    }
}

/// Every element of the connect page the controller touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub ssid_select: SsidSelect,
    pub hidden_security: ChoiceSelect,
    pub connect_form: Form,
    pub connect_button: Button,
    pub refresh_networks: Button,
    pub hidden_ssid: TextInput,
    pub passphrase: TextInput,
    pub identity: TextInput,
    pub toggle_passphrase: Button,
    pub wifi_info: Panel,
    pub submitted: Panel,
}

impl Page {
    pub fn new(hidden_security_choices: Vec<String>) -> Self {
        Self {
            ssid_select: SsidSelect::default(),
            hidden_security: ChoiceSelect::new(hidden_security_choices),
            connect_form: Form::default(),
            connect_button: Button::default(),
            refresh_networks: Button::default(),
            hidden_ssid: TextInput::plain(),
            passphrase: TextInput::obscured(),
            identity: TextInput::plain(),
            toggle_passphrase: Button::default(),
            wifi_info: Panel { visible: true },
            submitted: Panel { visible: false },
        }
    }

    pub fn text_input(&self, field: TextField) -> &TextInput {
        match field {
            TextField::HiddenSsid => &self.hidden_ssid,
            TextField::Passphrase => &self.passphrase,
            TextField::Identity => &self.identity,
        }
    }

    pub fn text_input_mut(&mut self, field: TextField) -> &mut TextInput {
        match field {
            TextField::HiddenSsid => &mut self.hidden_ssid,
            TextField::Passphrase => &mut self.passphrase,
            TextField::Identity => &mut self.identity,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(
            DEFAULT_HIDDEN_SECURITY_CHOICES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(classes: &[&str]) -> Form {
        let mut form = Form::default();
        form.set_class(classes.first().copied());
        for class in classes.iter().skip(1) {
            form.add_class(class);
        }
        form
    }

    #[test]
    fn first_pushed_option_is_selected() {
        let mut select = SsidSelect::default();
        select.push(SsidOption::Placeholder);
        assert_eq!(select.selected(), Some(&SsidOption::Placeholder));

        select.clear();
        assert_eq!(select.selected_index(), None);
    }

    #[test]
    fn disabled_options_cannot_be_selected() {
        let mut select = SsidSelect::default();
        select.push(SsidOption::ManualEntry);
        select.push(SsidOption::Placeholder);

        assert!(!select.select(1));
        assert!(!select.select(7));
        assert_eq!(select.selected_index(), Some(0));
    }

    #[test]
    fn set_class_overwrites_previous_markers() {
        let mut form = form_with(&["HIDDEN", "WPA"]);
        form.set_class(Some("OPEN"));
        assert_eq!(form.classes(), ["OPEN"]);
    }

    #[test]
    fn visible_fields_follow_security_class() {
        assert_eq!(form_with(&[]).visible_fields(), VisibleFields::default());
        assert_eq!(form_with(&["OPEN"]).visible_fields(), VisibleFields::default());

        let wpa = form_with(&["WPA"]).visible_fields();
        assert!(wpa.passphrase && !wpa.identity && !wpa.hidden_ssid);

        let enterprise = form_with(&["ENTERPRISE"]).visible_fields();
        assert!(enterprise.passphrase && enterprise.identity);

        let hidden_open = form_with(&["HIDDEN", "OPEN"]).visible_fields();
        assert!(hidden_open.hidden_ssid && hidden_open.hidden_security);
        assert!(!hidden_open.passphrase);

        let hidden_enterprise = form_with(&["HIDDEN", "ENTERPRISE"]).visible_fields();
        assert!(hidden_enterprise.passphrase && hidden_enterprise.identity);
    }

    #[test]
    fn synthetic_labels_end_with_space_and_nbsp() {
        assert_eq!(SsidOption::Placeholder.label(), "Loading networks... \u{a0}");
        assert_eq!(SsidOption::ManualEntry.label(), "Other... \u{a0}");
    }

    #[test]
    fn text_input_reads_the_matching_field() {
        let mut page = Page::default();
        page.text_input_mut(TextField::Identity).value = "alice".into();
        assert_eq!(page.text_input(TextField::Identity).value, "alice");
        assert!(page.text_input(TextField::Passphrase).value.is_empty());
    }

    #[test]
    fn hidden_security_ignores_unknown_values() {
        let mut page = Page::default();
        assert_eq!(page.hidden_security.value(), "OPEN");
        assert!(page.hidden_security.set_value("WPA2"));
        assert!(!page.hidden_security.set_value("BOGUS"));
        assert_eq!(page.hidden_security.value(), "WPA2");
    }
}
