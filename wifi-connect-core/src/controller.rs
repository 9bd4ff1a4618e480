//! Connect page controller.
//!
//! The controller is the only writer of the [`Page`]. Every user action and
//! every finished network call arrives as an [`Event`]; handling it mutates
//! the page and returns the [`Command`] (network I/O) the runtime must run.

use crate::page::{Page, SsidOption, TextField};
use crate::request::build_request;
use crate::structs::{ConnectionRequest, NetworkEntry, Security};

/// Something that happened on the page, or a network call that finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page finished loading.
    Loaded,
    /// `refresh-networks` was clicked.
    RefreshClicked,
    /// The user picked the option at this index in `ssid-select`.
    SsidSelected(usize),
    /// The user picked a value in `hidden-security`.
    HiddenSecurityChanged(String),
    /// The user typed into one of the text inputs.
    Input { field: TextField, value: String },
    /// `toggle-passphrase` was clicked.
    TogglePassphrase,
    /// `connect-form` was submitted.
    Submit,
    /// `GET /networks` settled.
    NetworksFetched(Result<Vec<NetworkEntry>, String>),
    /// `POST /connect` settled.
    ConnectFinished(Result<serde_json::Value, String>),
    /// The page is going away; the runtime stops after this event.
    Close,
}

/// Network I/O requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    FetchNetworks,
    Connect(ConnectionRequest),
}

pub struct Controller {
    page: Page,
    refresh_on_load: bool,
}

impl Controller {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            refresh_on_load: true,
        }
    }

    /// Whether [`Event::Loaded`] triggers a refresh. On by default.
    pub fn with_refresh_on_load(mut self, refresh: bool) -> Self {
        self.refresh_on_load = refresh;
        self
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn update(&mut self, event: Event) -> Command {
        match event {
            Event::Loaded => {
                if self.refresh_on_load {
                    return self.refresh_networks();
                }
                self.show_hide_form_fields();
                Command::None
            }
            Event::RefreshClicked => {
                if self.page.refresh_networks.disabled {
                    tracing::debug!("Refresh ignored: a scan is already in flight");
                    return Command::None;
                }
                self.refresh_networks()
            }
            Event::SsidSelected(index) => {
                if self.page.ssid_select.select(index) {
                    self.show_hide_form_fields();
                }
                Command::None
            }
            Event::HiddenSecurityChanged(value) => {
                if self.page.hidden_security.set_value(&value) {
                    self.show_hide_form_fields();
                } else {
                    tracing::warn!("Unknown hidden network security '{}'", value);
                }
                Command::None
            }
            Event::Input { field, value } => {
                self.page.text_input_mut(field).value = value;
                Command::None
            }
            Event::TogglePassphrase => {
                if !self.page.toggle_passphrase.disabled {
                    self.toggle_passphrase_visibility();
                }
                Command::None
            }
            Event::Submit => self.submit(),
            Event::NetworksFetched(result) => {
                self.networks_fetched(result);
                Command::None
            }
            Event::ConnectFinished(result) => {
                match result {
                    Ok(reply) => tracing::info!("📨 Connect response: {}", reply),
                    Err(e) => tracing::error!("❌ Connect request failed: {}", e),
                }
                Command::None
            }
            Event::Close => Command::None,
        }
    }

    /// Mirrors the selected security class onto the form's class markers.
    fn show_hide_form_fields(&mut self) {
        let security = self
            .page
            .ssid_select
            .selected()
            .and_then(SsidOption::security)
            .map(|s| s.as_str().to_string());

        self.page.connect_form.set_class(security.as_deref());
        if security.as_deref() == Some(Security::Hidden.as_str()) {
            let hidden_security = self.page.hidden_security.value().to_string();
            self.page.connect_form.add_class(&hidden_security);
        }
    }

    fn refresh_networks(&mut self) -> Command {
        tracing::info!("📡 Refreshing network list...");
        self.set_controls_disabled(true);

        let select = &mut self.page.ssid_select;
        select.clear();
        select.push(SsidOption::Placeholder);
        self.show_hide_form_fields();

        Command::FetchNetworks
    }

    fn networks_fetched(&mut self, result: Result<Vec<NetworkEntry>, String>) {
        self.page.ssid_select.clear();
        match result {
            Ok(networks) => {
                tracing::info!("✅ Found {} networks", networks.len());
                for entry in networks {
                    self.page.ssid_select.push(SsidOption::Network(entry));
                }
            }
            Err(e) => tracing::error!("❌ Failed to load networks: {}", e),
        }

        // 无论成功与否都要执行的收尾
        self.page.ssid_select.push(SsidOption::ManualEntry);
        self.show_hide_form_fields();
        self.set_controls_disabled(false);
    }

    fn set_controls_disabled(&mut self, disabled: bool) {
        self.page.ssid_select.disabled = disabled;
        self.page.connect_button.disabled = disabled;
        self.page.refresh_networks.disabled = disabled;
    }

    fn submit(&mut self) -> Command {
        if self.page.connect_button.disabled {
            tracing::debug!("Submit ignored: connect button is disabled");
            return Command::None;
        }

        let request = match build_request(&self.page) {
            Ok(request) => request,
            Err(reason) => {
                tracing::debug!("Submit aborted: {}", reason);
                return Command::None;
            }
        };

        tracing::info!("🔗 Submitting connection to '{}' ({})", request.ssid, request.security);
        self.page.wifi_info.visible = false;
        self.page.submitted.visible = true;
        Command::Connect(request)
    }

    fn toggle_passphrase_visibility(&mut self) {
        use crate::page::InputKind;

        let input = &mut self.page.passphrase;
        input.kind = match input.kind {
            InputKind::Password => InputKind::Text,
            InputKind::Text => InputKind::Password,
        };
    }
}
