use crate::page::{Page, SsidOption};
use crate::structs::{ConnectionRequest, Security};
use thiserror::Error;

/// Why a submission was dropped before anything was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no network selected")]
    NoSelection,
    #[error("hidden network ssid is empty")]
    MissingHiddenSsid,
    #[error("passphrase is empty")]
    MissingPassphrase,
    #[error("identity is empty")]
    MissingIdentity,
}

/// Builds the `/connect` payload from the current page state.
///
/// Checks run in a fixed order: selection, manual ssid, passphrase, identity.
/// Any option whose security is `HIDDEN` (the "Other..." entry, or a hidden
/// network reported by the backend) takes ssid and security from the manual
/// entry fields.
pub fn build_request(page: &Page) -> Result<ConnectionRequest, Rejection> {
    let option = match page.ssid_select.selected() {
        Some(SsidOption::Placeholder) | None => return Err(Rejection::NoSelection),
        Some(option) => option,
    };
    let Some(security) = option.security() else {
        return Err(Rejection::NoSelection);
    };
    if let SsidOption::Network(entry) = option {
        if entry.ssid.is_empty() || security.as_str().is_empty() {
            return Err(Rejection::NoSelection);
        }
    }

    let (ssid, security, hidden) = if *security == Security::Hidden {
        let ssid = page.hidden_ssid.value.clone();
        if ssid.is_empty() {
            return Err(Rejection::MissingHiddenSsid);
        }
        (ssid, Security::from(page.hidden_security.value()), true)
    } else {
        (option.value().to_string(), security.clone(), false)
    };

    let passphrase = if security.needs_passphrase() {
        let passphrase = page.passphrase.value.clone();
        if passphrase.is_empty() {
            return Err(Rejection::MissingPassphrase);
        }
        Some(passphrase)
    } else {
        None
    };

    let identity = if security.needs_identity() {
        let identity = page.identity.value.clone();
        if identity.is_empty() {
            return Err(Rejection::MissingIdentity);
        }
        Some(identity)
    } else {
        None
    };

    Ok(ConnectionRequest {
        ssid,
        security,
        passphrase,
        identity,
        hidden,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::NetworkEntry;
    use serde_json::json;

    fn page_with(option: SsidOption) -> Page {
        let mut page = Page::default();
        page.ssid_select.push(option);
        page
    }

    #[test]
    fn placeholder_or_empty_list_is_rejected() {
        assert_eq!(build_request(&Page::default()), Err(Rejection::NoSelection));
        assert_eq!(
            build_request(&page_with(SsidOption::Placeholder)),
            Err(Rejection::NoSelection)
        );
    }

    #[test]
    fn open_network_needs_no_credentials() {
        let mut page = page_with(SsidOption::Network(NetworkEntry::new("Guest", 10, "OPEN")));
        page.passphrase.value = "ignored".into();

        let request = build_request(&page).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "ssid": "Guest", "security": "OPEN" })
        );
    }

    #[test]
    fn secured_network_requires_passphrase() {
        let mut page = page_with(SsidOption::Network(NetworkEntry::new("Home", 80, "WPA")));
        assert_eq!(build_request(&page), Err(Rejection::MissingPassphrase));

        page.passphrase.value = "hunter22".into();
        let request = build_request(&page).unwrap();
        assert_eq!(request.passphrase.as_deref(), Some("hunter22"));
        assert_eq!(request.identity, None);
    }

    #[test]
    fn enterprise_requires_identity_after_passphrase() {
        let mut page = page_with(SsidOption::Network(NetworkEntry::new("Corp", 60, "ENTERPRISE")));
        assert_eq!(build_request(&page), Err(Rejection::MissingPassphrase));

        page.passphrase.value = "secret".into();
        assert_eq!(build_request(&page), Err(Rejection::MissingIdentity));

        page.identity.value = "alice".into();
        assert_eq!(
            serde_json::to_value(build_request(&page).unwrap()).unwrap(),
            json!({
                "ssid": "Corp",
                "security": "ENTERPRISE",
                "passphrase": "secret",
                "identity": "alice"
            })
        );
    }

    #[test]
    fn manual_entry_uses_hidden_fields() {
        let mut page = page_with(SsidOption::ManualEntry);
        page.hidden_security.set_value("WPA");
        page.passphrase.value = "pw".into();
        assert_eq!(build_request(&page), Err(Rejection::MissingHiddenSsid));

        page.hidden_ssid.value = "Attic".into();
        assert_eq!(
            serde_json::to_value(build_request(&page).unwrap()).unwrap(),
            json!({ "ssid": "Attic", "security": "WPA", "passphrase": "pw", "hidden": true })
        );
    }

    #[test]
    fn hidden_network_from_scan_uses_hidden_fields() {
        let mut page = page_with(SsidOption::Network(NetworkEntry::new("Attic", 40, "HIDDEN")));
        page.hidden_security.set_value("WPA");
        page.passphrase.value = "pw".into();
        assert_eq!(build_request(&page), Err(Rejection::MissingHiddenSsid));

        page.hidden_ssid.value = "Typed".into();
        assert_eq!(
            serde_json::to_value(build_request(&page).unwrap()).unwrap(),
            json!({ "ssid": "Typed", "security": "WPA", "passphrase": "pw", "hidden": true })
        );
    }

    #[test]
    fn hidden_network_with_empty_ssid_is_rejected() {
        let mut page = page_with(SsidOption::Network(NetworkEntry::new("", 40, "HIDDEN")));
        page.hidden_ssid.value = "Typed".into();
        assert_eq!(build_request(&page), Err(Rejection::NoSelection));
    }

    #[test]
    fn unknown_security_is_treated_as_secured() {
        let page = page_with(SsidOption::Network(NetworkEntry::new("Lab", 40, "WPA3-SAE")));
        assert_eq!(build_request(&page), Err(Rejection::MissingPassphrase));
    }
}
