use wifi_connect_core::controller::Event;
use wifi_connect_core::page::TextField;

/// What a line typed on stdin asks the host to do.
#[derive(Debug, PartialEq)]
pub enum Action {
    Dispatch(Event),
    /// Re-render without touching the page.
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  refresh                  rescan networks
  select <n>               pick network number n
  hidden-security <value>  security of a hidden network (OPEN, WPA, ...)
  ssid <text>              ssid of a hidden network
  passphrase <text>        network passphrase
  identity <text>          enterprise identity
  toggle                   show/hide the passphrase
  submit                   connect
  show                     print the page again
  quit                     exit";

/// Parses one line of user input.
pub fn parse_line(line: &str) -> Result<Action, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let action = match word {
        "refresh" => Action::Dispatch(Event::RefreshClicked),
        "select" => {
            let n: usize = rest
                .parse()
                .map_err(|_| format!("'{}' is not a network number", rest))?;
            if n == 0 {
                return Err("networks are numbered from 1".to_string());
            }
            Action::Dispatch(Event::SsidSelected(n - 1))
        }
        "hidden-security" => Action::Dispatch(Event::HiddenSecurityChanged(rest.to_string())),
        "ssid" => input(TextField::HiddenSsid, rest),
        "passphrase" => input(TextField::Passphrase, rest),
        "identity" => input(TextField::Identity, rest),
        "toggle" => Action::Dispatch(Event::TogglePassphrase),
        "submit" => Action::Dispatch(Event::Submit),
        "show" | "" => Action::Show,
        "help" | "?" => Action::Help,
        "quit" | "q" => Action::Quit,
        other => return Err(format!("unknown command '{}', try 'help'", other)),
    };
    Ok(action)
}

fn input(field: TextField, value: &str) -> Action {
    Action::Dispatch(Event::Input {
        field,
        value: value.to_string(),
    })
}
