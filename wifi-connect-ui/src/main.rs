mod commands;
mod render;

use anyhow::{Context, Result};
use commands::{Action, HELP, parse_line};
use std::io::BufRead;
use std::sync::Arc;
use tokio::sync::watch;
use wifi_connect_core::config::{AppConfig, BackendConfig, embedded_config, load_config_from_file};
use wifi_connect_core::controller::{Controller, Event};
use wifi_connect_core::page::Page;
use wifi_connect_core::runtime::{EventSender, Runtime};
use wifi_connect_core::traits::NetworkApi;

const CONFIG_ENV: &str = "WIFI_CONNECT_UI_CONFIG";

// --- 1. 选择后端 API 实现 ---
#[cfg(feature = "api_mock")]
fn create_api(_config: &BackendConfig) -> Result<Arc<dyn NetworkApi>> {
    use std::time::Duration;
    use wifi_connect_core::api::mock::MockApi;

    tracing::info!("🤖 Using mock backend API");
    Ok(Arc::new(MockApi::new().with_delay(Duration::from_secs(2))))
}

#[cfg(not(feature = "api_mock"))]
fn create_api(config: &BackendConfig) -> Result<Arc<dyn NetworkApi>> {
    use wifi_connect_core::api::http::HttpApi;

    tracing::info!("🌐 Using backend at {}", config.base_url);
    let api = HttpApi::new(config).context("Failed to create HTTP client")?;
    Ok(Arc::new(api))
}

/// 配置文件路径：命令行第一个参数，其次是环境变量，都没有则使用内置配置
fn load_config() -> Result<AppConfig> {
    let path = std::env::args().nth(1).or_else(|| std::env::var(CONFIG_ENV).ok());
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path);
            load_config_from_file(&path).with_context(|| format!("Failed to load config {}", path))
        }
        None => embedded_config().context("Embedded config is invalid"),
    }
}

/// Reads commands from stdin and turns them into page events.
///
/// Runs on a plain thread: a blocking stdin read must not keep the tokio
/// runtime alive once the page is closed.
fn read_commands(events: EventSender, screen: watch::Receiver<String>) {
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("❌ Failed to read stdin: {}", e);
                break;
            }
        };
        match parse_line(&line) {
            Ok(Action::Dispatch(event)) => {
                if !events.send(event) {
                    break;
                }
            }
            Ok(Action::Show) => println!("{}", *screen.borrow()),
            Ok(Action::Help) => println!("{}", HELP),
            Ok(Action::Quit) => break,
            Err(message) => eprintln!("{}", message),
        }
    }

    events.send(Event::Close);
}

async fn run() -> Result<()> {
    let config = load_config()?;
    let api = create_api(&config.backend)?;

    let page = Page::new(config.ui.hidden_security_choices.clone());
    let controller = Controller::new(page).with_refresh_on_load(config.ui.refresh_on_start);
    let runtime = Runtime::new(controller, api);
    let events = runtime.sender();

    let (screen_tx, screen_rx) = watch::channel(String::new());
    let reader_events = events.clone();
    std::thread::spawn(move || read_commands(reader_events, screen_rx));

    events.send(Event::Loaded);
    runtime
        .run(move |page: &Page| {
            let text = render::render(page);
            println!("{}", text);
            let _ = screen_tx.send(text);
        })
        .await;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 初始化日志（这是入口点的职责），输出到 stderr 以免和页面混在一起
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // 2. 调用核心逻辑
    if let Err(e) = run().await {
        // 3. 处理顶层错误
        tracing::error!("❌ wifi-connect-ui failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
