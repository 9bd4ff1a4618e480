//! Single-threaded event loop for the controller.
//!
//! Events are queued on an unbounded channel and handled one at a time, so the
//! controller never needs a lock. Network calls run as spawned tasks whose
//! only side effect is posting their result back onto the queue.

use crate::controller::{Command, Controller, Event};
use crate::page::Page;
use crate::traits::NetworkApi;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Cloneable handle the host uses to feed events into the runtime.
#[derive(Debug, Clone)]
pub struct EventSender(mpsc::UnboundedSender<Event>);

impl EventSender {
    /// Queues an event. Returns `false` once the runtime has stopped.
    pub fn send(&self, event: Event) -> bool {
        self.0.send(event).is_ok()
    }
}

pub struct Runtime {
    controller: Controller,
    api: Arc<dyn NetworkApi>,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl Runtime {
    pub fn new(controller: Controller, api: Arc<dyn NetworkApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            controller,
            api,
            tx,
            rx,
        }
    }

    pub fn sender(&self) -> EventSender {
        EventSender(self.tx.clone())
    }

    /// Handles events until [`Event::Close`], calling `render` with the page
    /// once up front and again after every event.
    ///
    /// # Returns
    /// The controller, with the page as it was left.
    pub async fn run<F>(mut self, mut render: F) -> Controller
    where
        F: FnMut(&Page),
    {
        render(self.controller.page());

        while let Some(event) = self.rx.recv().await {
            let close = matches!(event, Event::Close);
            let command = self.controller.update(event);
            self.execute(command);
            render(self.controller.page());

            if close {
                tracing::info!("🛑 Page closed, stopping runtime");
                break;
            }
        }

        self.controller
    }

    fn execute(&self, command: Command) {
        match command {
            Command::None => {}
            Command::FetchNetworks => {
                let api = self.api.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = api.list_networks().await.map_err(|e| e.to_string());
                    // 接收端已关闭说明页面已经退出，结果直接丢弃
                    let _ = tx.send(Event::NetworksFetched(result));
                });
            }
            Command::Connect(request) => {
                let api = self.api.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = api.connect(&request).await.map_err(|e| e.to_string());
                    let _ = tx.send(Event::ConnectFinished(result));
                });
            }
        }
    }
}
