use std::rc::Rc;

use api::wallet::run_effect;
use api::wallet::WalletEvent;
use api::wallet::WalletFlow;
use api::Web3Provider;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use futures::StreamExt;

use crate::compat;
use crate::AppState;

/// Handle to the page's wallet connection.
#[derive(Clone, Copy)]
pub struct WalletHandle {
    flow: Signal<WalletFlow>,
    events: Coroutine<WalletEvent>,
}

impl WalletHandle {
    /// Subscribe by calling `.read()` on the returned signal.
    pub fn flow(&self) -> Signal<WalletFlow> {
        self.flow
    }

    pub fn send(&self, event: WalletEvent) {
        self.events.send(event);
    }
}

/// Detects the browser wallet and runs the connection sequence.
///
/// Events are folded into the [`WalletFlow`] one at a time; each effect it asks
/// for runs as a child task whose outcome is fed back as the next event. All of
/// it is owned by the calling component and stops when it unmounts.
pub fn use_wallet() -> WalletHandle {
    let prefs = *use_context::<AppState>().prefs.purchase();
    let mut flow = use_signal(|| WalletFlow::new(&prefs));

    let events = use_coroutine(move |rx: UnboundedReceiver<WalletEvent>| async move {
        let provider = compat::detect_wallet().map(|wallet| Rc::new(Web3Provider::new(wallet)));
        let detected = provider.is_some();
        let (outcome_tx, outcomes) = futures_channel::mpsc::unbounded::<WalletEvent>();

        let mut handle = move |event: WalletEvent| {
            let effect = flow.with_mut(|flow| {
                let effect = flow.apply(event);
                debug!("wallet phase: {}", flow.phase());
                effect
            });
            if let (Some(effect), Some(provider)) = (effect, provider.clone()) {
                let outcome_tx = outcome_tx.clone();
                spawn(async move {
                    let outcome = run_effect(&provider, effect).await;
                    let _ = outcome_tx.unbounded_send(outcome);
                });
            }
        };

        handle(WalletEvent::ExtensionDetected(detected));

        let mut events = futures::stream::select(rx, outcomes);
        while let Some(event) = events.next().await {
            handle(event);
        }
    });

    WalletHandle { flow, events }
}
