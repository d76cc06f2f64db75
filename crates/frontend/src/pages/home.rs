//! Home page: the fact display and its refresh timer.

use critterfacts_core::{Countdown, Fact, RequestSequence};
use gloo::timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{FactCard, LoadingSpinner, ProgressBar};
use crate::config::FactConfig;
use crate::services::FactApiService;

pub struct FactBoard {
    fact: Option<Fact>,
    fetch_error: Option<String>,
    countdown: Countdown,
    sequence: RequestSequence,
    // Cancelled on drop, so unmounting can never leak a running tick.
    _tick: Option<Interval>,
}

pub enum Msg {
    Start,
    Tick,
    Restart,
    FactLoaded(u64, Result<Fact, String>),
}

impl Component for FactBoard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Start);
        Self {
            fact: None,
            fetch_error: None,
            countdown: Countdown::new(FactConfig::RETENTION_SECS),
            sequence: RequestSequence::new(),
            _tick: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                // Drop any previous handle before installing the next one,
                // so two starts never run two concurrent ticks.
                self._tick = None;
                self.fetch_latest(ctx);
                let link = ctx.link().clone();
                self._tick = Some(Interval::new(FactConfig::TICK_INTERVAL_MS, move || {
                    link.send_message(Msg::Tick);
                }));
                true
            }
            Msg::Tick => {
                if self.countdown.tick() {
                    // Retention window over: refresh autonomously.
                    self.countdown.reset();
                    self.fetch_latest(ctx);
                }
                true
            }
            Msg::Restart => {
                self.countdown.reset();
                ctx.link().send_message(Msg::Start);
                true
            }
            Msg::FactLoaded(seq, result) => {
                if !self.sequence.is_latest(seq) {
                    // A newer request superseded this response.
                    return false;
                }
                match result {
                    Ok(fact) => {
                        self.fact = Some(fact);
                        self.fetch_error = None;
                    }
                    Err(message) => {
                        // Keep showing the previous fact.
                        tracing::warn!(error = %message, "fact fetch failed");
                        self.fetch_error = Some(message);
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_new_fact = ctx.link().callback(|_| Msg::Restart);
        html! {
            <div class="fact-board">
                {match &self.fact {
                    Some(fact) => html! {
                        <FactCard
                            text={fact.text.clone()}
                            source={fact.source.clone()}
                            category={fact.category.clone()}
                            image={fact.image.clone()}
                        />
                    },
                    None => html! {
                        <LoadingSpinner text={Some("Fetching a fact...".to_string())} />
                    },
                }}
                if let Some(error) = &self.fetch_error {
                    <p class="fact-error">{format!("Could not refresh: {error}")}</p>
                }
                <ProgressBar
                    value={self.countdown.remaining()}
                    max={self.countdown.retention()}
                />
                <button class="new-fact" onclick={on_new_fact}>{"New fact"}</button>
            </div>
        }
    }
}

impl FactBoard {
    /// Issue a fetch tagged with the next sequence number. Stale
    /// completions are discarded in `FactLoaded`, so a slow response can
    /// never overwrite a newer fact.
    fn fetch_latest(&self, ctx: &Context<Self>) {
        let seq = self.sequence.begin();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = FactApiService::new().get_fact(None).await;
            link.send_message(Msg::FactLoaded(seq, result));
        });
    }
}
