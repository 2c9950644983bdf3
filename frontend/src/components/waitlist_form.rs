use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::celebration::{self, Burst};
use crate::waitlist::{WaitlistEffects, WaitlistFlow};

pub enum WaitlistMsg {
    SetEmail(String),
    Submit,
    Reset,
}

/// Confetti, console log and a gloo timer that posts `Reset` back.
struct BrowserEffects<'a> {
    link: &'a Scope<WaitlistForm>,
}

impl WaitlistEffects for BrowserEffects<'_> {
    type Timer = Timeout;

    fn celebrate(&mut self) {
        if let Err(e) = celebration::fire(&Burst::default()) {
            warn!("Skipping celebration: {}", e);
        }
    }

    fn record(&mut self, email: &str) {
        // Collection endpoint goes here once there is one.
        info!("Email submitted: {}", email);
    }

    fn schedule_reset(&mut self, delay_ms: u32) -> Timeout {
        let link = self.link.clone();
        Timeout::new(delay_ms, move || {
            link.send_message(WaitlistMsg::Reset);
        })
    }
}

pub struct WaitlistForm {
    flow: WaitlistFlow<Timeout>,
}

impl Component for WaitlistForm {
    type Message = WaitlistMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: WaitlistFlow::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WaitlistMsg::SetEmail(email) => {
                self.flow.set_email(email);
                true
            }
            WaitlistMsg::Submit => self.flow.submit(&mut BrowserEffects { link: ctx.link() }),
            WaitlistMsg::Reset => {
                self.flow.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let submission = self.flow.submission();
        if submission.is_submitted() {
            return html! {
                <div class="waitlist-confirmation">
                    <div class="confirmation-icon">{"✅"}</div>
                    <h3>{"Welcome to the Future!"}</h3>
                    <p>{"We'll keep you updated on our progress."}</p>
                </div>
            };
        }

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            WaitlistMsg::Submit
        });
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            WaitlistMsg::SetEmail(input.value())
        });

        html! {
            <form class="waitlist-form" {onsubmit}>
                <div>
                    <label for="email">{"Email Address"}</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        placeholder="Enter your email"
                        value={submission.email().to_string()}
                        {oninput}
                    />
                </div>
                <button type="submit" class="waitlist-submit">{"Join the Waitlist"}</button>
            </form>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.flow.teardown();
    }
}
