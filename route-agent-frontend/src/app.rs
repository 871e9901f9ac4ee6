use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use route_agent_client::{run_submission, HttpRouteApi, RouteApi};
use route_agent_shared::config::AppConfig;
use route_agent_shared::examples::EXAMPLE_QUERIES;
use route_agent_shared::queries::HealthStatus;
use route_agent_shared::submission::{
    Completion, CompletionOutcome, FormState, NoticeId, Submission, SubmitOutcome,
};
use route_agent_shared::RouteError;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlTextAreaElement};
use yew::prelude::*;

use crate::browser::{self, RejectionListener};
use crate::components::{
    ErrorBanner, ExamplePicker, HealthBadge, HealthView, LoadingIndicator, ResultsPanel,
    SubmitButton,
};

pub enum AppMessage {
    Submit,
    Finished(Completion),
    PickExample(String),
    HideError(NoticeId),
    DismissError,
    ScrollToResults,
    Health(Result<HealthStatus, RouteError>),
    Unexpected,
}

/// The whole page: form, loading state, error banner and results.
pub struct App {
    config: AppConfig,
    api: Rc<HttpRouteApi>,
    form: FormState,
    health: HealthView,
    input_ref: NodeRef,
    results_ref: NodeRef,
    _rejections: Option<RejectionListener>,
}

impl App {
    fn schedule(&self, ctx: &Context<Self>, delay_ms: u32, msg: AppMessage) {
        let link = ctx.link().clone();
        Timeout::new(delay_ms, move || link.send_message(msg)).forget();
    }

    fn schedule_hide(&self, ctx: &Context<Self>, id: NoticeId) {
        self.schedule(ctx, self.config.error_hide_ms, AppMessage::HideError(id));
    }

    fn start(&self, ctx: &Context<Self>, submission: Submission) {
        let api = self.api.clone();
        let link = ctx.link().clone();

        spawn_local(async move {
            let completion = run_submission(api.as_ref(), submission).await;
            link.send_message(AppMessage::Finished(completion));
        });
    }
}

impl Component for App {
    type Message = AppMessage;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = AppConfig::new(&browser::page_location());
        info!("Routing backend at {}", config.endpoints.route);

        let api = Rc::new(HttpRouteApi::new(config.endpoints.clone()));
        {
            let api = api.clone();
            ctx.link()
                .send_future(async move { AppMessage::Health(api.health().await) });
        }

        let rejections = RejectionListener::install(ctx.link().callback(|()| AppMessage::Unexpected));

        Self {
            config,
            api,
            form: FormState::new(),
            health: HealthView::Checking,
            input_ref: NodeRef::default(),
            results_ref: NodeRef::default(),
            _rejections: rejections,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMessage::Submit => {
                let raw = self
                    .input_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();

                match self.form.submit(&raw) {
                    SubmitOutcome::Started(submission) => self.start(ctx, submission),
                    SubmitOutcome::Rejected(id) => self.schedule_hide(ctx, id),
                }
                true
            }
            AppMessage::Finished(completion) => match self.form.complete(completion) {
                CompletionOutcome::Rendered => {
                    self.schedule(ctx, self.config.scroll_delay_ms, AppMessage::ScrollToResults);
                    true
                }
                CompletionOutcome::Failed(id) => {
                    self.schedule_hide(ctx, id);
                    true
                }
                CompletionOutcome::Superseded => false,
            },
            AppMessage::PickExample(text) => {
                if let Some(input) = self.input_ref.cast::<HtmlTextAreaElement>() {
                    input.set_value(&text);
                    if let Err(err) = input.focus() {
                        warn!("Could not focus the route input: {:?}", err);
                    }
                }
                false
            }
            AppMessage::HideError(id) => self.form.hide_error(id),
            AppMessage::DismissError => {
                self.form.dismiss_error();
                true
            }
            AppMessage::ScrollToResults => {
                if let Some(element) = self.results_ref.cast::<Element>() {
                    browser::scroll_into_view(&element);
                }
                false
            }
            AppMessage::Health(result) => {
                self.health = match result {
                    Ok(status) if status.is_ok() => HealthView::Online {
                        service: status.service,
                        version: status.version,
                    },
                    Ok(status) => {
                        info!("Backend health is {}", status.status);
                        HealthView::Unreachable
                    }
                    Err(err) => {
                        info!("Backend health check failed: {}", err);
                        HealthView::Unreachable
                    }
                };
                true
            }
            AppMessage::Unexpected => {
                let id = self.form.show_error(&RouteError::Unexpected);
                self.schedule_hide(ctx, id);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            AppMessage::Submit
        });

        let examples = EXAMPLE_QUERIES
            .iter()
            .copied()
            .map(AttrValue::Static)
            .collect::<Vec<_>>();

        let results = self
            .form
            .results()
            .map(|route| html! { <ResultsPanel route={ route.clone() } /> })
            .unwrap_or_default();

        html! {
            <div class="container">
                <header class="header">
                    <h1>{ "🚗 Agente de Rutas" }</h1>
                    <p class="subtitle">{ "Describe tu recorrido y calculamos el orden óptimo" }</p>
                    <HealthBadge health={ self.health.clone() } />
                </header>

                <form id="routeForm" class="route-form" onsubmit={ on_submit }>
                    <textarea
                        ref={ self.input_ref.clone() }
                        id="routeInput"
                        rows="4"
                        placeholder="Ej: Estoy en Lima Centro, necesito ir a Miraflores y Barranco"
                        aria-label="Descripción de la ruta"
                    />
                    <SubmitButton loading={ self.form.is_loading() } label={ self.form.submit_label() } />
                </form>

                <ExamplePicker examples={ examples } on_pick={ link.callback(AppMessage::PickExample) } />

                <LoadingIndicator visible={ self.form.is_loading() } />
                <ErrorBanner notice={ self.form.error().cloned() } on_dismiss={ link.callback(|()| AppMessage::DismissError) } />

                <section
                    ref={ self.results_ref.clone() }
                    id="resultsContainer"
                    class={ classes!("results-container", self.form.results().is_none().then_some("hidden")) }
                >
                    { results }
                </section>
            </div>
        }
    }
}
