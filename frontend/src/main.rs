use std::rc::Rc;

use adapters::{BrowserGeolocation, DomForm, DomSidebar, FormInputs, LeafletMap};
use gloo_console::{error, info};
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use workout_lib::{
    config::SessionConfig,
    event::{EventSink, SessionEvent},
    SessionController,
};
use yew::prelude::*;

mod adapters;

type Session = SessionController<LeafletMap, DomForm, DomSidebar>;

enum MainMsg {
    Session(SessionEvent),
}

#[derive(Default)]
struct Refs {
    form: NodeRef,
    kind: NodeRef,
    distance: NodeRef,
    duration: NodeRef,
    temp: NodeRef,
    climb: NodeRef,
    map: NodeRef,
}

struct Model {
    refs: Refs,
    session: Option<Session>,
}

impl Model {
    fn surfaces(&self) -> Option<(LeafletMap, DomForm, DomSidebar)> {
        let form = self.refs.form.cast::<HtmlElement>()?;
        let inputs = FormInputs {
            kind: self.refs.kind.cast::<HtmlSelectElement>()?,
            distance: self.refs.distance.cast::<HtmlInputElement>()?,
            duration: self.refs.duration.cast::<HtmlInputElement>()?,
            temp: self.refs.temp.cast::<HtmlInputElement>()?,
            climb: self.refs.climb.cast::<HtmlInputElement>()?,
        };
        let map = LeafletMap::new(self.refs.map.cast::<HtmlElement>()?);

        Some((map, DomForm::new(form.clone(), inputs), DomSidebar::new(form)))
    }
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            refs: Refs::default(),
            session: None,
        }
    }

    // The markup is rendered once; from then on the session edits the DOM
    // directly through its adapters.
    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let Some((map, form, sidebar)) = self.surfaces() else {
            error!("Workout form markup is missing");
            return;
        };

        let link = ctx.link().clone();
        let events: EventSink = Rc::new(move |event| link.send_message(MainMsg::Session(event)));

        let mut session = SessionController::new(SessionConfig::default(), map, form, sidebar, events);
        session.start(&mut BrowserGeolocation);
        info!("Waiting for geolocation");
        self.session = Some(session);
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::Session(event) => {
                if let Some(session) = &mut self.session {
                    session.handle(event);
                    info!(format!("{} workout(s)", session.workouts().len()));
                }
            }
        }
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let refs = &self.refs;

        html! { <>
            <div class="sidebar">
                <ul class="workouts">
                    <form class="form hidden" ref={refs.form.clone()}>
                        <div class="form__row">
                            <label class="form__label">{"Тип"}</label>
                            <select class="form__input form__input--type" ref={refs.kind.clone()}>
                                <option value="running">{"Пробіжка"}</option>
                                <option value="cycling">{"Велотренування"}</option>
                            </select>
                        </div>
                        <div class="form__row">
                            <label class="form__label">{"Відстань"}</label>
                            <input class="form__input form__input--distance" placeholder="км" ref={refs.distance.clone()} />
                        </div>
                        <div class="form__row">
                            <label class="form__label">{"Тривалість"}</label>
                            <input class="form__input form__input--duration" placeholder="хв" ref={refs.duration.clone()} />
                        </div>
                        <div class="form__row">
                            <label class="form__label">{"Темп"}</label>
                            <input class="form__input form__input--temp" placeholder="крок/хв" ref={refs.temp.clone()} />
                        </div>
                        <div class="form__row form__row--hidden">
                            <label class="form__label">{"Підйом"}</label>
                            <input class="form__input form__input--climb" placeholder="метри" ref={refs.climb.clone()} />
                        </div>
                        <button class="form__btn">{"OK"}</button>
                    </form>
                </ul>
            </div>
            <div id="map" ref={refs.map.clone()}></div>
        </> }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
