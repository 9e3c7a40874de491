use gloo_utils::window;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, HtmlElement, HtmlInputElement, HtmlSelectElement};
use workout_lib::{
    capabilities::{FormSurface, Sidebar},
    form::FormValues,
    WorkoutKind,
};

use super::log_js_error;

const HIDDEN: &str = "hidden";
const ROW_HIDDEN: &str = "form__row--hidden";

#[derive(Clone)]
pub struct FormInputs {
    pub kind: HtmlSelectElement,
    pub distance: HtmlInputElement,
    pub duration: HtmlInputElement,
    pub temp: HtmlInputElement,
    pub climb: HtmlInputElement,
}

impl FormInputs {
    fn values(&self) -> FormValues {
        FormValues {
            kind: self.kind.value(),
            distance: self.distance.value(),
            duration: self.duration.value(),
            temp: self.temp.value(),
            climb: self.climb.value(),
        }
    }

    fn set_row_hidden(input: &HtmlInputElement, hidden: bool) {
        if let Some(Some(row)) = log_js_error("Finding form row", input.closest(".form__row")) {
            log_js_error("Toggling form row", row.class_list().toggle_with_force(ROW_HIDDEN, hidden));
        }
    }
}

/// The `.form` element and its inputs. Listeners live as long as the form.
pub struct DomForm {
    form: HtmlElement,
    inputs: FormInputs,
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

impl DomForm {
    pub fn new(form: HtmlElement, inputs: FormInputs) -> Self {
        Self {
            form,
            inputs,
            listeners: Vec::new(),
        }
    }

    fn listen(&mut self, target: &web_sys::EventTarget, event: &str, listener: Closure<dyn FnMut(Event)>) {
        log_js_error(
            "Adding event listener",
            target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref()),
        );
        self.listeners.push(listener);
    }
}

impl FormSurface for DomForm {
    fn show(&mut self) {
        log_js_error("Showing form", self.form.class_list().remove_1(HIDDEN));
    }

    fn hide(&mut self) {
        log_js_error("Hiding form", self.form.class_list().add_1(HIDDEN));
    }

    fn clear(&mut self) {
        for input in [&self.inputs.distance, &self.inputs.duration, &self.inputs.temp, &self.inputs.climb] {
            input.set_value("");
        }
    }

    fn focus_distance(&mut self) {
        log_js_error("Focusing distance", self.inputs.distance.focus());
    }

    fn show_kind_fields(&mut self, kind: WorkoutKind) {
        FormInputs::set_row_hidden(&self.inputs.temp, kind != WorkoutKind::Running);
        FormInputs::set_row_hidden(&self.inputs.climb, kind != WorkoutKind::Cycling);
    }

    fn on_submit(&mut self, handler: Box<dyn Fn(FormValues)>) {
        let inputs = self.inputs.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            handler(inputs.values());
        });
        let form = self.form.clone();
        self.listen(&form, "submit", listener);
    }

    fn on_kind_change(&mut self, handler: Box<dyn Fn(WorkoutKind)>) {
        let select = self.inputs.kind.clone();
        let listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            if let Ok(kind) = select.value().parse() {
                handler(kind);
            }
        });
        let select = self.inputs.kind.clone();
        self.listen(&select, "change", listener);
    }

    fn alert(&mut self, message: &str) {
        log_js_error("Alert", window().alert_with_message(message));
    }
}

/// New entries go right after the form, so the newest is on top.
pub struct DomSidebar {
    form: HtmlElement,
}

impl DomSidebar {
    pub fn new(form: HtmlElement) -> Self {
        Self { form }
    }
}

impl Sidebar for DomSidebar {
    fn insert_after_form(&mut self, html: &str) {
        log_js_error("Inserting workout", self.form.insert_adjacent_html("afterend", html));
    }
}
