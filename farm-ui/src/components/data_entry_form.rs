//! Data entry form for logging a water, fertilizer or yield reading.

use super::card::Button;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use farm_core::metric::MetricKind;
use farm_core::record::{FormInput, SubmittedRecord};

const FIELD_LABEL: &str = "display: block; font-size: 14px; font-weight: 500; margin-bottom: 4px;";
const FIELD_INPUT: &str = "width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 4px; box-sizing: border-box;";

/// Raw text of the three inputs, one signal each.
#[derive(Clone, Copy, PartialEq)]
pub struct FormFields {
    pub date: Signal<String>,
    pub amount: Signal<String>,
    pub notes: Signal<String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            date: Signal::new(String::new()),
            amount: Signal::new(String::new()),
            notes: Signal::new(String::new()),
        }
    }

    /// Snapshot of what is currently typed.
    pub fn input(&self) -> FormInput {
        FormInput {
            date: (self.date)(),
            amount: (self.amount)(),
            notes: (self.notes)(),
        }
    }

    /// The record a Submit click produces right now.
    pub fn record(&self, kind: MetricKind, now: DateTime<Utc>) -> SubmittedRecord {
        SubmittedRecord::from_input(kind, &self.input(), now)
    }
}

impl Default for FormFields {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DataEntryFormProps {
    pub kind: MetricKind,
    /// Called with the record built from the current input values
    pub on_submit: EventHandler<SubmittedRecord>,
    /// Called when the user cancels; no record is built
    pub on_cancel: EventHandler<()>,
}

/// Date, amount and notes inputs with Submit / Cancel.
///
/// Inputs are not validated. Whatever was typed is turned into a record by
/// `SubmittedRecord::from_input`, which falls back to the current time when
/// the date is empty.
#[component]
pub fn DataEntryForm(props: DataEntryFormProps) -> Element {
    let kind = props.kind;
    let on_submit = props.on_submit;
    let on_cancel = props.on_cancel;

    let mut fields = use_hook(FormFields::new);

    let submit = move |_: MouseEvent| on_submit.call(fields.record(kind, Utc::now()));

    let FormInput {
        date: date_value,
        amount: amount_value,
        notes: notes_value,
    } = fields.input();

    rsx! {
        div {
            class: "data-entry-form",
            style: "padding: 16px; border: 1px solid #e5e7eb; border-radius: 8px; background: #ffffff;",
            h3 {
                style: "font-size: 18px; font-weight: 600; margin: 0 0 16px 0;",
                "Add {kind} Data"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 16px;",
                div {
                    label { style: FIELD_LABEL, "Date" }
                    input {
                        r#type: "date",
                        name: "date",
                        style: FIELD_INPUT,
                        value: "{date_value}",
                        oninput: move |evt| fields.date.set(evt.value()),
                    }
                }
                div {
                    label { style: FIELD_LABEL, "Amount" }
                    input {
                        r#type: "number",
                        name: "amount",
                        style: FIELD_INPUT,
                        value: "{amount_value}",
                        oninput: move |evt| fields.amount.set(evt.value()),
                    }
                }
                div {
                    label { style: FIELD_LABEL, "Notes" }
                    input {
                        r#type: "text",
                        name: "notes",
                        style: FIELD_INPUT,
                        value: "{notes_value}",
                        oninput: move |evt| fields.notes.set(evt.value()),
                    }
                }
                div {
                    style: "display: flex; gap: 8px;",
                    Button { onclick: submit, "Submit" }
                    button {
                        r#type: "button",
                        style: "padding: 8px 16px; border-radius: 6px; border: 1px solid #d1d5db; background: #ffffff; cursor: pointer;",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DataEntryForm, FormFields};
    use crate::test_support::render;
    use chrono::{TimeZone, Utc};
    use dioxus::prelude::*;
    use farm_core::metric::MetricKind;
    use farm_core::record::SubmittedRecord;

    fn summarize(record: &SubmittedRecord) -> String {
        format!(
            "{}|{}|{}|{}",
            record.metric_type,
            record.date.to_rfc3339(),
            record.amount.map(|a| a.to_string()).unwrap_or_default(),
            record.notes.clone().unwrap_or_default()
        )
    }

    fn typed_water_values() -> Element {
        let summary = use_hook(|| {
            let mut fields = FormFields::new();
            fields.date.set("2024-04-02".to_string());
            fields.amount.set(" 2750.5 ".to_string());
            fields.notes.set("drip line".to_string());
            let now = Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap();
            summarize(&fields.record(MetricKind::Water, now))
        });
        rsx! { "{summary}" }
    }

    fn untouched_fields() -> Element {
        let summary = use_hook(|| {
            let fields = FormFields::new();
            let now = Utc.with_ymd_and_hms(2024, 4, 10, 12, 0, 0).unwrap();
            summarize(&fields.record(MetricKind::Fertilizer, now))
        });
        rsx! { "{summary}" }
    }

    fn yield_form() -> Element {
        rsx! {
            DataEntryForm {
                kind: MetricKind::Yield,
                on_submit: move |_| {},
                on_cancel: move |_| {},
            }
        }
    }

    #[test]
    fn test_renders_three_fields_and_actions() {
        let html = render(yield_form);
        assert!(html.contains("Add yield Data"));
        assert!(html.contains("type=\"date\""));
        assert!(html.contains("type=\"number\""));
        assert!(html.contains("type=\"text\""));
        assert!(html.contains(">Submit<"));
        assert!(html.contains(">Cancel<"));
    }

    #[test]
    fn test_submit_reads_typed_values() {
        let html = render(typed_water_values);
        assert!(
            html.contains("water|2024-04-02T00:00:00+00:00|2750.5|drip line"),
            "{}",
            html
        );
    }

    #[test]
    fn test_submit_with_untouched_fields() {
        let html = render(untouched_fields);
        assert!(html.contains("fertilizer|2024-04-10T12:00:00+00:00||"), "{}", html);
    }
}
