//! Form and title components

use crate::binding::{FieldBinding, FormBinding};
use crate::page::{IntoPage, Page, PageElement};
use crypton_forms::{FieldConstraint, FieldKind};

/// Label of the submit button on both auth forms.
pub const SUBMIT_LABEL: &str = "ورود";

/// How an input is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
	Text,
	Password,
	Number,
	Select,
}

impl InputType {
	fn attr(self) -> Option<&'static str> {
		match self {
			InputType::Text | InputType::Select => None,
			InputType::Password => Some("password"),
			InputType::Number => Some("number"),
		}
	}
}

/// Presentation of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWidget {
	pub name: &'static str,
	pub placeholder: &'static str,
	pub input_type: InputType,
}

impl FieldWidget {
	pub const fn new(name: &'static str, placeholder: &'static str, input_type: InputType) -> Self {
		Self {
			name,
			placeholder,
			input_type,
		}
	}
}

pub const LOGIN_WIDGETS: [FieldWidget; 2] = [
	FieldWidget::new("username", "نام کاربری", InputType::Text),
	FieldWidget::new("password", "رمز عبور", InputType::Password),
];

pub const SIGNUP_WIDGETS: [FieldWidget; 6] = [
	FieldWidget::new("name", "نام", InputType::Text),
	FieldWidget::new("family", "نام خانوادگی", InputType::Text),
	FieldWidget::new("username", "نام کاربری", InputType::Text),
	FieldWidget::new("password", "رمز عبور", InputType::Password),
	FieldWidget::new("age", "سن", InputType::Number),
	FieldWidget::new("gender", "جنسیت", InputType::Select),
];

/// Renders a bound form with one widget per schema field.
#[derive(Debug, Clone)]
pub struct FormComponent {
	binding: FormBinding,
	widgets: Vec<FieldWidget>,
	submit_label: &'static str,
}

impl FormComponent {
	pub fn new(binding: FormBinding, widgets: impl IntoIterator<Item = FieldWidget>) -> Self {
		Self {
			binding,
			widgets: widgets.into_iter().collect(),
			submit_label: SUBMIT_LABEL,
		}
	}

	pub fn binding(&self) -> &FormBinding {
		&self.binding
	}

	fn widget(&self, name: &str) -> Option<&FieldWidget> {
		self.widgets.iter().find(|widget| widget.name == name)
	}

	/// Build the `<form>` element from the binding's current state
	///
	/// Fields render in schema order. Fields without a widget fall back to
	/// a plain text input named after the field.
	pub fn render(&self) -> Page {
		let schema = self.binding.schema();
		let items: Vec<Page> = self
			.binding
			.fields()
			.filter_map(|field| {
				let constraint = schema.constraint(field.name())?;
				Some(self.render_item(field, constraint))
			})
			.collect();

		Page::element("form")
			.attr("class", "w-full space-y-4")
			.attr("data-form", self.binding.name())
			.attr("method", "post")
			.children(items)
			.child(
				Page::element("button")
					.attr("class", "w-full")
					.attr("type", "submit")
					.child(self.submit_label),
			)
			.into_page()
	}

	fn render_item(&self, field: &FieldBinding, constraint: &FieldConstraint) -> Page {
		let (placeholder, input_type) = match self.widget(field.name()) {
			Some(widget) => (widget.placeholder, widget.input_type),
			None => ("", InputType::Text),
		};
		let control = if constraint.kind == FieldKind::Choice || input_type == InputType::Select {
			render_select(field, constraint, placeholder)
		} else {
			render_input(field, placeholder, input_type)
		};
		let message = field.error().map(|error| {
			Page::element("p")
				.attr("class", "form-message")
				.attr("id", format!("{}-error", field.name()))
				.child(error)
		});

		Page::element("div")
			.attr("class", "form-item")
			.child(control)
			.child(message)
			.into_page()
	}
}

fn render_input(
	field: &FieldBinding,
	placeholder: &'static str,
	input_type: InputType,
) -> PageElement {
	let mut input = Page::element("input")
		.attr("name", field.name().to_string())
		.attr("placeholder", placeholder);
	if let Some(kind) = input_type.attr() {
		input = input.attr("type", kind);
	}
	input = input.attr("value", field.value());
	if field.error().is_some() {
		input = input.attr("aria-invalid", "true");
	}
	input
}

fn render_select(
	field: &FieldBinding,
	constraint: &FieldConstraint,
	placeholder: &'static str,
) -> PageElement {
	let value = field.value();
	let prompt = Page::element("option")
		.attr("value", "")
		.bool_attr("disabled", true)
		.bool_attr("selected", value.is_empty())
		.child(placeholder);
	let options = constraint.choices.iter().map(|choice| {
		Page::element("option")
			.attr("value", choice.value.clone())
			.bool_attr("selected", !value.is_empty() && choice.matches(&value))
			.child(choice.label.clone())
	});

	Page::element("select")
		.attr("name", field.name().to_string())
		.child(prompt)
		.children(options)
}

/// Centered page headline.
pub fn title_bar(title: &'static str) -> Page {
	Page::element("main")
		.child(
			Page::element("h1")
				.attr("class", "headline text-center")
				.child(title),
		)
		.into_page()
}
