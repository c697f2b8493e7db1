//! The login and signup pages

use crate::components::{FormComponent, title_bar};
use crate::page::{IntoPage, Page};
use crate::route::Route;

pub const LOGIN_TITLE: &str = "ورود به پنل کاربری";
pub const SIGNUP_TITLE: &str = "ثبت نام در پنل کاربری";
/// Label of the link under both forms.
pub const SWITCH_LINK_LABEL: &str = "حساب نداری؟ ثبت ‌نام کن";

/// Title, login form and a link to `/signup`.
pub fn login_page(form: &FormComponent) -> Page {
	auth_page(LOGIN_TITLE, form, Route::Signup)
}

/// Title, signup form and a link back to `/login`.
pub fn signup_page(form: &FormComponent) -> Page {
	auth_page(SIGNUP_TITLE, form, Route::Login)
}

fn auth_page(title: &'static str, form: &FormComponent, link: Route) -> Page {
	Page::element("main")
		.attr("class", "container")
		.child(title_bar(title))
		.child(form.render())
		.child(
			Page::element("a")
				.attr("class", "rounded-full")
				.attr("href", link.path())
				.child(SWITCH_LINK_LABEL),
		)
		.into_page()
}
