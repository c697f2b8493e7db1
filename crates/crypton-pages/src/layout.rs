//! Root document layout

use crate::page::{IntoPage, Page, html_escape};
use crypton_conf::{DIR, LANG, SiteSettings};

/// Wraps page content into the full RTL document.
#[derive(Debug, Clone, Default)]
pub struct Layout {
	settings: SiteSettings,
}

impl Layout {
	pub fn new(settings: SiteSettings) -> Self {
		Self { settings }
	}

	pub fn settings(&self) -> &SiteSettings {
		&self.settings
	}

	/// Two-column body: the page on one side, the hero image on the other.
	pub fn body(&self, content: Page) -> Page {
		let hero = &self.settings.hero_image;
		Page::element("main")
			.attr("class", "flex h-screen w-screen flex-row gap-64 p-64")
			.child(
				Page::element("div")
					.attr("class", "w-364 max-sm:w-full")
					.child(content),
			)
			.child(
				Page::element("div").attr("class", "w-full max-sm:hidden").child(
					Page::element("img")
						.attr("src", hero.src.clone())
						.attr("alt", hero.alt.clone())
						.attr("height", hero.height.to_string())
						.attr("width", hero.width.to_string())
						.attr(
							"class",
							"rounded-40 size-full object-cover mix-blend-luminosity",
						),
				),
			)
			.into_page()
	}

	/// Render `content` as a complete HTML document
	///
	/// # Examples
	///
	/// ```
	/// use crypton_pages::layout::Layout;
	/// use crypton_pages::page::Page;
	///
	/// let html = Layout::default().render(Page::text("سلام"));
	/// assert!(html.contains(r#"<html lang="fa" dir="rtl">"#));
	/// assert!(html.contains("<title>Crypton</title>"));
	/// ```
	pub fn render(&self, content: Page) -> String {
		let body = self.body(content).render_to_string();
		let mut html = String::with_capacity(body.len() + 512);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str(&format!("<html lang=\"{LANG}\" dir=\"{DIR}\">\n"));

		html.push_str("<head>\n");
		html.push_str("<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);
		html.push_str(&format!(
			"<title>{}</title>\n",
			html_escape(&self.settings.title)
		));
		html.push_str(&format!(
			"<meta name=\"description\" content=\"{}\">\n",
			html_escape(&self.settings.description)
		));
		html.push_str("</head>\n");

		html.push_str("<body class=\"antialiased\">\n");
		html.push_str(&body);
		html.push_str("\n</body>\n</html>\n");
		html
	}
}
