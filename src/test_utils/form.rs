use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_input<'a>(html: &'a Html, name: &str) -> ElementRef<'a> {
    html.select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""))
}
