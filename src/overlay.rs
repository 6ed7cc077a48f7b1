use anyhow::anyhow;
use web_sys as web;

#[inline]
pub fn find_element(element_id: &str) -> anyhow::Result<web::Element> {
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))?;
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow!("missing #{}", element_id))
}

/// Show the active shape in the status label.
#[inline]
pub fn set_status(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}
