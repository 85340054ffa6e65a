use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offer `contents` to the user as a file download via a temporary
/// object URL and a synthetic anchor click.
pub fn download_text_file(
    filename: &str,
    mime_type: &str,
    contents: &str,
) -> Option<()> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let parts = js_sys::Array::of1(&contents.into());
    let blob =
        Blob::new_with_str_sequence_and_options(&parts, &options).ok()?;
    let url = Url::create_object_url_with_blob(&blob).ok()?;

    let anchor: HtmlAnchorElement =
        document.create_element("a").ok()?.dyn_into().ok()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Some(())
}

pub fn download_csv(filename: &str, contents: &str) -> Option<()> {
    download_text_file(filename, "text/csv;charset=utf-8", contents)
}
