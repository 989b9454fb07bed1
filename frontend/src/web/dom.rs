//! Tiện ích DOM lẻ: hộp xác nhận và tải file về máy

use wasm_bindgen::{JsCast, JsValue};

/// Hộp thoại xác nhận của trình duyệt. Trả `false` nếu người dùng
/// từ chối hoặc môi trường không có `window`.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Đẩy một mảng bytes xuống máy người dùng qua thẻ `<a download>`
/// trỏ vào object URL tạm.
pub fn trigger_download(bytes: &[u8], filename: &str, mime: &str) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("không lấy được document"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

/// Ngày hiện tại dạng `YYYY-MM-DD` để đóng dấu tên file xuất.
pub fn today_stamp() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.get(..10).unwrap_or_default().to_string()
}
