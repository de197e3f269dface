use anyhow::anyhow;
use tasklist_core::KeyValueStore;
use wasm_bindgen::JsValue;

/// `window.localStorage`, looked up on every call so a page without storage
/// access still renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
  fn storage(
    &self
  ) -> anyhow::Result<web_sys::Storage> {
    let window = web_sys::window()
      .ok_or_else(|| {
        anyhow!("no window object")
      })?;

    window
      .local_storage()
      .map_err(js_error)?
      .ok_or_else(|| {
        anyhow!(
          "localStorage is unavailable"
        )
      })
  }
}

impl KeyValueStore for BrowserStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    self
      .storage()?
      .get_item(key)
      .map_err(js_error)
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .storage()?
      .set_item(key, value)
      .map_err(js_error)
  }
}

fn js_error(
  value: JsValue
) -> anyhow::Error {
  match value.as_string() {
    | Some(message) => anyhow!(message),
    | None => anyhow!("{value:?}")
  }
}
